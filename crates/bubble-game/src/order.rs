use std::fmt;
use std::str::FromStr;

/// Direction the player is sorting in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Smallest value first.
    #[default]
    Ascending,
    /// Largest value first.
    Descending,
}

impl SortOrder {
    /// Whether `left` may sit directly before `right` under this order.
    ///
    /// Equal values are always in order.
    pub fn in_order(self, left: u8, right: u8) -> bool {
        match self {
            SortOrder::Ascending => left <= right,
            SortOrder::Descending => left >= right,
        }
    }

    /// Stable list index: 0 for ascending, 1 for descending.
    pub fn index(self) -> usize {
        match self {
            SortOrder::Ascending => 0,
            SortOrder::Descending => 1,
        }
    }

    /// Inverse of [`index`](SortOrder::index). Anything other than 1 maps to
    /// ascending.
    pub fn from_index(index: usize) -> Self {
        if index == 1 {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        })
    }
}

/// Returned when a string names neither sort direction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort order `{0}` (expected `asc` or `desc`)")]
pub struct ParseSortOrderError(pub String);

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" | "up" => Ok(SortOrder::Ascending),
            "desc" | "descending" | "down" => Ok(SortOrder::Descending),
            _ => Err(ParseSortOrderError(s.to_string())),
        }
    }
}

/// Whether every adjacent pair of `values` satisfies `order`.
///
/// Empty and single-element slices are trivially ordered.
pub fn is_ordered(values: &[u8], order: SortOrder) -> bool {
    values.windows(2).all(|w| order.in_order(w[0], w[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascending_predicate() {
        assert!(SortOrder::Ascending.in_order(1, 2));
        assert!(SortOrder::Ascending.in_order(2, 2));
        assert!(!SortOrder::Ascending.in_order(3, 2));
    }

    #[test]
    fn descending_predicate() {
        assert!(SortOrder::Descending.in_order(2, 1));
        assert!(SortOrder::Descending.in_order(2, 2));
        assert!(!SortOrder::Descending.in_order(1, 2));
    }

    #[test]
    fn default_is_ascending() {
        assert_eq!(SortOrder::default(), SortOrder::Ascending);
    }

    #[test]
    fn index_round_trips() {
        for order in [SortOrder::Ascending, SortOrder::Descending] {
            assert_eq!(SortOrder::from_index(order.index()), order);
        }
        assert_eq!(SortOrder::from_index(7), SortOrder::Ascending);
    }

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!("asc".parse::<SortOrder>(), Ok(SortOrder::Ascending));
        assert_eq!("Ascending".parse::<SortOrder>(), Ok(SortOrder::Ascending));
        assert_eq!(" DESC ".parse::<SortOrder>(), Ok(SortOrder::Descending));
        assert_eq!("down".parse::<SortOrder>(), Ok(SortOrder::Descending));
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "sideways".parse::<SortOrder>().unwrap_err();
        assert_eq!(err, ParseSortOrderError("sideways".into()));
        assert!(err.to_string().contains("sideways"));
    }

    #[test]
    fn display_names() {
        assert_eq!(SortOrder::Ascending.to_string(), "ascending");
        assert_eq!(SortOrder::Descending.to_string(), "descending");
    }

    #[test]
    fn is_ordered_scans_whole_slice() {
        assert!(is_ordered(&[1, 2, 3, 4], SortOrder::Ascending));
        assert!(!is_ordered(&[1, 2, 4, 3], SortOrder::Ascending));
        assert!(is_ordered(&[4, 3, 2, 1], SortOrder::Descending));
        assert!(!is_ordered(&[3, 4, 2, 1], SortOrder::Descending));
        assert!(is_ordered(&[], SortOrder::Descending));
        assert!(is_ordered(&[7], SortOrder::Ascending));
    }
}
