use crate::app::Settings;
use bubble_game::{clamp_count, SortOrder, DEFAULT_COUNT};
use bubble_runtime::ProgramOptions;
use clap::Parser;
use std::path::PathBuf;

/// Perform bubble sort by hand: decide, pair by pair, whether to swap.
#[derive(Parser, Debug)]
#[command(name = "bubble-sort", version, about)]
pub struct Cli {
    /// Number of tiles to sort (clamped to 2-10).
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT as i64, allow_negative_numbers = true)]
    pub count: i64,

    /// Sort direction: asc or desc.
    #[arg(short, long, default_value = "asc")]
    pub order: SortOrder,

    /// Seed for reproducible shuffles.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Redraw rate in frames per second.
    #[arg(long, default_value_t = 30)]
    pub fps: u32,

    /// Draw in the normal screen instead of the alternate screen.
    #[arg(long)]
    pub inline: bool,

    /// Append tracing output to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `bubble_sort=trace`.
    /// RUST_LOG takes precedence when set.
    #[arg(long, default_value = "info", value_name = "FILTER")]
    pub log_level: String,
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            count: clamp_count(self.count),
            order: self.order,
            seed: self.seed,
        }
    }

    pub fn program_options(&self) -> ProgramOptions {
        ProgramOptions {
            fps: self.fps,
            alt_screen: !self.inline,
            ..ProgramOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["bubble-sort"]);
        let settings = cli.settings();
        assert_eq!(settings.count, DEFAULT_COUNT);
        assert_eq!(settings.order, SortOrder::Ascending);
        assert_eq!(settings.seed, None);

        let opts = cli.program_options();
        assert_eq!(opts.fps, 30);
        assert!(opts.alt_screen);
        assert!(cli.log_file.is_none());
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn overrides() {
        let cli = Cli::parse_from([
            "bubble-sort",
            "-n",
            "8",
            "--order",
            "desc",
            "--seed",
            "42",
            "--inline",
            "--log-file",
            "game.log",
        ]);
        let settings = cli.settings();
        assert_eq!(settings.count, 8);
        assert_eq!(settings.order, SortOrder::Descending);
        assert_eq!(settings.seed, Some(42));
        assert!(!cli.program_options().alt_screen);
        assert_eq!(cli.log_file, Some(PathBuf::from("game.log")));
    }

    #[test]
    fn count_is_clamped_not_rejected() {
        assert_eq!(Cli::parse_from(["bubble-sort", "-n", "40"]).settings().count, 10);
        assert_eq!(Cli::parse_from(["bubble-sort", "-n", "-3"]).settings().count, 2);
    }

    #[test]
    fn unknown_order_is_rejected() {
        assert!(Cli::try_parse_from(["bubble-sort", "--order", "sideways"]).is_err());
    }
}
