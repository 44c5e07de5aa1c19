//! Widgets for the bubble sort drill.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`tiles`] | Row of numbered tiles with a highlighted pair |
//! | [`number_input`] | Bounded numeric input stepped by keys or digits |
//! | [`toggle`] | Row of mutually exclusive option buttons |
//! | [`key`] | Key bindings, the [`KeyMap`](key::KeyMap) trait, and the hint line |
//! | [`help`] | Full key-binding overlay |
//!
//! Stateful widgets implement [`bubble_runtime::Component`]; the stateless
//! ones expose a `render(&self, frame, area)` method.

pub mod help;
pub mod key;
pub mod number_input;
pub mod tiles;
pub mod toggle;
