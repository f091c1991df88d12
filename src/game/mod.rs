//! Per-mode session state. Each game borrows the `Atlas` for queries and flag
//! updates and reports every guess as an outcome value for the UI to render.

pub mod naming;
pub mod path;
pub mod place;

pub use naming::{NameThemAllGame, NamingOutcome};
pub use path::{CountryPathGame, PathOutcome};
pub use place::{FindThePlaceGame, RoundResult, score_for_distance};
