//! SpendSense core: the computation layer of a personal finance tracker.
//!
//! Free-text transaction parsing ([`parse`]), category resolution
//! ([`categorize`]), temporal bucketing ([`group`]) and budget/spend
//! aggregation ([`summary`]), plus bank CSV import ([`import`]) and
//! description autocomplete ([`suggest`]). Everything operates on plain
//! in-memory records; persistence and rendering belong to the caller.

pub mod categorize;
pub mod group;
pub mod import;
pub mod models;
pub mod parse;
pub mod suggest;
pub mod summary;

pub use models::{Budget, Category, ParsedInput, Period, Transaction};
pub use parse::InputParser;
