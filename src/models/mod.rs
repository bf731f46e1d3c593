mod budget;
mod category;
mod parsed;
mod transaction;

pub use budget::{Budget, Period};
pub use category::{Category, DEFAULT_CATEGORY};
pub use parsed::ParsedInput;
pub use transaction::Transaction;

#[cfg(test)]
mod tests;
