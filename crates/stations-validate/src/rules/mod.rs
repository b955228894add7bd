//! Rule catalog.
//!
//! [`RuleId`] names every rule the engine runs; [`Category`] groups them for
//! reporting.

mod catalog;
mod category;

pub use catalog::RuleId;
pub use category::Category;
