mod categorize;
mod export;
mod list;

pub use categorize::categorize;
pub use export::export;
pub use list::{ListFormat, list};

const EMPTY_LIST_MESSAGE: &str = "No recipes with ingredients yet.";
