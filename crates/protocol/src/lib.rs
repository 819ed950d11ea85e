pub mod commands;
pub mod selectors;
pub mod tokens;
pub mod types;

pub use commands::{DomCommand, Target};
pub use tokens::{AttrName, ClassName};
pub use types::{Rect, ScrollMetrics};
