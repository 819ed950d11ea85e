pub mod outline;
pub mod section;

pub use outline::{DropdownOutline, PageOutline, PanelOutline, TabOutline};
pub use section::{IntersectionEntry, Section, VisibilitySet};
