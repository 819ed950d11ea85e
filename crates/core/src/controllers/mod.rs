pub mod active_link;
pub mod carousel;
pub mod contact_form;
pub mod dropdown;
pub mod footer;
pub mod nav_panel;
pub mod section_tracker;
pub mod tabs;

pub use active_link::ActiveLinkStyler;
pub use carousel::{Carousel, Direction};
pub use contact_form::ContactForm;
pub use dropdown::{DropdownEvent, DropdownGroup};
pub use nav_panel::{NavEvent, NavPanel, NavState};
pub use section_tracker::{ObservationWindow, SectionTracker, fragment_id};
pub use tabs::TabGroup;
