use serde::{Deserialize, Serialize};

use crate::tokens::{AttrName, ClassName};

/// An element the core wants to touch, addressed by its role and its
/// position in document order within that role.
///
/// The bridge resolves targets against the elements it discovered at
/// start-up. A target that no longer resolves is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    NavPanel,
    NavToggle,
    NavLink(usize),
    TabButton(usize),
    TabPanel(usize),
    Dropdown(usize),
    DropdownToggle(usize),
    DropdownOption { dropdown: usize, option: usize },
    DropdownValue(usize),
    CarouselTrack(usize),
    ContactForm,
    FooterYear,
}

/// A single, self-contained DOM mutation.
///
/// Controllers emit a `Vec<DomCommand>` per handled event. Applying the
/// same command twice leaves the document unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomCommand {
    /// Add (`on == true`) or remove a presentation class.
    SetClass {
        target: Target,
        class: ClassName,
        on: bool,
    },

    /// Set an attribute to a string value.
    SetAttribute {
        target: Target,
        name: AttrName,
        value: String,
    },

    /// Replace the text content of an element.
    SetText { target: Target, text: String },

    /// Scroll a horizontal track by `left` pixels (negative scrolls back).
    ScrollBy {
        target: Target,
        left: f64,
        smooth: bool,
    },

    /// Show a blocking acknowledgment to the user.
    Alert { message: String },

    /// Clear every field of a form.
    ResetForm { target: Target },
}

impl DomCommand {
    pub fn set_class(target: Target, class: ClassName, on: bool) -> Self {
        Self::SetClass { target, class, on }
    }

    pub fn set_flag(target: Target, name: AttrName, on: bool) -> Self {
        Self::SetAttribute {
            target,
            name,
            value: if on { "true" } else { "false" }.to_owned(),
        }
    }

    /// The element this command writes to, if any.
    pub fn target(&self) -> Option<Target> {
        match self {
            Self::SetClass { target, .. }
            | Self::SetAttribute { target, .. }
            | Self::SetText { target, .. }
            | Self::ScrollBy { target, .. }
            | Self::ResetForm { target } => Some(*target),
            Self::Alert { .. } => None,
        }
    }
}
