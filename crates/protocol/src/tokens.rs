use serde::{Deserialize, Serialize};

/// Presentation classes toggled by the controllers. The stylesheet keys
/// every visual state off one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassName {
    /// Nav panel and dropdowns when expanded.
    Open,
    /// Current nav link, tab button, and tab panel.
    Active,
    /// Chosen dropdown option.
    Selected,
}

impl ClassName {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "is-open",
            Self::Active => "is-active",
            Self::Selected => "is-selected",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttrName {
    AriaExpanded,
    AriaSelected,
}

impl AttrName {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AriaExpanded => "aria-expanded",
            Self::AriaSelected => "aria-selected",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_names_match_stylesheet() {
        assert_eq!(ClassName::Open.as_str(), "is-open");
        assert_eq!(ClassName::Active.as_str(), "is-active");
        assert_eq!(ClassName::Selected.as_str(), "is-selected");
    }

    #[test]
    fn attribute_names_are_aria() {
        assert_eq!(AttrName::AriaExpanded.as_str(), "aria-expanded");
        assert_eq!(AttrName::AriaSelected.as_str(), "aria-selected");
    }
}
