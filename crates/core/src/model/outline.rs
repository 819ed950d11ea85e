use serde::{Deserialize, Serialize};

/// Everything the controllers need to know about the page structure,
/// discovered once at start-up.
///
/// Element order inside each list is document order; `Target` indices in
/// emitted commands refer to positions in these lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageOutline {
    /// Rendered height of `.site-header`, if the page has one.
    pub header_height: Option<f64>,
    /// Both the nav panel and its toggle button exist.
    pub has_nav: bool,
    /// `href` of each `.nav-link`.
    pub nav_links: Vec<String>,
    /// `id` of each `[data-section]`, empty when the markup omits it.
    pub sections: Vec<String>,
    pub tabs: Vec<TabOutline>,
    pub panels: Vec<PanelOutline>,
    pub dropdowns: Vec<DropdownOutline>,
    /// Number of carousels with a track and both controls present.
    pub carousels: usize,
    pub has_contact_form: bool,
    pub has_footer_year: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabOutline {
    /// The button's `data-target`.
    pub target: Option<String>,
    /// Marked active by the markup.
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelOutline {
    pub id: String,
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropdownOutline {
    /// Display label of each option.
    pub options: Vec<String>,
    /// Option the markup pre-selects.
    pub chosen: Option<usize>,
}
