//! CSS selectors and attribute names the bridge uses to discover the page.

pub const SITE_HEADER: &str = ".site-header";
pub const NAV_TOGGLE: &str = ".nav-toggle";
pub const NAV: &str = ".nav";
pub const NAV_LINK: &str = ".nav-link";
pub const NAV_ANCHOR: &str = "a";
pub const SECTION: &str = "[data-section]";

pub const TAB_BUTTON: &str = ".seg-btn";
pub const TAB_PANEL: &str = ".service-panel";
/// Attribute on a tab button naming the id of the panel it shows.
pub const TAB_TARGET_ATTR: &str = "data-target";

pub const DROPDOWN: &str = "[data-dropdown]";
pub const DROPDOWN_TOGGLE: &str = ".dropdown-toggle";
pub const DROPDOWN_OPTION: &str = ".dropdown-option";
pub const DROPDOWN_VALUE: &str = ".dropdown-value";

pub const CAROUSEL: &str = "[data-carousel]";
pub const CAROUSEL_TRACK: &str = ".clients-track";
pub const CAROUSEL_PREV: &str = ".car-prev";
pub const CAROUSEL_NEXT: &str = ".car-next";
pub const CAROUSEL_CARD: &str = ".client-card";

pub const CONTACT_FORM_ID: &str = "contactForm";
pub const FOOTER_YEAR_ID: &str = "year";
/// Optional `<script type="application/json">` carrying a `SiteConfig`.
pub const CONFIG_SCRIPT_ID: &str = "sitewire-config";
