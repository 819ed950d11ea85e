use serde::Serialize;
use sitewire_protocol::{DomCommand, ScrollMetrics};
use tracing::debug;

use crate::config::SiteConfig;
use crate::controllers::{
    ActiveLinkStyler, Carousel, ContactForm, Direction, DropdownEvent, DropdownGroup, NavEvent,
    NavPanel, NavState, ObservationWindow, SectionTracker, TabGroup, footer, fragment_id,
};
use crate::model::{IntersectionEntry, PageOutline};
use crate::scheduler::{FrameTick, SettleScheduler};

/// Every controller on the page, built once from the discovered outline.
///
/// The browser bridge owns one `Site` and routes each event to the matching
/// `on_*` method; the returned commands are applied to the DOM as-is.
#[derive(Debug, Clone)]
pub struct Site {
    styler: ActiveLinkStyler,
    tracker: SectionTracker,
    resize: SettleScheduler,
    nav: NavPanel,
    tabs: TabGroup,
    dropdowns: DropdownGroup,
    carousels: Vec<Carousel>,
    contact: Option<ContactForm>,
    has_footer_year: bool,
}

/// Serializable view of the transient UI state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteSnapshot {
    pub active_section: Option<String>,
    pub nav: NavState,
    pub active_tab: Option<usize>,
    pub active_panel: Option<usize>,
    pub open_dropdown: Option<usize>,
    pub chosen_options: Vec<Option<usize>>,
    pub dropdown_values: Vec<Option<String>>,
    /// Margin of the current observation window; `None` without sections.
    pub root_margin: Option<String>,
    pub visible_sections: Vec<String>,
    pub resize_pending: bool,
}

impl Site {
    pub fn new(outline: &PageOutline, config: SiteConfig) -> Self {
        let carousels = (0..outline.carousels)
            .map(|i| Carousel::new(i, &config.carousel))
            .collect();
        Self {
            styler: ActiveLinkStyler::new(outline.nav_links.clone()),
            tracker: SectionTracker::new(
                &outline.sections,
                outline.header_height,
                &config.tracker,
            ),
            resize: SettleScheduler::new(config.tracker.settle_frames),
            nav: NavPanel::new(outline.has_nav),
            tabs: TabGroup::new(&outline.tabs, &outline.panels),
            dropdowns: DropdownGroup::new(&outline.dropdowns),
            carousels,
            contact: outline
                .has_contact_form
                .then(|| ContactForm::new(&config.contact)),
            has_footer_year: outline.has_footer_year,
        }
    }

    /// Start-up commands: the footer year and the initially active link
    /// (from the URL fragment, else the first section).
    pub fn boot(&mut self, hash: &str, year: i32) -> Vec<DomCommand> {
        let mut commands = Vec::new();
        if self.has_footer_year {
            commands.push(footer::stamp_year(year));
        }
        if let Some(id) = self.tracker.initial(hash) {
            let id = id.to_owned();
            commands.extend(self.styler.activate(&id));
        }
        debug!(commands = commands.len(), "site booted");
        commands
    }

    /// The window the section observer should use, or `None` when the page
    /// has no sections to observe.
    pub fn observation_window(&self) -> Option<&ObservationWindow> {
        (!self.tracker.is_empty()).then(|| self.tracker.window())
    }

    pub fn on_intersections(
        &mut self,
        entries: &[IntersectionEntry],
        scroll: ScrollMetrics,
    ) -> Vec<DomCommand> {
        match self.tracker.observe(entries, scroll) {
            Some(id) => {
                let id = id.to_owned();
                self.styler.activate(&id)
            }
            None => Vec::new(),
        }
    }

    /// A fragment change highlights its target directly.
    pub fn on_hash_change(&mut self, hash: &str) -> Vec<DomCommand> {
        self.styler.activate(fragment_id(hash))
    }

    /// Returns true when the host must request an animation frame.
    pub fn on_resize(&mut self) -> bool {
        !self.tracker.is_empty() && self.resize.request()
    }

    /// Advance the resize countdown. On `Fire` the header is re-measured
    /// and the tracker rebuilt; the host then re-creates its observer from
    /// [`Site::observation_window`].
    pub fn on_frame(&mut self, measure_header: impl FnOnce() -> Option<f64>) -> FrameTick {
        let tick = self.resize.on_frame();
        if tick == FrameTick::Fire {
            self.tracker.rebuild(measure_header());
        }
        tick
    }

    pub fn on_nav(&mut self, event: NavEvent) -> Vec<DomCommand> {
        self.nav.handle(event)
    }

    pub fn on_tab(&mut self, button: usize) -> Vec<DomCommand> {
        self.tabs.select(button)
    }

    pub fn on_dropdown(&mut self, event: DropdownEvent) -> Vec<DomCommand> {
        self.dropdowns.handle(event)
    }

    pub fn on_carousel(
        &self,
        index: usize,
        direction: Direction,
        card_width: Option<f64>,
    ) -> Vec<DomCommand> {
        self.carousels
            .get(index)
            .map(|c| vec![c.scroll(direction, card_width)])
            .unwrap_or_default()
    }

    pub fn on_submit(&self) -> Vec<DomCommand> {
        self.contact
            .as_ref()
            .map(ContactForm::submit)
            .unwrap_or_default()
    }

    /// Tear down deferred work before the bridge detaches.
    pub fn shutdown(&mut self) {
        self.resize.cancel();
    }

    pub fn active_section(&self) -> Option<&str> {
        self.styler.active_id()
    }

    pub fn snapshot(&self) -> SiteSnapshot {
        let sections = self.tracker.sections();
        SiteSnapshot {
            active_section: self.active_section().map(str::to_owned),
            nav: self.nav.state(),
            active_tab: self.tabs.active_button(),
            active_panel: self.tabs.active_panel(),
            open_dropdown: self.dropdowns.open_index(),
            chosen_options: (0..self.dropdowns.len())
                .map(|i| self.dropdowns.chosen(i))
                .collect(),
            dropdown_values: (0..self.dropdowns.len())
                .map(|i| self.dropdowns.value(i).map(str::to_owned))
                .collect(),
            root_margin: self.observation_window().map(ObservationWindow::root_margin),
            visible_sections: (0..sections.len())
                .filter(|&i| self.tracker.visible().ratio(i).is_some())
                .map(|i| sections[i].id.clone())
                .collect(),
            resize_pending: self.resize.is_pending(),
        }
    }
}

#[cfg(test)]
mod tests {
    use sitewire_protocol::{ClassName, Target};

    use super::*;

    fn outline() -> PageOutline {
        PageOutline {
            header_height: Some(64.0),
            has_nav: true,
            nav_links: vec!["#home".into(), "#clients".into()],
            sections: vec!["home".into(), "clients".into()],
            carousels: 1,
            has_contact_form: true,
            has_footer_year: true,
            ..PageOutline::default()
        }
    }

    #[test]
    fn boot_stamps_year_and_first_section() {
        let mut site = Site::new(&outline(), SiteConfig::default());
        let cmds = site.boot("", 2026);
        assert_eq!(cmds[0], footer::stamp_year(2026));
        assert_eq!(site.active_section(), Some("home"));
    }

    #[test]
    fn boot_honours_fragment() {
        let mut site = Site::new(&outline(), SiteConfig::default());
        site.boot("#clients", 2026);
        assert_eq!(site.active_section(), Some("clients"));
    }

    #[test]
    fn hash_change_highlights_links_without_sections() {
        let page = PageOutline {
            nav_links: vec!["#about".into(), "#contact".into()],
            ..PageOutline::default()
        };
        let mut site = Site::new(&page, SiteConfig::default());
        assert!(site.boot("", 2026).is_empty());

        let cmds = site.on_hash_change("#contact");
        assert!(cmds.contains(&DomCommand::set_class(
            Target::NavLink(1),
            ClassName::Active,
            true
        )));
        assert_eq!(site.active_section(), Some("contact"));
        assert_eq!(site.snapshot().root_margin, None);
    }

    #[test]
    fn resize_is_ignored_without_sections() {
        let mut site = Site::new(&PageOutline::default(), SiteConfig::default());
        assert!(!site.on_resize());
        assert!(site.observation_window().is_none());
    }

    #[test]
    fn resize_rebuilds_after_settling() {
        let mut site = Site::new(&outline(), SiteConfig::default());
        assert!(site.on_resize());
        assert_eq!(site.on_frame(|| Some(120.0)), FrameTick::Pending);
        assert_eq!(site.on_frame(|| Some(120.0)), FrameTick::Fire);
        let window = site.observation_window().unwrap();
        assert_eq!(window.root_margin(), "-130px 0px -55% 0px");
    }

    #[test]
    fn shutdown_cancels_pending_resize() {
        let mut site = Site::new(&outline(), SiteConfig::default());
        site.on_resize();
        site.shutdown();
        assert_eq!(site.on_frame(|| None), FrameTick::Idle);
        assert!(!site.snapshot().resize_pending);
    }

    #[test]
    fn absent_form_and_carousel_are_no_ops() {
        let site = Site::new(&PageOutline::default(), SiteConfig::default());
        assert!(site.on_submit().is_empty());
        assert!(site.on_carousel(0, Direction::Next, None).is_empty());
    }
}
