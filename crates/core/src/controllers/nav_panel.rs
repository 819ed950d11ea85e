use serde::Serialize;
use sitewire_protocol::{AttrName, ClassName, DomCommand, Target};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum NavState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// The hamburger button was clicked.
    ToggleClick,
    /// A link inside the panel was clicked.
    LinkClick,
    /// Any click on the document. `inside` is true when it landed in the
    /// panel or on the toggle.
    DocumentClick { inside: bool },
    Escape,
}

/// Collapsible navigation panel for narrow layouts.
#[derive(Debug, Clone, Default)]
pub struct NavPanel {
    present: bool,
    state: NavState,
}

impl NavPanel {
    /// `present` is false when the page lacks the panel or its toggle, in
    /// which case every event is ignored.
    pub fn new(present: bool) -> Self {
        Self {
            present,
            state: NavState::Closed,
        }
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn handle(&mut self, event: NavEvent) -> Vec<DomCommand> {
        if !self.present {
            return Vec::new();
        }
        match event {
            NavEvent::ToggleClick => {
                let next = match self.state {
                    NavState::Open => NavState::Closed,
                    NavState::Closed => NavState::Open,
                };
                self.set(next)
            }
            NavEvent::DocumentClick { inside } => {
                if self.state == NavState::Open && !inside {
                    self.set(NavState::Closed)
                } else {
                    Vec::new()
                }
            }
            NavEvent::LinkClick | NavEvent::Escape => self.set(NavState::Closed),
        }
    }

    fn set(&mut self, state: NavState) -> Vec<DomCommand> {
        if self.state != state {
            debug!(?state, "nav panel");
        }
        self.state = state;
        let open = state == NavState::Open;
        vec![
            DomCommand::set_class(Target::NavPanel, ClassName::Open, open),
            DomCommand::set_flag(Target::NavToggle, AttrName::AriaExpanded, open),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opened() -> NavPanel {
        let mut nav = NavPanel::new(true);
        nav.handle(NavEvent::ToggleClick);
        nav
    }

    #[test]
    fn toggle_flips_state() {
        let mut nav = NavPanel::new(true);
        assert_eq!(nav.state(), NavState::Closed);
        let cmds = nav.handle(NavEvent::ToggleClick);
        assert_eq!(nav.state(), NavState::Open);
        assert_eq!(
            cmds,
            vec![
                DomCommand::set_class(Target::NavPanel, ClassName::Open, true),
                DomCommand::set_flag(Target::NavToggle, AttrName::AriaExpanded, true),
            ]
        );
        nav.handle(NavEvent::ToggleClick);
        assert_eq!(nav.state(), NavState::Closed);
    }

    #[test]
    fn every_dismissal_closes_an_open_panel() {
        for event in [
            NavEvent::LinkClick,
            NavEvent::DocumentClick { inside: false },
            NavEvent::Escape,
        ] {
            let mut nav = opened();
            let cmds = nav.handle(event);
            assert_eq!(nav.state(), NavState::Closed, "{event:?}");
            assert!(cmds.contains(&DomCommand::set_class(
                Target::NavPanel,
                ClassName::Open,
                false
            )));
        }
    }

    #[test]
    fn inside_click_keeps_panel_open() {
        let mut nav = opened();
        assert!(nav.handle(NavEvent::DocumentClick { inside: true }).is_empty());
        assert_eq!(nav.state(), NavState::Open);
    }

    #[test]
    fn outside_click_while_closed_does_nothing() {
        let mut nav = NavPanel::new(true);
        assert!(nav.handle(NavEvent::DocumentClick { inside: false }).is_empty());
    }

    #[test]
    fn escape_when_closed_stays_closed() {
        let mut nav = NavPanel::new(true);
        nav.handle(NavEvent::Escape);
        assert_eq!(nav.state(), NavState::Closed);
    }

    #[test]
    fn missing_markup_ignores_events() {
        let mut nav = NavPanel::new(false);
        assert!(nav.handle(NavEvent::ToggleClick).is_empty());
        assert_eq!(nav.state(), NavState::Closed);
    }
}
