use sitewire_protocol::{AttrName, ClassName, DomCommand, Target};
use tracing::{debug, warn};

use crate::model::{PanelOutline, TabOutline};

/// Segmented buttons that each reveal one content panel.
#[derive(Debug, Clone, Default)]
pub struct TabGroup {
    targets: Vec<Option<String>>,
    panels: Vec<String>,
    active_button: Option<usize>,
    active_panel: Option<usize>,
}

impl TabGroup {
    /// The markup's own `is-active` marks are taken as the starting state.
    pub fn new(tabs: &[TabOutline], panels: &[PanelOutline]) -> Self {
        Self {
            targets: tabs.iter().map(|t| t.target.clone()).collect(),
            panels: panels.iter().map(|p| p.id.clone()).collect(),
            active_button: tabs.iter().position(|t| t.active),
            active_panel: panels.iter().position(|p| p.active),
        }
    }

    pub fn active_button(&self) -> Option<usize> {
        self.active_button
    }

    pub fn active_panel(&self) -> Option<usize> {
        self.active_panel
    }

    /// Activate `button` and show the panel it targets.
    ///
    /// Buttons with no target, or a target no panel carries, are ignored so
    /// one panel always stays visible.
    pub fn select(&mut self, button: usize) -> Vec<DomCommand> {
        let Some(Some(target)) = self.targets.get(button) else {
            warn!(button, "tab button without data-target");
            return Vec::new();
        };
        let Some(panel) = self.panels.iter().position(|id| id == target) else {
            warn!(button, %target, "tab target matches no panel");
            return Vec::new();
        };
        debug!(button, panel, "tab selected");
        self.active_button = Some(button);
        self.active_panel = Some(panel);

        let mut commands = Vec::with_capacity(self.targets.len() * 2 + self.panels.len());
        for i in 0..self.targets.len() {
            let on = i == button;
            commands.push(DomCommand::set_class(
                Target::TabButton(i),
                ClassName::Active,
                on,
            ));
            commands.push(DomCommand::set_flag(
                Target::TabButton(i),
                AttrName::AriaSelected,
                on,
            ));
        }
        for i in 0..self.panels.len() {
            commands.push(DomCommand::set_class(
                Target::TabPanel(i),
                ClassName::Active,
                i == panel,
            ));
        }
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group() -> TabGroup {
        let tabs = ["security", "facilities", "logistics"]
            .iter()
            .enumerate()
            .map(|(i, t)| TabOutline {
                target: Some((*t).to_owned()),
                active: i == 0,
            })
            .collect::<Vec<_>>();
        let panels = ["security", "facilities", "logistics"]
            .iter()
            .enumerate()
            .map(|(i, id)| PanelOutline {
                id: (*id).to_owned(),
                active: i == 0,
            })
            .collect::<Vec<_>>();
        TabGroup::new(&tabs, &panels)
    }

    fn visible_panels(cmds: &[DomCommand]) -> Vec<usize> {
        cmds.iter()
            .filter_map(|c| match c {
                DomCommand::SetClass {
                    target: Target::TabPanel(i),
                    on: true,
                    ..
                } => Some(*i),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn markup_defaults_hold_before_first_click() {
        let g = group();
        assert_eq!(g.active_button(), Some(0));
        assert_eq!(g.active_panel(), Some(0));
    }

    #[test]
    fn click_shows_exactly_the_target_panel() {
        let mut g = group();
        let cmds = g.select(2);
        assert_eq!(visible_panels(&cmds), vec![2]);
        assert_eq!(g.active_button(), Some(2));
        assert!(cmds.contains(&DomCommand::set_flag(
            Target::TabButton(2),
            AttrName::AriaSelected,
            true
        )));
        assert!(cmds.contains(&DomCommand::set_flag(
            Target::TabButton(0),
            AttrName::AriaSelected,
            false
        )));
    }

    #[test]
    fn repeated_click_is_idempotent() {
        let mut g = group();
        assert_eq!(g.select(1), g.select(1));
        assert_eq!(g.active_panel(), Some(1));
    }

    #[test]
    fn panels_match_by_id_not_position() {
        let tabs = vec![
            TabOutline {
                target: Some("b".into()),
                active: false,
            },
            TabOutline {
                target: Some("a".into()),
                active: false,
            },
        ];
        let panels = vec![
            PanelOutline {
                id: "a".into(),
                active: false,
            },
            PanelOutline {
                id: "b".into(),
                active: false,
            },
        ];
        let mut g = TabGroup::new(&tabs, &panels);
        assert_eq!(visible_panels(&g.select(0)), vec![1]);
    }

    #[test]
    fn dangling_target_is_ignored() {
        let tabs = vec![TabOutline {
            target: Some("missing".into()),
            active: false,
        }];
        let mut g = TabGroup::new(&tabs, &[]);
        assert!(g.select(0).is_empty());
        assert_eq!(g.active_button(), None);
    }

    #[test]
    fn missing_target_or_index_is_ignored() {
        let mut g = TabGroup::new(&[TabOutline::default()], &[]);
        assert!(g.select(0).is_empty());
        assert!(g.select(9).is_empty());
    }
}
