use sitewire_protocol::{AttrName, ClassName, DomCommand, Target};
use tracing::debug;

use crate::model::DropdownOutline;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownEvent {
    /// The toggle of dropdown `n` was clicked.
    Toggle(usize),
    /// An option was clicked.
    Choose { dropdown: usize, option: usize },
    /// A click landed outside every dropdown.
    OutsideClick,
    Escape,
}

#[derive(Debug, Clone, Default)]
struct Dropdown {
    options: Vec<String>,
    chosen: Option<usize>,
    open: bool,
}

/// All custom select widgets on the page. At most one is open at a time.
#[derive(Debug, Clone, Default)]
pub struct DropdownGroup {
    dropdowns: Vec<Dropdown>,
}

impl DropdownGroup {
    pub fn new(outlines: &[DropdownOutline]) -> Self {
        Self {
            dropdowns: outlines
                .iter()
                .map(|o| Dropdown {
                    options: o.options.clone(),
                    chosen: o.chosen.filter(|&c| c < o.options.len()),
                    open: false,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.dropdowns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dropdowns.is_empty()
    }

    pub fn open_index(&self) -> Option<usize> {
        self.dropdowns.iter().position(|d| d.open)
    }

    pub fn chosen(&self, dropdown: usize) -> Option<usize> {
        self.dropdowns.get(dropdown)?.chosen
    }

    /// Label currently mirrored into the dropdown's value field.
    pub fn value(&self, dropdown: usize) -> Option<&str> {
        let d = self.dropdowns.get(dropdown)?;
        d.options.get(d.chosen?).map(String::as_str)
    }

    pub fn handle(&mut self, event: DropdownEvent) -> Vec<DomCommand> {
        match event {
            DropdownEvent::Toggle(index) => {
                let Some(was_open) = self.dropdowns.get(index).map(|d| d.open) else {
                    return Vec::new();
                };
                let mut commands = self.close_all();
                if !was_open {
                    commands.extend(self.set_open(index, true));
                }
                commands
            }
            DropdownEvent::Choose { dropdown, option } => self.choose(dropdown, option),
            DropdownEvent::OutsideClick | DropdownEvent::Escape => self.close_all(),
        }
    }

    fn choose(&mut self, index: usize, option: usize) -> Vec<DomCommand> {
        let Some(dropdown) = self.dropdowns.get_mut(index) else {
            return Vec::new();
        };
        let Some(label) = dropdown.options.get(option).cloned() else {
            return Vec::new();
        };
        debug!(dropdown = index, option, %label, "dropdown option chosen");
        dropdown.chosen = Some(option);

        let mut commands = Vec::with_capacity(dropdown.options.len() * 2 + 3);
        for i in 0..dropdown.options.len() {
            let target = Target::DropdownOption {
                dropdown: index,
                option: i,
            };
            commands.push(DomCommand::set_class(target, ClassName::Selected, i == option));
            commands.push(DomCommand::set_flag(target, AttrName::AriaSelected, i == option));
        }
        commands.push(DomCommand::SetText {
            target: Target::DropdownValue(index),
            text: label,
        });
        commands.extend(self.set_open(index, false));
        commands
    }

    fn close_all(&mut self) -> Vec<DomCommand> {
        let open: Vec<usize> = (0..self.dropdowns.len())
            .filter(|&i| self.dropdowns[i].open)
            .collect();
        open.into_iter()
            .flat_map(|i| self.set_open(i, false))
            .collect()
    }

    fn set_open(&mut self, index: usize, open: bool) -> Vec<DomCommand> {
        let Some(dropdown) = self.dropdowns.get_mut(index) else {
            return Vec::new();
        };
        dropdown.open = open;
        vec![
            DomCommand::set_class(Target::Dropdown(index), ClassName::Open, open),
            DomCommand::set_flag(Target::DropdownToggle(index), AttrName::AriaExpanded, open),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group() -> DropdownGroup {
        DropdownGroup::new(&[
            DropdownOutline {
                options: vec!["Security".into(), "Facilities".into(), "Logistics".into()],
                chosen: None,
            },
            DropdownOutline {
                options: vec!["Email".into(), "Phone".into()],
                chosen: Some(0),
            },
        ])
    }

    #[test]
    fn toggle_opens_then_closes() {
        let mut g = group();
        g.handle(DropdownEvent::Toggle(0));
        assert_eq!(g.open_index(), Some(0));
        g.handle(DropdownEvent::Toggle(0));
        assert_eq!(g.open_index(), None);
    }

    #[test]
    fn opening_one_closes_the_other() {
        let mut g = group();
        g.handle(DropdownEvent::Toggle(1));
        let cmds = g.handle(DropdownEvent::Toggle(0));
        assert_eq!(g.open_index(), Some(0));
        assert!(cmds.contains(&DomCommand::set_class(
            Target::Dropdown(1),
            ClassName::Open,
            false
        )));
        assert!(cmds.contains(&DomCommand::set_class(
            Target::Dropdown(0),
            ClassName::Open,
            true
        )));
    }

    #[test]
    fn choosing_sets_value_and_closes() {
        let mut g = group();
        g.handle(DropdownEvent::Toggle(0));
        let cmds = g.handle(DropdownEvent::Choose {
            dropdown: 0,
            option: 2,
        });
        assert_eq!(g.open_index(), None);
        assert_eq!(g.chosen(0), Some(2));
        assert_eq!(g.value(0), Some("Logistics"));
        assert!(cmds.contains(&DomCommand::SetText {
            target: Target::DropdownValue(0),
            text: "Logistics".into(),
        }));
        let selected: Vec<_> = cmds
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    DomCommand::SetClass {
                        class: ClassName::Selected,
                        on: true,
                        ..
                    }
                )
            })
            .collect();
        assert_eq!(selected.len(), 1);
    }

    #[test]
    fn choice_is_exclusive_across_reselection() {
        let mut g = group();
        g.handle(DropdownEvent::Choose {
            dropdown: 1,
            option: 1,
        });
        assert_eq!(g.chosen(1), Some(1));
        assert_eq!(g.value(1), Some("Phone"));
        assert_eq!(g.chosen(0), None);
    }

    #[test]
    fn outside_click_and_escape_close_all() {
        for dismiss in [DropdownEvent::OutsideClick, DropdownEvent::Escape] {
            let mut g = group();
            g.handle(DropdownEvent::Toggle(1));
            g.handle(dismiss);
            assert_eq!(g.open_index(), None);
        }
    }

    #[test]
    fn dismissal_with_nothing_open_emits_nothing() {
        let mut g = group();
        assert!(g.handle(DropdownEvent::Escape).is_empty());
    }

    #[test]
    fn out_of_range_events_are_ignored() {
        let mut g = group();
        assert!(g.handle(DropdownEvent::Toggle(7)).is_empty());
        assert!(
            g.handle(DropdownEvent::Choose {
                dropdown: 0,
                option: 9
            })
            .is_empty()
        );
        assert_eq!(g.chosen(0), None);
    }

    #[test]
    fn markup_preselection_is_kept() {
        let g = group();
        assert_eq!(g.value(1), Some("Email"));
        let bad = DropdownGroup::new(&[DropdownOutline {
            options: vec!["only".into()],
            chosen: Some(4),
        }]);
        assert_eq!(bad.chosen(0), None);
    }
}
