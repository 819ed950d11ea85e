use sitewire_protocol::{ClassName, DomCommand, Target};
use tracing::debug;

/// Keeps exactly one `.nav-link` marked active.
#[derive(Debug, Clone, Default)]
pub struct ActiveLinkStyler {
    hrefs: Vec<String>,
    active: Option<usize>,
}

impl ActiveLinkStyler {
    pub fn new(hrefs: Vec<String>) -> Self {
        Self {
            hrefs,
            active: None,
        }
    }

    /// Mark the link pointing at `#id` active and every other link inactive.
    ///
    /// An empty id, or one no link points at, changes nothing. Keeping the
    /// current link in that case is deliberate: once any link has been
    /// marked, exactly one stays marked. When several links share a fragment
    /// the first one in the document wins.
    pub fn activate(&mut self, id: &str) -> Vec<DomCommand> {
        if id.is_empty() {
            return Vec::new();
        }
        let Some(index) = self
            .hrefs
            .iter()
            .position(|href| href.strip_prefix('#') == Some(id))
        else {
            debug!(id, "no nav link targets section");
            return Vec::new();
        };

        if self.active != Some(index) {
            debug!(id, index, "nav link activated");
        }
        self.active = Some(index);
        (0..self.hrefs.len())
            .map(|i| DomCommand::set_class(Target::NavLink(i), ClassName::Active, i == index))
            .collect()
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Section id the active link points at.
    pub fn active_id(&self) -> Option<&str> {
        let href = self.hrefs.get(self.active?)?;
        href.strip_prefix('#')
    }
}
