use sitewire_protocol::{Rect, ScrollMetrics};
use tracing::{debug, trace};

use crate::config::TrackerConfig;
use crate::model::{IntersectionEntry, Section, VisibilitySet};

/// Strip the leading `#` from a URL fragment.
pub fn fragment_id(hash: &str) -> &str {
    hash.strip_prefix('#').unwrap_or(hash)
}

/// The viewport region in which sections count as visible: its top edge sits
/// below the sticky header, its bottom edge is pulled up by a fixed share of
/// the viewport height.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationWindow {
    /// Header height plus buffer, in pixels.
    pub top_inset: f64,
    /// Percentage of the viewport height removed at the bottom.
    pub bottom_cutoff_percent: f64,
    pub thresholds: Vec<f64>,
}

impl ObservationWindow {
    pub fn new(header_height: Option<f64>, config: &TrackerConfig) -> Self {
        Self {
            top_inset: header_height.unwrap_or(config.header_fallback_px)
                + config.header_buffer_px,
            bottom_cutoff_percent: config.bottom_cutoff_percent,
            thresholds: config.thresholds.clone(),
        }
    }

    /// `rootMargin` for an `IntersectionObserver` rooted at the viewport.
    pub fn root_margin(&self) -> String {
        format!(
            "-{}px 0px -{}% 0px",
            self.top_inset, self.bottom_cutoff_percent
        )
    }

    /// Top and bottom edge of the window for a given viewport height.
    pub fn bounds(&self, viewport_height: f64) -> (f64, f64) {
        let bottom = viewport_height * (1.0 - self.bottom_cutoff_percent / 100.0);
        (self.top_inset, bottom)
    }

    /// Fraction of `section` (viewport coordinates) that lies inside the
    /// window. Sections span the full width, so only the vertical overlap
    /// matters.
    pub fn measure(&self, section: Rect, viewport_height: f64) -> f64 {
        if section.area() <= 0.0 {
            return 0.0;
        }
        let (top, bottom) = self.bounds(viewport_height);
        let overlap = section.bottom().min(bottom) - section.y.max(top);
        (overlap.max(0.0) / section.h).min(1.0)
    }
}

/// Decides which section is current from observer notifications.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    sections: Vec<Section>,
    visible: VisibilitySet,
    window: ObservationWindow,
    config: TrackerConfig,
}

impl SectionTracker {
    pub fn new(section_ids: &[String], header_height: Option<f64>, config: &TrackerConfig) -> Self {
        Self {
            sections: section_ids
                .iter()
                .map(|id| Section { id: id.clone() })
                .collect(),
            visible: VisibilitySet::new(section_ids.len()),
            window: ObservationWindow::new(header_height, config),
            config: config.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn window(&self) -> &ObservationWindow {
        &self.window
    }

    pub fn visible(&self) -> &VisibilitySet {
        &self.visible
    }

    /// Recompute the window for a new header height. Notifications from the
    /// previous observer no longer apply, so the visibility set starts empty.
    pub fn rebuild(&mut self, header_height: Option<f64>) -> &ObservationWindow {
        self.window = ObservationWindow::new(header_height, &self.config);
        self.visible.clear();
        debug!(root_margin = %self.window.root_margin(), "observation window rebuilt");
        &self.window
    }

    /// Fold a batch of notifications into the visibility set and pick the
    /// current section.
    ///
    /// Returns `None` when nothing is visible and the page is neither at its
    /// top nor its bottom; the previous active link should then stay.
    pub fn observe(&mut self, entries: &[IntersectionEntry], scroll: ScrollMetrics) -> Option<&str> {
        for entry in entries {
            if entry.id.is_empty() {
                continue;
            }
            match self.index_of(&entry.id) {
                Some(index) => self.visible.record(index, entry.is_intersecting, entry.ratio),
                None => trace!(id = %entry.id, "notification for unknown section"),
            }
        }

        let winner = match self.visible.best() {
            Some(index) => Some(index),
            None if scroll.at_top(self.config.edge_tolerance_px) => Some(0),
            None if scroll.at_bottom(self.config.edge_tolerance_px) => {
                self.sections.len().checked_sub(1)
            }
            None => None,
        };

        let id = self.sections.get(winner?)?.id.as_str();
        (!id.is_empty()).then_some(id)
    }

    /// Section to highlight on first load: the URL fragment when present,
    /// otherwise the first section.
    pub fn initial<'a>(&'a self, hash: &'a str) -> Option<&'a str> {
        let id = fragment_id(hash);
        if !id.is_empty() {
            return Some(id);
        }
        self.sections
            .first()
            .map(|s| s.id.as_str())
            .filter(|id| !id.is_empty())
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }
}
