use serde::{Deserialize, Serialize};

/// A page region that nav links can point at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
}

/// One observer notification for one section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntersectionEntry {
    pub id: String,
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl IntersectionEntry {
    pub fn visible(id: impl Into<String>, ratio: f64) -> Self {
        Self {
            id: id.into(),
            is_intersecting: true,
            ratio,
        }
    }

    pub fn hidden(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_intersecting: false,
            ratio: 0.0,
        }
    }
}

/// Intersection ratios of the sections currently inside the observation
/// window, keyed by document position.
///
/// Lives only as long as the observer that feeds it; rebuilding the
/// observer starts from an empty set.
#[derive(Debug, Clone, Default)]
pub struct VisibilitySet {
    ratios: Vec<Option<f64>>,
}

impl VisibilitySet {
    pub fn new(section_count: usize) -> Self {
        Self {
            ratios: vec![None; section_count],
        }
    }

    /// Record a notification for the section at `index`. Hidden sections
    /// are removed.
    pub fn record(&mut self, index: usize, is_intersecting: bool, ratio: f64) {
        if let Some(slot) = self.ratios.get_mut(index) {
            *slot = is_intersecting.then_some(ratio);
        }
    }

    pub fn ratio(&self, index: usize) -> Option<f64> {
        self.ratios.get(index).copied().flatten()
    }

    /// The section with the strictly greatest positive ratio. Equal ratios
    /// resolve to the earliest section in the document.
    pub fn best(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, ratio) in self.ratios.iter().enumerate() {
            let Some(ratio) = *ratio else { continue };
            if ratio > best.map_or(0.0, |(_, r)| r) {
                best = Some((index, ratio));
            }
        }
        best.map(|(index, _)| index)
    }

    pub fn len(&self) -> usize {
        self.ratios.iter().filter(|r| r.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.ratios.iter_mut().for_each(|r| *r = None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greatest_ratio_wins() {
        let mut set = VisibilitySet::new(3);
        set.record(0, true, 0.3);
        set.record(2, true, 0.6);
        assert_eq!(set.best(), Some(2));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn ties_resolve_to_document_order() {
        let mut set = VisibilitySet::new(3);
        set.record(2, true, 0.35);
        set.record(1, true, 0.35);
        assert_eq!(set.best(), Some(1));
    }

    #[test]
    fn hidden_sections_are_removed() {
        let mut set = VisibilitySet::new(2);
        set.record(0, true, 0.6);
        set.record(0, false, 0.0);
        assert!(set.is_empty());
        assert_eq!(set.ratio(0), None);
        assert_eq!(set.best(), None);
    }

    #[test]
    fn zero_ratio_intersection_never_wins() {
        // An entry can intersect at the 0 threshold with a ratio of zero.
        let mut set = VisibilitySet::new(1);
        set.record(0, true, 0.0);
        assert_eq!(set.len(), 1);
        assert_eq!(set.best(), None);
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut set = VisibilitySet::new(1);
        set.record(5, true, 1.0);
        assert!(set.is_empty());
    }

    #[test]
    fn clear_forgets_everything() {
        let mut set = VisibilitySet::new(2);
        set.record(0, true, 0.2);
        set.record(1, true, 0.4);
        set.clear();
        assert!(set.is_empty());
    }
}
