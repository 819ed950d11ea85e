use sitewire_protocol::{DomCommand, Target};

use crate::config::CarouselConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    fn sign(self) -> f64 {
        match self {
            Self::Prev => -1.0,
            Self::Next => 1.0,
        }
    }
}

/// Horizontal card track with prev/next buttons.
///
/// Holds no scroll state; every click measures the first card again so the
/// step follows responsive layout changes.
#[derive(Debug, Clone)]
pub struct Carousel {
    index: usize,
    gap: f64,
    fallback: f64,
}

impl Carousel {
    pub fn new(index: usize, config: &CarouselConfig) -> Self {
        Self {
            index,
            gap: config.gap_px,
            fallback: config.fallback_step_px,
        }
    }

    /// One card width plus the gap, or the fallback when no card is rendered.
    pub fn step(&self, card_width: Option<f64>) -> f64 {
        card_width.map_or(self.fallback, |w| w + self.gap)
    }

    pub fn scroll(&self, direction: Direction, card_width: Option<f64>) -> DomCommand {
        DomCommand::ScrollBy {
            target: Target::CarouselTrack(self.index),
            left: direction.sign() * self.step(card_width),
            smooth: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_scrolls_forward_by_card_and_gap() {
        let c = Carousel::new(0, &CarouselConfig::default());
        assert_eq!(
            c.scroll(Direction::Next, Some(280.0)),
            DomCommand::ScrollBy {
                target: Target::CarouselTrack(0),
                left: 296.0,
                smooth: true,
            }
        );
    }

    #[test]
    fn prev_scrolls_backward() {
        let c = Carousel::new(3, &CarouselConfig::default());
        assert_eq!(
            c.scroll(Direction::Prev, Some(300.0)),
            DomCommand::ScrollBy {
                target: Target::CarouselTrack(3),
                left: -316.0,
                smooth: true,
            }
        );
    }

    #[test]
    fn empty_track_uses_fallback() {
        let c = Carousel::new(0, &CarouselConfig::default());
        assert_eq!(c.step(None), 320.0);
        let custom = Carousel::new(
            0,
            &CarouselConfig {
                gap_px: 18.0,
                fallback_step_px: 360.0,
            },
        );
        assert_eq!(custom.step(None), 360.0);
        assert_eq!(custom.step(Some(100.0)), 118.0);
    }
}
