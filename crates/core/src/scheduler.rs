/// What the host should do after delivering an animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameTick {
    /// Nothing is scheduled.
    Idle,
    /// Still settling; request another frame.
    Pending,
    /// Layout has settled; run the deferred work now.
    Fire,
}

/// Defers work until a number of animation frames have passed without a
/// new request.
///
/// Every `request` restarts the countdown, so a burst of resize events
/// produces one rebuild after the last of them.
#[derive(Debug, Clone)]
pub struct SettleScheduler {
    frames: u32,
    remaining: Option<u32>,
}

impl SettleScheduler {
    pub fn new(frames: u32) -> Self {
        Self {
            frames: frames.max(1),
            remaining: None,
        }
    }

    /// Start or restart the countdown. Returns true when the host has to
    /// request a frame; false when one is already outstanding.
    pub fn request(&mut self) -> bool {
        let idle = self.remaining.is_none();
        self.remaining = Some(self.frames);
        idle
    }

    pub fn on_frame(&mut self) -> FrameTick {
        match self.remaining {
            None => FrameTick::Idle,
            Some(n) if n <= 1 => {
                self.remaining = None;
                FrameTick::Fire
            }
            Some(n) => {
                self.remaining = Some(n - 1);
                FrameTick::Pending
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    /// Drop any pending countdown.
    pub fn cancel(&mut self) {
        self.remaining = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_after_two_frames() {
        let mut s = SettleScheduler::new(2);
        assert!(s.request());
        assert_eq!(s.on_frame(), FrameTick::Pending);
        assert_eq!(s.on_frame(), FrameTick::Fire);
        assert_eq!(s.on_frame(), FrameTick::Idle);
        assert!(!s.is_pending());
    }

    #[test]
    fn repeated_request_restarts_countdown() {
        let mut s = SettleScheduler::new(2);
        assert!(s.request());
        assert_eq!(s.on_frame(), FrameTick::Pending);
        assert!(!s.request());
        assert_eq!(s.on_frame(), FrameTick::Pending);
        assert_eq!(s.on_frame(), FrameTick::Fire);
    }

    #[test]
    fn burst_fires_once() {
        let mut s = SettleScheduler::new(2);
        let frames_requested = (0..5).filter(|_| s.request()).count();
        assert_eq!(frames_requested, 1);
        let ticks: Vec<_> = (0..4).map(|_| s.on_frame()).collect();
        assert_eq!(
            ticks,
            vec![
                FrameTick::Pending,
                FrameTick::Fire,
                FrameTick::Idle,
                FrameTick::Idle
            ]
        );
    }

    #[test]
    fn single_frame_and_zero_clamp() {
        let mut s = SettleScheduler::new(0);
        s.request();
        assert_eq!(s.on_frame(), FrameTick::Fire);
    }

    #[test]
    fn cancel_clears_pending() {
        let mut s = SettleScheduler::new(3);
        s.request();
        s.cancel();
        assert_eq!(s.on_frame(), FrameTick::Idle);
    }
}
