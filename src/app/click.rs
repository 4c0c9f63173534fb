use std::time::{Duration, Instant};

/// Turns a stream of presses into single and double clicks. Two presses
/// on the same target inside the window form a double-click; the pair is
/// then consumed so a third press starts over.
#[derive(Debug, Clone)]
pub struct ClickTracker<T> {
    window: Duration,
    last: Option<(Instant, T)>,
}

impl<T: Copy + PartialEq> ClickTracker<T> {
    pub fn new(window: Duration) -> Self {
        Self { window, last: None }
    }

    /// Records a press and reports whether it completed a double-click.
    pub fn press(&mut self, target: T, now: Instant) -> bool {
        let is_double = matches!(
            self.last,
            Some((at, prev)) if prev == target && now.saturating_duration_since(at) <= self.window
        );

        self.last = if is_double { None } else { Some((now, target)) };
        is_double
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}
