//! Horizontal swipe classification.

/// Minimum horizontal travel, in pointer units, for a gesture to count.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;

/// Swipe threshold. Travel must strictly exceed it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SwipeThreshold(f64);

impl SwipeThreshold {
    /// Negative and non-finite values fall back to zero.
    pub fn new(value: f64) -> Self {
        if value.is_finite() && value > 0.0 {
            Self(value)
        } else {
            Self(0.0)
        }
    }

    /// Threshold in pointer units.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(DEFAULT_SWIPE_THRESHOLD)
    }
}

/// Which way the finger travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// Finger moved left; shows the next image.
    Left,
    /// Finger moved right; shows the previous image.
    Right,
}

/// Classify a gesture from its start and end x coordinates.
///
/// Returns `None` when the travel does not exceed `threshold`.
pub fn classify_swipe(start_x: f64, end_x: f64, threshold: SwipeThreshold) -> Option<SwipeDirection> {
    let diff = start_x - end_x;
    if diff.abs() <= threshold.value() {
        return None;
    }
    if diff > 0.0 {
        Some(SwipeDirection::Left)
    } else {
        Some(SwipeDirection::Right)
    }
}

/// Pairs a touch-start with the following touch-end.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: Option<f64>,
}

impl SwipeTracker {
    /// Tracker with no gesture in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record where a gesture began.
    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Finish a gesture at `x`, returning `(start_x, end_x)`.
    ///
    /// `None` if no gesture was in progress.
    pub fn finish(&mut self, x: f64) -> Option<(f64, f64)> {
        self.start_x.take().map(|start| (start, x))
    }

    /// Abandon any gesture in progress.
    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    /// Whether a gesture has begun and not finished.
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }
}
