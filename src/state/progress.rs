//! Progress bar state: width percentage and the threshold-derived banner.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

/// Delay between consecutive progress steps in the animation timeline.
pub const STEP_INTERVAL_MS: u64 = 2000;

/// Banner message shown in the page heading, derived from the progress
/// width. Below 50% the banner never changes from its default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Banner {
    #[default]
    InProgress,
    Half,
    AlmostDone,
    Complete,
}

impl Banner {
    /// Banner for a given width, or `None` when the width implies no change.
    #[must_use]
    pub fn for_width(width: f64) -> Option<Self> {
        if width >= 100.0 {
            Some(Self::Complete)
        } else if width >= 90.0 {
            Some(Self::AlmostDone)
        } else if width >= 50.0 {
            Some(Self::Half)
        } else {
            None
        }
    }

    /// Heading text for this banner.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::InProgress => "The site is currently under maintenance",
            Self::Half => "Maintenance is 50% complete. Almost there!",
            Self::AlmostDone => "Maintenance is 90% complete. Just a little longer!",
            Self::Complete => "Maintenance is complete!",
        }
    }
}

/// Animated progress state.
///
/// `width` only advances through [`ProgressState::apply_step`], driven by the
/// page's timer loop, and is monotonically non-decreasing within a run.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressState {
    pub width: f64,
    pub banner: Banner,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self { width: 0.0, banner: Banner::InProgress }
    }
}

impl ProgressState {
    /// Apply step `index` (0-based) of a timeline with `total` steps.
    pub fn apply_step(&mut self, index: usize, total: usize) {
        if total == 0 {
            return;
        }
        self.width = step_width(index, total);
        if let Some(banner) = Banner::for_width(self.width) {
            self.banner = banner;
        }
    }

    /// Percentage label rendered inside the bar, e.g. `"100%"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:.0}%", self.width)
    }
}

/// Width after step `index` of `total`: `(index + 1) * 100 / total`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn step_width(index: usize, total: usize) -> f64 {
    ((index + 1) * 100) as f64 / total as f64
}
