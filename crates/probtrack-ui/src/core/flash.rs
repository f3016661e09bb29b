//! Timing policy for auto-dismissing flash messages.

const DEFAULT_VISIBLE_MS: u32 = 5_000;
const DEFAULT_FADE_MS: u32 = 500;

/// How long a flash message stays readable and how long it fades.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlashTimings {
    /// Milliseconds the message stays fully visible.
    pub visible_ms: u32,
    /// Milliseconds the opacity fade runs before removal.
    pub fade_ms: u32,
}

impl Default for FlashTimings {
    fn default() -> Self {
        Self {
            visible_ms: DEFAULT_VISIBLE_MS,
            fade_ms: DEFAULT_FADE_MS,
        }
    }
}

impl FlashTimings {
    /// CSS `transition` value driving the fade.
    #[must_use]
    pub fn fade_transition(&self) -> String {
        format!("opacity {}s ease", f64::from(self.fade_ms) / 1000.0)
    }

    /// Milliseconds from scheduling until the element is removed.
    #[must_use]
    pub const fn removal_deadline_ms(&self) -> u32 {
        self.visible_ms.saturating_add(self.fade_ms)
    }
}
