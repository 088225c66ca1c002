//! # Reveal Profiles and Timing
//!
//! Maps a container's `has_been_seen` flag onto what the reader sees. The
//! transition itself runs in CSS; this module owns the numbers that drive it
//! and the timeline those numbers imply.

use crate::latch::Threshold;
use serde::{Deserialize, Serialize};

/// Per-variant reveal settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevealProfile {
    /// Visible fraction required before the container reveals.
    pub threshold: Threshold,
    /// Length of the fade/slide, in milliseconds.
    pub transition_ms: u32,
    /// Vertical offset while hidden, in pixels.
    pub offset_px: u32,
}

impl RevealProfile {
    /// Compact bento cards.
    pub const CARD: RevealProfile = RevealProfile {
        threshold: Threshold::from_const(0.1),
        transition_ms: 700,
        offset_px: 48,
    };

    /// Full-width detail sections. Tall, so a smaller fraction is enough.
    pub const SECTION: RevealProfile = RevealProfile {
        threshold: Threshold::from_const(0.05),
        transition_ms: 1000,
        offset_px: 64,
    };

    /// Timing for one container using this profile.
    pub fn timing(&self, delay_ms: u32) -> RevealTiming {
        RevealTiming {
            delay_ms,
            duration_ms: self.transition_ms,
            offset_px: self.offset_px,
        }
    }
}

/// The two mutually exclusive visual states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Rendered but offset and transparent.
    Hidden,
    /// Full opacity at its resting position.
    Revealed,
}

impl Presentation {
    /// Presentation for a visibility flag.
    pub fn from_seen(has_been_seen: bool) -> Self {
        if has_been_seen {
            Presentation::Revealed
        } else {
            Presentation::Hidden
        }
    }

    /// Target opacity.
    pub fn opacity(self) -> f64 {
        match self {
            Presentation::Hidden => 0.0,
            Presentation::Revealed => 1.0,
        }
    }

    /// Target vertical translation for a given hidden offset.
    pub fn translate_y_px(self, offset_px: u32) -> u32 {
        match self {
            Presentation::Hidden => offset_px,
            Presentation::Revealed => 0,
        }
    }
}

/// Where a revealed container is along its entrance, measured from the
/// moment visibility was detected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionPhase {
    /// Inside the configured delay; nothing has moved yet.
    Waiting,
    /// Animating; `progress` is the linear time fraction in `(0, 1)`.
    Animating {
        /// Linear time fraction.
        progress: f64,
    },
    /// At rest in the revealed position.
    Settled,
}

/// Delay, duration and offset of one container's entrance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTiming {
    /// Wait after detection before the transition starts.
    pub delay_ms: u32,
    /// Transition length.
    pub duration_ms: u32,
    /// Hidden offset.
    pub offset_px: u32,
}

impl RevealTiming {
    /// Build timing directly.
    pub fn new(delay_ms: u32, duration_ms: u32, offset_px: u32) -> Self {
        Self {
            delay_ms,
            duration_ms,
            offset_px,
        }
    }

    /// Phase `elapsed_ms` after visibility was detected.
    pub fn phase_at(&self, elapsed_ms: f64) -> TransitionPhase {
        let delay = f64::from(self.delay_ms);
        if elapsed_ms <= delay {
            return TransitionPhase::Waiting;
        }
        let duration = f64::from(self.duration_ms);
        let into = elapsed_ms - delay;
        if into >= duration {
            TransitionPhase::Settled
        } else {
            TransitionPhase::Animating {
                progress: into / duration,
            }
        }
    }

    /// Milliseconds from detection until the container is at rest.
    pub fn settles_after_ms(&self) -> u32 {
        self.delay_ms.saturating_add(self.duration_ms)
    }

    /// Inline CSS feeding the stylesheet's transition.
    pub fn inline_style(&self) -> String {
        format!(
            "transition-duration: {}ms; transition-delay: {}ms; --reveal-offset: {}px;",
            self.duration_ms, self.delay_ms, self.offset_px
        )
    }
}
