//! # Visibility Latch
//!
//! The `Pending → Triggered` state machine behind every reveal. A latch is
//! offered intersection ratios one at a time and flips exactly once, the first
//! time a ratio meets its threshold. Nothing flips it back.

use crate::error::{RevealError, RevealResult};
use serde::{Deserialize, Serialize};

/// Minimum fraction of a region's area that must be inside the viewport
/// before the region counts as visible.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Threshold(f64);

impl Threshold {
    /// Any overlap at all counts.
    pub const ANY: Threshold = Threshold(0.0);

    /// Validate a fraction in `[0, 1]`.
    pub fn new(fraction: f64) -> RevealResult<Self> {
        if (0.0..=1.0).contains(&fraction) {
            Ok(Threshold(fraction))
        } else {
            Err(RevealError::InvalidThreshold(fraction))
        }
    }

    /// Build a threshold from a literal known to be in range.
    pub(crate) const fn from_const(fraction: f64) -> Self {
        Threshold(fraction)
    }

    /// The raw fraction.
    pub fn fraction(self) -> f64 {
        self.0
    }

    /// Whether an observed intersection ratio satisfies this threshold.
    ///
    /// A zero threshold still requires some overlap, matching how the browser
    /// reports `isIntersecting` for a `0` threshold.
    pub fn is_met_by(self, ratio: f64) -> bool {
        if ratio.is_nan() {
            return false;
        }
        if self.0 == 0.0 {
            ratio > 0.0
        } else {
            ratio >= self.0
        }
    }
}

impl TryFrom<f64> for Threshold {
    type Error = RevealError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Threshold::new(value)
    }
}

impl From<Threshold> for f64 {
    fn from(threshold: Threshold) -> Self {
        threshold.0
    }
}

/// Latch phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatchPhase {
    /// Still waiting for a qualifying intersection.
    Pending,
    /// A qualifying intersection was seen. Terminal.
    Triggered,
}

/// Result of offering a ratio to a latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatchOutcome {
    /// This ratio flipped the latch.
    Triggered,
    /// Below threshold while pending.
    BelowThreshold,
    /// The latch had already fired; the ratio was discarded.
    AlreadyTriggered,
}

/// One-shot `has_been_seen` flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityLatch {
    threshold: Threshold,
    phase: LatchPhase,
}

impl VisibilityLatch {
    /// New pending latch.
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            phase: LatchPhase::Pending,
        }
    }

    /// Feed one observed intersection ratio.
    pub fn offer(&mut self, ratio: f64) -> LatchOutcome {
        match self.phase {
            LatchPhase::Triggered => LatchOutcome::AlreadyTriggered,
            LatchPhase::Pending if self.threshold.is_met_by(ratio) => {
                self.phase = LatchPhase::Triggered;
                LatchOutcome::Triggered
            }
            LatchPhase::Pending => LatchOutcome::BelowThreshold,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> LatchPhase {
        self.phase
    }

    /// The `has_been_seen` flag.
    pub fn has_been_seen(&self) -> bool {
        self.phase == LatchPhase::Triggered
    }

    /// Configured threshold.
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }
}
