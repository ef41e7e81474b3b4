//! PS / RT Scheduling
//!
//! The driver only counts finished cycles. This picks what to send next so a
//! round contains a fixed number of PS cycles followed by RT cycles. The
//! default round is six PS cycles then two RT cycles.

use crate::config::{DEFAULT_PS_PER_ROUND, DEFAULT_RT_PER_ROUND};

/// What the caller should do next
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RdsSlot {
    /// Send the PS name
    Ps,
    /// Send the Radio Text
    Rt,
    /// Round finished: read the counters with reset and start over
    EndOfRound,
}

#[cfg(feature = "embedded")]
impl defmt::Format for RdsSlot {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Ps => defmt::write!(f, "PS"),
            Self::Rt => defmt::write!(f, "RT"),
            Self::EndOfRound => defmt::write!(f, "END"),
        }
    }
}

/// Fixed-ratio PS:RT scheduler
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RdsScheduler {
    ps_per_round: u32,
    rt_per_round: u32,
}

impl RdsScheduler {
    /// Create a scheduler; a zero count skips that kind entirely
    #[must_use]
    pub const fn new(ps_per_round: u32, rt_per_round: u32) -> Self {
        Self {
            ps_per_round,
            rt_per_round,
        }
    }

    /// PS cycles per round
    #[must_use]
    pub const fn ps_per_round(&self) -> u32 {
        self.ps_per_round
    }

    /// RT cycles per round
    #[must_use]
    pub const fn rt_per_round(&self) -> u32 {
        self.rt_per_round
    }

    /// Decide the next slot from the driver's completion counters
    #[must_use]
    pub const fn next_slot(&self, ps_completed: u32, rt_completed: u32) -> RdsSlot {
        if ps_completed < self.ps_per_round {
            RdsSlot::Ps
        } else if rt_completed < self.rt_per_round {
            RdsSlot::Rt
        } else {
            RdsSlot::EndOfRound
        }
    }

    /// Share of cycles spent on PS, in percent
    #[must_use]
    pub const fn ps_share_percent(&self) -> u32 {
        let total = self.ps_per_round + self.rt_per_round;
        if total == 0 {
            0
        } else {
            self.ps_per_round * 100 / total
        }
    }
}

impl Default for RdsScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_PS_PER_ROUND, DEFAULT_RT_PER_ROUND)
    }
}
