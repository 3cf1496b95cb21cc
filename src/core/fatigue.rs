//! Bounded fatigue counter gating combat eligibility.
//!
//! Fatigue rises with every decided battle and is recovered through
//! minigames. At the cap the character refuses to fight.

use serde::{Deserialize, Serialize};

use crate::core::constants::{FATIGUE_MAX, FATIGUE_WARNING_THRESHOLD};

/// Fatigue value, always within `0..=100`.
///
/// Pure value semantics: crossing the warning threshold or reaching the cap
/// is reported through the accessors, emitting events is the caller's job.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Fatigue(u32);

impl Fatigue {
    pub fn new(value: u32) -> Self {
        Self(value.min(FATIGUE_MAX))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Adds `amount`, capped at the maximum. Returns the new value.
    pub fn increase(&mut self, amount: u32) -> u32 {
        self.0 = (self.0 + amount).min(FATIGUE_MAX);
        self.0
    }

    /// Subtracts `amount`, floored at zero. Returns the new value.
    pub fn recover(&mut self, amount: u32) -> u32 {
        self.0 = self.0.saturating_sub(amount);
        self.0
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }

    /// True exactly at the cap; battles are refused in this state.
    pub fn is_exhausted(&self) -> bool {
        self.0 == FATIGUE_MAX
    }

    /// True at or above the warning threshold (80).
    pub fn at_warning(&self) -> bool {
        self.0 >= FATIGUE_WARNING_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_to_max() {
        assert_eq!(Fatigue::new(250).value(), 100);
        assert_eq!(Fatigue::new(100).value(), 100);
        assert_eq!(Fatigue::new(0).value(), 0);
    }

    #[test]
    fn test_increase_clamps_at_max() {
        let mut fatigue = Fatigue::new(95);
        assert_eq!(fatigue.increase(10), 100);
        assert_eq!(fatigue.increase(10), 100);
        assert_eq!(fatigue.value(), 100);
    }

    #[test]
    fn test_recover_floors_at_zero() {
        let mut fatigue = Fatigue::new(20);
        assert_eq!(fatigue.recover(15), 5);
        assert_eq!(fatigue.recover(15), 0);
        assert_eq!(fatigue.value(), 0);
    }

    #[test]
    fn test_exhausted_only_at_cap() {
        assert!(!Fatigue::new(99).is_exhausted());
        assert!(Fatigue::new(100).is_exhausted());

        let mut fatigue = Fatigue::new(95);
        fatigue.increase(10);
        assert!(fatigue.is_exhausted());
        fatigue.recover(1);
        assert!(!fatigue.is_exhausted());
    }

    #[test]
    fn test_warning_threshold() {
        assert!(!Fatigue::new(79).at_warning());
        assert!(Fatigue::new(80).at_warning());
        assert!(Fatigue::new(100).at_warning());
    }

    #[test]
    fn test_reset() {
        let mut fatigue = Fatigue::new(100);
        fatigue.reset();
        assert_eq!(fatigue.value(), 0);
        assert!(!fatigue.is_exhausted());
    }
}
