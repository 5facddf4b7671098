use serde::Serialize;

/// Maps turn numbers onto days and the day/night cycle.
///
/// Each day is `turns_per_day` turns long; the last `night_ratio` of it is night.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayCycle {
    turns_per_day: u32,
    night_ratio: f64,
}

impl DayCycle {
    /// Create a cycle. A zero day length is treated as one turn.
    pub fn new(turns_per_day: u32, night_ratio: f64) -> Self {
        Self {
            turns_per_day: turns_per_day.max(1),
            night_ratio: night_ratio.clamp(0.0, 1.0),
        }
    }

    /// Turns in one day.
    pub fn turns_per_day(&self) -> u32 {
        self.turns_per_day
    }

    /// Day number, starting at 1.
    pub fn day(&self, turn: u32) -> u32 {
        turn / self.turns_per_day + 1
    }

    /// Fraction of the current day that has elapsed, in `0.0..1.0`.
    pub fn time_of_day(&self, turn: u32) -> f64 {
        f64::from(turn % self.turns_per_day) / f64::from(self.turns_per_day)
    }

    /// True during the night part of the day.
    pub fn is_night(&self, turn: u32) -> bool {
        self.night_ratio > 0.0 && self.time_of_day(turn) >= 1.0 - self.night_ratio
    }

    /// True on the first turn of a day after the first.
    pub fn is_dawn(&self, turn: u32) -> bool {
        turn > 0 && turn % self.turns_per_day == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_start_at_one() {
        let cycle = DayCycle::new(100, 0.3);
        assert_eq!(cycle.day(0), 1);
        assert_eq!(cycle.day(99), 1);
        assert_eq!(cycle.day(100), 2);
    }

    #[test]
    fn night_is_the_tail_of_the_day() {
        let cycle = DayCycle::new(100, 0.3);
        assert!(!cycle.is_night(0));
        assert!(!cycle.is_night(69));
        assert!(cycle.is_night(70));
        assert!(cycle.is_night(99));
        assert!(!cycle.is_night(100));
        assert!(cycle.is_night(170));
    }

    #[test]
    fn zero_ratio_means_no_night() {
        let cycle = DayCycle::new(10, 0.0);
        assert!((0..30).all(|t| !cycle.is_night(t)));
    }

    #[test]
    fn dawn_marks_new_days() {
        let cycle = DayCycle::new(10, 0.5);
        assert!(!cycle.is_dawn(0));
        assert!(cycle.is_dawn(10));
        assert!(!cycle.is_dawn(11));
    }
}
