//! Day/night and weather cycle
//!
//! A two-state machine ticked once per frame. This is the only writer of
//! day/weather state.

use std::time::Duration;

use instant::Instant;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weather {
    Clear,
    Rain,
}

/// Global day/weather state.
pub struct Cycle {
    pub is_day: bool,
    pub weather: Weather,
    interval: Duration,
    last_toggle: Instant,
}

impl Cycle {
    /// Start in daylight with clear weather.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            is_day: true,
            weather: Weather::Clear,
            interval,
            last_toggle: now,
        }
    }

    /// If at least the configured interval has elapsed since the last
    /// transition, flip day/night, re-roll the weather uniformly, and reset
    /// the elapsed-time reference. No hysteresis, no other triggers.
    pub fn tick(&mut self, now: Instant, rng: &mut impl Rng) {
        if now.duration_since(self.last_toggle) >= self.interval {
            self.is_day = !self.is_day;
            self.weather = if rng.random_bool(0.5) {
                Weather::Clear
            } else {
                Weather::Rain
            };
            self.last_toggle = now;

            log::info!(
                "Cycle: {} / {:?}",
                if self.is_day { "day" } else { "night" },
                self.weather
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    const INTERVAL: Duration = Duration::from_millis(10_000);

    #[test]
    fn test_no_flip_before_interval() {
        let start = Instant::now();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
        let mut cycle = Cycle::new(INTERVAL, start);

        cycle.tick(start + Duration::from_millis(9_999), &mut rng);
        assert!(cycle.is_day);
        assert_eq!(cycle.weather, Weather::Clear);
    }

    #[test]
    fn test_flip_after_interval() {
        let start = Instant::now();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
        let mut cycle = Cycle::new(INTERVAL, start);

        cycle.tick(start + Duration::from_millis(10_000), &mut rng);
        assert!(!cycle.is_day);
        assert!(matches!(cycle.weather, Weather::Clear | Weather::Rain));
    }

    #[test]
    fn test_reference_resets_on_flip() {
        let start = Instant::now();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
        let mut cycle = Cycle::new(INTERVAL, start);

        let first_flip = start + Duration::from_millis(12_000);
        cycle.tick(first_flip, &mut rng);
        assert!(!cycle.is_day);

        // Less than a full interval after the first flip: no change
        cycle.tick(first_flip + Duration::from_millis(9_000), &mut rng);
        assert!(!cycle.is_day);

        cycle.tick(first_flip + Duration::from_millis(10_000), &mut rng);
        assert!(cycle.is_day);
    }

    #[test]
    fn test_weather_rerolls_both_values() {
        let start = Instant::now();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
        let mut cycle = Cycle::new(INTERVAL, start);

        let mut seen_clear = false;
        let mut seen_rain = false;
        let mut now = start;
        for _ in 0..64 {
            now = now + INTERVAL;
            cycle.tick(now, &mut rng);
            match cycle.weather {
                Weather::Clear => seen_clear = true,
                Weather::Rain => seen_rain = true,
            }
        }
        assert!(seen_clear && seen_rain);
    }
}
