//! The difficulty curve: how score maps to level and level maps to speed
use crate::consts;
use std::time::Duration;

/// Return the level reached with the given score.  Levels start at 1 and go
/// up by one every [`POINTS_PER_LEVEL`][consts::POINTS_PER_LEVEL] points.
pub(crate) fn level_for_score(score: u32) -> u32 {
    score / consts::POINTS_PER_LEVEL + 1
}

/// Return the time between snake movements at the given level.  Each level
/// shaves a fixed amount off of the base period, down to a floor.
pub(crate) fn tick_period(level: u32) -> Duration {
    let speedup = level
        .saturating_sub(1)
        .saturating_mul(consts::TICK_MILLIS_PER_LEVEL);
    let millis = consts::BASE_TICK_MILLIS
        .saturating_sub(speedup)
        .max(consts::MIN_TICK_MILLIS);
    Duration::from_millis(u64::from(millis))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1)]
    #[case(10, 1)]
    #[case(40, 1)]
    #[case(50, 2)]
    #[case(90, 2)]
    #[case(100, 3)]
    #[case(490, 10)]
    #[case(500, 11)]
    #[case(u32::MAX, u32::MAX / 50 + 1)]
    fn test_level_for_score(#[case] score: u32, #[case] level: u32) {
        assert_eq!(level_for_score(score), level);
    }

    #[rstest]
    #[case(1, 220)]
    #[case(2, 205)]
    #[case(3, 190)]
    #[case(10, 85)]
    #[case(11, 70)]
    #[case(12, 60)]
    #[case(13, 60)]
    #[case(1000, 60)]
    #[case(u32::MAX, 60)]
    fn test_tick_period(#[case] level: u32, #[case] millis: u64) {
        assert_eq!(tick_period(level), Duration::from_millis(millis));
    }

    #[test]
    fn tick_period_never_increases() {
        let mut prev = tick_period(1);
        for level in 2..=40 {
            let period = tick_period(level);
            assert!(period <= prev);
            assert!(period >= Duration::from_millis(60));
            prev = period;
        }
    }
}
