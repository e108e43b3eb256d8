use crate::models::raid::{RaidConfiguration, RaidLevel, RaidResult};

/// Smallest drive count each level accepts (RAID 10 additionally needs an even count).
pub fn min_drives(level: RaidLevel) -> i64 {
    match level {
        RaidLevel::Raid0  => 1,
        RaidLevel::Raid1  => 2,
        RaidLevel::Raid5  => 3,
        RaidLevel::Raid6  => 4,
        RaidLevel::Raid10 => 4,
        RaidLevel::Jbod   => 1,
    }
}

/// Check whether the drive count is legal for the level.
/// `None` means valid; otherwise the user-facing reason.
pub fn validate(config: &RaidConfiguration) -> Option<String> {
    let n = config.drive_count;
    let msg = match config.level {
        RaidLevel::Raid0  if n < 1 => "RAID 0 requires at least 1 drive.",
        RaidLevel::Raid1  if n < 2 => "RAID 1 requires at least 2 drives.",
        RaidLevel::Raid5  if n < 3 => "RAID 5 requires at least 3 drives.",
        RaidLevel::Raid6  if n < 4 => "RAID 6 requires at least 4 drives.",
        RaidLevel::Raid10 if n < 4 || n % 2 != 0 => "RAID 10 requires an even number of drives (4 or more).",
        RaidLevel::Jbod   if n < 1 => "JBOD requires at least 1 drive.",
        _ => return None,
    };
    Some(msg.to_string())
}

/// Derive capacity, tolerance and ratings for a configuration.
///
/// The arithmetic always runs, even when `validate` rejects the drive count;
/// the warning is attached to the result and callers decide whether to show
/// the numbers. Non-positive drive sizes are not clamped.
pub fn calculate(config: &RaidConfiguration) -> RaidResult {
    let n = config.drive_count;
    let size = config.drive_size;

    let (usable, failures) = match config.level {
        RaidLevel::Raid0 => (n as f64 * size, "0".to_string()),
        RaidLevel::Raid1 => (size, n.saturating_sub(1).max(0).to_string()),
        RaidLevel::Raid5 => (n.saturating_sub(1).max(0) as f64 * size, "1".to_string()),
        RaidLevel::Raid6 => (n.saturating_sub(2).max(0) as f64 * size, "2".to_string()),
        RaidLevel::Raid10 => {
            // i64 division truncates toward zero, so 5 drives still count as 2 pairs
            let pairs = n / 2;
            (pairs as f64 * size, format!("Up to {} (depends on which drives fail)", pairs))
        }
        RaidLevel::Jbod => (n as f64 * size, "0 (you lose data on any failed drive)".to_string()),
    };

    RaidResult {
        usable_capacity:     usable,
        failures_tolerated:  failures,
        speed_rating:        speed_rating(config.level),
        availability_rating: availability_rating(config.level),
        warning_message:     validate(config),
    }
}

/// Relative throughput, 1 (slowest) to 5.
pub fn speed_rating(level: RaidLevel) -> u8 {
    match level {
        RaidLevel::Raid0  => 5,
        RaidLevel::Raid10 => 4,
        RaidLevel::Raid5  => 3,
        RaidLevel::Raid6 | RaidLevel::Raid1 | RaidLevel::Jbod => 2,
    }
}

/// Relative resilience to drive loss, 1 to 5.
pub fn availability_rating(level: RaidLevel) -> u8 {
    match level {
        RaidLevel::Raid0 | RaidLevel::Jbod   => 1,
        RaidLevel::Raid5                     => 3,
        RaidLevel::Raid6                     => 4,
        RaidLevel::Raid1 | RaidLevel::Raid10 => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::raid::CapacityUnit;

    fn tb(level: RaidLevel, n: i64, size: f64) -> RaidConfiguration {
        RaidConfiguration::new(level, n, size, CapacityUnit::Tb)
    }

    #[test]
    fn raid0_stripes_full_capacity() {
        let r = calculate(&tb(RaidLevel::Raid0, 4, 2.0));
        assert_eq!(r.usable_capacity, 8.0);
        assert_eq!(r.failures_tolerated, "0");
        assert_eq!(r.speed_rating, 5);
        assert_eq!(r.availability_rating, 1);
        assert_eq!(r.warning_message, None);
    }

    #[test]
    fn raid1_keeps_one_drive_of_capacity() {
        let r = calculate(&tb(RaidLevel::Raid1, 4, 2.0));
        assert_eq!(r.usable_capacity, 2.0);
        assert_eq!(r.failures_tolerated, "3");
        assert_eq!(r.speed_rating, 2);
        assert_eq!(r.availability_rating, 5);
        assert_eq!(r.warning_message, None);
    }

    #[test]
    fn raid5_loses_one_drive_to_parity() {
        let r = calculate(&tb(RaidLevel::Raid5, 5, 4.0));
        assert_eq!(r.usable_capacity, 16.0);
        assert_eq!(r.failures_tolerated, "1");
        assert_eq!(r.speed_rating, 3);
        assert_eq!(r.availability_rating, 3);
        assert_eq!(r.warning_message, None);
    }

    #[test]
    fn raid6_loses_two_drives_to_parity() {
        let r = calculate(&tb(RaidLevel::Raid6, 6, 3.0));
        assert_eq!(r.usable_capacity, 12.0);
        assert_eq!(r.failures_tolerated, "2");
        assert_eq!(r.speed_rating, 2);
        assert_eq!(r.availability_rating, 4);
        assert_eq!(r.warning_message, None);
    }

    #[test]
    fn raid10_halves_capacity() {
        let r = calculate(&tb(RaidLevel::Raid10, 8, 2.0));
        assert_eq!(r.usable_capacity, 8.0);
        assert_eq!(r.failures_tolerated, "Up to 4 (depends on which drives fail)");
        assert_eq!(r.speed_rating, 4);
        assert_eq!(r.availability_rating, 5);
        assert_eq!(r.warning_message, None);
    }

    #[test]
    fn jbod_concatenates() {
        let r = calculate(&tb(RaidLevel::Jbod, 3, 1.0));
        assert_eq!(r.usable_capacity, 3.0);
        assert_eq!(r.failures_tolerated, "0 (you lose data on any failed drive)");
        assert_eq!(r.speed_rating, 2);
        assert_eq!(r.availability_rating, 1);
        assert_eq!(r.warning_message, None);
    }

    #[test]
    fn too_few_drives_warns_per_level() {
        let cases = [
            (RaidLevel::Raid0, 0, "RAID 0 requires at least 1 drive."),
            (RaidLevel::Raid1, 1, "RAID 1 requires at least 2 drives."),
            (RaidLevel::Raid5, 2, "RAID 5 requires at least 3 drives."),
            (RaidLevel::Raid6, 3, "RAID 6 requires at least 4 drives."),
            (RaidLevel::Jbod,  0, "JBOD requires at least 1 drive."),
        ];
        for (level, n, msg) in cases {
            let r = calculate(&tb(level, n, 1.0));
            assert_eq!(r.warning_message.as_deref(), Some(msg), "{:?} with {} drives", level, n);
        }
    }

    #[test]
    fn raid10_rejects_odd_and_small_counts() {
        let msg = Some("RAID 10 requires an even number of drives (4 or more).");
        assert_eq!(calculate(&tb(RaidLevel::Raid10, 5, 1.0)).warning_message.as_deref(), msg);
        assert_eq!(calculate(&tb(RaidLevel::Raid10, 2, 1.0)).warning_message.as_deref(), msg);
        assert_eq!(validate(&tb(RaidLevel::Raid10, 6, 1.0)), None);
    }

    #[test]
    fn invalid_config_still_computes_numbers() {
        let r = calculate(&tb(RaidLevel::Raid10, 5, 1.0));
        assert_eq!(r.usable_capacity, 2.0);
        assert_eq!(r.failures_tolerated, "Up to 2 (depends on which drives fail)");
        assert!(!r.is_valid());

        let r = calculate(&tb(RaidLevel::Raid1, 0, 3.0));
        assert_eq!(r.usable_capacity, 3.0);
        assert_eq!(r.failures_tolerated, "0");

        let r = calculate(&tb(RaidLevel::Raid6, 1, 3.0));
        assert_eq!(r.usable_capacity, 0.0);
    }

    #[test]
    fn fractional_drive_size() {
        let r = calculate(&tb(RaidLevel::Raid5, 4, 2.5));
        assert_eq!(r.usable_capacity, 7.5);
        assert_eq!(r.warning_message, None);
    }

    #[test]
    fn unit_does_not_change_arithmetic() {
        let gb = calculate(&RaidConfiguration::new(RaidLevel::Raid0, 3, 500.0, CapacityUnit::Gb));
        assert_eq!(gb.usable_capacity, 1500.0);
        assert_eq!(gb.warning_message, None);
        let as_tb = calculate(&tb(RaidLevel::Raid0, 3, 500.0));
        assert_eq!(gb, as_tb);
    }

    #[test]
    fn non_positive_size_propagates() {
        assert_eq!(calculate(&tb(RaidLevel::Raid0, 4, 0.0)).usable_capacity, 0.0);
        assert_eq!(calculate(&tb(RaidLevel::Raid5, 4, -1.0)).usable_capacity, -3.0);
    }

    #[test]
    fn minimum_counts_are_valid() {
        for level in RaidLevel::ALL {
            let cfg = tb(level, min_drives(level), 1.0);
            assert_eq!(calculate(&cfg).warning_message, None, "{:?}", level);
            let below = tb(level, min_drives(level) - 1, 1.0);
            assert!(validate(&below).is_some(), "{:?}", level);
        }
    }

    #[test]
    fn calculate_is_deterministic() {
        for level in RaidLevel::ALL {
            let cfg = tb(level, 7, 3.5);
            assert_eq!(calculate(&cfg), calculate(&cfg));
        }
    }

    #[test]
    fn extreme_negative_counts_stay_clamped() {
        for n in [i64::MIN, i64::MIN + 1] {
            for level in RaidLevel::ALL {
                let r = calculate(&tb(level, n, 1.0));
                assert!(r.warning_message.is_some(), "{:?} with {} drives", level, n);
            }
            let r1 = calculate(&tb(RaidLevel::Raid1, n, 1.0));
            assert_eq!(r1.failures_tolerated, "0");
            assert_eq!(r1.usable_capacity, 1.0);
            assert_eq!(calculate(&tb(RaidLevel::Raid5, n, 1.0)).usable_capacity, 0.0);
            assert_eq!(calculate(&tb(RaidLevel::Raid6, n, 1.0)).usable_capacity, 0.0);
            assert!(calculate(&tb(RaidLevel::Raid0, n, 1.0)).usable_capacity < 0.0);
        }
    }
}
