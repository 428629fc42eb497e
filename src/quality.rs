//! Quality control of the levels in a profile.

use crate::{
    keys::LevelField::{self, *},
    sounding::{LevelRecord, Profile},
};
use log::debug;

/// Fields every level needs for the physics.
pub const REQUIRED_FIELDS: [LevelField; 4] = [Pressure, Temperature, DewPoint, Height];

/// Fields counted when screening for nearly empty levels.
pub const SCREENED_FIELDS: [LevelField; 4] = [Height, Pressure, Temperature, RelativeHumidity];

/// A level with this many or more of the `SCREENED_FIELDS` missing is removed.
pub const MAX_SCREENED_MISSING: usize = 2;

/// Does the level have all the `REQUIRED_FIELDS`?
#[inline]
pub fn has_required_fields(level: &LevelRecord) -> bool {
    REQUIRED_FIELDS.iter().all(|&field| !level.is_missing(field))
}

/// Number of `SCREENED_FIELDS` missing from the level.
#[inline]
pub fn screened_missing_count(level: &LevelRecord) -> usize {
    SCREENED_FIELDS
        .iter()
        .filter(|&&field| level.is_missing(field))
        .count()
}

/// Does the level survive quality control?
#[inline]
pub fn is_usable(level: &LevelRecord) -> bool {
    has_required_fields(level) && screened_missing_count(level) < MAX_SCREENED_MISSING
}

/// Remove the levels that can't support the physics, keeping the rest in order.
///
/// # Examples
///
/// ```rust
/// use optional::none;
/// use sounding_tropo::{filter_profile, LevelRecord, Profile};
/// # use sounding_tropo::doctest::make_test_profile;
///
/// let prof = make_test_profile();
/// let mut levels = prof.levels().to_vec();
/// levels[1].dew_point = none();
///
/// let filtered = filter_profile(&Profile::new().with_levels(levels));
/// assert_eq!(filtered.len(), 2);
///
/// // Already clean, nothing happens.
/// assert_eq!(filter_profile(&filtered), filtered);
/// ```
pub fn filter_profile(profile: &Profile) -> Profile {
    let filtered: Profile = profile.iter().filter(|lvl| is_usable(lvl)).cloned().collect();

    debug!(
        "quality control kept {} of {} levels",
        filtered.len(),
        profile.len()
    );

    filtered
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::sounding::doctest::{make_level, make_test_profile};
    use optional::none;

    #[test]
    fn test_required_fields() {
        let complete = make_level(1000.0, 100.0, 15.0, 60.0);
        assert!(has_required_fields(&complete));

        for &field in REQUIRED_FIELDS.iter() {
            let mut lvl = complete;
            match field {
                Pressure => lvl.pressure = none(),
                Temperature => lvl.temperature = none(),
                DewPoint => lvl.dew_point = none(),
                Height => lvl.height = none(),
                _ => unreachable!(),
            }
            assert!(!has_required_fields(&lvl), "{:?}", field);
            assert!(!is_usable(&lvl));
        }
    }

    #[test]
    fn test_missing_humidity_alone_is_kept() {
        let mut lvl = make_level(1000.0, 100.0, 15.0, 60.0);
        lvl.relative_humidity = none();

        assert_eq!(screened_missing_count(&lvl), 1);
        assert!(is_usable(&lvl));
    }

    #[test]
    fn test_screened_count() {
        let mut lvl = make_level(1000.0, 100.0, 15.0, 60.0);
        lvl.relative_humidity = none();
        lvl.height = none();

        assert_eq!(screened_missing_count(&lvl), 2);
        assert!(!is_usable(&lvl));
    }

    #[test]
    fn test_order_and_idempotence() {
        let base = make_test_profile();
        let mut levels = base.levels().to_vec();
        let mut bad = make_level(950.0, 600.0, 17.0, 45.0);
        bad.temperature = none();
        levels.insert(1, bad);
        levels.push(LevelRecord::default());

        let prof = Profile::new().with_levels(levels);
        let filtered = filter_profile(&prof);

        assert_eq!(filtered, base);
        assert_eq!(filter_profile(&filtered), filtered);
    }

    #[test]
    fn test_all_removed() {
        let prof = Profile::new().with_levels(vec![LevelRecord::default(); 3]);
        assert!(filter_profile(&prof).is_empty());
    }
}
