//! Data types to store an atmospheric sounding.

use chrono::{Datelike, NaiveDate};
use std::fmt;

pub use self::{level_record::LevelRecord, station_info::StationInfo};

/// Identifies one sounding of a station: the launch date and the synoptic hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SoundingId {
    date: NaiveDate,
    hour: u32,
}

impl SoundingId {
    /// Create a new id, `None` if the date doesn't exist or the hour is not in `0..24`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sounding_tropo::SoundingId;
    ///
    /// let id = SoundingId::new(2024, 7, 1, 12).unwrap();
    /// assert_eq!(id.day_of_year(), 183);
    /// assert_eq!(id.to_string(), "2024-07-01 12Z");
    ///
    /// assert!(SoundingId::new(2023, 2, 29, 0).is_none());
    /// assert!(SoundingId::new(2024, 7, 1, 24).is_none());
    /// ```
    #[inline]
    pub fn new(year: i32, month: u32, day: u32, hour: u32) -> Option<Self> {
        if hour >= 24 {
            return None;
        }

        NaiveDate::from_ymd_opt(year, month, day).map(|date| SoundingId { date, hour })
    }

    /// Launch date.
    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Calendar year.
    #[inline]
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Month, 1 to 12.
    #[inline]
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Day of the month.
    #[inline]
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Day of the year starting at 1.
    #[inline]
    pub fn day_of_year(&self) -> u32 {
        self.date.ordinal()
    }

    /// Synoptic hour, UTC.
    #[inline]
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Two digit year, day of year and hour, eg `2418312` for 2024-07-01 12Z. This is how the
    /// soundings and their auxiliary output are keyed on disk.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sounding_tropo::SoundingId;
    ///
    /// assert_eq!(SoundingId::new(2024, 7, 1, 12).unwrap().file_key(), "2418312");
    /// assert_eq!(SoundingId::new(2009, 1, 5, 0).unwrap().file_key(), "0900500");
    /// ```
    pub fn file_key(&self) -> String {
        format!(
            "{:02}{:03}{:02}",
            self.year().rem_euclid(100),
            self.day_of_year(),
            self.hour
        )
    }
}

impl fmt::Display for SoundingId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {:02}Z", self.date.format("%Y-%m-%d"), self.hour)
    }
}

/// The levels of a sounding in the order they came from the source, usually surface to top.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Profile {
    levels: Vec<LevelRecord>,
}

impl Profile {
    /// Create a new, empty profile.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sounding_tropo::Profile;
    ///
    /// let prof = Profile::new();
    /// assert!(prof.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Profile::default()
    }

    /// Builder method for the levels.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use metfor::HectoPascal;
    /// use optional::some;
    /// use sounding_tropo::{LevelRecord, Profile};
    ///
    /// let levels: Vec<_> = vec![1000.0, 925.0, 850.0]
    ///     .into_iter()
    ///     .map(|p| LevelRecord { pressure: some(HectoPascal(p)), ..LevelRecord::default() })
    ///     .collect();
    ///
    /// let prof = Profile::new().with_levels(levels);
    /// assert_eq!(prof.len(), 3);
    /// assert_eq!(prof.surface().unwrap().pressure.unwrap(), HectoPascal(1000.0));
    /// assert_eq!(prof.top().unwrap().pressure.unwrap(), HectoPascal(850.0));
    /// ```
    #[inline]
    pub fn with_levels(self, levels: Vec<LevelRecord>) -> Self {
        Profile { levels }
    }

    /// Get the levels.
    #[inline]
    pub fn levels(&self) -> &[LevelRecord] {
        &self.levels
    }

    /// Number of levels.
    #[inline]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Are there any levels at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// The first level, the surface for a well ordered sounding.
    #[inline]
    pub fn surface(&self) -> Option<&LevelRecord> {
        self.levels.first()
    }

    /// The last level.
    #[inline]
    pub fn top(&self) -> Option<&LevelRecord> {
        self.levels.last()
    }

    /// Iterate over the levels in source order.
    #[inline]
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LevelRecord> + ExactSizeIterator {
        self.levels.iter()
    }
}

impl std::iter::FromIterator<LevelRecord> for Profile {
    fn from_iter<I: IntoIterator<Item = LevelRecord>>(iter: I) -> Self {
        Profile {
            levels: iter.into_iter().collect(),
        }
    }
}

// FIXME: only configure for test and doc tests, not possible as of 1.41
#[doc(hidden)]
pub mod doctest {
    use super::*;
    use metfor::{Celsius, HectoPascal, Meters};
    use optional::some;

    /// Build a complete level from pressure, height, temperature and relative humidity.
    pub fn make_level(p: f64, h: f64, t: f64, rh: f64) -> LevelRecord {
        LevelRecord {
            pressure: some(HectoPascal(p)),
            height: some(Meters(h)),
            temperature: some(Celsius(t)),
            dew_point: some(Celsius(t - 5.0)),
            relative_humidity: some(rh),
            ..LevelRecord::default()
        }
    }

    pub fn make_test_profile() -> super::Profile {
        Profile::new().with_levels(vec![
            make_level(1000.0, 200.0, 20.0, 50.0),
            make_level(900.0, 1100.0, 14.0, 40.0),
            make_level(800.0, 2100.0, 8.0, 30.0),
        ])
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_profile() {
        let prof = doctest::make_test_profile();

        println!("prof = {:#?}", prof);
        assert_eq!(prof.len(), 3);
        assert!(prof.iter().all(|lvl| lvl.pressure.is_some()));
        assert!(prof.iter().all(|lvl| lvl.mixing_ratio.is_none()));

        // Levels with missing values still compare equal to themselves.
        assert_eq!(prof, prof.clone());

        let reversed: Profile = prof.iter().rev().cloned().collect();
        assert_eq!(reversed.len(), prof.len());
        assert_eq!(reversed.surface(), prof.top());
        assert_ne!(reversed, prof);
    }

    #[test]
    fn test_sounding_id() {
        let id = SoundingId::new(2024, 12, 31, 0).unwrap();
        assert_eq!(id.day_of_year(), 366);
        assert_eq!(id.year(), 2024);
        assert_eq!(id.month(), 12);
        assert_eq!(id.day(), 31);
        assert_eq!(id.file_key(), "2436600");

        let earlier = SoundingId::new(2024, 12, 30, 12).unwrap();
        assert!(earlier < id);
    }
}

mod level_record;
mod station_info;
