//! Configuration of a batch run.

use crate::{
    constants::PhysicalConstants,
    error::{DelayError, Result},
    sounding::SoundingId,
};
use std::ops::RangeInclusive;

/// Default station, Wien Hohe Warte.
pub const DEFAULT_STATION: &str = "11035";

/// Default launch hours, UTC.
pub const DEFAULT_HOURS: [u32; 2] = [0, 12];

/// Default name of the result table.
pub const DEFAULT_TABLE_NAME: &str = "RS_TRP.txt";

/// What to process: one station over a range of years and months at some hours.
///
/// Both ranges are inclusive, every day of every month in the range is visited.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Station identifier passed to the station provider and the sounding source.
    pub station_id: String,
    /// Years to process.
    pub years: RangeInclusive<i32>,
    /// Months to process in each year, 1 to 12.
    pub months: RangeInclusive<u32>,
    /// Launch hours to process on each day, 0 to 23.
    pub hours: Vec<u32>,
    /// Constants for the physics.
    pub constants: PhysicalConstants,
}

impl RunConfig {
    /// Create a configuration with the default constants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sounding_tropo::RunConfig;
    ///
    /// let cfg = RunConfig::new("11035", 2024..=2024, 7..=7, vec![0, 12]);
    /// assert!(cfg.validate().is_ok());
    ///
    /// // July has 31 days, two soundings a day.
    /// assert_eq!(cfg.sounding_ids().len(), 62);
    /// ```
    pub fn new<S: Into<String>>(
        station_id: S,
        years: RangeInclusive<i32>,
        months: RangeInclusive<u32>,
        hours: Vec<u32>,
    ) -> Self {
        RunConfig {
            station_id: station_id.into(),
            years,
            months,
            hours,
            constants: PhysicalConstants::default(),
        }
    }

    /// Builder method for the physical constants.
    pub fn with_constants(self, constants: PhysicalConstants) -> Self {
        RunConfig { constants, ..self }
    }

    /// Check the ranges make sense.
    pub fn validate(&self) -> Result<()> {
        let bad = |msg: String| Err(DelayError::InvalidConfig(msg));

        if self.station_id.trim().is_empty() {
            return bad("empty station id".to_owned());
        }
        if self.years.is_empty() {
            return bad(format!("empty year range {:?}", self.years));
        }
        if self.months.is_empty() || *self.months.start() < 1 || *self.months.end() > 12 {
            return bad(format!("month range {:?} not within 1..=12", self.months));
        }
        if self.hours.is_empty() {
            return bad("no hours".to_owned());
        }
        if let Some(hour) = self.hours.iter().find(|&&h| h > 23) {
            return bad(format!("hour {} not within 0..=23", hour));
        }

        Ok(())
    }

    /// Every sounding to look for, in chronological order by day and in the given hour order
    /// within a day.
    pub fn sounding_ids(&self) -> Vec<SoundingId> {
        let mut ids = Vec::new();

        for year in self.years.clone() {
            for month in self.months.clone() {
                // Days past the end of the month are not valid dates.
                for day in 1..=31 {
                    for &hour in &self.hours {
                        if let Some(id) = SoundingId::new(year, month, day, hour) {
                            ids.push(id);
                        }
                    }
                }
            }
        }

        ids
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig::new(DEFAULT_STATION, 2024..=2024, 1..=12, DEFAULT_HOURS.to_vec())
    }
}
