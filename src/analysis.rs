//! Run the whole chain on one sounding: parse, quality control, level physics, integration.

use crate::{
    constants::PhysicalConstants,
    error::{DelayError, Result},
    integration::{integrate, TroposphericDelay},
    keys::TableColumn,
    met_formulas::{derive_levels, wet_refractivity_profile},
    parse::parse_profile,
    quality::filter_profile,
    sounding::{Profile, SoundingId, StationInfo},
};
use log::debug;
use metfor::{Meters, Mm};

/// One row of the result table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoundingResult {
    /// Calendar year
    pub year: i32,
    /// Day of the year
    pub day_of_year: u32,
    /// Synoptic hour, UTC
    pub hour: u32,
    /// Station latitude in degrees
    pub latitude: f64,
    /// Station longitude in degrees
    pub longitude: f64,
    /// Height of the lowest usable level
    pub surface_height: Meters,
    /// Precipitable water vapor
    pub precipitable_water: Mm,
    /// Zenith wet delay
    pub zwd: Meters,
    /// Zenith total delay
    pub ztd: Meters,
}

impl SoundingResult {
    /// Build a row from the sounding identity, station, and the integrated delays.
    pub fn new(
        id: SoundingId,
        station: &StationInfo,
        surface_height: Meters,
        delay: &TroposphericDelay,
    ) -> Self {
        SoundingResult {
            year: id.year(),
            day_of_year: id.day_of_year(),
            hour: id.hour(),
            latitude: station.latitude(),
            longitude: station.longitude(),
            surface_height,
            precipitable_water: delay.precipitable_water,
            zwd: delay.zwd,
            ztd: delay.ztd,
        }
    }

    /// Method to retrieve a value by column, as a float for the table writer.
    pub fn get(&self, col: TableColumn) -> f64 {
        use TableColumn::*;

        match col {
            Year => f64::from(self.year),
            DayOfYear => f64::from(self.day_of_year),
            Hour => f64::from(self.hour),
            Latitude => self.latitude,
            Longitude => self.longitude,
            SurfaceHeight => self.surface_height.0,
            PrecipitableWater => self.precipitable_water.0,
            ZenithWetDelay => self.zwd.0,
            ZenithTotalDelay => self.ztd.0,
        }
    }
}

/// Everything produced from one sounding.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedSounding {
    /// The table row.
    pub result: SoundingResult,
    /// Full delay breakdown, including the hydrostatic parts not in the table.
    pub delay: TroposphericDelay,
    /// Wet refractivity of each level that survived quality control, N-units.
    pub wet_refractivity: Vec<f64>,
}

/// Quality control, derive and integrate an already parsed profile.
pub fn analyze_profile(
    profile: &Profile,
    id: SoundingId,
    station: &StationInfo,
    consts: &PhysicalConstants,
) -> Result<ProcessedSounding> {
    let filtered = filter_profile(profile);
    if filtered.len() < 2 {
        return Err(DelayError::InsufficientData(filtered.len()));
    }

    let surface_height = filtered
        .surface()
        .and_then(|lvl| lvl.height.into_option())
        .ok_or(DelayError::InsufficientData(0))?;

    let derived = derive_levels(&filtered, consts)?;
    let delay = integrate(&filtered, &derived, station.latitude(), consts)?;

    debug!(
        "{} {}: {} levels, pwv={:.2} ztd={:.4}",
        station.id(),
        id,
        filtered.len(),
        delay.precipitable_water.0,
        delay.ztd.0
    );

    Ok(ProcessedSounding {
        result: SoundingResult::new(id, station, surface_height, &delay),
        delay,
        wet_refractivity: wet_refractivity_profile(&derived),
    })
}

/// Process the raw text of one sounding.
///
/// Every failure is returned, not logged, the caller decides how bad it is.
///
/// # Examples
///
/// ```rust
/// use sounding_tropo::{process_sounding, DelayError, PhysicalConstants, SoundingId, StationInfo};
///
/// let text = "\
///    PRES   HGHT   TEMP   DWPT   RELH   MIXR   DRCT   SKNT   THTA   THTE   THTV
///  1000.0    200   20.0   9.3     50   7.29    235      6  291.6  312.8  292.9
///   900.0   1100   14.0   0.7     40   4.48    240     10  294.5  307.9  295.3
///   800.0   2100    8.0  -8.7     30   2.53    250     14  297.8  305.7  298.3
/// ";
///
/// let stn = StationInfo::new("11035", (48.25, 16.36));
/// let id = SoundingId::new(2024, 7, 1, 12).unwrap();
/// let consts = PhysicalConstants::default();
///
/// let snd = process_sounding(text, id, &stn, &consts).unwrap();
/// assert_eq!(snd.result.day_of_year, 183);
/// assert_eq!(snd.wet_refractivity.len(), 3);
///
/// match process_sounding("no data", id, &stn, &consts) {
///     Err(DelayError::InsufficientData(0)) => {}
///     _ => panic!("expected insufficient data"),
/// }
/// ```
#[inline]
pub fn process_sounding(
    text: &str,
    id: SoundingId,
    station: &StationInfo,
    consts: &PhysicalConstants,
) -> Result<ProcessedSounding> {
    analyze_profile(&parse_profile(text), id, station, consts)
}
