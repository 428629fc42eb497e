use crate::error::{DelayError, Result};
use crate::keys::LevelField;
use metfor::{Celsius, HectoPascal, Kelvin, Knots, Meters};
use optional::{none, some, Optioned};
use std::str::FromStr;

/// One level of a sounding, a copy of a row of the source table.
///
/// Every value may be missing.
#[derive(Clone, Default, Copy, Debug)]
pub struct LevelRecord {
    /// Pressure in hPa
    pub pressure: Optioned<HectoPascal>,
    /// Geopotential height in meters
    pub height: Optioned<Meters>,
    /// Temperature in C
    pub temperature: Optioned<Celsius>,
    /// Dew point in C
    pub dew_point: Optioned<Celsius>,
    /// Relative humidity in percent
    pub relative_humidity: Optioned<f64>,
    /// Mixing ratio in g/kg
    pub mixing_ratio: Optioned<f64>,
    /// Wind direction in degrees
    pub wind_direction: Optioned<f64>,
    /// Wind speed in knots
    pub wind_speed: Optioned<Knots>,
    /// Potential temperature in Kelvin
    pub theta: Optioned<Kelvin>,
    /// Equivalent potential temperature in Kelvin
    pub theta_e: Optioned<Kelvin>,
    /// Virtual potential temperature in Kelvin
    pub theta_v: Optioned<Kelvin>,
}

impl LevelRecord {
    /// Is the given field missing?
    pub fn is_missing(&self, field: LevelField) -> bool {
        use LevelField::*;

        match field {
            Pressure => self.pressure.is_none(),
            Height => self.height.is_none(),
            Temperature => self.temperature.is_none(),
            DewPoint => self.dew_point.is_none(),
            RelativeHumidity => self.relative_humidity.is_none(),
            MixingRatio => self.mixing_ratio.is_none(),
            WindDirection => self.wind_direction.is_none(),
            WindSpeed => self.wind_speed.is_none(),
            Theta => self.theta.is_none(),
            ThetaE => self.theta_e.is_none(),
            ThetaV => self.theta_v.is_none(),
        }
    }
}

// Missing values are stored as NaN, so compare the options rather than the raw values.
impl PartialEq for LevelRecord {
    fn eq(&self, other: &Self) -> bool {
        self.pressure.into_option() == other.pressure.into_option()
            && self.height.into_option() == other.height.into_option()
            && self.temperature.into_option() == other.temperature.into_option()
            && self.dew_point.into_option() == other.dew_point.into_option()
            && self.relative_humidity.into_option() == other.relative_humidity.into_option()
            && self.mixing_ratio.into_option() == other.mixing_ratio.into_option()
            && self.wind_direction.into_option() == other.wind_direction.into_option()
            && self.wind_speed.into_option() == other.wind_speed.into_option()
            && self.theta.into_option() == other.theta.into_option()
            && self.theta_e.into_option() == other.theta_e.into_option()
            && self.theta_v.into_option() == other.theta_v.into_option()
    }
}

// The token used for a missing value in a level line.
const MISSING_TOKEN: &str = "NaN";

fn parse_value(token: &str, line: &str) -> Result<Optioned<f64>> {
    if token == MISSING_TOKEN {
        return Ok(none());
    }

    let val = f64::from_str(token).map_err(|_| DelayError::MalformedLine(line.to_owned()))?;
    if val.is_nan() {
        Ok(none())
    } else {
        Ok(some(val))
    }
}

impl FromStr for LevelRecord {
    type Err = DelayError;

    /// Parse one whitespace separated level line, the columns in the order of `LevelField`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use metfor::HectoPascal;
    /// use sounding_tropo::LevelRecord;
    ///
    /// let line = "1000.0 110 21.6 17.6 78 12.81 235 6 294.0 331.3 296.3";
    /// let row: LevelRecord = line.parse().unwrap();
    /// assert_eq!(row.pressure.unwrap(), HectoPascal(1000.0));
    ///
    /// let row: LevelRecord = "925.0 788 NaN NaN 60 NaN 250 14 NaN NaN NaN".parse().unwrap();
    /// assert!(row.temperature.is_none());
    ///
    /// assert!("925.0 788 16.2".parse::<LevelRecord>().is_err());
    /// ```
    fn from_str(line: &str) -> Result<Self> {
        let vals = line
            .split_whitespace()
            .map(|token| parse_value(token, line))
            .collect::<Result<Vec<_>>>()?;

        match *vals.as_slice() {
            [pres, hght, temp, dwpt, relh, mixr, drct, sped, thta, thte, thtv] => Ok(LevelRecord {
                pressure: pres.map_t(HectoPascal),
                height: hght.map_t(Meters),
                temperature: temp.map_t(Celsius),
                dew_point: dwpt.map_t(Celsius),
                relative_humidity: relh,
                mixing_ratio: mixr,
                wind_direction: drct,
                wind_speed: sped.map_t(Knots),
                theta: thta.map_t(Kelvin),
                theta_e: thte.map_t(Kelvin),
                theta_v: thtv.map_t(Kelvin),
            }),
            _ => Err(DelayError::MalformedLine(line.to_owned())),
        }
    }
}
