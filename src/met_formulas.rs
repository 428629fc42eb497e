//! Moisture and refractivity of a single level.
//!
//! Everything here is level by level, nothing depends on the neighboring levels. The vertical
//! integration is in the `integration` module.

use crate::{
    constants::{
        PhysicalConstants, EPSILON, MAGNUS_ICE, MAGNUS_WATER, SAT_VAPOR_PRESSURE_0C,
        ZERO_CELSIUS_K,
    },
    error::{DelayError, Result},
    sounding::{LevelRecord, Profile},
};
use metfor::{Celsius, HectoPascal, Kelvin};

/// Saturation vapor pressure with the Magnus formula, over water at or above freezing and over
/// ice below freezing.
///
/// # Examples
///
/// ```rust
/// use metfor::{Celsius, HectoPascal};
/// use sounding_tropo::met_formulas::saturation_vapor_pressure;
///
/// assert_eq!(saturation_vapor_pressure(Celsius(0.0)), HectoPascal(6.112));
/// assert!(saturation_vapor_pressure(Celsius(20.0)) > HectoPascal(23.0));
/// assert!(saturation_vapor_pressure(Celsius(-20.0)) < HectoPascal(1.1));
/// ```
#[inline]
pub fn saturation_vapor_pressure(temperature: Celsius) -> HectoPascal {
    let Celsius(t) = temperature;
    let (a, b) = if t >= 0.0 { MAGNUS_WATER } else { MAGNUS_ICE };

    HectoPascal(SAT_VAPOR_PRESSURE_0C * (a * t / (t + b)).exp())
}

/// Partial pressure of water vapor given relative humidity (%) and the saturation vapor pressure.
#[inline]
pub fn vapor_pressure(relative_humidity: f64, saturation: HectoPascal) -> HectoPascal {
    HectoPascal(relative_humidity / 100.0 * saturation.0)
}

/// Specific humidity (kg/kg) from the vapor pressure and the total pressure.
#[inline]
pub fn specific_humidity(vapor_pressure: HectoPascal, pressure: HectoPascal) -> f64 {
    let HectoPascal(pw) = vapor_pressure;
    let HectoPascal(p) = pressure;

    EPSILON * pw / (p - (1.0 - EPSILON) * pw)
}

/// Partial pressure of the dry air.
#[inline]
pub fn dry_pressure(pressure: HectoPascal, vapor_pressure: HectoPascal) -> HectoPascal {
    HectoPascal(pressure.0 - vapor_pressure.0)
}

/// Hydrostatic refractivity in N-units.
#[inline]
pub fn hydrostatic_refractivity(dry_pressure: HectoPascal, temperature: Kelvin, k1: f64) -> f64 {
    k1 * dry_pressure.0 / temperature.0
}

/// Wet refractivity in N-units.
#[inline]
pub fn wet_refractivity(vapor_pressure: HectoPascal, temperature: Kelvin, k2: f64, k3: f64) -> f64 {
    let HectoPascal(pw) = vapor_pressure;
    let Kelvin(t) = temperature;

    k2 * pw / t + k3 * pw / (t * t)
}

/// Physical quantities derived from one `LevelRecord`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DerivedLevel {
    /// Absolute temperature
    pub temperature: Kelvin,
    /// Saturation vapor pressure
    pub saturation_vapor_pressure: HectoPascal,
    /// Partial pressure of water vapor
    pub vapor_pressure: HectoPascal,
    /// Specific humidity in kg/kg
    pub specific_humidity: f64,
    /// Partial pressure of dry air
    pub dry_pressure: HectoPascal,
    /// Hydrostatic refractivity in N-units
    pub hydrostatic_refractivity: f64,
    /// Wet refractivity in N-units
    pub wet_refractivity: f64,
}

/// Derive the physical quantities of a level. Pressure, temperature, and relative humidity must
/// be present.
pub fn derive_level(level: &LevelRecord, consts: &PhysicalConstants) -> Result<DerivedLevel> {
    let missing = |what: &str| DelayError::ComputationFailure(format!("missing {}", what));

    let p = level.pressure.into_option().ok_or_else(|| missing("pressure"))?;
    let t = level
        .temperature
        .into_option()
        .ok_or_else(|| missing("temperature"))?;
    let rh = level
        .relative_humidity
        .into_option()
        .ok_or_else(|| missing("relative humidity"))?;

    let t_k = Kelvin(t.0 + ZERO_CELSIUS_K);
    let e_w = saturation_vapor_pressure(t);
    let p_w = vapor_pressure(rh, e_w);
    let p_d = dry_pressure(p, p_w);

    Ok(DerivedLevel {
        temperature: t_k,
        saturation_vapor_pressure: e_w,
        vapor_pressure: p_w,
        specific_humidity: specific_humidity(p_w, p),
        dry_pressure: p_d,
        hydrostatic_refractivity: hydrostatic_refractivity(p_d, t_k, consts.k1),
        wet_refractivity: wet_refractivity(p_w, t_k, consts.k2, consts.k3),
    })
}

/// Derive every level of a profile, failing on the first level that can't be derived.
pub fn derive_levels(profile: &Profile, consts: &PhysicalConstants) -> Result<Vec<DerivedLevel>> {
    profile
        .iter()
        .enumerate()
        .map(|(i, lvl)| {
            derive_level(lvl, consts).map_err(|err| match err {
                DelayError::ComputationFailure(msg) => {
                    DelayError::ComputationFailure(format!("level {}: {}", i, msg))
                }
                err => err,
            })
        })
        .collect()
}

/// Wet refractivity of every level, the auxiliary output of a sounding.
#[inline]
pub fn wet_refractivity_profile(derived: &[DerivedLevel]) -> Vec<f64> {
    derived.iter().map(|d| d.wet_refractivity).collect()
}
