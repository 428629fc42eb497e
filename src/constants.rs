//! Physical constants used when deriving refractivity and integrating the profile.

/// Standard gravity, m/s^2
pub const STANDARD_GRAVITY: f64 = 9.80665;

/// Hydrostatic refractivity coefficient k1, K/hPa
pub const K1: f64 = 77.689;

/// Wet refractivity coefficient k2, K/hPa
pub const K2: f64 = 71.295;

/// Wet refractivity coefficient k3, K^2/hPa
pub const K3: f64 = 375_463.0;

/// Offset between Celsius and Kelvin.
pub const ZERO_CELSIUS_K: f64 = 273.15;

/// Saturation vapor pressure at 0C, hPa
pub(crate) const SAT_VAPOR_PRESSURE_0C: f64 = 6.112;

// Magnus coefficients over liquid water and over ice.
pub(crate) const MAGNUS_WATER: (f64, f64) = (17.67, 243.5);
pub(crate) const MAGNUS_ICE: (f64, f64) = (21.85, 265.5);

/// Ratio of the molar masses of water vapor and dry air, as used for specific humidity.
pub(crate) const EPSILON: f64 = 0.622;

// Gravity variation with latitude and height.
pub(crate) const GRAVITY_LAT_COEF: f64 = 0.00266;
pub(crate) const GRAVITY_HEIGHT_COEF: f64 = 2.8e-7;

// Saastamoinen style closure for the atmosphere above the last level.
pub(crate) const TOP_DELAY_FACTOR: f64 = 0.002277;
pub(crate) const TOP_DELAY_WET_T: f64 = 1255.0;
pub(crate) const TOP_DELAY_WET_OFFSET: f64 = 0.05;

/// Refractivity in N-units to a unitless index deviation.
pub(crate) const N_UNITS: f64 = 1.0e-6;

/// The constants the level physics and the integrator close over.
///
/// The defaults are the usual Thayer/Bevis style coefficients, change them to test the
/// sensitivity of the delays to the refractivity model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// Hydrostatic refractivity coefficient, K/hPa
    pub k1: f64,
    /// First wet refractivity coefficient, K/hPa
    pub k2: f64,
    /// Second wet refractivity coefficient, K^2/hPa
    pub k3: f64,
    /// Standard gravity, m/s^2
    pub g0: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        PhysicalConstants {
            k1: K1,
            k2: K2,
            k3: K3,
            g0: STANDARD_GRAVITY,
        }
    }
}
