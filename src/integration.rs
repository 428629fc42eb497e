//! Vertical integration of the derived levels into precipitable water and zenith delays.

use crate::{
    constants::{
        PhysicalConstants, GRAVITY_HEIGHT_COEF, GRAVITY_LAT_COEF, N_UNITS, TOP_DELAY_FACTOR,
        TOP_DELAY_WET_OFFSET, TOP_DELAY_WET_T,
    },
    error::{DelayError, Result},
    met_formulas::DerivedLevel,
    sounding::Profile,
};
use itertools::{izip, Itertools};
use metfor::{HectoPascal, Meters, Mm};

/// Precipitable water and the zenith delays of one sounding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TroposphericDelay {
    /// Precipitable water vapor, kg/m^2 which is the same as mm of liquid water.
    pub precipitable_water: Mm,
    /// Zenith hydrostatic delay integrated over the sounding.
    pub zhd: Meters,
    /// Hydrostatic delay of the atmosphere above the last level.
    pub zhd_top: Meters,
    /// Zenith wet delay integrated over the sounding.
    pub zwd: Meters,
    /// Zenith total delay, `zhd + zwd + zhd_top`.
    pub ztd: Meters,
}

/// Gravity at the station, m/s^2.
///
/// # Examples
///
/// ```rust
/// use metfor::Meters;
/// use sounding_tropo::integration::local_gravity;
///
/// // Stronger at the poles than at the equator, weaker with height.
/// assert!(local_gravity(90.0, Meters(0.0), 9.80665) > local_gravity(0.0, Meters(0.0), 9.80665));
/// assert!(local_gravity(45.0, Meters(0.0), 9.80665) > local_gravity(45.0, Meters(1000.0), 9.80665));
/// ```
#[inline]
pub fn local_gravity(latitude_deg: f64, surface_height: Meters, g0: f64) -> f64 {
    let lat = latitude_deg.to_radians();
    g0 * (1.0 - GRAVITY_LAT_COEF * (2.0 * lat).cos() - GRAVITY_HEIGHT_COEF * surface_height.0)
}

/// Hydrostatic delay above the top level from its pressure, temperature, and vapor pressure.
#[inline]
pub fn top_layer_delay(top_pressure: HectoPascal, top: &DerivedLevel) -> Meters {
    let wet_term = (TOP_DELAY_WET_T / top.temperature.0 + TOP_DELAY_WET_OFFSET) * top.vapor_pressure.0;
    Meters(TOP_DELAY_FACTOR * (top_pressure.0 + wet_term))
}

/// Trapezoid rule over consecutive pairs of `(coordinate, value)`, using the absolute difference
/// of the coordinate so the order of the levels doesn't matter.
fn trapezoid<I: Iterator<Item = (f64, f64)>>(pnts: I) -> f64 {
    pnts
        // Look at them in pairs.
        .tuple_windows::<(_, _)>()
        // Do the sum for integrating
        .fold(0.0, |acc, ((x0, y0), (x1, y1))| {
            acc + (y0 + y1) / 2.0 * (x1 - x0).abs()
        })
}

/// Integrate a profile and its derived levels.
///
/// `profile` must be quality controlled and `derived` must be derived from it, level for level.
/// The surface height for gravity is the height of the first level, the top layer closure uses
/// the last level.
///
/// # Examples
///
/// ```rust
/// use sounding_tropo::{derive_levels, integrate, PhysicalConstants};
/// # use sounding_tropo::doctest::make_test_profile;
///
/// let consts = PhysicalConstants::default();
/// let prof = make_test_profile();
/// let derived = derive_levels(&prof, &consts).unwrap();
///
/// let delay = integrate(&prof, &derived, 48.25, &consts).unwrap();
/// assert!(delay.precipitable_water.0 > 0.0);
/// assert!(delay.ztd.0 > 1.5 && delay.ztd.0 < 2.5);
/// ```
pub fn integrate(
    profile: &Profile,
    derived: &[DerivedLevel],
    latitude_deg: f64,
    consts: &PhysicalConstants,
) -> Result<TroposphericDelay> {
    if profile.len() != derived.len() {
        return Err(DelayError::ComputationFailure(format!(
            "{} levels but {} derived levels",
            profile.len(),
            derived.len()
        )));
    }

    if profile.len() < 2 {
        return Err(DelayError::InsufficientData(profile.len()));
    }

    let missing = |what: &str| DelayError::ComputationFailure(format!("missing {}", what));

    let pressure = profile
        .iter()
        .map(|lvl| lvl.pressure.into_option().ok_or_else(|| missing("pressure")))
        .collect::<Result<Vec<HectoPascal>>>()?;
    let height = profile
        .iter()
        .map(|lvl| lvl.height.into_option().ok_or_else(|| missing("height")))
        .collect::<Result<Vec<Meters>>>()?;

    // Checked the length above, there is a first and last level.
    let surface_height = height[0];
    let (top_p, top) = (pressure[pressure.len() - 1], &derived[derived.len() - 1]);

    let g_s = local_gravity(latitude_deg, surface_height, consts.g0);

    // hPa to Pa
    let integrated_q = trapezoid(
        izip!(&pressure, derived).map(|(p, d)| (p.0 * 100.0, d.specific_humidity)),
    );
    let pwv = integrated_q / g_s;

    let zhd = N_UNITS
        * trapezoid(izip!(&height, derived).map(|(h, d)| (h.0, d.hydrostatic_refractivity)));
    let zwd = N_UNITS * trapezoid(izip!(&height, derived).map(|(h, d)| (h.0, d.wet_refractivity)));
    let zhd_top = top_layer_delay(top_p, top);

    let ztd = zhd + zwd + zhd_top.0;

    if ![pwv, zhd, zwd, zhd_top.0, ztd].iter().all(|v| v.is_finite()) {
        return Err(DelayError::ComputationFailure(format!(
            "non-finite result, pwv={} zhd={} zwd={} zhd_top={}",
            pwv, zhd, zwd, zhd_top.0
        )));
    }

    Ok(TroposphericDelay {
        precipitable_water: Mm(pwv),
        zhd: Meters(zhd),
        zhd_top,
        zwd: Meters(zwd),
        ztd: Meters(ztd),
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::met_formulas::derive_levels;
    use crate::sounding::doctest::{make_level, make_test_profile};
    use crate::utility::test_tools::approx_equal;

    #[test]
    fn test_trapezoid() {
        let pnts = vec![(0.0, 1.0), (1.0, 3.0), (3.0, 3.0)];
        assert!(approx_equal(trapezoid(pnts.into_iter()), 8.0, 1.0e-12));

        // Reversed coordinate, same area.
        let pnts = vec![(3.0, 3.0), (1.0, 3.0), (0.0, 1.0)];
        assert!(approx_equal(trapezoid(pnts.into_iter()), 8.0, 1.0e-12));

        assert_eq!(trapezoid(vec![(1.0, 1.0)].into_iter()), 0.0);
    }

    #[test]
    fn test_local_gravity() {
        let g = local_gravity(45.0, Meters(0.0), 9.80665);
        assert!(approx_equal(g, 9.80665, 1.0e-12));

        let g = local_gravity(0.0, Meters(200.0), 9.80665);
        assert!(approx_equal(g, 9.80665 * (1.0 - 0.00266 - 2.8e-7 * 200.0), 1.0e-12));
    }

    #[test]
    fn test_three_level_sounding() {
        let consts = PhysicalConstants::default();
        let prof = make_test_profile();
        let d = derive_levels(&prof, &consts).unwrap();
        let lat = 48.25;

        let delay = integrate(&prof, &d, lat, &consts).unwrap();

        let zhd = 1.0e-6
            * ((d[0].hydrostatic_refractivity + d[1].hydrostatic_refractivity) / 2.0 * 900.0
                + (d[1].hydrostatic_refractivity + d[2].hydrostatic_refractivity) / 2.0 * 1000.0);
        let zwd = 1.0e-6
            * ((d[0].wet_refractivity + d[1].wet_refractivity) / 2.0 * 900.0
                + (d[1].wet_refractivity + d[2].wet_refractivity) / 2.0 * 1000.0);
        let zhd_top = 0.002277
            * (800.0 + (1255.0 / d[2].temperature.0 + 0.05) * d[2].vapor_pressure.0);
        let g_s = 9.80665 * (1.0 - 0.00266 * (2.0 * lat.to_radians()).cos() - 2.8e-7 * 200.0);
        let pwv = ((d[0].specific_humidity + d[1].specific_humidity) / 2.0 * 10_000.0
            + (d[1].specific_humidity + d[2].specific_humidity) / 2.0 * 10_000.0)
            / g_s;

        assert!(approx_equal(delay.zhd.0, zhd, 1.0e-12));
        assert!(approx_equal(delay.zwd.0, zwd, 1.0e-12));
        assert!(approx_equal(delay.zhd_top.0, zhd_top, 1.0e-12));
        assert!(approx_equal(delay.precipitable_water.0, pwv, 1.0e-9));
        assert!(approx_equal(delay.ztd.0, zhd + zwd + zhd_top, 1.0e-12));

        assert!(delay.precipitable_water.0 > 0.0);
        assert!(delay.zwd.0 > 0.0);
        // The bulk of the hydrostatic delay is above the last level.
        assert!(delay.zhd_top.0 > delay.zhd.0);
        assert!(delay.ztd.0 > 1.5 && delay.ztd.0 < 2.5);
    }

    #[test]
    fn test_reordered_levels() {
        let consts = PhysicalConstants::default();
        let prof = make_test_profile();
        let d = derive_levels(&prof, &consts).unwrap();
        let delay = integrate(&prof, &d, 48.25, &consts).unwrap();

        let mut levels = prof.levels().to_vec();
        levels.swap(0, 1);
        let shuffled = Profile::new().with_levels(levels);
        let d = derive_levels(&shuffled, &consts).unwrap();
        let shuffled_delay = integrate(&shuffled, &d, 48.25, &consts).unwrap();

        for v in &[
            shuffled_delay.precipitable_water.0,
            shuffled_delay.zhd.0,
            shuffled_delay.zwd.0,
            shuffled_delay.ztd.0,
        ] {
            assert!(v.is_finite() && *v > 0.0);
        }
        // Same top level, the closure doesn't change.
        assert_eq!(shuffled_delay.zhd_top, delay.zhd_top);

        // Fully reversed, every pair is the same with the sign flipped.
        let reversed: Profile = prof.iter().rev().cloned().collect();
        let d = derive_levels(&reversed, &consts).unwrap();
        let reversed_delay = integrate(&reversed, &d, 48.25, &consts).unwrap();
        assert!(approx_equal(reversed_delay.zhd.0, delay.zhd.0, 1.0e-12));
        assert!(approx_equal(reversed_delay.zwd.0, delay.zwd.0, 1.0e-12));
    }

    #[test]
    fn test_insufficient_levels() {
        let consts = PhysicalConstants::default();
        let prof = Profile::new().with_levels(vec![make_level(1000.0, 200.0, 20.0, 50.0)]);
        let d = derive_levels(&prof, &consts).unwrap();

        match integrate(&prof, &d, 48.25, &consts) {
            Err(DelayError::InsufficientData(1)) => {}
            other => panic!("unexpected {:?}", other),
        }

        match integrate(&Profile::new(), &[], 48.25, &consts) {
            Err(DelayError::InsufficientData(0)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_is_failure() {
        let consts = PhysicalConstants::default();
        // Absolute zero, the refractivity blows up.
        let prof = Profile::new().with_levels(vec![
            make_level(1000.0, 200.0, 20.0, 50.0),
            make_level(900.0, 1100.0, -273.15, 40.0),
        ]);
        let d = derive_levels(&prof, &consts).unwrap();

        match integrate(&prof, &d, 48.25, &consts) {
            Err(DelayError::ComputationFailure(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }
}
