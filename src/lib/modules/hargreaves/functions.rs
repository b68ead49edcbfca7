use std::f64::consts::PI;

use log::trace;

use super::constants::*;
use crate::{
    constants::{J_TO_MJ, SECONDS_PER_DAY, SOLAR_CONSTANT},
    error::Et0Error,
    models::input::DateInput,
    modules::functions::{day_of_year, solar_declination, sunset_hour_angle},
};

/// Extraterrestrial radiation at the top of the atmosphere [J m-2 day-1]
/// NOTE: only valid for latitudes between 0 and 67 degrees (tropics and temperate zone)
pub fn extraterrestrial_radiation(
    doy: f64,      // day of year
    latitude: f64, // latitude [°], negative for southern hemisphere
) -> Result<f64, Et0Error> {
    let latitude_rad = latitude * PI / 180.0;
    let declination = solar_declination(doy);
    let sunset_angle = sunset_hour_angle(latitude, doy)?;
    // day angle [rad]
    let day_angle = 2.0 * PI / DAYS_PER_YEAR * doy;
    // relative distance to sun
    let dr = 1.0 + DR_AMPLITUDE * (day_angle - DR_PHASE).cos();
    let rext = SOLAR_CONSTANT * SECONDS_PER_DAY / PI
        * dr
        * (sunset_angle * latitude_rad.sin() * declination.sin()
            + sunset_angle.sin() * latitude_rad.cos() * declination.cos());
    Ok(rext)
}

/// Hargreaves-Samani formula from the extraterrestrial radiation [MJ m-2 day-1]
pub fn et0_from_radiation(
    tmin: f64, // minimum air temperature [°C]
    tmax: f64, // maximum air temperature [°C]
    ra: f64,   // extraterrestrial radiation [MJ m-2 day-1]
    lam: f64,  // latent heat of vaporization [MJ kg-1]
    krs: f64,  // radiation adjustment coefficient [-]
) -> Result<f64, Et0Error> {
    if lam == 0.0 || !lam.is_finite() {
        return Err(Et0Error::Configuration { lam });
    }
    let tmean = (tmax + tmin) / 2.0;
    Ok(HS_COEFF * krs * (ra / lam) * (tmax - tmin).abs().powf(HS_POW) * (tmean + HS_TEMP_OFFSET))
}

/// Reference evapotranspiration [mm day-1] with the Hargreaves-Samani method.
/// Returns `Ok(None)` when one of the temperatures is missing.
pub fn hargreaves_samani(
    tmin: Option<f64>,
    tmax: Option<f64>,
    date: &DateInput,
    latitude: f64,
    lam: f64,
    krs: f64,
) -> Result<Option<f64>, Et0Error> {
    let (tmin, tmax) = match (tmin, tmax) {
        (Some(tmin), Some(tmax)) => (tmin, tmax),
        _ => return Ok(None),
    };
    let doy = day_of_year(date)?;
    let ra = extraterrestrial_radiation(doy, latitude)? / J_TO_MJ;
    trace!("doy {doy}, lat {latitude}: Ra {ra:.4} MJ/m2/day");
    et0_from_radiation(tmin, tmax, ra, lam, krs).map(Some)
}
