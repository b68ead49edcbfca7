use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use pyo3::{exceptions::PyValueError, prelude::*, types::PyModule, wrap_pyfunction, Bound};

use crate::{
    constants::{DEFAULT_KRS, DEFAULT_LATENT_HEAT, DEFAULT_LATITUDE, NODATAVAL},
    error::Et0Error,
    models::input::DateInput,
    modules::{functions, hargreaves::functions as hargreaves},
};

fn to_py_err(err: Et0Error) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Map any python value to a DateInput: falsy values are absent,
/// datetime (naive or zone-aware) and date are structured, str is parsed later
fn date_from_py(date: Option<&Bound<'_, PyAny>>) -> PyResult<DateInput> {
    let date = match date {
        Some(date) if date.is_truthy()? => date,
        _ => return Ok(DateInput::Absent),
    };
    // datetime is a subclass of date, try it first
    if let Ok(value) = date.extract::<NaiveDateTime>() {
        return Ok(DateInput::Structured(value));
    }
    if let Ok(value) = date.extract::<DateTime<FixedOffset>>() {
        return Ok(DateInput::from(value));
    }
    if let Ok(value) = date.extract::<NaiveDate>() {
        return Ok(DateInput::from(value));
    }
    if let Ok(value) = date.extract::<String>() {
        return Ok(DateInput::from(value));
    }
    let type_name = date.get_type().name()?.to_string();
    Ok(DateInput::Unsupported(type_name))
}

#[pyfunction]
#[pyo3(signature = (frmt, date=None))]
fn strftime(frmt: &str, date: Option<&Bound<'_, PyAny>>) -> PyResult<String> {
    let date = date_from_py(date)?;
    functions::strftime(frmt, &date).map_err(to_py_err)
}

#[pyfunction]
fn sun_nr(doy: f64, lat: f64) -> PyResult<f64> {
    hargreaves::extraterrestrial_radiation(doy, lat).map_err(to_py_err)
}

#[pyfunction]
fn daylight_hours(doy: f64, lat: f64) -> PyResult<f64> {
    functions::daylight_hours(doy, lat).map_err(to_py_err)
}

#[pyfunction]
#[pyo3(
    signature = (tmin, tmax, date=None, lat=DEFAULT_LATITUDE, lam=DEFAULT_LATENT_HEAT, krs=DEFAULT_KRS)
)]
fn hargreaves_samani(
    tmin: Option<f64>,
    tmax: Option<f64>,
    date: Option<&Bound<'_, PyAny>>,
    lat: f64,
    lam: f64,
    krs: f64,
) -> PyResult<Option<f64>> {
    let date = date_from_py(date)?;
    hargreaves::hargreaves_samani(tmin, tmax, &date, lat, lam, krs).map_err(to_py_err)
}

#[pyfunction]
fn nodata_value() -> f64 {
    NODATAVAL
}

#[pymodule]
fn et0_py(module: &Bound<'_, PyModule>) -> PyResult<()> {
    module.add_function(wrap_pyfunction!(strftime, module)?)?;
    module.add_function(wrap_pyfunction!(sun_nr, module)?)?;
    module.add_function(wrap_pyfunction!(daylight_hours, module)?)?;
    module.add_function(wrap_pyfunction!(hargreaves_samani, module)?)?;
    module.add_function(wrap_pyfunction!(nodata_value, module)?)?;

    module.add("ET0_VERSION", crate::version::FULL_VERSION)?;
    Ok(())
}
