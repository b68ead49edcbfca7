use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::constants::NODATAVAL;

/// DateInput represents every date-like value the estimators accept.
/// Hosts with dynamic values (python) map whatever they receive to one of the variants.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    /// structured calendar date/time
    Structured(NaiveDateTime),
    /// textual date, must be exactly "YYYY-MM-DD"
    Iso(String),
    /// missing or empty date
    Absent,
    /// a value of an unknown type, named by the host
    Unsupported(String),
}

impl DateInput {
    pub fn is_absent(&self) -> bool {
        matches!(self, DateInput::Absent)
    }
}

impl Default for DateInput {
    fn default() -> Self {
        DateInput::Absent
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(value: NaiveDateTime) -> Self {
        DateInput::Structured(value)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        DateInput::Structured(value.and_time(NaiveTime::MIN))
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(value: DateTime<Utc>) -> Self {
        DateInput::Structured(value.naive_utc())
    }
}

/// Zone-aware values keep their wall clock time, the day of year is local
impl From<DateTime<FixedOffset>> for DateInput {
    fn from(value: DateTime<FixedOffset>) -> Self {
        DateInput::Structured(value.naive_local())
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            DateInput::Absent
        } else {
            DateInput::Iso(value.to_owned())
        }
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        if value.is_empty() {
            DateInput::Absent
        } else {
            DateInput::Iso(value)
        }
    }
}

impl<T: Into<DateInput>> From<Option<T>> for DateInput {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => DateInput::Absent,
        }
    }
}

/// InputElement holds the daily forcing of the ET0 estimator.
/// Missing temperatures are stored as NODATAVAL, like every other model input.
#[derive(Debug, Clone)]
pub struct InputElement {
    /// minimum air temperature [°C]
    pub tmin: f64,
    /// maximum air temperature [°C]
    pub tmax: f64,
    /// day of the observation
    pub date: DateInput,
}

impl Default for InputElement {
    fn default() -> Self {
        Self {
            tmin: NODATAVAL,
            tmax: NODATAVAL,
            date: DateInput::Absent,
        }
    }
}

fn as_option(value: f64) -> Option<f64> {
    if value.is_nan() || value <= (NODATAVAL + 1.0) {
        None
    } else {
        Some(value)
    }
}

impl InputElement {
    pub fn new(tmin: Option<f64>, tmax: Option<f64>, date: impl Into<DateInput>) -> Self {
        Self {
            tmin: tmin.unwrap_or(NODATAVAL),
            tmax: tmax.unwrap_or(NODATAVAL),
            date: date.into(),
        }
    }

    pub fn tmin(&self) -> Option<f64> {
        as_option(self.tmin)
    }

    pub fn tmax(&self) -> Option<f64> {
        as_option(self.tmax)
    }
}
