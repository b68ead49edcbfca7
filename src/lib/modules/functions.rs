use std::f64::consts::PI;
use std::fmt::Write;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use log::trace;

use crate::{
    constants::{DAY_OF_YEAR_FMT, ISO_DATE_FMT},
    error::Et0Error,
    models::input::DateInput,
};

/// Parse a date written exactly as "YYYY-MM-DD" (zero padded, dash separated)
pub fn parse_iso_date(text: &str) -> Result<NaiveDate, Et0Error> {
    let bytes = text.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(idx, b)| match idx {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(Et0Error::DateParse {
            input: text.to_owned(),
            reason: "expected YYYY-MM-DD".to_owned(),
        });
    }
    let date = NaiveDate::parse_from_str(text, ISO_DATE_FMT).map_err(|err| Et0Error::DateParse {
        input: text.to_owned(),
        reason: err.to_string(),
    })?;
    // calendar years start at 1
    if date.year() < 1 {
        return Err(Et0Error::DateParse {
            input: text.to_owned(),
            reason: "year is out of range".to_owned(),
        });
    }
    Ok(date)
}

fn format_datetime(frmt: &str, date: &NaiveDateTime) -> Result<String, Et0Error> {
    // chrono reports unknown tokens as a fmt error
    let mut out = String::new();
    write!(out, "{}", date.format(frmt)).map_err(|_| Et0Error::InvalidFormat {
        format: frmt.to_owned(),
    })?;
    Ok(out)
}

/// Format a date-like value with a strftime specifier.
/// An absent date yields an empty string, an unknown value type is an error.
pub fn strftime(frmt: &str, date: &DateInput) -> Result<String, Et0Error> {
    match date {
        DateInput::Absent => Ok(String::new()),
        DateInput::Structured(date) => format_datetime(frmt, date),
        DateInput::Iso(text) => {
            let date = parse_iso_date(text)?;
            format_datetime(frmt, &date.and_time(NaiveTime::MIN))
        }
        DateInput::Unsupported(type_name) => Err(Et0Error::UnsupportedDate {
            type_name: type_name.clone(),
        }),
    }
}

/// Day of year [1-366] of a date-like value, read back from its "%j" rendering
pub fn day_of_year(date: &DateInput) -> Result<f64, Et0Error> {
    let jul = strftime(DAY_OF_YEAR_FMT, date)?;
    jul.parse::<f64>().map_err(|err| Et0Error::DateParse {
        input: jul.clone(),
        reason: err.to_string(),
    })
}

/// Solar declination [rad]
pub fn solar_declination(doy: f64) -> f64 {
    0.409 * (2.0 * PI / 365.0 * doy - 1.39).sin()
}

/// Sunset hour angle [rad].
/// Polar day and polar night have no sunset: the arccosine argument is out of range.
pub fn sunset_hour_angle(latitude: f64, doy: f64) -> Result<f64, Et0Error> {
    let latitude_rad = latitude * PI / 180.0;
    let declination = solar_declination(doy);
    let argument = -latitude_rad.tan() * declination.tan();
    if !(-1.0..=1.0).contains(&argument) {
        return Err(Et0Error::Domain {
            latitude,
            day_of_year: doy,
            argument,
        });
    }
    let sunset_angle = argument.acos();
    trace!(
        "doy {doy}: declination {declination:.6} rad, sunset angle {sunset_angle:.6} rad"
    );
    Ok(sunset_angle)
}

/// Maximum sunshine duration N [h] for a given day of year and latitude
pub fn daylight_hours(
    doy: f64,      // day of year
    latitude: f64, // latitude [°]
) -> Result<f64, Et0Error> {
    // FAO formula, shares the sunset angle with the extraterrestrial radiation
    let sunset_angle = sunset_hour_angle(latitude, doy)?;
    Ok(24.0 / PI * sunset_angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::{Datelike, NaiveDateTime};

    #[test]
    fn strftime_iso_day_of_year() {
        let jul = strftime("%j", &DateInput::from("2018-08-07")).expect("should format");
        assert_eq!(jul, "219");
    }

    #[test]
    fn strftime_is_zero_padded() {
        let jul = strftime("%j", &DateInput::from("2018-01-05")).expect("should format");
        assert_eq!(jul, "005");
    }

    #[test]
    fn strftime_absent_is_empty() {
        assert_eq!(strftime("%j", &DateInput::Absent), Ok(String::new()));
    }

    #[test]
    fn strftime_structured_keeps_time() {
        let date = NaiveDateTime::parse_from_str("2020-12-31 13:45", "%Y-%m-%d %H:%M")
            .expect("valid datetime");
        let text = strftime("%j %H:%M", &DateInput::from(date)).expect("should format");
        assert_eq!(text, "366 13:45");
    }

    #[test]
    fn strftime_unsupported_fails() {
        let result = strftime("%j", &DateInput::Unsupported("int".into()));
        assert!(matches!(result, Err(Et0Error::UnsupportedDate { .. })));
    }

    #[test]
    fn strftime_invalid_token_fails() {
        let result = strftime("%Q", &DateInput::from("2018-08-07"));
        assert!(matches!(result, Err(Et0Error::InvalidFormat { .. })));
    }

    #[test]
    fn parse_iso_date_is_strict() {
        for text in [
            "2018-8-7",
            "2018/08/07",
            "07-08-2018",
            " 2018-08-07",
            "2018-08-07T00:00",
            "+2018-08-07",
            "",
        ] {
            assert!(
                matches!(parse_iso_date(text), Err(Et0Error::DateParse { .. })),
                "{text} should be rejected"
            );
        }
        // well formed but not a calendar date
        assert!(parse_iso_date("2018-02-30").is_err());
        assert!(parse_iso_date("2018-13-01").is_err());
    }

    #[test]
    fn parse_iso_date_rejects_year_zero() {
        assert!(matches!(
            parse_iso_date("0000-01-01"),
            Err(Et0Error::DateParse { .. })
        ));
        assert_eq!(strftime("%j", &"0001-01-01".into()), Ok("001".to_owned()));
    }

    #[test]
    fn day_of_year_matches_ordinal() {
        let mut date = NaiveDate::from_ymd_opt(2016, 1, 1).expect("valid date");
        let end = NaiveDate::from_ymd_opt(2017, 12, 31).expect("valid date");
        while date <= end {
            let text = date.format("%Y-%m-%d").to_string();
            let doy = day_of_year(&DateInput::from(text)).expect("should parse");
            assert_eq!(doy, date.ordinal() as f64);
            date = date.succ_opt().expect("next day");
        }
    }

    #[test]
    fn day_of_year_last_day() {
        assert_eq!(day_of_year(&"2018-12-31".into()), Ok(365.0));
        assert_eq!(day_of_year(&"2020-12-31".into()), Ok(366.0));
        assert_eq!(day_of_year(&"2018-01-01".into()), Ok(1.0));
    }

    #[test]
    fn day_of_year_absent_fails_to_parse() {
        let result = day_of_year(&DateInput::Absent);
        assert!(matches!(result, Err(Et0Error::DateParse { ref input, .. }) if input.is_empty()));
    }

    #[test]
    fn daylight_hours_equator_is_twelve() {
        for doy in [1.0, 80.0, 172.0, 265.0, 356.0] {
            let n = daylight_hours(doy, 0.0).expect("defined at the equator");
            assert_abs_diff_eq!(n, 12.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn daylight_hours_summer_longer_than_winter() {
        let summer = daylight_hours(172.0, 44.0).expect("defined");
        let winter = daylight_hours(356.0, 44.0).expect("defined");
        assert!(summer > 15.0 && summer < 16.0);
        assert!(winter > 8.5 && winter < 9.5);
        assert_abs_diff_eq!(daylight_hours(219.0, 44.0).expect("defined"), 14.1685, epsilon = 1e-3);
    }

    #[test]
    fn sunset_hour_angle_polar_night() {
        let result = sunset_hour_angle(66.9, 356.0);
        match result {
            Err(Et0Error::Domain { argument, .. }) => assert!(argument > 1.0),
            other => panic!("expected a domain error, got {other:?}"),
        }
    }

    #[test]
    fn sunset_hour_angle_nan_latitude() {
        assert!(matches!(
            sunset_hour_angle(f64::NAN, 100.0),
            Err(Et0Error::Domain { .. })
        ));
    }
}
