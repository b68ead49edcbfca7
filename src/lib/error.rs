//! Error types for the evapotranspiration estimators.

/// Failures of the date normalizer, the radiation estimator and the ET0 estimator.
///
/// Missing temperatures are not an error: the ET0 estimator returns `Ok(None)`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Et0Error {
    /// The date text is not a strict `YYYY-MM-DD` value, or the normalized
    /// day of year is not a number (e.g. an absent date).
    #[error("cannot parse date '{input}': {reason}")]
    DateParse {
        /// The offending text.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The date value has a type the normalizer does not understand.
    #[error("unsupported date value of type {type_name}")]
    UnsupportedDate {
        /// Name of the rejected type, as reported by the host.
        type_name: String,
    },

    /// The format specifier holds an unknown token.
    #[error("invalid date format '{format}'")]
    InvalidFormat {
        /// The rejected format specifier.
        format: String,
    },

    /// The sun never sets or never rises for this latitude and day: the
    /// sunset hour angle arccosine is outside [-1, 1].
    #[error(
        "sunset hour angle undefined at latitude {latitude} on day {day_of_year} (acos argument {argument})"
    )]
    Domain {
        /// Latitude [°].
        latitude: f64,
        /// Day of year.
        day_of_year: f64,
        /// The argument handed to the arccosine.
        argument: f64,
    },

    /// The latent heat of vaporization cannot be used as a divisor.
    #[error("latent heat of vaporization must be finite and non-zero, got {lam}")]
    Configuration {
        /// The rejected latent heat [MJ/kg].
        lam: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_date_parse() {
        let e = Et0Error::DateParse {
            input: "2018/08/07".into(),
            reason: "expected YYYY-MM-DD".into(),
        };
        assert_eq!(
            e.to_string(),
            "cannot parse date '2018/08/07': expected YYYY-MM-DD"
        );
    }

    #[test]
    fn error_unsupported_date() {
        let e = Et0Error::UnsupportedDate {
            type_name: "int".into(),
        };
        assert_eq!(e.to_string(), "unsupported date value of type int");
    }

    #[test]
    fn error_configuration() {
        let e = Et0Error::Configuration { lam: 0.0 };
        assert_eq!(
            e.to_string(),
            "latent heat of vaporization must be finite and non-zero, got 0"
        );
    }

    #[test]
    fn error_domain_mentions_inputs() {
        let e = Et0Error::Domain {
            latitude: 66.9,
            day_of_year: 356.0,
            argument: 1.5,
        };
        let msg = e.to_string();
        assert!(msg.contains("66.9"));
        assert!(msg.contains("356"));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<Et0Error>();
    }
}
