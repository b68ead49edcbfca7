use std::{fmt::Display, fs::File, io::Read};

use et0::{
    modules::hargreaves::config::{Climate, HargreavesConfig},
    DateInput,
};

/// Load the estimator parameters from a YAML file
pub fn load_config(config_file: &str) -> Result<HargreavesConfig, AppError> {
    if !(config_file.ends_with(".yaml") || config_file.ends_with(".yml")) {
        return Err(AppError::from(format!(
            "Unsupported config file format: {}",
            config_file
        )));
    }
    let mut file = File::open(config_file)
        .map_err(|err| format!("Cannot open config file {}: {}", config_file, err))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|err| format!("Cannot read config file {}: {}", config_file, err))?;

    let conf = HargreavesConfig::from_yaml(&contents)
        .map_err(|err| format!("Cannot parse config file {}: {}", config_file, err))?;
    Ok(conf)
}

/// Apply the command line overrides on top of the loaded parameters
pub fn apply_overrides(
    mut config: HargreavesConfig,
    lat: Option<f64>,
    lam: Option<f64>,
    krs: Option<f64>,
    climate: Option<&str>,
) -> Result<HargreavesConfig, AppError> {
    if let Some(lat) = lat {
        config.latitude = lat;
    }
    if let Some(lam) = lam {
        config.latent_heat = lam;
    }
    if let Some(krs) = krs {
        config.krs = krs;
        config.climate = None;
    }
    if let Some(climate) = climate {
        let climate = climate
            .parse::<Climate>()
            .map_err(|_| format!("Unknown climate '{}', expected interior or coastal", climate))?;
        config.climate = Some(climate);
    }
    Ok(config)
}

/// Samples printed when no input is given on the command line
pub fn demo_samples() -> Vec<(Option<f64>, Option<f64>, DateInput)> {
    vec![
        (Some(36.0), Some(25.0), DateInput::from("2018-08-07")),
        (Some(18.0), Some(33.0), DateInput::from("2018-08-08")),
    ]
}

#[derive(Debug)]
pub struct AppError {
    msg: String,
}

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError { msg }
    }
}

impl From<AppError> for String {
    fn from(value: AppError) -> String {
        value.msg
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError { msg: msg.into() }
    }
}

impl From<et0::Et0Error> for AppError {
    fn from(err: et0::Et0Error) -> Self {
        AppError {
            msg: err.to_string(),
        }
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.msg)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_rejects_unknown_extension() {
        let result = load_config("config.json");
        assert!(result.is_err());
        let msg: String = result.expect_err("should fail").into();
        assert_eq!(msg, "Unsupported config file format: config.json");
    }

    #[test]
    fn load_config_missing_file() {
        let result = load_config("/nonexistent/hargreaves.yml");
        assert!(result.is_err());
    }

    #[test]
    fn overrides_replace_values() {
        let config =
            apply_overrides(HargreavesConfig::default(), Some(40.0), None, None, Some("coastal"))
                .expect("should apply");
        assert_eq!(config.latitude, 40.0);
        assert_eq!(config.effective_krs(), 0.19);
    }

    #[test]
    fn explicit_krs_clears_climate() {
        let base = HargreavesConfig {
            climate: Some(Climate::Coastal),
            ..HargreavesConfig::default()
        };
        let config = apply_overrides(base, None, None, Some(0.17), None).expect("should apply");
        assert_eq!(config.effective_krs(), 0.17);
    }

    #[test]
    fn unknown_climate_is_an_error() {
        let result = apply_overrides(HargreavesConfig::default(), None, None, None, Some("polar"));
        assert!(result.is_err());
    }
}
