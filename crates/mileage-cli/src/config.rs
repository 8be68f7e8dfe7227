//! Configuration loading and management.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use mileage_core::{DEFAULT_ANNUAL_MILEAGE, DefaultMileage, MeanMileage, ProjectedMileage, YearBasis};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Annual mileage assumed when a timeline has fewer than two readings.
    pub default_annual_mileage: f64,

    /// How elapsed time between dates is converted into years.
    pub year_basis: YearBasis,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_annual_mileage: DEFAULT_ANNUAL_MILEAGE,
            year_basis: YearBasis::default(),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (MILEAGE_*)
        figment = figment.merge(Env::prefixed("MILEAGE_"));

        figment.extract()
    }

    /// Mean annual mileage with the configured default and year basis.
    pub const fn rate_calculator(&self) -> DefaultMileage<MeanMileage> {
        DefaultMileage::with_default(
            MeanMileage::new(self.default_annual_mileage).with_year_basis(self.year_basis),
            self.default_annual_mileage,
        )
    }

    /// Projects the configured rate calculator to `target`.
    pub const fn projection_calculator(
        &self,
        target: NaiveDate,
    ) -> ProjectedMileage<DefaultMileage<MeanMileage>> {
        ProjectedMileage::new(self.rate_calculator(), target).with_year_basis(self.year_basis)
    }
}

/// Returns the platform-specific config directory for mileage.
///
/// On Linux: `~/.config/mileage`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("mileage"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_dirs_config_path_ends_with_mileage() {
        let path = dirs_config_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "mileage");
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "default is a literal constant")]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_annual_mileage, 7_900.0);
        assert_eq!(config.year_basis, YearBasis::Calendar);
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "value is read back verbatim")]
    fn test_load_from_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_annual_mileage = 9500.0").unwrap();
        writeln!(file, r#"year_basis = "mean_gregorian""#).unwrap();
        file.flush().unwrap();

        let config = Config::load_from(Some(file.path())).unwrap();
        assert_eq!(config.default_annual_mileage, 9_500.0);
        assert_eq!(config.year_basis, YearBasis::MeanGregorian);
    }

    #[test]
    fn test_load_from_rejects_unknown_year_basis() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"year_basis = "lunar""#).unwrap();
        file.flush().unwrap();

        assert!(Config::load_from(Some(file.path())).is_err());
    }

    #[test]
    fn test_rate_calculator_uses_configured_default() {
        use mileage_core::{Calculator, Timeline};

        let config = Config {
            default_annual_mileage: 12_345.0,
            year_basis: YearBasis::Calendar,
        };
        let rate = config.rate_calculator().calculate(&Timeline::new()).unwrap();
        assert!((rate.miles_per_year - 12_345.0).abs() < f64::EPSILON);
    }
}
