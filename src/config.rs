use std::path::Path;

use common::Clock;
use serde::Deserialize;

/// Default location of the optional settings file.
pub const DEFAULT_CONFIG_PATH: &str = "portfolio.toml";

/// Output marker meaning "write to stdout".
pub const STDOUT: &str = "-";

/// Settings for rendering the page outside the browser.
///
/// Layered lowest to highest: built-in defaults, the settings file,
/// `PORTFOLIO_*` environment variables, then command-line flags.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Destination file, or `-` for stdout
    pub output: String,
    /// Pinned copyright year; the system clock is used when unset
    pub year: Option<i32>,
    /// Document `<title>`
    pub title: String,
    /// Script that provides the Tailwind utility classes
    pub tailwind_url: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            output: STDOUT.to_string(),
            year: None,
            title: "Aryan | Frontend Developer".to_string(),
            tailwind_url: "https://cdn.tailwindcss.com".to_string(),
        }
    }
}

impl RenderSettings {
    /// Load settings from `path` (if it exists) and the environment.
    pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
        tracing::debug!("Loading settings from {}", path.display());

        let settings: Self = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(config::Environment::with_prefix("PORTFOLIO").try_parsing(true))
            .build()?
            .try_deserialize()?;

        tracing::debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    /// Apply command-line flags on top of the loaded settings.
    pub fn with_overrides(mut self, output: Option<String>, year: Option<i32>) -> Self {
        if let Some(output) = output {
            self.output = output;
        }
        if year.is_some() {
            self.year = year;
        }
        self
    }

    pub fn clock(&self) -> Clock {
        Clock::from(self.year)
    }

    pub fn writes_to_stdout(&self) -> bool {
        self.output == STDOUT
    }
}
