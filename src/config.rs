use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::domain::{Course, Screen};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub splash: SplashConfig,
    #[serde(default)]
    pub menu: MenuConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SplashConfig {
    /// Milliseconds on the splash screen before moving to Home
    #[serde(default = "default_dwell_ms")]
    pub dwell_ms: u64,
    /// Milliseconds for the title to fade from transparent to opaque
    #[serde(default = "default_fade_ms")]
    pub fade_ms: u64,
}

fn default_dwell_ms() -> u64 {
    3000
}

fn default_fade_ms() -> u64 {
    1500
}

impl SplashConfig {
    pub fn dwell(&self) -> Duration {
        Duration::from_millis(self.dwell_ms)
    }

    pub fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            dwell_ms: default_dwell_ms(),
            fade_ms: default_fade_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuConfig {
    /// Course selected when the app starts
    #[serde(default)]
    pub default_course: Course,
    /// Prefix used when rendering prices (e.g. "R" for rand)
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    "R".to_string()
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            default_course: Course::default(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// Where "logout" on the payment screen goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogoutTarget {
    #[default]
    Splash,
    Home,
}

impl From<LogoutTarget> for Screen {
    fn from(target: LogoutTarget) -> Self {
        match target {
            LogoutTarget::Splash => Screen::Splash,
            LogoutTarget::Home => Screen::Home,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NavigationConfig {
    #[serde(default)]
    pub logout_target: LogoutTarget,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable JSON formatted logs
    #[serde(default)]
    pub json: bool,
    /// Directory for daily rolling log files; console only when unset
    #[serde(default)]
    pub dir: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            dir: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();

        let builder = Config::builder()
            // Start with default values
            .set_default("splash.dwell_ms", default_dwell_ms())?
            .set_default("splash.fade_ms", default_fade_ms())?
            .set_default("menu.currency_symbol", default_currency_symbol())?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.json", false)?
            // Load default config file
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Load environment-specific config (e.g., config/production.toml)
            .add_source(
                File::from(config_dir.join(
                    std::env::var("CHEF_MENU_ENV").unwrap_or_else(|_| "development".to_string()),
                ))
                .required(false),
            )
            // Override with environment variables (CHEF_MENU_SPLASH__DWELL_MS, etc.)
            .add_source(
                Environment::with_prefix("CHEF_MENU")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.splash.dwell_ms == 0 {
            errors.push("splash.dwell_ms must be positive".to_string());
        }

        if self.splash.fade_ms > self.splash.dwell_ms {
            errors.push(format!(
                "splash.fade_ms ({}) should not exceed splash.dwell_ms ({})",
                self.splash.fade_ms, self.splash.dwell_ms
            ));
        }

        if self.menu.currency_symbol.trim().is_empty() {
            errors.push("menu.currency_symbol must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
