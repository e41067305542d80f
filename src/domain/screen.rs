use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Screens of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// Title card shown at launch and after logout
    #[default]
    Splash,
    /// Dish entry, filtering and the menu list
    Home,
    /// Mock card-payment form
    Payment,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Splash => "SPLASH",
            Screen::Home => "HOME",
            Screen::Payment => "PAYMENT",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for Screen {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "SPLASH" => Ok(Screen::Splash),
            "HOME" => Ok(Screen::Home),
            "PAYMENT" => Ok(Screen::Payment),
            _ => Err(format!("Unknown screen: {}", s)),
        }
    }
}

/// Screen transition event (for logging/debugging)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenTransition {
    pub from: Screen,
    pub to: Screen,
    pub reason: String,
    pub timestamp: DateTime<Utc>,
}

impl ScreenTransition {
    pub fn new(from: Screen, to: Screen, reason: impl Into<String>) -> Self {
        Self {
            from,
            to,
            reason: reason.into(),
            timestamp: Utc::now(),
        }
    }
}
