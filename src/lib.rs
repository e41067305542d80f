pub mod cli;
pub mod config;
pub mod coordinator;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod output;
pub mod shell;
pub mod validation;

pub use config::AppConfig;
pub use coordinator::{CommandOutcome, SplashTicket, SplashTimer, UiCommand, ViewCoordinator};
pub use domain::{Course, Filter, MenuItem, Screen, ScreenTransition};
pub use error::{MenuError, Result, ValidationError, ValidationKind};
pub use ledger::{MenuLedger, MenuSummary};
