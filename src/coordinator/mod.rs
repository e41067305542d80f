//! View Coordinator
//!
//! Owns the current screen, the transient form buffers and the active
//! course/filter selection, and forwards dish submissions to the
//! [`MenuLedger`](crate::ledger::MenuLedger). The presentation layer calls
//! into it and renders from its queries.

pub mod command;
pub mod coordinator;
pub mod splash;
pub mod state;

pub use command::{CommandOutcome, UiCommand};
pub use coordinator::ViewCoordinator;
pub use splash::{SplashTicket, SplashTimer};
pub use state::{DishForm, PaymentForm};
