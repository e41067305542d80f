//! UI Commands — user actions the presentation layer forwards to the coordinator

use crate::domain::{Course, Filter, MenuItem, Screen};
use crate::error::ValidationError;

use super::splash::SplashTicket;

/// Actions raised by UI event handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    /// Unconditional screen change
    Navigate(Screen),
    /// The splash dwell elapsed for the given entry
    SplashElapsed(SplashTicket),
    SetDish(String),
    SetDescription(String),
    SetPrice(String),
    SetCourse(Course),
    SetFilter(Filter),
    /// Submit the dish form to the ledger
    AddDish,
    /// Empty the ledger
    Clear,
    /// Home → Payment
    Checkout,
    SetCardholderName(String),
    SetCardNumber(String),
    SetExpiry(String),
    SetCvv(String),
    /// "Pay Now" acknowledgement
    RecordPayment,
    /// Leave the payment screen for the configured logout target
    Logout,
    /// Leave the payment screen for Home
    Back,
}

/// Result of dispatching a [`UiCommand`]
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// State changed with nothing further to report
    Updated,
    Navigated(Screen),
    /// A splash firing was stale and had no effect
    SplashSuppressed,
    ItemAdded(MenuItem),
    /// Dish form was rejected; show the notification and keep the buffer
    Rejected(ValidationError),
    Cleared { removed: usize },
    PaymentRecorded(&'static str),
}

impl CommandOutcome {
    /// Message the UI should surface as a blocking notification, if any
    pub fn notification(&self) -> Option<&'static str> {
        match self {
            CommandOutcome::Rejected(err) => Some(err.notification()),
            CommandOutcome::PaymentRecorded(ack) => Some(ack),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification() {
        let rejected = CommandOutcome::Rejected(ValidationError::MissingField { field: "dish" });
        assert_eq!(rejected.notification(), Some("Please fill all fields"));
        assert_eq!(
            CommandOutcome::PaymentRecorded("Payment Successful!").notification(),
            Some("Payment Successful!")
        );
        assert_eq!(CommandOutcome::Updated.notification(), None);
    }
}
