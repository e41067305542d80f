//! ViewCoordinator — screen state, form buffers and ledger access

use std::time::{Duration, Instant};

use rust_decimal::Decimal;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::{AppConfig, LogoutTarget};
use crate::domain::{Course, Filter, MenuItem, Screen, ScreenTransition};
use crate::error::ValidationError;
use crate::ledger::{MenuLedger, MenuSummary};

use super::command::{CommandOutcome, UiCommand};
use super::splash::{SplashArm, SplashTicket, SplashTimer};
use super::state::{DishForm, PaymentForm};

/// Maximum number of screen transitions kept in history
const MAX_TRANSITIONS: usize = 50;

/// Acknowledgement shown after "Pay Now"
pub const PAYMENT_ACK: &str = "Payment Successful!";

/// Coordinates the three screens and owns the menu ledger
///
/// Starts on [`Screen::Splash`] with the dwell armed. Every entry into
/// Splash arms a new [`SplashTicket`]; leaving Splash disarms it, so at most
/// one splash firing takes effect per entry.
#[derive(Debug)]
pub struct ViewCoordinator {
    screen: Screen,
    ledger: MenuLedger,
    dish_form: DishForm,
    payment_form: PaymentForm,
    course: Course,
    filter: Filter,
    splash_dwell: Duration,
    splash_fade: Duration,
    splash_epoch: u64,
    splash: Option<SplashArm>,
    /// Drives the dwell with a tokio timer when attached
    splash_timer: SplashTimer,
    splash_tx: Option<mpsc::UnboundedSender<SplashTicket>>,
    logout_target: LogoutTarget,
    transitions: Vec<ScreenTransition>,
}

impl Default for ViewCoordinator {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl ViewCoordinator {
    pub fn new(config: &AppConfig) -> Self {
        let mut coordinator = Self {
            screen: Screen::Splash,
            ledger: MenuLedger::new(),
            dish_form: DishForm::default(),
            payment_form: PaymentForm::default(),
            course: config.menu.default_course,
            filter: Filter::All,
            splash_dwell: config.splash.dwell(),
            splash_fade: config.splash.fade(),
            splash_epoch: 0,
            splash: None,
            splash_timer: SplashTimer::new(),
            splash_tx: None,
            logout_target: config.navigation.logout_target,
            transitions: Vec::new(),
        };
        coordinator.arm_splash();
        coordinator
    }

    /// Deliver splash firings through a tokio timer
    ///
    /// Arms the timer immediately if the coordinator is on Splash, restarting
    /// the dwell clock used by `poll_splash` and `splash_opacity` so both
    /// measure from the same instant. Must be called from within a tokio
    /// runtime; feed received tickets back with
    /// [`ViewCoordinator::on_splash_elapsed_for`].
    pub fn attach_splash_timer(&mut self, tx: mpsc::UnboundedSender<SplashTicket>) {
        self.splash_tx = Some(tx.clone());
        if let Some(arm) = self.splash {
            let arm = SplashArm::new(arm.ticket);
            self.splash = Some(arm);
            self.splash_timer.arm(arm.ticket, self.splash_dwell, tx);
        }
    }

    // === Navigation ===

    pub fn current_screen(&self) -> Screen {
        self.screen
    }

    /// Unconditional transition; entering Splash (even from Splash) re-arms the dwell
    pub fn navigate_to(&mut self, screen: Screen) {
        self.transition(screen, "navigate");
    }

    /// Home → Payment
    pub fn checkout(&mut self) {
        self.transition(Screen::Payment, "checkout");
    }

    /// Leave for the configured logout target
    pub fn logout(&mut self) {
        self.transition(self.logout_target.into(), "logout");
    }

    pub fn back(&mut self) {
        self.transition(Screen::Home, "back");
    }

    fn transition(&mut self, to: Screen, reason: &str) {
        let from = self.screen;
        if from == Screen::Splash {
            self.disarm_splash();
        }
        self.screen = to;
        if to == Screen::Splash {
            self.arm_splash();
        }

        info!(%from, %to, reason, "screen transition");
        self.transitions.push(ScreenTransition::new(from, to, reason));
        if self.transitions.len() > MAX_TRANSITIONS {
            let excess = self.transitions.len() - MAX_TRANSITIONS;
            self.transitions.drain(..excess);
        }
    }

    /// Recent transitions, oldest first
    pub fn transitions(&self) -> &[ScreenTransition] {
        &self.transitions
    }

    // === Splash dwell ===

    fn arm_splash(&mut self) {
        self.splash_epoch += 1;
        let ticket = SplashTicket {
            epoch: self.splash_epoch,
        };
        self.splash = Some(SplashArm::new(ticket));
        if let Some(tx) = self.splash_tx.clone() {
            self.splash_timer.arm(ticket, self.splash_dwell, tx);
        }
    }

    fn disarm_splash(&mut self) {
        self.splash = None;
        self.splash_timer.cancel();
    }

    /// Ticket for the current splash entry, if the dwell is still pending
    pub fn splash_ticket(&self) -> Option<SplashTicket> {
        self.splash.map(|arm| arm.ticket)
    }

    pub fn splash_dwell(&self) -> Duration {
        self.splash_dwell
    }

    /// Fire the pending dwell for the current splash entry
    ///
    /// Returns `true` if this moved the coordinator from Splash to Home.
    pub fn on_splash_elapsed(&mut self) -> bool {
        match self.splash_ticket() {
            Some(ticket) => self.on_splash_elapsed_for(ticket),
            None => {
                debug!(screen = %self.screen, "splash elapsed with nothing armed");
                false
            }
        }
    }

    /// Fire the dwell for a specific splash entry; stale tickets are ignored
    pub fn on_splash_elapsed_for(&mut self, ticket: SplashTicket) -> bool {
        let armed = self.splash.is_some_and(|arm| arm.ticket == ticket);
        if !armed || self.screen != Screen::Splash {
            debug!(epoch = ticket.epoch, screen = %self.screen, "stale splash firing suppressed");
            return false;
        }
        self.transition(Screen::Home, "splash elapsed");
        true
    }

    /// Fire the dwell if it has run out by `now`
    pub fn poll_splash(&mut self, now: Instant) -> bool {
        match self.splash {
            Some(arm) if arm.elapsed_at(now) >= self.splash_dwell => {
                self.on_splash_elapsed_for(arm.ticket)
            }
            _ => false,
        }
    }

    /// Title opacity: ramps 0.0 → 1.0 over the fade while on Splash
    pub fn splash_opacity(&self, now: Instant) -> f32 {
        match self.splash {
            Some(arm) if self.screen == Screen::Splash && !self.splash_fade.is_zero() => {
                let progress = arm.elapsed_at(now).as_secs_f32() / self.splash_fade.as_secs_f32();
                progress.clamp(0.0, 1.0)
            }
            _ => 1.0,
        }
    }

    // === Selection ===

    pub fn course(&self) -> Course {
        self.course
    }

    /// Course used by the next dish submission
    pub fn set_course(&mut self, course: Course) {
        debug!(%course, "course selected");
        self.course = course;
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: Filter) {
        debug!(%filter, "filter selected");
        self.filter = filter;
    }

    // === Dish form ===

    pub fn dish_form(&self) -> &DishForm {
        &self.dish_form
    }

    pub fn set_dish(&mut self, value: impl Into<String>) {
        self.dish_form.dish = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.dish_form.description = value.into();
    }

    pub fn set_price(&mut self, value: impl Into<String>) {
        self.dish_form.price = value.into();
    }

    /// Forward the dish form to the ledger with the selected course
    ///
    /// Clears the form on success; on failure the form is left exactly as
    /// submitted.
    pub fn submit_dish(&mut self) -> Result<MenuItem, ValidationError> {
        let form = &self.dish_form;
        let item = self
            .ledger
            .add_item(&form.dish, &form.description, &form.price, self.course)?;
        self.dish_form.clear();
        Ok(item)
    }

    /// Empty the ledger, returning how many items were removed
    pub fn clear(&mut self) -> usize {
        let removed = self.ledger.count();
        self.ledger.clear();
        removed
    }

    // === Payment form ===

    pub fn payment_form(&self) -> &PaymentForm {
        &self.payment_form
    }

    pub fn set_cardholder_name(&mut self, value: impl Into<String>) {
        self.payment_form.cardholder_name = value.into();
    }

    pub fn set_card_number(&mut self, value: impl Into<String>) {
        self.payment_form.card_number = value.into();
    }

    pub fn set_expiry(&mut self, value: impl Into<String>) {
        self.payment_form.expiry = value.into();
    }

    pub fn set_cvv(&mut self, value: impl Into<String>) {
        self.payment_form.cvv = value.into();
    }

    /// "Pay Now": acknowledge only. No transaction, no state change.
    pub fn record_payment(&self) -> &'static str {
        info!(
            card = %self.payment_form.masked_card_number(),
            total = %self.ledger.total_price(),
            "payment recorded"
        );
        PAYMENT_ACK
    }

    // === Ledger queries ===

    pub fn ledger(&self) -> &MenuLedger {
        &self.ledger
    }

    pub fn items(&self) -> &[MenuItem] {
        self.ledger.items()
    }

    /// Items passing the active filter
    pub fn filtered_items(&self) -> Vec<&MenuItem> {
        self.ledger.filtered_items(self.filter)
    }

    pub fn count(&self) -> usize {
        self.ledger.count()
    }

    pub fn average_price(&self) -> Decimal {
        self.ledger.average_price()
    }

    pub fn total_price(&self) -> Decimal {
        self.ledger.total_price()
    }

    pub fn summary(&self) -> MenuSummary {
        self.ledger.summary()
    }

    // === Dispatch ===

    /// Apply a UI command. Validation failures come back as
    /// [`CommandOutcome::Rejected`], never as an error.
    pub fn dispatch(&mut self, command: UiCommand) -> CommandOutcome {
        match command {
            UiCommand::Navigate(screen) => {
                self.navigate_to(screen);
                CommandOutcome::Navigated(self.screen)
            }
            UiCommand::SplashElapsed(ticket) => {
                if self.on_splash_elapsed_for(ticket) {
                    CommandOutcome::Navigated(self.screen)
                } else {
                    CommandOutcome::SplashSuppressed
                }
            }
            UiCommand::SetDish(value) => {
                self.set_dish(value);
                CommandOutcome::Updated
            }
            UiCommand::SetDescription(value) => {
                self.set_description(value);
                CommandOutcome::Updated
            }
            UiCommand::SetPrice(value) => {
                self.set_price(value);
                CommandOutcome::Updated
            }
            UiCommand::SetCourse(course) => {
                self.set_course(course);
                CommandOutcome::Updated
            }
            UiCommand::SetFilter(filter) => {
                self.set_filter(filter);
                CommandOutcome::Updated
            }
            UiCommand::AddDish => match self.submit_dish() {
                Ok(item) => CommandOutcome::ItemAdded(item),
                Err(err) => {
                    warn!(error = %err, "dish form rejected");
                    CommandOutcome::Rejected(err)
                }
            },
            UiCommand::Clear => CommandOutcome::Cleared {
                removed: self.clear(),
            },
            UiCommand::Checkout => {
                self.checkout();
                CommandOutcome::Navigated(self.screen)
            }
            UiCommand::SetCardholderName(value) => {
                self.set_cardholder_name(value);
                CommandOutcome::Updated
            }
            UiCommand::SetCardNumber(value) => {
                self.set_card_number(value);
                CommandOutcome::Updated
            }
            UiCommand::SetExpiry(value) => {
                self.set_expiry(value);
                CommandOutcome::Updated
            }
            UiCommand::SetCvv(value) => {
                self.set_cvv(value);
                CommandOutcome::Updated
            }
            UiCommand::RecordPayment => CommandOutcome::PaymentRecorded(self.record_payment()),
            UiCommand::Logout => {
                self.logout();
                CommandOutcome::Navigated(self.screen)
            }
            UiCommand::Back => {
                self.back();
                CommandOutcome::Navigated(self.screen)
            }
        }
    }
}
