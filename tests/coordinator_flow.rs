use std::time::{Duration, Instant};

use chef_menu::config::{AppConfig, LogoutTarget};
use chef_menu::coordinator::DishForm;
use chef_menu::{CommandOutcome, Course, Filter, Screen, UiCommand, ValidationKind, ViewCoordinator};
use rust_decimal_macros::dec;
use tokio::sync::mpsc;

fn add_dish(coordinator: &mut ViewCoordinator, dish: &str, desc: &str, price: &str, course: Course) {
    coordinator.set_course(course);
    coordinator.set_dish(dish);
    coordinator.set_description(desc);
    coordinator.set_price(price);
    coordinator.submit_dish().unwrap();
}

/// Full walk: splash → home → add dishes → filter → checkout → pay → logout.
#[test]
fn chef_session_walkthrough() {
    let mut coordinator = ViewCoordinator::new(&AppConfig::default());
    assert_eq!(coordinator.current_screen(), Screen::Splash);

    assert!(coordinator.poll_splash(Instant::now() + Duration::from_millis(3000)));
    assert_eq!(coordinator.current_screen(), Screen::Home);

    add_dish(&mut coordinator, "Soup", "Tomato basil", "45", Course::Starter);
    add_dish(&mut coordinator, "Steak", "Ribeye", "180", Course::Main);
    add_dish(&mut coordinator, "Cake", "Chocolate", "60", Course::Dessert);

    assert_eq!(coordinator.count(), 3);
    assert_eq!(coordinator.total_price(), dec!(285));
    assert_eq!(coordinator.average_price(), dec!(95));

    coordinator.set_filter(Filter::Dessert);
    let visible: Vec<&str> = coordinator.filtered_items().iter().map(|i| i.dish.as_str()).collect();
    assert_eq!(visible, vec!["Cake"]);

    coordinator.checkout();
    assert_eq!(coordinator.current_screen(), Screen::Payment);
    assert_eq!(coordinator.record_payment(), "Payment Successful!");
    assert_eq!(coordinator.count(), 3);

    coordinator.logout();
    assert_eq!(coordinator.current_screen(), Screen::Splash);
    // Ledger survives logout; only the process end destroys it
    assert_eq!(coordinator.count(), 3);
}

#[test]
fn submit_success_clears_buffer_failure_keeps_it() {
    let mut coordinator = ViewCoordinator::default();
    coordinator.on_splash_elapsed();

    coordinator.set_dish("Soup");
    coordinator.set_description("");
    coordinator.set_price("45");
    let err = coordinator.submit_dish().unwrap_err();
    assert_eq!(err.kind(), ValidationKind::MissingField);
    assert_eq!(coordinator.dish_form(), &DishForm::new("Soup", "", "45"));

    coordinator.set_description("Tomato");
    coordinator.submit_dish().unwrap();
    assert_eq!(coordinator.dish_form(), &DishForm::default());
}

#[test]
fn splash_fires_at_most_once_per_entry() {
    let mut coordinator = ViewCoordinator::default();
    let first_entry = coordinator.splash_ticket().unwrap();

    // Navigated away mid-dwell; the late firing must be ignored
    coordinator.navigate_to(Screen::Home);
    coordinator.checkout();
    assert_eq!(
        coordinator.dispatch(UiCommand::SplashElapsed(first_entry)),
        CommandOutcome::SplashSuppressed
    );
    assert_eq!(coordinator.current_screen(), Screen::Payment);

    coordinator.logout();
    let second_entry = coordinator.splash_ticket().unwrap();
    assert!(coordinator.on_splash_elapsed_for(second_entry));
    assert!(!coordinator.on_splash_elapsed_for(second_entry));
    assert!(!coordinator.on_splash_elapsed());
    assert_eq!(coordinator.current_screen(), Screen::Home);
}

#[test]
fn payment_fields_are_never_cleared() {
    let mut coordinator = ViewCoordinator::default();
    coordinator.on_splash_elapsed();
    coordinator.checkout();

    coordinator.dispatch(UiCommand::SetCardholderName("A Chef".into()));
    coordinator.dispatch(UiCommand::SetCardNumber("not a number".into()));
    coordinator.dispatch(UiCommand::SetExpiry("13/99".into()));
    coordinator.dispatch(UiCommand::SetCvv("1".into()));

    let outcome = coordinator.dispatch(UiCommand::RecordPayment);
    assert_eq!(outcome.notification(), Some("Payment Successful!"));

    coordinator.dispatch(UiCommand::Back);
    coordinator.dispatch(UiCommand::Checkout);
    let form = coordinator.payment_form();
    assert_eq!(form.cardholder_name, "A Chef");
    assert_eq!(form.card_number, "not a number");
    assert_eq!(form.expiry, "13/99");
    assert_eq!(form.cvv, "1");
}

#[test]
fn configured_defaults_flow_into_coordinator() {
    let mut config = AppConfig::default();
    config.menu.default_course = Course::Main;
    config.navigation.logout_target = LogoutTarget::Home;
    config.splash.dwell_ms = 500;

    let mut coordinator = ViewCoordinator::new(&config);
    assert_eq!(coordinator.course(), Course::Main);
    assert_eq!(coordinator.splash_dwell(), Duration::from_millis(500));

    coordinator.on_splash_elapsed();
    coordinator.set_dish("Steak");
    coordinator.set_description("Ribeye");
    coordinator.set_price("180");
    assert_eq!(coordinator.submit_dish().unwrap().course, Course::Main);

    coordinator.checkout();
    coordinator.logout();
    assert_eq!(coordinator.current_screen(), Screen::Home);
}

#[tokio::test(start_paused = true)]
async fn tokio_timer_drives_splash_and_is_cancelled_on_exit() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut coordinator = ViewCoordinator::default();
    coordinator.attach_splash_timer(tx);

    // First entry: left before the dwell ran out
    tokio::time::sleep(Duration::from_millis(1000)).await;
    coordinator.navigate_to(Screen::Home);
    tokio::time::sleep(Duration::from_millis(5000)).await;
    assert!(rx.try_recv().is_err());

    // Second entry: dwell completes
    coordinator.checkout();
    coordinator.logout();
    assert_eq!(coordinator.current_screen(), Screen::Splash);
    let ticket = rx.recv().await.unwrap();
    assert!(coordinator.on_splash_elapsed_for(ticket));
    assert_eq!(coordinator.current_screen(), Screen::Home);
}
