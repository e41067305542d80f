//! Interactive REPL that plays the presentation layer
//!
//! Renders coordinator state and forwards typed commands; all menu logic
//! lives in [`ViewCoordinator`].

use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tokio::sync::mpsc;
use tracing::debug;

use crate::cli::{parse_line, ShellAction};
use crate::config::AppConfig;
use crate::coordinator::{CommandOutcome, SplashTicket, UiCommand, ViewCoordinator};
use crate::domain::{Course, Filter, Screen};
use crate::error::{MenuError, Result};
use crate::output::{self, OutputMode};

/// Shell options resolved from the command line
#[derive(Debug, Clone, Copy)]
pub struct ShellOptions {
    pub mode: OutputMode,
    pub skip_splash: bool,
}

pub async fn run(config: &AppConfig, options: ShellOptions) -> Result<()> {
    let mut coordinator = ViewCoordinator::new(config);
    let currency = config.menu.currency_symbol.as_str();

    let (splash_tx, mut splash_rx) = mpsc::unbounded_channel::<SplashTicket>();
    coordinator.attach_splash_timer(splash_tx);
    if options.skip_splash {
        coordinator.on_splash_elapsed();
    }

    let history_path = history_path();
    let mut rl = DefaultEditor::new().map_err(|e| MenuError::Other(e.into()))?;
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path);
    }

    loop {
        if coordinator.current_screen() == Screen::Splash {
            print_splash();
            match splash_rx.recv().await {
                Some(ticket) => {
                    coordinator.dispatch(UiCommand::SplashElapsed(ticket));
                }
                None => {
                    coordinator.on_splash_elapsed();
                }
            }
            if coordinator.current_screen() == Screen::Home {
                print_home_header(&coordinator);
            }
            continue;
        }

        let prompt = format!("\x1b[36m{}>\x1b[0m ", coordinator.current_screen().as_str().to_lowercase());
        match rl.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                match line {
                    "exit" | "quit" | "q" => break,
                    "help" | "?" => {
                        print_shell_help(coordinator.current_screen());
                        continue;
                    }
                    _ => {}
                }

                let command = match parse_line(line) {
                    Ok(command) => command,
                    Err(e) => {
                        eprintln!("{e}");
                        continue;
                    }
                };
                if !command.available_on(coordinator.current_screen()) {
                    output::print_warn(&format!(
                        "Not available on the {} screen (type 'help')",
                        coordinator.current_screen()
                    ));
                    continue;
                }

                if let Err(e) = handle(&mut coordinator, command.into_action(), currency, options.mode) {
                    output::print_error(&format!("{e}"));
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("readline error: {e}");
                break;
            }
        }
    }

    if let Some(ref path) = history_path {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = rl.save_history(path);
    }

    Ok(())
}

fn handle(
    coordinator: &mut ViewCoordinator,
    action: ShellAction,
    currency: &str,
    mode: OutputMode,
) -> Result<()> {
    match action {
        ShellAction::Command(command) => {
            let outcome = coordinator.dispatch(command);
            report(coordinator, &outcome, currency, mode)?;
        }
        ShellAction::List => {
            let items = coordinator.filtered_items();
            println!("Filter: {}", coordinator.filter());
            println!("{}", output::render_items(&items, currency, mode)?);
        }
        ShellAction::Summary => {
            println!("{}", output::render_summary(&coordinator.summary(), currency, mode)?);
        }
        ShellAction::Status => print_status(coordinator),
    }
    Ok(())
}

fn report(
    coordinator: &ViewCoordinator,
    outcome: &CommandOutcome,
    currency: &str,
    mode: OutputMode,
) -> Result<()> {
    match outcome {
        CommandOutcome::ItemAdded(item) => {
            output::print_success(&format!(
                "Added {} ({}, {})",
                item.dish,
                item.course,
                output::format_price(currency, item.price)
            ));
            println!("{}", output::render_summary(&coordinator.summary(), currency, mode)?);
        }
        CommandOutcome::Rejected(err) => {
            output::print_error(err.notification());
            debug!(error = %err, "dish form kept for correction");
        }
        CommandOutcome::Cleared { removed } => {
            output::print_success(&format!("Cleared {removed} dish(es)"));
        }
        CommandOutcome::PaymentRecorded(ack) => output::print_success(ack),
        CommandOutcome::Navigated(Screen::Home) => print_home_header(coordinator),
        CommandOutcome::Navigated(Screen::Payment) => {
            println!(
                "Payment — amount due {}",
                output::format_price_2dp(currency, coordinator.total_price())
            );
        }
        CommandOutcome::Navigated(Screen::Splash)
        | CommandOutcome::Updated
        | CommandOutcome::SplashSuppressed => {}
    }
    Ok(())
}

fn history_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("chef-menu").join("history.txt"))
}

fn print_splash() {
    println!();
    println!("\x1b[38;5;209m    Chef’s Menu App 🍽️\x1b[0m");
    println!();
}

fn print_home_header(coordinator: &ViewCoordinator) {
    println!("\x1b[1mWelcome Chef 👨🏾‍🍳\x1b[0m");
    println!(
        "{} dish(es) on the menu. Course: {}. Filter: {}.",
        coordinator.count(),
        coordinator.course(),
        coordinator.filter()
    );
}

fn print_status(coordinator: &ViewCoordinator) {
    println!("Screen: {}", coordinator.current_screen());
    match coordinator.current_screen() {
        Screen::Home => {
            let form = coordinator.dish_form();
            println!("  dish:        {:?}", form.dish);
            println!("  description: {:?}", form.description);
            println!("  price:       {:?}", form.price);
            println!("  course:      {}", coordinator.course());
            println!("  filter:      {}", coordinator.filter());
        }
        Screen::Payment => {
            let form = coordinator.payment_form();
            println!("  cardholder:  {:?}", form.cardholder_name);
            println!("  card number: {}", form.masked_card_number());
            println!("  expiry:      {:?}", form.expiry);
        }
        Screen::Splash => {}
    }
}

fn print_shell_help(screen: Screen) {
    let courses = Course::ALL.map(|c| c.as_str().to_lowercase()).join("|");
    let filters = Filter::ALL.map(|f| f.as_str().to_lowercase()).join("|");

    println!("Available commands:");
    match screen {
        Screen::Home => {
            println!("  dish <text>         set dish name");
            println!("  desc <text>         set description");
            println!("  price <amount>      set price");
            println!("  course <{courses}>");
            println!("  add                 add the dish");
            println!("  filter <{filters}>");
            println!("  list                show dishes");
            println!("  summary             count, average and total");
            println!("  clear               remove every dish");
            println!("  checkout            proceed to payment");
        }
        Screen::Payment => {
            println!("  card-name <text>    cardholder name");
            println!("  card-number <num>   card number");
            println!("  expiry <MM/YY>      expiry date");
            println!("  cvv <num>           security code");
            println!("  pay                 pay now");
            println!("  back                return to the menu");
            println!("  logout              log out");
        }
        Screen::Splash => {}
    }
    println!("  screen              show current screen and form");
    println!("  help                (this message)");
    println!("  exit                (quit shell)");
}
