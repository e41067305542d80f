//! Command-line arguments and shell command grammar

use clap::{Parser, Subcommand};

use crate::coordinator::UiCommand;
use crate::domain::{Course, Filter, Screen};

/// Chef's Menu — record dishes, browse by course, walk through checkout
#[derive(Parser, Debug)]
#[command(name = "chef-menu")]
#[command(author, version, about = "Chef's menu ledger with a mock checkout", long_about = None)]
pub struct Cli {
    /// Config directory (default.toml, <CHEF_MENU_ENV>.toml)
    #[arg(short, long, default_value = "config", env = "CHEF_MENU_CONFIG_DIR")]
    pub config: String,

    /// Print lists and summaries as JSON
    #[arg(long)]
    pub json: bool,

    /// Go straight to the home screen
    #[arg(long)]
    pub skip_splash: bool,
}

/// One line typed into the shell
#[derive(clap::Parser, Debug)]
#[command(name = "chef", no_binary_name = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Set the dish name
    Dish {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Set the dish description
    Desc {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Set the dish price
    Price {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Select the course for the next dish (starter, main, dessert)
    Course {
        #[arg(value_parser = parse_course)]
        course: Course,
    },
    /// Add the dish to the menu
    Add,
    /// Show only one course (all, starter, main, dessert)
    Filter {
        #[arg(value_parser = parse_filter)]
        filter: Filter,
    },
    /// List dishes passing the active filter
    List,
    /// Show count, average and total price
    Summary,
    /// Remove every dish
    Clear,
    /// Proceed to payment
    Checkout,
    /// Set the cardholder name
    CardName {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Set the card number
    CardNumber {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Set the expiry date (MM/YY)
    Expiry {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Set the CVV
    Cvv {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Pay now
    Pay,
    /// Log out
    Logout,
    /// Back to the menu
    Back,
    /// Show the current screen and form state
    Screen,
}

fn parse_course(s: &str) -> Result<Course, String> {
    Course::try_from(s)
}

fn parse_filter(s: &str) -> Result<Filter, String> {
    Filter::try_from(s)
}

/// What the shell should do for a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellAction {
    /// Forward to the coordinator
    Command(UiCommand),
    List,
    Summary,
    Status,
}

impl ShellCommand {
    /// Screens on which the command makes sense
    pub fn available_on(&self, screen: Screen) -> bool {
        match self {
            Self::Screen => true,
            Self::Dish { .. }
            | Self::Desc { .. }
            | Self::Price { .. }
            | Self::Course { .. }
            | Self::Add
            | Self::Filter { .. }
            | Self::List
            | Self::Summary
            | Self::Clear
            | Self::Checkout => screen == Screen::Home,
            Self::CardName { .. }
            | Self::CardNumber { .. }
            | Self::Expiry { .. }
            | Self::Cvv { .. }
            | Self::Pay
            | Self::Logout
            | Self::Back => screen == Screen::Payment,
        }
    }

    pub fn into_action(self) -> ShellAction {
        let command = match self {
            Self::Dish { text } => UiCommand::SetDish(text.join(" ")),
            Self::Desc { text } => UiCommand::SetDescription(text.join(" ")),
            Self::Price { text } => UiCommand::SetPrice(text.join(" ")),
            Self::Course { course } => UiCommand::SetCourse(course),
            Self::Add => UiCommand::AddDish,
            Self::Filter { filter } => UiCommand::SetFilter(filter),
            Self::Clear => UiCommand::Clear,
            Self::Checkout => UiCommand::Checkout,
            Self::CardName { text } => UiCommand::SetCardholderName(text.join(" ")),
            Self::CardNumber { text } => UiCommand::SetCardNumber(text.join(" ")),
            Self::Expiry { text } => UiCommand::SetExpiry(text.join(" ")),
            Self::Cvv { text } => UiCommand::SetCvv(text.join(" ")),
            Self::Pay => UiCommand::RecordPayment,
            Self::Logout => UiCommand::Logout,
            Self::Back => UiCommand::Back,
            Self::List => return ShellAction::List,
            Self::Summary => return ShellAction::Summary,
            Self::Screen => return ShellAction::Status,
        };
        ShellAction::Command(command)
    }
}

/// Parse one shell line into a command
pub fn parse_line(line: &str) -> Result<ShellCommand, clap::Error> {
    ShellLine::try_parse_from(line.split_whitespace()).map(|parsed| parsed.command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_free_text() {
        let cmd = parse_line("dish Tomato basil soup").unwrap();
        assert_eq!(
            cmd.into_action(),
            ShellAction::Command(UiCommand::SetDish("Tomato basil soup".into()))
        );
    }

    #[test]
    fn test_parse_negative_price_reaches_validation() {
        let cmd = parse_line("price -5").unwrap();
        assert_eq!(
            cmd.into_action(),
            ShellAction::Command(UiCommand::SetPrice("-5".into()))
        );
    }

    #[test]
    fn test_parse_course_and_filter() {
        assert_eq!(
            parse_line("course dessert").unwrap(),
            ShellCommand::Course { course: Course::Dessert }
        );
        assert_eq!(
            parse_line("filter ALL").unwrap(),
            ShellCommand::Filter { filter: Filter::All }
        );
        assert!(parse_line("course soup").is_err());
        assert!(parse_line("teleport").is_err());
    }

    #[test]
    fn test_card_number_subcommand_name() {
        assert_eq!(
            parse_line("card-number 4111 1111").unwrap().into_action(),
            ShellAction::Command(UiCommand::SetCardNumber("4111 1111".into()))
        );
    }

    #[test]
    fn test_payment_fields_accept_leading_hyphen() {
        assert_eq!(
            parse_line("card-name -Jane Doe").unwrap().into_action(),
            ShellAction::Command(UiCommand::SetCardholderName("-Jane Doe".into()))
        );
        assert_eq!(
            parse_line("cvv -12").unwrap().into_action(),
            ShellAction::Command(UiCommand::SetCvv("-12".into()))
        );
    }

    #[test]
    fn test_commands_gated_by_screen() {
        assert!(ShellCommand::Add.available_on(Screen::Home));
        assert!(!ShellCommand::Add.available_on(Screen::Payment));
        assert!(ShellCommand::Pay.available_on(Screen::Payment));
        assert!(!ShellCommand::Pay.available_on(Screen::Home));
        assert!(ShellCommand::Screen.available_on(Screen::Splash));
        assert!(!ShellCommand::List.available_on(Screen::Splash));
    }
}
