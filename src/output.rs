//! Output formatting for the shell
//!
//! Supports two modes: human-readable tables (default) and JSON (--json).

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::domain::MenuItem;
use crate::error::Result;
use crate::ledger::MenuSummary;

/// Output mode for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Table,
    Json,
}

impl OutputMode {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputMode::Json
        } else {
            OutputMode::Table
        }
    }
}

/// Price as shown to the chef, e.g. `R45` or `R12.50`
pub fn format_price(currency: &str, price: Decimal) -> String {
    format!("{currency}{}", price.normalize())
}

/// Two-decimal price, e.g. `R95.00`
pub fn format_price_2dp(currency: &str, price: Decimal) -> String {
    let rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{currency}{rounded:.2}")
}

/// Table row for one menu item
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct MenuRow {
    #[tabled(rename = "#")]
    pub position: usize,
    #[tabled(rename = "Dish")]
    pub dish: String,
    #[tabled(rename = "Description")]
    pub description: String,
    #[tabled(rename = "Course")]
    pub course: String,
    #[tabled(rename = "Price")]
    pub price: String,
}

impl MenuRow {
    pub fn from_item(position: usize, item: &MenuItem, currency: &str) -> Self {
        Self {
            position,
            dish: item.dish.clone(),
            description: item.description.clone(),
            course: item.course.to_string(),
            price: format_price(currency, item.price),
        }
    }
}

/// Render menu items in the chosen mode.
pub fn render_items(items: &[&MenuItem], currency: &str, mode: OutputMode) -> Result<String> {
    match mode {
        OutputMode::Table => {
            if items.is_empty() {
                return Ok("(no dishes)".to_string());
            }
            let rows: Vec<MenuRow> = items
                .iter()
                .enumerate()
                .map(|(i, item)| MenuRow::from_item(i + 1, item, currency))
                .collect();
            Ok(Table::new(rows).to_string())
        }
        OutputMode::Json => Ok(serde_json::to_string_pretty(items)?),
    }
}

/// Render the count/average/total block.
pub fn render_summary(summary: &MenuSummary, currency: &str, mode: OutputMode) -> Result<String> {
    match mode {
        OutputMode::Table => Ok(format!(
            "Total Dishes: {}\nAverage Price: {}\nTotal Price: {}",
            summary.count,
            format_price_2dp(currency, summary.average_price),
            format_price_2dp(currency, summary.total_price),
        )),
        OutputMode::Json => Ok(serde_json::to_string_pretty(summary)?),
    }
}

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("\x1b[32m{msg}\x1b[0m");
}

/// Print a warning message.
pub fn print_warn(msg: &str) {
    println!("\x1b[33m{msg}\x1b[0m");
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("\x1b[31m{msg}\x1b[0m");
}
