//! Menu ledger
//!
//! Ordered, in-memory record of the dishes the chef has entered, with the
//! aggregates the home screen shows.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::{Course, Filter, MenuItem};
use crate::error::ValidationError;
use crate::validation::{parse_price, require_field};

/// Count and price aggregates over the whole ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MenuSummary {
    pub count: usize,
    pub total_price: Decimal,
    pub average_price: Decimal,
}

/// Insertion-ordered collection of menu items
///
/// Duplicates are kept as distinct entries. The only mutations are
/// [`MenuLedger::add_item`] and [`MenuLedger::clear`].
#[derive(Debug, Clone, Default)]
pub struct MenuLedger {
    items: Vec<MenuItem>,
}

impl MenuLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the raw form values and append a new item
    ///
    /// Blank fields fail with `MissingField` (checked in dish, description,
    /// price order); a price that does not parse to a non-negative decimal
    /// fails with `InvalidPrice`, as does one that would overflow the running
    /// total. On failure the ledger is untouched.
    pub fn add_item(
        &mut self,
        dish: &str,
        description: &str,
        price: &str,
        course: Course,
    ) -> Result<MenuItem, ValidationError> {
        let item = self.build_item(dish, description, price, course).map_err(|e| {
            warn!(error = %e, "rejected menu item");
            e
        })?;

        info!(
            dish = %item.dish,
            course = %item.course,
            price = %item.price,
            "menu item added"
        );
        self.items.push(item.clone());
        Ok(item)
    }

    fn build_item(
        &self,
        dish: &str,
        description: &str,
        price: &str,
        course: Course,
    ) -> Result<MenuItem, ValidationError> {
        let dish = require_field(dish, "dish")?;
        let description = require_field(description, "description")?;
        let price = parse_price(price)?;
        if self.total_price().checked_add(price).is_none() {
            return Err(ValidationError::InvalidPrice {
                raw: price.to_string(),
                reason: "menu total would overflow".to_string(),
            });
        }

        Ok(MenuItem::new(
            dish.to_string(),
            description.to_string(),
            price,
            course,
        ))
    }

    /// Remove every item
    pub fn clear(&mut self) {
        let removed = self.items.len();
        self.items.clear();
        info!(removed, "menu cleared");
    }

    /// All items, in insertion order
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Items passing `filter`, keeping their relative order
    pub fn filtered_items(&self, filter: Filter) -> Vec<&MenuItem> {
        let items: Vec<&MenuItem> = self
            .items
            .iter()
            .filter(|item| filter.matches(item.course))
            .collect();
        debug!(%filter, shown = items.len(), total = self.items.len(), "filtered menu");
        items
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all prices; zero when empty
    ///
    /// `add_item` keeps the running total representable, so the fold never
    /// saturates in practice.
    pub fn total_price(&self) -> Decimal {
        self.items.iter().fold(Decimal::ZERO, |total, item| {
            total.checked_add(item.price).unwrap_or(Decimal::MAX)
        })
    }

    /// Mean price; zero when empty
    pub fn average_price(&self) -> Decimal {
        if self.items.is_empty() {
            return Decimal::ZERO;
        }
        self.total_price() / Decimal::from(self.items.len())
    }

    /// Mean price rounded to two decimal places for display
    pub fn average_price_display(&self) -> Decimal {
        self.average_price()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    pub fn summary(&self) -> MenuSummary {
        MenuSummary {
            count: self.count(),
            total_price: self.total_price(),
            average_price: self.average_price(),
        }
    }
}
