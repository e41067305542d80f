//! Form buffers — per-field text awaiting submission

use serde::{Deserialize, Serialize};

/// Dish-entry fields on the home screen
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishForm {
    pub dish: String,
    pub description: String,
    pub price: String,
}

impl DishForm {
    pub fn new(
        dish: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            dish: dish.into(),
            description: description.into(),
            price: price.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dish.is_empty() && self.description.is_empty() && self.price.is_empty()
    }

    pub fn clear(&mut self) {
        self.dish.clear();
        self.description.clear();
        self.price.clear();
    }
}

/// Card fields on the payment screen
///
/// Captured as typed; never validated and never cleared.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentForm {
    pub cardholder_name: String,
    pub card_number: String,
    /// MM/YY
    pub expiry: String,
    pub cvv: String,
}

impl PaymentForm {
    /// Card number with all but the last four digits hidden
    pub fn masked_card_number(&self) -> String {
        let digits: Vec<char> = self.card_number.chars().filter(|c| !c.is_whitespace()).collect();
        let visible = digits.len().saturating_sub(4);
        digits
            .iter()
            .enumerate()
            .map(|(i, c)| if i < visible { '*' } else { *c })
            .collect()
    }
}

// Keep card data out of logs
impl std::fmt::Debug for PaymentForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentForm")
            .field("cardholder_name", &self.cardholder_name)
            .field("card_number", &self.masked_card_number())
            .field("expiry", &self.expiry)
            .field("cvv", &"***")
            .finish()
    }
}
