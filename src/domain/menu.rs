use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Dish course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Course {
    #[default]
    Starter,
    Main,
    Dessert,
}

impl Course {
    pub const ALL: [Course; 3] = [Course::Starter, Course::Main, Course::Dessert];

    pub fn as_str(&self) -> &'static str {
        match self {
            Course::Starter => "Starter",
            Course::Main => "Main",
            Course::Dessert => "Dessert",
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for Course {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "starter" => Ok(Course::Starter),
            "main" => Ok(Course::Main),
            "dessert" => Ok(Course::Dessert),
            _ => Err(format!("Unknown course: {}", s)),
        }
    }
}

/// View selector over the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    #[default]
    All,
    Starter,
    Main,
    Dessert,
}

impl Filter {
    pub const ALL: [Filter; 4] = [Filter::All, Filter::Starter, Filter::Main, Filter::Dessert];

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Starter => "Starter",
            Filter::Main => "Main",
            Filter::Dessert => "Dessert",
        }
    }

    /// Does an item of this course pass the filter?
    pub fn matches(&self, course: Course) -> bool {
        match self {
            Filter::All => true,
            Filter::Starter => course == Course::Starter,
            Filter::Main => course == Course::Main,
            Filter::Dessert => course == Course::Dessert,
        }
    }
}

impl From<Course> for Filter {
    fn from(course: Course) -> Self {
        match course {
            Course::Starter => Filter::Starter,
            Course::Main => Filter::Main,
            Course::Dessert => Filter::Dessert,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for Filter {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Filter::All);
        }
        Course::try_from(s)
            .map(Filter::from)
            .map_err(|_| format!("Unknown filter: {}", s))
    }
}

/// A recorded dish
///
/// Only [`crate::ledger::MenuLedger::add_item`] produces items that live in a
/// ledger, so every held item has a non-empty dish, description and a
/// non-negative price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: Uuid,
    pub dish: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub course: Course,
    pub added_at: DateTime<Utc>,
}

impl MenuItem {
    pub(crate) fn new(dish: String, description: String, price: Decimal, course: Course) -> Self {
        Self {
            id: Uuid::new_v4(),
            dish,
            description,
            price,
            course,
            added_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_course_from_str() {
        assert_eq!(Course::try_from("starter").unwrap(), Course::Starter);
        assert_eq!(Course::try_from(" MAIN ").unwrap(), Course::Main);
        assert_eq!(Course::try_from("Dessert").unwrap(), Course::Dessert);
        assert!(Course::try_from("side").is_err());
    }

    #[test]
    fn test_filter_matches() {
        assert!(Course::ALL.iter().all(|c| Filter::All.matches(*c)));
        assert!(Filter::Main.matches(Course::Main));
        assert!(!Filter::Main.matches(Course::Starter));
        assert!(!Filter::Dessert.matches(Course::Main));
    }

    #[test]
    fn test_filter_from_str() {
        assert_eq!(Filter::try_from("ALL").unwrap(), Filter::All);
        assert_eq!(Filter::try_from("dessert").unwrap(), Filter::Dessert);
        assert!(Filter::try_from("drinks").is_err());
    }

    #[test]
    fn test_duplicate_dishes_get_distinct_ids() {
        let a = MenuItem::new("Soup".into(), "Tomato".into(), dec!(45), Course::Starter);
        let b = MenuItem::new("Soup".into(), "Tomato".into(), dec!(45), Course::Starter);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_item_json_keeps_exact_price() {
        let item = MenuItem::new("Cake".into(), "Chocolate".into(), dec!(12.50), Course::Dessert);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["price"], "12.50");
        assert_eq!(json["course"], "dessert");
    }
}
