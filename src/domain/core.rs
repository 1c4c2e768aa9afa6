// src/domain/core.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::money::AmountValue;

pub type AuctionId = i64;
pub type BidId = i64;

/// Sentinel accepted by the category filter to mean "no category restriction".
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Equipment,
    Construction,
    Medicine,
    IT,
    Transport,
    Goods,
}

impl Category {
    /// Every category in the order the filter offers them.
    pub const ALL: [Category; 6] = [
        Category::Equipment,
        Category::Construction,
        Category::Medicine,
        Category::IT,
        Category::Transport,
        Category::Goods,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Equipment => "Оборудование",
            Category::Construction => "Строительство",
            Category::Medicine => "Медицина",
            Category::IT => "IT",
            Category::Transport => "Транспорт",
            Category::Goods => "Товары",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    // Exact, case-sensitive match against the display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|c| c.name() == s)
            .copied()
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Category::from_str(&text).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Category),
    /// A value that names no known category. Matches nothing.
    Unknown(String),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
            CategoryFilter::Unknown(_) => false,
        }
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        if s == ALL_CATEGORIES {
            return CategoryFilter::All;
        }
        match Category::from_str(s) {
            Ok(category) => CategoryFilter::Only(category),
            Err(_) => CategoryFilter::Unknown(s.to_string()),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "{}", ALL_CATEGORIES),
            CategoryFilter::Only(category) => write!(f, "{}", category),
            CategoryFilter::Unknown(text) => write!(f, "{}", text),
        }
    }
}

/// Display status carried by the fixture. It is not recomputed from the end time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuctionStatus {
    Active,
    Ending,
    Closed,
}

impl AuctionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AuctionStatus::Active => "Активен",
            AuctionStatus::Ending => "Завершается",
            AuctionStatus::Closed => "Завершён",
        }
    }
}

/// Why a bid was turned down. The user always sees [`BID_REJECTED_MESSAGE`];
/// the variant is kept for logging.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BidRejection {
    #[error("Not a valid bid amount: {0:?}")]
    InvalidAmount(String),

    #[error("Bid {amount} does not undercut the current price {current_price}")]
    MustUndercutCurrentPrice {
        amount: String,
        current_price: AmountValue,
    },

    #[error("Bid {amount} is off the auction step {min_step} from {current_price}")]
    OffStep {
        amount: AmountValue,
        current_price: AmountValue,
        min_step: AmountValue,
    },
}

pub const BID_REJECTED_TITLE: &str = "Ошибка";
pub const BID_REJECTED_MESSAGE: &str =
    "Ставка должна быть меньше текущей цены и соответствовать шагу аукциона";
pub const BID_ACCEPTED_TITLE: &str = "Ставка принята!";
