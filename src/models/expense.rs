//! Expense model
//!
//! An expense is a single logged spending entry. `NewExpense` is the input
//! for creating one and `ExpenseUpdate` is a partial field set merged over an
//! existing record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;

/// A single logged expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// What the money was spent on
    pub title: String,

    /// Amount spent (always positive for records created through the form)
    pub amount: Money,

    /// Classification tag
    pub category: Category,

    /// When the expense was recorded
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Build a record from creation input, stamping `now` if no timestamp was
    /// given
    pub fn from_new(id: ExpenseId, input: NewExpense, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: input.title,
            amount: input.amount,
            category: input.category,
            created_at: input.created_at.unwrap_or(now),
        }
    }

    /// Shallow-merge the provided fields; the identifier never changes
    pub fn apply(&mut self, update: ExpenseUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(amount) = update.amount {
            self.amount = amount;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(created_at) = update.created_at {
            self.created_at = created_at;
        }
    }

    /// ISO-8601 creation instant
    pub fn created_at_iso(&self) -> String {
        self.created_at.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}] {}",
            self.created_at.format("%Y-%m-%d"),
            self.title,
            self.category,
            self.amount
        )
    }
}

/// Input for creating an expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub title: String,
    pub amount: Money,
    pub category: Category,
    /// Defaults to the moment of creation when `None`
    pub created_at: Option<DateTime<Utc>>,
}

impl NewExpense {
    pub fn new(title: impl Into<String>, amount: Money, category: Category) -> Self {
        Self {
            title: title.into(),
            amount,
            category,
            created_at: None,
        }
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

/// Partial field set for updating an expense
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseUpdate {
    pub title: Option<String>,
    pub amount: Option<Money>,
    pub category: Option<Category>,
    pub created_at: Option<DateTime<Utc>>,
}

impl ExpenseUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.created_at.is_none()
    }
}
