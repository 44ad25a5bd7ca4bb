//! Launch-time seed records
//!
//! Nothing is persisted between runs; every launch starts from these four
//! records, most recent first.

use chrono::{TimeZone, Utc};

use crate::models::{Category, Expense, ExpenseId, Money};

/// The four fixed records every session starts with
pub fn seed_expenses() -> Vec<Expense> {
    vec![
        seed("1", "Grocery Shopping", 5075, Category::Food, (2024, 1, 15, 10, 30)),
        seed("2", "Gas Station", 4000, Category::Transportation, (2024, 1, 14, 15, 45)),
        seed("3", "Movie Tickets", 2550, Category::Entertainment, (2024, 1, 13, 19, 20)),
        seed("4", "Electric Bill", 8000, Category::Bills, (2024, 1, 12, 9, 0)),
    ]
}

fn seed(
    id: &str,
    title: &str,
    cents: i64,
    category: Category,
    (year, month, day, hour, minute): (i32, u32, u32, u32, u32),
) -> Expense {
    Expense {
        id: ExpenseId::from(id),
        title: title.to_string(),
        amount: Money::from_cents(cents),
        category,
        created_at: Utc
            .with_ymd_and_hms(year, month, day, hour, minute, 0)
            .single()
            .unwrap_or_default(),
    }
}
