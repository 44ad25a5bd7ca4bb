//! Category filter and filtered aggregates
//!
//! Pure functions over the store's records. The only state is the current
//! selection, which the view owns.

use std::fmt;
use std::str::FromStr;

use crate::models::{Category, CategoryParseError, Expense, Money};

/// The active category filter ("All" or a single category)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Chip order: "All" then every category in display order
    pub fn chips() -> Vec<CategoryFilter> {
        std::iter::once(Self::All)
            .chain(Category::ALL.iter().copied().map(Self::Only))
            .collect()
    }

    pub fn matches(&self, expense: &Expense) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => expense.category == *category,
        }
    }

    /// Records passing the filter, in collection order
    pub fn apply<'a>(&self, expenses: &'a [Expense]) -> Vec<&'a Expense> {
        expenses.iter().filter(|e| self.matches(e)).collect()
    }

    /// Sum of the amounts passing the filter
    pub fn total(&self, expenses: &[Expense]) -> Money {
        expenses
            .iter()
            .filter(|e| self.matches(e))
            .map(|e| e.amount)
            .sum()
    }

    /// Number of records passing the filter
    pub fn count(&self, expenses: &[Expense]) -> usize {
        expenses.iter().filter(|e| self.matches(e)).count()
    }

    /// Next chip to the right, wrapping
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Only(Category::ALL[0]),
            Self::Only(Category::Other) => Self::All,
            Self::Only(category) => Self::Only(category.next()),
        }
    }

    /// Next chip to the left, wrapping
    pub fn prev(self) -> Self {
        match self {
            Self::All => Self::Only(Category::Other),
            Self::Only(Category::Food) => Self::All,
            Self::Only(category) => Self::Only(category.prev()),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.name(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryFilter {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// A filter chip together with the number of records it would show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipCount {
    pub filter: CategoryFilter,
    pub count: usize,
}

/// Record counts for every chip, in chip order
pub fn chip_counts(expenses: &[Expense]) -> Vec<ChipCount> {
    CategoryFilter::chips()
        .into_iter()
        .map(|filter| ChipCount {
            filter,
            count: filter.count(expenses),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewExpense;
    use crate::store::ExpenseStore;

    #[test]
    fn test_all_is_default_and_passes_everything() {
        let store = ExpenseStore::seeded();
        let filter = CategoryFilter::default();
        assert_eq!(filter, CategoryFilter::All);
        assert_eq!(filter.apply(store.all()).len(), 4);
        assert_eq!(filter.total(store.all()), store.total_amount());
    }

    #[test]
    fn test_filter_yields_matching_subsequence() {
        let mut store = ExpenseStore::seeded();
        store.create(NewExpense::new("Coffee", Money::from_cents(450), Category::Food));

        let filter = CategoryFilter::Only(Category::Food);
        let filtered = filter.apply(store.all());

        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|e| e.category == Category::Food));
        assert_eq!(filtered[0].title, "Coffee", "collection order is kept");

        let sum: Money = filtered.iter().map(|e| e.amount).sum();
        assert_eq!(filter.total(store.all()), sum);
        assert_eq!(sum, Money::from_cents(5525));
    }

    #[test]
    fn test_empty_category_filter() {
        let store = ExpenseStore::seeded();
        let filter = CategoryFilter::Only(Category::Education);
        assert!(filter.apply(store.all()).is_empty());
        assert_eq!(filter.total(store.all()), Money::zero());
    }

    #[test]
    fn test_chip_counts() {
        let store = ExpenseStore::seeded();
        let counts = chip_counts(store.all());

        assert_eq!(counts.len(), 9);
        assert_eq!(counts[0].filter, CategoryFilter::All);
        assert_eq!(counts[0].count, 4);
        let food = counts
            .iter()
            .find(|c| c.filter == CategoryFilter::Only(Category::Food))
            .unwrap();
        assert_eq!(food.count, 1);
        let per_category: usize = counts[1..].iter().map(|c| c.count).sum();
        assert_eq!(per_category, 4);
    }

    #[test]
    fn test_next_prev_cycle_through_chips() {
        let chips = CategoryFilter::chips();
        let mut current = CategoryFilter::All;
        for expected in chips.iter().skip(1).chain(chips.first()) {
            current = current.next();
            assert_eq!(current, *expected);
        }
        assert_eq!(CategoryFilter::All.prev(), CategoryFilter::Only(Category::Other));
        assert_eq!(CategoryFilter::Only(Category::Food).prev(), CategoryFilter::All);
    }

    #[test]
    fn test_parse() {
        assert_eq!("ALL".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "bills".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Bills)
        );
        assert!("nope".parse::<CategoryFilter>().is_err());
    }
}
