//! Expense store
//!
//! Owns the canonical, ordered collection of expense records and every
//! mutation to it. The store trusts its caller: input is validated at the
//! form boundary before it gets here.
//!
//! Aggregates are recomputed on every call. Lists are small, so there is no
//! running total to keep in sync.

use std::collections::BTreeMap;

use chrono::Utc;
use tracing::{debug, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Expense, ExpenseId, ExpenseUpdate, Money, NewExpense};

use super::seed::seed_expenses;

/// Ordered collection of expenses, most recent first
#[derive(Debug, Clone, Default)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the launch seed records
    pub fn seeded() -> Self {
        Self::from_expenses(seed_expenses())
    }

    /// Create a store from existing records, kept in the given order
    pub fn from_expenses(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }

    /// Record a new expense and prepend it
    ///
    /// Assigns a fresh identifier and stamps the current instant when the
    /// input carries no timestamp.
    pub fn create(&mut self, input: NewExpense) -> Expense {
        let mut id = ExpenseId::generate();
        while self.contains(&id) {
            id = ExpenseId::generate();
        }

        let expense = Expense::from_new(id, input, Utc::now());
        debug!(id = %expense.id, amount = %expense.amount, category = %expense.category, "expense created");

        self.expenses.insert(0, expense.clone());
        expense
    }

    /// Merge `update` over the record with the given id
    ///
    /// Returns the updated record, or `NotFound` with the collection left
    /// untouched.
    pub fn update(&mut self, id: &ExpenseId, update: ExpenseUpdate) -> ExpenseResult<Expense> {
        let Some(expense) = self.expenses.iter_mut().find(|e| &e.id == id) else {
            warn!(%id, "update of unknown expense");
            return Err(ExpenseError::expense_not_found(id.as_str()));
        };

        expense.apply(update);
        debug!(%id, "expense updated");
        Ok(expense.clone())
    }

    /// Remove the record with the given id and return it
    pub fn delete(&mut self, id: &ExpenseId) -> ExpenseResult<Expense> {
        let Some(index) = self.expenses.iter().position(|e| &e.id == id) else {
            warn!(%id, "delete of unknown expense");
            return Err(ExpenseError::expense_not_found(id.as_str()));
        };

        let removed = self.expenses.remove(index);
        debug!(%id, "expense deleted");
        Ok(removed)
    }

    /// Sum of every amount in the collection
    pub fn total_amount(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Summed amount per category; categories with no records are omitted
    pub fn category_totals(&self) -> BTreeMap<Category, Money> {
        let mut totals = BTreeMap::new();
        for expense in &self.expenses {
            *totals.entry(expense.category).or_insert_with(Money::zero) += expense.amount;
        }
        totals
    }

    pub fn get(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| &e.id == id)
    }

    pub fn contains(&self, id: &ExpenseId) -> bool {
        self.get(id).is_some()
    }

    /// All records, most recent first
    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
