//! Expense form validation
//!
//! The form is the only gate in front of the store. Failures are collected
//! as a field-to-message mapping; submission is blocked while it has any
//! entry.

use std::collections::BTreeMap;
use std::fmt;

use crate::models::{Category, Expense, ExpenseUpdate, Money, MoneyParseError, NewExpense};

pub const TITLE_REQUIRED: &str = "Title is required";
pub const AMOUNT_REQUIRED: &str = "Amount is required";
pub const AMOUNT_INVALID: &str = "Please enter a valid amount";
pub const AMOUNT_TOO_PRECISE: &str = "Use at most two decimal places";
pub const AMOUNT_TOO_LARGE: &str = "Amount cannot exceed 1000000000.00";

/// A validated form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Title,
    Amount,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => write!(f, "title"),
            Self::Amount => write!(f, "amount"),
        }
    }
}

/// Validation messages keyed by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FormField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Drop the message for one field (the user started fixing it)
    pub fn clear(&mut self, field: FormField) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// Raw form values as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseForm {
    pub title: String,
    pub amount: String,
    pub category: Category,
}

impl ExpenseForm {
    pub fn new(title: impl Into<String>, amount: impl Into<String>, category: Category) -> Self {
        Self {
            title: title.into(),
            amount: amount.into(),
            category,
        }
    }

    /// Pre-populate from an existing record (edit mode)
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            title: expense.title.clone(),
            amount: expense.amount.to_string(),
            category: expense.category,
        }
    }

    /// Check every field and collect the failures
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.title.trim().is_empty() {
            errors.insert(FormField::Title, TITLE_REQUIRED);
        }

        if let Err(message) = self.parsed_amount() {
            errors.insert(FormField::Amount, message);
        }

        errors
    }

    /// The amount, if it parses, is strictly positive and within the cap
    fn parsed_amount(&self) -> Result<Money, &'static str> {
        match Money::parse(&self.amount) {
            Ok(amount) if !amount.is_positive() => Err(AMOUNT_INVALID),
            Ok(amount) if amount > Money::MAX_ENTRY => Err(AMOUNT_TOO_LARGE),
            Ok(amount) => Ok(amount),
            Err(MoneyParseError::Empty) => Err(AMOUNT_REQUIRED),
            Err(MoneyParseError::TooManyDecimals(_)) => Err(AMOUNT_TOO_PRECISE),
            Err(MoneyParseError::Overflow) => Err(AMOUNT_TOO_LARGE),
            Err(MoneyParseError::InvalidFormat(_)) => Err(AMOUNT_INVALID),
        }
    }

    /// Validate and produce creation input
    pub fn to_new_expense(&self) -> Result<NewExpense, FieldErrors> {
        let (title, amount) = self.checked()?;
        Ok(NewExpense::new(title, amount, self.category))
    }

    /// Validate and produce an edit that replaces title, amount and category
    pub fn to_update(&self) -> Result<ExpenseUpdate, FieldErrors> {
        let (title, amount) = self.checked()?;
        Ok(ExpenseUpdate::new()
            .title(title)
            .amount(amount)
            .category(self.category))
    }

    fn checked(&self) -> Result<(String, Money), FieldErrors> {
        let errors = self.validate();
        match self.parsed_amount() {
            Ok(amount) if errors.is_empty() => Ok((self.title.trim().to_string(), amount)),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ExpenseStore;

    #[test]
    fn test_valid_form() {
        let form = ExpenseForm::new("  Coffee ", "4.5", Category::Food);
        assert!(form.validate().is_empty());

        let input = form.to_new_expense().unwrap();
        assert_eq!(input.title, "Coffee");
        assert_eq!(input.amount, Money::from_cents(450));
        assert_eq!(input.category, Category::Food);
        assert_eq!(input.created_at, None);
    }

    #[test]
    fn test_blank_title() {
        let errors = ExpenseForm::new("   ", "10", Category::Other).validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FormField::Title), Some(TITLE_REQUIRED));
    }

    #[test]
    fn test_missing_amount() {
        let errors = ExpenseForm::new("Taxi", "", Category::Transportation).validate();
        assert_eq!(errors.get(FormField::Amount), Some(AMOUNT_REQUIRED));
    }

    #[test]
    fn test_invalid_amounts() {
        for bad in ["abc", "0", "0.00", "-5", "1e3", "inf", "NaN", "-0.5"] {
            let errors = ExpenseForm::new("Thing", bad, Category::Other).validate();
            assert_eq!(
                errors.get(FormField::Amount),
                Some(AMOUNT_INVALID),
                "amount {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_extra_decimal_places_rejected() {
        for bad in ["0.001", "1.999", "12.345"] {
            let form = ExpenseForm::new("Thing", bad, Category::Other);
            assert_eq!(
                form.validate().get(FormField::Amount),
                Some(AMOUNT_TOO_PRECISE),
                "amount {:?} should be rejected",
                bad
            );
            assert!(form.to_new_expense().is_err());
        }
    }

    #[test]
    fn test_amount_cap() {
        let at_cap = ExpenseForm::new("House", "1000000000", Category::Other);
        assert_eq!(at_cap.to_new_expense().unwrap().amount, Money::MAX_ENTRY);

        for big in ["1000000000.01", "90000000000000000", "99999999999999999999"] {
            let form = ExpenseForm::new("Big", big, Category::Other);
            assert_eq!(form.validate().get(FormField::Amount), Some(AMOUNT_TOO_LARGE));
            assert!(form.to_new_expense().is_err());
        }
    }

    #[test]
    fn test_largest_amounts_keep_totals_exact() {
        let mut store = ExpenseStore::new();
        let form = ExpenseForm::new("Big", "1000000000.00", Category::Other);
        for _ in 0..1000 {
            store.create(form.to_new_expense().unwrap());
        }

        let expected = Money::from_cents(Money::MAX_ENTRY.cents() * 1000);
        assert_eq!(store.total_amount(), expected);
        assert_eq!(store.category_totals()[&Category::Other], expected);
    }

    #[test]
    fn test_both_fields_reported_together() {
        let form = ExpenseForm::default();
        let errors = form.validate();
        assert_eq!(errors.len(), 2);
        assert!(form.to_new_expense().is_err());
        assert_eq!(
            errors.to_string(),
            "title: Title is required; amount: Amount is required"
        );
    }

    #[test]
    fn test_clear_single_field() {
        let mut errors = ExpenseForm::default().validate();
        errors.clear(FormField::Title);
        assert_eq!(errors.get(FormField::Title), None);
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_edit_round_trip_through_store() {
        let mut store = ExpenseStore::seeded();
        let original = store.all()[0].clone();

        let mut form = ExpenseForm::from_expense(&original);
        assert_eq!(form.amount, "50.75");
        form.title = "Groceries".into();
        form.category = Category::Shopping;

        let updated = store.update(&original.id, form.to_update().unwrap()).unwrap();
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.title, "Groceries");
        assert_eq!(updated.amount, original.amount);
        assert_eq!(updated.category, Category::Shopping);
        assert_eq!(updated.created_at, original.created_at);
    }
}
