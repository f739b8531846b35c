//! Per-field commit policy for completed cell edits.
//!
//! Every field is classified once into a [`FieldKind`]. When the grid reports
//! a completed edit, [`on_cell_edit_complete`] dispatches on that kind and
//! answers with a [`CellEdit`]: either the typed value to store, or the reason
//! the edit must not be committed. The policy itself never touches a record;
//! [`Product::commit_edit`] is the one place that writes.

use std::fmt;

use crate::editing::validate::{is_positive_integer, trim_input};
use crate::model::product::{FieldValue, Product, ProductField};

/// Validation class of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Must be a non-negative integer literal (`quantity`, `price`).
    Numeric,
    /// Any non-empty value picked from a fixed option list (`country`).
    Selection,
    /// Any value that is not blank once trimmed.
    Text,
}

impl ProductField {
    pub fn kind(self) -> FieldKind {
        match self {
            // Price is rendered with a currency editor but validated as an
            // integer, so "9.99" is rejected.
            ProductField::Quantity | ProductField::Price => FieldKind::Numeric,
            ProductField::Country => FieldKind::Selection,
            _ => FieldKind::Text,
        }
    }
}

/// Why an edit was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Free-text value empty or whitespace only.
    Blank,
    /// Numeric value is not a clean non-negative integer literal.
    NotAPositiveInteger,
    /// Integer literal does not fit the field.
    OutOfRange,
    /// A numeric free-text field received something that is not a number.
    NotANumber,
    /// Nothing selected in a dropdown.
    NoSelection,
    /// The value's type cannot be stored in the field.
    TypeMismatch,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Rejection::Blank => "value must not be blank",
            Rejection::NotAPositiveInteger => "value must be a positive integer",
            Rejection::OutOfRange => "value is too large",
            Rejection::NotANumber => "value must be a number",
            Rejection::NoSelection => "a value must be selected",
            Rejection::TypeMismatch => "value does not match the field type",
        };
        f.write_str(msg)
    }
}

/// Outcome of a completed cell edit.
#[derive(Debug, Clone, PartialEq)]
pub enum CellEdit {
    /// Store this value in the edited field.
    Accept(FieldValue),
    /// Discard the edit and keep the record as it was.
    Reject(Rejection),
}

impl CellEdit {
    pub fn is_accepted(&self) -> bool {
        matches!(self, CellEdit::Accept(_))
    }
}

/// Decides whether `new_value` may be committed into `field`.
///
/// `None` stands for an editor that holds no value at all (a cleared number
/// input, a dropdown with nothing selected).
pub fn on_cell_edit_complete(field: ProductField, new_value: Option<&str>) -> CellEdit {
    let result = match field.kind() {
        FieldKind::Numeric => numeric_value(field, new_value),
        FieldKind::Selection => selection_value(new_value),
        FieldKind::Text => text_value(field, new_value),
    };

    match result {
        Ok(value) => CellEdit::Accept(value),
        Err(rejection) => CellEdit::Reject(rejection),
    }
}

fn numeric_value(field: ProductField, new_value: Option<&str>) -> Result<FieldValue, Rejection> {
    let raw = new_value.ok_or(Rejection::NotAPositiveInteger)?;
    if !is_positive_integer(raw) {
        return Err(Rejection::NotAPositiveInteger);
    }

    let literal = trim_input(raw);
    match field {
        ProductField::Quantity => literal
            .parse::<u64>()
            .map(FieldValue::Integer)
            .map_err(|_| Rejection::OutOfRange),
        _ => literal
            .parse::<f64>()
            .map(FieldValue::Number)
            .map_err(|_| Rejection::NotANumber),
    }
}

fn selection_value(new_value: Option<&str>) -> Result<FieldValue, Rejection> {
    match new_value {
        Some(code) if !code.is_empty() => Ok(FieldValue::Text(code.to_string())),
        _ => Err(Rejection::NoSelection),
    }
}

fn text_value(field: ProductField, new_value: Option<&str>) -> Result<FieldValue, Rejection> {
    let raw = new_value.ok_or(Rejection::Blank)?;
    if trim_input(raw).is_empty() {
        return Err(Rejection::Blank);
    }

    match field {
        ProductField::Rating => trim_input(raw)
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(FieldValue::Number)
            .ok_or(Rejection::NotANumber),
        _ => Ok(FieldValue::Text(raw.to_string())),
    }
}

impl Product {
    /// Writes an accepted value into `field`.
    ///
    /// Fails without touching the record when the value's type does not fit.
    pub fn apply(&mut self, field: ProductField, value: FieldValue) -> Result<(), Rejection> {
        match (field, value) {
            (ProductField::Quantity, FieldValue::Integer(n)) => self.quantity = n,
            (ProductField::Price, FieldValue::Number(n)) if n >= 0.0 => self.price = n,
            (ProductField::Price, FieldValue::Integer(n)) => self.price = n as f64,
            (ProductField::Rating, FieldValue::Number(n)) => self.rating = n,
            (ProductField::Country, FieldValue::Text(code)) => self.country = Some(code),
            (ProductField::Country, FieldValue::Empty) => self.country = None,
            (field, FieldValue::Text(text)) => match text_slot(self, field) {
                Some(slot) => *slot = text,
                None => return Err(Rejection::TypeMismatch),
            },
            _ => return Err(Rejection::TypeMismatch),
        }
        Ok(())
    }

    /// Runs the commit policy for `field` and, on accept, stores the value.
    ///
    /// A rejected edit leaves the record exactly as it was.
    pub fn commit_edit(&mut self, field: ProductField, new_value: Option<&str>) -> CellEdit {
        match on_cell_edit_complete(field, new_value) {
            CellEdit::Accept(value) => match self.apply(field, value.clone()) {
                Ok(()) => CellEdit::Accept(value),
                Err(rejection) => CellEdit::Reject(rejection),
            },
            rejected => rejected,
        }
    }
}

fn text_slot(product: &mut Product, field: ProductField) -> Option<&mut String> {
    match field {
        ProductField::Id => Some(&mut product.id),
        ProductField::Code => Some(&mut product.code),
        ProductField::Name => Some(&mut product.name),
        ProductField::Description => Some(&mut product.description),
        ProductField::Image => Some(&mut product.image),
        ProductField::Category => Some(&mut product.category),
        ProductField::InventoryStatus => Some(&mut product.inventory_status),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            id: "1000".to_string(),
            code: "f230fh0g3".to_string(),
            name: "Bamboo Watch".to_string(),
            description: "Product Description".to_string(),
            image: "bamboo-watch.jpg".to_string(),
            price: 65.0,
            category: "Accessories".to_string(),
            quantity: 24,
            inventory_status: "INSTOCK".to_string(),
            rating: 5.0,
            country: None,
        }
    }

    #[test]
    fn classifies_fields() {
        assert_eq!(ProductField::Quantity.kind(), FieldKind::Numeric);
        assert_eq!(ProductField::Price.kind(), FieldKind::Numeric);
        assert_eq!(ProductField::Country.kind(), FieldKind::Selection);
        for field in [
            ProductField::Id,
            ProductField::Code,
            ProductField::Name,
            ProductField::Description,
            ProductField::Image,
            ProductField::Category,
            ProductField::InventoryStatus,
            ProductField::Rating,
        ] {
            assert_eq!(field.kind(), FieldKind::Text, "{}", field);
        }
    }

    #[test]
    fn quantity_accepts_integer_and_rejects_negative() {
        let mut record = product();
        assert_eq!(
            record.commit_edit(ProductField::Quantity, Some("12")),
            CellEdit::Accept(FieldValue::Integer(12))
        );
        assert_eq!(record.quantity, 12);

        let before = record.clone();
        assert_eq!(
            record.commit_edit(ProductField::Quantity, Some("-3")),
            CellEdit::Reject(Rejection::NotAPositiveInteger)
        );
        assert_eq!(record, before);
    }

    #[test]
    fn quantity_normalizes_leading_zeros() {
        let mut record = product();
        assert!(record.commit_edit(ProductField::Quantity, Some(" 00042 ")).is_accepted());
        assert_eq!(record.quantity, 42);
    }

    #[test]
    fn quantity_too_large_for_record_is_rejected() {
        let mut record = product();
        let before = record.clone();
        // Valid literal, but past u64::MAX.
        assert_eq!(
            record.commit_edit(ProductField::Quantity, Some("100000000000000000000")),
            CellEdit::Reject(Rejection::OutOfRange)
        );
        assert_eq!(record, before);
    }

    #[test]
    fn price_is_validated_as_integer() {
        let mut record = product();
        assert!(record.commit_edit(ProductField::Price, Some("80")).is_accepted());
        assert_eq!(record.price, 80.0);

        let before = record.clone();
        assert_eq!(
            record.commit_edit(ProductField::Price, Some("9.99")),
            CellEdit::Reject(Rejection::NotAPositiveInteger)
        );
        assert_eq!(
            record.commit_edit(ProductField::Price, None),
            CellEdit::Reject(Rejection::NotAPositiveInteger)
        );
        assert_eq!(record, before);
    }

    #[test]
    fn text_field_rejects_blank_and_stores_raw_value() {
        let mut record = product();
        let before = record.clone();
        assert_eq!(
            record.commit_edit(ProductField::Name, Some("  ")),
            CellEdit::Reject(Rejection::Blank)
        );
        assert_eq!(
            record.commit_edit(ProductField::Name, None),
            CellEdit::Reject(Rejection::Blank)
        );
        assert_eq!(record, before);

        assert!(record.commit_edit(ProductField::Name, Some("Widget")).is_accepted());
        assert_eq!(record.name, "Widget");

        assert!(record.commit_edit(ProductField::Code, Some(" x1 ")).is_accepted());
        assert_eq!(record.code, " x1 ");
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace() {
        let mut record = product();
        let before = record.clone();
        assert_eq!(
            record.commit_edit(ProductField::Name, Some("\u{feff}")),
            CellEdit::Reject(Rejection::Blank)
        );
        assert_eq!(record, before);

        assert_eq!(
            record.commit_edit(ProductField::Quantity, Some("\u{feff}5")),
            CellEdit::Accept(FieldValue::Integer(5))
        );
        assert_eq!(
            record.commit_edit(ProductField::Quantity, Some("\u{85}5")),
            CellEdit::Reject(Rejection::NotAPositiveInteger)
        );
        assert_eq!(record.quantity, 5);
    }

    #[test]
    fn country_stores_code_without_membership_check() {
        let mut record = product();
        assert_eq!(
            record.commit_edit(ProductField::Country, Some("FR")),
            CellEdit::Accept(FieldValue::Text("FR".to_string()))
        );
        assert_eq!(record.country.as_deref(), Some("FR"));

        assert!(record.commit_edit(ProductField::Country, Some("ZZ")).is_accepted());
        assert_eq!(record.country.as_deref(), Some("ZZ"));

        let before = record.clone();
        assert_eq!(
            record.commit_edit(ProductField::Country, None),
            CellEdit::Reject(Rejection::NoSelection)
        );
        assert_eq!(
            record.commit_edit(ProductField::Country, Some("")),
            CellEdit::Reject(Rejection::NoSelection)
        );
        assert_eq!(record, before);
    }

    #[test]
    fn rating_must_parse_as_number() {
        let mut record = product();
        assert!(record.commit_edit(ProductField::Rating, Some("3.5")).is_accepted());
        assert_eq!(record.rating, 3.5);

        let before = record.clone();
        assert_eq!(
            record.commit_edit(ProductField::Rating, Some("great")),
            CellEdit::Reject(Rejection::NotANumber)
        );
        assert_eq!(record, before);
    }

    #[test]
    fn recommitting_accepted_value_is_idempotent() {
        let mut record = product();
        assert!(record.commit_edit(ProductField::Quantity, Some("12")).is_accepted());
        let once = record.clone();
        assert!(record.commit_edit(ProductField::Quantity, Some("12")).is_accepted());
        assert_eq!(record, once);

        assert!(record.commit_edit(ProductField::Country, Some("FR")).is_accepted());
        let once = record.clone();
        assert!(record.commit_edit(ProductField::Country, Some("FR")).is_accepted());
        assert_eq!(record, once);
    }

    #[test]
    fn apply_refuses_mismatched_types() {
        let mut record = product();
        let before = record.clone();
        assert_eq!(
            record.apply(ProductField::Quantity, FieldValue::Text("12".to_string())),
            Err(Rejection::TypeMismatch)
        );
        assert_eq!(
            record.apply(ProductField::Name, FieldValue::Integer(3)),
            Err(Rejection::TypeMismatch)
        );
        assert_eq!(
            record.apply(ProductField::Price, FieldValue::Number(-1.0)),
            Err(Rejection::TypeMismatch)
        );
        assert_eq!(record, before);
    }

    #[test]
    fn policy_does_not_need_a_record() {
        assert_eq!(
            on_cell_edit_complete(ProductField::Quantity, Some("7")),
            CellEdit::Accept(FieldValue::Integer(7))
        );
        assert_eq!(
            on_cell_edit_complete(ProductField::Price, Some("007")),
            CellEdit::Accept(FieldValue::Number(7.0))
        );
    }
}
