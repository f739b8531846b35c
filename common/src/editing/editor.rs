use crate::model::product::ProductField;

/// Input control used to edit a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKind {
    /// Numeric input formatted as USD.
    Currency,
    /// Dropdown over `model::country::COUNTRIES`.
    Dropdown,
    /// Plain text input.
    Text,
}

/// Picks the editor for a column. Quantity has no dedicated editor and uses
/// the text input; its value is still validated as an integer on commit.
pub fn editor_for(field: ProductField) -> EditorKind {
    match field {
        ProductField::Price => EditorKind::Currency,
        ProductField::Country => EditorKind::Dropdown,
        _ => EditorKind::Text,
    }
}
