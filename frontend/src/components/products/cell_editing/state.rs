//! Component state for the product cell-editing grid.
//!
//! The grid owns the loaded records and at most one open editor. Records are
//! only changed by `update::complete_edit`, through `Product::commit_edit`.

use common::editing::Rejection;
use common::model::product::{Product, ProductField};
use web_sys::HtmlElement;
use yew::prelude::*;

/// The cell currently being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveEdit {
    /// Index into `CellEditingComponent::products`.
    pub row: usize,
    pub field: ProductField,
    /// Pending editor value, not yet committed.
    pub value: Option<String>,
    /// Set when the last commit attempt was refused; cleared on the next change.
    pub rejection: Option<Rejection>,
}

pub struct CellEditingComponent {
    /// `None` until the record source has answered.
    pub products: Option<Vec<Product>>,

    pub editing: Option<ActiveEdit>,

    /// Reference to the open editor's input or select element.
    pub editor_ref: NodeRef,

    /// Move focus into the editor after the next render.
    pub focus_editor: bool,

    /// Guard to avoid loading the records more than once.
    pub loaded: bool,
}

impl CellEditingComponent {
    pub fn new() -> Self {
        Self {
            products: None,
            editing: None,
            editor_ref: NodeRef::default(),
            focus_editor: false,
            loaded: false,
        }
    }

    pub fn is_editing(&self, row: usize, field: ProductField) -> bool {
        self.editing
            .as_ref()
            .is_some_and(|edit| edit.row == row && edit.field == field)
    }

    /// Focuses the open editor, if it is mounted.
    pub fn focus_editor_element(&self) {
        if let Some(element) = self.editor_ref.cast::<HtmlElement>() {
            element.focus().ok();
        }
    }
}
