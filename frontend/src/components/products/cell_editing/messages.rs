use common::model::product::{Product, ProductField};

#[derive(Clone)]
pub enum Msg {
    SetProducts(Vec<Product>),
    LoadFailed(String),
    /// A cell was clicked.
    StartEdit { row: usize, field: ProductField },
    /// The active editor's value changed. `None` means the editor is empty.
    EditorChanged(Option<String>),
    /// Enter, blur or a dropdown pick: run the commit policy.
    CompleteEdit,
    /// Escape: drop the pending value and close the editor.
    CancelEdit,
}
