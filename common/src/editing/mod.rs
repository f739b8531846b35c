//! Cell-edit rules shared by the grid: which editor a column gets, which
//! values a field accepts, and how an accepted value is written back.

pub mod editor;
pub mod policy;
pub mod validate;

pub use editor::{editor_for, EditorKind};
pub use policy::{on_cell_edit_complete, CellEdit, FieldKind, Rejection};
pub use validate::is_positive_integer;
