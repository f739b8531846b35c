//! Update function for the cell-editing grid.
//!
//! Elm-style: receives the component state, the `Context` and a `Msg`,
//! mutates the state and returns whether the view should re-render.
//!
//! Only one cell edits at a time. Moving to another cell first tries to
//! commit the open one; if that edit is rejected the open editor stays put.
//! The edit helpers below only touch component state; logging and toasts
//! happen in `update`.

use common::editing::{CellEdit, Rejection};
use common::model::product::ProductField;
use gloo_console::{error, log};
use yew::prelude::*;

use super::helpers::show_toast;
use super::messages::Msg;
use super::state::{ActiveEdit, CellEditingComponent};

pub fn update(
    component: &mut CellEditingComponent,
    _ctx: &Context<CellEditingComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SetProducts(products) => {
            component.products = Some(products);
            component.editing = None;
            true
        }
        Msg::LoadFailed(reason) => {
            error!(format!("Loading products failed: {}", reason));
            component.products = Some(Vec::new());
            show_toast("Could not load products.");
            true
        }
        Msg::StartEdit { row, field } => match move_to_cell(component, row, field) {
            Ok(opened) => opened,
            Err(rejection) => {
                log_rejection(component, rejection);
                true
            }
        },
        Msg::EditorChanged(value) => set_editor_value(component, value),
        Msg::CompleteEdit => {
            if component.editing.is_none() {
                return false;
            }
            if let Err(rejection) = complete_edit(component) {
                log_rejection(component, rejection);
            }
            true
        }
        Msg::CancelEdit => cancel_edit(component),
    }
}

fn log_rejection(component: &CellEditingComponent, rejection: Rejection) {
    if let Some(edit) = &component.editing {
        log!(format!(
            "Rejected edit of {} on row {}: {}",
            edit.field, edit.row, rejection
        ));
    }
}

/// Commits the open editor (if any) and opens `(row, field)`.
///
/// `Ok(false)` when that cell is already being edited, `Err` when the open
/// edit was rejected and stays open.
fn move_to_cell(
    component: &mut CellEditingComponent,
    row: usize,
    field: ProductField,
) -> Result<bool, Rejection> {
    if component.is_editing(row, field) {
        return Ok(false);
    }
    complete_edit(component)?;
    start_edit(component, row, field);
    Ok(true)
}

/// Opens the editor for `(row, field)`, seeded with the cell's current value.
fn start_edit(component: &mut CellEditingComponent, row: usize, field: ProductField) {
    let Some(product) = component.products.as_ref().and_then(|p| p.get(row)) else {
        return;
    };

    let value = match field {
        ProductField::Country => product.country.clone(),
        _ => Some(product.editor_seed(field)),
    };

    component.editing = Some(ActiveEdit {
        row,
        field,
        value,
        rejection: None,
    });
    component.focus_editor = true;
}

fn set_editor_value(component: &mut CellEditingComponent, value: Option<String>) -> bool {
    match component.editing.as_mut() {
        Some(edit) => {
            edit.value = value;
            edit.rejection = None;
            true
        }
        None => false,
    }
}

/// Runs the commit policy on the open editor.
///
/// `Ok` when no editor remains open: the edit was accepted, its row is gone,
/// or nothing was being edited. On `Err` the editor stays open, marked with
/// the rejection, and the record is untouched.
fn complete_edit(component: &mut CellEditingComponent) -> Result<(), Rejection> {
    let Some(edit) = component.editing.as_mut() else {
        return Ok(());
    };
    let Some(product) = component
        .products
        .as_mut()
        .and_then(|products| products.get_mut(edit.row))
    else {
        component.editing = None;
        return Ok(());
    };

    match product.commit_edit(edit.field, edit.value.as_deref()) {
        CellEdit::Accept(_) => {
            component.editing = None;
            Ok(())
        }
        CellEdit::Reject(rejection) => {
            edit.rejection = Some(rejection);
            component.focus_editor = true;
            Err(rejection)
        }
    }
}

/// Drops the pending value and closes the editor.
fn cancel_edit(component: &mut CellEditingComponent) -> bool {
    component.editing.take().is_some()
}
