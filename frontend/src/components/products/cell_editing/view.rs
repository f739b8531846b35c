//! View rendering for the cell-editing grid.
//!
//! One `<table>` with a column per entry of `PRODUCT_COLUMNS`. A cell renders
//! either its display body or, while it is being edited, the editor chosen by
//! `editor_for`.

use common::editing::editor_for;
use common::model::column::{ColumnMeta, PRODUCT_COLUMNS};
use common::model::country::find_country;
use common::model::product::{Product, ProductField};
use yew::html::Scope;
use yew::prelude::*;

use super::editors::cell_editor;
use super::helpers::format_currency;
use super::messages::Msg;
use super::state::CellEditingComponent;

pub fn view(component: &CellEditingComponent, ctx: &Context<CellEditingComponent>) -> Html {
    let link = ctx.link();
    let style = format!("min-width: {};", ctx.props().table_min_width);

    html! {
        <div class="p-datatable p-datatable-gridlines">
            <table class="p-datatable-table" style={style}>
                <thead class="p-datatable-thead">
                    <tr>
                        { for PRODUCT_COLUMNS.iter().map(|column| html! {
                            <th style="width: 20%">{ column.header }</th>
                        }) }
                    </tr>
                </thead>
                <tbody class="p-datatable-tbody">
                    { build_body(component, link) }
                </tbody>
            </table>
        </div>
    }
}

fn build_body(component: &CellEditingComponent, link: &Scope<CellEditingComponent>) -> Html {
    match &component.products {
        None => message_row("Loading products..."),
        Some(products) if products.is_empty() => message_row("No products found."),
        Some(products) => products
            .iter()
            .enumerate()
            .map(|(row, product)| build_row(component, link, row, product))
            .collect::<Html>(),
    }
}

fn message_row(text: &str) -> Html {
    html! {
        <tr class="p-datatable-emptymessage">
            <td colspan={PRODUCT_COLUMNS.len().to_string()}>{ text.to_string() }</td>
        </tr>
    }
}

fn build_row(
    component: &CellEditingComponent,
    link: &Scope<CellEditingComponent>,
    row: usize,
    product: &Product,
) -> Html {
    html! {
        <tr key={product.id.clone()}>
            { for PRODUCT_COLUMNS.iter().map(|column| build_cell(component, link, row, product, column)) }
        </tr>
    }
}

fn build_cell(
    component: &CellEditingComponent,
    link: &Scope<CellEditingComponent>,
    row: usize,
    product: &Product,
    column: &ColumnMeta,
) -> Html {
    let field = column.field;

    match component.editing.as_ref().filter(|_| component.is_editing(row, field)) {
        Some(edit) => html! {
            <td class="p-editable-column p-cell-editing">
                { cell_editor(editor_for(field), edit, component.editor_ref.clone(), link) }
            </td>
        },
        None => html! {
            <td
                class="p-editable-column"
                tabindex="0"
                onclick={link.callback(move |_: MouseEvent| Msg::StartEdit { row, field })}
            >
                { cell_body(product, field) }
            </td>
        },
    }
}

/// Display content of a cell that is not being edited.
fn cell_body(product: &Product, field: ProductField) -> Html {
    match field {
        ProductField::Price => html! { <>{ format_currency(product.price) }</> },
        ProductField::Country => match product.country.as_deref() {
            Some(code) => {
                let name = find_country(code).map(|country| country.name);
                html! { <span title={name}>{ code.to_string() }</span> }
            }
            None => html! { <span class="p-placeholder">{"Select a Country"}</span> },
        },
        _ => html! { <>{ product.value(field).to_string() }</> },
    }
}
