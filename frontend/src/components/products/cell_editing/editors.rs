//! Input controls for the three editor kinds.
//!
//! Every editor reports changes with `Msg::EditorChanged`, completes on Enter
//! or blur and cancels on Escape. The dropdown also completes as soon as an
//! option is picked.

use common::editing::{EditorKind, Rejection};
use common::model::country::COUNTRIES;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{ActiveEdit, CellEditingComponent};

pub fn cell_editor(
    kind: EditorKind,
    edit: &ActiveEdit,
    node_ref: NodeRef,
    link: &Scope<CellEditingComponent>,
) -> Html {
    match kind {
        EditorKind::Currency => price_editor(edit, node_ref, link),
        EditorKind::Dropdown => dropdown_editor(edit, node_ref, link),
        EditorKind::Text => text_editor(edit, node_ref, link),
    }
}

fn text_editor(edit: &ActiveEdit, node_ref: NodeRef, link: &Scope<CellEditingComponent>) -> Html {
    html! {
        <input
            type="text"
            ref={node_ref}
            class={input_class(edit.rejection)}
            title={rejection_title(edit.rejection)}
            value={edit.value.clone().unwrap_or_default()}
            oninput={link.callback(|e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                Msg::EditorChanged(Some(input.value()))
            })}
            onkeydown={key_handler(link)}
            onblur={link.callback(|_: FocusEvent| Msg::CompleteEdit)}
        />
    }
}

fn price_editor(edit: &ActiveEdit, node_ref: NodeRef, link: &Scope<CellEditingComponent>) -> Html {
    html! {
        <span class="p-inputgroup">
            <span class="p-inputgroup-addon">{"$"}</span>
            <input
                type="number"
                inputmode="decimal"
                min="0"
                step="0.01"
                ref={node_ref}
                class={input_class(edit.rejection)}
                title={rejection_title(edit.rejection)}
                value={edit.value.clone().unwrap_or_default()}
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    let value = input.value();
                    Msg::EditorChanged((!value.is_empty()).then_some(value))
                })}
                onkeydown={key_handler(link)}
                onblur={link.callback(|_: FocusEvent| Msg::CompleteEdit)}
            />
        </span>
    }
}

fn dropdown_editor(
    edit: &ActiveEdit,
    node_ref: NodeRef,
    link: &Scope<CellEditingComponent>,
) -> Html {
    let selected = edit.value.as_deref().unwrap_or_default();
    let options = COUNTRIES
        .iter()
        .map(|country| {
            html! {
                <option value={country.code} selected={country.code == selected}>
                    { country.code }
                </option>
            }
        })
        .collect::<Html>();

    html! {
        <div class="flex">
            <select
                ref={node_ref}
                class={classes!("w-full", "md:w-14rem", input_class(edit.rejection))}
                title={rejection_title(edit.rejection)}
                onchange={link.batch_callback(|e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    let value = select.value();
                    vec![
                        Msg::EditorChanged((!value.is_empty()).then_some(value)),
                        Msg::CompleteEdit,
                    ]
                })}
                onkeydown={key_handler(link)}
                onblur={link.callback(|_: FocusEvent| Msg::CompleteEdit)}
            >
                <option value="" selected={selected.is_empty()}>{"Select a Country"}</option>
                { options }
            </select>
        </div>
    }
}

fn key_handler(link: &Scope<CellEditingComponent>) -> Callback<KeyboardEvent> {
    link.batch_callback(|e: KeyboardEvent| match e.key().as_str() {
        "Enter" => {
            e.prevent_default();
            vec![Msg::CompleteEdit]
        }
        "Escape" => vec![Msg::CancelEdit],
        _ => vec![],
    })
}

fn input_class(rejection: Option<Rejection>) -> Classes {
    classes!("p-inputtext", rejection.map(|_| "p-invalid"))
}

fn rejection_title(rejection: Option<Rejection>) -> Option<AttrValue> {
    rejection.map(|r| AttrValue::from(r.to_string()))
}
