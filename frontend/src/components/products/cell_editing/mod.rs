//! Product cell-editing grid: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering,
//! editors and helpers.
//!
//! Responsibilities
//! - Re-export `Msg`, `CellEditingProps` and `CellEditingComponent`.
//! - Delegate `update` and `view` to their modules.
//! - On first render, load the records once from the product service.
//! - After a render that opened (or kept) an editor, move focus into it.

use yew::platform::spawn_local;
use yew::prelude::*;

mod editors;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

use crate::services::product_service::get_products_small;
pub use messages::Msg;
pub use props::CellEditingProps;
pub use state::CellEditingComponent;

impl Component for CellEditingComponent {
    type Message = Msg;
    type Properties = CellEditingProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CellEditingComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            spawn_local(async move {
                match get_products_small().await {
                    Ok(products) => link.send_message(Msg::SetProducts(products)),
                    Err(e) => link.send_message(Msg::LoadFailed(e)),
                }
            });
        }

        if self.focus_editor {
            self.focus_editor = false;
            self.focus_editor_element();
        }
    }
}
