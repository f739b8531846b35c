//! Properties for the `CellEditingComponent`.

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CellEditingProps {
    /// CSS `min-width` of the `<table>`.
    #[prop_or(AttrValue::Static("50rem"))]
    pub table_min_width: AttrValue,
}
