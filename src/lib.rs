pub mod element;
pub mod error;
pub mod graph;
pub mod markup;
pub mod sync;
pub mod web;

#[cfg(test)]
mod mock;

use wasm_bindgen::prelude::*;

use graph::{ToggleState, ViewState};

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

/// Wire a report page's toggles. `table` is the table the page describes,
/// or `undefined` on the summary page.
#[wasm_bindgen(js_name = "attachSchemaView")]
pub fn attach_schema_view(table: Option<String>) -> Result<(), String> {
    web::attach(ViewState::from(table)).map_err(|e| e.to_string())
}

/// Wire a page that declares its table in the global `table` variable.
#[wasm_bindgen(js_name = "attachSchemaViewFromGlobal")]
pub fn attach_schema_view_from_global() -> Result<(), String> {
    web::attach_with(|page| ViewState::from(page.global_table())).map_err(|e| e.to_string())
}

/// The `[src, useMap]` pair for the given page context and checkbox states.
#[wasm_bindgen(js_name = "relationshipsGraph")]
pub fn relationships_graph(
    table: Option<String>,
    implied: bool,
    one_degree: bool,
    show_non_keys: bool,
) -> Vec<String> {
    let selection = ViewState::from(table).select(ToggleState {
        implied,
        one_degree,
        show_non_keys,
    });
    let use_map = selection.use_map();
    vec![selection.src, use_map]
}
