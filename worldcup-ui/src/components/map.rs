//! Choropleth Map Component
//!
//! Draws the server's figure document with Plotly (loaded by `index.html`).
//! Clicks on the map are forwarded to the session as `map_click`.

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::state::global::DashboardState;
use crate::state::websocket::WebSocketClient;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = react)]
    fn plotly_react(root: &web_sys::HtmlElement, data: &JsValue, layout: &JsValue, config: &JsValue);
}

/// Map panel
#[component]
pub fn ChoroplethMap() -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let client = expect_context::<WebSocketClient>();
    let map_ref = create_node_ref::<html::Div>();
    let click_bound = store_value(false);

    // Redraw whenever the server sends a new figure
    create_effect(move |_| {
        let Some(figure) = state.figure.get() else {
            return;
        };
        let Some(div) = map_ref.get() else {
            return;
        };

        if let Err(e) = draw_figure(&div, &figure) {
            web_sys::console::error_1(&format!("Failed to draw map: {:?}", e).into());
            return;
        }

        // Plotly only adds `.on` to the element after the first draw
        if !click_bound.get_value() {
            match bind_click(&div, client.clone()) {
                Ok(()) => click_bound.set_value(true),
                Err(e) => web_sys::console::error_1(&format!("Map click not bound: {:?}", e).into()),
            }
        }
    });

    view! {
        <div class="mb-4">
            <h4 class="text-center">"Choropleth Map"</h4>
            <div id="choropleth-map" node_ref=map_ref style="height: 600px" />
        </div>
    }
}

fn draw_figure(div: &web_sys::HtmlElement, figure: &serde_json::Value) -> Result<(), JsValue> {
    let data = js_sys::JSON::parse(&figure["data"].to_string())?;
    let layout = js_sys::JSON::parse(&figure["layout"].to_string())?;
    let config = js_sys::JSON::parse(r#"{"responsive":true}"#)?;

    plotly_react(div, &data, &layout, &config);
    Ok(())
}

fn bind_click(div: &web_sys::HtmlElement, client: WebSocketClient) -> Result<(), JsValue> {
    let on = js_sys::Reflect::get(div, &"on".into())?.dyn_into::<js_sys::Function>()?;

    let handler = Closure::wrap(Box::new(move |event: JsValue| {
        client.report(client.map_click(click_payload(&event)));
    }) as Box<dyn FnMut(JsValue)>);

    on.call2(div, &"plotly_click".into(), handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

/// Clicked locations only; Plotly event objects are cyclic and do not serialize
fn click_payload(event: &JsValue) -> serde_json::Value {
    let points = js_sys::Reflect::get(event, &"points".into())
        .ok()
        .filter(|p| js_sys::Array::is_array(p))
        .map(|p| js_sys::Array::from(&p))
        .map(|points| {
            points
                .iter()
                .map(|point| {
                    let location = js_sys::Reflect::get(&point, &"location".into())
                        .ok()
                        .and_then(|l| l.as_string());
                    serde_json::json!({ "location": location })
                })
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    serde_json::json!({ "points": points })
}
