//! Typed wrappers around JS interop via `js_sys::eval()` and `js_sys::Reflect`.
//!
//! The D3.js map renderer lives in `assets/js/region-map.js` and is loaded at
//! runtime as globals (no ES modules), exposed via `window.*`. Hover events
//! come back into Rust through `wasm-bindgen` closures registered on `window`
//! under a per-map key.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

// Embed the map JS at compile time
static REGION_MAP_JS: &str = include_str!("../assets/js/region-map.js");

/// Hover-enter callback: region name (if the shape has one) and pointer position.
pub type HoverEnter = Closure<dyn FnMut(Option<String>, f64, f64)>;
/// Hover-leave callback.
pub type HoverLeave = Closure<dyn FnMut()>;

/// Quote a string as a JS string literal.
pub fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Vista JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the map script with a wait-for-D3 polling loop.
///
/// Safe to call from every map instance: only the first call evaluates the
/// script. The script is stored on `window` and evaluated at global scope
/// once D3 is available, then its functions are promoted to `window.*`.
pub fn init_map_scripts() {
    let store_js = format!(
        "if (!window.__vistaMapsReady && window.__vistaMapScript === undefined) {{ window.__vistaMapScript = {}; }}",
        js_string(REGION_MAP_JS)
    );
    call_js(&store_js);

    let init_js = r#"
        (function() {
            if (window.__vistaMapsReady || window.__vistaMapsPolling) return;
            window.__vistaMapsPolling = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__vistaMapScript);
                    delete window.__vistaMapScript;
                    if (typeof renderRegionMap !== 'undefined') window.renderRegionMap = renderRegionMap;
                    if (typeof destroyRegionMap !== 'undefined') window.destroyRegionMap = destroyRegionMap;
                    window.__vistaMapsReady = true;
                    window.__vistaMapsPolling = false;
                    console.log('Vista region maps initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render a choropleth map into `container_id`.
///
/// `shading_json` is a serialized `RegionShading`, `frame_json` the map frame
/// (size, projection scale, offset). Hover events are delivered to the
/// handlers registered under `hover_key`. Polls until D3, the map script and
/// the container element are all available.
pub fn render_region_map(
    container_id: &str,
    map_source: &str,
    shading_json: &str,
    frame_json: &str,
    hover_key: &str,
) {
    call_js(&render_map_js(
        container_id,
        map_source,
        shading_json,
        frame_json,
        hover_key,
    ));
}

/// Script for one render. Each call takes a fresh token for the container;
/// a poll or geography fetch whose token is no longer current gives up, so
/// only the latest render paints and an unmounted map stops polling.
fn render_map_js(
    container_id: &str,
    map_source: &str,
    shading_json: &str,
    frame_json: &str,
    hover_key: &str,
) -> String {
    let id = js_string(container_id);
    let source = js_string(map_source);
    let shading = js_string(shading_json);
    let frame = js_string(frame_json);
    let key = js_string(hover_key);
    format!(
        r#"
        (function() {{
            var renders = window.__vistaMapRenders = window.__vistaMapRenders || {{}};
            var token = (renders[{id}] || 0) + 1;
            renders[{id}] = token;
            var poll = setInterval(function() {{
                if (renders[{id}] !== token) {{
                    clearInterval(poll);
                    return;
                }}
                if (window.__vistaMapsReady &&
                    typeof window.renderRegionMap !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.renderRegionMap({id}, {source}, {shading}, {frame}, {key}, token);
                    }} catch(e) {{ console.error('[Vista] renderRegionMap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    )
}

/// Expose hover handlers to the map script as `window[key] = { enter, leave }`.
pub fn register_hover_handlers(key: &str, enter: &HoverEnter, leave: &HoverLeave) {
    let handlers = js_sys::Object::new();
    let registered = js_sys::Reflect::set(&handlers, &JsValue::from_str("enter"), enter.as_ref())
        .and_then(|_| js_sys::Reflect::set(&handlers, &JsValue::from_str("leave"), leave.as_ref()))
        .and_then(|_| js_sys::Reflect::set(&js_sys::global(), &JsValue::from_str(key), &handlers));
    if let Err(e) = registered {
        log::error!("Failed to register map hover handlers {}: {:?}", key, e);
    }
}

pub fn unregister_hover_handlers(key: &str) {
    let global: js_sys::Object = js_sys::global();
    if let Err(e) = js_sys::Reflect::delete_property(&global, &JsValue::from_str(key)) {
        log::warn!("Failed to remove map hover handlers {}: {:?}", key, e);
    }
}

/// Destroy/clean up the map in the given container.
pub fn destroy_map(container_id: &str) {
    let id = js_string(container_id);
    call_js(&format!(
        "if (window.__vistaMapRenders) delete window.__vistaMapRenders[{id}]; \
         if (typeof window.destroyRegionMap !== 'undefined') window.destroyRegionMap({id});"
    ));
    if let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(container_id))
    {
        element.set_inner_html("");
    }
}

#[cfg(test)]
mod tests {
    use super::{js_string, render_map_js};

    #[test]
    fn test_js_string_escapes_quotes_and_newlines() {
        assert_eq!(js_string("region-map"), "\"region-map\"");
        assert_eq!(js_string("Côte d'Ivoire"), "\"Côte d'Ivoire\"");
        assert_eq!(js_string("a\"b\nc"), "\"a\\\"b\\nc\"");
    }

    #[test]
    fn test_map_script_defines_entry_points() {
        assert!(super::REGION_MAP_JS.contains("function renderRegionMap("));
        assert!(super::REGION_MAP_JS.contains("function destroyRegionMap("));
    }

    #[test]
    fn test_region_lookup_ignores_prototype_keys() {
        assert!(super::REGION_MAP_JS
            .contains("Object.prototype.hasOwnProperty.call(shading.regions, name)"));
    }

    #[test]
    fn test_render_script_drops_superseded_renders() {
        let js = render_map_js("gdp-map", "/geo.json", "{}", "{}", "__hover");
        assert!(js.contains(r#"renders["gdp-map"] = token;"#));
        assert!(js.contains(r#"if (renders["gdp-map"] !== token) {"#));
        assert!(js.contains(r#"window.renderRegionMap("gdp-map", "/geo.json", "{}", "{}", "__hover", token)"#));
        assert!(super::REGION_MAP_JS.contains("if (!isCurrentRender(containerId, renderToken)) return;"));
    }
}
