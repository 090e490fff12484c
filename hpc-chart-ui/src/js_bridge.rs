//! Typed wrappers around the Chart.js global.
//!
//! Chart.js is loaded at runtime from a CDN as a UMD script and exposed as
//! `window.Chart`. Charts are constructed with `Reflect::construct` on that
//! global and released through the instance's own `destroy()`.

use hpc_core::chart::ChartSpec;
use hpc_core::registry::ChartBackend;
use js_sys::{Array, Function, Reflect};
use log::{info, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlCanvasElement;

const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('HPC JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Inject the Chart.js script tag once. Call at app startup.
pub fn load_chart_library() {
    if chart_library_ready() {
        return;
    }
    info!("loading Chart.js from {CHART_JS_URL}");
    call_js(&format!(
        r#"
        if (!document.getElementById('hpc-chartjs')) {{
            var s = document.createElement('script');
            s.id = 'hpc-chartjs';
            s.src = '{CHART_JS_URL}';
            s.onerror = function() {{ console.error('[HPC] Chart.js failed to load'); }};
            document.head.appendChild(s);
        }}
        "#
    ));
}

/// Whether `window.Chart` is defined yet.
pub fn chart_library_ready() -> bool {
    Reflect::get(&js_sys::global(), &JsValue::from_str("Chart"))
        .map(|c| c.is_function())
        .unwrap_or(false)
}

async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

/// Poll every 100 ms until `window.Chart` exists or `max_wait_ms` elapses.
pub async fn wait_for_chart_library(max_wait_ms: u32) -> bool {
    let mut waited = 0;
    while !chart_library_ready() {
        if waited >= max_wait_ms {
            warn!("Chart.js not available after {max_wait_ms} ms");
            return false;
        }
        sleep_ms(100).await;
        waited += 100;
    }
    true
}

fn describe(value: JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Draws a `ChartSpec` with Chart.js onto a `<canvas>` by DOM id.
#[derive(Default)]
pub struct ChartJsBackend;

impl ChartBackend for ChartJsBackend {
    type Handle = JsValue;
    type Error = String;

    fn create(&self, canvas_id: &str, spec: &ChartSpec) -> Result<JsValue, String> {
        let canvas: HtmlCanvasElement = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(canvas_id))
            .ok_or_else(|| format!("canvas '{canvas_id}' not found"))?
            .dyn_into()
            .map_err(|_| format!("element '{canvas_id}' is not a canvas"))?;

        let ctor: Function = Reflect::get(&js_sys::global(), &JsValue::from_str("Chart"))
            .map_err(describe)?
            .dyn_into()
            .map_err(|_| "Chart.js is not loaded yet".to_string())?;

        let config = js_sys::JSON::parse(&spec.to_chartjs_config().to_string()).map_err(describe)?;
        Reflect::construct(&ctor, &Array::of2(&canvas, &config)).map_err(describe)
    }

    fn destroy(&self, handle: JsValue) {
        let destroy = Reflect::get(&handle, &JsValue::from_str("destroy"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok());
        match destroy {
            Some(f) => {
                if let Err(e) = f.call0(&handle) {
                    warn!("chart destroy failed: {}", describe(e));
                }
            }
            None => warn!("chart handle has no destroy()"),
        }
    }
}
