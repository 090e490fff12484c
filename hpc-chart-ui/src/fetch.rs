//! `Transport` over the browser's `fetch`.

use async_trait::async_trait;
use hpc_core::route::{join_url, Route};
use hpc_core::{InvokeError, RawReply, Transport};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// POSTs to `base_url` + route. An empty base targets the page's own origin.
#[derive(Debug, Clone, Default)]
pub struct FetchTransport {
    base_url: String,
}

impl FetchTransport {
    pub fn same_origin() -> Self {
        Self::default()
    }
}

fn transport_err(value: JsValue) -> InvokeError {
    InvokeError::Transport(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn post_json(&self, route: Route, body: String) -> Result<RawReply, InvokeError> {
        let window =
            web_sys::window().ok_or_else(|| InvokeError::Transport("no window".to_string()))?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(if self.base_url.is_empty() {
            RequestMode::SameOrigin
        } else {
            RequestMode::Cors
        });
        opts.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(&join_url(&self.base_url, route), &opts)
            .map_err(transport_err)?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(transport_err)?;

        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(transport_err)?
            .dyn_into()
            .map_err(transport_err)?;

        let status = response.status();
        let text = JsFuture::from(response.text().map_err(transport_err)?)
            .await
            .map_err(transport_err)?;
        Ok(RawReply {
            status,
            body: text.as_string().unwrap_or_default(),
        })
    }
}
