//! Generic request dispatch.
//!
//! Every flow goes through [`invoke`]: serialize the request, POST it to the
//! request's route, classify the reply. Nothing here retries.

use crate::error::InvokeError;
use crate::request::Calculation;
use crate::route::Route;
use async_trait::async_trait;
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Status and body of an HTTP reply, before any interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawReply {
    pub status: u16,
    pub body: String,
}

impl RawReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can POST a JSON body to a backend route.
///
/// `?Send` because the browser implementation holds JS values.
#[async_trait(?Send)]
pub trait Transport {
    async fn post_json(&self, route: Route, body: String) -> Result<RawReply, InvokeError>;
}

/// Send one calculation request and decode its reply.
pub async fn invoke<C, T>(transport: &T, request: &C) -> Result<C::Response, InvokeError>
where
    C: Calculation,
    T: Transport + ?Sized,
{
    let body = serde_json::to_string(request).map_err(|e| InvokeError::Decode(e.to_string()))?;
    info!("POST {} ({} bytes)", C::ROUTE, body.len());
    let reply = transport.post_json(C::ROUTE, body).await?;
    debug!("{} answered HTTP {}", C::ROUTE, reply.status);
    decode_reply(&reply)
}

/// Classify a raw reply.
///
/// A 5xx status is always a `Status` error, whatever the body says. Below
/// that, an `error` string in a JSON object body wins over the status code,
/// since the backend reports rejected input as HTTP 400 with such a body.
pub fn decode_reply<R: DeserializeOwned>(reply: &RawReply) -> Result<R, InvokeError> {
    if reply.status >= 500 {
        return Err(InvokeError::Status(reply.status));
    }

    let parsed: Result<Value, _> = serde_json::from_str(&reply.body);

    if let Ok(Value::Object(map)) = &parsed {
        if let Some(Value::String(message)) = map.get("error") {
            return Err(InvokeError::Backend(message.clone()));
        }
    }

    if !reply.is_success() {
        return Err(InvokeError::Status(reply.status));
    }

    let value = parsed.map_err(|e| InvokeError::Decode(e.to_string()))?;
    serde_json::from_value(value).map_err(|e| InvokeError::Decode(e.to_string()))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::request::CopRequest;
    use crate::response::CopResponse;
    use std::cell::RefCell;

    /// Records every request and answers with a canned reply.
    pub(crate) struct FakeTransport {
        pub reply: Result<RawReply, InvokeError>,
        pub sent: RefCell<Vec<(Route, String)>>,
    }

    impl FakeTransport {
        pub(crate) fn ok(body: &str) -> Self {
            Self::answering(200, body)
        }

        pub(crate) fn answering(status: u16, body: &str) -> Self {
            Self {
                reply: Ok(RawReply {
                    status,
                    body: body.to_string(),
                }),
                sent: RefCell::new(Vec::new()),
            }
        }

        pub(crate) fn failing(reason: &str) -> Self {
            Self {
                reply: Err(InvokeError::Transport(reason.to_string())),
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl Transport for FakeTransport {
        async fn post_json(&self, route: Route, body: String) -> Result<RawReply, InvokeError> {
            self.sent.borrow_mut().push((route, body));
            self.reply.clone()
        }
    }

    fn cop_request() -> CopRequest {
        CopRequest {
            source_temperature: "10".into(),
            flow_temperature: "35".into(),
        }
    }

    #[tokio::test]
    async fn invoke_posts_once_to_route() {
        let transport = FakeTransport::ok(r#"{"cop": 3.456}"#);
        let resp = invoke(&transport, &cop_request()).await.unwrap();
        assert_eq!(resp, CopResponse { cop: 3.456 });

        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, Route::Cop);
        let body: Value = serde_json::from_str(&sent[0].1).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "quelltemperatur": "10", "heiztemperatur": "35" })
        );
    }

    #[tokio::test]
    async fn invoke_surfaces_backend_error() {
        let transport = FakeTransport::ok(r#"{"error": "Ungültige Temperatur"}"#);
        let err = invoke(&transport, &cop_request()).await.unwrap_err();
        assert_eq!(err, InvokeError::Backend("Ungültige Temperatur".into()));
    }

    #[tokio::test]
    async fn invoke_passes_transport_failure_through() {
        let transport = FakeTransport::failing("connection refused");
        let err = invoke(&transport, &cop_request()).await.unwrap_err();
        assert!(matches!(err, InvokeError::Transport(_)));
        assert_eq!(transport.sent.borrow().len(), 1);
    }

    #[test]
    fn bad_request_with_error_body_is_backend_error() {
        let reply = RawReply {
            status: 400,
            body: r#"{"error": "could not convert string to float: 'abc'"}"#.into(),
        };
        let err = decode_reply::<CopResponse>(&reply).unwrap_err();
        assert_eq!(
            err.backend_message(),
            Some("could not convert string to float: 'abc'")
        );
    }

    #[test]
    fn server_error_with_error_body_is_status_error() {
        let reply = RawReply {
            status: 500,
            body: r#"{"error": "Traceback: KeyError 'x'"}"#.into(),
        };
        let err = decode_reply::<CopResponse>(&reply).unwrap_err();
        assert_eq!(err, InvokeError::Status(500));
        assert_eq!(err.backend_message(), None);
    }

    #[test]
    fn server_error_without_body_is_status_error() {
        let reply = RawReply {
            status: 502,
            body: "<html>Bad Gateway</html>".into(),
        };
        assert_eq!(
            decode_reply::<CopResponse>(&reply).unwrap_err(),
            InvokeError::Status(502)
        );
    }

    #[test]
    fn malformed_body_is_decode_error() {
        let reply = RawReply {
            status: 200,
            body: r#"{"cop": "three"}"#.into(),
        };
        assert!(matches!(
            decode_reply::<CopResponse>(&reply),
            Err(InvokeError::Decode(_))
        ));

        let reply = RawReply {
            status: 200,
            body: "not json".into(),
        };
        assert!(matches!(
            decode_reply::<CopResponse>(&reply),
            Err(InvokeError::Decode(_))
        ));
    }

    #[test]
    fn non_string_error_field_is_not_a_backend_message() {
        let reply = RawReply {
            status: 200,
            body: r#"{"error": null, "cop": 2.5}"#.into(),
        };
        assert_eq!(
            decode_reply::<CopResponse>(&reply).unwrap(),
            CopResponse { cop: 2.5 }
        );
    }
}
