use crate::response::Response;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

/// Responds to every invocation with the same readiness message.
///
/// The event is taken as a raw `Value` so that any payload the runtime can deliver,
/// including `null`, reaches this function. Neither the payload nor the context is read.
/// OCR processing happens in a separate container that this function does not call.
///
/// The `Result` is the shape `lambda_runtime` expects. It is always `Ok`: the only fallible
/// step is serializing a fixed `&str` into the body, which cannot fail.
pub async fn handler(_event: LambdaEvent<Value>) -> Result<Response, Error> {
    info!("Handler invoked");

    Response::ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::READY_MESSAGE;
    use lambda_runtime::Context;
    use serde_json::json;

    fn event(payload: Value) -> LambdaEvent<Value> {
        LambdaEvent::new(payload, Context::default())
    }

    #[tokio::test]
    async fn empty_event_gets_200() {
        let resp = handler(event(json!({}))).await.unwrap();

        assert_eq!(resp.status_code, 200);
        assert_eq!(resp.body, format!(r#"{{"message": "{}"}}"#, READY_MESSAGE));
    }

    #[tokio::test]
    async fn payload_shape_is_ignored() {
        let baseline = handler(event(json!({}))).await.unwrap();

        for payload in [
            Value::Null,
            json!("just a string"),
            json!([1, 2, 3]),
            json!({"unexpected": "field", "nested": {"a": 1}}),
            json!({"httpMethod": "POST", "path": "/api/upload", "body": "JVBERi0xLjQK"}),
        ] {
            assert_eq!(handler(event(payload)).await.unwrap(), baseline);
        }
    }

    #[tokio::test]
    async fn never_returns_an_error() {
        let payloads = [
            Value::Null,
            json!(false),
            json!(""),
            json!({"body": "{not json", "isBase64Encoded": true}),
            json!({"a": {"b": {"c": [null, {}, []]}}}),
        ];

        for payload in payloads {
            let resp = handler(event(payload.clone())).await;
            assert!(resp.is_ok(), "handler failed on {payload}");
        }
    }

    #[tokio::test]
    async fn context_is_ignored() {
        let mut ctx = Context::default();
        ctx.request_id = "8476a536-e9f4-11e8-9739-2dfe598c3fcd".to_owned();
        ctx.invoked_function_arn = "arn:aws:lambda:us-east-1:123456789012:function:docvault".to_owned();
        ctx.deadline = 1;

        let with_ctx = handler(LambdaEvent::new(json!({}), ctx)).await.unwrap();
        let without_ctx = handler(event(json!({}))).await.unwrap();

        assert_eq!(with_ctx, without_ctx);
    }
}
