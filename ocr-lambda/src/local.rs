//! Runs the handler once outside of AWS, with a payload from a local file.

use crate::handler::handler;
use crate::response::Response;
use lambda_runtime::{Context, Error, LambdaEvent};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Request ID of every local invocation.
pub const LOCAL_REQUEST_ID: &str = "local-payload";

/// ARN reported in the context of local invocations.
pub const LOCAL_FUNCTION_ARN: &str = "from-local-payload";

/// Deadline far enough in the future to never expire: 2034.
pub const LOCAL_DEADLINE_MS: u64 = 2035313041000;

/// A well-formed X-Ray header with zeroed IDs.
pub const LOCAL_TRACE_ID: &str =
    "Root=0-00000000-000000000000000000000000;Parent=0000000000000000;Sampled=0;Lineage=00000000:0";

/// Returns a context that looks like one from the Lambda runtime.
pub fn local_context() -> Context {
    let mut ctx = Context::default();
    ctx.request_id = LOCAL_REQUEST_ID.to_owned();
    ctx.deadline = LOCAL_DEADLINE_MS;
    ctx.invoked_function_arn = LOCAL_FUNCTION_ARN.to_owned();
    ctx.xray_trace_id = Some(LOCAL_TRACE_ID.to_owned());
    ctx
}

/// Parses a payload the way the runtime would before handing it over.
/// An empty payload is treated as `{}`.
pub fn parse_payload(payload: &str) -> Result<Value, Error> {
    if payload.trim().is_empty() {
        return Ok(Value::Object(Default::default()));
    }

    match serde_json::from_str(payload) {
        Ok(v) => Ok(v),
        Err(e) => Err(Error::from(format!("Payload is not valid JSON: {e}"))),
    }
}

/// Reads the payload from `file`, if any. Returns `{}` without a file.
pub fn read_payload(file: Option<&Path>) -> Result<Value, Error> {
    let file = match file {
        Some(v) => v,
        None => {
            debug!("No payload file. Using an empty event.");
            return Ok(Value::Object(Default::default()));
        }
    };

    let payload = match std::fs::read_to_string(file) {
        Ok(v) => v,
        Err(e) => {
            return Err(Error::from(format!(
                "Failed to read payload from {}: {e}",
                file.display()
            )))
        }
    };

    parse_payload(&payload)
}

/// Invokes the handler with `payload` and the local context.
pub async fn invoke(payload: Value) -> Result<Response, Error> {
    debug!("Local payload: {payload}");
    handler(LambdaEvent::new(payload, local_context())).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn local_context_carries_synthetic_values() {
        let ctx = local_context();

        assert_eq!(ctx.request_id, LOCAL_REQUEST_ID);
        assert_eq!(ctx.invoked_function_arn, LOCAL_FUNCTION_ARN);
        assert_eq!(ctx.deadline, LOCAL_DEADLINE_MS);
        assert_eq!(ctx.xray_trace_id.as_deref(), Some(LOCAL_TRACE_ID));
    }

    #[test]
    fn blank_payload_becomes_empty_object() {
        assert_eq!(parse_payload("").unwrap(), json!({}));
        assert_eq!(parse_payload(" \n\t").unwrap(), json!({}));
    }

    #[test]
    fn any_json_value_is_a_payload() {
        assert_eq!(parse_payload("null").unwrap(), Value::Null);
        assert_eq!(parse_payload("[1, 2]").unwrap(), json!([1, 2]));
        assert_eq!(
            parse_payload(r#"{"nested": {"a": 1}}"#).unwrap(),
            json!({"nested": {"a": 1}})
        );
    }

    #[test]
    fn non_json_payload_is_rejected() {
        let err = parse_payload("{not json").unwrap_err();

        assert!(err.to_string().starts_with("Payload is not valid JSON"));
    }

    #[test]
    fn read_payload_without_file_is_empty_object() {
        assert_eq!(read_payload(None).unwrap(), json!({}));
    }

    #[test]
    fn read_payload_from_file() {
        let path = std::env::temp_dir().join(format!("ocr-lambda-payload-{}.json", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(br#"{"unexpected": "field"}"#).unwrap();
        drop(file);

        let payload = read_payload(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(payload, json!({"unexpected": "field"}));
    }

    #[test]
    fn read_payload_reports_missing_file() {
        let path = Path::new("/nonexistent/ocr-lambda/payload.json");

        let err = read_payload(Some(path)).unwrap_err();

        assert!(err.to_string().contains("payload.json"));
    }

    #[tokio::test]
    async fn invoke_runs_the_handler() {
        let resp = invoke(json!({"unexpected": "field"})).await.unwrap();

        assert_eq!(resp, Response::ok().unwrap());
    }
}
