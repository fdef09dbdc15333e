use lambda_runtime::Error;
use serde::{Deserialize, Serialize};
use serde_json::ser::{Formatter, Serializer};
use std::io;

/// The only status code this function ever returns.
pub const STATUS_OK: u16 = 200;

/// The message reported inside every response body.
pub const READY_MESSAGE: &str = "Lambda running with OCR container";

/// The structure returned to the Lambda runtime.
/// The runtime serializes it as `{"statusCode": 200, "body": "..."}`,
/// which is the shape API Gateway expects from a proxy integration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Response {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// JSON text, not a nested structure. API Gateway passes it to the caller as-is.
    pub body: String,
}

/// The payload that gets pre-serialized into `Response::body`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageBody<'a> {
    pub message: &'a str,
}

impl Response {
    /// Builds a fresh 200 response with the readiness message in the body.
    pub fn ok() -> Result<Self, Error> {
        Ok(Self {
            status_code: STATUS_OK,
            body: to_spaced_json(&MessageBody {
                message: READY_MESSAGE,
            })?,
        })
    }
}

/// Serializes `value` with `", "` and `": "` separators, e.g. `{"message": "..."}`.
/// serde_json's compact output has no spaces, which would change the body bytes
/// callers have been receiving.
pub fn to_spaced_json<T: Serialize + ?Sized>(value: &T) -> Result<String, Error> {
    let mut buf = Vec::with_capacity(64);
    let mut serializer = Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut serializer)?;

    Ok(String::from_utf8(buf)?)
}

/// A compact formatter with a single space after every `,` and `:`.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}
