use alloc::{format, string::String};
use serde_json::Value;

use super::{
    envelope::{Envelope, Reply},
    error::CallError,
    frame::Request,
};

pub trait EncodeDecode: Sized {
    fn encode(&self) -> String;
    fn decode(raw: &str) -> Result<Self, CallError>;
}

impl EncodeDecode for Request {
    fn encode(&self) -> String {
        serde_json::to_string(&self.to_value()).unwrap_or_default()
    }

    fn decode(raw: &str) -> Result<Self, CallError> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|e| CallError::Parsing(format!("JSON parse error: {}", e)))?;
        let mut map = match value {
            Value::Object(map) => map,
            _ => return Err(CallError::Parsing("Expected JSON object".into())),
        };
        let action = match map.remove("action") {
            Some(Value::String(action)) => action,
            _ => return Err(CallError::Parsing("Missing action".into())),
        };
        Ok(Request {
            action,
            params: map,
        })
    }
}

impl EncodeDecode for Envelope {
    fn encode(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    fn decode(raw: &str) -> Result<Self, CallError> {
        serde_json::from_str(raw).map_err(|e| CallError::Parsing(format!("JSON parse error: {}", e)))
    }
}

/// Decodes a raw response body and applies the error convention in one step.
pub fn decode_reply(raw: &str) -> Result<Reply, CallError> {
    Envelope::decode(raw)?.into_result()
}
