use alloc::{format, string::String};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use super::error::CallError;

#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Error,
    /// Missing or unrecognised status. Only `error` short-circuits, so this
    /// is handled like `ok`.
    #[default]
    #[serde(other)]
    Other,
}

/// Response body shared by every backend action.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct Envelope {
    #[serde(default)]
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// The useful part of a non-error envelope.
#[derive(Clone, Debug, PartialEq)]
pub struct Reply {
    pub message: Option<String>,
    pub data: Value,
}

impl Envelope {
    pub fn ok<T: Serialize>(data: T) -> Self {
        Self {
            status: Status::Ok,
            message: None,
            data: serde_json::to_value(data).ok(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn into_result(self) -> Result<Reply, CallError> {
        match self.status {
            Status::Error => Err(CallError::backend(self.message)),
            Status::Ok | Status::Other => Ok(Reply {
                message: self.message,
                data: self.data.unwrap_or(Value::Null),
            }),
        }
    }
}

impl Reply {
    pub fn new(data: Value) -> Self {
        Self {
            message: None,
            data,
        }
    }

    pub fn data_as<T: DeserializeOwned>(&self) -> Result<T, CallError> {
        serde_json::from_value(self.data.clone()).map_err(|e| CallError::Parsing(format!("{}", e)))
    }
}
