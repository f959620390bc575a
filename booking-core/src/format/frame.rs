use alloc::{format, string::String};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use super::error::CallError;

/// Outbound call, sent on the wire as a single object `{action, ...params}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub action: String,
    pub params: Map<String, Value>,
}

impl Request {
    pub fn new<T: Serialize>(action: impl Into<String>, payload: T) -> Result<Self, CallError> {
        let params = match serde_json::to_value(payload) {
            Ok(Value::Object(params)) => params,
            Ok(Value::Null) => Map::new(),
            Ok(_) => {
                return Err(CallError::Parsing(String::from(
                    "request params must be a JSON object",
                )))
            }
            Err(e) => return Err(CallError::Parsing(format!("{}", e))),
        };
        Ok(Self {
            action: action.into(),
            params,
        })
    }

    pub fn with_param(mut self, key: impl Into<String>, value: Value) -> Self {
        self.params.insert(key.into(), value);
        self
    }

    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    pub fn params_as<T: DeserializeOwned>(&self) -> Result<T, CallError> {
        serde_json::from_value(Value::Object(self.params.clone()))
            .map_err(|e| CallError::Parsing(format!("{}", e)))
    }

    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert(String::from("action"), Value::String(self.action.clone()));
        for (key, value) in self.params.iter() {
            // the frame's own tag always wins over a param of the same name
            if key != "action" {
                map.insert(key.clone(), value.clone());
            }
        }
        Value::Object(map)
    }
}
