use alloc::string::String;

/// Shown when the backend reports an error without saying what went wrong.
pub const UNKNOWN_BACKEND_ERROR: &str = "不明なエラーが発生しました";

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub enum CallError {
    /// The backend answered with `status: "error"`.
    Backend(String),
    /// The request never produced a response body.
    Transport(String),
    /// The response body was not the expected JSON shape.
    Parsing(String),
}

impl CallError {
    pub fn backend(message: Option<String>) -> Self {
        match message {
            Some(message) if !message.is_empty() => CallError::Backend(message),
            _ => CallError::Backend(String::from(UNKNOWN_BACKEND_ERROR)),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            CallError::Backend(msg) | CallError::Transport(msg) | CallError::Parsing(msg) => msg,
        }
    }
}

impl core::fmt::Display for CallError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}
