use serde::{Deserialize, Serialize};

/// Uniform result of every action handler.
///
/// All failures — validation, remote, unexpected — are folded into the
/// `success: false` branch; nothing is thrown past a handler. `data` is
/// present only when the underlying operation produces a value the caller
/// needs (e.g. the fetched class).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Outcome<T = ()> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T> Outcome<T> {
    /// Success with a confirmation message and a forwarded result.
    pub fn ok_with(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Success with a confirmation message only.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }

    /// Failure with a user-facing message.
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}
