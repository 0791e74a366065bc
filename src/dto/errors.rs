use serde::{Deserialize, Serialize};

/// Body returned for validation and invalid-input failures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub msg: String,
    pub erro: u16,
}

impl ErrorBody {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            erro: 400,
        }
    }
}
