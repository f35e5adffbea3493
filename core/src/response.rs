use serde::{Deserialize, Serialize};

pub const STATUS_OK: u16 = 200;

/// HTTP-style record handed back to the platform's response pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GreetingResponse {
    pub status_code: u16,
    pub body: String,
}

impl GreetingResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status_code: STATUS_OK,
            body: body.into(),
        }
    }
}
