use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Plain message body used for confirmations and every error response.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct MessageDto {
    pub msg: String,
}

impl MessageDto {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
