use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

impl Health {
    pub fn ok() -> Self { Self { status: "ok" } }
}

/// Acknowledgement body for destructive operations: `{"success": "..."}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Ack {
    pub success: String,
}

impl Ack {
    pub fn success(msg: impl Into<String>) -> Self { Self { success: msg.into() } }
}
