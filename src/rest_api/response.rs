//! # Response Formatting
//!
//! Standard response types for the REST API. List and create responses are
//! the raw documents themselves; mutations acknowledge with a message body.

use serde::Serialize;

/// Acknowledgement body for update/delete
#[derive(Debug, Clone, Serialize)]
pub struct Ack {
    pub msg: &'static str,
}

impl Ack {
    pub fn success() -> Self {
        Self { msg: "success" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ack_serialization() {
        let json = serde_json::to_value(Ack::success()).unwrap();
        assert_eq!(json, serde_json::json!({"msg": "success"}));
    }
}
