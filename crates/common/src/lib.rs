pub mod types;
pub mod utils;
pub mod env;
pub mod metrics;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_serializes_status() {
        let h = types::Health::ok();
        let v = serde_json::to_value(&h).unwrap();
        assert_eq!(v["status"], "ok");
    }

    #[test]
    fn delete_ack_uses_success_key() {
        let ack = types::Ack::success("gone");
        let v = serde_json::to_value(&ack).unwrap();
        assert_eq!(v["success"], "gone");
    }
}
