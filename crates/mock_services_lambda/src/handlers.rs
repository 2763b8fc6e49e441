use serde_json::json;

pub mod transaction;
pub mod user;

fn log_handler_info(component: &str, event: &str) {
    eprintln!(
        "{}",
        json!({
            "component": component,
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })
    );
}
