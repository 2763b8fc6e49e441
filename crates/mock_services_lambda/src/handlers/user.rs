use serde_json::Value;

use mock_services_core::contract::{greeting_response, ApiGatewayResponse, USER_SERVICE_GREETING};

use super::log_handler_info;

/// Returns the canned user service greeting for any invocation.
pub fn handle_user_event(_event: Value) -> ApiGatewayResponse {
    log_handler_info("user_service_mock", "invocation_received");
    greeting_response(USER_SERVICE_GREETING)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn returns_greeting_for_arbitrary_event() {
        let response = handle_user_event(json!({"foo": "bar"}));

        assert_eq!(response.status_code, 200);
        assert_eq!(response.headers, json!({"Content-Type": "application/json"}));
        assert_eq!(response.body, "\"Hello from Lambda user service mock!\"");
    }

    #[test]
    fn body_round_trips_through_json() {
        let response = handle_user_event(json!(null));

        let decoded: String = serde_json::from_str(&response.body)
            .expect("body should decode as a JSON string");
        assert_eq!(decoded, USER_SERVICE_GREETING);
        assert_eq!(
            serde_json::to_string(&decoded).expect("greeting should re-encode"),
            response.body
        );
    }

    #[test]
    fn ignores_event_contents() {
        let from_object = handle_user_event(json!({"foo": "bar"}));
        let from_string = handle_user_event(json!("not even an object"));

        assert_eq!(from_object, from_string);
    }
}
