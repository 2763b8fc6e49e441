use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const TRANSACTION_SERVICE_GREETING: &str = "Hello from Lambda transaction service mock!";
pub const USER_SERVICE_GREETING: &str = "Hello from Lambda user service mock!";

pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

/// Builds the constant success response for a mock service.
///
/// The body is the JSON encoding of the greeting literal itself (a quoted
/// string), matching what API Gateway proxies back to the caller verbatim.
pub fn greeting_response(greeting: &str) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code: 200,
        headers: json!({"Content-Type": JSON_CONTENT_TYPE}),
        body: stable_contract_json(greeting),
    }
}

pub fn stable_contract_json(value: impl Serialize) -> String {
    serde_json::to_string(&value).expect("serialization of contract value should not fail")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_response_is_a_success_with_json_content_type() {
        let response = greeting_response(TRANSACTION_SERVICE_GREETING);

        assert_eq!(response.status_code, 200);
        assert_eq!(response.headers["Content-Type"], "application/json");
    }

    #[test]
    fn greeting_response_body_is_the_json_encoded_literal() {
        let response = greeting_response(USER_SERVICE_GREETING);

        assert_eq!(response.body, "\"Hello from Lambda user service mock!\"");

        let decoded: String =
            serde_json::from_str(&response.body).expect("body should decode as a JSON string");
        assert_eq!(decoded, USER_SERVICE_GREETING);
        assert_eq!(stable_contract_json(&decoded), response.body);
    }

    #[test]
    fn response_serializes_status_field_as_status_code() {
        let response = greeting_response(TRANSACTION_SERVICE_GREETING);
        let value = serde_json::to_value(&response).expect("response should serialize");

        assert_eq!(value["statusCode"], 200);
        assert!(value.get("status_code").is_none());
        assert_eq!(value["headers"]["Content-Type"], "application/json");
    }

    #[test]
    fn response_round_trips_through_serde() {
        let response = greeting_response(USER_SERVICE_GREETING);
        let encoded = stable_contract_json(&response);
        let decoded: ApiGatewayResponse =
            serde_json::from_str(&encoded).expect("response should deserialize");

        assert_eq!(decoded, response);
    }
}
