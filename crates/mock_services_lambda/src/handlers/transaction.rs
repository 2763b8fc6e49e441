use serde_json::Value;

use mock_services_core::contract::{
    greeting_response, ApiGatewayResponse, TRANSACTION_SERVICE_GREETING,
};

use super::log_handler_info;

/// Returns the canned transaction service greeting for any invocation.
///
/// The event payload is never inspected; every invocation produces the
/// same response.
pub fn handle_transaction_event(_event: Value) -> ApiGatewayResponse {
    log_handler_info("transaction_service_mock", "invocation_received");
    greeting_response(TRANSACTION_SERVICE_GREETING)
}
