use lambda_runtime::{service_fn, Error, LambdaEvent};
use mock_services_core::contract::ApiGatewayResponse;
use mock_services_lambda::handlers::user::handle_user_event;
use serde_json::Value;

async fn handle_request(event: LambdaEvent<Value>) -> Result<ApiGatewayResponse, Error> {
    Ok(handle_user_event(event.payload))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}

#[cfg(test)]
mod tests {
    use lambda_runtime::Context;
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn resolves_constant_response_for_arbitrary_event() {
        let event = LambdaEvent::new(json!({"foo": "bar"}), Context::default());

        let response = handle_request(event).await.expect("handler should not fail");

        assert_eq!(response.status_code, 200);
        let decoded: String = serde_json::from_str(&response.body)
            .expect("body should decode as a JSON string");
        assert_eq!(decoded, "Hello from Lambda user service mock!");
    }
}
