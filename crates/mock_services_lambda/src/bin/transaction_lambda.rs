use lambda_runtime::{service_fn, Error, LambdaEvent};
use mock_services_core::contract::ApiGatewayResponse;
use mock_services_lambda::handlers::transaction::handle_transaction_event;
use serde_json::Value;

async fn handle_request(event: LambdaEvent<Value>) -> Result<ApiGatewayResponse, Error> {
    Ok(handle_transaction_event(event.payload))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}
