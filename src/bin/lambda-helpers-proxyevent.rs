//! Proxy-event demonstration Lambda.
//!
//! Serves API Gateway proxy events: the caller posts `{"name": "..."}` and
//! gets back the named SSM parameter as JSON. Mostly here to show the two
//! helpers working together end to end; real functions will have their own
//! handlers.

use lambda_runtime::{run, service_fn, tracing, Error, LambdaEvent};
use serde::Deserialize;
use serde_json::{json, Value};

use lambda_helpers::{ProxyRequest, SsmParameterClient};

#[derive(Deserialize)]
struct Request {
    name: String,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false) // don't print the module name
        .without_time() // don't print time (CloudWatch has it)
        .init();

    let client = SsmParameterClient::from_env(true).await;
    let ref_client = &client;

    run(service_fn(|event: LambdaEvent<ProxyRequest>| async move {
        let (req, _context) = event.into_parts();
        handle(req, ref_client).await
    }))
    .await?;
    Ok(())
}

async fn handle(req: ProxyRequest, client: &SsmParameterClient) -> Result<Value, Error> {
    if req.authorization_token().is_none() {
        return Ok(json!({ "error": "missing bearer token" }));
    }

    let request: Request = req.parse_body()?;
    let value = client.read_string(&request.name).await?;
    Ok(json!({ "name": request.name, "value": value }))
}
