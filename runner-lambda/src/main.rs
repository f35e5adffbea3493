use greeting_core::config::GreetingConfig;
use greeting_core::telemetry;
use greeting_core::{Greeter, GreetingResponse};
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use tracing::{Instrument, error, info, info_span, warn};

/// Runs one invocation. The context is only used to tag the log span; the
/// response depends on the payload alone.
pub async fn function_handler(
    greeter: &Greeter,
    event: LambdaEvent<Value>,
) -> Result<GreetingResponse, Error> {
    let (payload, context) = event.into_parts();
    let span = info_span!("invocation", request_id = %context.request_id);

    async move {
        match greeter.handle(payload) {
            Ok(response) => {
                info!(status_code = response.status_code, "greeting sent");
                Ok(response)
            }
            Err(e) => {
                if e.is_client_error() {
                    warn!(error = %e, "rejected event");
                } else {
                    error!(error = %e, "invocation failed");
                }
                Err(Error::from(e))
            }
        }
    }
    .instrument(span)
    .await
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // required to enable CloudWatch error logging by the runtime
    telemetry::init_lambda_tracing();

    let config = GreetingConfig::from_env()?;
    config.validate()?;
    let greeter = Greeter::new(config);
    let greeter = &greeter;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(greeter, event).await
    }))
    .await
}
