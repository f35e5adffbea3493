use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOCAL_FILTER: &str = "greeting_core=info,greet_local=info";
pub const LAMBDA_FILTER: &str = "greeting_core=info,bootstrap=info";

fn env_filter(default: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into())
}

/// Console output for local runs. Logs go to stderr so stdout stays clean
/// for the response document.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(env_filter(LOCAL_FILTER))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Output for CloudWatch: no colors, and no timestamps since CloudWatch
/// stamps every line itself.
pub fn init_lambda_tracing() {
    tracing_subscriber::registry()
        .with(env_filter(LAMBDA_FILTER))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .without_time()
                .with_target(true),
        )
        .init();
}
