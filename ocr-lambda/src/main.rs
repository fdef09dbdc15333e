use lambda_runtime::{service_fn, Error};
use ocr_lambda::config::{env_vars_summary, Config};
use ocr_lambda::handler;
use ocr_lambda::logging::{init_tracing, warn_on_invalid_level};
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env();
    init_tracing(config.tracing_level);
    warn_on_invalid_level(&config);

    info!(
        "Cold start. bucket: {}, endpoint: {}, region: {}",
        config.bucket, config.endpoint, config.region
    );
    debug!("{}", env_vars_summary());

    if let Err(e) = lambda_runtime::run(service_fn(handler)).await {
        debug!("Runtime error: {:?}", e);
        return Err(e);
    }

    Ok(())
}
