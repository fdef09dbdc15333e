/// Runs a single invocation of the function with a payload from a local file
/// and prints the response. No AWS access is needed.
use lambda_runtime::Error;
use ocr_lambda::config::Config;
use ocr_lambda::local::{invoke, read_payload};
use ocr_lambda::logging::{init_tracing, warn_on_invalid_level};
use std::env::args;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env();
    init_tracing(config.tracing_level);
    warn_on_invalid_level(&config);

    let payload_file = args().nth(1).map(PathBuf::from);

    if payload_file.as_deref().is_some_and(|v| v.as_os_str() == "--help") {
        println!("Runs the OCR lambda handler once with a local payload.");
        println!();
        println!("With a payload file: ocr-lambda-local [payload_file], e.g. lambda_payload.json");
        println!("With an empty event: ocr-lambda-local");
        return Ok(());
    }

    let payload = read_payload(payload_file.as_deref())?;
    let response = invoke(payload).await?;

    println!("{}", serde_json::to_string(&response)?);

    Ok(())
}
