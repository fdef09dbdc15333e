use std::env::{var, vars};
use std::str::FromStr;

/// Env var with the log level, e.g. `debug`. `RUST_LOG` overrides it.
pub const TRACING_LEVEL_VAR: &str = "OCR_LAMBDA_TRACING_LEVEL";

const DEFAULT_BUCKET: &str = "pdf-uploads";
const DEFAULT_ENDPOINT: &str = "http://localstack:4566";
const DEFAULT_REGION: &str = "us-east-1";

/// Never printed by `env_vars_summary`.
const SENSITIVE_VARS: [&str; 3] = ["AWS_ACCESS_KEY_ID", "AWS_SECRET_ACCESS_KEY", "AWS_SESSION_TOKEN"];

/// Start-up settings read from the environment.
///
/// The storage settings describe where the OCR container keeps its documents.
/// They are only logged here: the handler response does not depend on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// INFO if the env var is missing or unparsable.
    pub tracing_level: tracing::Level,
    /// The value of `OCR_LAMBDA_TRACING_LEVEL` if it could not be parsed, to be reported once logging is up.
    pub invalid_tracing_level: Option<String>,
    /// E.g. pdf-uploads
    pub bucket: String,
    /// E.g. http://localstack:4566
    pub endpoint: String,
    /// E.g. us-east-1
    pub region: String,
}

impl Config {
    /// Creates a new Config instance from the process environment.
    /// Uses default values where the env vars are not set or invalid, so the function always starts.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| var(key).ok())
    }

    /// Same as `from_env`, but takes the values from `lookup` instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let (tracing_level, invalid_tracing_level) = match lookup(TRACING_LEVEL_VAR) {
            None => (tracing::Level::INFO, None),
            Some(v) => match tracing::Level::from_str(v.trim()) {
                Ok(level) => (level, None),
                Err(_) => (tracing::Level::INFO, Some(v)),
            },
        };

        // AWS_REGION is set by the Lambda service, AWS_DEFAULT_REGION is common in local shells
        let region = lookup("AWS_REGION")
            .or_else(|| lookup("AWS_DEFAULT_REGION"))
            .unwrap_or_else(|| DEFAULT_REGION.to_owned());

        Self {
            tracing_level,
            invalid_tracing_level,
            bucket: lookup("S3_BUCKET").unwrap_or_else(|| DEFAULT_BUCKET.to_owned()),
            endpoint: lookup("AWS_ENDPOINT_URL").unwrap_or_else(|| DEFAULT_ENDPOINT.to_owned()),
            region,
        }
    }
}

/// Returns all environment variables in the form of `export KEY=VALUE key2=value2`,
/// sorted by name, with AWS credentials left out.
pub fn env_vars_summary() -> String {
    format_env_vars(vars())
}

fn format_env_vars<I>(env: I) -> String
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut env_vars = env
        .into_iter()
        .filter(|(key, _)| !SENSITIVE_VARS.contains(&key.as_str()))
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<String>>();

    // the list is easier to deal with when sorted
    env_vars.sort();
    env_vars.insert(0, "export".to_owned());

    env_vars.join(" ")
}
