//! Request handling for the `marshall` command-line tool
//!
//! The binary is a thin boundary: it reads a request payload, runs the
//! analysis and writes either the response payload or an error payload.
//! Everything except argument parsing lives here so it can be tested.

use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};

use mo_core::config::AnalysisConfig;
use mo_models::{ErrorKind, ErrorResponse, MarshallInput, ModelError, Optimizer};

/// Exit code for input the caller has to fix
pub const EXIT_CLIENT_ERROR: u8 = 2;
/// Exit code for unexpected failures
pub const EXIT_SERVER_ERROR: u8 = 1;

/// Context attached to failures caused by the caller's files or payload
#[derive(Debug)]
pub struct InvalidRequest(String);

impl InvalidRequest {
    fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl fmt::Display for InvalidRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Exit code for a failure that produced no reply.
///
/// Failures tagged with [`InvalidRequest`] are the caller's to fix;
/// anything else is unexpected.
pub fn failure_exit_code(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<InvalidRequest>().is_some() {
        EXIT_CLIENT_ERROR
    } else {
        EXIT_SERVER_ERROR
    }
}

/// Outcome of one request: a serialized payload and how it ended
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub kind: Option<ErrorKind>,
    pub body: String,
}

impl Reply {
    fn ok(body: String) -> Self {
        Self { kind: None, body }
    }

    fn error(err: &ModelError, pretty: bool) -> Result<Self> {
        let (kind, payload) = ErrorResponse::from_error(err);
        Ok(Self {
            kind: Some(kind),
            body: to_json(&payload, pretty)?,
        })
    }

    /// Process exit code for this reply
    pub fn exit_code(&self) -> u8 {
        match self.kind {
            None => 0,
            Some(ErrorKind::Client) => EXIT_CLIENT_ERROR,
            Some(ErrorKind::Server) => EXIT_SERVER_ERROR,
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind.is_none()
    }
}

/// Load a configuration file, or the defaults when no path is given
pub fn load_config(path: Option<&Path>) -> Result<AnalysisConfig> {
    let config = match path {
        Some(path) => {
            let text = fs::read_to_string(path).with_context(|| {
                InvalidRequest::new(format!("Failed to read config file {}", path.display()))
            })?;
            parse_config(&text)
                .with_context(|| format!("Invalid config file {}", path.display()))?
        }
        None => AnalysisConfig::default(),
    };

    debug!("analysis config: {config:?}");
    Ok(config)
}

/// Parse and validate a TOML configuration
pub fn parse_config(text: &str) -> Result<AnalysisConfig> {
    let config: AnalysisConfig =
        toml::from_str(text).context(InvalidRequest::new("Failed to parse TOML"))?;
    config
        .validate()
        .context(InvalidRequest::new("Invalid analysis settings"))?;
    Ok(config)
}

/// Read a request payload from a file, or from stdin when the path is `-`
pub fn read_input(path: &Path) -> Result<MarshallInput> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context(InvalidRequest::new("Failed to read request from stdin"))?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| {
            InvalidRequest::new(format!("Failed to read request file {}", path.display()))
        })?
    };

    parse_input(&text)
}

/// Parse a JSON request payload
pub fn parse_input(text: &str) -> Result<MarshallInput> {
    serde_json::from_str(text).context(InvalidRequest::new("Malformed request payload"))
}

/// Run the full analysis for a request
pub fn handle_analyze(
    input: &MarshallInput,
    config: &AnalysisConfig,
    pretty: bool,
) -> Result<Reply> {
    match input.analyze(config) {
        Ok(output) => {
            info!(
                "optimum asphalt content {} % for {} % air voids",
                output.optimization_results.optimum_asphalt_content, input.target_voids
            );
            Ok(Reply::ok(to_json(&output, pretty)?))
        }
        Err(err) => Reply::error(&err, pretty),
    }
}

/// Human-readable summary of a request, or the error message
pub fn handle_summary(input: &MarshallInput, config: &AnalysisConfig) -> Result<Reply> {
    match input.analyze(config) {
        Ok(output) => Ok(Reply::ok(output.to_string())),
        Err(err) => Reply::error(&err, false),
    }
}

/// Predict every property at a chosen asphalt content
pub fn handle_at(
    input: &MarshallInput,
    config: &AnalysisConfig,
    asphalt_content: f64,
    pretty: bool,
) -> Result<Reply> {
    let predicted = input.to_dataset().and_then(|dataset| {
        Optimizer::new()
            .config(config.clone())
            .properties_at(&dataset, asphalt_content)
    });

    match predicted {
        Ok(values) => {
            let mut body = serde_json::Map::new();
            body.insert("asphalt_content".to_string(), asphalt_content.into());
            for (property, value) in values {
                body.insert(property.id().to_string(), value.into());
            }
            Ok(Reply::ok(to_json(&body, pretty)?))
        }
        Err(err) => Reply::error(&err, pretty),
    }
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    text.context("Failed to serialize response")
}
