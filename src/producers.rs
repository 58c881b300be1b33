//! Ready-made producers.
//!
//! The chain does not care where a value comes from. These adapters cover the
//! usual sources (a fixed value, an environment variable, a key in a TOML
//! file) plus the stand-ins tests reach for.

use std::env::{self, VarError};
use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::trace;

use crate::error::ProducerFailure;

/// Always returns `value`.
pub fn fixed(value: impl Into<String>) -> impl Fn() -> Result<String, ProducerFailure> {
    let value = value.into();
    move || Ok(value.clone())
}

/// Always returns an empty string, so the chain moves on.
pub fn empty() -> impl Fn() -> Result<String, ProducerFailure> {
    || Ok(String::new())
}

/// Always fails with `message`.
pub fn failing(message: impl Into<String>) -> impl Fn() -> Result<String, ProducerFailure> {
    let message = message.into();
    move || Err(ProducerFailure::new(message.clone()))
}

/// Reads an environment variable at resolve time.
///
/// An unset variable counts as empty. A variable holding invalid unicode is
/// a failure.
pub fn from_env(var: impl Into<String>) -> impl Fn() -> Result<String, ProducerFailure> {
    let var = var.into();
    move || match env::var(&var) {
        Ok(value) => Ok(value),
        Err(VarError::NotPresent) => {
            trace!(var = %var, "environment variable not set");
            Ok(String::new())
        }
        Err(err @ VarError::NotUnicode(_)) => Err(ProducerFailure::with_source(
            format!("environment variable {var} is not valid unicode"),
            err,
        )),
    }
}

/// Looks up a dotted key such as `endpoint.hostname` in a TOML file.
///
/// A missing file or missing key counts as empty. Read errors and malformed
/// TOML fail. Integers, floats and booleans are rendered as strings (floats
/// keep their decimal point); tables and arrays fail.
pub fn from_toml_file(
    path: impl Into<PathBuf>,
    key: impl Into<String>,
) -> impl Fn() -> Result<String, ProducerFailure> {
    let path = path.into();
    let key = key.into();

    move || {
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                trace!(path = %path.display(), "config file not found");
                return Ok(String::new());
            }
            Err(err) => {
                return Err(ProducerFailure::with_source(
                    format!("failed to read {}", path.display()),
                    err,
                ))
            }
        };

        let document: toml::Table = toml::from_str(&content).map_err(|err| {
            ProducerFailure::with_source(format!("failed to parse {}", path.display()), err)
        })?;

        lookup(&document, &key)
    }
}

fn lookup(document: &toml::Table, key: &str) -> Result<String, ProducerFailure> {
    let mut segments = key.split('.');
    let mut current = match segments.next().and_then(|first| document.get(first)) {
        Some(value) => value,
        None => return Ok(String::new()),
    };

    for segment in segments {
        match current.get(segment) {
            Some(value) => current = value,
            None => return Ok(String::new()),
        }
    }

    match current {
        toml::Value::String(s) => Ok(s.clone()),
        toml::Value::Integer(i) => Ok(i.to_string()),
        toml::Value::Float(f) => Ok(render_float(*f)),
        toml::Value::Boolean(b) => Ok(b.to_string()),
        toml::Value::Datetime(d) => Ok(d.to_string()),
        toml::Value::Array(_) | toml::Value::Table(_) => Err(ProducerFailure::new(format!(
            "key {key} does not hold a scalar value"
        ))),
    }
}

// Keeps the text close to what was written in the file: `1.0` stays `1.0`,
// `nan` and `inf` keep their TOML spelling.
fn render_float(f: f64) -> String {
    if f.is_nan() {
        "nan".to_string()
    } else if f == f64::INFINITY {
        "inf".to_string()
    } else if f == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{f:?}")
    }
}
