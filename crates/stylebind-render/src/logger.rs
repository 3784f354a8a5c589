//! The reporting collaborator.
//!
//! Every caught failure in the pipeline goes through a [`Logger`]. The
//! default [`FacadeLogger`] forwards to the `log` crate so hosts pick the
//! backend; [`NullLogger`] is for hosts that opt out entirely.

use std::error::Error;

/// Message prefix identifying this pipeline in shared host logs.
const LOG_PREFIX: &str = "[stylebind]";

/// Reporting seam consumed by the whole pipeline.
///
/// `error` receives every caught failure; `log` carries informational
/// messages (configuration echo, fallback notices).
pub trait Logger: Send + Sync {
    /// Reports an informational message.
    fn log(&self, message: &str);

    /// Reports a caught failure.
    fn error(&self, error: &dyn Error);
}

/// Forwards to the `log` crate's facade macros.
#[derive(Debug, Clone, Copy, Default)]
pub struct FacadeLogger;

impl Logger for FacadeLogger {
    fn log(&self, message: &str) {
        log::info!("{} {}", LOG_PREFIX, message);
    }

    fn error(&self, error: &dyn Error) {
        log::error!("{} failed: {}", LOG_PREFIX, error);
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn log(&self, _message: &str) {}

    fn error(&self, _error: &dyn Error) {}
}
