//! Error types used by the hook registry and the runner.
//!
//! This module defines two main error enums:
//!
//! - [`RegistryError`] — configuration errors raised at registration time.
//! - [`HookError`] — failures raised by individual hook handlers, provider
//!   responders, or cleanup actions.
//!
//! Both types provide helper methods (`as_label`, `as_message`) for
//! logging/metrics. The runner never wraps or reclassifies a [`HookError`]:
//! whatever a failing handler returned is what the `run`/`cleanup` caller
//! receives. Misuse of the runner state machine (calling `run` twice, or
//! `cleanup` before `run`) is not an error at all; those calls are silent
//! no-ops.

use thiserror::Error;

/// # Errors produced at registration time.
///
/// These represent misconfiguration of the registry itself, such as
/// registering a string-based hook reference on a registry that has no
/// resolver. They surface synchronously from the registration call, never
/// at execution time.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RegistryError {
    /// A string reference was registered but no resolver is configured.
    #[error("a resolver is required to register string-based hook references (got {reference:?})")]
    ResolverRequired {
        /// The reference that could not be resolved.
        reference: String,
    },

    /// The configured resolver does not know the given reference.
    #[error("unknown hook reference: {reference:?}")]
    UnknownReference {
        /// The reference the resolver rejected.
        reference: String,
    },
}

impl RegistryError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use hookset::RegistryError;
    ///
    /// let err = RegistryError::ResolverRequired { reference: "App/Hooks.save".into() };
    /// assert_eq!(err.as_label(), "resolver_required");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RegistryError::ResolverRequired { .. } => "resolver_required",
            RegistryError::UnknownReference { .. } => "unknown_reference",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            RegistryError::ResolverRequired { reference } => {
                format!("no resolver configured; cannot resolve {reference:?}")
            }
            RegistryError::UnknownReference { reference } => {
                format!("resolver has no entry for {reference:?}")
            }
        }
    }
}

/// # Errors produced by hook execution.
///
/// These are constructed by handler code, not by the engine. The runner
/// stops iterating at the first failure and hands the value back to the
/// caller unchanged, keeping any cleanup actions collected from earlier
/// handlers available for [`Runner::cleanup`](crate::Runner::cleanup).
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum HookError {
    /// Hook execution failed.
    #[error("hook execution failed: {error}")]
    Failed {
        /// The underlying error message.
        error: String,
    },

    /// Hook vetoed the surrounding operation.
    ///
    /// Lifecycle hooks exist to observe *or veto* an operation; a veto is a
    /// deliberate refusal rather than a malfunction.
    #[error("operation vetoed: {reason}")]
    Vetoed {
        /// Why the hook refused the operation.
        reason: String,
    },
}

impl HookError {
    /// Creates a [`HookError::Failed`] from any message.
    pub fn failed(error: impl Into<String>) -> Self {
        HookError::Failed { error: error.into() }
    }

    /// Creates a [`HookError::Vetoed`] from any reason.
    pub fn vetoed(reason: impl Into<String>) -> Self {
        HookError::Vetoed { reason: reason.into() }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use hookset::HookError;
    ///
    /// let err = HookError::failed("boom");
    /// assert_eq!(err.as_label(), "hook_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            HookError::Failed { .. } => "hook_failed",
            HookError::Vetoed { .. } => "hook_vetoed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            HookError::Failed { error } => format!("error: {error}"),
            HookError::Vetoed { reason } => format!("vetoed: {reason}"),
        }
    }

    /// Indicates whether the failure is a deliberate veto.
    ///
    /// # Example
    /// ```
    /// use hookset::HookError;
    ///
    /// assert!(HookError::vetoed("stale revision").is_veto());
    /// assert!(!HookError::failed("io error").is_veto());
    /// ```
    pub fn is_veto(&self) -> bool {
        matches!(self, HookError::Vetoed { .. })
    }
}
