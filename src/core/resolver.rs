//! # Resolver collaborator for string-based hook references.
//!
//! Host frameworks sometimes register hooks as string references
//! (`"App/Hooks.save"`) that an IoC layer later turns into callables. The
//! registry consumes that mechanism through [`Resolve`]; it never provides
//! one of its own, and a registry used only with pre-resolved hooks never
//! needs one.
//!
//! Resolution happens at registration time
//! ([`Hooks::add_ref`](crate::Hooks::add_ref)), so a missing or failing
//! resolver surfaces as a [`RegistryError`](crate::RegistryError) from the
//! registration call, never mid-run.

use crate::error::RegistryError;
use crate::handlers::HookRef;

/// Contract for turning a string reference into a ready-to-run hook.
///
/// Implementations are expected to give the resolved hook a stable name
/// matching the reference, so later `has`/`remove` calls by that name
/// behave as callers expect.
pub trait Resolve<A, C>: Send + Sync {
    /// Resolves `reference` to a hook, or fails with
    /// [`RegistryError::UnknownReference`].
    fn resolve(&self, reference: &str) -> Result<HookRef<A, C>, RegistryError>;
}
