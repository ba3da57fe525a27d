//! # Core hook trait
//!
//! `Hook` is the contract for a single registrable handler. Hooks are
//! stored behind [`HookRef`] (a shared `Arc<dyn Hook>`), grouped per event
//! by the [`Hooks`](crate::Hooks) registry, and driven in registration
//! order by a [`Runner`](crate::Runner).
//!
//! A hook settles in one of three ways:
//! - `Ok(None)` — done, nothing to undo;
//! - `Ok(Some(cleanup))` — done, and the returned [`Cleanup`] action must
//!   run during the reverse teardown pass;
//! - `Err(err)` — failed (or vetoed); the runner stops and hands the error
//!   to the caller unchanged.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;

use crate::error::HookError;
use crate::handlers::cleanup::Cleanup;

/// What a hook invocation settles to: an optional cleanup action, or the
/// handler's own failure.
pub type HookResult<C> = Result<Option<Cleanup<C>>, HookError>;

/// Boxed future resolving to a [`HookResult`].
///
/// Used by responders and executor strategies, which hand futures across
/// object-safe boundaries.
pub type BoxHookFuture<C> = BoxFuture<'static, HookResult<C>>;

/// Contract for a single hook handler.
///
/// `A` is the argument type every handler of the owning registry receives;
/// `C` is the argument type cleanup actions receive later. Each invocation
/// gets its own clone of the arguments.
///
/// Prefer [`HookFn`](crate::HookFn) for closure-backed hooks; implement
/// this trait directly when the handler carries its own state or
/// dependencies.
#[async_trait]
pub trait Hook<A, C>: Send + Sync {
    /// Stable identity of this hook.
    ///
    /// Registration set-semantics and [`Runner::without`](crate::Runner::without)
    /// filtering key on this name.
    fn name(&self) -> &str;

    /// Handle one firing of the event this hook was registered under.
    async fn call(&self, args: A) -> HookResult<C>;
}

/// Shared handle to a hook (`Arc<dyn Hook>`).
pub type HookRef<A, C> = Arc<dyn Hook<A, C>>;
