//! # Hook providers
//!
//! A provider answers for *many* events: it is registered once, globally,
//! and at event time the runner asks it for a responder for the current
//! event. Returning `None` means "no handler for this event" and the
//! provider is silently passed over.
//!
//! ## Fresh state per firing
//! `respond_to` is invoked once per firing and must build its per-firing
//! state inside that call (or inside the returned closure). The returned
//! [`Responder`] is consumed by the single firing it was built for, so a
//! provider cannot leak state between two firings of the same event or
//! across events: the factory call is the isolation boundary.
//!
//! ## Filtering identity
//! For [`Runner::without`](crate::Runner::without), a provider's handler
//! for event `save` is addressed as `"{name}.save"`, e.g.
//! `"LifecycleManagement.save"`.

use std::future::Future;
use std::sync::Arc;

use crate::handlers::hook::{BoxHookFuture, HookResult};

/// One-shot handler built by a provider for a single firing.
pub type Responder<A, C> = Box<dyn FnOnce(A) -> BoxHookFuture<C> + Send>;

/// Contract for a multi-event hook provider.
pub trait Provide<A, C>: Send + Sync {
    /// Stable identity of this provider.
    ///
    /// Combined with the event name (`"{name}.{event}"`) for exclusion
    /// filtering.
    fn name(&self) -> &str;

    /// Builds a fresh responder for one firing of `event`, or `None` if
    /// this provider has no handler for it.
    fn respond_to(&self, event: &str) -> Option<Responder<A, C>>;
}

/// Shared handle to a provider (`Arc<dyn Provide>`).
pub type ProviderRef<A, C> = Arc<dyn Provide<A, C>>;

/// Wraps an async closure into a [`Responder`] for one firing.
///
/// Returns `Option` so a `respond_to` arm reads as `responder(..)` against
/// `Option<Responder>`.
///
/// ## Example
/// ```rust
/// use hookset::{responder, Provide, Responder};
///
/// struct LifecycleManagement;
///
/// impl Provide<u32, ()> for LifecycleManagement {
///     fn name(&self) -> &str {
///         "LifecycleManagement"
///     }
///
///     fn respond_to(&self, event: &str) -> Option<Responder<u32, ()>> {
///         match event {
///             "save" => responder(|user_id: u32| async move {
///                 let _ = user_id;
///                 Ok(None)
///             }),
///             _ => None,
///         }
///     }
/// }
/// ```
pub fn responder<A, C, F, Fut>(f: F) -> Option<Responder<A, C>>
where
    A: Send + 'static,
    C: 'static,
    F: FnOnce(A) -> Fut + Send + 'static,
    Fut: Future<Output = HookResult<C>> + Send + 'static,
{
    Some(Box::new(move |args: A| -> BoxHookFuture<C> {
        Box::pin(f(args))
    }))
}
