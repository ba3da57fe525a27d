//! # Pluggable execution strategies.
//!
//! The runner never invokes a hook or a provider directly: it goes through
//! one of two strategy slots, each a shared closure with a
//! direct-invocation default. A host framework swaps these in (via
//! [`Runner::executor`](crate::Runner::executor) and
//! [`Runner::provider_executor`](crate::Runner::provider_executor)) to
//! intercept calls for instrumentation, argument adaptation, or dependency
//! injection without touching the runner itself.
//!
//! ## Rules
//! - A strategy is a boxed closure receiving an owned handle
//!   (`HookRef`/`ProviderRef`) plus a clone of the firing arguments, and
//!   returning the boxed future the runner awaits.
//! - The provider strategy also receives the event name; the default asks
//!   `respond_to(event)` and settles to `Ok(None)` when the provider has
//!   no handler for the event.
//! - Strategies run inside the runner's sequential loop: returning early,
//!   retrying, or timing out an invocation is entirely up to the strategy.

use std::sync::Arc;

use crate::handlers::{BoxHookFuture, HookRef, ProviderRef};

/// Strategy invoked for every hook in a run.
pub type HookExecutor<A, C> =
    Box<dyn Fn(HookRef<A, C>, A) -> BoxHookFuture<C> + Send + Sync>;

/// Strategy invoked for every provider in a run.
pub type ProviderExecutor<A, C> =
    Box<dyn Fn(ProviderRef<A, C>, Arc<str>, A) -> BoxHookFuture<C> + Send + Sync>;

/// Default hook strategy: call the handler with the data.
pub(crate) fn direct_hook_executor<A, C>() -> HookExecutor<A, C>
where
    A: Send + 'static,
    C: 'static,
{
    Box::new(|hook: HookRef<A, C>, args: A| -> BoxHookFuture<C> {
        Box::pin(async move { hook.call(args).await })
    })
}

/// Default provider strategy: build a fresh responder for the event and
/// run it; settle to `Ok(None)` if the provider does not answer for the
/// event.
pub(crate) fn direct_provider_executor<A, C>() -> ProviderExecutor<A, C>
where
    A: Send + 'static,
    C: 'static,
{
    Box::new(
        |provider: ProviderRef<A, C>, event: Arc<str>, args: A| -> BoxHookFuture<C> {
            match provider.respond_to(&event) {
                Some(respond) => respond(args),
                None => Box::pin(async { Ok(None) }),
            }
        },
    )
}
