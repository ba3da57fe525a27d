//! # Cleanup actions
//!
//! A hook may schedule a one-shot teardown action by returning it from its
//! body. The runner appends scheduled actions in execution order and
//! [`Runner::cleanup`](crate::Runner::cleanup) drains them strictly
//! last-in, first-out, so paired setup/teardown logic nests correctly.
//!
//! Cleanup actions carry no identity and are stored in an ordered `Vec`,
//! never a set: two hooks may schedule behaviorally-equal actions and both
//! must run.

use std::future::Future;

use futures::future::BoxFuture;

use crate::error::HookError;

/// Boxed future a cleanup action resolves to.
pub type BoxCleanupFuture = BoxFuture<'static, Result<(), HookError>>;

/// One-shot teardown action scheduled by a hook.
///
/// Invoked at most once, with the cleanup-time argument list `C` (typically
/// different from the hook-time arguments).
pub type Cleanup<C> = Box<dyn FnOnce(C) -> BoxCleanupFuture + Send>;

/// Wraps an async closure into a scheduled [`Cleanup`] action.
///
/// Returns `Option` so a hook body reads as `Ok(cleanup(..))` against
/// [`HookResult`](crate::HookResult); return `Ok(None)` when there is
/// nothing to undo.
///
/// ## Example
/// ```rust
/// use hookset::{cleanup, HookFn, HookRef};
///
/// let h: HookRef<(), String> = HookFn::arc("acquire_lease", |_: ()| async move {
///     // acquire...
///     Ok(cleanup(move |owner: String| async move {
///         // ...release on behalf of `owner`
///         let _ = owner;
///         Ok(())
///     }))
/// });
/// # let _ = h;
/// ```
pub fn cleanup<C, F, Fut>(f: F) -> Option<Cleanup<C>>
where
    C: 'static,
    F: FnOnce(C) -> Fut + Send + 'static,
    Fut: Future<Output = Result<(), HookError>> + Send + 'static,
{
    Some(Box::new(move |args: C| -> BoxCleanupFuture {
        Box::pin(f(args))
    }))
}
