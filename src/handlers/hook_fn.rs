//! # Function-backed hook (`HookFn`)
//!
//! [`HookFn`] wraps a closure `F: Fn(A) -> Fut`, producing a fresh future
//! per invocation. This avoids shared mutable state: captured values live
//! in the closure, per-invocation state lives in the future it builds.
//!
//! ## Example
//! ```rust
//! use hookset::{HookFn, HookRef};
//!
//! let h: HookRef<String, ()> = HookFn::arc("normalize_email", |email: String| async move {
//!     let _lowered = email.to_lowercase();
//!     // persist, validate, ...
//!     Ok(None)
//! });
//!
//! assert_eq!(h.name(), "normalize_email");
//! ```

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::handlers::hook::{Hook, HookResult};

/// Function-backed hook implementation.
///
/// Wraps a closure that *creates* a new future per invocation.
#[derive(Debug)]
pub struct HookFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> HookFn<F> {
    /// Creates a new function-backed hook.
    ///
    /// Prefer [`HookFn::arc`] when you immediately need a
    /// [`HookRef`](crate::HookRef).
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self { name: name.into(), f }
    }

    /// Creates the hook and returns it as a shared handle (`Arc<Self>`).
    ///
    /// The result coerces to [`HookRef`](crate::HookRef) at the
    /// registration site.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

#[async_trait]
impl<A, C, F, Fut> Hook<A, C> for HookFn<F>
where
    A: Send + 'static,
    C: 'static,
    F: Fn(A) -> Fut + Send + Sync + 'static, // Fn, not FnMut
    Fut: Future<Output = HookResult<C>> + Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn call(&self, args: A) -> HookResult<C> {
        (self.f)(args).await
    }
}
