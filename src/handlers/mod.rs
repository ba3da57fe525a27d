//! # Registrable units: hooks, providers, and cleanup actions.
//!
//! This module defines the type-level agreement for everything the registry
//! accepts:
//!
//! - [`Hook`] — a named async handler for one event; implement it directly
//!   or wrap a closure with [`HookFn`].
//! - [`Provide`] — a factory answering for *many* events: asked per firing
//!   for a fresh [`Responder`] so no state leaks between firings.
//! - [`Cleanup`] — a one-shot action a handler may schedule; the runner
//!   collects these in execution order and releases them in reverse.
//!
//! ## Contract
//! - A hook's identity is the string name given at registration time, not
//!   the callable itself. Registering two hooks with the same name on the
//!   same event keeps the first.
//! - Cleanup actions have no identity and are never deduplicated: two
//!   hooks may legitimately schedule behaviorally-equal actions and both
//!   must run.
//!
//! ## Example (skeleton)
//! ```rust
//! use hookset::{cleanup, HookFn, HookRef};
//!
//! let audit: HookRef<u32, ()> = HookFn::arc("audit", |_user_id: u32| async move {
//!     // observe the operation...
//!     Ok(cleanup(move |_: ()| async move {
//!         // ...and undo its side effects later
//!         Ok(())
//!     }))
//! });
//! assert_eq!(audit.name(), "audit");
//! ```

mod cleanup;
mod hook;
mod hook_fn;
mod provider;

pub use cleanup::{cleanup, BoxCleanupFuture, Cleanup};
pub use hook::{BoxHookFuture, Hook, HookRef, HookResult};
pub use hook_fn::HookFn;
pub use provider::{responder, Provide, ProviderRef, Responder};
