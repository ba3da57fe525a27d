//! # hookset
//!
//! **Hookset** is a lifecycle-hook registry and executor for async Rust.
//!
//! Callers register named handlers against named events at setup time,
//! then drive all handlers for an event in registration order; each
//! handler may schedule a cleanup action, and collected actions run later
//! in strict reverse order, even when a handler in between failed. The
//! crate is designed as a before/after extension point for larger
//! frameworks (entity lifecycle events, request pipelines, job runners).
//!
//! ## Architecture
//! ### Overview
//! ```text
//!  setup time                              event time
//! ┌────────────────────────────┐   ┌───────────────────────────────────────────┐
//! │  Hooks (registry)          │   │  Runner (one-shot, per firing)            │
//! │  - add / remove / clear    │   │  - snapshot of hooks + providers          │
//! │  - provider(..)            │──►│  - run(args): hook₁ → hook₂ → … → hookₙ   │
//! │  - merge(..)               │   │              then providers, in order     │
//! │  - runner(event) ──────────┼──►│  - collects returned cleanup actions      │
//! │    (snapshots collections) │   │  - cleanup(args): actionₙ → … → action₁   │
//! └────────────────────────────┘   └───────────────────────────────────────────┘
//! ```
//!
//! ### Runner lifecycle
//! ```text
//! Idle ── run()/run_reverse() ──► CleanupPending ── cleanup() ──► CleanupInitiated
//!                                                                       │
//!   repeated run(), or cleanup() in any other state: silent no-op       ▼
//!                                                                CleanupCompleted
//! ```
//!
//! ## Guarantees
//! | Guarantee           | Description                                                             |
//! |---------------------|-------------------------------------------------------------------------|
//! | **Ordering**        | Forward runs preserve registration order; providers always run last.    |
//! | **LIFO teardown**   | Cleanup actions run in strict reverse of handler completion order.      |
//! | **At-most-once**    | `run` and `cleanup` are idempotent per runner; repeats are no-ops.      |
//! | **Failure isolation** | A failing handler stops the run, propagates unchanged, and never discards cleanups already collected. |
//! | **Snapshot isolation** | A runner never observes registry mutation that happened after its creation. |
//! | **Fresh provider state** | Providers build a fresh responder per firing; no state leaks across firings. |
//!
//! ## Features
//! | Area             | Description                                                  | Key types / traits            |
//! |------------------|--------------------------------------------------------------|-------------------------------|
//! | **Registry**     | Per-event handler sets, global providers, merging.           | [`Hooks`]                     |
//! | **Execution**    | One-shot forward/reverse runs with LIFO cleanup.             | [`Runner`]                    |
//! | **Handlers**     | Closure-backed or hand-implemented named hooks.              | [`Hook`], [`HookFn`]          |
//! | **Providers**    | One registration answering many events, fresh per firing.    | [`Provide`], [`Responder`]    |
//! | **Strategies**   | Swappable invocation indirection for instrumentation/DI.     | [`HookExecutor`], [`ProviderExecutor`] |
//! | **Resolution**   | Optional string-reference registration via a host resolver.  | [`Resolve`]                   |
//! | **Errors**       | Typed registration and execution failures.                   | [`RegistryError`], [`HookError`] |
//!
//! ## Optional features
//! - `logging`: exports stdout logging executors _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use hookset::{cleanup, HookFn, HookRef, Hooks};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), hookset::HookError> {
//!     let mut hooks: Hooks<u32, ()> = Hooks::new();
//!
//!     let audit: HookRef<u32, ()> = HookFn::arc("audit", |user_id: u32| async move {
//!         println!("auditing save of user {user_id}");
//!         Ok(cleanup(move |_: ()| async move {
//!             println!("audit trail for user {user_id} closed");
//!             Ok(())
//!         }))
//!     });
//!     hooks.add("saving", audit);
//!
//!     let mut runner = hooks.runner("saving");
//!     runner.run(42).await?;
//!     // ... perform the host operation here ...
//!     runner.cleanup(()).await?;
//!     Ok(())
//! }
//! ```

mod core;
mod error;
mod handlers;

// ---- Public re-exports ----

pub use self::core::{HookExecutor, Hooks, ProviderExecutor, Resolve, Runner};
pub use error::{HookError, RegistryError};
pub use handlers::{
    cleanup, responder, BoxCleanupFuture, BoxHookFuture, Cleanup, Hook, HookFn, HookRef,
    HookResult, Provide, ProviderRef, Responder,
};

// Optional: expose stdout logging executors (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use self::core::{log_executor, log_provider_executor};
