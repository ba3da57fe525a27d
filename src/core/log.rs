//! # Simple logging executors for debugging and demos.
//!
//! Wraps the direct execution strategies with one stdout line per
//! invocation and outcome. Primarily useful for development, debugging,
//! and the demo programs.
//!
//! ## Output format
//! ```text
//! [hook] run name=hash_password
//! [hook] done name=hash_password cleanup=scheduled
//! [hook] failed name=hash_password err=error: boom
//! [provider] run name=Lifecycle event=save
//! [provider] pass name=Lifecycle event=create
//! ```
//!
//! Enabled via the `logging` feature. Not intended for production use -
//! write a custom executor against your own logging stack instead.

use std::sync::Arc;

use crate::core::executor::{HookExecutor, ProviderExecutor};
use crate::handlers::{BoxHookFuture, HookRef, ProviderRef};

/// Hook strategy that prints each invocation and its outcome to stdout.
///
/// Install with [`Runner::executor`](crate::Runner::executor).
pub fn log_executor<A, C>() -> HookExecutor<A, C>
where
    A: Send + 'static,
    C: 'static,
{
    Box::new(|hook: HookRef<A, C>, args: A| -> BoxHookFuture<C> {
        Box::pin(async move {
            println!("[hook] run name={}", hook.name());
            let result = hook.call(args).await;
            match &result {
                Ok(Some(_)) => println!("[hook] done name={} cleanup=scheduled", hook.name()),
                Ok(None) => println!("[hook] done name={}", hook.name()),
                Err(err) => println!("[hook] failed name={} err={}", hook.name(), err.as_message()),
            }
            result
        })
    })
}

/// Provider strategy that prints dispatch decisions and outcomes to
/// stdout.
///
/// Install with
/// [`Runner::provider_executor`](crate::Runner::provider_executor).
pub fn log_provider_executor<A, C>() -> ProviderExecutor<A, C>
where
    A: Send + 'static,
    C: 'static,
{
    Box::new(
        |provider: ProviderRef<A, C>, event: Arc<str>, args: A| -> BoxHookFuture<C> {
            Box::pin(async move {
                let respond = match provider.respond_to(&event) {
                    Some(respond) => respond,
                    None => {
                        println!("[provider] pass name={} event={event}", provider.name());
                        return Ok(None);
                    }
                };

                println!("[provider] run name={} event={event}", provider.name());
                let result = respond(args).await;
                if let Err(err) = &result {
                    println!(
                        "[provider] failed name={} event={event} err={}",
                        provider.name(),
                        err.as_message()
                    );
                }
                result
            })
        },
    )
}
