//! # Custom Executor Example
//!
//! Swaps the runner's invocation strategy to time every hook without
//! touching the hooks themselves. The same seam serves argument
//! adaptation and dependency injection.
//!
//! ## Run
//! ```bash
//! cargo run --example custom_executor
//! ```

use std::time::Instant;

use hookset::{HookFn, HookRef, Hooks};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), hookset::HookError> {
    let mut hooks: Hooks<(), ()> = Hooks::new();

    let fast: HookRef<(), ()> = HookFn::arc("fast", |_: ()| async move { Ok(None) });
    let slow: HookRef<(), ()> = HookFn::arc("slow", |_: ()| async move {
        tokio::time::sleep(std::time::Duration::from_millis(25)).await;
        Ok(None)
    });
    hooks.add("deploy", fast).add("deploy", slow);

    hooks
        .runner("deploy")
        .executor(|hook, args| {
            Box::pin(async move {
                let started = Instant::now();
                let result = hook.call(args).await;
                println!("[timing] name={} elapsed={:?}", hook.name(), started.elapsed());
                result
            })
        })
        .run(())
        .await?;
    Ok(())
}
