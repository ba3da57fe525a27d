//! # Logged Execution Example
//!
//! Installs the stdout logging executors on a runner to watch every hook
//! and provider invocation. Demo/reference only.
//!
//! ## Run
//! ```bash
//! cargo run --example logged --features logging
//! ```

use hookset::{cleanup, log_executor, log_provider_executor, responder, HookFn, HookRef, Hooks};
use hookset::{Provide, Responder};

struct Versioning;

impl Provide<(), ()> for Versioning {
    fn name(&self) -> &str {
        "Versioning"
    }

    fn respond_to(&self, event: &str) -> Option<Responder<(), ()>> {
        match event {
            "save" => responder(|_: ()| async move { Ok(None) }),
            _ => None,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), hookset::HookError> {
    let mut hooks: Hooks<(), ()> = Hooks::new();

    let snapshot: HookRef<(), ()> = HookFn::arc("snapshot", |_: ()| async move {
        Ok(cleanup(move |_: ()| async move { Ok(()) }))
    });
    hooks.add("save", snapshot);
    hooks.provider(std::sync::Arc::new(Versioning));

    let mut runner = hooks
        .runner("save")
        .executor(log_executor())
        .provider_executor(log_provider_executor());

    runner.run(()).await?;
    runner.cleanup(()).await?;
    Ok(())
}
