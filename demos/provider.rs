//! # Hook Provider Example
//!
//! A single provider answering for several events. The registry asks it
//! for a fresh responder per firing, so per-firing state never leaks
//! between runs.
//!
//! ## Run
//! ```bash
//! cargo run --example provider
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};

use hookset::{responder, HookFn, HookRef, Hooks, Provide, Responder};

/// Counts firings and greets for `"create"` and `"save"`, stays silent for
/// anything else.
struct LifecycleManagement {
    firings: AtomicUsize,
}

impl Provide<String, ()> for LifecycleManagement {
    fn name(&self) -> &str {
        "LifecycleManagement"
    }

    fn respond_to(&self, event: &str) -> Option<Responder<String, ()>> {
        if event != "create" && event != "save" {
            return None;
        }
        let firing = self.firings.fetch_add(1, Ordering::SeqCst) + 1;
        let event = event.to_string();
        responder(move |entity: String| async move {
            println!("[LifecycleManagement] {event} of {entity} (firing #{firing})");
            Ok(None)
        })
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), hookset::HookError> {
    let mut hooks: Hooks<String, ()> = Hooks::new();

    let validate: HookRef<String, ()> = HookFn::arc("validate", |entity: String| async move {
        println!("[validate] {entity} looks fine");
        Ok(None)
    });
    hooks.add("save", validate);
    hooks.provider(std::sync::Arc::new(LifecycleManagement {
        firings: AtomicUsize::new(0),
    }));

    // Plain handlers first, then providers.
    hooks.runner("save").run("user#1".to_string()).await?;

    // The provider answers "create" too, without extra registration.
    hooks.runner("create").run("user#2".to_string()).await?;

    // And stays silent for events it has no responder for.
    hooks.runner("delete").run("user#3".to_string()).await?;
    Ok(())
}
