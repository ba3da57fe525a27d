//! # Basic Hooks Example
//!
//! Registers two handlers on a `"saving"` event, fires them in
//! registration order, and releases their cleanup actions in reverse.
//!
//! ## Run
//! ```bash
//! cargo run --example basic
//! ```

use hookset::{cleanup, HookFn, HookRef, Hooks};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), hookset::HookError> {
    let mut hooks: Hooks<String, ()> = Hooks::new();

    let open_tx: HookRef<String, ()> = HookFn::arc("open_tx", |entity: String| async move {
        println!("[open_tx] begin transaction for {entity}");
        Ok(cleanup(move |_: ()| async move {
            println!("[open_tx] transaction closed for {entity}");
            Ok(())
        }))
    });

    let audit: HookRef<String, ()> = HookFn::arc("audit", |entity: String| async move {
        println!("[audit] recording save of {entity}");
        Ok(cleanup(move |_: ()| async move {
            println!("[audit] trail flushed for {entity}");
            Ok(())
        }))
    });

    hooks.add("saving", open_tx).add("saving", audit);

    let mut runner = hooks.runner("saving");
    runner.run("user#42".to_string()).await?;

    println!("... host operation happens here ...");

    // Cleanup runs audit's action first, then open_tx's (LIFO).
    runner.cleanup(()).await?;
    Ok(())
}
