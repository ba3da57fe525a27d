//! # Runner - one-shot executor for a single event firing.
//!
//! A [`Runner`] consumes the handler/provider snapshot taken by
//! [`Hooks::runner`](crate::Hooks::runner) and drives exactly one
//! run/cleanup pair. Runners are never reused across firings; create a
//! fresh one per occasion and discard it afterwards.
//!
//! ## State machine
//! ```text
//!                 run() / run_reverse()           cleanup()
//!   Idle ──────────────────────────► CleanupPending ─────────► CleanupInitiated
//!     │  (state advances before any                                  │
//!     │   handler executes, so a failing                             │ all actions done
//!     │   run still lands here)                                      ▼
//!     │                                                      CleanupCompleted
//!     └── run() again, or cleanup() outside CleanupPending: silent no-op
//! ```
//!
//! ## Rules
//! - **At most one pass**: `run` in any non-idle state is a no-op, as is
//!   `cleanup` in any state other than `CleanupPending`. Both are safe to
//!   call from multiple teardown paths.
//! - **Strict sequencing**: handler *N+1* never starts before handler
//!   *N*'s future has settled. There is no parallel fan-out and no lock.
//! - **Failure isolation**: a failing handler stops the loop and its error
//!   propagates unchanged, but cleanup actions collected from the handlers
//!   that already succeeded stay available for `cleanup`.
//! - **LIFO teardown**: cleanup actions run in strict reverse of the order
//!   their producing handlers completed, independent of run direction.
//! - **Providers run last**: after all plain handlers, in registration
//!   order, even for `run_reverse` (reverse mode inverts handler order
//!   only).

use std::sync::Arc;

use crate::core::executor::{
    direct_hook_executor, direct_provider_executor, HookExecutor, ProviderExecutor,
};
use crate::error::HookError;
use crate::handlers::{BoxHookFuture, Cleanup, HookRef, ProviderRef};

/// Cleanup lifecycle of a runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunnerState {
    Idle,
    CleanupPending,
    CleanupInitiated,
    CleanupCompleted,
}

/// Exclusion policy for the next run; each `without*` call overwrites the
/// previous one.
#[derive(Debug, Clone)]
enum SkipPolicy {
    Nothing,
    Everything,
    Named(Vec<String>),
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Forward,
    Reverse,
}

/// One-shot executor bound to a single event-firing occasion.
///
/// Obtain one via [`Hooks::runner`](crate::Hooks::runner):
///
/// ```rust
/// use hookset::Hooks;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), hookset::HookError> {
/// let hooks: Hooks<(), ()> = Hooks::new();
///
/// let mut runner = hooks.runner("saving");
/// runner.run(()).await?;
/// runner.cleanup(()).await?;
/// # Ok(())
/// # }
/// ```
pub struct Runner<A, C> {
    /// Event this runner was created for.
    event: Arc<str>,
    /// Handler snapshot taken at creation time.
    hooks: Vec<HookRef<A, C>>,
    /// Provider snapshot taken at creation time.
    providers: Vec<ProviderRef<A, C>>,
    /// Cleanup actions in handler-completion order. An ordered list, not a
    /// set: two handlers may schedule behaviorally-equal actions.
    pending_cleanup: Vec<Cleanup<C>>,
    state: RunnerState,
    skip: SkipPolicy,
    hook_executor: HookExecutor<A, C>,
    provider_executor: ProviderExecutor<A, C>,
}

impl<A, C> Runner<A, C>
where
    A: Clone + Send + 'static,
    C: Clone + Send + 'static,
{
    pub(crate) fn new(
        event: Arc<str>,
        hooks: Vec<HookRef<A, C>>,
        providers: Vec<ProviderRef<A, C>>,
    ) -> Self {
        Self {
            event,
            hooks,
            providers,
            pending_cleanup: Vec::new(),
            state: RunnerState::Idle,
            skip: SkipPolicy::Nothing,
            hook_executor: direct_hook_executor(),
            provider_executor: direct_provider_executor(),
        }
    }

    /// Event this runner is bound to.
    pub fn event(&self) -> &str {
        &self.event
    }

    /// Finds if cleanup is pending: the run pass has started (or finished)
    /// and [`Runner::cleanup`] has not been called yet.
    pub fn is_cleanup_pending(&self) -> bool {
        self.state == RunnerState::CleanupPending
    }

    /// Excludes the named hooks/providers from the next run.
    ///
    /// Hooks are addressed by their registered name, provider handlers as
    /// `"{provider}.{event}"`. Replaces any previous exclusion list and
    /// disables [`Runner::without_all`]; last call wins.
    pub fn without<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skip = SkipPolicy::Named(names.into_iter().map(Into::into).collect());
        self
    }

    /// Skips every hook and provider on the next run.
    ///
    /// The state machine still advances normally, so a later
    /// [`Runner::cleanup`] remains a safe no-op. Overwrites any previous
    /// [`Runner::without`] list; last call wins.
    pub fn without_all(mut self) -> Self {
        self.skip = SkipPolicy::Everything;
        self
    }

    /// Replaces the strategy used to invoke each hook.
    ///
    /// The default performs a direct call; a custom strategy may wrap the
    /// invocation for instrumentation, argument adaptation, or dependency
    /// injection.
    pub fn executor<F>(mut self, f: F) -> Self
    where
        F: Fn(HookRef<A, C>, A) -> BoxHookFuture<C> + Send + Sync + 'static,
    {
        self.hook_executor = Box::new(f);
        self
    }

    /// Replaces the strategy used to invoke each provider.
    ///
    /// The default asks the provider for a fresh responder for this
    /// runner's event and runs it, settling to `Ok(None)` when the
    /// provider does not answer for the event.
    pub fn provider_executor<F>(mut self, f: F) -> Self
    where
        F: Fn(ProviderRef<A, C>, Arc<str>, A) -> BoxHookFuture<C> + Send + Sync + 'static,
    {
        self.provider_executor = Box::new(f);
        self
    }

    /// Executes the snapshot's hooks in registration order, then its
    /// providers.
    ///
    /// Calling `run` (or [`Runner::run_reverse`]) more than once is a
    /// silent no-op. On failure the error of the failing handler is
    /// returned unchanged; cleanup actions collected before the failure
    /// stay pending.
    pub async fn run(&mut self, args: A) -> Result<(), HookError> {
        self.execute(args, Direction::Forward).await
    }

    /// Executes the snapshot's hooks in reverse registration order, then
    /// its providers (provider order is never inverted).
    ///
    /// A distinct entry point rather than a flag: forward and reverse runs
    /// are separate operations offered side by side, typically paired as
    /// before/after passes around one host operation.
    pub async fn run_reverse(&mut self, args: A) -> Result<(), HookError> {
        self.execute(args, Direction::Reverse).await
    }

    /// Executes the collected cleanup actions in strict reverse of their
    /// handlers' completion order.
    ///
    /// A no-op unless cleanup is pending, so it is safe to call from
    /// multiple teardown paths. A failing action propagates immediately
    /// and the actions below it never run; the runner stays in a
    /// terminal, non-retriable state either way.
    pub async fn cleanup(&mut self, args: C) -> Result<(), HookError> {
        if self.state != RunnerState::CleanupPending {
            return Ok(());
        }
        self.state = RunnerState::CleanupInitiated;

        while let Some(action) = self.pending_cleanup.pop() {
            action(args.clone()).await?;
        }

        self.state = RunnerState::CleanupCompleted;
        Ok(())
    }

    fn is_skipped(&self, name: &str) -> bool {
        match &self.skip {
            SkipPolicy::Nothing => false,
            SkipPolicy::Everything => true,
            SkipPolicy::Named(names) => names.iter().any(|n| n == name),
        }
    }

    async fn execute(&mut self, args: A, direction: Direction) -> Result<(), HookError> {
        if self.state != RunnerState::Idle {
            return Ok(());
        }

        // Advance before any handler work: a zero-handler run or an
        // immediately-failing handler must still leave cleanup legal.
        self.state = RunnerState::CleanupPending;
        if matches!(self.skip, SkipPolicy::Everything) {
            return Ok(());
        }

        let hooks: Vec<HookRef<A, C>> = match direction {
            Direction::Forward => self.hooks.clone(),
            Direction::Reverse => self.hooks.iter().rev().cloned().collect(),
        };

        for hook in hooks {
            if self.is_skipped(hook.name()) {
                continue;
            }
            if let Some(action) = (self.hook_executor)(hook, args.clone()).await? {
                self.pending_cleanup.push(action);
            }
        }

        for provider in self.providers.clone() {
            let key = format!("{}.{}", provider.name(), self.event);
            if self.is_skipped(&key) {
                continue;
            }
            let fired =
                (self.provider_executor)(provider, Arc::clone(&self.event), args.clone()).await?;
            if let Some(action) = fired {
                self.pending_cleanup.push(action);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use crate::core::registry::Hooks;
    use crate::error::HookError;
    use crate::handlers::{cleanup, responder, HookFn, HookRef, Provide, Responder};

    type Log = Arc<Mutex<Vec<String>>>;

    fn entries(log: &Log) -> Vec<String> {
        log.lock().unwrap().clone()
    }

    /// Hook that records its own name when run.
    fn recording(log: &Log, name: &'static str) -> HookRef<(), ()> {
        let log = Arc::clone(log);
        HookFn::arc(name, move |_: ()| {
            let log = Arc::clone(&log);
            async move {
                log.lock().unwrap().push(name.to_string());
                Ok(None)
            }
        })
    }

    /// Hook that records its name and schedules a cleanup recording `tag`.
    fn with_cleanup(log: &Log, name: &'static str, tag: &'static str) -> HookRef<(), ()> {
        let log = Arc::clone(log);
        HookFn::arc(name, move |_: ()| {
            let log = Arc::clone(&log);
            async move {
                log.lock().unwrap().push(name.to_string());
                let log = Arc::clone(&log);
                Ok(cleanup(move |_: ()| async move {
                    log.lock().unwrap().push(tag.to_string());
                    Ok(())
                }))
            }
        })
    }

    fn failing(name: &'static str, msg: &'static str) -> HookRef<(), ()> {
        HookFn::arc(name, move |_: ()| async move {
            Err::<_, HookError>(HookError::failed(msg))
        })
    }

    #[tokio::test]
    async fn test_runs_hooks_in_insertion_order() {
        let log: Log = Default::default();
        let mut hooks: Hooks<(), ()> = Hooks::new();
        hooks.add("save", recording(&log, "h1"));
        hooks.add("save", recording(&log, "h2"));
        hooks.add("save", recording(&log, "h3"));

        hooks.runner("save").run(()).await.unwrap();

        assert_eq!(entries(&log), vec!["h1", "h2", "h3"]);
    }

    #[tokio::test]
    async fn test_same_name_registered_twice_runs_once() {
        let log: Log = Default::default();
        let mut hooks: Hooks<(), ()> = Hooks::new();
        hooks.add("save", recording(&log, "h1"));
        hooks.add("save", recording(&log, "h1"));

        hooks.runner("save").run(()).await.unwrap();

        assert_eq!(entries(&log), vec!["h1"]);
    }

    #[tokio::test]
    async fn test_hooks_of_other_events_are_invisible() {
        let log: Log = Default::default();
        let mut hooks: Hooks<(), ()> = Hooks::new();
        hooks.add("save", recording(&log, "h1"));
        hooks.add("create", recording(&log, "h2"));

        hooks.runner("save").run(()).await.unwrap();

        assert_eq!(entries(&log), vec!["h1"]);
    }

    #[tokio::test]
    async fn test_cleanup_runs_in_reverse_order() {
        let log: Log = Default::default();
        let mut hooks: Hooks<(), ()> = Hooks::new();
        hooks.add("save", with_cleanup(&log, "h1", "c1"));
        hooks.add("save", with_cleanup(&log, "h2", "c2"));

        let mut runner = hooks.runner("save");
        runner.run(()).await.unwrap();
        assert!(runner.is_cleanup_pending());

        runner.cleanup(()).await.unwrap();
        assert!(!runner.is_cleanup_pending());

        assert_eq!(entries(&log), vec!["h1", "h2", "c2", "c1"]);
    }

    #[tokio::test]
    async fn test_run_is_idempotent() {
        let log: Log = Default::default();
        let mut hooks: Hooks<(), ()> = Hooks::new();
        hooks.add("save", recording(&log, "h1"));

        let mut runner = hooks.runner("save");
        runner.run(()).await.unwrap();
        runner.run(()).await.unwrap();
        runner.run(()).await.unwrap();

        assert_eq!(entries(&log), vec!["h1"]);
    }

    #[tokio::test]
    async fn test_cleanup_is_idempotent() {
        let log: Log = Default::default();
        let mut hooks: Hooks<(), ()> = Hooks::new();
        hooks.add("save", with_cleanup(&log, "h1", "c1"));
        hooks.add("save", with_cleanup(&log, "h2", "c2"));

        let mut runner = hooks.runner("save");
        runner.run(()).await.unwrap();
        runner.cleanup(()).await.unwrap();
        runner.cleanup(()).await.unwrap();
        runner.cleanup(()).await.unwrap();

        assert_eq!(entries(&log), vec!["h1", "h2", "c2", "c1"]);
    }

    #[tokio::test]
    async fn test_cleanup_before_run_is_a_noop() {
        let log: Log = Default::default();
        let mut hooks: Hooks<(), ()> = Hooks::new();
        hooks.add("save", with_cleanup(&log, "h1", "c1"));

        let mut runner = hooks.runner("save");
        runner.cleanup(()).await.unwrap();

        assert!(entries(&log).is_empty());
        assert!(!runner.is_cleanup_pending());

        // the pass is still available afterwards
        runner.run(()).await.unwrap();
        assert!(runner.is_cleanup_pending());
    }

    #[tokio::test]
    async fn test_failure_stops_the_loop_and_keeps_collected_cleanups() {
        let log: Log = Default::default();
        let mut hooks: Hooks<(), ()> = Hooks::new();
        hooks.add("save", with_cleanup(&log, "h1", "c1"));
        hooks.add("save", failing("h2", "boom"));
        hooks.add("save", recording(&log, "h3"));

        let mut runner = hooks.runner("save");
        let err = runner.run(()).await.unwrap_err();
        assert!(
            matches!(&err, HookError::Failed { error } if error == "boom"),
            "handler error must propagate unchanged, got: {err:?}"
        );
        assert!(runner.is_cleanup_pending());

        runner.cleanup(()).await.unwrap();

        assert_eq!(entries(&log), vec!["h1", "c1"], "h3 must never run");
    }

    #[tokio::test]
    async fn test_failing_first_handler_leaves_cleanup_safe_and_empty() {
        let log: Log = Default::default();
        let mut hooks: Hooks<(), ()> = Hooks::new();
        hooks.add("save", failing("h1", "boom"));

        let mut runner = hooks.runner("save");
        let err = runner.run(()).await.unwrap_err();
        assert_eq!(err.as_label(), "hook_failed");
        assert!(runner.is_cleanup_pending());

        runner.cleanup(()).await.unwrap();
        assert!(entries(&log).is_empty());
    }

    #[tokio::test]
    async fn test_zero_handler_run_advances_the_state_machine() {
        let hooks: Hooks<(), ()> = Hooks::new();

        let mut runner = hooks.runner("save");
        assert!(!runner.is_cleanup_pending());

        runner.run(()).await.unwrap();
        assert!(runner.is_cleanup_pending());

        runner.cleanup(()).await.unwrap();
        assert!(!runner.is_cleanup_pending());
    }

    #[tokio::test]
    async fn test_without_all_suppresses_everything_but_cleanup_stays_safe() {
        let log: Log = Default::default();
        let mut hooks: Hooks<(), ()> = Hooks::new();
        hooks.add("save", with_cleanup(&log, "h1", "c1"));
        hooks.provider(Arc::new(TracingProvider::new(&log)));

        let mut runner = hooks.runner("save").without_all();
        runner.run(()).await.unwrap();
        assert!(runner.is_cleanup_pending());

        runner.cleanup(()).await.unwrap();
        assert!(entries(&log).is_empty());
    }

    #[tokio::test]
    async fn test_without_suppresses_exactly_the_named_hooks() {
        let log: Log = Default::default();
        let mut hooks: Hooks<(), ()> = Hooks::new();
        hooks.add("save", recording(&log, "h1"));
        hooks.add("save", recording(&log, "h2"));
        hooks.add("save", recording(&log, "h3"));

        hooks
            .runner("save")
            .without(["h2"])
            .run(())
            .await
            .unwrap();

        assert_eq!(entries(&log), vec!["h1", "h3"]);
    }

    #[tokio::test]
    async fn test_without_last_call_wins() {
        let log: Log = Default::default();
        let mut hooks: Hooks<(), ()> = Hooks::new();
        hooks.add("save", recording(&log, "h1"));
        hooks.add("save", recording(&log, "h2"));

        // a named list disables a previous skip-all
        hooks
            .runner("save")
            .without_all()
            .without(["h1"])
            .run(())
            .await
            .unwrap();
        assert_eq!(entries(&log), vec!["h2"]);

        log.lock().unwrap().clear();

        // and skip-all overwrites a previous named list
        hooks
            .runner("save")
            .without(["h1"])
            .without_all()
            .run(())
            .await
            .unwrap();
        assert!(entries(&log).is_empty());
    }

    #[tokio::test]
    async fn test_run_reverse_inverts_hook_order_only() {
        let log: Log = Default::default();
        let mut hooks: Hooks<(), ()> = Hooks::new();
        hooks.add("save", with_cleanup(&log, "h1", "c1"));
        hooks.add("save", with_cleanup(&log, "h2", "c2"));

        let mut runner = hooks.runner("save");
        runner.run_reverse(()).await.unwrap();
        runner.cleanup(()).await.unwrap();

        // cleanup stays LIFO relative to completion order
        assert_eq!(entries(&log), vec!["h2", "h1", "c1", "c2"]);
    }

    #[tokio::test]
    async fn test_snapshot_does_not_observe_later_registrations() {
        let log: Log = Default::default();
        let mut hooks: Hooks<(), ()> = Hooks::new();
        hooks.add("save", recording(&log, "h1"));

        let mut runner = hooks.runner("save");
        hooks.add("save", recording(&log, "h2"));
        hooks.remove("save", "h1");

        runner.run(()).await.unwrap();

        assert_eq!(entries(&log), vec!["h1"]);
    }

    #[tokio::test]
    async fn test_cleanup_failure_aborts_the_remaining_stack() {
        let log: Log = Default::default();
        let mut hooks: Hooks<(), ()> = Hooks::new();
        hooks.add("save", with_cleanup(&log, "h1", "c1"));
        {
            let log2 = Arc::clone(&log);
            hooks.add(
                "save",
                HookFn::arc("h2", move |_: ()| {
                    let log = Arc::clone(&log2);
                    async move {
                        log.lock().unwrap().push("h2".to_string());
                        Ok(cleanup(move |_: ()| async move {
                            Err::<(), HookError>(HookError::failed("c2 exploded"))
                        }))
                    }
                }),
            );
        }
        hooks.add("save", with_cleanup(&log, "h3", "c3"));

        let mut runner = hooks.runner("save");
        runner.run(()).await.unwrap();

        let err = runner.cleanup(()).await.unwrap_err();
        assert!(matches!(&err, HookError::Failed { error } if error == "c2 exploded"));

        // c3 ran (top of the stack), c2 failed, c1 must never run
        assert_eq!(entries(&log), vec!["h1", "h2", "h3", "c3"]);

        // terminal and non-retriable
        assert!(!runner.is_cleanup_pending());
        runner.cleanup(()).await.unwrap();
        assert_eq!(entries(&log), vec!["h1", "h2", "h3", "c3"]);
    }

    #[tokio::test]
    async fn test_arguments_reach_hooks_and_cleanups() {
        let log: Log = Default::default();
        let mut hooks: Hooks<u32, String> = Hooks::new();
        {
            let log2 = Arc::clone(&log);
            hooks.add(
                "save",
                HookFn::arc("h1", move |user_id: u32| {
                    let log = Arc::clone(&log2);
                    async move {
                        log.lock().unwrap().push(format!("run:{user_id}"));
                        let log = Arc::clone(&log);
                        Ok(cleanup(move |message: String| async move {
                            log.lock().unwrap().push(format!("cleanup:{message}"));
                            Ok(())
                        }))
                    }
                }),
            );
        }

        let mut runner = hooks.runner("save");
        runner.run(42).await.unwrap();
        runner.cleanup("rolled back".to_string()).await.unwrap();

        assert_eq!(entries(&log), vec!["run:42", "cleanup:rolled back"]);
    }

    #[tokio::test]
    async fn test_custom_executor_intercepts_every_hook() {
        let log: Log = Default::default();
        let mut hooks: Hooks<(), ()> = Hooks::new();
        hooks.add("save", recording(&log, "h1"));
        hooks.add("save", recording(&log, "h2"));

        let seen = Arc::new(AtomicUsize::new(0));
        let seen2 = Arc::clone(&seen);

        hooks
            .runner("save")
            .executor(move |hook, args| {
                seen2.fetch_add(1, Ordering::SeqCst);
                Box::pin(async move { hook.call(args).await })
            })
            .run(())
            .await
            .unwrap();

        assert_eq!(seen.load(Ordering::SeqCst), 2);
        assert_eq!(entries(&log), vec!["h1", "h2"]);
    }

    /// Provider answering for "save" and "delete"; counts how many
    /// per-firing responders it was asked to build.
    struct TracingProvider {
        log: Log,
        built: Arc<AtomicUsize>,
    }

    impl TracingProvider {
        fn new(log: &Log) -> Self {
            Self { log: Arc::clone(log), built: Arc::new(AtomicUsize::new(0)) }
        }
    }

    impl Provide<(), ()> for TracingProvider {
        fn name(&self) -> &str {
            "Tracing"
        }

        fn respond_to(&self, event: &str) -> Option<Responder<(), ()>> {
            if event != "save" && event != "delete" {
                return None;
            }
            let firing = self.built.fetch_add(1, Ordering::SeqCst) + 1;
            let log = Arc::clone(&self.log);
            let event = event.to_string();
            responder(move |_: ()| async move {
                log.lock().unwrap().push(format!("Tracing.{event}#{firing}"));
                let log = Arc::clone(&log);
                Ok(cleanup(move |_: ()| async move {
                    log.lock().unwrap().push("~Tracing".to_string());
                    Ok(())
                }))
            })
        }
    }

    #[tokio::test]
    async fn test_providers_run_after_hooks_and_collect_cleanups() {
        let log: Log = Default::default();
        let mut hooks: Hooks<(), ()> = Hooks::new();
        let provider = Arc::new(TracingProvider::new(&log));
        hooks.provider(provider);
        hooks.add("save", with_cleanup(&log, "h1", "c1"));

        let mut runner = hooks.runner("save");
        runner.run(()).await.unwrap();
        runner.cleanup(()).await.unwrap();

        assert_eq!(
            entries(&log),
            vec!["h1", "Tracing.save#1", "~Tracing", "c1"]
        );
    }

    #[tokio::test]
    async fn test_provider_builds_a_fresh_responder_per_firing() {
        let log: Log = Default::default();
        let mut hooks: Hooks<(), ()> = Hooks::new();
        let provider = Arc::new(TracingProvider::new(&log));
        let built = Arc::clone(&provider.built);
        hooks.provider(provider);

        hooks.runner("save").run(()).await.unwrap();
        hooks.runner("save").run(()).await.unwrap();

        assert_eq!(built.load(Ordering::SeqCst), 2, "one construction per firing");
        assert_eq!(entries(&log), vec!["Tracing.save#1", "Tracing.save#2"]);
    }

    #[tokio::test]
    async fn test_provider_is_silent_for_events_it_does_not_answer() {
        let log: Log = Default::default();
        let mut hooks: Hooks<(), ()> = Hooks::new();
        hooks.provider(Arc::new(TracingProvider::new(&log)));
        hooks.add("create", recording(&log, "h1"));

        hooks.runner("create").run(()).await.unwrap();

        assert_eq!(entries(&log), vec!["h1"]);
    }

    #[tokio::test]
    async fn test_provider_skip_key_is_provider_dot_event() {
        let log: Log = Default::default();
        let mut hooks: Hooks<(), ()> = Hooks::new();
        hooks.provider(Arc::new(TracingProvider::new(&log)));
        hooks.add("save", recording(&log, "h1"));

        hooks
            .runner("save")
            .without(["Tracing.save"])
            .run(())
            .await
            .unwrap();

        assert_eq!(entries(&log), vec!["h1"]);
    }

    #[tokio::test]
    async fn test_run_reverse_keeps_providers_after_hooks_in_forward_order() {
        let log: Log = Default::default();
        let mut hooks: Hooks<(), ()> = Hooks::new();
        hooks.provider(Arc::new(TracingProvider::new(&log)));
        hooks.add("save", recording(&log, "h1"));
        hooks.add("save", recording(&log, "h2"));

        hooks.runner("save").run_reverse(()).await.unwrap();

        assert_eq!(entries(&log), vec!["h2", "h1", "Tracing.save#1"]);
    }

    #[tokio::test]
    async fn test_custom_provider_executor_replaces_dispatch() {
        let log: Log = Default::default();
        let mut hooks: Hooks<(), ()> = Hooks::new();
        hooks.provider(Arc::new(TracingProvider::new(&log)));

        let log2 = Arc::clone(&log);
        hooks
            .runner("save")
            .provider_executor(move |provider, event, _args| {
                let log = Arc::clone(&log2);
                Box::pin(async move {
                    log.lock()
                        .unwrap()
                        .push(format!("intercepted:{}.{}", provider.name(), event));
                    Ok(None)
                })
            })
            .run(())
            .await
            .unwrap();

        assert_eq!(entries(&log), vec!["intercepted:Tracing.save"]);
    }
}
