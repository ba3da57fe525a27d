//! # Hook registry - per-event handler collections and global providers.
//!
//! [`Hooks`] owns the mapping from event name to its insertion-ordered,
//! name-unique handler collection, plus a single insertion-ordered,
//! name-unique provider collection shared by all events. It is the
//! setup-time half of the crate; the event-time half is the
//! [`Runner`](crate::Runner) produced by [`Hooks::runner`].
//!
//! ## Rules
//! - Set semantics key on the *registered name*: adding a second hook with
//!   an already-registered name to the same event is a silent no-op.
//! - A handler registered under event `"save"` is invisible to `"create"`;
//!   providers are global and answer per event at run time.
//! - [`Hooks::clear`] and [`Hooks::clear_all`] drop handlers only;
//!   providers are a separate concern and stay registered.
//! - Every [`Hooks::runner`] call snapshots the current collections, so
//!   later registry mutation never affects a runner already handed out.
//!
//! ## Example
//! ```rust
//! use hookset::{Hooks, HookFn, HookRef};
//!
//! let mut hooks: Hooks<u32, ()> = Hooks::new();
//!
//! let audit: HookRef<u32, ()> = HookFn::arc("audit", |user_id: u32| async move {
//!     let _ = user_id;
//!     Ok(None)
//! });
//!
//! hooks.add("saving", audit);
//! assert!(hooks.has("saving", "audit"));
//! assert!(!hooks.has("creating", "audit"));
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use crate::core::resolver::Resolve;
use crate::core::runner::Runner;
use crate::error::RegistryError;
use crate::handlers::{HookRef, ProviderRef};

/// Registry of lifecycle hooks around named events.
///
/// `A` is the argument type handlers receive when an event fires; `C` is
/// the argument type cleanup actions receive during teardown. Both are
/// fixed once per registry, giving compile-time argument-shape checking
/// for every handler registered on it.
pub struct Hooks<A, C> {
    /// Per-event handler collections; insertion-ordered, unique by name.
    hooks: HashMap<String, Vec<HookRef<A, C>>>,
    /// Global provider collection; insertion-ordered, unique by name.
    providers: Vec<ProviderRef<A, C>>,
    /// Optional collaborator for string-based references.
    resolver: Option<Arc<dyn Resolve<A, C>>>,
}

impl<A, C> std::fmt::Debug for Hooks<A, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hooks")
            .field("events", &self.hooks.keys().collect::<Vec<_>>())
            .field("providers", &self.providers.len())
            .field("has_resolver", &self.resolver.is_some())
            .finish()
    }
}

impl<A, C> Hooks<A, C>
where
    A: Clone + Send + 'static,
    C: Clone + Send + 'static,
{
    /// Creates an empty registry without a resolver.
    ///
    /// Registries created this way accept pre-resolved hooks only;
    /// [`Hooks::add_ref`] will fail with
    /// [`RegistryError::ResolverRequired`].
    pub fn new() -> Self {
        Self {
            hooks: HashMap::new(),
            providers: Vec::new(),
            resolver: None,
        }
    }

    /// Creates an empty registry with a resolver for string references.
    pub fn with_resolver(resolver: Arc<dyn Resolve<A, C>>) -> Self {
        Self {
            hooks: HashMap::new(),
            providers: Vec::new(),
            resolver: Some(resolver),
        }
    }

    /// Adds a hook handler for a given event.
    ///
    /// Adding a hook whose name is already registered for the event is a
    /// silent no-op. Returns the registry for chaining.
    pub fn add(&mut self, event: impl Into<String>, hook: HookRef<A, C>) -> &mut Self {
        let handlers = self.hooks.entry(event.into()).or_default();
        if !handlers.iter().any(|h| h.name() == hook.name()) {
            handlers.push(hook);
        }
        self
    }

    /// Resolves a string reference through the configured resolver and
    /// registers the result like any other hook.
    ///
    /// Fails synchronously, at registration time, when no resolver is
    /// configured or the resolver rejects the reference.
    pub fn add_ref(
        &mut self,
        event: impl Into<String>,
        reference: &str,
    ) -> Result<&mut Self, RegistryError> {
        let resolver = self.resolver.as_ref().ok_or_else(|| {
            RegistryError::ResolverRequired { reference: reference.to_string() }
        })?;
        let hook = resolver.resolve(reference)?;
        Ok(self.add(event, hook))
    }

    /// Finds if a handler with the given name exists for an event.
    ///
    /// `false` for unknown events.
    pub fn has(&self, event: &str, name: &str) -> bool {
        match self.hooks.get(event) {
            Some(handlers) => handlers.iter().any(|h| h.name() == name),
            None => false,
        }
    }

    /// Removes the named handler from an event's collection.
    ///
    /// Returns whether a removal occurred; unknown events and unknown
    /// names are not errors.
    pub fn remove(&mut self, event: &str, name: &str) -> bool {
        match self.hooks.get_mut(event) {
            Some(handlers) => {
                let before = handlers.len();
                handlers.retain(|h| h.name() != name);
                handlers.len() != before
            }
            None => false,
        }
    }

    /// Drops all handlers for one event.
    ///
    /// Providers stay registered.
    pub fn clear(&mut self, event: &str) {
        self.hooks.remove(event);
    }

    /// Drops all handlers for all events.
    ///
    /// Providers stay registered.
    pub fn clear_all(&mut self) {
        self.hooks.clear();
    }

    /// Read-only access to all registered handlers, keyed by event.
    pub fn all(&self) -> &HashMap<String, Vec<HookRef<A, C>>> {
        &self.hooks
    }

    /// Registers a provider.
    ///
    /// Providers are global (not event-scoped); adding a provider whose
    /// name is already registered is a silent no-op. Returns the registry
    /// for chaining.
    pub fn provider(&mut self, provider: ProviderRef<A, C>) -> &mut Self {
        if !self.providers.iter().any(|p| p.name() == provider.name()) {
            self.providers.push(provider);
        }
        self
    }

    /// Finds if a provider with the given name is registered.
    pub fn has_provider(&self, name: &str) -> bool {
        self.providers.iter().any(|p| p.name() == name)
    }

    /// Removes the named provider.
    ///
    /// Returns whether a removal occurred.
    pub fn remove_provider(&mut self, name: &str) -> bool {
        let before = self.providers.len();
        self.providers.retain(|p| p.name() != name);
        self.providers.len() != before
    }

    /// Read-only access to the registered providers.
    pub fn providers(&self) -> &[ProviderRef<A, C>] {
        &self.providers
    }

    /// Copies every handler and provider from `other` into this registry.
    ///
    /// Per-event set semantics apply, so names present in both registries
    /// collapse. `other` is left unchanged; merging from several
    /// registries is just repeated calls.
    pub fn merge(&mut self, other: &Hooks<A, C>) {
        for (event, handlers) in other.all() {
            for handler in handlers {
                self.add(event.clone(), Arc::clone(handler));
            }
        }
        for provider in other.providers() {
            self.provider(Arc::clone(provider));
        }
    }

    /// Returns a runner bound to the current snapshot of the event's
    /// handlers and the provider collection.
    ///
    /// Each call produces an independent one-shot runner, even for the
    /// same event; registrations made after this call are invisible to it.
    pub fn runner(&self, event: &str) -> Runner<A, C> {
        Runner::new(
            Arc::from(event),
            self.hooks.get(event).cloned().unwrap_or_default(),
            self.providers.clone(),
        )
    }
}

impl<A, C> Default for Hooks<A, C>
where
    A: Clone + Send + 'static,
    C: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
