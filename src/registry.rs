//! Controller registry.
//!
//! Route descriptors refer to controllers by name; the registry maps those
//! names to a static verb-capability declaration and a factory closure. The
//! host populates it at bootstrap, before routes are loaded, and the
//! registrar consults it instead of any runtime introspection.

use std::collections::HashMap;
use std::sync::Arc;

use crate::verb::Verb;

/// A controller type that can be materialized from a routes file.
///
/// `verbs()` is the capability declaration: only the verbs listed here get a
/// route registered for the controller's groups. It is a static property of
/// the type, queried before any instance exists.
pub trait Controller: Send + Sync + 'static {
    fn verbs() -> &'static [Verb]
    where
        Self: Sized;
}

/// Controller instance as stored by the DI container.
pub type BoxedController = Box<dyn Controller>;

/// Zero-argument factory handed to the DI container; the container decides
/// when (and whether) to invoke it.
pub type ControllerFactory = Arc<dyn Fn() -> BoxedController + Send + Sync>;

struct Entry {
    verbs: &'static [Verb],
    factory: ControllerFactory,
}

/// Name-keyed registry of controller capabilities and factories.
///
/// Keys are the fully qualified names used in the routes file, namespace
/// prefix included.
#[derive(Default)]
pub struct ControllerRegistry {
    entries: HashMap<String, Entry>,
}

impl ControllerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a controller type under `name`, constructed via `Default`
    /// when the container first resolves it.
    pub fn register<C>(&mut self, name: impl Into<String>)
    where
        C: Controller + Default,
    {
        self.register_with(name, C::default);
    }

    /// Register a controller type under `name` with a custom factory.
    pub fn register_with<C, F>(&mut self, name: impl Into<String>, factory: F)
    where
        C: Controller,
        F: Fn() -> C + Send + Sync + 'static,
    {
        self.entries.insert(
            name.into(),
            Entry {
                verbs: C::verbs(),
                factory: Arc::new(move || Box::new(factory())),
            },
        );
    }

    /// Verbs the named controller declares, or `None` when unregistered.
    #[must_use]
    pub fn verbs(&self, name: &str) -> Option<&'static [Verb]> {
        self.entries.get(name).map(|e| e.verbs)
    }

    /// Factory for the named controller; cheap to clone (`Arc`).
    #[must_use]
    pub fn factory(&self, name: &str) -> Option<ControllerFactory> {
        self.entries.get(name).map(|e| Arc::clone(&e.factory))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
