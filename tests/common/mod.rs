#![allow(dead_code)]

use std::collections::HashMap;

use restroute::{
    AnnotationReader, AnnotationSet, Container, Controller, ControllerFactory, RouteCollector,
    Verb,
};

/// Install a test subscriber once so registration logs show with
/// `--nocapture`. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// One route as the fake router saw it.
#[derive(Debug, Clone)]
pub struct RecordedRoute {
    pub group: String,
    pub verb: Verb,
    pub suffix: String,
    pub target: String,
    pub name: Option<String>,
    pub middlewares: Vec<String>,
}

/// Router fake that records every call in order.
#[derive(Default)]
pub struct RecordingRouter {
    pub routes: Vec<RecordedRoute>,
}

impl RouteCollector for RecordingRouter {
    type Route = usize;

    fn register(&mut self, group_pattern: &str, verb: Verb, suffix: &str, target: &str) -> usize {
        self.routes.push(RecordedRoute {
            group: group_pattern.to_string(),
            verb,
            suffix: suffix.to_string(),
            target: target.to_string(),
            name: None,
            middlewares: Vec::new(),
        });
        self.routes.len() - 1
    }

    fn set_name(&mut self, route: &mut usize, name: &str) {
        self.routes[*route].name = Some(name.to_string());
    }

    fn attach_middleware(&mut self, route: &mut usize, middleware: &str) {
        self.routes[*route].middlewares.push(middleware.to_string());
    }
}

impl RecordingRouter {
    pub fn names(&self) -> Vec<&str> {
        self.routes
            .iter()
            .map(|r| r.name.as_deref().unwrap_or(""))
            .collect()
    }
}

/// Container fake that stores factories by key.
#[derive(Default)]
pub struct RecordingContainer {
    pub factories: HashMap<String, ControllerFactory>,
}

impl Container for RecordingContainer {
    fn set_factory(&mut self, key: &str, factory: ControllerFactory) {
        self.factories.insert(key.to_string(), factory);
    }

    fn has(&self, key: &str) -> bool {
        self.factories.contains_key(key)
    }
}

/// Annotation reader fake keyed by `"controller:verb"`.
#[derive(Default)]
pub struct MapAnnotations {
    entries: HashMap<String, AnnotationSet>,
}

impl MapAnnotations {
    pub fn set(&mut self, controller: &str, verb: Verb, annos: AnnotationSet) {
        self.entries.insert(format!("{controller}:{verb}"), annos);
    }
}

impl AnnotationReader for MapAnnotations {
    fn method_annotations(&self, controller: &str, verb: Verb) -> AnnotationSet {
        self.entries
            .get(&format!("{controller}:{verb}"))
            .cloned()
            .unwrap_or_default()
    }
}

/// Controller implementing the full CRUD set.
#[derive(Default)]
pub struct BookController;

impl Controller for BookController {
    fn verbs() -> &'static [Verb] {
        &Verb::ALL
    }
}

/// Controller implementing only `get` and `post`.
#[derive(Default)]
pub struct FeedController;

impl Controller for FeedController {
    fn verbs() -> &'static [Verb] {
        &[Verb::Get, Verb::Post]
    }
}
