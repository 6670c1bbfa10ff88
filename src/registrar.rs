//! Route registration.
//!
//! The registrar walks a parsed [`RouteDoc`] and materializes it against the
//! host's router and DI container: one route per (group, supported verb),
//! named `displayName + VERB`, with gated middleware attached in declaration
//! order, and one lazy controller factory per distinct controller name.
//!
//! Everything here runs once, synchronously, at startup. The registrar never
//! continues past a descriptor error, so a host either gets the complete
//! route table or none of it.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::annotations::AnnotationReader;
use crate::descriptor::{self, RouteDoc};
use crate::error::RoutesError;
use crate::gate::should_attach;
use crate::registry::{ControllerFactory, ControllerRegistry};
use crate::verb::Verb;

/// Pattern suffix for `get` routes: the group pattern plus an optional
/// trailing id segment. All other verbs register the bare group pattern.
pub const GET_SUFFIX: &str = "[/{id}]";

/// Router collaborator: a route collector that supports verb routes under a
/// group pattern, route naming, and named middleware attachment.
pub trait RouteCollector {
    type Route;

    /// Register a route for `verb` under `group_pattern`, with `suffix`
    /// appended to the pattern (empty for all verbs except `get`, which gets
    /// [`GET_SUFFIX`]). `target` is the `"Controller:verb"` binding the
    /// router dispatches to at request time.
    fn register(
        &mut self,
        group_pattern: &str,
        verb: Verb,
        suffix: &str,
        target: &str,
    ) -> Self::Route;

    /// Name a previously registered route.
    fn set_name(&mut self, route: &mut Self::Route, name: &str);

    /// Attach a named middleware to a route. Attachment order follows
    /// declaration order, and the first-attached middleware is the
    /// outermost at request time.
    fn attach_middleware(&mut self, route: &mut Self::Route, middleware: &str);
}

/// DI-container collaborator. The container owns controller lifetimes; the
/// registrar only hands it a lazy, zero-argument factory per controller key.
pub trait Container {
    fn set_factory(&mut self, key: &str, factory: ControllerFactory);
    fn has(&self, key: &str) -> bool;
}

/// What a registration pass produced. Returned for logging and for hosts
/// that want to fail on skipped groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistrationSummary {
    /// Router routes registered across all groups and verbs.
    pub routes: usize,
    /// Controller factories handed to the container.
    pub controllers: usize,
    /// Groups whose controller had no registry entry.
    pub skipped_groups: usize,
}

/// Startup-time orchestrator binding a routes descriptor to the host's
/// collaborators.
pub struct Registrar<'a, R, C, A>
where
    R: RouteCollector,
    C: Container,
    A: AnnotationReader,
{
    router: &'a mut R,
    container: &'a mut C,
    annotations: &'a A,
    controllers: &'a ControllerRegistry,
}

impl<'a, R, C, A> Registrar<'a, R, C, A>
where
    R: RouteCollector,
    C: Container,
    A: AnnotationReader,
{
    pub fn new(
        router: &'a mut R,
        container: &'a mut C,
        annotations: &'a A,
        controllers: &'a ControllerRegistry,
    ) -> Self {
        Self {
            router,
            container,
            annotations,
            controllers,
        }
    }

    /// Load a routes file and register everything it declares.
    ///
    /// Fatal on any descriptor error; the router and container are untouched
    /// when an error is returned because parsing completes before any
    /// registration starts.
    pub fn load_routes(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<RegistrationSummary, RoutesError> {
        let doc = descriptor::load_routes(path)?;
        Ok(self.apply(&doc))
    }

    /// Register all routes of an already parsed descriptor.
    pub fn apply(&mut self, doc: &RouteDoc) -> RegistrationSummary {
        let mut summary = RegistrationSummary::default();

        for group in &doc.groups {
            let controller = format!("{}{}", doc.controllers_namespace, group.controller);

            let Some(verbs) = self.controllers.verbs(&controller) else {
                warn!(
                    controller = %controller,
                    pattern = %group.pattern,
                    "controller not in registry, skipping route group"
                );
                summary.skipped_groups += 1;
                continue;
            };

            for verb in Verb::ALL {
                if !verbs.contains(&verb) {
                    continue;
                }
                self.register_route(doc, group, &controller, verb);
                summary.routes += 1;
            }

            if !self.container.has(&controller) {
                if let Some(factory) = self.controllers.factory(&controller) {
                    self.container.set_factory(&controller, factory);
                    summary.controllers += 1;
                }
            }

            info!(
                pattern = %group.pattern,
                controller = %controller,
                "route group registered"
            );
        }

        info!(
            routes = summary.routes,
            controllers = summary.controllers,
            skipped = summary.skipped_groups,
            "route registration complete"
        );
        summary
    }

    fn register_route(&mut self, doc: &RouteDoc, group: &descriptor::RouteGroup, controller: &str, verb: Verb) {
        let suffix = if verb == Verb::Get { GET_SUFFIX } else { "" };
        let target = format!("{}:{}", controller, verb);
        let name = format!("{}{}", group.name, verb.name_suffix());

        let mut route = self
            .router
            .register(&group.pattern, verb, suffix, &target);
        self.router.set_name(&mut route, &name);
        debug!(name = %name, target = %target, "route registered");

        if let Some(section) = &doc.middlewares {
            let annos = self.annotations.method_annotations(controller, verb);
            for decl in &section.declarations {
                if should_attach(decl, &annos) {
                    let middleware = format!("{}{}", section.namespace, decl.middleware);
                    self.router.attach_middleware(&mut route, &middleware);
                    debug!(route = %name, middleware = %middleware, "middleware attached");
                }
            }
        }
    }
}
