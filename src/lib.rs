//! # restroute
//!
//! **restroute** is a declarative route-registration layer: it reads a routes
//! file (XML or JSON) describing URL patterns, controller bindings, and
//! conditional middleware attachments, and materializes them into live routes
//! against a host-supplied router, wiring lazy controller construction
//! through the host's dependency-injection container.
//!
//! Everything in this crate runs once, synchronously, at application startup.
//! Request dispatch belongs entirely to the host's router; restroute only
//! builds the routing table and its middleware graph.
//!
//! ## Architecture
//!
//! - **[`settings`]** - process settings loaded from ini/json files, with
//!   first-load-wins merging and derived container bootstrap options
//! - **[`descriptor`]** - routes-file parsing, both formats normalized into
//!   one canonical shape
//! - **[`gate`]** - the pure decision rule for conditional middleware
//!   attachment
//! - **[`registrar`]** - the orchestrator and its collaborator traits
//!   (router, DI container)
//! - **[`registry`]** - explicit controller capability declarations and
//!   factories, replacing any runtime introspection
//! - **[`annotations`]** - the annotation-reader collaborator boundary
//! - **[`wrap`]** - a response-wrapping helper for middleware authors
//!
//! ## Resolution rules
//!
//! For each route group and each CRUD verb (`get`, `post`, `put`, `patch`,
//! `delete`, in that order) the controller declares, one route is registered:
//! `get` at the group pattern plus an optional trailing `[/{id}]` segment,
//! every other verb at the bare pattern. The route is named
//! `displayName + VERB` (`"UserGET"`). Each global middleware declaration is
//! then gated per route against the controller method's annotations and
//! attached in declaration order. Finally one lazy factory per distinct
//! controller name is handed to the container.
//!
//! ## Quick start
//!
//! ```no_run
//! use restroute::{Controller, ControllerRegistry, NoAnnotations, Registrar, Verb};
//! # use restroute::{ControllerFactory, RouteCollector, Container};
//! # struct MyRouter; struct MyContainer;
//! # impl RouteCollector for MyRouter {
//! #     type Route = ();
//! #     fn register(&mut self, _: &str, _: Verb, _: &str, _: &str) {}
//! #     fn set_name(&mut self, _: &mut (), _: &str) {}
//! #     fn attach_middleware(&mut self, _: &mut (), _: &str) {}
//! # }
//! # impl Container for MyContainer {
//! #     fn set_factory(&mut self, _: &str, _: ControllerFactory) {}
//! #     fn has(&self, _: &str) -> bool { false }
//! # }
//!
//! #[derive(Default)]
//! struct BookController;
//!
//! impl Controller for BookController {
//!     fn verbs() -> &'static [Verb] {
//!         &[Verb::Get, Verb::Post]
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut registry = ControllerRegistry::new();
//! registry.register::<BookController>("api.BookController");
//!
//! let mut router = MyRouter;
//! let mut container = MyContainer;
//! let summary = Registrar::new(&mut router, &mut container, &NoAnnotations, &registry)
//!     .load_routes("routes.json")?;
//! println!("registered {} routes", summary.routes);
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! All loading errors are fatal and typed ([`RoutesError`],
//! [`SettingsError`]): a missing file, an unsupported extension, a
//! descriptor without a `routes` section, or a middleware declaration
//! without its identifier each abort startup. There is no partial or
//! degraded registration mode.

pub mod annotations;
pub mod descriptor;
pub mod error;
pub mod gate;
pub mod registrar;
pub mod registry;
pub mod settings;
pub mod verb;
pub mod wrap;

pub use annotations::{AnnotationReader, AnnotationSet, NoAnnotations};
pub use descriptor::{load_routes, MiddlewareDecl, MiddlewareSection, RouteDoc, RouteGroup};
pub use error::{RoutesError, SettingsError};
pub use gate::should_attach;
pub use registrar::{
    Container, Registrar, RegistrationSummary, RouteCollector, GET_SUFFIX,
};
pub use registry::{BoxedController, Controller, ControllerFactory, ControllerRegistry};
pub use settings::Settings;
pub use verb::Verb;
