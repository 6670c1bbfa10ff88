//! Routes descriptor parsing and normalization.
//!
//! A routes file declares an ordered list of route groups (URL pattern,
//! controller, display name) plus an optional global middleware section.
//! XML and JSON inputs normalize into the same [`RouteDoc`] so everything
//! downstream is format-agnostic.

mod load;
mod types;
mod xml;

pub use load::load_routes;
pub use types::{MiddlewareDecl, MiddlewareSection, RouteDoc, RouteGroup};
