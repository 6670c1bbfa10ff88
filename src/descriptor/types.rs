//! Canonical in-memory shape of a parsed routes file.
//!
//! Both descriptor formats (XML attributes, JSON object keys) normalize into
//! these types immediately after parse, so the gate evaluator and registrar
//! never see format-specific structures.

/// A fully parsed, validated routes descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDoc {
    /// Prefix applied to every controller name for route targets, container
    /// keys, and annotation lookups. Empty when the file declares none.
    pub controllers_namespace: String,
    /// Route groups in file order.
    pub groups: Vec<RouteGroup>,
    /// Global middleware declarations shared by all routes, if any.
    pub middlewares: Option<MiddlewareSection>,
}

/// One `<route>`/`route` entry: a URL-pattern scope under which one route per
/// supported CRUD verb is registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGroup {
    /// URL template; may contain path parameters.
    pub pattern: String,
    /// Controller name, without the namespace prefix.
    pub controller: String,
    /// Display name; route names are this plus the uppercase verb.
    pub name: String,
}

/// The global `middlewares` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiddlewareSection {
    /// Prefix applied to every attached middleware name.
    pub namespace: String,
    /// Declarations in file order; this order is the attachment order.
    pub declarations: Vec<MiddlewareDecl>,
}

/// One conditional middleware attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiddlewareDecl {
    /// Middleware name, without the namespace prefix. Never empty.
    pub middleware: String,
    /// Annotation key gating the attachment; `None` means unconditional.
    pub annotation: Option<String>,
    /// Invert the gate for false/absent annotations.
    pub reversed: bool,
}
