use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::types::{MiddlewareDecl, MiddlewareSection, RouteDoc, RouteGroup};
use super::xml;
use crate::error::RoutesError;

/// Format-agnostic intermediate produced by the XML and JSON parsers before
/// validation. Fields mirror the descriptor shape but keep everything
/// optional; [`normalize`] turns absences into the typed startup errors.
#[derive(Debug, Default)]
pub(super) struct RawDoc {
    pub(super) routes: Option<RawRoutes>,
    pub(super) middlewares: Option<RawMiddlewares>,
}

#[derive(Debug)]
pub(super) struct RawRoutes {
    pub(super) namespace: Option<String>,
    pub(super) entries: Vec<RawRoute>,
}

#[derive(Debug)]
pub(super) struct RawRoute {
    pub(super) pattern: Option<String>,
    pub(super) controller: Option<String>,
    pub(super) name: Option<String>,
}

#[derive(Debug)]
pub(super) struct RawMiddlewares {
    pub(super) namespace: Option<String>,
    pub(super) entries: Vec<RawMiddleware>,
}

#[derive(Debug)]
pub(super) struct RawMiddleware {
    pub(super) middleware: Option<String>,
    pub(super) annotation: Option<String>,
    pub(super) reversed: bool,
}

/// Load and validate a routes descriptor from an `xml` or `json` file.
///
/// The two formats normalize into the same [`RouteDoc`]; downstream code
/// never sees which one was used. Errors are fatal — see [`RoutesError`].
pub fn load_routes(path: impl AsRef<Path>) -> Result<RouteDoc, RoutesError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|_| RoutesError::ConfigLoad {
        path: path.to_path_buf(),
    })?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let raw = match extension.as_str() {
        "xml" => xml::parse(&content).map_err(|e| RoutesError::Malformed {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?,
        "json" => parse_json(&content, path)?,
        other => {
            return Err(RoutesError::ConfigFormat {
                path: path.to_path_buf(),
                extension: other.to_string(),
            })
        }
    };

    let doc = normalize(raw, path)?;
    debug!(
        path = %path.display(),
        groups = doc.groups.len(),
        middlewares = doc
            .middlewares
            .as_ref()
            .map_or(0, |m| m.declarations.len()),
        "routes descriptor loaded"
    );
    Ok(doc)
}

#[derive(Debug, Deserialize)]
struct JsonDoc {
    routes: Option<JsonSection<JsonRoute>>,
    middlewares: Option<JsonSection<JsonMiddleware>>,
}

#[derive(Debug, Deserialize)]
struct JsonSection<T> {
    namespace: Option<String>,
    #[serde(default = "Vec::new")]
    list: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct JsonRoute {
    pattern: Option<String>,
    controller: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JsonMiddleware {
    middleware: Option<String>,
    annotation: Option<String>,
    #[serde(default)]
    reversed: Option<bool>,
}

fn parse_json(content: &str, path: &Path) -> Result<RawDoc, RoutesError> {
    let doc: JsonDoc = serde_json::from_str(content).map_err(|e| RoutesError::Malformed {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;

    Ok(RawDoc {
        routes: doc.routes.map(|s| RawRoutes {
            namespace: s.namespace,
            entries: s
                .list
                .into_iter()
                .map(|r| RawRoute {
                    pattern: r.pattern,
                    controller: r.controller,
                    name: r.name,
                })
                .collect(),
        }),
        middlewares: doc.middlewares.map(|s| RawMiddlewares {
            namespace: s.namespace,
            entries: s
                .list
                .into_iter()
                .map(|m| RawMiddleware {
                    middleware: m.middleware,
                    annotation: m.annotation,
                    reversed: m.reversed.unwrap_or(false),
                })
                .collect(),
        }),
    })
}

fn normalize(raw: RawDoc, path: &Path) -> Result<RouteDoc, RoutesError> {
    let Some(routes) = raw.routes else {
        return Err(RoutesError::NoRoutes {
            path: path.to_path_buf(),
        });
    };

    let mut groups = Vec::with_capacity(routes.entries.len());
    for (index, entry) in routes.entries.into_iter().enumerate() {
        let missing = |attribute| RoutesError::MissingRouteAttribute { index, attribute };
        groups.push(RouteGroup {
            pattern: entry.pattern.ok_or_else(|| missing("pattern"))?,
            controller: entry.controller.ok_or_else(|| missing("controller"))?,
            name: entry.name.ok_or_else(|| missing("name"))?,
        });
    }

    let middlewares = match raw.middlewares {
        Some(section) => {
            let mut declarations = Vec::with_capacity(section.entries.len());
            for (index, entry) in section.entries.into_iter().enumerate() {
                let Some(middleware) = entry.middleware.filter(|m| !m.is_empty()) else {
                    return Err(RoutesError::MiddlewareMissing { index });
                };
                declarations.push(MiddlewareDecl {
                    middleware,
                    annotation: entry.annotation,
                    reversed: entry.reversed,
                });
            }
            Some(MiddlewareSection {
                namespace: section.namespace.unwrap_or_default(),
                declarations,
            })
        }
        None => None,
    };

    Ok(RouteDoc {
        controllers_namespace: routes.namespace.unwrap_or_default(),
        groups,
        middlewares,
    })
}
