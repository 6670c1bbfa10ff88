//! XML descriptor parsing.
//!
//! Route and middleware fields are element attributes:
//!
//! ```xml
//! <config>
//!   <routes namespace="api.">
//!     <route pattern="/books" controller="BookController" name="Book"/>
//!   </routes>
//!   <middlewares namespace="mw.">
//!     <middleware middleware="Auth" annotation="secured" reversed="true"/>
//!   </middlewares>
//! </config>
//! ```
//!
//! The root element name is not significant. Attribute values are strings,
//! so `reversed` is coerced: `"true"`/`"1"` (case-insensitive) read as true,
//! anything else as false — identical to the JSON boolean after
//! normalization.

use serde::Deserialize;

use super::load::{RawDoc, RawMiddleware, RawMiddlewares, RawRoute, RawRoutes};

#[derive(Debug, Deserialize)]
struct XmlDoc {
    routes: Option<XmlRoutes>,
    middlewares: Option<XmlMiddlewares>,
}

#[derive(Debug, Deserialize)]
struct XmlRoutes {
    #[serde(rename = "@namespace")]
    namespace: Option<String>,
    #[serde(rename = "route", default)]
    entries: Vec<XmlRoute>,
}

#[derive(Debug, Deserialize)]
struct XmlRoute {
    #[serde(rename = "@pattern")]
    pattern: Option<String>,
    #[serde(rename = "@controller")]
    controller: Option<String>,
    #[serde(rename = "@name")]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct XmlMiddlewares {
    #[serde(rename = "@namespace")]
    namespace: Option<String>,
    #[serde(rename = "middleware", default)]
    entries: Vec<XmlMiddleware>,
}

#[derive(Debug, Deserialize)]
struct XmlMiddleware {
    #[serde(rename = "@middleware")]
    middleware: Option<String>,
    #[serde(rename = "@annotation")]
    annotation: Option<String>,
    #[serde(rename = "@reversed")]
    reversed: Option<String>,
}

pub(super) fn parse(content: &str) -> Result<RawDoc, quick_xml::DeError> {
    let doc: XmlDoc = quick_xml::de::from_str(content)?;
    Ok(RawDoc {
        routes: doc.routes.map(|s| RawRoutes {
            namespace: s.namespace,
            entries: s
                .entries
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
                .entries
                .into_iter()
                .map(|m| RawMiddleware {
                    middleware: m.middleware,
                    annotation: m.annotation,
                    reversed: truthy(m.reversed.as_deref()),
                })
                .collect(),
        }),
    })
}

fn truthy(value: Option<&str>) -> bool {
    matches!(
        value.map(str::trim),
        Some(v) if v.eq_ignore_ascii_case("true") || v == "1"
    )
}
