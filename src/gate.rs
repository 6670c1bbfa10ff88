//! Middleware gate evaluation.
//!
//! A middleware declaration attaches to a specific route depending on the
//! annotations of the controller method behind that route. The rule is a
//! three-way gate:
//!
//! - no annotation key on the declaration → always attach,
//! - annotation key present → attach when the annotation is true,
//! - `reversed` additionally attaches when the annotation is false or absent.
//!
//! Unconditional declarations cannot be gated at all; `reversed` cannot make
//! them conditional.

use crate::annotations::AnnotationSet;
use crate::descriptor::MiddlewareDecl;

/// Decide whether `decl` attaches to the route whose method carries `annos`.
///
/// Pure function of its inputs; evaluated once per (declaration, route) pair
/// at startup.
#[must_use]
pub fn should_attach(decl: &MiddlewareDecl, annos: &AnnotationSet) -> bool {
    let Some(key) = decl.annotation.as_deref() else {
        return true;
    };
    // Absent annotation reads as false.
    let value = annos.get(key).unwrap_or(false);
    value || (decl.reversed && !value)
}
