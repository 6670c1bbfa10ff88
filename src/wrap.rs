//! Response wrapping helper.
//!
//! A reusable middleware building block: run a downstream handler to
//! completion, then re-emit its response with literal content added before
//! and after the body. The wrapped response is constructed from the
//! downstream response's parts, so status code, headers, and protocol
//! version always carry forward — callers rely on that structure.

use http::Response;

/// Wrap an already produced response body with `before` and a lazily
/// computed suffix. `produce_after` returning `None` reads as an empty
/// suffix.
pub fn wrap_body<F>(downstream: Response<String>, before: &str, produce_after: F) -> Response<String>
where
    F: FnOnce() -> Option<String>,
{
    let (parts, body) = downstream.into_parts();
    let after = produce_after().unwrap_or_default();
    Response::from_parts(parts, format!("{before}{body}{after}"))
}

/// Invoke `handler` on `request` and wrap its response.
///
/// The suffix producer runs after the handler, so it can observe any side
/// effects the handler had.
pub fn wrap<Req, H, F>(request: Req, handler: H, before: &str, produce_after: F) -> Response<String>
where
    H: FnOnce(Req) -> Response<String>,
    F: FnOnce() -> Option<String>,
{
    wrap_body(handler(request), before, produce_after)
}
