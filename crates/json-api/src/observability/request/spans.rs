//! Route labels for spans and metrics.

/// Label shared by every path that names no mounted route.
pub(super) const UNMATCHED_ROUTE: &str = "unmatched";

/// Map a request path onto the fixed set of route templates, so the label
/// space stays bounded whatever clients send.
pub(super) fn route_label(path: &str) -> &'static str {
    let segments: Vec<&str> = path.split('/').filter(|segment| !segment.is_empty()).collect();

    match segments.as_slice() {
        ["healthcheck"] => "/healthcheck",
        ["metrics"] => "/metrics",
        ["api", "products"] => "/api/products",
        ["api", "products", _] => "/api/products/{product}",
        ["api-doc", "openapi.json"] => "/api-doc/openapi.json",
        ["docs", ..] => "/docs",
        _ => UNMATCHED_ROUTE,
    }
}
