//! Route pattern extraction utilities.

use actix_web::HttpRequest;

/// Extract the matched route pattern from a request.
///
/// Path parameters stay templated (`/api/weather/{city}`) so metric label
/// cardinality does not grow with user input. Only meaningful once routing
/// has run, i.e. on the response side of a middleware.
pub fn extract_route_pattern(req: &HttpRequest) -> String {
    req.match_pattern()
        .unwrap_or_else(|| "unmatched".to_string())
}
