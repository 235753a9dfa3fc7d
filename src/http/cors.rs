use crate::cli::Args;
use axum::http::{header, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

pub fn layer(args: &Args) -> CorsLayer {
    let allow_origin = if args.allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(args.allowed_origins.iter().cloned())
    };
    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([header::CONTENT_TYPE, header::ORIGIN, header::REFERER])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}
