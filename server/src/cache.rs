use axum::http::{header, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;

pub fn cache_control(max_age: u32) -> HeaderValue {
    // Only ASCII digits get formatted in, which is always a valid header value:
    HeaderValue::from_str(&format!("public, max-age={}", max_age))
        .unwrap_or_else(|_| HeaderValue::from_static("no-cache"))
}

/// Adds `Cache-Control` to the routes already on `router` and nothing else.
///
/// The fallback serving `/pkg/*` must be installed after this: the JS and
/// WASM bundles keep their names across deploys, so caching them could pair a
/// fresh page with a stale bundle.
pub fn with_cache_control<S>(router: axum::Router<S>, max_age: u32) -> axum::Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let middleware = tower::ServiceBuilder::new().layer(SetResponseHeaderLayer::if_not_present(
        header::CACHE_CONTROL,
        cache_control(max_age),
    ));
    router.route_layer(middleware)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn router() -> axum::Router {
        let pages = axum::Router::new().route("/", axum::routing::get(|| async { "page" }));
        with_cache_control(pages, 60)
            .fallback(|| async { (StatusCode::NOT_FOUND, "asset") })
    }

    async fn get(uri: &str) -> axum::response::Response {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        router().oneshot(request).await.unwrap()
    }

    #[test]
    fn header_value() {
        assert_eq!(cache_control(60), "public, max-age=60");
        assert_eq!(cache_control(0), "public, max-age=0");
    }

    #[tokio::test]
    async fn page_is_cacheable() {
        let response = get("/").await;
        assert_eq!(StatusCode::OK, response.status());
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "public, max-age=60"
        );
    }

    #[tokio::test]
    async fn bundles_are_left_alone() {
        for uri in ["/pkg/portfolio.js", "/pkg/portfolio.wasm", "/pkg/portfolio.css"] {
            let response = get(uri).await;
            assert!(response.headers().get(header::CACHE_CONTROL).is_none(), "{uri}");
        }
    }
}
