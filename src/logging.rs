//! Middleware for logging requests and responses.

use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::{request, response},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::Error;

/// The number of bytes of a request or response body logged at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If the body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and the full body is logged at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body_bytes = match read_body(body).await {
        Ok(bytes) => bytes,
        Err(error) => return error.into_response(),
    };
    log_request(&parts, &String::from_utf8_lossy(&body_bytes));

    let response = next.run(Request::from_parts(parts, body_bytes.into())).await;

    let (parts, body) = response.into_parts();
    let body_bytes = match read_body(body).await {
        Ok(bytes) => bytes,
        Err(error) => return error.into_response(),
    };
    log_response(&parts, &String::from_utf8_lossy(&body_bytes));

    Response::from_parts(parts, body_bytes.into())
}

async fn read_body(body: Body) -> Result<Bytes, Error> {
    axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(|error| Error::Validation(format!("could not read body: {error}")))
}

/// Cut `body` to at most [LOG_BODY_LENGTH_LIMIT] bytes without splitting a
/// character. Returns `None` if the body is already short enough.
fn truncate_body(body: &str) -> Option<&str> {
    if body.len() <= LOG_BODY_LENGTH_LIMIT {
        return None;
    }

    let mut end = LOG_BODY_LENGTH_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }

    Some(&body[..end])
}

fn log_request(parts: &request::Parts, body: &str) {
    match truncate_body(body) {
        Some(truncated) => {
            tracing::info!("Received request: {parts:#?}\nbody: {truncated}...");
            tracing::debug!("Full request body: {body:?}");
        }
        None => tracing::info!("Received request: {parts:#?}\nbody: {body:?}"),
    }
}

fn log_response(parts: &response::Parts, body: &str) {
    match truncate_body(body) {
        Some(truncated) => {
            tracing::info!("Sending response: {parts:#?}\nbody: {truncated}...");
            tracing::debug!("Full response body: {body:?}");
        }
        None => tracing::info!("Sending response: {parts:#?}\nbody: {body:?}"),
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, middleware};
    use axum_test::TestServer;

    use crate::{
        build_router,
        logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware, truncate_body},
        test_utils::get_test_state,
    };

    #[test]
    fn short_bodies_are_not_truncated() {
        assert_eq!(truncate_body("{}"), None);
        assert_eq!(truncate_body(&"a".repeat(LOG_BODY_LENGTH_LIMIT)), None);
    }

    #[test]
    fn long_bodies_are_truncated_on_char_boundary() {
        let body = format!("{}€€", "a".repeat(LOG_BODY_LENGTH_LIMIT - 1));

        let truncated = truncate_body(&body).expect("body should be truncated");

        assert_eq!(truncated, "a".repeat(LOG_BODY_LENGTH_LIMIT - 1));
    }

    #[tokio::test]
    async fn middleware_passes_bodies_through() {
        let (state, _data_path) = get_test_state();
        let app = build_router(state).layer(middleware::from_fn(logging_middleware));
        let server = TestServer::new(app);

        let response = server
            .post("/transactions")
            .json(&serde_json::json!({
                "amount": -12.5,
                "description": "A description long enough to be cut off in the info log",
                "date": "2024-01-20",
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        assert_eq!(response.json::<serde_json::Value>()["amount"], -12.5);
    }
}
