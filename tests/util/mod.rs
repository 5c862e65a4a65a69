//! Helpers for calling handlers directly and reading their responses.

use axum::{
    body::to_bytes,
    http::{header, HeaderMap, HeaderValue},
    response::Response,
};
use axum_extra::extract::cookie::{Key, SignedCookieJar};
use serde::de::DeserializeOwned;

/// Deserialize the JSON body of a response
pub async fn body_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Failed to deserialize response body")
}

/// Cookie jar a browser would send after receiving `response`
pub fn jar_from_response(response: &Response, key: &Key) -> SignedCookieJar {
    let mut headers = HeaderMap::new();

    for set_cookie in response.headers().get_all(header::SET_COOKIE) {
        let set_cookie = set_cookie.to_str().expect("Set-Cookie is not valid UTF-8");
        let pair = set_cookie.split(';').next().unwrap_or_default();

        headers.append(
            header::COOKIE,
            HeaderValue::from_str(pair).expect("Invalid cookie pair"),
        );
    }

    SignedCookieJar::from_headers(&headers, key.clone())
}

/// Whether the response sets or removes the named cookie
pub fn sets_cookie(response: &Response, name: &str) -> bool {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .any(|value| value.starts_with(&format!("{}=", name)))
}

/// Jar as the browser sends it back on its next request after receiving `jar`'s cookies
pub fn browser_jar(jar: SignedCookieJar, key: &Key) -> SignedCookieJar {
    use axum::response::IntoResponse;

    jar_from_response(&jar.into_response(), key)
}
