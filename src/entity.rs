//! Header + body wrappers.
//!
//! An [`HttpEntity`] is headers and a body travelling together. It works as an
//! extractor (read the request's headers and decoded body in one go) and as a
//! handler return value (set response headers and body together).
//!
//! The request- and response-specific variants are built by composition, not
//! by extending the base type:
//!
//! ```text
//! HttpEntity<T>     { headers, body }
//! RequestEntity<T>  { method, uri, entity: HttpEntity<T> }
//! ResponseEntity<T> { status, entity: HttpEntity<T> }
//! ```

use http::{HeaderMap, Method, StatusCode, Uri};

use crate::extract::FromRequest;
use crate::request::Request;
use crate::response::{IntoResponse, Response};

/// Headers and a body.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HttpEntity<T> {
    pub headers: HeaderMap,
    pub body: T,
}

impl<T> HttpEntity<T> {
    /// An entity with no headers.
    pub fn new(body: T) -> Self {
        Self { headers: HeaderMap::new(), body }
    }

    pub fn with_headers(body: T, headers: HeaderMap) -> Self {
        Self { headers, body }
    }

    pub fn body(&self) -> &T {
        &self.body
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

impl<T: FromRequest> FromRequest for HttpEntity<T> {
    type Rejection = T::Rejection;

    fn from_request(req: &Request) -> Result<Self, Self::Rejection> {
        Ok(Self::with_headers(T::from_request(req)?, req.headers().clone()))
    }
}

/// The body's own response, with the entity's headers laid over it.
impl<T: IntoResponse> IntoResponse for HttpEntity<T> {
    fn into_response(self) -> Response {
        let mut res = self.body.into_response();
        res.headers_mut().extend(self.headers);
        res
    }
}

/// An entity plus the request line it arrived with.
#[derive(Clone, Debug)]
pub struct RequestEntity<T> {
    pub method: Method,
    pub uri: Uri,
    pub entity: HttpEntity<T>,
}

impl<T> RequestEntity<T> {
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.entity.headers
    }

    pub fn body(&self) -> &T {
        &self.entity.body
    }
}

impl<T: FromRequest> FromRequest for RequestEntity<T> {
    type Rejection = T::Rejection;

    fn from_request(req: &Request) -> Result<Self, Self::Rejection> {
        Ok(Self {
            method: req.method().clone(),
            uri: req.uri().clone(),
            entity: HttpEntity::from_request(req)?,
        })
    }
}

/// An entity plus the status it should be sent with.
#[derive(Clone, Debug)]
pub struct ResponseEntity<T> {
    pub status: StatusCode,
    pub entity: HttpEntity<T>,
}

impl<T> ResponseEntity<T> {
    pub fn new(body: T, status: StatusCode) -> Self {
        Self { status, entity: HttpEntity::new(body) }
    }
}

impl<T: IntoResponse> IntoResponse for ResponseEntity<T> {
    fn into_response(self) -> Response {
        let mut res = self.entity.into_response();
        res.set_status(self.status);
        res
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use http::header::{CONTENT_TYPE, HeaderValue, LOCATION};

    use super::*;

    fn post(body: &'static str) -> Request {
        Request::from_http(
            http::Request::builder()
                .method(Method::POST)
                .uri("/entity?x=1")
                .header("x-client", "test")
                .body(Bytes::from_static(body.as_bytes()))
                .unwrap(),
        )
    }

    #[test]
    fn http_entity_extracts_headers_and_text() {
        let entity: HttpEntity<String> = post("hello").extract().unwrap();
        assert_eq!(entity.body(), "hello");
        assert_eq!(entity.headers()["x-client"], "test");
    }

    #[test]
    fn request_entity_carries_request_line() {
        let entity: RequestEntity<String> = post("").extract().unwrap();
        assert_eq!(entity.method(), Method::POST);
        assert_eq!(entity.uri().path(), "/entity");
        assert_eq!(entity.body(), "");
    }

    #[test]
    fn http_entity_response_keeps_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(LOCATION, HeaderValue::from_static("/next"));
        let res = HttpEntity::with_headers("ok", headers).into_response();
        assert_eq!(res.status_code(), StatusCode::OK);
        assert_eq!(res.headers()[LOCATION], "/next");
        assert_eq!(res.headers()[CONTENT_TYPE], "text/plain; charset=utf-8");
        assert_eq!(res.body(), "ok");
    }

    #[test]
    fn response_entity_sets_status() {
        let res = ResponseEntity::new("made", StatusCode::CREATED).into_response();
        assert_eq!(res.status_code(), StatusCode::CREATED);
        assert_eq!(res.body(), "made");
    }
}
