//! Incoming HTTP request type.

use std::borrow::Cow;
use std::collections::HashMap;
use std::io::{self, BufRead, Read};

use bytes::buf::Reader;
use bytes::{Buf, Bytes};
use http::header::CONTENT_TYPE;
use http::{HeaderMap, Method, Uri};

use crate::extract::FromRequest;
use crate::params::ParamMap;

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// An incoming HTTP request with its body fully buffered.
///
/// Request parameters are decoded once, up front: the query string first,
/// then a form-encoded body for `POST` requests that declare one.
#[derive(Clone, Debug)]
pub struct Request {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
    path_params: HashMap<String, String>,
    params: ParamMap,
}

impl Request {
    /// Builds a request from an already-collected `http::Request`.
    pub fn from_http(req: http::Request<Bytes>) -> Self {
        let (parts, body) = req.into_parts();

        let mut params = parts
            .uri
            .query()
            .map(|q| ParamMap::from_urlencoded(q.as_bytes()))
            .unwrap_or_default();
        if parts.method == Method::POST && is_form(&parts.headers) {
            params.extend_urlencoded(&body);
        }

        Self {
            method: parts.method,
            uri: parts.uri,
            headers: parts.headers,
            body,
            path_params: HashMap::new(),
            params,
        }
    }

    pub(crate) fn with_path_params(mut self, path_params: HashMap<String, String>) -> Self {
        self.path_params = path_params;
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    pub fn path(&self) -> &str {
        self.uri.path()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Header lookup. Names are case-insensitive; non-UTF-8 values are skipped.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/users/{id}`, `req.param("id")` on `/users/42` returns `Some("42")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.path_params.get(key).map(String::as_str)
    }

    /// First value of a query or form parameter, without any coercion.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.params.first(name)
    }

    /// Every query and form parameter.
    pub fn params(&self) -> &ParamMap {
        &self.params
    }

    /// The body as a raw byte stream.
    pub fn body_stream(&self) -> Reader<Bytes> {
        self.body.clone().reader()
    }

    /// The body decoded as UTF-8; malformed sequences become U+FFFD.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Extracts a typed value, see [`FromRequest`].
    pub fn extract<T: FromRequest>(&self) -> Result<T, T::Rejection> {
        T::from_request(self)
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(FORM_URLENCODED))
}

// ── TextReader ────────────────────────────────────────────────────────────────

/// A buffered text reader over the request body.
pub struct TextReader(Reader<Bytes>);

impl TextReader {
    pub(crate) fn new(body: Bytes) -> Self {
        Self(body.reader())
    }

    /// Reads the rest of the body as UTF-8 text, replacing malformed sequences.
    pub fn read_text(&mut self) -> io::Result<String> {
        let mut raw = Vec::new();
        self.0.read_to_end(&mut raw)?;
        Ok(String::from_utf8_lossy(&raw).into_owned())
    }
}

impl Read for TextReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.0.read(buf)
    }
}

impl BufRead for TextReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.0.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.0.consume(amt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(method: Method, uri: &str, content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = http::Request::builder().method(method).uri(uri);
        if let Some(ct) = content_type {
            builder = builder.header(CONTENT_TYPE, ct);
        }
        Request::from_http(builder.body(Bytes::from_static(body.as_bytes())).unwrap())
    }

    #[test]
    fn query_parameters_are_decoded() {
        let req = request(Method::GET, "/p?username=kim&age=20", None, "");
        assert_eq!(req.parameter("username"), Some("kim"));
        assert_eq!(req.parameter("age"), Some("20"));
        assert_eq!(req.path(), "/p");
    }

    #[test]
    fn form_body_follows_query() {
        let req = request(
            Method::POST,
            "/p?tag=q",
            Some("application/x-www-form-urlencoded; charset=UTF-8"),
            "tag=f&username=kim",
        );
        assert_eq!(req.params().all("tag"), ["q", "f"]);
        assert_eq!(req.parameter("username"), Some("kim"));
    }

    #[test]
    fn non_form_body_is_not_parameters() {
        let req = request(Method::POST, "/p", Some("text/plain"), "username=kim");
        assert!(req.params().is_empty());

        let req = request(Method::PUT, "/p", Some(FORM_URLENCODED), "username=kim");
        assert!(req.params().is_empty());
    }

    #[test]
    fn text_is_lossy_utf8() {
        let req = Request::from_http(
            http::Request::builder()
                .uri("/")
                .body(Bytes::from_static(b"caf\xc3\xa9 \xff"))
                .unwrap(),
        );
        assert_eq!(req.text(), "café \u{fffd}");
    }

    #[test]
    fn body_stream_and_text_reader_see_whole_body() {
        let req = request(Method::POST, "/", None, "line one\nline two");

        let mut raw = Vec::new();
        req.body_stream().read_to_end(&mut raw).unwrap();
        assert_eq!(raw, b"line one\nline two");

        let mut reader = TextReader::new(req.body().clone());
        let mut first = String::new();
        reader.read_line(&mut first).unwrap();
        assert_eq!(first, "line one\n");
        assert_eq!(reader.read_text().unwrap(), "line two");
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let req = request(Method::GET, "/", Some("text/plain"), "");
        assert_eq!(req.header("Content-Type"), Some("text/plain"));
        assert_eq!(req.header("x-missing"), None);
    }
}
