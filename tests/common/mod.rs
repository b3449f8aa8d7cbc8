#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use bytes::Bytes;
use http::Method;
use http::header::CONTENT_TYPE;
use reqread::{Request, Response, controllers};
use tracing::instrument::WithSubscriber;

/// Log output captured from a scoped fmt subscriber.
#[derive(Clone, Default)]
pub struct Logs(Arc<Mutex<Vec<u8>>>);

impl Logs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Logs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `req` through the full route table and returns the response together
/// with everything logged while handling it.
pub async fn handle(req: Request) -> (Response, String) {
    let logs = Logs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    let router = controllers::routes();
    let res = router.handle(req).with_subscriber(subscriber).await;
    (res, logs.contents())
}

pub fn request(method: Method, uri: &str, content_type: Option<&str>, body: impl Into<Bytes>) -> Request {
    let mut builder = http::Request::builder().method(method).uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header(CONTENT_TYPE, ct);
    }
    Request::from_http(builder.body(body.into()).unwrap())
}

pub fn get(uri: &str) -> Request {
    request(Method::GET, uri, None, Bytes::new())
}

pub fn post(uri: &str, body: impl Into<Bytes>) -> Request {
    request(Method::POST, uri, Some("text/plain"), body)
}

pub fn post_form(uri: &str, form: &'static str) -> Request {
    request(Method::POST, uri, Some("application/x-www-form-urlencoded"), form)
}

pub fn body_text(res: &Response) -> String {
    String::from_utf8_lossy(res.body()).into_owned()
}
