//! Per-request tracing span.

use std::time::Instant;

use tracing::{Instrument, debug, info_span};

use crate::request::Request;
use crate::response::Response;
use crate::router::Router;

/// Dispatches `req` through `router` inside a `request` span.
///
/// Everything the handler logs inherits the span's `method` and `path`.
pub async fn trace(router: &Router, req: Request) -> Response {
    let span = info_span!("request", method = %req.method(), path = %req.path());

    async move {
        let start = Instant::now();
        let res = router.handle(req).await;
        debug!(
            status = res.status_code().as_u16(),
            latency_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX),
            "request completed"
        );
        res
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use tracing::instrument::WithSubscriber;

    use super::*;

    #[derive(Clone, Default)]
    struct Buf(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Buf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn completion_line_carries_status_and_latency() {
        let buf = Buf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .with_max_level(tracing::Level::DEBUG)
            .finish();

        let router = Router::new().get("/ping", |_req: Request| async { "pong" });
        let req = Request::from_http(
            http::Request::builder().uri("/ping").body(bytes::Bytes::new()).unwrap(),
        );
        let res = trace(&router, req).with_subscriber(subscriber).await;
        assert_eq!(res.status_code(), http::StatusCode::OK);

        let logs = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        let line = logs.lines().find(|l| l.contains("request completed")).unwrap();
        assert!(line.contains("request{method=GET path=/ping}"), "{line}");
        assert!(line.contains("status=200"), "{line}");
        assert!(line.contains("latency_us="), "{line}");
    }
}
