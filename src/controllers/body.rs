//! Reading the request body as text.
//!
//! Five handlers with the same observable behaviour: log the body decoded as
//! UTF-8 under `message_body`, answer `"ok"`. They differ in how the text is
//! obtained and how the answer is produced, from raw byte streams up to a
//! directly extracted `String`.

use std::io::{Read, Write};

use http::StatusCode;
use tracing::info;

use crate::entity::{HttpEntity, RequestEntity, ResponseEntity};
use crate::error::Error;
use crate::request::{Request, TextReader};
use crate::response::{Response, ResponseWriter};

/// Raw byte stream in, raw bytes out; both ends encoded by hand.
pub async fn string_v1(req: Request) -> Result<Response, Error> {
    let mut stream = req.body_stream();
    let mut raw = Vec::new();
    stream.read_to_end(&mut raw)?;
    let message_body = String::from_utf8_lossy(&raw);

    info!(message_body = %message_body, "read request body");

    let mut out = Vec::new();
    out.write_all("ok".as_bytes())?;
    Ok(Response::builder().body(out))
}

/// A text reader and a response writer handed out by the framework.
pub async fn string_v2(req: Request) -> Result<ResponseWriter, Error> {
    let mut reader: TextReader = req.extract()?;
    let message_body = reader.read_text()?;

    info!(message_body = %message_body, "read request body");

    let mut writer = ResponseWriter::new();
    writer.write_all(b"ok")?;
    Ok(writer)
}

/// Headers and body in, a fresh entity out.
pub async fn string_v3(req: Request) -> Result<HttpEntity<&'static str>, Error> {
    let entity: HttpEntity<String> = req.extract()?;

    info!(message_body = %entity.body(), "read request body");

    Ok(HttpEntity::new("ok"))
}

/// The request-side entity in, a response entity with an explicit status out.
pub async fn string_v3v1(req: Request) -> Result<ResponseEntity<&'static str>, Error> {
    let entity: RequestEntity<String> = req.extract()?;

    info!(message_body = %entity.body(), "read request body");

    Ok(ResponseEntity::new("ok", StatusCode::OK))
}

/// The body text itself, nothing wrapped around it.
pub async fn string_v4(req: Request) -> Result<&'static str, Error> {
    let message_body: String = req.extract()?;

    info!(message_body = %message_body, "read request body");

    Ok("ok")
}
