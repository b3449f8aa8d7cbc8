//! Typed extraction from a request.
//!
//! Handlers receive the whole [`Request`] and say explicitly what they want
//! out of it: `req.extract::<String>()?` for the body text,
//! `req.extract::<HttpEntity<String>>()?` for headers and body together, and
//! so on. Every extractor reads from the already-buffered request, so
//! extraction is synchronous and can run any number of times.

use std::convert::Infallible;

use crate::params::ParamMap;
use crate::request::{Request, TextReader};

/// Types that can be built from a buffered [`Request`].
pub trait FromRequest: Sized {
    type Rejection;

    fn from_request(req: &Request) -> Result<Self, Self::Rejection>;
}

/// The body decoded as UTF-8 (lossy).
impl FromRequest for String {
    type Rejection = Infallible;

    fn from_request(req: &Request) -> Result<Self, Self::Rejection> {
        Ok(req.text().into_owned())
    }
}

impl FromRequest for TextReader {
    type Rejection = Infallible;

    fn from_request(req: &Request) -> Result<Self, Self::Rejection> {
        Ok(TextReader::new(req.body().clone()))
    }
}

/// Every query and form parameter.
impl FromRequest for ParamMap {
    type Rejection = Infallible;

    fn from_request(req: &Request) -> Result<Self, Self::Rejection> {
        Ok(req.params().clone())
    }
}
