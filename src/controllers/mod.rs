//! The endpoints and the route table that wires them.
//!
//! | Path | Methods | Handler |
//! |---|---|---|
//! | `/request-body-string-v1` | POST | [`body::string_v1`] |
//! | `/request-body-string-v2` | POST | [`body::string_v2`] |
//! | `/request-body-string-v3` | POST | [`body::string_v3`] |
//! | `/request-body-string-v3v1` | POST | [`body::string_v3v1`] |
//! | `/request-body-string-v4` | POST | [`body::string_v4`] |
//! | `/request-param-v1` | GET, POST | [`param::v1`] |
//! | `/request-param-v2` | GET, POST | [`param::v2`] |
//! | `/request-param-v3` | GET, POST | [`param::v3`] |
//! | `/request-param-v4` | GET, POST | [`param::v4`] |
//! | `/request-param-required` | GET, POST | [`param::required`] |
//! | `/request-param-default` | GET, POST | [`param::default`] |
//! | `/request-param-map` | GET, POST | [`param::map`] |

use http::Method;

use crate::router::Router;

pub mod body;
pub mod param;

const PARAM_METHODS: &[Method] = &[Method::GET, Method::POST];

/// Every endpoint, registered on a fresh router.
pub fn routes() -> Router {
    Router::new()
        .post("/request-body-string-v1", body::string_v1)
        .post("/request-body-string-v2", body::string_v2)
        .post("/request-body-string-v3", body::string_v3)
        .post("/request-body-string-v3v1", body::string_v3v1)
        .post("/request-body-string-v4", body::string_v4)
        .on_many(PARAM_METHODS, "/request-param-v1", param::v1)
        .on_many(PARAM_METHODS, "/request-param-v2", param::v2)
        .on_many(PARAM_METHODS, "/request-param-v3", param::v3)
        .on_many(PARAM_METHODS, "/request-param-v4", param::v4)
        .on_many(PARAM_METHODS, "/request-param-required", param::required)
        .on_many(PARAM_METHODS, "/request-param-default", param::default)
        .on_many(PARAM_METHODS, "/request-param-map", param::map)
}
