//! Reading `username` and `age` from query or form parameters.
//!
//! Each handler logs the values under `username` and `age` (absent values as
//! `null`) and answers `"ok"`. They differ in how the values are bound, from a
//! raw lookup with hand parsing to declarative [`Param`] rules and the whole
//! [`ParamMap`].

use std::io::Write;

use tracing::{debug, info};

use crate::binding::{Nullable, Param};
use crate::bind;
use crate::error::Error;
use crate::params::ParamMap;
use crate::request::Request;
use crate::response::ResponseWriter;

/// Raw lookup by literal name and hand parsing. An absent or malformed `age`
/// is not a binding error, it propagates as a plain failure.
pub async fn v1(req: Request) -> Result<ResponseWriter, Error> {
    let username = req.parameter("username");
    let age: i32 = req.parameter("age").ok_or(Error::AbsentParameter("age"))?.parse()?;

    info!(username = %Nullable(&username), age, "read request parameters");

    let mut writer = ResponseWriter::new();
    writer.write_all(b"ok")?;
    Ok(writer)
}

const USERNAME: Param = Param::new("username");
const AGE: Param = Param::new("age");

/// Explicit rules, bound into locals whose names differ from the keys.
pub async fn v2(req: Request) -> Result<&'static str, Error> {
    let member_name: String = USERNAME.bind(req.params())?;
    let member_age: i32 = AGE.bind(req.params())?;

    info!(username = %member_name, age = member_age, "read request parameters");

    Ok("ok")
}

/// The local's own name is the parameter key.
pub async fn v3(req: Request) -> Result<&'static str, Error> {
    bind!(req.params() => username: String, age: i32);

    info!(username = %username, age, "read request parameters");

    Ok("ok")
}

/// Plain values with no marking at all: every rule is optional. A missing
/// `username` logs `null`; a missing `age` has no null to fall back to.
pub async fn v4(req: Request) -> Result<&'static str, Error> {
    bind!(optional req.params() => username: Option<String>, age: i32);

    info!(username = %Nullable(&username), age, "read request parameters");

    Ok("ok")
}

const REQUIRED_USERNAME: Param = Param::new("username").required(true);
const OPTIONAL_AGE: Param = Param::new("age").required(false);

/// `username` must be present; `age` may be absent.
pub async fn required(req: Request) -> Result<&'static str, Error> {
    let username: String = REQUIRED_USERNAME.bind(req.params())?;
    let age: Option<i32> = OPTIONAL_AGE.bind(req.params())?;

    info!(username = %username, age = %Nullable(&age), "read request parameters");

    Ok("ok")
}

// Required together with a default: the default always fills in first, so the
// required check never fires.
const DEFAULT_USERNAME: Param = Param::new("username").required(true).default_value("guest");
const DEFAULT_AGE: Param = Param::new("age").required(false).default_value("-1");

/// Missing or empty values fall back to `"guest"` and `-1`.
pub async fn default(req: Request) -> Result<&'static str, Error> {
    let username: String = DEFAULT_USERNAME.bind(req.params())?;
    let age: i32 = DEFAULT_AGE.bind(req.params())?;

    info!(username = %username, age, "read request parameters");

    Ok("ok")
}

/// The whole parameter set; `username` and `age` are read raw, uncoerced.
pub async fn map(req: Request) -> Result<&'static str, Error> {
    let params: ParamMap = req.extract()?;
    let username = params.first("username");
    let age = params.first("age");

    info!(username = %Nullable(&username), age = %Nullable(&age), "read request parameters");
    debug!(params = %params, "all request parameters");

    Ok("ok")
}
