//! Declarative parameter binding.
//!
//! A [`Param`] is an extraction rule: a parameter name, a required flag and an
//! optional default value. Binding a rule against a [`ParamMap`] looks up the
//! first value under the name and coerces it into the target type through
//! [`FromParam`]. Every rule is evaluated the same way:
//!
//! 1. take the first value under the name;
//! 2. if a default is configured and the value is absent *or empty*, use the
//!    default instead (so a default makes the required flag unreachable);
//! 3. if there is still no value, a required rule fails with
//!    [`BindError::Missing`], an optional one yields the target's null value
//!    (`None` for `Option<T>`), or [`BindError::NotNullable`] when the target
//!    has no null value;
//! 4. convert the value; a failed conversion is [`BindError::TypeMismatch`].
//!    Numeric targets convert the empty string to null, which is then treated
//!    like a missing value.
//!
//! ```rust
//! use reqread::{Param, ParamMap};
//!
//! const USERNAME: Param = Param::new("username").default_value("guest");
//! const AGE: Param = Param::new("age").optional();
//!
//! let params = ParamMap::from_urlencoded(b"username=&age=20");
//! let username: String = USERNAME.bind(&params).unwrap();
//! let age: Option<i32> = AGE.bind(&params).unwrap();
//! assert_eq!(username, "guest");
//! assert_eq!(age, Some(20));
//! ```

use std::any::type_name;
use std::convert::Infallible;
use std::fmt;

use http::StatusCode;

use crate::params::ParamMap;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Why a [`Param`] rule could not produce a value.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    #[error("required parameter `{name}` is not present")]
    Missing { name: &'static str },

    #[error("parameter `{name}` could not be converted from `{value}` to `{target}`: {source}")]
    TypeMismatch {
        name: &'static str,
        value: String,
        target: &'static str,
        #[source]
        source: BoxError,
    },

    #[error("optional parameter `{name}` is absent but `{target}` cannot represent absence")]
    NotNullable {
        name: &'static str,
        target: &'static str,
    },
}

impl BindError {
    /// Client mistakes are `400`; asking a non-nullable target for null is a
    /// handler declaration bug and reports `500`.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Missing { .. } | Self::TypeMismatch { .. } => StatusCode::BAD_REQUEST,
            Self::NotNullable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// ── FromParam ─────────────────────────────────────────────────────────────────

/// Coercion of a raw parameter string into a typed value.
pub trait FromParam: Sized {
    type Err: std::error::Error + Send + Sync + 'static;

    /// Converts a present value. `Ok(None)` means the value converted to null.
    fn from_param(raw: &str) -> Result<Option<Self>, Self::Err>;

    /// The value used when nothing is bound. `None` if the type has no null.
    fn null() -> Option<Self> {
        None
    }
}

impl FromParam for String {
    type Err = Infallible;

    fn from_param(raw: &str) -> Result<Option<Self>, Self::Err> {
        Ok(Some(raw.to_owned()))
    }
}

macro_rules! from_param_int {
    ($($ty:ty),+) => {$(
        impl FromParam for $ty {
            type Err = std::num::ParseIntError;

            fn from_param(raw: &str) -> Result<Option<Self>, Self::Err> {
                let raw = raw.trim();
                if raw.is_empty() {
                    return Ok(None);
                }
                raw.parse().map(Some)
            }
        }
    )+};
}

from_param_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl<T: FromParam> FromParam for Option<T> {
    type Err = T::Err;

    fn from_param(raw: &str) -> Result<Option<Self>, Self::Err> {
        T::from_param(raw).map(|value| value.map(Some))
    }

    fn null() -> Option<Self> {
        Some(None)
    }
}

// ── Param ─────────────────────────────────────────────────────────────────────

/// One extraction rule. Build it in a `const` next to the handler that uses it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Param {
    name: &'static str,
    required: bool,
    default: Option<&'static str>,
}

impl Param {
    /// A required parameter with no default.
    pub const fn new(name: &'static str) -> Self {
        Self { name, required: true, default: None }
    }

    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Substituted when the parameter is absent or empty.
    pub const fn default_value(mut self, value: &'static str) -> Self {
        self.default = Some(value);
        self
    }

    pub const fn is_required(&self) -> bool {
        self.required
    }

    pub fn bind<T: FromParam>(&self, params: &ParamMap) -> Result<T, BindError> {
        let raw = match (params.first(self.name), self.default) {
            (None, Some(default)) => Some(default),
            (Some(""), Some(default)) => Some(default),
            (raw, _) => raw,
        };

        let Some(raw) = raw else {
            return self.unbound();
        };

        match T::from_param(raw) {
            Ok(Some(value)) => Ok(value),
            Ok(None) => self.unbound(),
            Err(e) => Err(BindError::TypeMismatch {
                name: self.name,
                value: raw.to_owned(),
                target: type_name::<T>(),
                source: Box::new(e),
            }),
        }
    }

    fn unbound<T: FromParam>(&self) -> Result<T, BindError> {
        if self.required {
            return Err(BindError::Missing { name: self.name });
        }
        T::null().ok_or(BindError::NotNullable { name: self.name, target: type_name::<T>() })
    }
}

/// Binds handler locals by their own names.
///
/// `bind!(params => username: String, age: i32)` declares `username` and `age`
/// as required rules keyed by the local names. The `optional` form declares
/// non-required rules, for handlers that take plain values without marking
/// them. Failures propagate with `?`.
#[macro_export]
macro_rules! bind {
    (optional $params:expr => $($name:ident : $ty:ty),+ $(,)?) => {
        $(
            let $name: $ty = $crate::Param::new(stringify!($name)).optional().bind($params)?;
        )+
    };
    ($params:expr => $($name:ident : $ty:ty),+ $(,)?) => {
        $(
            let $name: $ty = $crate::Param::new(stringify!($name)).bind($params)?;
        )+
    };
}

// ── Logging helper ────────────────────────────────────────────────────────────

/// Displays an optional value, or `null` when it is absent.
pub struct Nullable<'a, T>(pub &'a Option<T>);

impl<T: fmt::Display> fmt::Display for Nullable<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("null"),
        }
    }
}
