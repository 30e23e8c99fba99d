//! HTTP method enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The HTTP methods routes can be registered under.
///
/// This is a closed set: registration and matching work against exactly
/// these six methods, and matching a method with no registered routes is an
/// ordinary miss, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Options,
    Patch,
}

impl Method {
    /// Every method, in table order.
    pub const ALL: [Method; 6] = [
        Method::Get,
        Method::Post,
        Method::Put,
        Method::Delete,
        Method::Options,
        Method::Patch,
    ];

    /// The canonical uppercase token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Options => "OPTIONS",
            Method::Patch => "PATCH",
        }
    }

    /// Stable position of this method in [`Method::ALL`].
    ///
    /// Handy for method-indexed tables.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Method::Get => 0,
            Method::Post => 1,
            Method::Put => 2,
            Method::Delete => 3,
            Method::Options => 4,
            Method::Patch => 5,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = InvalidMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            "OPTIONS" => Ok(Method::Options),
            "PATCH" => Ok(Method::Patch),
            _ => Err(InvalidMethod {
                token: s.to_owned(),
            }),
        }
    }
}

/// Error returned when parsing an unrecognized method token.
///
/// Method tokens are case-sensitive, so `"get"` is rejected along with
/// anything outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid HTTP method: {token:?}")]
pub struct InvalidMethod {
    token: String,
}

impl InvalidMethod {
    /// The rejected token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_tokens() {
        for method in Method::ALL {
            assert_eq!(method.as_str().parse::<Method>(), Ok(method));
        }
    }

    #[test]
    fn rejects_unknown_and_lowercase_tokens() {
        let err = "get".parse::<Method>().unwrap_err();
        assert_eq!(err.token(), "get");
        assert!("HEAD".parse::<Method>().is_err());
        assert!("".parse::<Method>().is_err());
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Method::Patch.to_string(), "PATCH");
        assert_eq!(format!("{}", Method::Get), Method::Get.as_str());
    }

    #[test]
    fn index_agrees_with_table_order() {
        for (expected, method) in Method::ALL.into_iter().enumerate() {
            assert_eq!(method.index(), expected);
        }
    }

    #[test]
    fn serde_uses_uppercase_tokens() {
        let json = serde_json::to_string(&Method::Delete).expect("serialize");
        assert_eq!(json, "\"DELETE\"");
        let back: Method = serde_json::from_str("\"OPTIONS\"").expect("deserialize");
        assert_eq!(back, Method::Options);
    }
}
