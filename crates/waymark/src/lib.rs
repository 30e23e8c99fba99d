//! Per-method trie URL router.
//!
//! `waymark` resolves an incoming `(method, path)` pair against a set of
//! registered `(method, pattern, handler)` routes, extracting path
//! parameters along the way.
//!
//! # Features
//!
//! - One trie per HTTP method; static, `:named`, and trailing `*` wildcard
//!   segments
//! - Backtracking matcher: static paths win over parameter captures, exact
//!   literals win over wildcards, everything else falls through
//! - Handler-agnostic: handlers are `Fn(C) -> R`, so results (futures
//!   included) are forwarded to the caller untouched
//! - No locks: register with `&mut`, then share for concurrent matching
//!
//! # Example
//!
//! ```
//! use waymark::{Method, PathParams, Router};
//!
//! let mut router = Router::new();
//! router.get("/user/:username", |ctx: PathParams| {
//!     format!("hello, {}", ctx.get("username").unwrap_or("stranger"))
//! });
//!
//! let matched = router.match_route(Method::Get, "/user/ada").expect("route exists");
//! assert_eq!(matched.get_param("username"), Some("ada"));
//! assert_eq!(matched.dispatch(PathParams::new()), "hello, ada");
//! ```

#![warn(unsafe_code)]

mod r#match;
mod router;
mod trie;

pub use r#match::RouteMatch;
pub use router::{Route, Router};

pub use waymark_core::{InvalidMethod, Method, ParamContext, PathParams};
