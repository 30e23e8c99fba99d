//! Shared vocabulary types for the waymark router.
//!
//! This crate carries the types that cross the boundary between the router
//! and the HTTP layer embedding it: the [`Method`] enumeration, the
//! [`PathParams`] map of captured path parameters, and the [`ParamContext`]
//! seam the dispatcher writes through before handing control to a handler.

#![forbid(unsafe_code)]

mod context;
mod method;
mod params;

pub use context::ParamContext;
pub use method::{InvalidMethod, Method};
pub use params::PathParams;
