//! Route matching result and dispatch.

use std::fmt;

use waymark_core::ParamContext;

use crate::router::Route;

/// A successful match: the route plus the values its dynamic segments
/// captured, in path order.
///
/// Dispatching consumes a caller-supplied context: captured values are
/// written into the context's parameter map first, then the handler runs
/// with it. The handler's result comes back untouched; if it is a future,
/// deciding where (and whether) to await it is the caller's business.
pub struct RouteMatch<'a, C, R> {
    route: &'a Route<C, R>,
    values: Vec<&'a str>,
}

impl<'a, C, R> RouteMatch<'a, C, R> {
    pub(crate) fn new(route: &'a Route<C, R>, values: Vec<&'a str>) -> Self {
        Self { route, values }
    }

    /// The matched route.
    #[must_use]
    pub fn route(&self) -> &'a Route<C, R> {
        self.route
    }

    /// The pattern the matched route was registered under.
    #[must_use]
    pub fn pattern(&self) -> &'a str {
        self.route.pattern()
    }

    /// Name/value pairs in capture order.
    ///
    /// The pairing stops at the shorter list; the two only diverge when a
    /// literal path segment spelled `:` walked a sentinel edge without
    /// capturing.
    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.route
            .param_names()
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// A captured value, by parameter name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&str> {
        self.params().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    /// Binds the captured parameters into `context` and invokes the handler.
    ///
    /// Parameters are written in capture order, so a later duplicate name
    /// overwrites an earlier one. The handler's result is returned
    /// unmodified; asynchronous results are forwarded, never awaited here.
    pub fn dispatch(&self, mut context: C) -> R
    where
        C: ParamContext,
    {
        let params = context.path_params_mut();
        for (name, value) in self.route.param_names().iter().zip(&self.values) {
            params.insert(name.clone(), *value);
        }
        (self.route.handler())(context)
    }
}

impl<C, R> fmt::Debug for RouteMatch<'_, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteMatch")
            .field("pattern", &self.pattern())
            .field("values", &self.values)
            .finish()
    }
}
