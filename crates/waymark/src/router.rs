//! Route registration and matching.

use std::fmt;

use tracing::trace;
use waymark_core::Method;

use crate::r#match::RouteMatch;
use crate::trie::{self, NodeId, PathTrie};

/// Edge key for a single dynamic segment (`:name` in patterns).
const PARAM_KEY: &str = ":";
/// Edge key for the trailing wildcard (`*` in patterns).
const WILDCARD_KEY: &str = "*";

const METHOD_COUNT: usize = Method::ALL.len();

pub(crate) type BoxHandler<C, R> = Box<dyn Fn(C) -> R + Send + Sync>;

/// A registered route: the terminal payload of a trie node.
pub struct Route<C, R> {
    pattern: String,
    param_names: Vec<String>,
    handler: BoxHandler<C, R>,
}

impl<C, R> Route<C, R> {
    /// The pattern text this route was registered under.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Names of the `:param` segments, in pattern order. A bare `:` segment
    /// contributes an empty name.
    #[must_use]
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    pub(crate) fn handler(&self) -> &BoxHandler<C, R> {
        &self.handler
    }
}

impl<C, R> fmt::Debug for Route<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern)
            .field("param_names", &self.param_names)
            .finish_non_exhaustive()
    }
}

/// A per-method trie router.
///
/// `C` is the context type handlers receive and `R` is their return type;
/// the router never looks inside either. Registration takes `&mut self` and
/// matching takes `&self`, so the borrow rules enforce the register-then-serve
/// discipline: finish adding routes, then share the router freely (it is
/// `Send + Sync`) for unsynchronized concurrent matching across workers.
///
/// # Example
///
/// ```
/// use waymark::{Method, PathParams, Router};
///
/// let mut router = Router::new();
/// router
///     .get("/user/:name", |ctx: PathParams| {
///         format!("hi {}", ctx.get("name").unwrap_or("?"))
///     })
///     .get("/health", |_ctx| "ok".to_string());
///
/// let matched = router.match_route(Method::Get, "/user/ada").expect("registered");
/// assert_eq!(matched.dispatch(PathParams::new()), "hi ada");
/// assert!(router.match_route(Method::Post, "/health").is_none());
/// ```
pub struct Router<C, R> {
    /// One lazily-created trie per method, indexed by [`Method::index`].
    tables: [Option<PathTrie<Route<C, R>>>; METHOD_COUNT],
}

impl<C, R> Router<C, R> {
    /// Creates an empty router.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tables: std::array::from_fn(|_| None),
        }
    }

    /// Registers `handler` for `method` and `pattern`.
    ///
    /// Patterns are taken as-is: segments are split on `/` keeping empty
    /// segments, so `/a/b` and `/a/b/` register distinct routes. A `:name`
    /// segment captures one path segment under `name`, and a `*` segment
    /// matches any remaining path. Nothing is validated; registering the
    /// same method and pattern twice silently replaces the earlier handler.
    pub fn add<H>(&mut self, method: Method, pattern: impl Into<String>, handler: H) -> &mut Self
    where
        H: Fn(C) -> R + Send + Sync + 'static,
    {
        let pattern = pattern.into();
        let table = self.tables[method.index()].get_or_insert_with(PathTrie::new);

        let mut param_names = Vec::new();
        let mut node = trie::ROOT;
        for segment in pattern.split('/') {
            if let Some(name) = segment.strip_prefix(':') {
                param_names.push(name.to_owned());
                node = table.child_or_insert(node, PARAM_KEY);
            } else {
                // A `*` segment lands on the wildcard edge here; literal
                // text and sentinel share the key space by design of the
                // pattern syntax.
                node = table.child_or_insert(node, segment);
            }
        }

        trace!(method = %method, pattern = %pattern, "route registered");
        table.set_value(
            node,
            Route {
                pattern,
                param_names,
                handler: Box::new(handler),
            },
        );
        self
    }

    /// Registers a GET route. See [`Router::add`].
    pub fn get<H>(&mut self, pattern: impl Into<String>, handler: H) -> &mut Self
    where
        H: Fn(C) -> R + Send + Sync + 'static,
    {
        self.add(Method::Get, pattern, handler)
    }

    /// Registers a POST route. See [`Router::add`].
    pub fn post<H>(&mut self, pattern: impl Into<String>, handler: H) -> &mut Self
    where
        H: Fn(C) -> R + Send + Sync + 'static,
    {
        self.add(Method::Post, pattern, handler)
    }

    /// Registers a PUT route. See [`Router::add`].
    pub fn put<H>(&mut self, pattern: impl Into<String>, handler: H) -> &mut Self
    where
        H: Fn(C) -> R + Send + Sync + 'static,
    {
        self.add(Method::Put, pattern, handler)
    }

    /// Registers a PATCH route. See [`Router::add`].
    pub fn patch<H>(&mut self, pattern: impl Into<String>, handler: H) -> &mut Self
    where
        H: Fn(C) -> R + Send + Sync + 'static,
    {
        self.add(Method::Patch, pattern, handler)
    }

    /// Registers an OPTIONS route. See [`Router::add`].
    pub fn options<H>(&mut self, pattern: impl Into<String>, handler: H) -> &mut Self
    where
        H: Fn(C) -> R + Send + Sync + 'static,
    {
        self.add(Method::Options, pattern, handler)
    }

    /// Registers a DELETE route. See [`Router::add`].
    pub fn delete<H>(&mut self, pattern: impl Into<String>, handler: H) -> &mut Self
    where
        H: Fn(C) -> R + Send + Sync + 'static,
    {
        self.add(Method::Delete, pattern, handler)
    }

    /// Resolves `path` against the routes registered for `method`.
    ///
    /// Returns `None` when the method has no routes at all or when no
    /// registered pattern covers the path. Matching is a read-only
    /// traversal: it never creates trie nodes and never blocks.
    ///
    /// When several patterns could cover the path, static segments win over
    /// `:param` captures and exact literals win over `*`, with full
    /// backtracking in between: a static prefix that dead-ends mid-path does
    /// not hide a viable parameterized alternative.
    #[must_use]
    pub fn match_route<'a>(&'a self, method: Method, path: &'a str) -> Option<RouteMatch<'a, C, R>> {
        let table = self.tables[method.index()].as_ref()?;
        let segments: Vec<&str> = path.split('/').collect();

        // Pending alternatives, popped most-recent-first. Alternatives are
        // pushed lowest priority first so each node explores literal, then
        // dynamic, then wildcard.
        let mut pending: Vec<(NodeId, Vec<&str>, usize)> = vec![(trie::ROOT, Vec::new(), 0)];

        while let Some((node, values, index)) = pending.pop() {
            if index == segments.len() {
                if let Some(route) = table.value(node) {
                    trace!(method = %method, path, pattern = route.pattern(), "route matched");
                    return Some(RouteMatch::new(route, values));
                }
                // End of the path on a node nothing terminates at; try the
                // next alternative.
                continue;
            }

            let segment = segments[index];
            if let Some(wildcard) = table.child(node, WILDCARD_KEY) {
                // The wildcard consumes the rest of the path and captures
                // nothing.
                pending.push((wildcard, values.clone(), segments.len()));
            }
            if let Some(dynamic) = table.child(node, PARAM_KEY) {
                let mut captured = values.clone();
                captured.push(segment);
                pending.push((dynamic, captured, index + 1));
            }
            if let Some(literal) = table.child(node, segment) {
                pending.push((literal, values, index + 1));
            }
        }

        trace!(method = %method, path, "no route matched");
        None
    }

    /// Registered `(method, pattern)` pairs, sorted for stable output.
    #[must_use]
    pub fn routes(&self) -> Vec<(Method, &str)> {
        let mut out = Vec::new();
        for (table, method) in self.tables.iter().zip(Method::ALL) {
            if let Some(table) = table {
                out.extend(table.values().map(|route| (method, route.pattern())));
            }
        }
        out.sort_unstable_by_key(|&(method, pattern)| (method.index(), pattern));
        out
    }

    /// Number of registered routes.
    #[must_use]
    pub fn route_count(&self) -> usize {
        self.tables
            .iter()
            .flatten()
            .map(|table| table.values().count())
            .sum()
    }

    /// Whether no routes have been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.route_count() == 0
    }
}

impl<C, R> Default for Router<C, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, R> fmt::Debug for Router<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.routes())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waymark_core::PathParams;

    #[test]
    fn root_and_empty_patterns_are_distinct() {
        let mut router = Router::new();
        router.get("/", |_ctx: PathParams| "root");
        router.get("", |_ctx: PathParams| "empty");

        let slash = router.match_route(Method::Get, "/").expect("slash");
        assert_eq!(slash.dispatch(PathParams::new()), "root");
        let empty = router.match_route(Method::Get, "").expect("empty");
        assert_eq!(empty.dispatch(PathParams::new()), "empty");
    }

    #[test]
    fn double_slash_segments_match_literally() {
        let mut router = Router::new();
        router.get("/a//b", |_ctx: PathParams| "doubled");

        assert!(router.match_route(Method::Get, "/a//b").is_some());
        assert!(router.match_route(Method::Get, "/a/b").is_none());
    }

    #[test]
    fn dynamic_segment_captures_empty_text() {
        let mut router = Router::new();
        router.get("/a/:x/b", |_ctx: PathParams| ());

        let matched = router.match_route(Method::Get, "/a//b").expect("matched");
        assert_eq!(matched.get_param("x"), Some(""));
    }

    #[test]
    fn bare_colon_pattern_binds_empty_name() {
        let mut router = Router::new();
        router.get("/x/:", |_ctx: PathParams| ());

        let matched = router.match_route(Method::Get, "/x/42").expect("matched");
        assert_eq!(matched.get_param(""), Some("42"));
        assert_eq!(matched.route().param_names(), [String::new()]);
    }

    #[test]
    fn literal_colon_segment_walks_sentinel_edge_without_capture() {
        let mut router = Router::new();
        router.get("/x/:name", |_ctx: PathParams| ());

        let matched = router.match_route(Method::Get, "/x/:").expect("matched");
        assert_eq!(matched.get_param("name"), None);
        assert_eq!(matched.params().count(), 0);
    }

    #[test]
    fn literal_star_path_walks_wildcard_edge() {
        let mut router = Router::new();
        router.get("/files/*", |_ctx: PathParams| ());

        let matched = router.match_route(Method::Get, "/files/*").expect("matched");
        assert_eq!(matched.params().count(), 0);
        assert_eq!(matched.pattern(), "/files/*");
    }

    #[test]
    fn routes_lists_sorted_pairs_without_duplicates() {
        let mut router = Router::new();
        router
            .post("/b", |_ctx: PathParams| ())
            .get("/z", |_ctx| ())
            .get("/a", |_ctx| ())
            .get("/a", |_ctx| ());

        assert_eq!(
            router.routes(),
            [
                (Method::Get, "/a"),
                (Method::Get, "/z"),
                (Method::Post, "/b"),
            ]
        );
        assert_eq!(router.route_count(), 3);
    }

    #[test]
    fn empty_router_matches_nothing() {
        let router: Router<PathParams, ()> = Router::new();
        assert!(router.is_empty());
        assert!(router.match_route(Method::Get, "/").is_none());
        assert!(router.routes().is_empty());
    }

    #[test]
    fn debug_output_names_registered_routes() {
        let mut router = Router::new();
        router.get("/status", |_ctx: PathParams| ());
        let rendered = format!("{router:?}");
        assert!(rendered.contains("/status"), "got {rendered}");
    }
}
