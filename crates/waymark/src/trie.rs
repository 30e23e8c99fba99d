//! Arena-backed path trie.
//!
//! Nodes live in a single `Vec` and refer to their children by index, so the
//! whole tree sits in one allocation block and node lifetimes never enter
//! the picture. Edge keys are plain segment strings; the router layers its
//! `":"` and `"*"` sentinel keys on top without this module knowing about
//! them.

/// Index of a node in its [`PathTrie`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

/// The root node, present from construction.
pub(crate) const ROOT: NodeId = NodeId(0);

struct TrieNode<T> {
    /// Sorted by key for binary search. Nodes rarely hold more than a few
    /// edges, so a flat vec beats a hash map here.
    edges: Vec<(Box<str>, NodeId)>,
    value: Option<T>,
}

impl<T> TrieNode<T> {
    fn empty() -> Self {
        Self {
            edges: Vec::new(),
            value: None,
        }
    }
}

/// A trie keyed by string segments, with optional terminal payloads.
///
/// Structure is append-only: edges and nodes are only ever added. Payloads
/// are replaced wholesale via [`PathTrie::set_value`].
pub(crate) struct PathTrie<T> {
    nodes: Vec<TrieNode<T>>,
}

impl<T> PathTrie<T> {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![TrieNode::empty()],
        }
    }

    /// Child of `node` along `key`, if present. Lookup only, never mutates.
    pub(crate) fn child(&self, node: NodeId, key: &str) -> Option<NodeId> {
        let edges = &self.nodes[node.0].edges;
        edges
            .binary_search_by(|(k, _)| k.as_ref().cmp(key))
            .ok()
            .map(|at| edges[at].1)
    }

    /// Child of `node` along `key`, created empty when absent.
    pub(crate) fn child_or_insert(&mut self, node: NodeId, key: &str) -> NodeId {
        let found = self.nodes[node.0]
            .edges
            .binary_search_by(|(k, _)| k.as_ref().cmp(key));
        match found {
            Ok(at) => self.nodes[node.0].edges[at].1,
            Err(at) => {
                let child = NodeId(self.nodes.len());
                self.nodes.push(TrieNode::empty());
                self.nodes[node.0].edges.insert(at, (Box::from(key), child));
                child
            }
        }
    }

    /// Terminal payload at `node`.
    pub(crate) fn value(&self, node: NodeId) -> Option<&T> {
        self.nodes[node.0].value.as_ref()
    }

    /// Sets the terminal payload at `node`, returning the displaced one.
    pub(crate) fn set_value(&mut self, node: NodeId, value: T) -> Option<T> {
        self.nodes[node.0].value.replace(value)
    }

    /// All terminal payloads, in node-creation order.
    pub(crate) fn values(&self) -> impl Iterator<Item = &T> {
        self.nodes.iter().filter_map(|node| node.value.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_or_insert_reuses_existing_nodes() {
        let mut trie: PathTrie<u32> = PathTrie::new();
        let first = trie.child_or_insert(ROOT, "users");
        let second = trie.child_or_insert(ROOT, "users");
        assert_eq!(first, second);
        assert_eq!(trie.child(ROOT, "users"), Some(first));
    }

    #[test]
    fn lookup_never_creates() {
        let mut trie: PathTrie<u32> = PathTrie::new();
        assert_eq!(trie.child(ROOT, "ghost"), None);
        trie.child_or_insert(ROOT, "real");
        assert_eq!(trie.child(ROOT, "ghost"), None);
    }

    #[test]
    fn empty_string_is_a_real_key() {
        let mut trie: PathTrie<u32> = PathTrie::new();
        let empty = trie.child_or_insert(ROOT, "");
        let named = trie.child_or_insert(ROOT, "a");
        assert_ne!(empty, named);
        assert_eq!(trie.child(ROOT, ""), Some(empty));
    }

    #[test]
    fn siblings_are_all_reachable() {
        let mut trie: PathTrie<u32> = PathTrie::new();
        let keys = ["zebra", "alpha", "middle", "", ":", "*"];
        let ids: Vec<_> = keys
            .iter()
            .map(|key| trie.child_or_insert(ROOT, key))
            .collect();
        for (key, id) in keys.iter().zip(ids) {
            assert_eq!(trie.child(ROOT, key), Some(id), "key {key:?}");
        }
    }

    #[test]
    fn set_value_displaces_prior_payload() {
        let mut trie: PathTrie<u32> = PathTrie::new();
        let node = trie.child_or_insert(ROOT, "x");
        assert_eq!(trie.set_value(node, 1), None);
        assert_eq!(trie.set_value(node, 2), Some(1));
        assert_eq!(trie.value(node), Some(&2));
    }

    #[test]
    fn values_walks_every_terminal() {
        let mut trie: PathTrie<u32> = PathTrie::new();
        let a = trie.child_or_insert(ROOT, "a");
        let deep = trie.child_or_insert(a, "b");
        trie.set_value(a, 10);
        trie.set_value(deep, 20);
        trie.set_value(ROOT, 0);

        let mut seen: Vec<u32> = trie.values().copied().collect();
        seen.sort_unstable();
        assert_eq!(seen, [0, 10, 20]);
    }
}
