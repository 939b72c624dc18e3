//! Prefix trie over normalized display names.
//!
//! Keys are normalized with [`roam_core::name::normalize`]; each terminal
//! key remembers every distinct original display name that produced it, so a
//! prefix query returns the names as the extract spelled them.

use rustc_hash::FxHashMap;

use roam_core::normalize;

#[derive(Default)]
struct TrieNode {
    children: FxHashMap<char, TrieNode>,
    terminal: bool,
}

/// Case- and punctuation-insensitive prefix index of display names.
#[derive(Default)]
pub struct PrefixTrie {
    root: TrieNode,
    /// Normalized key → the distinct display-name variants behind it.
    names: FxHashMap<String, Vec<String>>,
}

impl PrefixTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct normalized keys.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Index `name` under its normalized key.
    ///
    /// A new variant of an existing key is appended; re-adding an identical
    /// name is a no-op, so prior variants are never lost or duplicated.
    pub fn add(&mut self, name: &str) {
        let key = normalize(name);
        let mut node = &mut self.root;
        for c in key.chars() {
            node = node.children.entry(c).or_default();
        }
        node.terminal = true;

        let variants = self.names.entry(key).or_default();
        if !variants.iter().any(|v| v == name) {
            variants.push(name.to_string());
        }
    }

    /// `true` iff some added name normalizes exactly to `name`'s key.
    pub fn contains(&self, name: &str) -> bool {
        match self.walk(&normalize(name)) {
            Some(node) => node.terminal,
            None => false,
        }
    }

    /// Every display name whose normalized key starts with `prefix`.
    ///
    /// All variants of every matching key are emitted, in arbitrary order.
    /// A prefix that walks off the trie yields an empty vec.
    pub fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        let key = normalize(prefix);
        let Some(start) = self.walk(&key) else {
            return Vec::new();
        };
        let mut out = Vec::new();
        let mut path = key;
        self.collect(start, &mut path, &mut out);
        out
    }

    fn walk(&self, key: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in key.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }

    /// Depth-first subtree traversal, child order arbitrary.
    fn collect(&self, node: &TrieNode, path: &mut String, out: &mut Vec<String>) {
        if node.terminal {
            if let Some(variants) = self.names.get(path.as_str()) {
                out.extend(variants.iter().cloned());
            }
        }
        for (&c, child) in &node.children {
            path.push(c);
            self.collect(child, path, out);
            path.pop();
        }
    }
}
