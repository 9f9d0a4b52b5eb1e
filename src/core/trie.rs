// --- File: src/core/trie.rs
use std::collections::HashMap;
use std::sync::OnceLock;

/// Known upasargas (preverbs) that may precede a conjugated form.
pub const UPASARGAS: [&str; 24] = [
    "प्र", "परा", "अप", "सम्", "अनु", "अव", "निस", "निर", "दुस", "दुर",
    "वि", "आ", "नि", "अधि", "अति", "अपि", "उत", "अभि", "उप", "सु", "परि", "अन्तर्", "तिरस्", "प्रति",
];

struct PrefixNode {
    children: HashMap<u8, usize>,
    prefix: Option<&'static str>,
}

impl PrefixNode {
    fn new() -> Self {
        Self { children: HashMap::new(), prefix: None }
    }
}

/// A byte trie over a fixed prefix list, answering longest-prefix queries.
/// Walking the bytes of a word and keeping the deepest terminal node gives the
/// same answer as trying the list longest-first.
pub struct PreverbTrie {
    nodes: Vec<PrefixNode>,
}

impl PreverbTrie {
    pub fn new(prefixes: &[&'static str]) -> Self {
        let mut trie = Self { nodes: vec![PrefixNode::new()] };
        for &prefix in prefixes {
            trie.insert(prefix);
        }
        trie
    }

    /// The process-wide upasarga trie.
    pub fn upasargas() -> &'static PreverbTrie {
        static TRIE: OnceLock<PreverbTrie> = OnceLock::new();
        TRIE.get_or_init(|| PreverbTrie::new(&UPASARGAS))
    }

    /// O(k) in the prefix length.
    fn insert(&mut self, prefix: &'static str) {
        let mut node_idx = 0;
        for &byte in prefix.as_bytes() {
            let next_idx = if let Some(&id) = self.nodes[node_idx].children.get(&byte) {
                id
            } else {
                let new_node_id = self.nodes.len();
                self.nodes.push(PrefixNode::new());
                self.nodes[node_idx].children.insert(byte, new_node_id);
                new_node_id
            };
            node_idx = next_idx;
        }
        self.nodes[node_idx].prefix = Some(prefix);
    }

    /// The longest listed prefix of `word`, if any.
    pub fn longest_prefix(&self, word: &str) -> Option<&'static str> {
        let mut node_idx = 0;
        let mut best = None;
        for &byte in word.as_bytes() {
            match self.nodes[node_idx].children.get(&byte) {
                Some(&next_idx) => node_idx = next_idx,
                None => break,
            }
            if let Some(prefix) = self.nodes[node_idx].prefix {
                best = Some(prefix);
            }
        }
        best
    }

    /// Splits off the longest prefix, returning `(remainder, prefix)`.
    /// A prefix that would consume the whole word is not stripped.
    pub fn strip<'w>(&self, word: &'w str) -> Option<(&'w str, &'static str)> {
        let prefix = self.longest_prefix(word)?;
        let rest = &word[prefix.len()..];
        if rest.is_empty() {
            None
        } else {
            Some((rest, prefix))
        }
    }
}
