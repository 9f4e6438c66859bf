
/// Prefix tree over the bytes of words
///
/// Nodes keep their children sorted by byte, so enumeration yields words in
/// lexicographic order. The same structure holds words read backward when
/// filled with [`Trie::reverse_insert`].
#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    children: Vec<(u8, TrieNode)>,
    terminal: bool,
}

impl TrieNode {
    pub fn child(&self, byte: u8) -> Option<&TrieNode> {
        self.children
            .binary_search_by(|(b, _)| b.cmp(&byte))
            .ok()
            .map(|pos| &self.children[pos].1)
    }

    pub fn children(&self) -> impl Iterator<Item=(u8, &TrieNode)> {
        self.children.iter().map(|(b, node)| (*b, node))
    }

    /// Whether a word ends at this node
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    fn child_or_insert(&mut self, byte: u8) -> &mut TrieNode {
        let pos = match self.children.binary_search_by(|(b, _)| b.cmp(&byte)) {
            Ok(pos) => pos,
            Err(pos) => {
                self.children.insert(pos, (byte, TrieNode::default()));
                pos
            }
        };
        &mut self.children[pos].1
    }

    fn collect_words(&self, current: &mut Vec<u8>, results: &mut Vec<String>) {
        if self.terminal {
            results.push(String::from_utf8_lossy(current).into_owned());
        }
        for (byte, child) in &self.children {
            current.push(*byte);
            child.collect_words(current, results);
            current.pop();
        }
    }

    fn collect_from_letters(&self, counts: &mut [u8; 256], current: &mut Vec<u8>, results: &mut Vec<String>) {
        if self.terminal && !current.is_empty() {
            results.push(String::from_utf8_lossy(current).into_owned());
        }
        for (byte, child) in &self.children {
            let count = &mut counts[*byte as usize];
            if *count == 0 {
                continue
            }
            *count -= 1;
            current.push(*byte);
            child.collect_from_letters(counts, current, results);
            current.pop();
            counts[*byte as usize] += 1;
        }
    }
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of words stored
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    pub fn insert(&mut self, word: &str) {
        self.insert_bytes(word.bytes())
    }

    /// Insert `word` read from its last letter to its first
    pub fn reverse_insert(&mut self, word: &str) {
        self.insert_bytes(word.bytes().rev())
    }

    fn insert_bytes(&mut self, bytes: impl Iterator<Item=u8>) {
        let mut node = &mut self.root;
        for byte in bytes {
            node = node.child_or_insert(byte);
        }
        if !node.terminal {
            node.terminal = true;
            self.len += 1;
        }
    }

    /// The node reached by following `fix` from the root
    pub fn node(&self, fix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for byte in fix.bytes() {
            node = node.child(byte)?;
        }
        Some(node)
    }

    /// Whether `word` was inserted
    pub fn search(&self, word: &str) -> bool {
        self.node(word).map_or(false, TrieNode::is_terminal)
    }

    /// Whether any inserted word starts with `fix`
    pub fn includes(&self, fix: &str) -> bool {
        self.node(fix).is_some()
    }

    /// All the words starting with `fix`, `fix` included when it is a word
    pub fn find_words_with(&self, fix: &str) -> Vec<String> {
        let mut results = vec![];
        if let Some(node) = self.node(fix) {
            let mut current = fix.as_bytes().to_vec();
            node.collect_words(&mut current, &mut results);
        }
        results
    }

    /// All the words that can be spelled using each of `letters` at most once
    pub fn words_from_letters(&self, letters: &[u8]) -> Vec<String> {
        let mut counts = [0u8; 256];
        for &l in letters {
            counts[l as usize] = counts[l as usize].saturating_add(1);
        }
        let mut results = vec![];
        self.root.collect_from_letters(&mut counts, &mut vec![], &mut results);
        results
    }
}
