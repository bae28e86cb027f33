use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// A code is the root-to-leaf path for one symbol: `false` for a left edge,
/// `true` for a right edge. Always non-empty.
pub type Code = Vec<bool>;

/// Symbol to code mapping for one run. Prefix-free by construction.
pub type CodeMap = HashMap<char, Code>;

/// Handle into a [`Tree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NodeId(usize);

/// One arena slot. A leaf carries a symbol and no children; an internal node
/// carries two children and no symbol.
#[derive(Debug, Clone)]
pub struct Node {
    pub symbol: Option<char>,
    pub weight: u64,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

/// Huffman tree stored as an arena of nodes, indexed by [`NodeId`].
#[derive(Debug, Default)]
pub struct Tree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl Tree {
    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Build an optimal tree from symbol frequencies, or `None` for an empty
    /// map. Leaves are seeded in ascending symbol order and equal weights
    /// break ties by arena insertion order, so the resulting codes are
    /// deterministic for a given input. The first node extracted from the
    /// heap becomes the left child.
    pub fn from_frequencies(freq: &HashMap<char, u64>) -> Option<Self> {
        if freq.is_empty() {
            return None;
        }

        let mut symbols: Vec<(char, u64)> = freq.iter().map(|(&s, &w)| (s, w)).collect();
        symbols.sort_by_key(|&(s, _)| s);

        let mut tree = Tree::default();
        let mut heap = BinaryHeap::new();
        for (symbol, weight) in symbols {
            let id = tree.push(Node {
                symbol: Some(symbol),
                weight,
                left: None,
                right: None,
            });
            heap.push(Reverse((weight, id)));
        }

        while heap.len() > 1 {
            let Reverse((lw, left)) = heap.pop().unwrap();
            let Reverse((rw, right)) = heap.pop().unwrap();
            let id = tree.push(Node {
                symbol: None,
                weight: lw + rw,
                left: Some(left),
                right: Some(right),
            });
            heap.push(Reverse((lw + rw, id)));
        }

        let Reverse((_, root)) = heap.pop().unwrap();
        tree.root = Some(root);
        Some(tree)
    }

    /// Rebuild a decode tree from a code map alone, creating internal nodes
    /// on demand along each code's path and placing the symbol at its end.
    /// Codes are assumed prefix-free; weights are meaningless here and stay
    /// zero. Returns `None` for an empty map.
    pub fn from_codes(codes: &CodeMap) -> Option<Self> {
        if codes.is_empty() {
            return None;
        }

        let mut tree = Tree::default();
        let root = tree.push(Node {
            symbol: None,
            weight: 0,
            left: None,
            right: None,
        });
        tree.root = Some(root);

        for (&symbol, code) in codes {
            let mut current = root;
            for &bit in code {
                let next = if bit {
                    tree.nodes[current.0].right
                } else {
                    tree.nodes[current.0].left
                };
                current = match next {
                    Some(id) => id,
                    None => {
                        let id = tree.push(Node {
                            symbol: None,
                            weight: 0,
                            left: None,
                            right: None,
                        });
                        if bit {
                            tree.nodes[current.0].right = Some(id);
                        } else {
                            tree.nodes[current.0].left = Some(id);
                        }
                        id
                    }
                };
            }
            tree.nodes[current.0].symbol = Some(symbol);
        }

        Some(tree)
    }

    /// Walk the tree depth-first, assigning `0` for each left edge and `1`
    /// for each right edge. A root that is itself a leaf (single distinct
    /// symbol) gets the one-bit code `1`, since an empty path cannot stand
    /// for a code.
    pub fn assign_codes(&self) -> CodeMap {
        let mut codes = CodeMap::new();
        if let Some(root) = self.root {
            self.assign_from(root, Vec::new(), &mut codes);
        }
        codes
    }

    fn assign_from(&self, id: NodeId, prefix: Code, codes: &mut CodeMap) {
        let node = &self.nodes[id.0];
        if let Some(symbol) = node.symbol {
            let code = if prefix.is_empty() { vec![true] } else { prefix };
            codes.insert(symbol, code);
            return;
        }
        if let Some(left) = node.left {
            let mut path = prefix.clone();
            path.push(false);
            self.assign_from(left, path, codes);
        }
        if let Some(right) = node.right {
            let mut path = prefix;
            path.push(true);
            self.assign_from(right, path, codes);
        }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Child reached by one bit: 0 goes left, 1 goes right.
    pub fn child(&self, id: NodeId, bit: u8) -> Option<NodeId> {
        let node = &self.nodes[id.0];
        if bit == 0 { node.left } else { node.right }
    }

    pub fn is_leaf(&self, id: NodeId) -> bool {
        let node = &self.nodes[id.0];
        node.left.is_none() && node.right.is_none()
    }
}
