use std::cmp::Ordering;

#[derive(Debug, PartialEq, Eq)]
pub enum NodeKind {
    Leaf(u8),
    Internal(Box<Node>, Box<Node>),
}

/// A Huffman tree node. Internal nodes always own exactly two children.
#[derive(Debug)]
pub struct Node {
    kind: NodeKind,
    freq: u64,
}

impl Node {
    pub fn new_leaf(symbol: u8, freq: u64) -> Self {
        Node {
            kind: NodeKind::Leaf(symbol),
            freq,
        }
    }

    /// Merges two subtrees; the frequency is the sum of both children.
    pub fn new_internal(left: Node, right: Node) -> Self {
        Node {
            freq: left.freq + right.freq,
            kind: NodeKind::Internal(Box::new(left), Box::new(right)),
        }
    }

    pub fn frequency(&self) -> u64 {
        self.freq
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn symbol(&self) -> Option<u8> {
        match self.kind {
            NodeKind::Leaf(symbol) => Some(symbol),
            NodeKind::Internal(..) => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }

    pub fn left(&self) -> Option<&Node> {
        match &self.kind {
            NodeKind::Internal(left, _) => Some(left.as_ref()),
            NodeKind::Leaf(_) => None,
        }
    }

    pub fn right(&self) -> Option<&Node> {
        match &self.kind {
            NodeKind::Internal(_, right) => Some(right.as_ref()),
            NodeKind::Leaf(_) => None,
        }
    }
}

// Ordering only looks at frequency, which is all the heap needs.
impl Eq for Node {}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.freq == other.freq
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.freq.cmp(&other.freq)
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
