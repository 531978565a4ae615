use log::debug;

use crate::{
    error::{Error, Result},
    heap::PriorityHeap,
    node::Node,
};

/// Greedily merges the two lowest-frequency nodes until one root remains.
///
/// The first node removed becomes the left child. A heap holding a single
/// leaf yields that leaf as the root.
pub fn build_tree(mut heap: PriorityHeap<Node>) -> Result<Node> {
    let leaves = heap.size();
    while heap.size() > 1 {
        let left = heap.remove_min();
        let right = heap.remove_min();
        heap.insert(Node::new_internal(left, right));
    }

    let root = heap.try_remove_min().ok_or(Error::EmptyAlphabet)?;
    debug!(
        "built tree over {} leaves, total frequency {}",
        leaves,
        root.frequency()
    );
    Ok(root)
}
