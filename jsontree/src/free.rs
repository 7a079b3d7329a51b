// SPDX-License-Identifier: Apache-2.0

use alloc::vec;

use crate::node::Node;

/// Releases a parsed tree: key text, string payloads, and every child of
/// every array and object.
///
/// `None` is a no-op, so the result of a failed lookup can be passed
/// straight in. The tree is moved in, so nothing in it can be used or
/// released again afterwards.
///
/// Children are detached onto an explicit work list instead of being dropped
/// recursively, so releasing a very deep tree cannot overflow the stack.
/// Dropping the root also releases everything, using the recursive drop glue.
pub fn free(tree: Option<Node>) {
    let Some(root) = tree else {
        return;
    };

    let mut pending = vec![root];
    let mut released = 0usize;
    while let Some(mut node) = pending.pop() {
        if let Some(children) = node.take_children() {
            pending.extend(children);
        }
        released += 1;
    }
    log::trace!("released {released} nodes");
}
