use tracing::trace;

use crate::{
    node::{NodeId, Side},
    AvlTree,
};

impl<K, V> AvlTree<K, V> {
    pub(crate) fn height_of(&self, x: Option<NodeId>) -> u32 {
        x.map_or(0, |x| self.nodes[x].height)
    }

    /// $`h(x_L) - h(x_R)`$.
    pub(crate) fn factor(&self, x: NodeId) -> i32 {
        let node = &self.nodes[x];
        self.height_of(node.left) as i32 - self.height_of(node.right) as i32
    }

    pub(crate) fn fix_height(&mut self, x: NodeId) {
        let node = &self.nodes[x];
        let height =
            1 + self.height_of(node.left).max(self.height_of(node.right));
        self.nodes[x].height = height;
    }

    pub(crate) fn rotate_left(&mut self, x: NodeId) -> NodeId {
        self.rotate(x, Side::Left)
    }
    pub(crate) fn rotate_right(&mut self, x: NodeId) -> NodeId {
        self.rotate(x, Side::Right)
    }

    /// Lifts the child of `x` on the side opposite to `side` into the slot
    /// of `x`, and returns it. Heights are left stale.
    ///
    /// ```text
    ///       x                pivot
    ///      / \               /   \
    ///     a  pivot   =>     x     c
    ///        /   \         / \
    ///     inner   c       a  inner
    /// ```
    fn rotate(&mut self, x: NodeId, side: Side) -> NodeId {
        let Some(pivot) = self.nodes[x].child(!side) else {
            unreachable!("rotation requires a pivot");
        };
        let parent = self.nodes[x].parent;
        let inner = self.nodes[pivot].child(side);

        self.replace_child(parent, x, Some(pivot));
        *self.nodes[x].child_mut(!side) = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(x);
        }
        *self.nodes[pivot].child_mut(side) = Some(x);
        self.nodes[pivot].parent = parent;
        self.nodes[x].parent = Some(pivot);

        trace!(node = x, pivot, ?side, "rotate");
        pivot
    }

    /// Redirects the link that pointed at `old` (a child link of `parent`,
    /// or the root link) to `new`. The parent link of `new` is the caller's
    /// business.
    pub(crate) fn replace_child(
        &mut self,
        parent: Option<NodeId>,
        old: NodeId,
        new: Option<NodeId>,
    ) {
        let Some(parent) = parent else {
            self.root = new;
            return;
        };
        let node = &mut self.nodes[parent];
        if node.left == Some(old) {
            node.left = new;
        } else {
            debug_assert_eq!(node.right, Some(old));
            node.right = new;
        }
    }

    /// Walks from `x` up to the root, rotating wherever the balance factor
    /// left $`\{-1, 0, 1\}`$ and refreshing every height on the way.
    pub(crate) fn fix_up(&mut self, x: NodeId) {
        let mut cur = Some(x);
        while let Some(x) = cur {
            let factor = self.factor(x);
            if factor >= 2 {
                let Some(left) = self.nodes[x].left else { unreachable!() };
                if self.factor(left) < 0 {
                    self.rotate_left(left);
                    self.fix_height(left);
                }
                self.rotate_right(x);
            } else if factor <= -2 {
                let Some(right) = self.nodes[x].right else { unreachable!() };
                if self.factor(right) > 0 {
                    self.rotate_right(right);
                    self.fix_height(right);
                }
                self.rotate_left(x);
            }
            self.fix_height(x);
            cur = self.nodes[x].parent;
        }
    }
}
