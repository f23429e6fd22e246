use std::ops::Not;

/// Slot of a node in the arena.
pub(crate) type NodeId = usize;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Not for Side {
    type Output = Self;
    fn not(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

pub(crate) struct Node<K, V> {
    pub key: K,
    pub value: V,
    // absent = 0, leaf = 1
    pub height: u32,
    // not an owner; only walked upward by `fix_up`
    pub parent: Option<NodeId>,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

impl<K, V> Node<K, V> {
    pub fn leaf(key: K, value: V, parent: Option<NodeId>) -> Self {
        Self { key, value, height: 1, parent, left: None, right: None }
    }

    pub fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
    pub fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
    pub fn children(&self) -> impl Iterator<Item = NodeId> {
        self.left.into_iter().chain(self.right)
    }
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::{Node, Side};

    #[test]
    fn sides() {
        assert_eq!(!Side::Left, Side::Right);
        assert_eq!(!!Side::Left, Side::Left);

        let mut node = Node::leaf(1, "one", None);
        assert!(node.is_leaf());
        assert_eq!(node.height, 1);

        *node.child_mut(Side::Right) = Some(3);
        assert_eq!(node.child(Side::Left), None);
        assert_eq!(node.child(Side::Right), Some(3));
        assert!(!node.is_leaf());

        node.left = Some(5);
        assert_eq!(node.children().collect::<Vec<_>>(), [5, 3]);
    }
}
