use std::fmt;

use crate::{node::NodeId, AvlTree};

/// Box-drawing rendering of the tree shape, returned by
/// [`AvlTree::visualize`].
pub struct Visualize<'a, K, V>(pub(crate) &'a AvlTree<K, V>);

impl<K: fmt::Debug, V> fmt::Display for Visualize<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.root {
            Some(root) => dfs(self.0, Some(root), "", "", f),
            None => Ok(()),
        }
    }
}

fn dfs<K: fmt::Debug, V>(
    tree: &AvlTree<K, V>,
    x: Option<NodeId>,
    prefix: &str,
    branch: &str,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let Some(x) = x else {
        return writeln!(f, "{prefix}{branch}∅");
    };
    let node = &tree.nodes[x];
    writeln!(f, "{prefix}{branch}{:?} ({})", node.key, node.height)?;
    if node.is_leaf() {
        return Ok(());
    }
    let prefix = match branch {
        "├── " => format!("{prefix}│   "),
        "└── " => format!("{prefix}    "),
        _ => prefix.to_owned(),
    };
    dfs(tree, node.left, &prefix, "├── ", f)?;
    dfs(tree, node.right, &prefix, "└── ", f)
}

/// Panics unless the ordering, balance, height, parent-link and arena
/// invariants all hold.
#[cfg(test)]
pub(crate) fn check_invariants<K: Ord + fmt::Debug, V>(tree: &AvlTree<K, V>) {
    let Some(root) = tree.root else {
        assert!(tree.nodes.is_empty(), "empty tree holds stray nodes");
        return;
    };
    assert_eq!(tree.nodes[root].parent, None);

    let mut reachable = 0;
    let mut stack = vec![(root, None::<&K>, None::<&K>)];
    while let Some((x, lo, hi)) = stack.pop() {
        reachable += 1;
        let node = &tree.nodes[x];
        if let Some(lo) = lo {
            assert!(lo < &node.key, "{lo:?} must precede {:?}", node.key);
        }
        if let Some(hi) = hi {
            assert!(&node.key < hi, "{:?} must precede {hi:?}", node.key);
        }

        let (hl, hr) = (tree.height_of(node.left), tree.height_of(node.right));
        let height = 1 + hl.max(hr);
        assert_eq!(node.height, height, "stale height at {:?}", node.key);
        assert!(hl.abs_diff(hr) <= 1, "unbalanced at {:?}", node.key);

        if let Some(left) = node.left {
            assert_eq!(tree.nodes[left].parent, Some(x));
            stack.push((left, lo, Some(&node.key)));
        }
        if let Some(right) = node.right {
            assert_eq!(tree.nodes[right].parent, Some(x));
            stack.push((right, Some(&node.key), hi));
        }
    }
    assert_eq!(reachable, tree.nodes.len(), "unreachable nodes in the arena");
}

#[cfg(test)]
mod tests {
    use crate::AvlTree;

    #[test]
    fn visualize() {
        let mut tree = AvlTree::new();
        assert_eq!(tree.visualize().to_string(), "");

        tree.extend((1..=4).map(|k| (k, ())));
        let expected = "\
2 (3)
├── 1 (1)
└── 3 (2)
    ├── ∅
    └── 4 (1)
";
        assert_eq!(tree.visualize().to_string(), expected);

        tree.extend((5..=6).map(|k| (k, ())));
        let expected = "\
4 (3)
├── 2 (2)
│   ├── 1 (1)
│   └── 3 (1)
└── 5 (2)
    ├── ∅
    └── 6 (1)
";
        assert_eq!(tree.visualize().to_string(), expected);
    }
}
