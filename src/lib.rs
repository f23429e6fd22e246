//! 平衡二分探索木。

#[doc(inline)]
pub use avl_tree::{self, *};
