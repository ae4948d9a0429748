use std::fmt::Display;

use generational_arena::Index;
use termtree::Tree;

use crate::tree::BinaryTree;

/// Conversion into a renderable [`termtree::Tree`].
///
/// Lives in a trait so display stays out of the core structure; duplicate
/// counts show up as a `(x<count>)` suffix on the node label.
pub trait TreeRender {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<T: Ord + Display> TreeRender for BinaryTree<T> {
    fn to_tree_string(&self) -> Tree<String> {
        fn build<T: Ord + Display>(
            tree: &BinaryTree<T>,
            idx: Index,
            parent: &mut Tree<String>,
        ) {
            if let Some(node) = tree.node(idx) {
                for child_idx in [node.left, node.right].into_iter().flatten() {
                    let mut child_tree = Tree::new(label(tree, child_idx));
                    build(tree, child_idx, &mut child_tree);
                    parent.push(child_tree);
                }
            }
        }

        fn label<T: Ord + Display>(tree: &BinaryTree<T>, idx: Index) -> String {
            match tree.node(idx) {
                Some(node) if node.count > 1 => format!("{} (x{})", node.value, node.count),
                Some(node) => node.value.to_string(),
                None => String::new(),
            }
        }

        match self.root() {
            Some(root_idx) => {
                let mut rendered = Tree::new(label(self, root_idx));
                build(self, root_idx, &mut rendered);
                rendered
            }
            None => Tree::new("Empty tree".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_counts_only_when_duplicated() {
        let tree: BinaryTree<i32> = [2, 1, 3, 3].into_iter().collect();
        let rendered = tree.to_tree_string().to_string();
        assert!(rendered.contains('2'));
        assert!(rendered.contains("3 (x2)"));
        assert!(!rendered.contains("1 (x"));
    }

    #[test]
    fn renders_empty_trees() {
        let tree: BinaryTree<i32> = BinaryTree::new();
        assert_eq!(tree.to_tree_string().to_string().trim(), "Empty tree");
    }
}
