use std::collections::HashMap;

use generational_arena::{Arena, Index};
use termtree::Tree;
use tracing::instrument;

use crate::domain::course::Course;

/// Node in the arena-backed search tree.
#[derive(Debug)]
pub struct CatalogNode {
    /// Course stored at this node
    pub course: Course,
    /// Subtree with IDs ordered before this node's ID
    pub left: Option<Index>,
    /// Subtree with IDs equal to or after this node's ID
    pub right: Option<Index>,
}

impl CatalogNode {
    fn leaf(course: Course) -> Self {
        Self {
            course,
            left: None,
            right: None,
        }
    }
}

/// Ordered course catalog: an unbalanced binary search tree keyed by course ID.
///
/// Nodes live in a generational arena and reference their children by index,
/// so the whole tree is released when the catalog is dropped. Shape depends
/// entirely on insertion order; sorted input degenerates into a linked list.
#[derive(Debug)]
pub struct Catalog {
    /// Arena storage for all nodes
    arena: Arena<CatalogNode>,
    /// Index of the root node, None for an empty catalog
    root: Option<Index>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Inserts a course. Equal IDs go to the right subtree, so duplicates are kept.
    #[instrument(level = "trace", skip(self, course), fields(id = %course.id))]
    pub fn insert(&mut self, course: Course) -> Index {
        let Some(mut current) = self.root else {
            let idx = self.arena.insert(CatalogNode::leaf(course));
            self.root = Some(idx);
            return idx;
        };

        loop {
            let node = &self.arena[current];
            let goes_left = course.id < node.course.id;
            let next = if goes_left { node.left } else { node.right };

            match next {
                Some(child) => current = child,
                None => {
                    let idx = self.arena.insert(CatalogNode::leaf(course));
                    let parent = &mut self.arena[current];
                    if goes_left {
                        parent.left = Some(idx);
                    } else {
                        parent.right = Some(idx);
                    }
                    return idx;
                }
            }
        }
    }

    /// Looks up a course by exact ID.
    #[instrument(level = "trace", skip(self))]
    pub fn search(&self, id: &str) -> Option<&Course> {
        let mut current = self.root;
        while let Some(idx) = current {
            let node = self.arena.get(idx)?;
            if node.course.id == id {
                return Some(&node.course);
            }
            current = if id < node.course.id.as_str() {
                node.left
            } else {
                node.right
            };
        }
        None
    }

    /// In-order traversal: courses in ascending ID order.
    pub fn iter(&self) -> InOrderIterator<'_> {
        InOrderIterator::new(self)
    }

    /// Collects the in-order traversal.
    pub fn traverse_in_order(&self) -> Vec<&Course> {
        self.iter().collect()
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn get_node(&self, idx: Index) -> Option<&CatalogNode> {
        self.arena.get(idx)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path, 0 when empty.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(Index, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((idx, depth)) = stack.pop() {
            let Some(node) = self.get_node(idx) else {
                continue;
            };
            max_depth = max_depth.max(depth);
            for child in [node.left, node.right].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        max_depth
    }

    /// Renders the tree shape, left child listed before right child.
    /// Missing children of a node that has one child are shown as `-`.
    pub fn to_tree(&self) -> Option<Tree<String>> {
        let root = self.root?;

        // pre-order, so the reversed walk sees children before their parent
        let mut order = Vec::with_capacity(self.len());
        let mut stack = vec![root];
        while let Some(idx) = stack.pop() {
            order.push(idx);
            if let Some(node) = self.get_node(idx) {
                stack.extend([node.left, node.right].into_iter().flatten());
            }
        }

        let mut built: HashMap<Index, Tree<String>> = HashMap::with_capacity(order.len());
        for idx in order.into_iter().rev() {
            let Some(node) = self.get_node(idx) else {
                continue;
            };
            let mut tree = Tree::new(node.course.id.clone());
            if node.left.is_some() || node.right.is_some() {
                for child in [node.left, node.right] {
                    let subtree = child
                        .and_then(|c| built.remove(&c))
                        .unwrap_or_else(|| Tree::new("-".to_string()));
                    tree.push(subtree);
                }
            }
            built.insert(idx, tree);
        }
        built.remove(&root)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Course;
    type IntoIter = InOrderIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct InOrderIterator<'a> {
    catalog: &'a Catalog,
    stack: Vec<Index>,
}

impl<'a> InOrderIterator<'a> {
    fn new(catalog: &'a Catalog) -> Self {
        let mut iter = Self {
            catalog,
            stack: Vec::new(),
        };
        iter.push_left_spine(catalog.root());
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<Index>) {
        while let Some(idx) = current {
            self.stack.push(idx);
            current = self.catalog.get_node(idx).and_then(|n| n.left);
        }
    }
}

impl<'a> Iterator for InOrderIterator<'a> {
    type Item = &'a Course;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let node = self.catalog.get_node(idx)?;
        self.push_left_spine(node.right);
        Some(&node.course)
    }
}
