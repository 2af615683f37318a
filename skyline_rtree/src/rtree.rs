// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The R-tree: insertion, bounding-rectangle maintenance, and overflow splitting.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::Debug;

use hashbrown::HashSet;
use log::{debug, trace};
use smallvec::smallvec;

use crate::config::TreeConfig;
use crate::error::{IndexError, Result};
use crate::node::{ChildList, Entries, Node, NodeId, PointList};
use crate::types::{Mbr, Point};

/// Height-balanced R-tree over 2D points, built by repeated single-point insertion.
///
/// Nodes live in an arena owned by the tree and refer to each other by
/// [`NodeId`]. Every node's rectangle is the tight bound of its content, no node
/// holds more than [`TreeConfig::capacity`] entries once [`RTree::insert`]
/// returns, and all leaves sit at the same depth.
///
/// ## Example
///
/// ```rust
/// use skyline_rtree::{Point, RTree};
///
/// let mut tree = RTree::new();
/// for (id, x, y) in [(1, 0.0, 0.0), (2, 5.0, 5.0), (3, 1.0, 1.0), (4, 10.0, 0.0), (5, 0.0, 10.0)] {
///     tree.insert(Point::new(id, x, y)).unwrap();
/// }
///
/// // The fifth point overflowed the root leaf, which split in two.
/// assert_eq!(tree.height(), 2);
/// assert_eq!(tree.root_node().children().len(), 2);
/// assert!(tree.validate().is_ok());
/// ```
pub struct RTree<K> {
    config: TreeConfig,
    /// Node slots; `None` marks a node discarded by a split.
    arena: Vec<Option<Node<K>>>,
    root: NodeId,
    len: usize,
    height: usize,
}

/// Shape summary returned by [`RTree::stats`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Number of levels; a lone root leaf has height 1.
    pub height: usize,
    /// Live nodes.
    pub nodes: usize,
    /// Live leaf nodes.
    pub leaves: usize,
    /// Live internal nodes.
    pub internal: usize,
    /// Stored points.
    pub points: usize,
}

impl<K> Debug for RTree<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let alive = self.arena.iter().filter(|n| n.is_some()).count();
        f.debug_struct("RTree")
            .field("config", &self.config)
            .field("len", &self.len)
            .field("height", &self.height)
            .field("arena_slots", &self.arena.len())
            .field("alive", &alive)
            .finish_non_exhaustive()
    }
}

impl<K> Default for RTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Orderings tried when splitting a leaf: point x, then point y.
const LEAF_KEYS: [SortKey; 2] = [SortKey::MinX, SortKey::MinY];

/// Orderings tried when splitting an internal node: child x1, x2, y1, y2.
const INTERNAL_KEYS: [SortKey; 4] = [
    SortKey::MinX,
    SortKey::MaxX,
    SortKey::MinY,
    SortKey::MaxY,
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum SortKey {
    MinX,
    MaxX,
    MinY,
    MaxY,
}

impl SortKey {
    fn of(self, m: &Mbr) -> f64 {
        match self {
            Self::MinX => m.min_x,
            Self::MaxX => m.max_x,
            Self::MinY => m.min_y,
            Self::MaxY => m.max_y,
        }
    }
}

/// The winning split: entries `order[..position]` form the first group.
#[derive(Clone, Debug)]
struct SplitPlan {
    key: SortKey,
    position: usize,
    cost: f64,
    order: Vec<usize>,
}

/// Evaluate every (ordering, position) pair and keep the lowest summed half-perimeter.
///
/// Positions range over `min_fill..=n - min_fill`. Sorting is stable and the
/// first minimal pair wins, so the result is fully determined by the input
/// order. Prefix and suffix bounds make each position O(1).
fn plan_split(boxes: &[Mbr], keys: &[SortKey], min_fill: usize) -> Option<SplitPlan> {
    let n = boxes.len();
    if min_fill == 0 || n < 2 * min_fill {
        return None;
    }
    let mut best: Option<SplitPlan> = None;
    for &key in keys {
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| {
            key.of(&boxes[a])
                .partial_cmp(&key.of(&boxes[b]))
                .unwrap_or(Ordering::Equal)
        });

        let mut prefix: Vec<Mbr> = Vec::with_capacity(n);
        for &i in &order {
            let bb = match prefix.last() {
                Some(prev) => prev.union(boxes[i]),
                None => boxes[i],
            };
            prefix.push(bb);
        }
        let mut suffix: Vec<Mbr> = Vec::with_capacity(n);
        for &i in order.iter().rev() {
            let bb = match suffix.last() {
                Some(prev) => boxes[i].union(*prev),
                None => boxes[i],
            };
            suffix.push(bb);
        }
        suffix.reverse();

        for k in min_fill..=(n - min_fill) {
            let cost = prefix[k - 1].half_perimeter() + suffix[k].half_perimeter();
            if best.as_ref().is_none_or(|b| cost < b.cost) {
                best = Some(SplitPlan {
                    key,
                    position: k,
                    cost,
                    order: order.clone(),
                });
            }
        }
    }
    best
}

/// Move `items` into two groups following a split plan.
fn partition_by_plan<T, C>(items: impl IntoIterator<Item = T>, plan: &SplitPlan) -> (C, C)
where
    C: FromIterator<T>,
{
    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    let (first, second) = plan.order.split_at(plan.position);
    let left = first.iter().filter_map(|&i| slots[i].take()).collect();
    let right = second.iter().filter_map(|&i| slots[i].take()).collect();
    (left, right)
}

impl<K> RTree<K> {
    /// Create an empty tree with the default configuration (capacity 4, 40 % minimum fill).
    pub fn new() -> Self {
        Self::from_valid_config(TreeConfig::default())
    }

    /// Create an empty tree with an explicit configuration.
    pub fn with_config(config: TreeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    /// Build a tree by inserting `points` one at a time, in order.
    pub fn from_points<I>(config: TreeConfig, points: I) -> Result<Self>
    where
        I: IntoIterator<Item = Point<K>>,
    {
        let mut tree = Self::with_config(config)?;
        tree.try_extend(points)?;
        Ok(tree)
    }

    fn from_valid_config(config: TreeConfig) -> Self {
        Self {
            config,
            arena: alloc::vec![Some(Node::leaf(None, PointList::new()))],
            root: NodeId::new(0),
            len: 0,
            height: 1,
        }
    }

    /// Insert every point from `points`, in order.
    pub fn try_extend<I>(&mut self, points: I) -> Result<()>
    where
        I: IntoIterator<Item = Point<K>>,
    {
        for p in points {
            self.insert(p)?;
        }
        Ok(())
    }

    /// The configuration this tree was built with.
    pub fn config(&self) -> TreeConfig {
        self.config
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree stores no points.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels. Grows by one each time the root splits.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Id of the root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The root node.
    pub fn root_node(&self) -> &Node<K> {
        self.live(self.root)
    }

    /// Look up a live node. Returns `None` for ids discarded by a split.
    pub fn node(&self, id: NodeId) -> Option<&Node<K>> {
        self.arena.get(id.index()).and_then(Option::as_ref)
    }

    /// Iterate all stored points. The order is unspecified.
    pub fn points(&self) -> impl Iterator<Item = &Point<K>> + '_ {
        self.arena.iter().flatten().flat_map(|n| n.points().iter())
    }

    /// Insert one point.
    ///
    /// Descends to the leaf whose rectangle grows least, appends the point,
    /// splits overflowing nodes bottom-up, and refreshes every affected
    /// rectangle up to the root. An error means an internal invariant was
    /// already broken; it is never produced for a well-formed tree.
    pub fn insert(&mut self, point: Point<K>) -> Result<()> {
        let leaf = self.choose_leaf(&point)?;
        {
            let Node { mbr, entries, .. } = self.get_mut(leaf)?;
            let Entries::Points(points) = entries else {
                return Err(IndexError::InvariantViolated {
                    node: leaf,
                    reason: "descent ended at an internal node",
                });
            };
            let bounds = match *mbr {
                Some(m) => m.union_position(&point),
                None => Mbr::from_position(&point),
            };
            *mbr = Some(bounds);
            points.push(point);
        }
        self.len += 1;

        if self.get(leaf)?.is_overflow(self.config.capacity()) {
            self.handle_overflow(leaf)
        } else {
            let parent = self.get(leaf)?.parent;
            self.propagate_mbr(parent)
        }
    }

    /// Recompute a node's rectangle from its current content and store it.
    ///
    /// On a valid tree this is a no-op that returns the existing rectangle.
    /// Fails with [`IndexError::EmptyContent`] for a node with no content.
    pub fn recompute_mbr(&mut self, id: NodeId) -> Result<Mbr> {
        let mbr = self.content_bounds(id)?;
        self.get_mut(id)?.mbr = Some(mbr);
        Ok(mbr)
    }

    /// Summarize the tree's shape.
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats {
            height: self.height,
            points: self.len,
            ..TreeStats::default()
        };
        for node in self.arena.iter().flatten() {
            stats.nodes += 1;
            if node.is_leaf() {
                stats.leaves += 1;
            } else {
                stats.internal += 1;
            }
        }
        stats
    }

    /// Check every structural invariant.
    ///
    /// - each rectangle is the tight bound of its content;
    /// - no node exceeds the capacity, and only an empty root may be empty;
    /// - every non-root node appears in exactly one child list and links back to it;
    /// - all leaves sit at depth `height`, and every live node is reachable.
    pub fn validate(&self) -> Result<()> {
        let violated = |node, reason| Err(IndexError::InvariantViolated { node, reason });
        let root = self.get(self.root)?;
        if !root.is_root() {
            return violated(self.root, "root has a parent");
        }

        let mut seen: HashSet<NodeId> = HashSet::new();
        let mut stack = alloc::vec![(self.root, 1_usize)];
        let mut points = 0;
        while let Some((id, depth)) = stack.pop() {
            if !seen.insert(id) {
                return violated(id, "node is reachable twice");
            }
            let node = self.get(id)?;
            if node.is_overflow(self.config.capacity()) {
                return violated(id, "node exceeds capacity");
            }
            if node.is_empty() {
                if id != self.root || !node.is_leaf() {
                    return violated(id, "non-root node is empty");
                }
                if node.mbr.is_some() {
                    return violated(id, "empty node has a rectangle");
                }
                continue;
            }
            if node.mbr != Some(self.content_bounds(id)?) {
                return violated(id, "rectangle is not the tight bound of its content");
            }
            match &node.entries {
                Entries::Points(p) => {
                    if depth != self.height {
                        return violated(id, "leaf depth differs from tree height");
                    }
                    points += p.len();
                }
                Entries::Children(children) => {
                    for &child in children {
                        if self.get(child)?.parent != Some(id) {
                            return violated(child, "parent link does not match child list");
                        }
                        stack.push((child, depth + 1));
                    }
                }
            }
        }

        if points != self.len {
            return violated(self.root, "stored point count does not match len");
        }
        if let Some(orphan) = self
            .arena
            .iter()
            .enumerate()
            .filter(|(_, n)| n.is_some())
            .map(|(i, _)| NodeId::new(i))
            .find(|id| !seen.contains(id))
        {
            return violated(orphan, "live node is unreachable from the root");
        }
        Ok(())
    }

    // --- internals ---

    /// Access a node that a valid tree guarantees to be live.
    pub(crate) fn live(&self, id: NodeId) -> &Node<K> {
        match self.arena.get(id.index()) {
            Some(Some(node)) => node,
            _ => unreachable!("node {id:?} is referenced after being discarded"),
        }
    }

    fn get(&self, id: NodeId) -> Result<&Node<K>> {
        self.node(id).ok_or(IndexError::DanglingNode(id))
    }

    fn get_mut(&mut self, id: NodeId) -> Result<&mut Node<K>> {
        self.arena
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .ok_or(IndexError::DanglingNode(id))
    }

    fn alloc(&mut self, node: Node<K>) -> NodeId {
        self.arena.push(Some(node));
        NodeId::new(self.arena.len() - 1)
    }

    /// Take a node out of the arena, leaving a tombstone so its id is never reused.
    fn discard(&mut self, id: NodeId) -> Result<Node<K>> {
        self.arena
            .get_mut(id.index())
            .and_then(Option::take)
            .ok_or(IndexError::DanglingNode(id))
    }

    fn set_parent(&mut self, id: NodeId, parent: Option<NodeId>) -> Result<()> {
        self.get_mut(id)?.parent = parent;
        Ok(())
    }

    fn content_bounds(&self, id: NodeId) -> Result<Mbr> {
        let node = self.get(id)?;
        let bounds = match &node.entries {
            Entries::Points(points) => Mbr::of_positions(points.iter()),
            Entries::Children(children) => {
                let mut rects = Vec::with_capacity(children.len());
                for &child in children {
                    rects.push(self.child_mbr(child)?);
                }
                Mbr::of_rects(rects)
            }
        };
        bounds.ok_or(IndexError::EmptyContent(id))
    }

    fn child_mbr(&self, child: NodeId) -> Result<Mbr> {
        self.get(child)?
            .mbr
            .ok_or(IndexError::EmptyContent(child))
    }

    fn choose_leaf(&self, point: &Point<K>) -> Result<NodeId> {
        let mut current = self.root;
        loop {
            match &self.get(current)?.entries {
                Entries::Points(_) => return Ok(current),
                Entries::Children(children) => {
                    current = self.choose_subtree(current, children, point)?;
                }
            }
        }
    }

    /// Pick the child whose rectangle grows least in half-perimeter; first wins ties.
    fn choose_subtree(&self, parent: NodeId, children: &[NodeId], point: &Point<K>) -> Result<NodeId> {
        let mut best: Option<(NodeId, f64)> = None;
        for &child in children {
            let increase = self.child_mbr(child)?.half_perimeter_increase(point);
            if best.is_none_or(|(_, b)| increase < b) {
                best = Some((child, increase));
            }
        }
        best.map(|(child, _)| child)
            .ok_or(IndexError::EmptyContent(parent))
    }

    /// Resolve an overflow at `id`, walking up through parents that overflow in turn.
    fn handle_overflow(&mut self, mut id: NodeId) -> Result<()> {
        loop {
            let parent = self.get(id)?.parent;
            let (a, b) = self.split(id)?;
            let Some(parent) = parent else {
                let root = self.alloc(Node::internal(None, smallvec![a, b]));
                self.set_parent(a, Some(root))?;
                self.set_parent(b, Some(root))?;
                self.recompute_mbr(root)?;
                self.root = root;
                self.height += 1;
                debug!("root split; tree height is now {}", self.height);
                return Ok(());
            };

            {
                let Entries::Children(children) = &mut self.get_mut(parent)?.entries else {
                    return Err(IndexError::InvariantViolated {
                        node: parent,
                        reason: "parent is a leaf",
                    });
                };
                let Some(pos) = children.iter().position(|&c| c == id) else {
                    return Err(IndexError::InvariantViolated {
                        node: id,
                        reason: "node is missing from its parent's child list",
                    });
                };
                children.remove(pos);
                children.push(a);
                children.push(b);
            }
            self.recompute_mbr(parent)?;

            if self.get(parent)?.is_overflow(self.config.capacity()) {
                id = parent;
                continue;
            }
            let grandparent = self.get(parent)?.parent;
            return self.propagate_mbr(grandparent);
        }
    }

    /// Recompute rectangles from `start` up to the root.
    fn propagate_mbr(&mut self, start: Option<NodeId>) -> Result<()> {
        let mut current = start;
        while let Some(id) = current {
            self.recompute_mbr(id)?;
            current = self.get(id)?.parent;
        }
        Ok(())
    }

    /// Split an overflowing node into two new nodes and discard it.
    ///
    /// Both products inherit the discarded node's parent and get tight
    /// rectangles; children of an internal node are re-parented. Linking the
    /// products into the parent is left to the caller.
    pub(crate) fn split(&mut self, id: NodeId) -> Result<(NodeId, NodeId)> {
        let capacity = self.config.capacity();
        let node = self.get(id)?;
        if !node.is_overflow(capacity) {
            return Err(IndexError::NotOverflowing {
                node: id,
                len: node.len(),
                capacity,
            });
        }
        let parent = node.parent;
        let (boxes, keys): (Vec<Mbr>, &[SortKey]) = match &node.entries {
            Entries::Points(points) => (
                points.iter().map(Mbr::from_position).collect(),
                &LEAF_KEYS[..],
            ),
            Entries::Children(children) => {
                let mut boxes = Vec::with_capacity(children.len());
                for &child in children {
                    boxes.push(self.child_mbr(child)?);
                }
                (boxes, &INTERNAL_KEYS[..])
            }
        };
        let plan = plan_split(&boxes, keys, self.config.min_fill()).ok_or(
            IndexError::InvariantViolated {
                node: id,
                reason: "no valid split position",
            },
        )?;
        trace!(
            "split {id:?}: {:?} order at {} of {} (half-perimeter sum {})",
            plan.key,
            plan.position,
            boxes.len(),
            plan.cost
        );

        let (a, b) = match self.discard(id)?.entries {
            Entries::Points(points) => {
                let (left, right): (PointList<K>, PointList<K>) =
                    partition_by_plan(points, &plan);
                (
                    self.alloc(Node::leaf(parent, left)),
                    self.alloc(Node::leaf(parent, right)),
                )
            }
            Entries::Children(children) => {
                let (left, right): (ChildList, ChildList) = partition_by_plan(children, &plan);
                let a = self.alloc(Node::internal(parent, left.clone()));
                let b = self.alloc(Node::internal(parent, right.clone()));
                for child in left {
                    self.set_parent(child, Some(a))?;
                }
                for child in right {
                    self.set_parent(child, Some(b))?;
                }
                (a, b)
            }
        };
        self.recompute_mbr(a)?;
        self.recompute_mbr(b)?;
        Ok((a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{init_logging, random_points};
    use alloc::string::{String, ToString};

    fn scenario_tree() -> RTree<u64> {
        let mut tree = RTree::new();
        for (id, x, y) in [
            (1, 0.0, 0.0),
            (2, 5.0, 5.0),
            (3, 1.0, 1.0),
            (4, 10.0, 0.0),
            (5, 0.0, 10.0),
        ] {
            tree.insert(Point::new(id, x, y)).unwrap();
        }
        tree
    }

    fn leaf_ids(tree: &RTree<u64>, id: NodeId) -> Vec<u64> {
        tree.live(id).points().iter().map(|p| p.id).collect()
    }

    #[test]
    fn empty_tree_has_rectangle_less_root_leaf() {
        let mut tree: RTree<u64> = RTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 1);
        assert!(tree.root_node().is_leaf());
        assert_eq!(tree.root_node().mbr(), None);
        assert_eq!(tree.validate(), Ok(()));
        let root = tree.root();
        assert_eq!(tree.recompute_mbr(root), Err(IndexError::EmptyContent(root)));
    }

    #[test]
    fn fifth_point_splits_root_on_x_first() {
        let tree = scenario_tree();
        assert_eq!(tree.len(), 5);
        assert_eq!(tree.height(), 2);
        let root = tree.root_node();
        assert!(!root.is_leaf());
        assert_eq!(root.children().len(), 2);
        // x order and y order both reach a summed half-perimeter of 21 at
        // position 3; the x ordering is tried first and wins.
        assert_eq!(leaf_ids(&tree, root.children()[0]), [1, 5, 3]);
        assert_eq!(leaf_ids(&tree, root.children()[1]), [2, 4]);
        assert_eq!(root.mbr(), Some(Mbr::new(0.0, 0.0, 10.0, 10.0)));
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn split_discards_the_overflowing_node() {
        let tree = scenario_tree();
        assert!(tree.node(NodeId::new(0)).is_none(), "pre-split root is a tombstone");
        assert_eq!(
            tree.stats(),
            TreeStats {
                height: 2,
                nodes: 3,
                leaves: 2,
                internal: 1,
                points: 5
            }
        );
    }

    #[test]
    fn split_requires_overflow() {
        let mut tree = scenario_tree();
        let leaf = tree.root_node().children()[1];
        assert_eq!(
            tree.split(leaf),
            Err(IndexError::NotOverflowing {
                node: leaf,
                len: 2,
                capacity: 4
            })
        );
        assert_eq!(tree.validate(), Ok(()), "failed split leaves the tree untouched");
    }

    #[test]
    fn descent_prefers_smallest_perimeter_growth() {
        let mut tree = scenario_tree();
        // (9, 1) grows the {2, 4} leaf by 0 in x and 0 in y.
        tree.insert(Point::new(6, 9.0, 1.0)).unwrap();
        let right = tree.root_node().children()[1];
        assert_eq!(leaf_ids(&tree, right), [2, 4, 6]);
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn recompute_is_a_no_op_on_every_node() {
        let mut tree =
            RTree::from_points(TreeConfig::default(), random_points(300, 3)).unwrap();
        let ids: Vec<NodeId> = (0..tree.arena.len())
            .map(NodeId::new)
            .filter(|&id| tree.node(id).is_some())
            .collect();
        for id in ids {
            let before = tree.live(id).mbr();
            assert_eq!(Some(tree.recompute_mbr(id).unwrap()), before);
        }
    }

    #[test]
    fn invariants_hold_across_capacities() {
        init_logging();
        for capacity in [2, 3, 4, 5, 8, 16] {
            let config = TreeConfig::default().with_capacity(capacity);
            let mut tree = RTree::with_config(config).unwrap();
            for (i, p) in random_points(500, capacity as u64).into_iter().enumerate() {
                tree.insert(p).unwrap();
                if i % 50 == 0 {
                    assert_eq!(tree.validate(), Ok(()), "capacity {capacity}, after {i}");
                }
            }
            assert_eq!(tree.validate(), Ok(()), "capacity {capacity}");
            assert_eq!(tree.len(), 500);
            assert_eq!(tree.points().count(), 500);
        }
    }

    #[test]
    fn negative_coordinates_bound_correctly() {
        let mut tree = RTree::new();
        for (i, (x, y)) in [(-5.0, -3.0), (-1.0, -9.0), (-7.5, -0.5), (-2.0, -2.0), (-3.0, -6.0)]
            .into_iter()
            .enumerate()
        {
            tree.insert(Point::new(i as u64, x, y)).unwrap();
        }
        assert_eq!(tree.root_node().mbr(), Some(Mbr::new(-7.5, -9.0, -1.0, -0.5)));
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn duplicate_positions_still_split() {
        let mut tree = RTree::new();
        for i in 0..40_u64 {
            tree.insert(Point::new(i, 1.0, 1.0)).unwrap();
        }
        assert_eq!(tree.validate(), Ok(()));
        assert_eq!(tree.root_node().mbr(), Some(Mbr::new(1.0, 1.0, 1.0, 1.0)));
    }

    #[test]
    fn string_ids_are_supported() {
        let mut tree: RTree<String> = RTree::new();
        for i in 0_i32..10 {
            tree.insert(Point::new(i.to_string(), f64::from(i), 0.0)).unwrap();
        }
        assert_eq!(tree.len(), 10);
        assert!(tree.points().any(|p| p.id == "7"));
    }

    #[test]
    fn rejects_invalid_config() {
        let config = TreeConfig::default().with_capacity(0);
        assert_eq!(
            RTree::<u64>::with_config(config).unwrap_err(),
            IndexError::InvalidCapacity(0)
        );
    }

    #[test]
    fn plan_split_tie_keeps_first_combination() {
        // Symmetric boxes: every ordering yields the same costs, so the first
        // key at the first minimal position must be chosen.
        let boxes = [
            Mbr::new(0.0, 0.0, 0.0, 0.0),
            Mbr::new(1.0, 1.0, 1.0, 1.0),
            Mbr::new(2.0, 2.0, 2.0, 2.0),
        ];
        let plan = plan_split(&boxes, &INTERNAL_KEYS, 1).unwrap();
        assert_eq!(plan.key, SortKey::MinX);
        assert_eq!(plan.position, 1);
        assert_eq!(plan.cost, 2.0);
        assert!(plan_split(&boxes, &LEAF_KEYS, 2).is_none());
    }
}
