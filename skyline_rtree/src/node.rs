// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree nodes and their arena identifiers.

use smallvec::SmallVec;

use crate::types::{Mbr, Point};

/// Entries kept inline before a node's content list spills to the heap.
///
/// Covers the default capacity plus the one transient overflow entry.
pub(crate) const INLINE_ENTRIES: usize = 8;

pub(crate) type PointList<K> = SmallVec<[Point<K>; INLINE_ENTRIES]>;
pub(crate) type ChildList = SmallVec<[NodeId; INLINE_ENTRIES]>;

/// Identifier of a node in the tree's arena.
///
/// Ids are never reused: a node discarded by a split leaves a tombstone behind,
/// and the two split products get fresh ids.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) const fn new(idx: usize) -> Self {
        Self(idx)
    }

    /// Position of the node in the arena.
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Content of a node: points for a leaf, child ids for an internal node.
#[derive(Clone, Debug)]
pub(crate) enum Entries<K> {
    Points(PointList<K>),
    Children(ChildList),
}

/// A node of the tree.
///
/// A leaf holds points; an internal node holds child ids. The parent link is a
/// plain arena id and never owns anything.
#[derive(Clone, Debug)]
pub struct Node<K> {
    pub(crate) parent: Option<NodeId>,
    pub(crate) mbr: Option<Mbr>,
    pub(crate) entries: Entries<K>,
}

impl<K> Node<K> {
    pub(crate) fn leaf(parent: Option<NodeId>, points: PointList<K>) -> Self {
        Self {
            parent,
            mbr: None,
            entries: Entries::Points(points),
        }
    }

    pub(crate) fn internal(parent: Option<NodeId>, children: ChildList) -> Self {
        Self {
            parent,
            mbr: None,
            entries: Entries::Children(children),
        }
    }

    /// The parent of this node, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The bounding rectangle, `None` while the node has no content.
    pub fn mbr(&self) -> Option<Mbr> {
        self.mbr
    }

    /// Whether this node holds points rather than children.
    pub fn is_leaf(&self) -> bool {
        matches!(self.entries, Entries::Points(_))
    }

    /// Whether this node has no parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Number of points (leaf) or children (internal node).
    pub fn len(&self) -> usize {
        match &self.entries {
            Entries::Points(p) => p.len(),
            Entries::Children(c) => c.len(),
        }
    }

    /// Whether the node holds nothing. Only an empty tree's root leaf can be empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the node holds more than `capacity` entries.
    pub fn is_overflow(&self, capacity: usize) -> bool {
        self.len() > capacity
    }

    /// Half-perimeter of the bounding rectangle; `0.0` for an empty node.
    pub fn half_perimeter(&self) -> f64 {
        self.mbr.map_or(0.0, |m| m.half_perimeter())
    }

    /// Points stored in a leaf; empty for an internal node.
    pub fn points(&self) -> &[Point<K>] {
        match &self.entries {
            Entries::Points(p) => p,
            Entries::Children(_) => &[],
        }
    }

    /// Child ids of an internal node; empty for a leaf.
    pub fn children(&self) -> &[NodeId] {
        match &self.entries {
            Entries::Points(_) => &[],
            Entries::Children(c) => c,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn leaf_and_internal_shapes() {
        let mut leaf = Node::leaf(None, smallvec![Point::new(1_u32, 0.0, 0.0)]);
        assert!(leaf.is_leaf());
        assert!(leaf.is_root());
        assert_eq!(leaf.len(), 1);
        assert!(leaf.children().is_empty());
        assert_eq!(leaf.half_perimeter(), 0.0, "no rectangle yet");
        leaf.mbr = Some(Mbr::new(0.0, 0.0, 2.0, 3.0));
        assert_eq!(leaf.half_perimeter(), 5.0);

        let internal: Node<u32> =
            Node::internal(Some(NodeId::new(0)), smallvec![NodeId::new(1), NodeId::new(2)]);
        assert!(!internal.is_leaf());
        assert!(!internal.is_root());
        assert!(internal.points().is_empty());
        assert_eq!(internal.children(), &[NodeId::new(1), NodeId::new(2)]);
    }

    #[test]
    fn overflow_is_strictly_above_capacity() {
        let points: PointList<u32> = (0..4).map(|i| Point::new(i, 0.0, 0.0)).collect();
        let mut node = Node::leaf(None, points);
        assert!(!node.is_overflow(4));
        if let Entries::Points(p) = &mut node.entries {
            p.push(Point::new(4, 1.0, 1.0));
        }
        assert!(node.is_overflow(4));
    }
}
