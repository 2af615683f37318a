// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for index construction and maintenance.

use thiserror::Error;

use crate::node::NodeId;

/// Errors reported by the index.
///
/// Queries never fail. Every variant here is a violated precondition or a
/// broken structural invariant, so none of them are worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// A bounding rectangle was requested for a node with no content.
    #[error("cannot compute the bounding rectangle of empty node {0:?}")]
    EmptyContent(NodeId),

    /// A split was requested for a node that holds no more than `capacity` entries.
    #[error("node {node:?} holds {len} entries and does not exceed capacity {capacity}")]
    NotOverflowing {
        /// The node that was asked to split.
        node: NodeId,
        /// Entries the node holds.
        len: usize,
        /// Configured node capacity.
        capacity: usize,
    },

    /// A node id referred to a node that has been discarded by a split.
    #[error("node {0:?} was discarded and can no longer be referenced")]
    DanglingNode(NodeId),

    /// Node capacity must be at least 2 and small enough that the minimum fill
    /// can be computed without overflow.
    #[error("node capacity must be at least 2 and fit the fill computation, got {0}")]
    InvalidCapacity(usize),

    /// Minimum fill must lie in `1..=50` percent of the capacity.
    #[error("minimum fill must be between 1 and 50 percent, got {0}")]
    InvalidMinFill(usize),

    /// [`RTree::validate`](crate::RTree::validate) found a broken invariant.
    #[error("invariant violated at node {node:?}: {reason}")]
    InvariantViolated {
        /// Where the violation was found.
        node: NodeId,
        /// Which invariant failed.
        reason: &'static str,
    },
}

/// Result type used across the crate.
pub type Result<T> = core::result::Result<T, IndexError>;
