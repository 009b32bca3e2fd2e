//! Error types for route network operations.
//!
//! An unreachable destination is not an error: shortest-path queries report it through
//! the `reachable` flag of their result.

use thiserror::Error;

use crate::{Cost, Edge, Node, NumNodes};

/// Errors returned by checked graph and network operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    #[error("node {node} is out of range (network has {number_of_nodes} nodes)")]
    OutOfRange { node: Node, number_of_nodes: NumNodes },

    #[error("route {0} not found")]
    EdgeNotFound(Edge),

    #[error("route {0} already exists")]
    EdgeAlreadyExists(Edge),

    #[error("invalid route cost {0}, expected a finite non-negative price")]
    InvalidCost(Cost),

    #[error("expected {expected} node names, found {found}")]
    NameCount { expected: NumNodes, found: usize },
}

/// Shorthand for results of checked network operations
pub type Result<T> = std::result::Result<T, RouteError>;
