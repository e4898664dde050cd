//! Error types.

/// Recoverable failure of a tree mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RbError {
    /// A node with an equal key is already linked; the tree was not modified.
    #[error("a node with an equal key is already in the tree")]
    DuplicateKey,
}

/// Broken tree invariant found by `assert_red_black_tree`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("root {0} has a parent")]
    RootHasParent(u32),
    #[error("root {0} is not black")]
    RedRoot(u32),
    #[error("red node {node} has red child {child}")]
    RedRed { node: u32, child: u32 },
    #[error("black height mismatch under node {node}: left {left}, right {right}")]
    BlackHeight { node: u32, left: usize, right: usize },
    #[error("child {child} does not point back to parent {parent}")]
    BrokenParentLink { parent: u32, child: u32 },
    #[error("node order violated between {prev} and {next}")]
    Order { prev: u32, next: u32 },
}
