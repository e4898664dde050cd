//! Red-black balancing engine and the handles built on it.

pub mod map;
pub mod tree;
pub mod types;
pub mod util;

pub use map::RbMap;
pub use tree::{Iter, RbTree};
pub use types::RbNode;
pub use util::{assert_red_black_tree, insert, print, remove};
