use std::fmt::Debug;

use crate::types::KeyedNode;

/// Debug dump of the subtree at `node`, one node per line with its color.
pub fn print<N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    N: KeyedNode,
    N::Key: Debug,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print(arena, n.l(), &format!("{tab}  "));
            let right = print(arena, n.r(), &format!("{tab}  "));
            format!(
                "Node[{i}] {} {:?}\n{tab}L={left}\n{tab}R={right}",
                n.color().as_str(),
                n.key()
            )
        }
    }
}
