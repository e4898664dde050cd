//! Visitor-driven walks.
//!
//! A visitor is called with the arena and the index of the node being
//! visited. The first `Err` it returns stops the walk and is handed back
//! unchanged. Recursion depth is the tree height, at most `2·log2(n+1)` for
//! a valid red-black tree.

use crate::types::Node;
use crate::util::{get_l, get_r};

/// Node, then left subtree, then right subtree.
pub fn preorder<N, E, F>(arena: &[N], root: Option<u32>, visit: &mut F) -> Result<(), E>
where
    N: Node,
    F: FnMut(&[N], u32) -> Result<(), E> + ?Sized,
{
    let Some(n) = root else {
        return Ok(());
    };
    visit(arena, n)?;
    preorder(arena, get_l(arena, n), visit)?;
    preorder(arena, get_r(arena, n), visit)
}

/// Left subtree, node, right subtree: ascending key order.
pub fn inorder<N, E, F>(arena: &[N], root: Option<u32>, visit: &mut F) -> Result<(), E>
where
    N: Node,
    F: FnMut(&[N], u32) -> Result<(), E> + ?Sized,
{
    let Some(n) = root else {
        return Ok(());
    };
    inorder(arena, get_l(arena, n), visit)?;
    visit(arena, n)?;
    inorder(arena, get_r(arena, n), visit)
}

/// Left subtree, right subtree, node.
pub fn postorder<N, E, F>(arena: &[N], root: Option<u32>, visit: &mut F) -> Result<(), E>
where
    N: Node,
    F: FnMut(&[N], u32) -> Result<(), E> + ?Sized,
{
    let Some(n) = root else {
        return Ok(());
    };
    postorder(arena, get_l(arena, n), visit)?;
    postorder(arena, get_r(arena, n), visit)?;
    visit(arena, n)
}

/// Postorder walk whose visitor may mutate the arena.
///
/// A node's child links are read before its subtrees are walked, so the
/// visitor can reset or recycle every node it sees. Use it to tear a tree
/// down; the tree's root must be forgotten afterwards.
pub fn postorder_mut<N, E, F>(arena: &mut [N], root: Option<u32>, visit: &mut F) -> Result<(), E>
where
    N: Node,
    F: FnMut(&mut [N], u32) -> Result<(), E> + ?Sized,
{
    let Some(n) = root else {
        return Ok(());
    };
    let (l, r) = (get_l(arena, n), get_r(arena, n));
    postorder_mut(arena, l, visit)?;
    postorder_mut(arena, r, visit)?;
    visit(arena, n)
}

/// Display order for tree renderers: the root, then for every node its two
/// children before either child's own subtree.
///
/// Up to two levels this matches breadth-first order; deeper it is neither
/// breadth- nor depth-first. It is a layout helper, not an ordering
/// guarantee.
pub fn print_order<N, E, F>(arena: &[N], root: Option<u32>, visit: &mut F) -> Result<(), E>
where
    N: Node,
    F: FnMut(&[N], u32) -> Result<(), E> + ?Sized,
{
    fn children<N, E, F>(arena: &[N], n: u32, visit: &mut F) -> Result<(), E>
    where
        N: Node,
        F: FnMut(&[N], u32) -> Result<(), E> + ?Sized,
    {
        let (l, r) = (get_l(arena, n), get_r(arena, n));
        for child in [l, r].into_iter().flatten() {
            visit(arena, child)?;
        }
        for child in [l, r].into_iter().flatten() {
            children(arena, child, visit)?;
        }
        Ok(())
    }

    let Some(n) = root else {
        return Ok(());
    };
    visit(arena, n)?;
    children(arena, n, visit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Link;

    /// ```text
    ///         3
    ///       /   \
    ///      1     5
    ///     / \   / \
    ///    0   2 4   6
    /// ```
    fn perfect() -> (Vec<Link>, Option<u32>) {
        let mut arena = vec![Link::new(); 7];
        for (parent, l, r) in [(3, 1, 5), (1, 0, 2), (5, 4, 6)] {
            arena[parent].l = Some(l as u32);
            arena[parent].r = Some(r as u32);
            arena[l].p = Some(parent as u32);
            arena[r].p = Some(parent as u32);
        }
        (arena, Some(3))
    }

    macro_rules! collect {
        ($walk:ident) => {{
            let (arena, root) = perfect();
            let mut out = Vec::new();
            $walk::<_, (), _>(&arena, root, &mut |_, i| {
                out.push(i);
                Ok(())
            })
            .unwrap();
            out
        }};
    }

    #[test]
    fn orders() {
        assert_eq!(collect!(preorder), vec![3, 1, 0, 2, 5, 4, 6]);
        assert_eq!(collect!(inorder), vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(collect!(postorder), vec![0, 2, 1, 4, 6, 5, 3]);
        assert_eq!(collect!(print_order), vec![3, 1, 5, 0, 2, 4, 6]);
    }

    #[test]
    fn visitor_error_stops_walk() {
        let (arena, root) = perfect();
        let mut seen = Vec::new();
        let res = inorder(&arena, root, &mut |_, i| {
            seen.push(i);
            if i == 2 {
                Err(-7)
            } else {
                Ok(())
            }
        });
        assert_eq!(res, Err(-7));
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn postorder_mut_can_reset_nodes() {
        let (mut arena, root) = perfect();
        let mut order = Vec::new();
        postorder_mut::<_, (), _>(&mut arena, root, &mut |arena, i| {
            arena[i as usize].reset();
            order.push(i);
            Ok(())
        })
        .unwrap();
        assert_eq!(order, vec![0, 2, 1, 4, 6, 5, 3]);
        assert!(arena.iter().all(|n| *n == Link::new()));
    }

    #[test]
    fn empty_tree_visits_nothing() {
        let arena: Vec<Link> = Vec::new();
        let mut calls = 0;
        let res: Result<(), ()> = print_order(&arena, None, &mut |_, _| {
            calls += 1;
            Ok(())
        });
        assert!(res.is_ok());
        assert_eq!(calls, 0);
    }
}
