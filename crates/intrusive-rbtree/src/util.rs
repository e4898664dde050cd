//! Binary-tree navigation over parent-linked arena nodes.
//!
//! None of these functions look at color, so they work on any tree shape.

use crate::types::{KeyedNode, Node};

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Leftmost node under `root`.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node under `root`.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, node) {
        return first(arena, Some(r));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_r(arena, pi) != Some(curr) {
            return Some(pi);
        }
        curr = pi;
        p = get_p(arena, pi);
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, node) {
        return last(arena, Some(l));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_l(arena, pi) != Some(curr) {
            return Some(pi);
        }
        curr = pi;
        p = get_p(arena, pi);
    }
    None
}

/// Number of nodes under `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let mut count = 0;
    let mut curr = first(arena, root);
    while let Some(i) = curr {
        count += 1;
        curr = next(arena, i);
    }
    count
}

/// Number of nodes on the longest downward path from `root`.
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    fn height_inner<N: Node>(arena: &[N], idx: u32) -> usize {
        let l = get_l(arena, idx).map_or(0, |l| height_inner(arena, l));
        let r = get_r(arena, idx).map_or(0, |r| height_inner(arena, r));
        1 + l.max(r)
    }
    root.map_or(0, |r| height_inner(arena, r))
}

/// Finds the node whose key compares equal to `key`.
pub fn find<N, C>(arena: &[N], root: Option<u32>, key: &N::Key, comparator: &C) -> Option<u32>
where
    N: KeyedNode,
    C: Fn(&N::Key, &N::Key) -> i32 + ?Sized,
{
    let mut curr = root;
    while let Some(i) = curr {
        let cmp = comparator(key, arena[i as usize].key());
        if cmp == 0 {
            return Some(i);
        }
        curr = if cmp < 0 {
            get_l(arena, i)
        } else {
            get_r(arena, i)
        };
    }
    None
}

/// Finds the node with `key`, or else the greatest node below it.
pub fn find_or_next_lower<N, C>(
    arena: &[N],
    root: Option<u32>,
    key: &N::Key,
    comparator: &C,
) -> Option<u32>
where
    N: KeyedNode,
    C: Fn(&N::Key, &N::Key) -> i32 + ?Sized,
{
    let mut curr = root;
    let mut result = None;
    while let Some(i) = curr {
        let cmp = comparator(arena[i as usize].key(), key);
        if cmp == 0 {
            return Some(i);
        }
        if cmp > 0 {
            curr = get_l(arena, i);
        } else {
            result = Some(i);
            curr = get_r(arena, i);
        }
    }
    result
}
