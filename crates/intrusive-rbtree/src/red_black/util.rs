use log::{debug, trace};

use crate::error::{RbError, Violation};
use crate::types::{Color, KeyedNode, Node};
use crate::util::{first, get_l, get_p, get_r, next, set_l, set_p, set_r};

#[path = "util/print.rs"]
mod print_impl;

pub use print_impl::print;

#[inline]
fn is_black<N: Node>(arena: &[N], i: Option<u32>) -> bool {
    i.map_or(true, |i| arena[i as usize].is_black())
}

/// `i` itself when it is present and red.
#[inline]
fn red<N: Node>(arena: &[N], i: Option<u32>) -> Option<u32> {
    i.filter(|&i| !arena[i as usize].is_black())
}

#[inline]
fn set_color<N: Node>(arena: &mut [N], i: u32, color: Color) {
    arena[i as usize].set_color(color);
}

/// Points the slot of `p` that held `old` at `new`; with no `p` the slot is
/// the root.
fn replace_child<N: Node>(
    arena: &mut [N],
    root: &mut Option<u32>,
    p: Option<u32>,
    old: u32,
    new: Option<u32>,
) {
    match p {
        None => *root = new,
        Some(p) if get_l(arena, p) == Some(old) => set_l(arena, p, new),
        Some(p) => set_r(arena, p, new),
    }
}

/// Puts `v` where `u` hangs. `u` keeps its own stale links.
fn transplant<N: Node>(arena: &mut [N], root: &mut Option<u32>, u: u32, v: Option<u32>) {
    let p = get_p(arena, u);
    replace_child(arena, root, p, u, v);
    if let Some(v) = v {
        set_p(arena, v, p);
    }
}

/// Rotates `x` down to the left; its right child takes its place.
pub(crate) fn rotate_left<N: Node>(arena: &mut [N], root: &mut Option<u32>, x: u32) {
    let y = get_r(arena, x).expect("left rotation needs a right child");
    let yl = get_l(arena, y);

    set_r(arena, x, yl);
    if let Some(yl) = yl {
        set_p(arena, yl, Some(x));
    }

    let p = get_p(arena, x);
    set_p(arena, y, p);
    replace_child(arena, root, p, x, Some(y));

    set_l(arena, y, Some(x));
    set_p(arena, x, Some(y));
}

/// Rotates `y` down to the right; its left child takes its place.
pub(crate) fn rotate_right<N: Node>(arena: &mut [N], root: &mut Option<u32>, y: u32) {
    let x = get_l(arena, y).expect("right rotation needs a left child");
    let xr = get_r(arena, x);

    set_l(arena, y, xr);
    if let Some(xr) = xr {
        set_p(arena, xr, Some(y));
    }

    let p = get_p(arena, y);
    set_p(arena, x, p);
    replace_child(arena, root, p, y, Some(x));

    set_r(arena, x, Some(y));
    set_p(arena, y, Some(x));
}

/// Links node `n` into the tree rooted at `root` and rebalances.
///
/// The node's links are overwritten; only its key is read. Returns the new
/// root, or [`RbError::DuplicateKey`] with the tree untouched when an equal
/// key is already present.
///
/// # Panics
///
/// If `n` is already linked (it is the root or has a parent).
pub fn insert<N, C>(
    arena: &mut [N],
    root: Option<u32>,
    n: u32,
    comparator: &C,
) -> Result<Option<u32>, RbError>
where
    N: KeyedNode,
    C: Fn(&N::Key, &N::Key) -> i32 + ?Sized,
{
    assert!(
        get_p(arena, n).is_none() && root != Some(n),
        "node {n} is already linked"
    );

    let mut parent = None;
    let mut left = false;
    let mut curr = root;
    while let Some(c) = curr {
        let cmp = comparator(arena[n as usize].key(), arena[c as usize].key());
        if cmp == 0 {
            debug!("insert of node {n} rejected: key equals node {c}");
            return Err(RbError::DuplicateKey);
        }
        parent = Some(c);
        left = cmp < 0;
        curr = if left { get_l(arena, c) } else { get_r(arena, c) };
    }

    let link = arena[n as usize].link_mut();
    link.reset();
    link.p = parent;

    let mut root = root;
    match parent {
        None => root = Some(n),
        Some(p) if left => set_l(arena, p, Some(n)),
        Some(p) => set_r(arena, p, Some(n)),
    }
    trace!("linked node {n} under {parent:?}");

    insert_fixup(arena, &mut root, n);
    Ok(root)
}

/// Restores "no red node has a red parent" walking up from the red node `n`.
pub(crate) fn insert_fixup<N: Node>(arena: &mut [N], root: &mut Option<u32>, mut n: u32) {
    while let Some(mut p) = red(arena, get_p(arena, n)) {
        // A red parent is never the root.
        let g = get_p(arena, p).expect("red parent has a parent");

        if get_l(arena, g) == Some(p) {
            if let Some(u) = red(arena, get_r(arena, g)) {
                set_color(arena, p, Color::Black);
                set_color(arena, u, Color::Black);
                set_color(arena, g, Color::Red);
                n = g;
                continue;
            }
            if get_r(arena, p) == Some(n) {
                rotate_left(arena, root, p);
                std::mem::swap(&mut n, &mut p);
            }
            set_color(arena, p, Color::Black);
            set_color(arena, g, Color::Red);
            rotate_right(arena, root, g);
        } else {
            if let Some(u) = red(arena, get_l(arena, g)) {
                set_color(arena, p, Color::Black);
                set_color(arena, u, Color::Black);
                set_color(arena, g, Color::Red);
                n = g;
                continue;
            }
            if get_l(arena, p) == Some(n) {
                rotate_right(arena, root, p);
                std::mem::swap(&mut n, &mut p);
            }
            set_color(arena, p, Color::Black);
            set_color(arena, g, Color::Red);
            rotate_left(arena, root, g);
        }
    }

    if let Some(r) = *root {
        set_color(arena, r, Color::Black);
    }
}

/// Unlinks node `n` and rebalances. Returns the new root.
///
/// Exactly `n` leaves the tree. When `n` has two children its in-order
/// successor is relinked into `n`'s position and takes `n`'s color; no key
/// moves between records. On return `n`'s links are reset.
///
/// # Panics
///
/// If `n` is not linked (it is not the root and has no parent).
pub fn remove<N: Node>(arena: &mut [N], root: Option<u32>, n: u32) -> Option<u32> {
    assert!(
        get_p(arena, n).is_some() || root == Some(n),
        "node {n} is not linked"
    );

    let mut root = root;
    let l = get_l(arena, n);
    let r = get_r(arena, n);

    // `x` moves into the detached slot; `x_parent` tracks it while `x` is nil.
    let (x, x_parent, removed) = match (l, r) {
        (Some(l), Some(r)) => {
            let mut y = r;
            while let Some(yl) = get_l(arena, y) {
                y = yl;
            }
            let removed = arena[y as usize].color();
            let x = get_r(arena, y);
            let x_parent = if y == r {
                Some(y)
            } else {
                let yp = get_p(arena, y);
                transplant(arena, &mut root, y, x);
                set_r(arena, y, Some(r));
                set_p(arena, r, Some(y));
                yp
            };
            transplant(arena, &mut root, n, Some(y));
            set_l(arena, y, Some(l));
            set_p(arena, l, Some(y));
            let color = arena[n as usize].color();
            set_color(arena, y, color);
            trace!("relinked successor {y} in place of node {n}");
            (x, x_parent, removed)
        }
        _ => {
            let x = l.or(r);
            let x_parent = get_p(arena, n);
            let removed = arena[n as usize].color();
            transplant(arena, &mut root, n, x);
            (x, x_parent, removed)
        }
    };

    arena[n as usize].link_mut().reset();
    trace!("unlinked node {n}");

    if removed == Color::Black {
        delete_fixup(arena, &mut root, x, x_parent);
    }
    root
}

/// Pays back the black deficit carried by `x` (possibly nil) below `parent`.
pub(crate) fn delete_fixup<N: Node>(
    arena: &mut [N],
    root: &mut Option<u32>,
    mut x: Option<u32>,
    mut parent: Option<u32>,
) {
    while let Some(p) = parent {
        if !is_black(arena, x) {
            break;
        }

        if get_l(arena, p) == x {
            let mut s = get_r(arena, p).expect("deficient side has a sibling");
            if !arena[s as usize].is_black() {
                set_color(arena, s, Color::Black);
                set_color(arena, p, Color::Red);
                rotate_left(arena, root, p);
                s = get_r(arena, p).expect("red sibling has children");
            }
            if is_black(arena, get_l(arena, s)) && is_black(arena, get_r(arena, s)) {
                set_color(arena, s, Color::Red);
                x = Some(p);
                parent = get_p(arena, p);
                continue;
            }
            if is_black(arena, get_r(arena, s)) {
                let near = get_l(arena, s).expect("near nephew is red");
                set_color(arena, near, Color::Black);
                set_color(arena, s, Color::Red);
                rotate_right(arena, root, s);
                s = near;
            }
            let color = arena[p as usize].color();
            set_color(arena, s, color);
            set_color(arena, p, Color::Black);
            if let Some(far) = get_r(arena, s) {
                set_color(arena, far, Color::Black);
            }
            rotate_left(arena, root, p);
        } else {
            let mut s = get_l(arena, p).expect("deficient side has a sibling");
            if !arena[s as usize].is_black() {
                set_color(arena, s, Color::Black);
                set_color(arena, p, Color::Red);
                rotate_right(arena, root, p);
                s = get_l(arena, p).expect("red sibling has children");
            }
            if is_black(arena, get_l(arena, s)) && is_black(arena, get_r(arena, s)) {
                set_color(arena, s, Color::Red);
                x = Some(p);
                parent = get_p(arena, p);
                continue;
            }
            if is_black(arena, get_l(arena, s)) {
                let near = get_r(arena, s).expect("near nephew is red");
                set_color(arena, near, Color::Black);
                set_color(arena, s, Color::Red);
                rotate_left(arena, root, s);
                s = near;
            }
            let color = arena[p as usize].color();
            set_color(arena, s, color);
            set_color(arena, p, Color::Black);
            if let Some(far) = get_l(arena, s) {
                set_color(arena, far, Color::Black);
            }
            rotate_right(arena, root, p);
        }

        x = *root;
        break;
    }

    if let Some(x) = x {
        set_color(arena, x, Color::Black);
    }
}

/// Checks the red-black invariants, parent links and strict key order.
pub fn assert_red_black_tree<N, C>(
    arena: &[N],
    root: Option<u32>,
    comparator: &C,
) -> Result<(), Violation>
where
    N: KeyedNode,
    C: Fn(&N::Key, &N::Key) -> i32 + ?Sized,
{
    let Some(root) = root else {
        return Ok(());
    };

    if arena[root as usize].p().is_some() {
        return Err(Violation::RootHasParent(root));
    }
    if !arena[root as usize].is_black() {
        return Err(Violation::RedRoot(root));
    }

    fn black_height<N: Node>(arena: &[N], node: Option<u32>) -> Result<usize, Violation> {
        let Some(node) = node else {
            return Ok(0);
        };

        let l = get_l(arena, node);
        let r = get_r(arena, node);

        for child in [l, r].into_iter().flatten() {
            if get_p(arena, child) != Some(node) {
                return Err(Violation::BrokenParentLink {
                    parent: node,
                    child,
                });
            }
            if !arena[node as usize].is_black() && !arena[child as usize].is_black() {
                return Err(Violation::RedRed { node, child });
            }
        }

        let left = black_height(arena, l)?;
        let right = black_height(arena, r)?;
        if left != right {
            return Err(Violation::BlackHeight { node, left, right });
        }

        Ok(left + usize::from(arena[node as usize].is_black()))
    }

    black_height(arena, Some(root))?;

    let mut prev = None;
    let mut curr = first(arena, Some(root));
    while let Some(i) = curr {
        if let Some(prev) = prev {
            if comparator(arena[prev as usize].key(), arena[i as usize].key()) >= 0 {
                return Err(Violation::Order { prev, next: i });
            }
        }
        prev = Some(i);
        curr = next(arena, i);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::red_black::RbNode;
    use crate::types::default_comparator;

    fn arena_of(keys: &[i32]) -> Vec<RbNode<i32, ()>> {
        keys.iter().map(|&k| RbNode::new(k, ())).collect()
    }

    #[test]
    fn rotations_preserve_inorder_and_fix_root() {
        // 0 -> right 1 -> right 2, a plain chain.
        let mut arena = arena_of(&[0, 1, 2]);
        arena[0].link.r = Some(1);
        arena[1].link.p = Some(0);
        arena[1].link.r = Some(2);
        arena[2].link.p = Some(1);
        let mut root = Some(0);

        rotate_left(&mut arena, &mut root, 0);
        assert_eq!(root, Some(1));
        assert_eq!(arena[1].link.p, None);
        assert_eq!(arena[1].link.l, Some(0));
        assert_eq!(arena[1].link.r, Some(2));
        assert_eq!(arena[0].link.p, Some(1));

        rotate_right(&mut arena, &mut root, 1);
        assert_eq!(root, Some(0));
        assert_eq!(arena[0].link.r, Some(1));
        assert_eq!(arena[1].link.p, Some(0));
        assert_eq!(arena[1].link.r, Some(2));
        assert_eq!(arena[1].link.l, None);
    }

    #[test]
    fn rotation_moves_inner_grandchild() {
        //     1
        //    / \
        //   0   3
        //      / \
        //     2   4
        let mut arena = arena_of(&[0, 1, 2, 3, 4]);
        arena[1].link.l = Some(0);
        arena[1].link.r = Some(3);
        arena[0].link.p = Some(1);
        arena[3].link.p = Some(1);
        arena[3].link.l = Some(2);
        arena[3].link.r = Some(4);
        arena[2].link.p = Some(3);
        arena[4].link.p = Some(3);
        let mut root = Some(1);

        rotate_left(&mut arena, &mut root, 1);
        assert_eq!(root, Some(3));
        assert_eq!(arena[1].link.r, Some(2));
        assert_eq!(arena[2].link.p, Some(1));
        assert_eq!(arena[3].link.l, Some(1));
    }

    #[test]
    fn ascending_inserts_stay_balanced() {
        let mut arena = arena_of(&(0..64).collect::<Vec<_>>());
        let mut root = None;
        for i in 0..64 {
            root = insert(&mut arena, root, i, &default_comparator::<i32>).unwrap();
            assert_red_black_tree(&arena, root, &default_comparator::<i32>).unwrap();
        }
        assert!(crate::util::height(&arena, root) <= 12);
    }

    #[test]
    fn duplicate_insert_leaves_node_unlinked() {
        let mut arena = arena_of(&[7, 7]);
        let root = insert(&mut arena, None, 0, &default_comparator::<i32>).unwrap();
        assert_eq!(
            insert(&mut arena, root, 1, &default_comparator::<i32>),
            Err(RbError::DuplicateKey)
        );
        assert_eq!(arena[1].link.p, None);
        assert_eq!(arena[0].link.l, None);
        assert_eq!(arena[0].link.r, None);
    }

    #[test]
    fn removing_two_child_node_relinks_successor() {
        let mut arena = arena_of(&[20, 10, 30, 25, 40]);
        let mut root = None;
        for i in 0..5 {
            root = insert(&mut arena, root, i, &default_comparator::<i32>).unwrap();
        }
        root = remove(&mut arena, root, 0);
        assert_red_black_tree(&arena, root, &default_comparator::<i32>).unwrap();
        assert_eq!(arena[0].link, crate::types::Link::new());
        // Keys never move between records.
        assert_eq!(
            arena.iter().map(|n| n.k).collect::<Vec<_>>(),
            vec![20, 10, 30, 25, 40]
        );
        assert_eq!(crate::util::size(&arena, root), 4);
    }

    #[test]
    #[should_panic(expected = "is not linked")]
    fn removing_unlinked_node_panics() {
        let mut arena = arena_of(&[1, 2]);
        let root = insert(&mut arena, None, 0, &default_comparator::<i32>).unwrap();
        remove(&mut arena, root, 1);
    }

    #[test]
    #[should_panic(expected = "is already linked")]
    fn inserting_linked_node_panics() {
        let mut arena = arena_of(&[1, 2]);
        let mut root = insert(&mut arena, None, 0, &default_comparator::<i32>).unwrap();
        root = insert(&mut arena, root, 1, &default_comparator::<i32>).unwrap();
        let _ = insert(&mut arena, root, 1, &default_comparator::<i32>);
    }

    #[test]
    fn validator_reports_red_root() {
        let mut arena = arena_of(&[1]);
        let root = insert(&mut arena, None, 0, &default_comparator::<i32>).unwrap();
        arena[0].link.color = Color::Red;
        assert_eq!(
            assert_red_black_tree(&arena, root, &default_comparator::<i32>),
            Err(Violation::RedRoot(0))
        );
    }
}
