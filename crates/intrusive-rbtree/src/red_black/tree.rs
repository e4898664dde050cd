use std::convert::Infallible;
use std::fmt::Debug;
use std::marker::PhantomData;

use crate::error::{RbError, Violation};
use crate::traverse;
use crate::types::{default_comparator, KeyedNode, Node};
use crate::util;

use super::util::{assert_red_black_tree, insert, print, remove};

/// Red-black tree over caller-owned nodes.
///
/// The tree holds only the root index and the comparator. Nodes live in a
/// slice owned by the caller and passed into every operation, so one
/// `RbTree` must always be used with the same arena. Nothing here allocates
/// or frees nodes.
pub struct RbTree<K: ?Sized, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    root: Option<u32>,
    comparator: C,
    _key: PhantomData<fn(&K)>,
}

impl<K: Ord + ?Sized> RbTree<K, fn(&K, &K) -> i32> {
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K: Ord + ?Sized> Default for RbTree<K, fn(&K, &K) -> i32> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ?Sized, C> RbTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    /// Empty tree ordered by `comparator` (negative, zero, positive).
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            comparator,
            _key: PhantomData,
        }
    }

    pub fn root(&self) -> Option<u32> {
        self.root
    }

    pub(crate) fn set_root(&mut self, root: Option<u32>) {
        self.root = root;
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Node count; walks the whole tree.
    pub fn len<N: Node>(&self, arena: &[N]) -> usize {
        util::size(arena, self.root)
    }

    /// Empties the tree and resets the links of every node it held, so the
    /// nodes can be inserted again.
    pub fn clear<N: Node>(&mut self, arena: &mut [N]) {
        self.teardown(arena, |_, _| {});
    }

    /// Links node `n`, whose key the caller has already set.
    pub fn insert<N>(&mut self, arena: &mut [N], n: u32) -> Result<(), RbError>
    where
        N: KeyedNode<Key = K>,
    {
        self.root = insert(arena, self.root, n, &self.comparator)?;
        Ok(())
    }

    /// Node whose key compares equal to `key`.
    pub fn lookup<N>(&self, arena: &[N], key: &K) -> Option<u32>
    where
        N: KeyedNode<Key = K>,
    {
        util::find(arena, self.root, key, &self.comparator)
    }

    /// Node with `key`, or the greatest node below it.
    pub fn lookup_or_next_lower<N>(&self, arena: &[N], key: &K) -> Option<u32>
    where
        N: KeyedNode<Key = K>,
    {
        util::find_or_next_lower(arena, self.root, key, &self.comparator)
    }

    /// Unlinks node `n` and hands it back to the caller with reset links.
    ///
    /// # Panics
    ///
    /// If `n` is not linked.
    pub fn delete<N: Node>(&mut self, arena: &mut [N], n: u32) {
        self.root = remove(arena, self.root, n);
    }

    pub fn first<N: Node>(&self, arena: &[N]) -> Option<u32> {
        util::first(arena, self.root)
    }

    pub fn last<N: Node>(&self, arena: &[N]) -> Option<u32> {
        util::last(arena, self.root)
    }

    /// Ascending iterator over node indices.
    pub fn iter<'a, N: Node>(&self, arena: &'a [N]) -> Iter<'a, N> {
        Iter {
            arena,
            curr: self.first(arena),
        }
    }

    pub fn foreach_preorder<N, E, F>(&self, arena: &[N], mut visit: F) -> Result<(), E>
    where
        N: Node,
        F: FnMut(&[N], u32) -> Result<(), E>,
    {
        traverse::preorder(arena, self.root, &mut visit)
    }

    pub fn foreach_inorder<N, E, F>(&self, arena: &[N], mut visit: F) -> Result<(), E>
    where
        N: Node,
        F: FnMut(&[N], u32) -> Result<(), E>,
    {
        traverse::inorder(arena, self.root, &mut visit)
    }

    pub fn foreach_postorder<N, E, F>(&self, arena: &[N], mut visit: F) -> Result<(), E>
    where
        N: Node,
        F: FnMut(&[N], u32) -> Result<(), E>,
    {
        traverse::postorder(arena, self.root, &mut visit)
    }

    /// See [`traverse::print_order`].
    pub fn foreach_print<N, E, F>(&self, arena: &[N], mut visit: F) -> Result<(), E>
    where
        N: Node,
        F: FnMut(&[N], u32) -> Result<(), E>,
    {
        traverse::print_order(arena, self.root, &mut visit)
    }

    /// Empties the tree, resetting each node's links in postorder and then
    /// handing the node to `release`.
    pub fn teardown<N, F>(&mut self, arena: &mut [N], mut release: F)
    where
        N: Node,
        F: FnMut(&mut [N], u32),
    {
        let root = self.root.take();
        let walked = traverse::postorder_mut::<N, Infallible, _>(
            arena,
            root,
            &mut |arena: &mut [N], i| {
                arena[i as usize].link_mut().reset();
                release(arena, i);
                Ok(())
            },
        );
        match walked {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    pub fn assert_valid<N>(&self, arena: &[N]) -> Result<(), Violation>
    where
        N: KeyedNode<Key = K>,
    {
        assert_red_black_tree(arena, self.root, &self.comparator)
    }

    pub fn print<N>(&self, arena: &[N]) -> String
    where
        N: KeyedNode<Key = K>,
        K: Debug,
    {
        print(arena, self.root, "")
    }
}

/// Ascending iterator over the indices of a tree's nodes.
pub struct Iter<'a, N> {
    arena: &'a [N],
    curr: Option<u32>,
}

impl<N: Node> Iterator for Iter<'_, N> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let curr = self.curr?;
        self.curr = util::next(self.arena, curr);
        Some(curr)
    }
}
