use std::mem;

use crate::error::{RbError, Violation};
use crate::types::default_comparator;
use crate::util::{get_l, get_p, get_r, set_l, set_p, set_r};

use super::tree::RbTree;
use super::types::RbNode;

/// Ordered map that owns its nodes.
///
/// Built on [`RbTree`] with a dense `Vec` arena: a removed node is swapped
/// with the last slot and the moved node's neighbours are repointed, so
/// indices returned by [`RbMap::find`] are only valid until the next
/// removal. Capacity is `u32::MAX` entries; inserting past that panics.
pub struct RbMap<K, V, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    arena: Vec<RbNode<K, V>>,
    tree: RbTree<K, C>,
}

impl<K: Ord, V> RbMap<K, V> {
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K: Ord, V> Default for RbMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> RbMap<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Vec::new(),
            tree: RbTree::with_comparator(comparator),
        }
    }

    /// Inserts `key`, returning the previous value if it was present.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let idx = u32::try_from(self.arena.len()).expect("RbMap holds at most u32::MAX entries");
        self.arena.push(RbNode::new(key, value));
        match self.tree.insert(&mut self.arena, idx) {
            Ok(()) => None,
            Err(RbError::DuplicateKey) => {
                let node = self.arena.pop()?;
                let existing = self.tree.lookup(&self.arena, &node.k)?;
                Some(mem::replace(&mut self.arena[existing as usize].v, node.v))
            }
        }
    }

    pub fn find(&self, key: &K) -> Option<u32> {
        self.tree.lookup(&self.arena, key)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|i| &self.arena[i as usize].v)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let i = self.find(key)?;
        Some(&mut self.arena[i as usize].v)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let idx = self.find(key)?;
        self.tree.delete(&mut self.arena, idx);

        // `insert` keeps every slot addressable by `u32`.
        let last = (self.arena.len() - 1) as u32;
        if idx != last {
            self.arena.swap(idx as usize, last as usize);
            self.relink_moved(last, idx);
        }
        self.arena.pop().map(|node| node.v)
    }

    /// Repoints the neighbours of the node that just moved from slot `from`
    /// to slot `to`.
    fn relink_moved(&mut self, from: u32, to: u32) {
        let arena = &mut self.arena[..];
        match get_p(arena, to) {
            None => self.tree.set_root(Some(to)),
            Some(p) if get_l(arena, p) == Some(from) => set_l(arena, p, Some(to)),
            Some(p) => set_r(arena, p, Some(to)),
        }
        for child in [get_l(arena, to), get_r(arena, to)].into_iter().flatten() {
            set_p(arena, child, Some(to));
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn clear(&mut self) {
        // Dropping the nodes makes resetting their links pointless.
        self.tree.set_root(None);
        self.arena.clear();
    }

    pub fn first(&self) -> Option<(&K, &V)> {
        self.tree.first(&self.arena).map(|i| self.entry(i))
    }

    pub fn last(&self) -> Option<(&K, &V)> {
        self.tree.last(&self.arena).map(|i| self.entry(i))
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.tree.iter(&self.arena).map(move |i| self.entry(i))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    fn entry(&self, i: u32) -> (&K, &V) {
        let node = &self.arena[i as usize];
        (&node.k, &node.v)
    }

    pub fn tree(&self) -> &RbTree<K, C> {
        &self.tree
    }

    pub fn nodes(&self) -> &[RbNode<K, V>] {
        &self.arena
    }

    pub fn assert_valid(&self) -> Result<(), Violation> {
        self.tree.assert_valid(&self.arena)
    }
}
