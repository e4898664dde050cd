use crate::types::{KeyedNode, Link, Node};

/// Ready-made key/value record for callers that do not need their own type.
#[derive(Clone, Debug)]
pub struct RbNode<K, V> {
    pub link: Link,
    pub k: K,
    pub v: V,
}

impl<K, V> RbNode<K, V> {
    pub fn new(k: K, v: V) -> Self {
        Self {
            link: Link::new(),
            k,
            v,
        }
    }
}

impl<K, V> Node for RbNode<K, V> {
    fn link(&self) -> &Link {
        &self.link
    }

    fn link_mut(&mut self) -> &mut Link {
        &mut self.link
    }
}

impl<K, V> KeyedNode for RbNode<K, V> {
    type Key = K;

    fn key(&self) -> &K {
        &self.k
    }
}
