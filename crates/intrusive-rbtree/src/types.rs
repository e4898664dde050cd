//! Node link definitions.
//!
//! Nodes are caller-owned records kept in a slice. Every "pointer" is an
//! `Option<u32>` index into that slice and `None` plays the nil sentinel,
//! so nil is black by construction and never dereferenced.
//!
//! A record joins a tree by embedding a [`Link`] and implementing [`Node`]
//! over it. There is no offset arithmetic: a node reference is an index, and
//! the outer record is simply `&arena[idx]`.

/// Node color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    #[default]
    Red,
    Black,
}

impl Color {
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Black => "black",
        }
    }
}

/// Parent/left/right links plus color, embedded in a caller record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Link {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub color: Color,
}

impl Link {
    pub const fn new() -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            color: Color::Red,
        }
    }

    /// Forgets all links. A reset node is unlinked unless it is the root.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Access to the [`Link`] embedded in a record.
///
/// Only `link` and `link_mut` need implementing; the field accessors are
/// provided.
pub trait Node {
    fn link(&self) -> &Link;
    fn link_mut(&mut self) -> &mut Link;

    #[inline]
    fn p(&self) -> Option<u32> {
        self.link().p
    }

    #[inline]
    fn l(&self) -> Option<u32> {
        self.link().l
    }

    #[inline]
    fn r(&self) -> Option<u32> {
        self.link().r
    }

    #[inline]
    fn set_p(&mut self, v: Option<u32>) {
        self.link_mut().p = v;
    }

    #[inline]
    fn set_l(&mut self, v: Option<u32>) {
        self.link_mut().l = v;
    }

    #[inline]
    fn set_r(&mut self, v: Option<u32>) {
        self.link_mut().r = v;
    }

    #[inline]
    fn color(&self) -> Color {
        self.link().color
    }

    #[inline]
    fn set_color(&mut self, color: Color) {
        self.link_mut().color = color;
    }

    #[inline]
    fn is_black(&self) -> bool {
        self.link().color == Color::Black
    }
}

impl Node for Link {
    fn link(&self) -> &Link {
        self
    }

    fn link_mut(&mut self) -> &mut Link {
        self
    }
}

/// A node that exposes an orderable key.
///
/// The engine never inspects the key itself; it only hands it to the
/// tree's comparator.
pub trait KeyedNode: Node {
    type Key: ?Sized;

    fn key(&self) -> &Self::Key;
}

/// Comparator for keys with a total [`Ord`]: negative, zero or positive.
pub fn default_comparator<K: Ord + ?Sized>(a: &K, b: &K) -> i32 {
    a.cmp(b) as i32
}
