//! nodes in a [`crate::queue::Queue`], and the arena slots that hold them.

/// a queue node.
pub struct Node<T> {
  /// index of the successor, `None` for the tail.
  pub next: Option<usize>,
  pub data: T,
}

impl<T> Node<T> {
  /// a fresh, unlinked node.
  pub const fn new(data: T) -> Self {
    Self { next: None, data }
  }
}

/// one cell of the node arena.
pub enum Slot<T> {
  Occupied(Node<T>),
  /// a free cell, linked to the next free cell.
  Vacant(Option<usize>),
}
