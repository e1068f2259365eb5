//! the underlying queue.

use core::fmt;
use core::mem;

use allocator_api2::alloc::{Allocator, Global};
use allocator_api2::vec::Vec;

use crate::diagnostics::{Diagnostics, Severity, Traced};
use crate::error::QueueError;
use crate::node::{Node, Slot};

const ALLOC_FAILED: &str = "memory allocation error";
const POP_EMPTY: &str = "can't pop item from queue: queue is empty";
const PEEK_EMPTY: &str = "can't peek item from queue: queue is empty";

/// a simple FIFO queue.
///
/// nodes are kept in an arena owned by the queue and linked by index, oldest
/// at `head`. vacated cells are threaded onto a free list and reused by later
/// pushes, so the arena only grows when every cell is occupied.
///
/// the queue is meant for single-threaded use. rejected operations are
/// reported to `D` and returned as a [`QueueError`].
pub struct Queue<T, D = Traced, A = Global>
where
  D: Diagnostics,
  A: Allocator,
{
  diagnostics: D,
  slots: Vec<Slot<T>, A>,
  free: Option<usize>,
  head: Option<usize>,
  tail: Option<usize>,
  len: usize,
}

impl<T> Queue<T, Traced, Global> {
  /// create a new queue.
  pub const fn new() -> Self {
    Self::with_diagnostics_in(Traced, Global)
  }
}

impl<T, D> Queue<T, D, Global>
where
  D: Diagnostics,
{
  /// create a new queue reporting to `diagnostics`.
  pub const fn with_diagnostics(diagnostics: D) -> Self {
    Self::with_diagnostics_in(diagnostics, Global)
  }
}

impl<T, A> Queue<T, Traced, A>
where
  A: Allocator,
{
  /// create a new queue with a given allocator.
  pub const fn new_in(alloc: A) -> Self {
    Self::with_diagnostics_in(Traced, alloc)
  }
}

// public APIs
impl<T, D, A> Queue<T, D, A>
where
  D: Diagnostics,
  A: Allocator,
{
  /// create a new queue reporting to `diagnostics`, with a given allocator.
  pub const fn with_diagnostics_in(diagnostics: D, alloc: A) -> Self {
    Self {
      diagnostics,
      slots: Vec::new_in(alloc),
      free: None,
      head: None,
      tail: None,
      len: 0,
    }
  }

  /// get the number of items in the queue.
  pub fn len(&self) -> usize {
    self.len
  }

  /// check if the queue is empty.
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// get the diagnostics sink.
  pub fn diagnostics(&self) -> &D {
    &self.diagnostics
  }

  /// get the underlying allocator.
  pub fn allocator(&self) -> &A {
    self.slots.allocator()
  }

  /// push an element to the back.
  ///
  /// if no memory can be obtained for the node, the queue is left untouched
  /// and the element is handed back with [`QueueError::Alloc`].
  pub fn push(&mut self, elem: T) -> Result<(), (T, QueueError)> {
    let idx = match self.insert_node(Node::new(elem)) {
      Ok(idx) => idx,
      Err(node) => {
        self.diagnostics.report(Severity::Fatal, ALLOC_FAILED);
        return Err((node.data, QueueError::Alloc));
      }
    };

    match self.tail.replace(idx) {
      Some(old_tail) => self.node_mut(old_tail).next = Some(idx),
      None => self.head = Some(idx),
    }
    self.len += 1;
    Ok(())
  }

  /// pop an element from the front.
  pub fn pop(&mut self) -> Result<T, QueueError> {
    self.take_head().ok_or_else(|| {
      self.diagnostics.report(Severity::Error, POP_EMPTY);
      QueueError::Empty
    })
  }

  /// get a reference to the front element.
  pub fn peek(&self) -> Result<&T, QueueError> {
    match self.head {
      Some(idx) => Ok(&self.node(idx).data),
      None => Err(self.empty_peek()),
    }
  }

  /// get a mutable reference to the front element.
  pub fn peek_mut(&mut self) -> Result<&mut T, QueueError> {
    match self.head {
      Some(idx) => Ok(&mut self.node_mut(idx).data),
      None => Err(self.empty_peek()),
    }
  }

  /// drop every element, front to back, and release the arena.
  pub fn clear(&mut self) {
    while self.take_head().is_some() {}
  }
}

impl<T> Default for Queue<T, Traced, Global> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T, D, A> Drop for Queue<T, D, A>
where
  D: Diagnostics,
  A: Allocator,
{
  fn drop(&mut self) {
    self.clear();
  }
}

impl<T, D, A> fmt::Debug for Queue<T, D, A>
where
  D: Diagnostics,
  A: Allocator,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Queue")
      .field("len", &self.len)
      .field("capacity", &self.slots.capacity())
      .finish_non_exhaustive()
  }
}

/// private APIs.
impl<T, D, A> Queue<T, D, A>
where
  D: Diagnostics,
  A: Allocator,
{
  /// unlink the front node and return its data, if any.
  fn take_head(&mut self) -> Option<T> {
    let idx = self.head?;
    let node = self.remove_node(idx);
    self.head = node.next;
    self.len -= 1;

    if self.head.is_none() {
      // every cell is vacant now: forget the free list, give the memory back.
      self.tail = None;
      self.free = None;
      self.slots.clear();
      self.slots.shrink_to_fit();
    }

    Some(node.data)
  }

  /// place `node` in a free cell, growing the arena if there is none.
  ///
  /// on allocation failure the node is handed back and nothing changes.
  fn insert_node(&mut self, node: Node<T>) -> Result<usize, Node<T>> {
    if let Some(idx) = self.free {
      self.free = match mem::replace(&mut self.slots[idx], Slot::Occupied(node)) {
        Slot::Vacant(next_free) => next_free,
        Slot::Occupied(_) => unreachable!("free list points at occupied cell {idx}"),
      };
      return Ok(idx);
    }

    let capacity = self.slots.capacity();
    if self.slots.try_reserve(1).is_err() {
      return Err(node);
    }
    if self.slots.capacity() != capacity {
      tracing::trace!(capacity = self.slots.capacity(), "grew node arena");
    }

    let idx = self.slots.len();
    self.slots.push(Slot::Occupied(node));
    Ok(idx)
  }

  /// vacate cell `idx`, returning the node it held.
  fn remove_node(&mut self, idx: usize) -> Node<T> {
    match mem::replace(&mut self.slots[idx], Slot::Vacant(self.free)) {
      Slot::Occupied(node) => {
        self.free = Some(idx);
        node
      }
      Slot::Vacant(_) => unreachable!("linked cell {idx} is vacant"),
    }
  }

  fn node(&self, idx: usize) -> &Node<T> {
    match &self.slots[idx] {
      Slot::Occupied(node) => node,
      Slot::Vacant(_) => unreachable!("linked cell {idx} is vacant"),
    }
  }

  fn node_mut(&mut self, idx: usize) -> &mut Node<T> {
    match &mut self.slots[idx] {
      Slot::Occupied(node) => node,
      Slot::Vacant(_) => unreachable!("linked cell {idx} is vacant"),
    }
  }

  fn empty_peek(&self) -> QueueError {
    self.diagnostics.report(Severity::Error, PEEK_EMPTY);
    QueueError::Empty
  }
}
