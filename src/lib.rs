#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, allow(unused_attributes))]
#![deny(missing_docs)]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!("`block-deque` requires either the `std` or the `alloc` feature");

#[cfg(all(not(feature = "std"), feature = "alloc"))]
extern crate alloc as std;

#[cfg(feature = "std")]
extern crate std;

use core::{
  cmp::Ordering,
  fmt,
  hash::{Hash, Hasher},
  mem,
  ops::{Index, IndexMut},
};
use std::{boxed::Box, vec::Vec};

use generic_array::{
  typenum::{Unsigned, U128},
  GenericArray,
};

mod macros;

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde;


/// Capacity of a single storage block, in elements. Internal tuning knob.
type BlockLen = U128;

const BLOCK_SIZE: usize = BlockLen::USIZE;

/// One fixed-capacity storage block, exclusively owned by its slot in the
/// indirection array.
type Block = Box<GenericArray<i32, BlockLen>>;

#[inline]
fn new_block() -> Block {
  Box::new(GenericArray::default())
}

/// A growable double-ended queue of `i32` backed by a ring of fixed-size
/// blocks.
///
/// `BlockDeque` provides amortized O(1) insertion and removal at both ends
/// and O(1) indexing. Unlike [`std::collections::VecDeque`], growing the
/// deque never relocates elements: it allocates one more block and rebuilds
/// only the indirection array of block handles, so the cost of growth is
/// proportional to the block count, not the element count.
///
/// Storage is two-level. The indirection array owns the blocks and is used
/// as a circular buffer: `first_block` and `last_block` mark the occupied
/// run in ring order, while `pos_begin` and `pos_end` delimit the logical
/// range inside the first and last occupied blocks. Every block strictly
/// between the two ring pointers is fully occupied.
///
/// # Preconditions over checks
///
/// Indexing and the raw [`pop_back`](BlockDeque::pop_back)/
/// [`pop_front`](BlockDeque::pop_front) do **not** check against the logical
/// length. Violating their documented preconditions is memory-safe but
/// yields meaningless values (debug builds assert). Use
/// [`get`](BlockDeque::get), [`get_mut`](BlockDeque::get_mut),
/// [`try_pop_back`](BlockDeque::try_pop_back) and
/// [`try_pop_front`](BlockDeque::try_pop_front) for checked access.
///
/// ## Examples
///
/// ```rust
/// use block_deque::BlockDeque;
///
/// let mut deque = BlockDeque::new();
///
/// deque.push_back(1);
/// deque.push_back(2);
/// deque.push_front(0);
///
/// assert_eq!(deque.len(), 3);
/// assert_eq!(deque[0], 0);
/// assert_eq!(deque[1], 1);
/// assert_eq!(deque[2], 2);
///
/// assert_eq!(deque.pop_front(), 0);
/// assert_eq!(deque.pop_back(), 2);
/// assert_eq!(deque.len(), 1);
/// ```
///
/// Growth allocates blocks, never copies elements:
///
/// ```rust
/// use block_deque::BlockDeque;
///
/// let mut deque = BlockDeque::new();
/// assert_eq!(deque.capacity(), 128);
///
/// for value in 0..129 {
///     deque.push_back(value);
/// }
///
/// // One more block was chained in; nothing moved.
/// assert_eq!(deque.capacity(), 256);
/// assert_eq!(deque[0], 0);
/// assert_eq!(deque[128], 128);
/// ```
///
/// [`std::collections::VecDeque`]: https://doc.rust-lang.org/std/collections/struct.VecDeque.html
#[derive(Clone)]
pub struct BlockDeque {
  // Ring of owned blocks; every slot holds an allocated block, occupied or
  // not. Never shrinks once grown.
  blocks: Vec<Block>,
  first_block: usize,
  last_block: usize,
  pos_begin: usize,
  pos_end: usize,
}

impl Default for BlockDeque {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Debug for BlockDeque {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list()
      .entries((0..self.len()).map(|index| self[index]))
      .finish()
  }
}

impl PartialEq for BlockDeque {
  fn eq(&self, other: &Self) -> bool {
    self.len() == other.len() && (0..self.len()).all(|index| self[index] == other[index])
  }
}

impl Eq for BlockDeque {}

macro_rules! __impl_slice_eq {
  ([$($vars:tt)*] $rhs:ty) => {
    impl<$($vars)*> PartialEq<$rhs> for BlockDeque {
      fn eq(&self, other: &$rhs) -> bool {
        let other: &[i32] = &other[..];
        self.len() == other.len() && (0..other.len()).all(|index| self[index] == other[index])
      }
    }
  };
}

__impl_slice_eq! { [] Vec<i32> }
__impl_slice_eq! { [] &[i32] }
__impl_slice_eq! { [] &mut [i32] }
__impl_slice_eq! { [const N: usize] [i32; N] }
__impl_slice_eq! { [const N: usize] &[i32; N] }

impl PartialOrd for BlockDeque {
  #[inline]
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for BlockDeque {
  fn cmp(&self, other: &Self) -> Ordering {
    (0..self.len())
      .map(|index| self[index])
      .cmp((0..other.len()).map(|index| other[index]))
  }
}

impl Hash for BlockDeque {
  fn hash<H: Hasher>(&self, state: &mut H) {
    state.write_usize(self.len());
    // Hash logical contents; physically different block layouts of the same
    // sequence must agree.
    for index in 0..self.len() {
      self[index].hash(state);
    }
  }
}

impl Index<usize> for BlockDeque {
  type Output = i32;

  /// Unchecked against the logical length; see [`BlockDeque::get`] for the
  /// checked variant.
  #[inline]
  fn index(&self, index: usize) -> &i32 {
    let (block, offset) = self.to_physical(index);
    &self.blocks[block][offset]
  }
}

impl IndexMut<usize> for BlockDeque {
  /// Unchecked against the logical length; see [`BlockDeque::get_mut`] for
  /// the checked variant.
  #[inline]
  fn index_mut(&mut self, index: usize) -> &mut i32 {
    let (block, offset) = self.to_physical(index);
    &mut self.blocks[block][offset]
  }
}

impl<const N: usize> From<[i32; N]> for BlockDeque {
  #[inline]
  fn from(values: [i32; N]) -> Self {
    Self::from_slice(&values)
  }
}

impl From<&[i32]> for BlockDeque {
  #[inline]
  fn from(values: &[i32]) -> Self {
    Self::from_slice(values)
  }
}

impl From<Vec<i32>> for BlockDeque {
  #[inline]
  fn from(values: Vec<i32>) -> Self {
    Self::from_slice(&values)
  }
}

impl BlockDeque {
  /// Creates an empty deque with a single pre-allocated block.
  ///
  /// ## Examples
  ///
  /// ```rust
  /// use block_deque::BlockDeque;
  ///
  /// let deque = BlockDeque::new();
  /// assert!(deque.is_empty());
  /// assert_eq!(deque.capacity(), 128);
  /// ```
  #[inline]
  pub fn new() -> Self {
    Self {
      blocks: std::vec![new_block()],
      first_block: 0,
      last_block: 0,
      pos_begin: 0,
      pos_end: 0,
    }
  }

  /// Creates a deque of `len` elements, all set to zero, packed into the
  /// fewest blocks that hold them.
  ///
  /// `zeroed(0)` is equivalent to [`new`](BlockDeque::new).
  ///
  /// ## Examples
  ///
  /// ```rust
  /// use block_deque::BlockDeque;
  ///
  /// let deque = BlockDeque::zeroed(200);
  /// assert_eq!(deque.len(), 200);
  /// assert_eq!(deque.capacity(), 256);
  /// assert_eq!(deque[199], 0);
  ///
  /// // An exact multiple of the block size fills its last block completely.
  /// let full = BlockDeque::zeroed(128);
  /// assert_eq!(full.capacity(), 128);
  /// ```
  pub fn zeroed(len: usize) -> Self {
    if len == 0 {
      return Self::new();
    }
    let cnt_blocks = len.div_ceil(BLOCK_SIZE);
    Self {
      blocks: (0..cnt_blocks).map(|_| new_block()).collect(),
      first_block: 0,
      last_block: cnt_blocks - 1,
      pos_begin: 0,
      pos_end: (len - 1) % BLOCK_SIZE + 1,
    }
  }

  /// Creates a deque holding the given values in order.
  ///
  /// ## Examples
  ///
  /// ```rust
  /// use block_deque::BlockDeque;
  ///
  /// let deque = BlockDeque::from_slice(&[1, 2, 3]);
  /// assert_eq!(deque, [1, 2, 3]);
  /// ```
  pub fn from_slice(values: &[i32]) -> Self {
    if values.is_empty() {
      return Self::new();
    }
    let cnt_blocks = values.len().div_ceil(BLOCK_SIZE);
    let mut blocks = Vec::with_capacity(cnt_blocks);
    for chunk in values.chunks(BLOCK_SIZE) {
      let mut block = new_block();
      block.as_mut_slice()[..chunk.len()].copy_from_slice(chunk);
      blocks.push(block);
    }
    Self {
      blocks,
      first_block: 0,
      last_block: cnt_blocks - 1,
      pos_begin: 0,
      pos_end: (values.len() - 1) % BLOCK_SIZE + 1,
    }
  }

  /// Creates a deque from a native array.
  ///
  /// ## Examples
  ///
  /// ```rust
  /// use block_deque::BlockDeque;
  ///
  /// let deque = BlockDeque::from_array([10, 20, 30]);
  /// assert_eq!(deque.len(), 3);
  /// assert_eq!(deque[0], 10);
  /// ```
  #[inline]
  pub fn from_array<const N: usize>(values: [i32; N]) -> Self {
    Self::from_slice(&values)
  }

  /// Returns the number of elements the currently allocated blocks can hold.
  ///
  /// The deque never releases blocks, so this only grows.
  ///
  /// ## Examples
  ///
  /// ```rust
  /// use block_deque::BlockDeque;
  ///
  /// let deque = BlockDeque::zeroed(300);
  /// assert_eq!(deque.capacity(), 384);
  /// ```
  #[inline]
  pub fn capacity(&self) -> usize {
    self.blocks.len() * BLOCK_SIZE
  }

  /// Returns the number of elements in the deque.
  ///
  /// ## Examples
  ///
  /// ```rust
  /// use block_deque::BlockDeque;
  ///
  /// let mut deque = BlockDeque::new();
  /// assert_eq!(deque.len(), 0);
  /// deque.push_back(1);
  /// assert_eq!(deque.len(), 1);
  /// ```
  pub fn len(&self) -> usize {
    if self.first_block == self.last_block {
      return self.pos_end - self.pos_begin;
    }
    let occupied = self.ring_distance(self.first_block, self.last_block) + 1;
    occupied * BLOCK_SIZE - self.pos_begin - (BLOCK_SIZE - self.pos_end)
  }

  /// Returns `true` if the deque is empty.
  ///
  /// ## Examples
  ///
  /// ```rust
  /// use block_deque::BlockDeque;
  ///
  /// let mut deque = BlockDeque::new();
  /// assert!(deque.is_empty());
  /// deque.push_front(1);
  /// assert!(!deque.is_empty());
  /// ```
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Provides a reference to the element at the given index, or `None` if it
  /// is out of range.
  ///
  /// Index 0 is the front of the deque.
  ///
  /// ## Examples
  ///
  /// ```rust
  /// use block_deque::BlockDeque;
  ///
  /// let deque = BlockDeque::from_slice(&[10, 20]);
  /// assert_eq!(deque.get(1), Some(&20));
  /// assert_eq!(deque.get(2), None);
  /// ```
  #[inline]
  pub fn get(&self, index: usize) -> Option<&i32> {
    if index < self.len() {
      let (block, offset) = self.to_physical(index);
      Some(&self.blocks[block][offset])
    } else {
      None
    }
  }

  /// Provides a mutable reference to the element at the given index, or
  /// `None` if it is out of range.
  ///
  /// ## Examples
  ///
  /// ```rust
  /// use block_deque::BlockDeque;
  ///
  /// let mut deque = BlockDeque::from_slice(&[10, 20]);
  /// *deque.get_mut(0).unwrap() += 5;
  /// assert_eq!(deque[0], 15);
  /// ```
  #[inline]
  pub fn get_mut(&mut self, index: usize) -> Option<&mut i32> {
    if index < self.len() {
      let (block, offset) = self.to_physical(index);
      Some(&mut self.blocks[block][offset])
    } else {
      None
    }
  }

  /// Provides a reference to the front element, or `None` if the deque is
  /// empty.
  #[inline]
  pub fn front(&self) -> Option<&i32> {
    self.get(0)
  }

  /// Provides a mutable reference to the front element, or `None` if the
  /// deque is empty.
  #[inline]
  pub fn front_mut(&mut self) -> Option<&mut i32> {
    self.get_mut(0)
  }

  /// Provides a reference to the back element, or `None` if the deque is
  /// empty.
  ///
  /// ## Examples
  ///
  /// ```rust
  /// use block_deque::BlockDeque;
  ///
  /// let deque = BlockDeque::from_slice(&[1, 2, 3]);
  /// assert_eq!(deque.back(), Some(&3));
  /// ```
  #[inline]
  pub fn back(&self) -> Option<&i32> {
    self.len().checked_sub(1).and_then(|last| self.get(last))
  }

  /// Provides a mutable reference to the back element, or `None` if the
  /// deque is empty.
  #[inline]
  pub fn back_mut(&mut self) -> Option<&mut i32> {
    self.len().checked_sub(1).and_then(|last| self.get_mut(last))
  }

  /// Appends an element to the back of the deque.
  ///
  /// Amortized O(1): when both the last block and the ring are full, one
  /// fresh block is allocated and only block handles move.
  ///
  /// ## Examples
  ///
  /// ```rust
  /// use block_deque::BlockDeque;
  ///
  /// let mut deque = BlockDeque::new();
  /// deque.push_back(1);
  /// deque.push_back(2);
  /// assert_eq!(deque.back(), Some(&2));
  /// ```
  pub fn push_back(&mut self, value: i32) {
    // Room left in the last occupied block.
    if self.pos_end != BLOCK_SIZE {
      self.blocks[self.last_block][self.pos_end] = value;
      self.pos_end += 1;
      return;
    }

    // A spare block sits after `last_block` in the ring.
    let next = self.wrap_add(self.last_block, 1);
    if next != self.first_block {
      self.last_block = next;
      self.blocks[next][0] = value;
      self.pos_end = 1;
      return;
    }

    // Ring fully occupied: grow by one block. Reordering puts ring order
    // back into index order; only block handles move.
    let cnt_blocks = self.blocks.len();
    self.blocks.rotate_left(self.first_block);
    self.blocks.push(new_block());
    self.first_block = 0;
    self.last_block = cnt_blocks;
    self.blocks[cnt_blocks][0] = value;
    self.pos_end = 1;
  }

  /// Prepends an element to the front of the deque.
  ///
  /// Amortized O(1), symmetric to [`push_back`](BlockDeque::push_back).
  ///
  /// ## Examples
  ///
  /// ```rust
  /// use block_deque::BlockDeque;
  ///
  /// let mut deque = BlockDeque::new();
  /// deque.push_front(1);
  /// deque.push_front(0);
  /// assert_eq!(deque.front(), Some(&0));
  /// ```
  pub fn push_front(&mut self, value: i32) {
    // Room left in the first occupied block.
    if self.pos_begin != 0 {
      self.pos_begin -= 1;
      self.blocks[self.first_block][self.pos_begin] = value;
      return;
    }

    // A spare block sits before `first_block` in the ring.
    let prev = self.wrap_sub(self.first_block, 1);
    if prev != self.last_block {
      self.first_block = prev;
      self.pos_begin = BLOCK_SIZE - 1;
      self.blocks[prev][BLOCK_SIZE - 1] = value;
      return;
    }

    // Ring fully occupied: grow by one block prepended to the reordered
    // ring, with the old blocks shifted up one slot.
    let cnt_blocks = self.blocks.len();
    self.blocks.rotate_left(self.first_block);
    self.blocks.insert(0, new_block());
    self.first_block = 0;
    self.last_block = cnt_blocks;
    self.pos_begin = BLOCK_SIZE - 1;
    self.blocks[0][BLOCK_SIZE - 1] = value;
  }

  /// Removes the last element and returns it.
  ///
  /// The deque must not be empty; this is a documented precondition, not a
  /// checked error. Debug builds assert, release builds produce an
  /// unspecified (but memory-safe) result. See
  /// [`try_pop_back`](BlockDeque::try_pop_back) for the checked variant.
  ///
  /// ## Examples
  ///
  /// ```rust
  /// use block_deque::BlockDeque;
  ///
  /// let mut deque = BlockDeque::from_slice(&[1, 3]);
  /// assert_eq!(deque.pop_back(), 3);
  /// assert_eq!(deque.pop_back(), 1);
  /// assert!(deque.is_empty());
  /// ```
  pub fn pop_back(&mut self) -> i32 {
    debug_assert!(!self.is_empty(), "pop_back on an empty deque");

    // `pos_end == 0` marks a last block exhausted from the end (left behind
    // by a front-growth); roll back one ring step before removing.
    if self.pos_end == 0 {
      self.last_block = self.wrap_sub(self.last_block, 1);
      self.pos_end = BLOCK_SIZE;
    }

    self.pos_end -= 1;
    let value = self.blocks[self.last_block][self.pos_end];

    if self.pos_end == 0 {
      if self.first_block != self.last_block {
        self.last_block = self.wrap_sub(self.last_block, 1);
        self.pos_end = BLOCK_SIZE;
      } else {
        self.clear();
      }
    }
    value
  }

  /// Removes the first element and returns it.
  ///
  /// The deque must not be empty; this is a documented precondition, not a
  /// checked error. Debug builds assert, release builds produce an
  /// unspecified (but memory-safe) result. See
  /// [`try_pop_front`](BlockDeque::try_pop_front) for the checked variant.
  ///
  /// ## Examples
  ///
  /// ```rust
  /// use block_deque::BlockDeque;
  ///
  /// let mut deque = BlockDeque::from_slice(&[1, 3]);
  /// assert_eq!(deque.pop_front(), 1);
  /// assert_eq!(deque.pop_front(), 3);
  /// assert!(deque.is_empty());
  /// ```
  pub fn pop_front(&mut self) -> i32 {
    debug_assert!(!self.is_empty(), "pop_front on an empty deque");

    let value = self.blocks[self.first_block][self.pos_begin];
    self.pos_begin += 1;

    if self.pos_begin == BLOCK_SIZE {
      if self.first_block != self.last_block {
        self.first_block = self.wrap_add(self.first_block, 1);
        self.pos_begin = 0;
      } else {
        self.clear();
      }
    }
    value
  }

  /// Removes the last element and returns it, or `None` if the deque is
  /// empty.
  ///
  /// ## Examples
  ///
  /// ```rust
  /// use block_deque::BlockDeque;
  ///
  /// let mut deque = BlockDeque::new();
  /// assert_eq!(deque.try_pop_back(), None);
  /// deque.push_back(1);
  /// assert_eq!(deque.try_pop_back(), Some(1));
  /// ```
  #[inline]
  pub fn try_pop_back(&mut self) -> Option<i32> {
    if self.is_empty() {
      None
    } else {
      Some(self.pop_back())
    }
  }

  /// Removes the first element and returns it, or `None` if the deque is
  /// empty.
  #[inline]
  pub fn try_pop_front(&mut self) -> Option<i32> {
    if self.is_empty() {
      None
    } else {
      Some(self.pop_front())
    }
  }

  /// Clears the deque without releasing any blocks.
  ///
  /// The allocated blocks are kept as scratch capacity for subsequent
  /// pushes.
  ///
  /// ## Examples
  ///
  /// ```rust
  /// use block_deque::BlockDeque;
  ///
  /// let mut deque = BlockDeque::zeroed(300);
  /// deque.clear();
  /// assert!(deque.is_empty());
  /// assert_eq!(deque.capacity(), 384);
  /// ```
  #[inline]
  pub fn clear(&mut self) {
    self.first_block = 0;
    self.last_block = 0;
    self.pos_begin = 0;
    self.pos_end = 0;
  }

  /// Swaps the contents of two deques, exchanging the cursors and the
  /// block-handle arrays without touching any element.
  ///
  /// ## Examples
  ///
  /// ```rust
  /// use block_deque::BlockDeque;
  ///
  /// let mut a = BlockDeque::from_slice(&[1, 2]);
  /// let mut b = BlockDeque::from_slice(&[3]);
  /// a.swap(&mut b);
  /// assert_eq!(a, [3]);
  /// assert_eq!(b, [1, 2]);
  /// ```
  #[inline]
  pub fn swap(&mut self, other: &mut Self) {
    mem::swap(self, other);
  }

  /// Maps a logical index to (block slot, offset within block).
  ///
  /// Both coordinates are reduced modulo the real array lengths, so the
  /// result always lands in allocated storage even for an out-of-range
  /// logical index.
  #[inline]
  fn to_physical(&self, index: usize) -> (usize, usize) {
    let cursor = self.pos_begin + index;
    let block = self.wrap_add(self.first_block, cursor / BLOCK_SIZE);
    (block, cursor % BLOCK_SIZE)
  }

  /// Forward ring steps from `from` to `to`, modulo the block count.
  #[inline]
  fn ring_distance(&self, from: usize, to: usize) -> usize {
    (to + self.blocks.len() - from) % self.blocks.len()
  }

  #[inline]
  fn wrap_add(&self, slot: usize, addend: usize) -> usize {
    (slot + addend) % self.blocks.len()
  }

  #[inline]
  fn wrap_sub(&self, slot: usize, subtrahend: usize) -> usize {
    (slot + self.blocks.len() - subtrahend) % self.blocks.len()
  }
}
