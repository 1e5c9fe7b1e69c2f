/// Creates a [`BlockDeque`](crate::BlockDeque) containing the arguments.
///
/// `block_deque!` allows deques to be defined with the same syntax as array
/// expressions:
///
/// - `block_deque![]` creates an empty deque;
/// - `block_deque![1, 2, 3]` creates a deque holding the listed values;
/// - `block_deque![7; 5]` creates a deque of five `7`s.
///
/// ## Examples
///
/// ```rust
/// use block_deque::block_deque;
///
/// let deque = block_deque![1, 2, 3];
/// assert_eq!(deque, [1, 2, 3]);
///
/// let filled = block_deque![7; 5];
/// assert_eq!(filled.len(), 5);
/// assert_eq!(filled[4], 7);
///
/// let empty = block_deque![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! block_deque {
  () => {
    $crate::BlockDeque::new()
  };
  ($elem:expr; $n:expr) => {{
    let len = $n;
    let elem = $elem;
    let mut deque = $crate::BlockDeque::zeroed(len);
    let mut index = 0;
    while index < len {
      deque[index] = elem;
      index += 1;
    }
    deque
  }};
  ($($value:expr),+ $(,)?) => {
    $crate::BlockDeque::from_array([$($value),+])
  };
}
