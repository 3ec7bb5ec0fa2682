//! Array-backed priority queue with pluggable ordering
//!
//! This crate provides [`PriorityQueue`], a growable binary min-heap over a
//! contiguous buffer. Extraction always yields the element of minimum
//! priority, where priority comes from one of two ordering modes fixed at
//! construction:
//!
//! - **Intrinsic**: the element type's own [`PartialOrd`]. The order is
//!   checked at every comparison, so a pair with no defined order (a NaN
//!   float, two incomparable values under a partial order) surfaces as a
//!   typed error instead of a silently mis-ordered heap.
//! - **Injected**: a caller-supplied comparison function, used for every
//!   comparison regardless of any ordering the element type carries itself.
//!
//! # Complexity
//!
//! | Operation | Complexity          |
//! |-----------|---------------------|
//! | `push`    | O(log n) amortized  |
//! | `pop`     | O(log n)            |
//! | `peek`    | O(1)                |
//! | `len`     | O(1)                |
//!
//! Storage starts at 8 slots (unless a capacity is requested), doubles when
//! full, and never shrinks, giving amortized O(1) slot management per insert.
//!
//! # Example
//!
//! ```rust
//! use array_priority_queue::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! queue.push(7)?;
//! queue.push(12)?;
//! queue.push(5)?;
//! queue.push(9)?;
//!
//! assert_eq!(queue.peek(), Some(&5));
//! assert_eq!(queue.pop()?, Some(5));
//! assert_eq!(queue.pop()?, Some(7));
//! # Ok::<(), array_priority_queue::QueueError>(())
//! ```
//!
//! With an injected ordering the same queue runs as a max-heap:
//!
//! ```rust
//! use array_priority_queue::PriorityQueue;
//!
//! let mut queue = PriorityQueue::with_comparator(|a: &i32, b: &i32| b.cmp(a));
//! queue.push(7)?;
//! queue.push(12)?;
//! queue.push(9)?;
//!
//! assert_eq!(queue.peek(), Some(&12));
//! # Ok::<(), array_priority_queue::QueueError>(())
//! ```

pub mod binary;
pub mod order;
pub mod traits;

// Re-export the main types for convenience
pub use binary::PriorityQueue;
pub use order::{Comparator, OrderResolver};
pub use traits::{Queue, QueueError};
