//! A double-ended vector that keeps its elements contiguous.
//!
//! [`DVector`] supports amortized constant-time pushes and pops at both ends, constant-time
//! indexing, and reports how much room is left on each side of its live range. Its memory comes
//! from a pluggable [`SlotAllocator`]; [`Global`] is the default.
//!
//! ```
//! use dvector::DVector;
//! let mut dvector = DVector::new();
//! for i in 0..15 {
//!     dvector.push_back(i);
//! }
//! dvector.push_front(-1);
//! assert_eq!(dvector.len(), 16);
//! assert_eq!(dvector.capacity(), 40);
//! assert_eq!(dvector.front_capacity() + dvector.back_capacity() + dvector.len(), 40);
//! ```

pub mod allocator;
pub mod dvector;
pub mod error;
mod raw;

pub use allocator::{Global, SlotAllocator};
pub use dvector::{BlockLayout, DVector};
pub use error::DVectorError;
pub use raw::{DEFAULT_CAPACITY, GROWTH_FACTOR};
