//! Binary heaps of bare numeric values, ordered either as a min-heap or a
//! max-heap.
//!
//! ```
//! use heapsort::{Heap, Polarity};
//!
//! let mut heap = Heap::from_unordered(vec![32, 5, 65, 23, 45, 678, 12], Polarity::Min);
//! assert_eq!(heap.as_slice(), &[5, 23, 12, 32, 45, 678, 65]);
//! assert_eq!(heap.extract(), Ok(5));
//! ```

pub mod errors;
pub mod heap;
pub mod numeric;
pub mod polarity;

pub use errors::HeapError;
pub use heap::Heap;
pub use numeric::Numeric;
pub use polarity::Polarity;
