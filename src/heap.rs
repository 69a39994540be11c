use std::fmt::Display;

use itertools::Itertools;

use crate::{errors::HeapError, numeric::Numeric, polarity::Polarity};

/// A binary heap of numeric values.
///
/// The values live in a single vector laid out as a complete binary tree:
/// the children of position `i` are at `2i + 1` and `2i + 2`. Whether the
/// root holds the minimum or the maximum is decided by the [`Polarity`]
/// given at construction, and never changes.
///
/// The heap owns its vector. Once constructed, the only way to change the
/// values is through the methods below.
#[derive(Debug, Clone, PartialEq)]
pub struct Heap<T: Numeric> {
    items: Vec<T>,
    polarity: Polarity,
}

impl<T: Numeric> Heap<T> {
    /// Take `items` as they are.
    ///
    /// No reordering is done, so unless `items` is already heap ordered,
    /// call [`Heap::build_heap`] before relying on the heap property.
    pub fn new(items: Vec<T>, polarity: Polarity) -> Heap<T> {
        Heap { items, polarity }
    }

    pub fn min(items: Vec<T>) -> Heap<T> {
        Heap::new(items, Polarity::Min)
    }

    pub fn max(items: Vec<T>) -> Heap<T> {
        Heap::new(items, Polarity::Max)
    }

    /// Take `items` in any order and build a valid heap from them.
    pub fn from_unordered(items: Vec<T>, polarity: Polarity) -> Heap<T> {
        let mut heap = Heap::new(items, polarity);
        heap.build_heap();
        heap
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// The backing values in storage order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The root: the minimum of a min-heap, the maximum of a max-heap.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Insert `value` and sift it up towards the root.
    ///
    /// If `index` names an existing position the value there is overwritten;
    /// otherwise (including any out of bounds index) `value` is appended.
    /// Overwriting with a worse value can leave a violation below `index`,
    /// which this method does not repair.
    pub fn insert(&mut self, value: T, index: Option<usize>) -> &[T] {
        let i = match index {
            Some(i) if i < self.items.len() => {
                self.items[i] = value;
                i
            }
            _ => {
                self.items.push(value);
                self.items.len() - 1
            }
        };
        self.upheap(i);
        &self.items
    }

    /// Sift the value at `index` down until neither child is better than it.
    ///
    /// Both subtrees below `index` are assumed to already be heaps. An
    /// `index` past the end is ignored.
    pub fn heapify(&mut self, index: usize) {
        let n = self.items.len();
        self.downheap(index, n);
    }

    /// Remove and return the root.
    pub fn extract(&mut self) -> Result<T, HeapError> {
        let n = self.items.len();
        if n == 0 {
            return Err(HeapError::EmptyHeap);
        }
        self.items.swap(0, n - 1);
        let res = self.items.pop().ok_or(HeapError::EmptyHeap)?;
        self.heapify(0);
        log::debug!(
            "extracted {:?} from {}, {} remaining",
            res,
            self.polarity,
            self.items.len()
        );
        Ok(res)
    }

    /// Remove the value at `index` and return it.
    ///
    /// The position is overwritten with the polarity's sentinel, which
    /// sifts to the root and is then extracted. An unordered value (NaN)
    /// on the path can stop the sentinel short of the root, in which case
    /// it is removed from where it stopped.
    pub fn delete(&mut self, index: usize) -> Result<T, HeapError> {
        let n = self.items.len();
        if index >= n {
            return Err(HeapError::IndexOutOfRange(index, n));
        }
        let value = self.items[index];
        log::debug!("deleting {:?} at position {}", value, index);

        self.items[index] = self.polarity.sentinel();
        let at = self.upheap(index);
        if at == 0 {
            self.extract()?;
        } else {
            self.remove_at(at);
        }
        Ok(value)
    }

    /// Reorder the values, in place, so the heap property holds everywhere.
    pub fn build_heap(&mut self) {
        let n = self.items.len();
        if n < 2 {
            return;
        }
        // deepest node with at least one child
        let start = (n - 2) / 2;
        for i in (0..=start).rev() {
            self.downheap(i, n);
        }
        log::debug!("built {} of {} values", self.polarity, n);
    }

    /// Sort the values in place.
    ///
    /// The result is the reverse of the order values would be extracted
    /// in: a max-heap ends up ascending, a min-heap descending. The values
    /// need not be heap ordered beforehand. Afterwards they generally are
    /// not either, so call [`Heap::build_heap`] before using the heap again.
    pub fn heap_sort(&mut self) {
        self.build_heap();
        let n = self.items.len();
        for end in (1..n).rev() {
            self.items.swap(0, end);
            self.downheap(0, end);
        }
        log::debug!("sorted {} values from {}", n, self.polarity);
    }

    /// Consume the heap, returning its values as [`Heap::heap_sort`] orders them.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        self.heap_sort();
        self.items
    }

    /// Does every parent satisfy the heap property with respect to its children?
    pub fn is_heap(&self) -> bool {
        (1..self.items.len())
            .all(|i| self.polarity.ordered(&self.items[(i - 1) / 2], &self.items[i]))
    }

    // Returns where the value came to rest.
    fn upheap(&mut self, i: usize) -> usize {
        let mut i = i;
        while i > 0 {
            let p = (i - 1) / 2;
            if self.polarity.prefers(&self.items[i], &self.items[p]) {
                log::trace!("upheap: swapping {} and {}", i, p);
                self.items.swap(i, p);
                i = p;
            } else {
                break;
            }
        }
        i
    }

    // Swap with the last value, drop it, and repair around the hole.
    fn remove_at(&mut self, i: usize) {
        let n = self.items.len();
        self.items.swap(i, n - 1);
        self.items.pop();
        if i < n - 1 {
            let j = self.upheap(i);
            self.downheap(j, n - 1);
        }
    }

    // Only the first `n` values take part, which lets heap_sort shrink the heap.
    fn downheap(&mut self, p: usize, n: usize) {
        let mut p = p;
        while p < n {
            let l = 2 * p + 1;
            let r = l + 1;
            let mut best = p;
            if l < n && self.polarity.prefers(&self.items[l], &self.items[best]) {
                best = l;
            }
            if r < n && self.polarity.prefers(&self.items[r], &self.items[best]) {
                best = r;
            }
            if best == p {
                break;
            }
            log::trace!("downheap: swapping {} and {}", p, best);
            self.items.swap(p, best);
            p = best;
        }
    }
}

impl<T: Numeric> Extend<T> for Heap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value, None);
        }
    }
}

impl<T: Numeric> From<Heap<T>> for Vec<T> {
    fn from(value: Heap<T>) -> Self {
        value.items
    }
}

impl<T: Numeric + Display> Display for Heap<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.items.iter().join(", "))
    }
}
