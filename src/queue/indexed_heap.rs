use std::{fmt, hash::Hash};

use ahash::{HashMap, HashMapExt};
use log::warn;

use crate::error::HeapError;

/// Key type of a heap that does not track keys.
pub type NoKey = ();

type Order<T> = Box<dyn Fn(&T, &T) -> bool>;
type KeyFn<T, K> = Box<dyn Fn(&T) -> K>;

/// Array backed binary heap with a custom order and optional key tracking.
///
/// `order(a, b)` is true iff `a` has to come before `b`. If the heap is given
/// a key function it additionally maintains a dictionary from the key of each
/// element to its current position, which allows decreasing an element by
/// its key instead of by its index.
///
/// Children of index `i` live at `2i + 1` and `2i + 2`, the root at 0.
pub struct IndexedBinaryHeap<T, K = NoKey> {
    heap: Vec<T>,
    order: Order<T>,
    key: Option<KeyFn<T, K>>,
    key_dict: HashMap<K, usize>,
}

impl<T: Ord + 'static> IndexedBinaryHeap<T, NoKey> {
    /// Min-heap over the natural order of `T`.
    pub fn new(values: Vec<T>) -> Self {
        Self::with_order(values, |a: &T, b: &T| a < b)
    }
}

impl<T: 'static> IndexedBinaryHeap<T, NoKey> {
    pub fn with_order(values: Vec<T>, order: impl Fn(&T, &T) -> bool + 'static) -> Self {
        let mut heap = IndexedBinaryHeap {
            heap: values,
            order: Box::new(order),
            key: None,
            key_dict: HashMap::new(),
        };
        heap.build_heap();
        heap
    }
}

impl<T, K> IndexedBinaryHeap<T, K>
where
    K: Clone + Eq + Hash + fmt::Debug,
{
    /// Builds a heap that tracks the position of every element by
    /// `key(element)`. Keys have to be unique.
    pub fn with_key(
        values: Vec<T>,
        order: impl Fn(&T, &T) -> bool + 'static,
        key: impl Fn(&T) -> K + 'static,
    ) -> Result<Self, HeapError>
    where
        T: 'static,
        K: 'static,
    {
        let mut heap = IndexedBinaryHeap {
            heap: values,
            order: Box::new(order),
            key: Some(Box::new(key)),
            key_dict: HashMap::new(),
        };
        heap.build_key_dict()?;
        heap.build_heap();
        Ok(heap)
    }

    pub fn left(index: usize) -> usize {
        2 * index + 1
    }

    pub fn right(index: usize) -> usize {
        2 * index + 2
    }

    /// Parent of `index`. The root is its own parent.
    pub fn parent(index: usize) -> usize {
        index.saturating_sub(1) / 2
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The live part of the heap in array order.
    pub fn as_slice(&self) -> &[T] {
        &self.heap
    }

    /// Current index of the element with key `key`.
    pub fn position(&self, key: &K) -> Option<usize> {
        self.key_dict.get(key).copied()
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.key_dict.contains_key(key)
    }

    pub fn peek(&self) -> Result<&T, HeapError> {
        self.heap.first().ok_or_else(|| {
            warn!("nothing to peek: {}", HeapError::Empty);
            HeapError::Empty
        })
    }

    /// Removes and returns the top element.
    pub fn extract_min(&mut self) -> Result<T, HeapError> {
        if self.heap.is_empty() {
            warn!("nothing to extract: {}", HeapError::Empty);
            return Err(HeapError::Empty);
        }

        let last = self.heap.len() - 1;
        self.swap(0, last);
        let minimum = self.heap.pop().ok_or(HeapError::Empty)?;
        if let Some(key) = &self.key {
            self.key_dict.remove(&key(&minimum));
        }
        self.sift_down(0);

        Ok(minimum)
    }

    /// Replaces the element at `index` by `value` and moves it towards the
    /// root.
    ///
    /// `value` must not come after the current element, otherwise the heap
    /// stays untouched. With key tracking enabled the key must not change
    /// either.
    pub fn decrease_by_index(&mut self, index: usize, value: T) -> Result<(), HeapError> {
        let Some(current) = self.heap.get(index) else {
            let error = HeapError::IndexOutOfBounds {
                index,
                len: self.heap.len(),
            };
            warn!("decrease ignored: {}", error);
            return Err(error);
        };

        if (self.order)(current, &value) {
            let error = HeapError::NotDecreasing(index);
            warn!("decrease ignored: {}", error);
            return Err(error);
        }

        if let Some(key) = &self.key {
            let (expected, found) = (key(current), key(&value));
            if expected != found {
                let error = HeapError::KeyMismatch {
                    expected: format!("{:?}", expected),
                    found: format!("{:?}", found),
                };
                warn!("decrease ignored: {}", error);
                return Err(error);
            }
        }

        self.heap[index] = value;
        self.sift_up(index);
        Ok(())
    }

    /// Decreases the element with key `key` to `value`.
    pub fn decrease_by_key(&mut self, key: &K, value: T) -> Result<(), HeapError> {
        let Some(key_fn) = &self.key else {
            warn!("decrease ignored: {}", HeapError::KeyTrackingDisabled);
            return Err(HeapError::KeyTrackingDisabled);
        };

        let Some(index) = self.key_dict.get(key).copied() else {
            let error = HeapError::UnknownKey(format!("{:?}", key));
            warn!("decrease ignored: {}", error);
            return Err(error);
        };

        let found = key_fn(&value);
        if &found != key {
            let error = HeapError::KeyMismatch {
                expected: format!("{:?}", key),
                found: format!("{:?}", found),
            };
            warn!("decrease ignored: {}", error);
            return Err(error);
        }

        self.decrease_by_index(index, value)
    }

    /// Adds `value` to the heap.
    ///
    /// The new slot behaves like a placeholder that comes after everything,
    /// so placing `value` there is always a valid decrease and the element
    /// is moved up along the same path [`Self::decrease_by_index`] uses.
    pub fn insert(&mut self, value: T) -> Result<(), HeapError> {
        let index = self.heap.len();

        if let Some(key) = &self.key {
            let key = key(&value);
            if self.key_dict.contains_key(&key) {
                let error = HeapError::DuplicateKey(format!("{:?}", key));
                warn!("insert ignored: {}", error);
                return Err(error);
            }
            self.key_dict.insert(key, index);
        }

        self.heap.push(value);
        self.sift_up(index);
        Ok(())
    }

    /// Checks the heap property for every parent/child pair and, with key
    /// tracking, that the key dictionary points at every element.
    pub fn is_heap(&self) -> bool {
        let ordered = (0..self.heap.len()).all(|index| {
            [Self::left(index), Self::right(index)]
                .into_iter()
                .filter(|&child| child < self.heap.len())
                .all(|child| !(self.order)(&self.heap[child], &self.heap[index]))
        });

        let indexed = match &self.key {
            Some(key) => {
                self.key_dict.len() == self.heap.len()
                    && self
                        .heap
                        .iter()
                        .enumerate()
                        .all(|(index, value)| self.key_dict.get(&key(value)) == Some(&index))
            }
            None => true,
        };

        ordered && indexed
    }

    fn build_key_dict(&mut self) -> Result<(), HeapError> {
        let Some(key) = &self.key else {
            return Ok(());
        };

        self.key_dict = HashMap::with_capacity(self.heap.len());
        for (index, value) in self.heap.iter().enumerate() {
            let key = key(value);
            if self.key_dict.contains_key(&key) {
                let error = HeapError::DuplicateKey(format!("{:?}", key));
                warn!("heap not built: {}", error);
                return Err(error);
            }
            self.key_dict.insert(key, index);
        }
        Ok(())
    }

    fn swap(&mut self, i: usize, j: usize) {
        if let Some(key) = &self.key {
            self.key_dict.insert(key(&self.heap[i]), j);
            self.key_dict.insert(key(&self.heap[j]), i);
        }
        self.heap.swap(i, j);
    }

    fn sift_up(&mut self, mut index: usize) {
        while index != 0 {
            let parent = Self::parent(index);
            if !(self.order)(&self.heap[index], &self.heap[parent]) {
                break;
            }
            self.swap(parent, index);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let mut first = index;
            for child in [Self::left(index), Self::right(index)] {
                if child < self.heap.len() && (self.order)(&self.heap[child], &self.heap[first]) {
                    first = child;
                }
            }
            if first == index {
                break;
            }
            self.swap(index, first);
            index = first;
        }
    }

    fn build_heap(&mut self) {
        for index in (0..self.heap.len() / 2).rev() {
            self.sift_down(index);
        }
    }
}

impl<T: fmt::Debug, K> fmt::Debug for IndexedBinaryHeap<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.heap.iter()).finish()
    }
}
