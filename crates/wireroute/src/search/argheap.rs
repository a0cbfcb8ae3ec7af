//! Indexed binary min-heap with in-place decrease/increase-key.
//!
//! Elements are addressed by their original index `0..capacity`. Three parallel
//! buffers are kept: `vals[i]` (value of index `i`), `heap[p]` (index at heap
//! position `p`), `pos[i]` (heap position of index `i`). Popped indices move
//! behind the live prefix `heap[..size]` and stay there.
//!
//! Invariants:
//! - `heap[pos[i]] == i` for every `i`.
//! - `vals[heap[p]]` is not less than `vals[heap[(p - 1) / 2]]` for `0 < p < size`.

/// Indexed min-heap over any `PartialOrd` value; only `<` is ever used.
#[derive(Clone, Debug)]
pub struct ArgHeap<T> {
    vals: Box<[T]>,
    heap: Box<[usize]>,
    pos: Box<[usize]>,
    size: usize,
}

impl<T: PartialOrd> ArgHeap<T> {
    /// Heapify `values` in O(n); index `i` starts with `values[i]`.
    pub fn new(values: Vec<T>) -> Self {
        let n = values.len();
        let mut h = Self {
            vals: values.into_boxed_slice(),
            heap: (0..n).collect(),
            pos: (0..n).collect(),
            size: n,
        };
        for p in (0..n / 2).rev() {
            h.sift_down(p);
        }
        h
    }

    /// Number of live (not yet popped) entries.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of indices, popped or not.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.vals.len()
    }

    /// Current value of index `i`; still available after `i` was popped.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.vals.get(i)
    }

    /// Whether index `i` is still in the heap.
    #[inline]
    pub fn contains(&self, i: usize) -> bool {
        self.pos.get(i).is_some_and(|&p| p < self.size)
    }

    /// Index of the minimum without removing it.
    #[inline]
    pub fn peek(&self) -> Option<usize> {
        (self.size > 0).then(|| self.heap[0])
    }

    /// Remove the minimum and return its original index.
    pub fn pop(&mut self) -> Option<usize> {
        if self.size == 0 {
            return None;
        }
        let top = self.heap[0];
        self.size -= 1;
        self.swap(0, self.size);
        self.sift_down(0);
        Some(top)
    }

    /// Overwrite the value of index `i` and restore heap order. Returns
    /// `false` (and changes nothing) if `i` is unknown or already popped.
    pub fn update(&mut self, i: usize, value: T) -> bool {
        if !self.contains(i) {
            return false;
        }
        self.vals[i] = value;
        let p = self.sift_up(self.pos[i]);
        self.sift_down(p);
        true
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.vals[self.heap[a]] < self.vals[self.heap[b]]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.pos[self.heap[a]] = a;
        self.pos[self.heap[b]] = b;
    }

    fn sift_up(&mut self, mut p: usize) -> usize {
        while p > 0 {
            let parent = (p - 1) / 2;
            if !self.less(p, parent) {
                break;
            }
            self.swap(p, parent);
            p = parent;
        }
        p
    }

    fn sift_down(&mut self, mut p: usize) {
        loop {
            let l = 2 * p + 1;
            let r = l + 1;
            let mut smallest = p;
            if l < self.size && self.less(l, smallest) {
                smallest = l;
            }
            if r < self.size && self.less(r, smallest) {
                smallest = r;
            }
            if smallest == p {
                return;
            }
            self.swap(p, smallest);
            p = smallest;
        }
    }
}
