//! Array-backed binary min-heap.
//!
//! Children of index `i` live at `2i + 1` and `2i + 2`, the parent at
//! `(i - 1) / 2`. Equal elements keep rising on insert and keep sinking on
//! removal, so ties resolve by position rather than by value.

#[derive(Debug, Clone)]
pub struct PriorityHeap<T> {
    items: Vec<T>,
}

impl<T> PriorityHeap<T> {
    pub fn new() -> Self {
        PriorityHeap { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PriorityHeap {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Backing array in heap order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Ord> PriorityHeap<T> {
    pub fn insert(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Removes and returns the smallest element.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty. Use [`PriorityHeap::try_remove_min`]
    /// when emptiness is not already ruled out.
    pub fn remove_min(&mut self) -> T {
        match self.try_remove_min() {
            Some(item) => item,
            None => panic!("remove_min called on an empty heap"),
        }
    }

    pub fn try_remove_min(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let min = self.items.pop();
        self.sift_down(0);
        min
    }

    fn sift_up(&mut self, mut child: usize) {
        while child > 0 {
            let parent = (child - 1) / 2;
            if self.items[child] > self.items[parent] {
                break;
            }
            self.items.swap(child, parent);
            child = parent;
        }
    }

    fn sift_down(&mut self, mut parent: usize) {
        let len = self.items.len();
        let mut child = 2 * parent + 1;
        while child < len {
            if child + 1 < len && self.items[child] > self.items[child + 1] {
                child += 1;
            }
            if self.items[parent] < self.items[child] {
                break;
            }
            self.items.swap(parent, child);
            parent = child;
            child = 2 * parent + 1;
        }
    }
}

impl<T> Default for PriorityHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for PriorityHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = PriorityHeap::new();
        for item in iter {
            heap.insert(item);
        }
        heap
    }
}
