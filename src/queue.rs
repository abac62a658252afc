use crate::{Error, Result};

const DEFAULT_CAPACITY: usize = 10;
const GROWTH: usize = 2;

/// A FIFO queue over a single array.
///
/// Live items sit in the window `start..last` of the backing storage. Pushing
/// at the end of the storage first tries to slide the window back to index 0
/// (reclaiming what earlier dequeues left behind), and only reallocates when
/// there is no such space.
pub struct Queue<T> {
    storage: Vec<Option<T>>,
    start: usize,
    last: usize,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    ///
    /// `size` is only a sizing hint: the storage is allocated with twice that
    /// many slots, or 10 when `size` is zero.
    pub fn new(size: usize) -> Self {
        let capacity = match size {
            0 => DEFAULT_CAPACITY,
            n => n.saturating_mul(2),
        };

        Self {
            storage: std::iter::repeat_with(|| None).take(capacity).collect(),
            start: 0,
            last: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.last - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.last
    }

    /// Number of slots in the backing storage
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    pub fn peek_front(&self) -> Result<&T> {
        self.window()
            .first()
            .and_then(Option::as_ref)
            .ok_or(Error::EmptyQueue)
    }

    pub fn peek_back(&self) -> Result<&T> {
        self.window()
            .last()
            .and_then(Option::as_ref)
            .ok_or(Error::EmptyQueue)
    }

    /// Pushes `item` onto the back of the queue.
    ///
    /// In order of preference: write into the free tail, compact the live
    /// items to the front of the storage, or reallocate the storage with
    /// room for two more slots than are currently live.
    pub fn enqueue(&mut self, item: T) {
        if self.last < self.capacity() - 1 {
            // room at the tail
        } else if self.start > 0 {
            self.compact();
        } else {
            self.grow();
        }

        self.storage[self.last] = Some(item);
        self.last += 1;
    }

    /// Removes the item at the front of the queue.
    ///
    /// The vacated slot is left outside of the window, it only gets reused
    /// once a later `enqueue` compacts the storage.
    pub fn dequeue(&mut self) -> Result<T> {
        if self.is_empty() {
            log::debug!("dequeue on an empty queue");
            return Err(Error::EmptyQueue);
        }

        let item = self.storage[self.start]
            .take()
            .expect("live slot in window");
        self.start += 1;
        Ok(item)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + DoubleEndedIterator {
        self.window().iter().flatten()
    }

    fn window(&self) -> &[Option<T>] {
        &self.storage[self.start..self.last]
    }

    fn compact(&mut self) {
        log::trace!("compacting {} items from offset {}", self.len(), self.start);

        // the vacated slots at the front are all `None`, so they end up past `last`
        self.storage[..self.last].rotate_left(self.start);
        self.last -= self.start;
        self.start = 0;
    }

    fn grow(&mut self) {
        let capacity = self.last + GROWTH;
        log::trace!("growing storage from {} to {}", self.capacity(), capacity);

        let mut storage = Vec::with_capacity(capacity);
        storage.extend(self.storage.drain(..self.last));
        storage.resize_with(capacity, || None);
        self.storage = storage;
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item)
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
