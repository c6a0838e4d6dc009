use smallvec::SmallVec;

/// The vertices still on the polygon boundary, in winding order.
///
/// Stored as an arena-backed circular doubly linked list keyed by vertex index,
/// so neighbor lookup and removal are O(1). Removed vertices are never reinserted.
#[derive(Debug, Clone)]
pub(crate) struct Ring {
    prev: SmallVec<[usize; 16]>,
    next: SmallVec<[usize; 16]>,
    present: SmallVec<[bool; 16]>,
    head: usize,
    len: usize,
}

impl Ring {
    /// A ring of `0..size`, in order
    pub fn new(size: usize) -> Self {
        let mut prev = SmallVec::with_capacity(size);
        let mut next = SmallVec::with_capacity(size);
        for i in 0..size {
            prev.push(if i == 0 { size - 1 } else { i - 1 });
            next.push(if i + 1 == size { 0 } else { i + 1 });
        }

        Self {
            prev,
            next,
            present: SmallVec::from_elem(true, size),
            head: 0,
            len: size,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn contains(&self, vertex: usize) -> bool {
        self.present.get(vertex).copied().unwrap_or(false)
    }

    /// The vertices before and after `vertex`, or `None` if it is not in the ring
    pub fn neighbors(&self, vertex: usize) -> Option<(usize, usize)> {
        if self.contains(vertex) {
            Some((self.prev[vertex], self.next[vertex]))
        } else {
            None
        }
    }

    /// The vertex at `position`, counted from the start of the ring in winding order
    pub fn nth(&self, position: usize) -> Option<usize> {
        self.iter().nth(position)
    }

    /// Unlinks `vertex`. Returns `false` if it was not in the ring.
    pub fn remove(&mut self, vertex: usize) -> bool {
        let (prev, next) = match self.neighbors(vertex) {
            Some(neighbors) => neighbors,
            None => return false,
        };

        self.next[prev] = next;
        self.prev[next] = prev;
        self.present[vertex] = false;
        if self.head == vertex {
            self.head = next;
        }
        self.len -= 1;
        true
    }

    pub fn iter(&self) -> RingIter<'_> {
        RingIter {
            ring: self,
            cursor: self.head,
            remaining: self.len,
        }
    }
}

pub(crate) struct RingIter<'a> {
    ring: &'a Ring,
    cursor: usize,
    remaining: usize,
}

impl<'a> Iterator for RingIter<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.cursor;
        self.cursor = self.ring.next[current];
        self.remaining -= 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> ExactSizeIterator for RingIter<'a> { }
