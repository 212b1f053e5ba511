//! Fixed length scratch buffers and a free list to recycle them.
//!
//! Hot loops (bezier subdivision in particular) check buffers out of a [`BufferPool`],
//! write into them in place and hand them back instead of dropping them, so a whole
//! approximation run allocates a number of buffers proportional to its subdivision depth.

use std::ops::Deref;

use log::trace;
use smallvec::SmallVec;

use crate::error::{PathError, Result};

/// Contiguous buffer whose length never changes after creation.
///
/// Buffers of up to four items (cubic curves) are stored inline.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedBuffer<T> {
    items: SmallVec<[T; 4]>,
}

impl<T: Clone> FixedBuffer<T> {
    /// Creates a buffer of `len` copies of `value`.
    pub fn filled(len: usize, value: T) -> Self {
        FixedBuffer {
            items: SmallVec::from_elem(value, len),
        }
    }

    /// Creates a buffer holding a copy of `items`.
    pub fn from_slice(items: &[T]) -> Self {
        FixedBuffer {
            items: items.iter().cloned().collect(),
        }
    }

    /// Overwrites the item at `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Overwrites the first `source.len()` items.
    pub fn copy_from(&mut self, source: &[T]) -> Result<()> {
        if source.len() > self.items.len() {
            return Err(PathError::Index {
                index: source.len() - 1,
                len: self.items.len(),
            });
        }
        self.items[..source.len()].clone_from_slice(source);
        Ok(())
    }

    /// Tags `item` by whether it already lives in this buffer.
    ///
    /// Items outside of the buffer are cloned into an owned value.
    pub fn classify<'a>(&'a self, item: &'a T) -> BufferRef<'a, T> {
        if self.contains_address(item) {
            BufferRef::Buffered(item)
        } else {
            BufferRef::Owned(item.clone())
        }
    }
}

impl<T> FixedBuffer<T> {
    /// Number of items, fixed at creation.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the buffer was created with no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        let len = self.items.len();
        self.items.get(index).ok_or(PathError::Index { index, len })
    }

    /// Mutable item at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.items.len();
        self.items.get_mut(index).ok_or(PathError::Index { index, len })
    }

    /// All items.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// All items, writable in place.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Whether `item` is a reference into this buffer's storage.
    pub fn contains_address(&self, item: &T) -> bool {
        self.items.as_ptr_range().contains(&(item as *const T))
    }
}

/// A value that is either borrowed from a [`FixedBuffer`] or owned by the holder.
#[derive(Debug, Clone, PartialEq)]
pub enum BufferRef<'a, T> {
    /// Element living inside a buffer somebody else owns
    Buffered(&'a T),

    /// Freshly computed element
    Owned(T),
}

impl<'a, T> BufferRef<'a, T> {
    /// Whether the value is borrowed from a buffer.
    pub fn is_buffered(&self) -> bool {
        matches!(self, BufferRef::Buffered(_))
    }
}

impl<'a, T> Deref for BufferRef<'a, T> {
    type Target = T;
    fn deref(&self) -> &T {
        match self {
            BufferRef::Buffered(item) => item,
            BufferRef::Owned(item) => item,
        }
    }
}

/// LIFO free list of buffers which are reused instead of reallocated.
#[derive(Debug)]
pub struct BufferPool<T> {
    free: Vec<FixedBuffer<T>>,
    allocated: usize,
    reused: usize,
}

impl<T> Default for BufferPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BufferPool<T> {
    /// Creates a pool with an empty free list.
    pub fn new() -> Self {
        BufferPool {
            free: Vec::new(),
            allocated: 0,
            reused: 0,
        }
    }

    /// Returns a buffer to the free list.
    pub fn release(&mut self, buffer: FixedBuffer<T>) {
        self.free.push(buffer);
    }

    /// Number of buffers waiting to be reused.
    pub fn available(&self) -> usize {
        self.free.len()
    }

    /// Number of buffers [`checkout`](BufferPool::checkout) had to allocate.
    pub fn allocated(&self) -> usize {
        self.allocated
    }

    /// Number of buffers [`checkout`](BufferPool::checkout) took from the free list.
    pub fn reused(&self) -> usize {
        self.reused
    }
}

impl<T: Clone> BufferPool<T> {
    /// Takes the most recently released buffer or allocates a new one of `len` copies of `fill`.
    ///
    /// A reused buffer keeps its old content.
    pub fn checkout(&mut self, len: usize, fill: T) -> FixedBuffer<T> {
        match self.free.pop() {
            Some(buffer) if buffer.len() == len => {
                self.reused += 1;
                trace!("reusing pooled buffer ({} free)", self.free.len());
                buffer
            }
            _ => {
                self.allocated += 1;
                FixedBuffer::filled(len, fill)
            }
        }
    }
}
