//! Order preserving list of individually boxed records.
//!
//! Only the record pointers live in the backing array, so growing the list moves pointers
//! and never payloads. Every growth step reserves before committing and every shrink step
//! hands surplus capacity back, releasing the storage entirely once the list is empty.

use crate::error::{PathError, Result};

/// Variable length sequence of owned, independently allocated records.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowableList<T> {
    records: Vec<Box<T>>,
}

impl<T> Default for GrowableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GrowableList<T> {
    /// Creates an empty list without allocating.
    pub fn new() -> Self {
        GrowableList {
            records: Vec::new(),
        }
    }

    /// Builds a list from an iterator, failing on the first unsuccessful allocation.
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self> {
        let mut list = Self::new();
        for value in iter {
            list.append(value)?;
        }
        Ok(list)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the list holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of record slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.records.capacity()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.records.len() {
            return Err(PathError::Index {
                index,
                len: self.records.len(),
            });
        }
        Ok(())
    }

    /// Makes room for `additional` more records without touching the existing ones.
    ///
    /// On failure the list keeps its records and its capacity.
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        self.records
            .try_reserve(additional)
            .map_err(|_| PathError::OutOfMemory {
                requested: additional,
            })
    }

    fn shrink(&mut self) {
        if self.records.is_empty() {
            self.records = Vec::new();
        } else if self.records.capacity() > 2 * self.records.len() {
            self.records.shrink_to_fit();
        }
    }

    /// Adds `value` after the last record.
    pub fn append(&mut self, value: T) -> Result<()> {
        self.reserve(1)?;
        self.records.push(Box::new(value));
        Ok(())
    }

    /// Inserts `value` at `index`, shifting every record at and after it one slot right.
    ///
    /// `index == len()` appends.
    pub fn insert(&mut self, value: T, index: usize) -> Result<()> {
        if index > self.records.len() {
            return Err(PathError::Index {
                index,
                len: self.records.len(),
            });
        }
        self.reserve(1)?;
        self.records.insert(index, Box::new(value));
        Ok(())
    }

    /// Record at `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        Ok(&self.records[index])
    }

    /// Mutable record at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        Ok(&mut self.records[index])
    }

    /// Last record, if any.
    pub fn last(&self) -> Option<&T> {
        self.records.last().map(|record| &**record)
    }

    /// Replaces the record at `index` by removing it and inserting a fresh one.
    ///
    /// The old record's allocation is released, the new value gets its own. The slot for
    /// the new record is reserved before the old one is detached, so a failed reservation
    /// leaves the list untouched.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        self.check_index(index)?;
        self.reserve(1)?;
        drop(self.records.remove(index));
        self.records.insert(index, Box::new(value));
        Ok(())
    }

    /// Drops the record at `index`, shifting later records left.
    pub fn remove(&mut self, index: usize) -> Result<()> {
        self.pop(index).map(drop)
    }

    /// Detaches the record at `index` and hands its ownership to the caller.
    pub fn pop(&mut self, index: usize) -> Result<Box<T>> {
        self.check_index(index)?;
        let record = self.records.remove(index);
        self.shrink();
        Ok(record)
    }

    /// Detaches the last record.
    pub fn pop_last(&mut self) -> Option<Box<T>> {
        let record = self.records.pop();
        self.shrink();
        record
    }

    /// Iterates over the records in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.records.iter().map(|record| &**record)
    }

    /// Unboxes every record into a plain vector.
    pub fn into_vec(self) -> Vec<T> {
        self.records.into_iter().map(|record| *record).collect()
    }
}

impl<T: Clone> GrowableList<T> {
    /// Copies the records into a plain vector.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}
