use std::cmp::Ordering;
use std::cmp::Ordering::*;
use std::convert::TryFrom;
use std::fmt::{Display, Formatter};
use std::ops::{BitAnd, BitOr, BitXor, RangeInclusive, Sub};

use super::bitmap_store::{bit, key, BitmapStore, BITMAP_LENGTH};

/// A sorted, deduplicated list of 16-bit values. The array representation used for
/// sparse containers (`cardinality <= MAX_ARRAY_LENGTH`).
#[derive(Clone, Eq, PartialEq, Default)]
pub struct ArrayStore {
    vec: Vec<u16>,
}

impl ArrayStore {
    pub fn new() -> ArrayStore {
        ArrayStore { vec: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> ArrayStore {
        ArrayStore { vec: Vec::with_capacity(capacity) }
    }

    /// Creates an `ArrayStore` from a vec, trusting the caller that it is already
    /// sorted and deduplicated.
    ///
    /// # Panics
    ///
    /// When debug assertions are enabled and the vec is not sorted and deduplicated.
    #[inline]
    pub fn from_vec_unchecked(vec: Vec<u16>) -> ArrayStore {
        if cfg!(debug_assertions) {
            ArrayStore::try_from(vec).unwrap()
        } else {
            ArrayStore { vec }
        }
    }

    pub fn insert(&mut self, index: u16) -> bool {
        self.vec.binary_search(&index).map_err(|loc| self.vec.insert(loc, index)).is_err()
    }

    pub fn insert_range(&mut self, range: RangeInclusive<u16>) -> u64 {
        let start = *range.start();
        let end = *range.end();
        if start > end {
            return 0;
        }

        let pos_start = self.vec.binary_search(&start).unwrap_or_else(|x| x);
        let pos_end = self
            .vec
            .binary_search_by(|p| if *p > end { Greater } else { Less })
            .unwrap_or_else(|x| x);

        let dropped = self.vec.splice(pos_start..pos_end, start..=end);
        end as u64 - start as u64 + 1 - dropped.len() as u64
    }

    pub fn push(&mut self, index: u16) -> bool {
        if self.max().map_or(true, |max| max < index) {
            self.vec.push(index);
            true
        } else {
            false
        }
    }

    pub fn remove(&mut self, index: u16) -> bool {
        self.vec.binary_search(&index).map(|loc| self.vec.remove(loc)).is_ok()
    }

    pub fn remove_range(&mut self, range: RangeInclusive<u16>) -> u64 {
        let start = *range.start();
        let end = *range.end();
        if start > end {
            return 0;
        }

        let pos_start = self.vec.binary_search(&start).unwrap_or_else(|x| x);
        let pos_end = self
            .vec
            .binary_search_by(|p| if *p > end { Greater } else { Less })
            .unwrap_or_else(|x| x);
        self.vec.drain(pos_start..pos_end);
        (pos_end - pos_start) as u64
    }

    pub fn contains(&self, index: u16) -> bool {
        self.vec.binary_search(&index).is_ok()
    }

    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (mut i1, mut i2) = (self.vec.iter(), other.vec.iter());
        let (mut value1, mut value2) = (i1.next(), i2.next());
        loop {
            match value1.and_then(|v1| value2.map(|v2| v1.cmp(v2))) {
                None => return true,
                Some(Equal) => return false,
                Some(Less) => value1 = i1.next(),
                Some(Greater) => value2 = i2.next(),
            }
        }
    }

    pub fn is_subset(&self, other: &Self) -> bool {
        let (mut i1, mut i2) = (self.vec.iter(), other.vec.iter());
        let (mut value1, mut value2) = (i1.next(), i2.next());
        loop {
            match (value1, value2) {
                (None, _) => return true,
                (Some(..), None) => return false,
                (Some(v1), Some(v2)) => match v1.cmp(v2) {
                    Equal => {
                        value1 = i1.next();
                        value2 = i2.next();
                    }
                    Less => return false,
                    Greater => value2 = i2.next(),
                },
            }
        }
    }

    pub fn to_bitmap_store(&self) -> BitmapStore {
        let mut bits = Box::new([0u64; BITMAP_LENGTH]);
        for &index in &self.vec {
            bits[key(index)] |= 1 << bit(index);
        }
        BitmapStore::from_unchecked(self.len(), bits)
    }

    pub fn len(&self) -> u64 {
        self.vec.len() as u64
    }

    /// Size in bytes of the wire encoding of an array container holding
    /// `cardinality` values: two bytes per value, no header overhead.
    pub fn serialized_byte_size(cardinality: u64) -> u64 {
        cardinality * 2
    }

    pub fn byte_size(&self) -> u64 {
        Self::serialized_byte_size(self.len())
    }

    /// Number of contiguous runs these values would collapse into as a run
    /// container, without materializing one.
    pub fn count_runs(&self) -> usize {
        let Some(&first) = self.vec.first() else {
            return 0;
        };
        let mut runs = 1;
        let mut prev = first;
        for &v in &self.vec[1..] {
            if v != prev + 1 {
                runs += 1;
            }
            prev = v;
        }
        runs
    }

    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    pub fn min(&self) -> Option<u16> {
        self.vec.first().copied()
    }

    pub fn max(&self) -> Option<u16> {
        self.vec.last().copied()
    }

    pub fn rank(&self, index: u16) -> u64 {
        match self.vec.binary_search(&index) {
            Ok(i) => i as u64 + 1,
            Err(i) => i as u64,
        }
    }

    pub fn select(&self, n: u16) -> Option<u16> {
        self.vec.get(n as usize).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u16> {
        self.vec.iter()
    }

    pub fn into_iter(self) -> std::vec::IntoIter<u16> {
        self.vec.into_iter()
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.vec
    }
}

impl BitAnd<&ArrayStore> for &ArrayStore {
    type Output = ArrayStore;

    /// Intersection of two sorted arrays into a fresh array, probing the smaller
    /// sequence into the larger with a straight merge (galloping is an optional
    /// refinement, not required for correctness).
    fn bitand(self, other: &ArrayStore) -> ArrayStore {
        let (small, large) = if self.vec.len() <= other.vec.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut out = Vec::with_capacity(small.vec.len());
        for &v in &small.vec {
            if large.contains(v) {
                out.push(v);
            }
        }
        ArrayStore::from_vec_unchecked(out)
    }
}

impl BitOr<&ArrayStore> for &ArrayStore {
    type Output = ArrayStore;

    fn bitor(self, other: &ArrayStore) -> ArrayStore {
        let mut out = Vec::with_capacity(self.vec.len() + other.vec.len());
        let (mut i1, mut i2) = (self.vec.iter().peekable(), other.vec.iter().peekable());
        loop {
            match (i1.peek(), i2.peek()) {
                (Some(&&v1), Some(&&v2)) => match v1.cmp(&v2) {
                    Less => {
                        out.push(v1);
                        i1.next();
                    }
                    Greater => {
                        out.push(v2);
                        i2.next();
                    }
                    Equal => {
                        out.push(v1);
                        i1.next();
                        i2.next();
                    }
                },
                (Some(&&v1), None) => {
                    out.push(v1);
                    i1.next();
                }
                (None, Some(&&v2)) => {
                    out.push(v2);
                    i2.next();
                }
                (None, None) => break,
            }
        }
        ArrayStore::from_vec_unchecked(out)
    }
}

impl Sub<&ArrayStore> for &ArrayStore {
    type Output = ArrayStore;

    fn sub(self, other: &ArrayStore) -> ArrayStore {
        let mut out = Vec::with_capacity(self.vec.len());
        let (mut i1, mut i2) = (self.vec.iter().peekable(), other.vec.iter().peekable());
        while let Some(&&v1) = i1.peek() {
            match i2.peek() {
                Some(&&v2) => match v1.cmp(&v2) {
                    Less => {
                        out.push(v1);
                        i1.next();
                    }
                    Equal => {
                        i1.next();
                        i2.next();
                    }
                    Greater => {
                        i2.next();
                    }
                },
                None => {
                    out.push(v1);
                    i1.next();
                }
            }
        }
        ArrayStore::from_vec_unchecked(out)
    }
}

impl BitXor<&ArrayStore> for &ArrayStore {
    type Output = ArrayStore;

    fn bitxor(self, other: &ArrayStore) -> ArrayStore {
        let mut out = Vec::with_capacity(self.vec.len() + other.vec.len());
        let (mut i1, mut i2) = (self.vec.iter().peekable(), other.vec.iter().peekable());
        loop {
            match (i1.peek(), i2.peek()) {
                (Some(&&v1), Some(&&v2)) => match v1.cmp(&v2) {
                    Less => {
                        out.push(v1);
                        i1.next();
                    }
                    Greater => {
                        out.push(v2);
                        i2.next();
                    }
                    Equal => {
                        i1.next();
                        i2.next();
                    }
                },
                (Some(&&v1), None) => {
                    out.push(v1);
                    i1.next();
                }
                (None, Some(&&v2)) => {
                    out.push(v2);
                    i2.next();
                }
                (None, None) => break,
            }
        }
        ArrayStore::from_vec_unchecked(out)
    }
}

#[derive(Debug)]
pub struct Error {
    index: usize,
    kind: ErrorKind,
}

#[derive(Debug)]
pub enum ErrorKind {
    Duplicate,
    OutOfOrder,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ErrorKind::Duplicate => write!(f, "duplicate element found at index: {}", self.index),
            ErrorKind::OutOfOrder => {
                write!(f, "an element was out of order at index: {}", self.index)
            }
        }
    }
}

impl std::error::Error for Error {}

impl TryFrom<Vec<u16>> for ArrayStore {
    type Error = Error;

    fn try_from(value: Vec<u16>) -> Result<Self, Self::Error> {
        let mut iter = value.iter().enumerate();
        if let Some((_, mut prev)) = iter.next() {
            for (i, cur) in iter {
                match cur.cmp(prev) {
                    Ordering::Less => return Err(Error { index: i, kind: ErrorKind::OutOfOrder }),
                    Ordering::Equal => return Err(Error { index: i, kind: ErrorKind::Duplicate }),
                    Ordering::Greater => (),
                }
                prev = cur;
            }
        }
        Ok(ArrayStore { vec: value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_range() {
        let mut store = ArrayStore::from_vec_unchecked(vec![1, 2, 8, 9]);
        let new = store.insert_range(4..=5);
        assert_eq!(new, 2);
        assert_eq!(store.as_slice(), &[1, 2, 4, 5, 8, 9]);
    }

    #[test]
    fn test_insert_range_overlap() {
        let mut store = ArrayStore::from_vec_unchecked(vec![1, 2, 8, 9]);
        let new = store.insert_range(2..=8);
        assert_eq!(new, 5);
        assert_eq!(store.as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_and_or_xor_sub() {
        let a = ArrayStore::from_vec_unchecked(vec![1, 2, 3, 5]);
        let b = ArrayStore::from_vec_unchecked(vec![2, 3, 4]);
        assert_eq!(a.bitand(&b).as_slice(), &[2, 3]);
        assert_eq!(a.bitor(&b).as_slice(), &[1, 2, 3, 4, 5]);
        assert_eq!(a.sub(&b).as_slice(), &[1, 5]);
        assert_eq!(a.bitxor(&b).as_slice(), &[1, 4, 5]);
    }

    #[test]
    fn test_try_from_rejects_duplicates() {
        assert!(ArrayStore::try_from(vec![1, 1, 2]).is_err());
        assert!(ArrayStore::try_from(vec![2, 1, 3]).is_err());
        assert!(ArrayStore::try_from(vec![1, 2, 3]).is_ok());
    }
}
