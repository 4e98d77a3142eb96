mod array_store;
mod bitmap_store;
mod run_store;

use std::ops::{BitAnd, BitOr, BitXor, RangeInclusive, Sub};

pub use array_store::ArrayStore;
pub use bitmap_store::{BitmapStore, BITMAP_BYTES, BITMAP_LENGTH};
pub use run_store::{Interval, RunStore};

use Store::{Array, Bitmap, Run};

/// Containers with no more than this many values stay (or become) an `ArrayStore`.
pub(crate) const ARRAY_LIMIT: u64 = 4096;

/// The three interchangeable representations a container can hold. Callers go
/// through [`crate::bitmap::container::Container::optimize`] to keep the choice of
/// representation matched to the data; `Store` itself just implements each
/// operation faithfully for whatever representation it is currently in.
#[derive(Clone, PartialEq)]
pub enum Store {
    Array(ArrayStore),
    Bitmap(BitmapStore),
    Run(RunStore),
}

impl Store {
    pub fn is_full(&self) -> bool {
        match self {
            Array(_) => false,
            Bitmap(bits) => bits.is_full(),
            Run(runs) => runs.is_full(),
        }
    }

    pub fn flip_range(&mut self, range: RangeInclusive<u16>) {
        if let Bitmap(bits) = self {
            bits.flip_range(range);
        } else {
            let mut bitmap = self.to_bitmap();
            bitmap.flip_range(range);
            *self = Bitmap(bitmap);
        }
    }
    pub fn insert(&mut self, index: u16) -> bool {
        match self {
            Array(vec) => vec.insert(index),
            Bitmap(bits) => bits.insert(index),
            Run(runs) => runs.insert(index),
        }
    }

    pub fn insert_range(&mut self, range: RangeInclusive<u16>) -> u64 {
        match self {
            Array(vec) => vec.insert_range(range),
            Bitmap(bits) => bits.insert_range(range),
            Run(runs) => runs.insert_range(*range.start(), *range.end()),
        }
    }

    pub fn push(&mut self, index: u16) -> bool {
        match self {
            Array(vec) => vec.push(index),
            Bitmap(bits) => bits.push(index),
            Run(runs) => {
                if runs.max().map_or(true, |max| max < index) {
                    runs.insert(index)
                } else {
                    false
                }
            }
        }
    }

    pub fn remove(&mut self, index: u16) -> bool {
        match self {
            Array(vec) => vec.remove(index),
            Bitmap(bits) => bits.remove(index),
            Run(runs) => runs.remove(index),
        }
    }

    pub fn remove_range(&mut self, range: RangeInclusive<u16>) -> u64 {
        match self {
            Array(vec) => vec.remove_range(range),
            Bitmap(bits) => bits.remove_range(range),
            Run(runs) => runs.remove_range(*range.start(), *range.end()),
        }
    }

    pub fn contains(&self, index: u16) -> bool {
        match self {
            Array(vec) => vec.contains(index),
            Bitmap(bits) => bits.contains(index),
            Run(runs) => runs.contains(index),
        }
    }

    pub fn contains_range(&self, range: RangeInclusive<u16>) -> bool {
        match self {
            Array(vec) => {
                (*range.start()..=*range.end()).all(|i| vec.contains(i))
            }
            Bitmap(bits) => bits.contains_range(range),
            Run(runs) => runs.contains_range(range),
        }
    }

    pub fn is_disjoint(&self, other: &Self) -> bool {
        match (self, other) {
            (Array(v1), Array(v2)) => v1.is_disjoint(v2),
            (Bitmap(b1), Bitmap(b2)) => b1.is_disjoint(b2),
            (Array(v), Bitmap(b)) | (Bitmap(b), Array(v)) => {
                v.iter().all(|&i| !b.contains(i))
            }
            (Run(r), other) | (other, Run(r)) => {
                r.iter().all(|i| !other.contains(i))
            }
        }
    }

    pub fn is_subset(&self, other: &Self) -> bool {
        match (self, other) {
            (Array(v1), Array(v2)) => v1.is_subset(v2),
            (Bitmap(b1), Bitmap(b2)) => b1.is_subset(b2),
            (Array(v), Bitmap(b)) => v.iter().all(|&i| b.contains(i)),
            (Bitmap(b), Array(v)) => {
                b.len() <= v.len() as u64 && b.iter().all(|i| v.contains(i))
            }
            (Run(r), other) => r.iter().all(|i| other.contains(i)),
            (this, Run(r)) => this.len() <= r.len() && match this {
                Array(v) => v.iter().all(|&i| r.contains(i)),
                Bitmap(b) => b.iter().all(|i| r.contains(i)),
                Run(_) => unreachable!(),
            },
        }
    }

    pub fn len(&self) -> u64 {
        match self {
            Array(vec) => vec.len(),
            Bitmap(bits) => bits.len(),
            Run(runs) => runs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn min(&self) -> Option<u16> {
        match self {
            Array(vec) => vec.min(),
            Bitmap(bits) => bits.min(),
            Run(runs) => runs.min(),
        }
    }

    pub fn max(&self) -> Option<u16> {
        match self {
            Array(vec) => vec.max(),
            Bitmap(bits) => bits.max(),
            Run(runs) => runs.max(),
        }
    }

    pub fn rank(&self, index: u16) -> u64 {
        match self {
            Array(vec) => vec.rank(index),
            Bitmap(bits) => bits.rank(index),
            Run(runs) => {
                let mut rank = 0u64;
                for iv in runs.runs() {
                    if iv.start > index {
                        break;
                    }
                    rank += (index.min(iv.end) as u64) - iv.start as u64 + 1;
                }
                rank
            }
        }
    }

    pub fn select(&self, n: u32) -> Option<u16> {
        match self {
            Array(vec) => vec.select(n as u16),
            Bitmap(bits) => bits.select(n),
            Run(runs) => {
                let mut remaining = n as u64;
                for iv in runs.runs() {
                    let len = iv.run_len() as u64;
                    if remaining < len {
                        return Some(iv.start + remaining as u16);
                    }
                    remaining -= len;
                }
                None
            }
        }
    }

    pub fn to_array(&self) -> ArrayStore {
        match self {
            Array(vec) => vec.clone(),
            Bitmap(bits) => bits.to_array_store(),
            Run(runs) => runs.to_array_store(),
        }
    }

    pub fn to_bitmap(&self) -> BitmapStore {
        match self {
            Array(vec) => vec.to_bitmap_store(),
            Bitmap(bits) => bits.clone(),
            Run(runs) => runs.to_bitmap_store(),
        }
    }

    pub fn to_run(&self) -> RunStore {
        match self {
            Array(vec) => RunStore::from_array(vec),
            Bitmap(bits) => bits.to_run_store(),
            Run(runs) => runs.clone(),
        }
    }

    pub fn iter(&self) -> Iter<'_> {
        match self {
            Array(vec) => Iter::Array(vec.iter()),
            Bitmap(bits) => Iter::Bitmap(bits.iter()),
            Run(runs) => Iter::Run(runs.iter()),
        }
    }

    pub fn into_iter(self) -> IntoIter {
        match self {
            Array(vec) => IntoIter::Array(vec.into_iter()),
            Bitmap(bits) => IntoIter::Bitmap(bits.into_iter()),
            Run(runs) => IntoIter::Run(runs.into_iter()),
        }
    }
}

pub enum Iter<'a> {
    Array(std::slice::Iter<'a, u16>),
    Bitmap(bitmap_store::BitmapIter<&'a [u64; bitmap_store::BITMAP_LENGTH]>),
    Run(run_store::RunIter<'a>),
}

impl<'a> Iterator for Iter<'a> {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        match self {
            Iter::Array(it) => it.next().copied(),
            Iter::Bitmap(it) => it.next(),
            Iter::Run(it) => it.next(),
        }
    }
}

/// The owned counterpart to [`Iter`], produced when a `Store` (rather than a
/// `&Store`) is turned into an iterator.
pub enum IntoIter {
    Array(std::vec::IntoIter<u16>),
    Bitmap(bitmap_store::BitmapIter<Box<[u64; bitmap_store::BITMAP_LENGTH]>>),
    Run(run_store::RunIntoIter),
}

impl Iterator for IntoIter {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        match self {
            IntoIter::Array(it) => it.next(),
            IntoIter::Bitmap(it) => it.next(),
            IntoIter::Run(it) => it.next(),
        }
    }
}

impl<'a> BitOr<&'a Store> for &'a Store {
    type Output = Store;

    fn bitor(self, rhs: &'a Store) -> Store {
        match (self, rhs) {
            (Array(v1), Array(v2)) => Array(v1.bitor(v2)),
            (Bitmap(b1), Bitmap(b2)) => Bitmap(b1.bitor(b2)),
            (Array(v), Bitmap(b)) | (Bitmap(b), Array(v)) => Bitmap(b.bitor_array(v)),
            (Run(r1), Run(r2)) => Run(r1.bitor(r2)),
            (Array(v), Run(r)) | (Run(r), Array(v)) => {
                let mut out = r.clone();
                for &i in v.iter() {
                    out.insert(i);
                }
                Run(out)
            }
            (Bitmap(b), Run(r)) | (Run(r), Bitmap(b)) => Bitmap(b.bitor_run(r)),
        }
    }
}

impl<'a> BitAnd<&'a Store> for &'a Store {
    type Output = Store;

    fn bitand(self, rhs: &'a Store) -> Store {
        match (self, rhs) {
            (Array(v1), Array(v2)) => Array(v1.bitand(v2)),
            (Bitmap(b1), Bitmap(b2)) => Bitmap(b1.bitand(b2)),
            (Array(v), Bitmap(b)) | (Bitmap(b), Array(v)) => Array(b.bitand_array(v)),
            (Run(r1), Run(r2)) => Run(r1.bitand(r2)),
            (Array(v), Run(r)) | (Run(r), Array(v)) => {
                let vec = v.iter().copied().filter(|&i| r.contains(i)).collect();
                Array(ArrayStore::from_vec_unchecked(vec))
            }
            (Bitmap(b), Run(r)) | (Run(r), Bitmap(b)) => {
                if r.len() <= ARRAY_LIMIT {
                    let vec: Vec<u16> =
                        r.iter().filter(|&i| b.contains(i)).collect();
                    Array(ArrayStore::from_vec_unchecked(vec))
                } else {
                    Bitmap(b.bitand_run(r))
                }
            }
        }
    }
}

impl<'a> Sub<&'a Store> for &'a Store {
    type Output = Store;

    fn sub(self, rhs: &'a Store) -> Store {
        match (self, rhs) {
            (Array(v1), Array(v2)) => Array(v1.sub(v2)),
            (Bitmap(b1), Bitmap(b2)) => Bitmap(b1.sub(b2)),
            (Array(v), Bitmap(b)) => {
                let vec = v.iter().copied().filter(|&i| !b.contains(i)).collect();
                Array(ArrayStore::from_vec_unchecked(vec))
            }
            (Bitmap(b), Array(v)) => Bitmap(b.sub_array(v)),
            (Array(v), Run(r)) => {
                let vec = v.iter().copied().filter(|&i| !r.contains(i)).collect();
                Array(ArrayStore::from_vec_unchecked(vec))
            }
            (Run(r), Array(v)) => {
                let mut out = r.clone();
                for &i in v.iter() {
                    out.remove(i);
                }
                Run(out)
            }
            (Bitmap(b), Run(r)) => Bitmap(b.sub_run(r)),
            (Run(r), Bitmap(b)) => {
                let lhs = r.to_bitmap_store();
                Bitmap(lhs.sub(b))
            }
            (Run(r1), Run(r2)) => Run(r1.sub(r2)),
        }
    }
}

impl<'a> BitXor<&'a Store> for &'a Store {
    type Output = Store;

    fn bitxor(self, rhs: &'a Store) -> Store {
        match (self, rhs) {
            (Array(v1), Array(v2)) => Array(v1.bitxor(v2)),
            (Bitmap(b1), Bitmap(b2)) => Bitmap(b1.bitxor(b2)),
            (Array(v), Bitmap(b)) | (Bitmap(b), Array(v)) => Bitmap(b.bitxor_array(v)),
            (Run(r), other) | (other, Run(r)) => {
                let lhs = r.to_bitmap_store();
                match other {
                    Array(v) => Bitmap(lhs.bitxor_array(v)),
                    Bitmap(b) => Bitmap(lhs.bitxor(b)),
                    Run(r2) => Bitmap(lhs.bitxor(&r2.to_bitmap_store())),
                }
            }
        }
    }
}
