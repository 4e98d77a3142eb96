use std::ops::{Range, RangeInclusive};

use super::container::Container;
use crate::util;
use crate::RoaringBitmap;

impl RoaringBitmap {
    /// Creates an empty `RoaringBitmap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roaring::RoaringBitmap;
    /// let mut rb = RoaringBitmap::new();
    /// ```
    pub fn new() -> RoaringBitmap {
        RoaringBitmap { containers: Vec::new() }
    }

    /// Adds a value to the set.
    ///
    /// Returns whether the value was absent from the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roaring::RoaringBitmap;
    ///
    /// let mut rb = RoaringBitmap::new();
    /// assert_eq!(rb.insert(3), true);
    /// assert_eq!(rb.insert(3), false);
    /// assert_eq!(rb.contains(3), true);
    /// ```
    pub fn insert(&mut self, value: u32) -> bool {
        let (key, index) = util::split(value);
        let container = match self.containers.binary_search_by_key(&key, |c| c.key) {
            Ok(loc) => &mut self.containers[loc],
            Err(loc) => {
                self.containers.insert(loc, Container::new(key));
                &mut self.containers[loc]
            }
        };
        container.insert(index)
    }

    /// Adds a value to the set, failing if it was already present.
    ///
    /// This mirrors [`RoaringBitmap::insert`] but surfaces the "already
    /// present" case as an error rather than a `bool`, for callers that treat
    /// a duplicate insert as a logic bug.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roaring::RoaringBitmap;
    ///
    /// let mut rb = RoaringBitmap::new();
    /// assert!(rb.insert_strict(3).is_ok());
    /// assert!(rb.insert_strict(3).is_err());
    /// ```
    pub fn insert_strict(&mut self, value: u32) -> Result<(), crate::Error> {
        if self.insert(value) {
            Ok(())
        } else {
            Err(crate::Error::AlreadySet(value))
        }
    }

    /// Removes a value from the set, failing if it was absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roaring::RoaringBitmap;
    ///
    /// let mut rb = RoaringBitmap::new();
    /// rb.insert(3);
    /// assert!(rb.remove_strict(3).is_ok());
    /// assert!(rb.remove_strict(3).is_err());
    /// ```
    pub fn remove_strict(&mut self, value: u32) -> Result<(), crate::Error> {
        if self.remove(value) {
            Ok(())
        } else {
            Err(crate::Error::NotSet(value))
        }
    }

    /// Inserts a range of values from the set specified as `start..end`.
    /// Returns the number of inserted values.
    ///
    /// Note that due to the exclusive end this function takes indexes as `u64`
    /// but you still can't index past `2**32` (`u32::MAX + 1`).
    ///
    /// # Panics
    ///
    /// This function panics if the range upper bound exceeds `u32::MAX`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roaring::RoaringBitmap;
    ///
    /// let mut rb = RoaringBitmap::new();
    /// rb.insert_range(2..4);
    /// assert!(rb.contains(2));
    /// assert!(rb.contains(3));
    /// assert!(!rb.contains(4));
    /// ```
    pub fn insert_range(&mut self, range: Range<u64>) -> u64 {
        assert!(range.end <= u64::from(u32::MAX) + 1, "can't index past 2**32");
        if range.is_empty() {
            return 0;
        }

        let (start_key, start_index) = util::split(range.start as u32);
        let (end_key, end_index) = util::split((range.end - 1) as u32);

        let start_i = match self.containers.binary_search_by_key(&start_key, |c| c.key) {
            Ok(loc) => loc,
            Err(loc) => {
                self.containers.insert(loc, Container::new(start_key));
                loc
            }
        };

        if start_key == end_key {
            return self.containers[start_i].insert_range(start_index..=end_index);
        }

        let mut low = start_index;
        let mut inserted = 0;
        let end_i = usize::from(end_key - start_key) + start_i;

        for i in start_i..end_i {
            let key = start_key + u16::try_from(i - start_i).unwrap();
            let c = match self.containers.get(i) {
                Some(c) if c.key == key => i,
                _ => {
                    self.containers.insert(i, Container::new(key));
                    i
                }
            };
            inserted += self.containers[c].insert_range(low..=u16::MAX);
            low = 0;
        }

        let c = match self.containers.get(end_i) {
            Some(c) if c.key == end_key => end_i,
            _ => {
                self.containers.insert(end_i, Container::new(end_key));
                end_i
            }
        };
        inserted += self.containers[c].insert_range(0..=end_index);

        inserted
    }

    /// Pushes `value` in the bitmap only if it is greater than the current
    /// maximum value.
    ///
    /// Returns whether the value was inserted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roaring::RoaringBitmap;
    ///
    /// let mut rb = RoaringBitmap::new();
    /// assert!(rb.push(1));
    /// assert!(rb.push(3));
    /// assert_eq!(rb.push(3), false);
    /// assert!(rb.push(5));
    ///
    /// assert_eq!(rb.iter().collect::<Vec<u32>>(), vec![1, 3, 5]);
    /// ```
    pub fn push(&mut self, value: u32) -> bool {
        let (key, index) = util::split(value);

        match self.containers.last_mut() {
            Some(container) if container.key == key => container.push(index),
            Some(container) if container.key > key => false,
            _ => {
                let mut container = Container::new(key);
                container.push(index);
                self.containers.push(container);
                true
            }
        }
    }

    /// Removes a value from the set. Returns `true` if the value was present in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roaring::RoaringBitmap;
    ///
    /// let mut rb = RoaringBitmap::new();
    /// rb.insert(3);
    /// assert_eq!(rb.remove(3), true);
    /// assert_eq!(rb.remove(3), false);
    /// assert_eq!(rb.contains(3), false);
    /// ```
    pub fn remove(&mut self, value: u32) -> bool {
        let (key, index) = util::split(value);
        match self.containers.binary_search_by_key(&key, |c| c.key) {
            Ok(loc) => {
                if self.containers[loc].remove(index) {
                    if self.containers[loc].is_empty() {
                        self.containers.remove(loc);
                    }
                    true
                } else {
                    false
                }
            }
            Err(_) => false,
        }
    }

    /// Removes a range of values from the set specified as `start..end`.
    /// Returns the number of removed values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roaring::RoaringBitmap;
    ///
    /// let mut rb = RoaringBitmap::new();
    /// rb.insert(2);
    /// rb.insert(3);
    /// assert_eq!(rb.remove_range(2..4), 2);
    /// ```
    pub fn remove_range(&mut self, range: Range<u64>) -> u64 {
        assert!(range.end <= u64::from(u32::MAX) + 1, "can't index past 2**32");
        if range.is_empty() {
            return 0;
        }
        let (start_hi, start_lo) = util::split(range.start as u32);
        let (end_hi, end_lo) = util::split((range.end - 1) as u32);

        let mut index = 0;
        let mut result = 0;
        while index < self.containers.len() {
            let key = self.containers[index].key;
            if key >= start_hi && key <= end_hi {
                let a = if key == start_hi { start_lo } else { 0 };
                let b = if key == end_hi { end_lo } else { u16::MAX };
                if a == 0 && b == u16::MAX {
                    result += self.containers[index].len();
                    self.containers.remove(index);
                    continue;
                } else {
                    result += self.containers[index].remove_range(a..=b);
                    if self.containers[index].is_empty() {
                        self.containers.remove(index);
                        continue;
                    }
                }
            }
            index += 1;
        }
        result
    }

    /// Toggles every value in `range`: values present are removed, values
    /// absent are inserted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roaring::RoaringBitmap;
    ///
    /// let mut rb = RoaringBitmap::new();
    /// rb.insert(1);
    /// rb.flip_range(0..3);
    /// assert!(rb.contains(0));
    /// assert!(!rb.contains(1));
    /// assert!(rb.contains(2));
    /// ```
    pub fn flip_range(&mut self, range: Range<u64>) {
        assert!(range.end <= u64::from(u32::MAX) + 1, "can't index past 2**32");
        if range.is_empty() {
            return;
        }
        let (start_hi, start_lo) = util::split(range.start as u32);
        let (end_hi, end_lo) = util::split((range.end - 1) as u32);

        for key in start_hi..=end_hi {
            let lo = if key == start_hi { start_lo } else { 0 };
            let hi = if key == end_hi { end_lo } else { u16::MAX };

            match self.containers.binary_search_by_key(&key, |c| c.key) {
                Ok(loc) => {
                    self.containers[loc].flip_range(lo..=hi);
                    if self.containers[loc].is_empty() {
                        self.containers.remove(loc);
                    }
                }
                Err(loc) => {
                    self.containers.insert(loc, Container::full_range(key, lo, hi));
                }
            }
        }
    }

    /// Returns a new set with every value in `range` toggled relative to `self`:
    /// values present in `self` are absent from the result, values absent are
    /// present. Leaves `self` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roaring::RoaringBitmap;
    ///
    /// let mut rb = RoaringBitmap::new();
    /// rb.insert(1);
    /// let flipped = rb.flip(0..3);
    /// assert!(flipped.contains(0));
    /// assert!(!flipped.contains(1));
    /// assert!(flipped.contains(2));
    /// assert!(rb.contains(1));
    /// ```
    pub fn flip(&self, range: Range<u64>) -> RoaringBitmap {
        let mut result = self.clone();
        result.flip_range(range);
        result
    }

    /// Toggles the presence of a single value: removes it if present, inserts
    /// it if absent. Equivalent to, but cheaper than, `flip_range(n..n+1)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roaring::RoaringBitmap;
    ///
    /// let mut rb = RoaringBitmap::new();
    /// rb.flip_bit(1);
    /// assert!(rb.contains(1));
    /// rb.flip_bit(1);
    /// assert!(!rb.contains(1));
    /// ```
    pub fn flip_bit(&mut self, value: u32) {
        if !self.insert(value) {
            self.remove(value);
        }
    }

    /// Returns `true` if this set contains the specified integer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roaring::RoaringBitmap;
    ///
    /// let mut rb = RoaringBitmap::new();
    /// rb.insert(1);
    /// assert_eq!(rb.contains(0), false);
    /// assert_eq!(rb.contains(1), true);
    /// assert_eq!(rb.contains(100), false);
    /// ```
    pub fn contains(&self, value: u32) -> bool {
        let (key, index) = util::split(value);
        match self.containers.binary_search_by_key(&key, |c| c.key) {
            Ok(loc) => self.containers[loc].contains(index),
            Err(_) => false,
        }
    }

    /// Returns `true` if every value in `range` is present in this set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roaring::RoaringBitmap;
    ///
    /// let mut rb = RoaringBitmap::new();
    /// rb.insert_range(2..5);
    /// assert!(rb.contains_range(2..5));
    /// assert!(!rb.contains_range(2..6));
    /// ```
    pub fn contains_range(&self, range: Range<u64>) -> bool {
        if range.is_empty() {
            return true;
        }
        assert!(range.end <= u64::from(u32::MAX) + 1, "can't index past 2**32");
        let (start_hi, start_lo) = util::split(range.start as u32);
        let (end_hi, end_lo) = util::split((range.end - 1) as u32);

        for key in start_hi..=end_hi {
            let lo = if key == start_hi { start_lo } else { 0 };
            let hi = if key == end_hi { end_lo } else { u16::MAX };
            match self.containers.binary_search_by_key(&key, |c| c.key) {
                Ok(loc) => {
                    if !self.containers[loc].contains_range(lo..=hi) {
                        return false;
                    }
                }
                Err(_) => return false,
            }
        }
        true
    }

    /// Reports the presence of `value` as `1` or `0`, matching the bit
    /// returned by the indicator function of the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roaring::RoaringBitmap;
    ///
    /// let mut rb = RoaringBitmap::new();
    /// rb.insert(4);
    /// assert_eq!(rb.membership(4), 1);
    /// assert_eq!(rb.membership(5), 0);
    /// ```
    pub fn membership(&self, value: u32) -> u8 {
        u8::from(self.contains(value))
    }

    /// Clears all integers in this set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roaring::RoaringBitmap;
    ///
    /// let mut rb = RoaringBitmap::new();
    /// rb.insert(1);
    /// assert_eq!(rb.contains(1), true);
    /// rb.clear();
    /// assert_eq!(rb.contains(1), false);
    /// ```
    pub fn clear(&mut self) {
        self.containers.clear();
    }

    /// Returns `true` if there are no integers in this set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roaring::RoaringBitmap;
    ///
    /// let mut rb = RoaringBitmap::new();
    /// assert_eq!(rb.is_empty(), true);
    ///
    /// rb.insert(3);
    /// assert_eq!(rb.is_empty(), false);
    /// ```
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Returns the number of distinct integers added to the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roaring::RoaringBitmap;
    ///
    /// let mut rb = RoaringBitmap::new();
    /// assert_eq!(rb.len(), 0);
    ///
    /// rb.insert(3);
    /// assert_eq!(rb.len(), 1);
    ///
    /// rb.insert(3);
    /// rb.insert(4);
    /// assert_eq!(rb.len(), 2);
    /// ```
    pub fn len(&self) -> u64 {
        self.containers.iter().map(Container::len).sum()
    }

    /// Returns the minimum value in the set (if the set is non-empty).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roaring::RoaringBitmap;
    ///
    /// let mut rb = RoaringBitmap::new();
    /// assert_eq!(rb.min(), None);
    ///
    /// rb.insert(3);
    /// rb.insert(4);
    /// assert_eq!(rb.min(), Some(3));
    /// ```
    pub fn min(&self) -> Option<u32> {
        self.containers.first().and_then(|head| head.min().map(|min| util::join(head.key, min)))
    }

    /// Returns the maximum value in the set (if the set is non-empty).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roaring::RoaringBitmap;
    ///
    /// let mut rb = RoaringBitmap::new();
    /// assert_eq!(rb.max(), None);
    ///
    /// rb.insert(3);
    /// rb.insert(4);
    /// assert_eq!(rb.max(), Some(4));
    /// ```
    pub fn max(&self) -> Option<u32> {
        self.containers.last().and_then(|tail| tail.max().map(|max| util::join(tail.key, max)))
    }

    /// Returns the number of integers that are `<= value`. `rank(u32::MAX)`
    /// equals `len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roaring::RoaringBitmap;
    ///
    /// let mut rb = RoaringBitmap::new();
    /// rb.insert(3);
    /// rb.insert(4);
    /// assert_eq!(rb.rank(3), 1);
    /// assert_eq!(rb.rank(10), 2);
    /// ```
    pub fn rank(&self, value: u32) -> u64 {
        let (key, index) = util::split(value);
        match self.containers.binary_search_by_key(&key, |c| c.key) {
            Ok(loc) => {
                self.containers[..loc].iter().map(Container::len).sum::<u64>()
                    + self.containers[loc].rank(index)
            }
            Err(loc) => self.containers[..loc].iter().map(Container::len).sum(),
        }
    }

    /// Returns the `n`th smallest value in the set, zero-indexed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roaring::RoaringBitmap;
    ///
    /// let mut rb = RoaringBitmap::new();
    /// rb.insert(3);
    /// rb.insert(4);
    /// assert_eq!(rb.select(0), Some(3));
    /// assert_eq!(rb.select(1), Some(4));
    /// assert_eq!(rb.select(2), None);
    /// ```
    pub fn select(&self, n: u32) -> Option<u32> {
        let mut n = u64::from(n);
        for container in &self.containers {
            let len = container.len();
            if n < len {
                return container.select(n as u32).map(|lo| util::join(container.key, lo));
            }
            n -= len;
        }
        None
    }

    /// Rewrites every container to the most compact of its three
    /// representations for its current contents.
    ///
    /// Mutations keep each container's representation merely correct (not
    /// necessarily optimal); call this after a batch of inserts/removals, or
    /// before serializing, to reclaim the space a run-length-friendly set
    /// would otherwise waste as an array or bitmap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roaring::RoaringBitmap;
    ///
    /// let mut rb: RoaringBitmap = (0..10_000).collect();
    /// rb.optimize();
    /// assert!(rb.has_run_compression());
    /// ```
    pub fn optimize(&mut self) {
        for container in &mut self.containers {
            container.optimize();
        }
    }

    /// Returns `true` if any container currently uses the run representation.
    pub fn has_run_compression(&self) -> bool {
        self.containers.iter().any(Container::has_run_compression)
    }
}

impl Default for RoaringBitmap {
    fn default() -> RoaringBitmap {
        RoaringBitmap::new()
    }
}
