//! Monotonic index deque over a ring buffer, used by the windowed extremum
//! indicators (MIN/MAX/MINMAX, MIDPOINT, MIDPRICE) to stay O(n) on large
//! inputs.
//!
//! Entries are indices into the source slice, ordered so the front always
//! holds the window extremum. Pops on push use strict comparison, so equal
//! values are retained and the front reports the earliest occurrence of the
//! extremum.
//!
//! Callers push the incoming bar before expiring the trailing one, so the
//! deque can briefly hold `cap + 1` live entries; the ring is sized for that.

#[derive(Clone)]
pub struct MonoDeque {
    buf: Vec<usize>,
    head: usize,
    len: usize,
    mask: usize,
}

impl MonoDeque {
    pub fn with_capacity(cap: usize) -> Self {
        let size = (cap + 1).max(2).next_power_of_two();
        Self {
            buf: vec![0; size],
            head: 0,
            len: 0,
            mask: size - 1,
        }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the current window extremum.
    #[inline(always)]
    pub fn front(&self) -> usize {
        self.buf[self.head]
    }

    #[inline(always)]
    fn back(&self) -> usize {
        self.buf[(self.head + self.len - 1) & self.mask]
    }

    #[inline(always)]
    fn pop_back(&mut self) {
        self.len -= 1;
    }

    #[inline(always)]
    fn push(&mut self, idx: usize) {
        self.buf[(self.head + self.len) & self.mask] = idx;
        self.len += 1;
    }

    /// Push a candidate maximum. Strictly smaller tail entries are evicted;
    /// equal values stay so the earliest index keeps the front.
    #[inline(always)]
    pub fn push_max(&mut self, idx: usize, src: &[f64]) {
        while !self.is_empty() && src[idx] > src[self.back()] {
            self.pop_back();
        }
        self.push(idx);
    }

    /// Push a candidate minimum, same tie handling as `push_max`.
    #[inline(always)]
    pub fn push_min(&mut self, idx: usize, src: &[f64]) {
        while !self.is_empty() && src[idx] < src[self.back()] {
            self.pop_back();
        }
        self.push(idx);
    }

    /// Drop front entries that fell out of the window.
    #[inline(always)]
    pub fn expire(&mut self, oldest_allowed: usize) {
        while !self.is_empty() && self.front() < oldest_allowed {
            self.head = (self.head + 1) & self.mask;
            self.len -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_front_tracks_window_max() {
        let src = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
        let period = 3;
        let mut dq = MonoDeque::with_capacity(period);
        let mut maxes = Vec::new();
        for i in 0..src.len() {
            dq.push_max(i, &src);
            if i + 1 >= period {
                dq.expire(i + 1 - period);
                maxes.push(src[dq.front()]);
            }
        }
        assert_eq!(maxes, vec![4.0, 4.0, 5.0, 9.0, 9.0, 9.0]);
    }

    #[test]
    fn test_descending_input_fills_the_ring() {
        // Nothing is ever evicted on push here, so the deque reaches its
        // worst-case occupancy and must keep expiring correctly.
        let src = [9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0];
        let period = 3;
        let mut dq = MonoDeque::with_capacity(period);
        let mut maxes = Vec::new();
        for i in 0..src.len() {
            dq.push_max(i, &src);
            if i + 1 >= period {
                dq.expire(i + 1 - period);
                maxes.push(src[dq.front()]);
            }
        }
        assert_eq!(maxes, vec![9.0, 8.0, 7.0, 6.0, 5.0]);
    }

    #[test]
    fn test_equal_values_fill_the_ring() {
        let src = [4.0; 6];
        let period = 3;
        let mut dq = MonoDeque::with_capacity(period);
        for i in 0..src.len() {
            dq.push_min(i, &src);
            if i + 1 >= period {
                dq.expire(i + 1 - period);
                assert_eq!(dq.front(), i + 1 - period, "window ending at {i}");
            }
        }
    }

    #[test]
    fn test_ties_prefer_earliest_index() {
        let src = [5.0, 3.0, 5.0];
        let mut dq = MonoDeque::with_capacity(3);
        for i in 0..src.len() {
            dq.push_max(i, &src);
        }
        dq.expire(0);
        assert_eq!(dq.front(), 0);
    }
}
