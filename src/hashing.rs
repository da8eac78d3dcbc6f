//! Digit-sum hashing and the quadratic probe sequence.
//!
//! The hash is deliberately weak: many keys share a digit sum, so
//! collisions are the common case and the probe sequence does the work.

/// Sum of the base-10 digits of `x`. Values `<= 0` contribute nothing.
#[inline]
pub fn digit_sum(x: i64) -> usize {
    let mut x = x;
    let mut sum = 0usize;
    while x > 0 {
        sum += (x % 10) as usize;
        x /= 10;
    }
    sum
}

/// Primary hash of a `(prefix, number)` key: the digit sum of the prefix's
/// integer code plus the digit sum of the number.
///
/// The result is not reduced modulo any table size.
#[inline]
pub fn calculate_hashing(prefix: u8, number: i32) -> usize {
    digit_sum(i64::from(prefix)) + digit_sum(i64::from(number))
}

/// Quadratic probe sequence over a table of `len` slots.
///
/// Yields `(attempt, index)` with `index = (key + attempt^2) mod len` for
/// `attempt` in `0..=max_probes`; attempt 0 is the base slot.
///
/// `attempt^2 mod len` has period `len`, so attempts at or past `len` only
/// revisit slots already yielded. The sequence stops at `len - 1` even when
/// `max_probes` is larger.
#[derive(Clone, Debug)]
pub struct QuadraticProbe {
    base: usize,
    len: usize,
    attempt: usize,
    remaining: usize,
}

impl QuadraticProbe {
    /// # Panics
    /// Panics if `len == 0`.
    pub fn new(key: usize, len: usize, max_probes: usize) -> Self {
        assert!(len > 0, "probe sequence over an empty table");
        Self {
            base: key % len,
            len,
            attempt: 0,
            remaining: max_probes.min(len - 1) + 1,
        }
    }

    /// Base slot of the sequence.
    pub fn base(&self) -> usize {
        self.base
    }

    // (a mod n)^2 mod n == a^2 mod n; squared in u128 so no table size
    // overflows it.
    #[inline]
    fn index_of(&self, attempt: usize) -> usize {
        let len = self.len as u128;
        let r = (attempt as u128) % len;
        ((self.base as u128 + (r * r) % len) % len) as usize
    }
}

impl Iterator for QuadraticProbe {
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let attempt = self.attempt;
        self.attempt = self.attempt.wrapping_add(1);
        Some((attempt, self.index_of(attempt)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for QuadraticProbe {}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn digit_sums() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(123), 6);
        assert_eq!(digit_sum(65), 11);
        assert_eq!(digit_sum(-42), 0);
        assert_eq!(digit_sum(i64::from(i32::MAX)), 46);
    }

    #[test]
    fn hashing_adds_both_digit_sums() {
        assert_eq!(calculate_hashing(0, 123), 6);
        assert_eq!(calculate_hashing(b'A', 9), 6 + 5 + 9);
        assert_eq!(calculate_hashing(b'E', 7), 6 + 9 + 7);
        assert_eq!(calculate_hashing(0, -5), 0);
    }

    /// Invariant: indices follow (key + i^2) mod len for i in 0..=max_probes.
    #[test]
    fn probe_sequence_is_quadratic() {
        let seq: Vec<_> = QuadraticProbe::new(5, 7, 4).collect();
        assert_eq!(seq, vec![(0, 5), (1, 6), (2, 2), (3, 0), (4, 0)]);
    }

    /// Invariant: an out-of-range key is reduced to a valid base slot.
    #[test]
    fn base_is_reduced_modulo_len() {
        let p = QuadraticProbe::new(20, 4, 3);
        assert_eq!(p.base(), 0);
        assert!(p.map(|(_, i)| i).all(|i| i < 4));
    }

    #[test]
    fn zero_probe_bound_yields_base_only() {
        let p = QuadraticProbe::new(3, 10, 0);
        assert_eq!(p.len(), 1);
        assert_eq!(p.collect::<Vec<_>>(), vec![(0, 3)]);
    }

    /// Invariant: large attempt counts never overflow the index arithmetic.
    #[test]
    fn huge_attempts_stay_in_bounds() {
        let len = 1_000_003;
        let mut p = QuadraticProbe::new(usize::MAX, len, usize::MAX);
        p.attempt = usize::MAX - 1;
        for (_, i) in p.by_ref().take(3) {
            assert!(i < len);
        }
    }

    /// Invariant: the square does not overflow for tables wider than
    /// 2^(usize::BITS / 2) slots.
    #[test]
    fn wide_table_square_does_not_overflow() {
        let len = usize::MAX;
        let mut p = QuadraticProbe::new(0, len, usize::MAX);
        p.attempt = usize::MAX - 1;
        let (attempt, i) = p.next().unwrap();
        assert_eq!(attempt, usize::MAX - 1);
        // (len - 1)^2 mod len == 1
        assert_eq!(i, 1);
    }

    /// Invariant: a probe bound past the table size is cut to one pass over
    /// the distinct offsets, and the yielded prefix is unchanged.
    #[test]
    fn unbounded_probe_limit_stops_after_one_period() {
        let p = QuadraticProbe::new(2, 3, usize::MAX);
        assert_eq!(p.len(), 3);
        assert_eq!(p.collect::<Vec<_>>(), vec![(0, 2), (1, 0), (2, 0)]);

        let capped: Vec<_> = QuadraticProbe::new(5, 7, 1_000).collect();
        let full: Vec<_> = QuadraticProbe::new(5, 7, 6).collect();
        assert_eq!(capped, full);
    }
}
