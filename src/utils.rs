#[inline]
pub fn wrap_add(index: usize, addend: usize, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    debug_assert!(addend <= capacity);
    (index + addend) % capacity
}

#[inline]
pub fn wrap_sub(index: usize, subtrahend: usize, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    debug_assert!(subtrahend <= capacity);
    (index + capacity - subtrahend) % capacity
}

/// Capacity after one growth step: about half again as large, and always at
/// least one slot larger.
#[inline]
pub fn grown_capacity(capacity: usize) -> usize {
    (capacity + 1) * 3 / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapping_arithmetic() {
        assert_eq!(wrap_add(3, 2, 4), 1);
        assert_eq!(wrap_add(0, 0, 1), 0);
        assert_eq!(wrap_sub(0, 1, 4), 3);
        assert_eq!(wrap_sub(2, 2, 4), 0);
    }

    #[test]
    fn growth_is_strict() {
        assert_eq!(grown_capacity(0), 1);
        assert_eq!(grown_capacity(1), 3);
        assert_eq!(grown_capacity(4), 7);
        assert_eq!(grown_capacity(10), 16);
        for capacity in 0..64 {
            assert!(grown_capacity(capacity) > capacity);
        }
    }
}
