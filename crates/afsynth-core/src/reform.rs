//! Pole/zero post-processing
//!
//! Reorders a pole or zero sequence into the order the stage-pairing logic of
//! the realization layer expects. The permutation depends only on the sequence
//! length `n`: for every odd index `i < n/2`, element `i` is swapped with its
//! mirror `n - 1 - i`. Even indices and the second half are left alone.
//!
//! ```text
//! n = 4: [0 1 2 3]         -> [0 2 1 3]
//! n = 6: [0 1 2 3 4 5]     -> [0 4 2 3 1 5]
//! n = 8: [0 1 2 3 4 5 6 7] -> [0 6 2 4 3 5 1 7]
//! ```
//!
//! Each swap touches a distinct mirror pair, so the permutation is an
//! involution: applying it twice restores the input.

/// Apply the canonical reorder in place.
pub fn reform<T>(data: &mut [T]) {
    let n = data.len();
    for i in (1..n / 2).step_by(2) {
        data.swap(i, n - 1 - i);
    }
}

/// Apply the canonical reorder, returning the reordered sequence.
pub fn reformed<T>(mut data: Vec<T>) -> Vec<T> {
    reform(&mut data);
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(n: usize) -> Vec<usize> {
        reformed((0..n).collect())
    }

    #[test]
    fn test_reform_n4() {
        assert_eq!(indices(4), vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_reform_n6() {
        assert_eq!(indices(6), vec![0, 4, 2, 3, 1, 5]);
    }

    #[test]
    fn test_reform_n8() {
        assert_eq!(indices(8), vec![0, 6, 2, 4, 3, 5, 1, 7]);
    }

    #[test]
    fn test_reform_short_sequences_untouched() {
        assert_eq!(indices(0), Vec::<usize>::new());
        assert_eq!(indices(1), vec![0]);
        assert_eq!(indices(2), vec![0, 1]);
        assert_eq!(indices(3), vec![0, 1, 2]);
    }

    #[test]
    fn test_reform_odd_length() {
        // n=5: only i=1 swaps with 3
        assert_eq!(indices(5), vec![0, 3, 2, 1, 4]);
    }

    #[test]
    fn test_reform_is_involution() {
        for n in 0..=20 {
            let once = indices(n);
            let twice = reformed(once);
            assert_eq!(twice, (0..n).collect::<Vec<_>>(), "n = {}", n);
        }
    }
}
