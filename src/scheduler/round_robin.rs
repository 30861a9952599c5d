//! Circle-method round-robin pairing.
//!
//! # Algorithm
//!
//! Seat the `n` roster positions around a table of `m` seats, where
//! `m = n` for even `n` and `m = n + 1` for odd `n` (the extra seat is the
//! bye). Seat 0 stays fixed; seats `1..m` rotate one step per round:
//!
//! ```text
//! seat(0, r) = 0
//! seat(j, r) = ((j - 1 + r) mod (m - 1)) + 1        for j ≥ 1
//! ```
//!
//! In round `r`, seat `i` plays seat `m - 1 - i` for `i in 0..m/2`. A
//! pairing that lands on the bye seat is skipped: that competitor sits out.
//!
//! Every round is a perfect matching of the seats, and the `m - 1` rounds
//! of a full cycle use every seat pair exactly once. Any prefix of rounds
//! therefore yields pairwise-distinct pairings.
//!
//! # Complexity
//! O(rounds · n).
//!
//! # Reference
//! Lucas (1883), "Récréations mathématiques", Vol. 2 (the circle method)

/// One pairing of roster positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pairing {
    /// 0-based round index.
    pub round: usize,
    /// Roster position of side A.
    pub side_a: usize,
    /// Roster position of side B.
    pub side_b: usize,
}

/// Number of rounds in one full cycle for a roster of `n`.
///
/// `n - 1` for even `n`, `n` for odd `n` (each competitor gets one bye).
pub fn full_cycle_rounds(n: usize) -> usize {
    match n {
        0 | 1 => 0,
        _ => table_size(n) - 1,
    }
}

/// Produces the pairings of the first `rounds` rounds, in round order.
///
/// `rounds` beyond a full cycle are ignored, so no pair ever repeats.
/// Returns nothing for `n < 2`.
pub fn pairings(n: usize, rounds: usize) -> Vec<Pairing> {
    if n < 2 {
        return Vec::new();
    }

    let m = table_size(n);
    let rounds = rounds.min(m - 1);
    let mut result = Vec::with_capacity(rounds * (n / 2));

    for round in 0..rounds {
        for i in 0..m / 2 {
            let a = seat(i, round, m);
            let b = seat(m - 1 - i, round, m);
            // Position n is the bye.
            if a >= n || b >= n {
                continue;
            }
            result.push(Pairing {
                round,
                side_a: a,
                side_b: b,
            });
        }
    }

    result
}

#[inline]
fn table_size(n: usize) -> usize {
    if n % 2 == 0 {
        n
    } else {
        n + 1
    }
}

#[inline]
fn seat(j: usize, round: usize, m: usize) -> usize {
    if j == 0 {
        0
    } else {
        (j - 1 + round) % (m - 1) + 1
    }
}
