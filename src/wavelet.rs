//! Interval-symbols wrapper (component H).
//!
//! Given a BWT range `[l, r]`, returns one `CharInterval` per distinct
//! character occurring in `BWT[l..=r]`, each carrying that character's rank
//! interval. This is the primitive the Beller enumerator splits intervals
//! with at every step.

use crate::error::Result;
use crate::rlbwt::{FposIndex, Rlbwt};

/// A character together with its rank interval `[l, r]` in the BWT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharInterval {
    pub c: u8,
    pub l: u64,
    pub r: u64,
}

/// Computes the interval-symbols of `BWT[l..=r]` by an alphabet walk: for
/// every character `c` with `C[c+1] > C[c]` (i.e. present anywhere in the
/// text), compare `rank_c(l)` against `rank_c(r+1)`. `c` occurs in the range
/// iff the ranks differ, and its rank interval is `[C[c] + rank_c(l), C[c] +
/// rank_c(r+1) - 1]`. At most σ characters are ever present, so the
/// returned list has length ≤ σ regardless of `r - l`.
///
/// When `l == 0` and `r == n - 1` the end-marker (byte `0`) is always
/// included, since it is required to occur exactly once.
pub fn interval_symbols<F: FposIndex>(
    rlbwt: &Rlbwt<F>,
    l: u64,
    r: u64,
) -> Result<Vec<CharInterval>> {
    let c_array = rlbwt.c_array();
    let mut out = Vec::new();
    for c in 0..=255u8 {
        if c_array[c as usize + 1] == c_array[c as usize] {
            continue;
        }
        let rank_l = rlbwt.rank_c(l, c)?;
        let rank_r1 = rlbwt.rank_c(r + 1, c)?;
        if rank_r1 > rank_l {
            let base = c_array[c as usize];
            out.push(CharInterval {
                c,
                l: base + rank_l,
                r: base + rank_r1 - 1,
            });
        }
    }
    Ok(out)
}
