//! One-pass text/BWT statistics (component J): per-character frequency
//! bookkeeping extended with the LCP summary statistics the `analyze_bwt`
//! CLI surface reports.

use crate::beller::{BellerEnumerator, EnumMode};
use crate::error::Result;
use crate::rlbwt::{DenseFposIndex, ForwardRle, Rlbwt};

/// Summary statistics over a BWT: size, run structure, alphabet, and LCP
/// depth distribution.
#[derive(Debug, Clone)]
pub struct TextStatistics {
    pub n: u64,
    pub run_count: u64,
    pub alphabet_size: u64,
    pub char_counter: Box<[u64; 256]>,
    pub max_lcp: u64,
    pub avg_lcp: f64,
    /// `n / run_count`: the classical repetitiveness measure δ.
    pub delta: f64,
}

impl TextStatistics {
    /// Computes run/character statistics and, via a full LCP-value-mode
    /// enumeration, the max and average LCP.
    pub fn from_bwt_bytes(bwt: &[u8]) -> Result<Self> {
        let mut char_counter = Box::new([0u64; 256]);
        let mut n = 0u64;
        let mut run_count = 0u64;
        for run in ForwardRle::new(bwt.iter().copied()) {
            char_counter[run.head as usize] += run.len;
            n += run.len;
            run_count += 1;
        }
        let alphabet_size = char_counter.iter().filter(|&&c| c > 0).count() as u64;

        let rlbwt = Rlbwt::<DenseFposIndex>::from_bwt_bytes(bwt.iter().copied())?;
        let mut enumerator = BellerEnumerator::new(&rlbwt, EnumMode::LcpValues);
        let mut max_lcp = 0u64;
        let mut sum_lcp: u128 = 0;
        let mut count = 0u64;
        for item in &mut enumerator {
            let entry = item?;
            max_lcp = max_lcp.max(entry.lcp);
            sum_lcp += entry.lcp as u128;
            count += 1;
        }
        let avg_lcp = if count == 0 {
            0.0
        } else {
            sum_lcp as f64 / count as f64
        };
        let delta = if run_count == 0 {
            0.0
        } else {
            n as f64 / run_count as f64
        };

        Ok(TextStatistics {
            n,
            run_count,
            alphabet_size,
            char_counter,
            max_lcp,
            avg_lcp,
            delta,
        })
    }

    /// The alphabet present in the text, in increasing byte order.
    pub fn alphabet(&self) -> Vec<u8> {
        (0u16..256)
            .filter(|&c| self.char_counter[c as usize] > 0)
            .map(|c| c as u8)
            .collect()
    }

    pub fn smallest_character(&self) -> Option<u8> {
        (0u16..256).find(|&c| self.char_counter[c as usize] > 0).map(|c| c as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banana_statistics() {
        let stats = TextStatistics::from_bwt_bytes(b"annb\0aa").unwrap();
        assert_eq!(stats.n, 7);
        assert_eq!(stats.run_count, 5);
        assert_eq!(stats.alphabet_size, 4);
        assert_eq!(stats.alphabet(), vec![0, b'a', b'b', b'n']);
        assert_eq!(stats.smallest_character(), Some(0));
        assert_eq!(stats.max_lcp, 3);
    }

    #[test]
    fn test_aaaaa_delta_is_high() {
        let stats = TextStatistics::from_bwt_bytes(b"a\0aaaa").unwrap();
        // 5 runs collapse "a$aaaa" into: a(1),$(1),a(4) -> 3 runs.
        assert_eq!(stats.run_count, 3);
        assert_eq!(stats.n, 6);
        assert!(stats.delta > 1.0);
        assert_eq!(stats.max_lcp, 4);
    }
}
