//! Run-length-encoded BWT index (component F).
//!
//! The index never materializes the suffix array. It stores, per run: a
//! head character (in a wavelet tree, so rank/access over runs is O(log σ)),
//! a run length (in an [`FlcVector`], so the L-position prefix sum is O(1)
//! per run and psum/search over it is O(log r)), and a per-character prefix
//! sum of run lengths (used both by [`WaveletFposIndex`] and by
//! [`Rlbwt::rank_c`], the primitive the interval-symbols wrapper builds on).

use std::fmt;

use serde::{Deserialize, Serialize};
use vers_vecs::WaveletMatrix;

use crate::error::{Error, Result};
use crate::flc::FlcVector;
use crate::heap_size::HeapSize;

/// Number of distinct byte values; the alphabet is always `0..=255`.
const ALPHABET_SIZE: usize = 256;

/// A maximal run of equal BWT characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub head: u8,
    pub len: u64,
}

/// Consumes a byte stream and emits `(head, len)` runs, merging adjacent
/// equal characters. Single-pass, O(1) extra state beyond a one-byte
/// lookahead.
pub struct ForwardRle<I> {
    iter: I,
    pending: Option<u8>,
}

impl<I> ForwardRle<I> {
    pub fn new(iter: I) -> Self {
        ForwardRle {
            iter,
            pending: None,
        }
    }
}

impl<I: Iterator<Item = u8>> Iterator for ForwardRle<I> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let head = self.pending.take().or_else(|| self.iter.next())?;
        let mut len = 1u64;
        loop {
            match self.iter.next() {
                Some(c) if c == head => len += 1,
                Some(c) => {
                    self.pending = Some(c);
                    break;
                }
                None => break,
            }
        }
        Some(Run { head, len })
    }
}

/// Selects how a run's F-position (the row of the BWT matrix at which the
/// run's first character sits) is computed.
///
/// `Rlbwt` is generic over this trait so callers can trade the O(1)-access,
/// O(r)-space [`DenseFposIndex`] for the O(log r)-access, smaller
/// [`WaveletFposIndex`] without touching anything else.
pub trait FposIndex: fmt::Debug {
    /// Build the index from the already-collected run heads and lengths.
    fn build(heads: &[u8], run_lengths: &[u64], c_array: &[u64; ALPHABET_SIZE + 1]) -> Self
    where
        Self: Sized;

    /// F-position of the run at `run_index`.
    fn fpos(
        &self,
        run_index: usize,
        heads_wt: &WaveletMatrix,
        per_char_len_psum: &[FlcVector; ALPHABET_SIZE],
        c_array: &[u64; ALPHABET_SIZE + 1],
    ) -> u64;

    fn heap_size(&self) -> usize;
}

/// Precomputes `fpos` for every run at construction time: O(1) access,
/// O(r) extra space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenseFposIndex {
    table: Vec<u64>,
}

impl FposIndex for DenseFposIndex {
    fn build(heads: &[u8], run_lengths: &[u64], c_array: &[u64; ALPHABET_SIZE + 1]) -> Self {
        let mut running = [0u64; ALPHABET_SIZE];
        let mut table = Vec::with_capacity(heads.len());
        for (k, &c) in heads.iter().enumerate() {
            let f = c_array[c as usize] + running[c as usize];
            table.push(f);
            running[c as usize] += run_lengths[k];
        }
        DenseFposIndex { table }
    }

    fn fpos(
        &self,
        run_index: usize,
        _heads_wt: &WaveletMatrix,
        _per_char_len_psum: &[FlcVector; ALPHABET_SIZE],
        _c_array: &[u64; ALPHABET_SIZE + 1],
    ) -> u64 {
        self.table[run_index]
    }

    fn heap_size(&self) -> usize {
        self.table.capacity() * std::mem::size_of::<u64>()
    }
}

/// Computes `fpos` on demand from the wavelet tree over run heads plus the
/// per-character run-length prefix sums `Rlbwt` already keeps for
/// `rank_c`: O(log r) access, no extra space of its own.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WaveletFposIndex;

impl FposIndex for WaveletFposIndex {
    fn build(_heads: &[u8], _run_lengths: &[u64], _c_array: &[u64; ALPHABET_SIZE + 1]) -> Self {
        WaveletFposIndex
    }

    fn fpos(
        &self,
        run_index: usize,
        heads_wt: &WaveletMatrix,
        per_char_len_psum: &[FlcVector; ALPHABET_SIZE],
        c_array: &[u64; ALPHABET_SIZE + 1],
    ) -> u64 {
        let c = heads_wt.get_u64_unchecked(run_index);
        let rank_before = heads_wt.rank_u64_unchecked(run_index, c);
        let earlier_len = if rank_before == 0 {
            0
        } else {
            per_char_len_psum[c as usize].psum_at(rank_before - 1)
        };
        c_array[c as usize] + earlier_len
    }

    fn heap_size(&self) -> usize {
        0
    }
}

/// A run-length-encoded BWT, with LF-mapping and run-level rank support but
/// no materialized suffix array.
#[derive(Serialize, Deserialize)]
pub struct Rlbwt<F: FposIndex = DenseFposIndex> {
    run_lengths: FlcVector,
    heads_wt: WaveletMatrix,
    per_char_len_psum: Box<[FlcVector; ALPHABET_SIZE]>,
    c_array: [u64; ALPHABET_SIZE + 1],
    n: u64,
    end_marker_pos: u64,
    fpos: F,
}

impl<F: FposIndex> fmt::Debug for Rlbwt<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rlbwt")
            .field("n", &self.n)
            .field("runs", &self.run_lengths.len())
            .field("end_marker_pos", &self.end_marker_pos)
            .finish()
    }
}

struct CollectedRuns {
    run_lengths: FlcVector,
    heads: Vec<u8>,
    heads_wt: WaveletMatrix,
    per_char_len_psum: Box<[FlcVector; ALPHABET_SIZE]>,
    c_array: [u64; ALPHABET_SIZE + 1],
    n: u64,
    end_marker_pos: u64,
}

fn collect_runs(bwt: impl Iterator<Item = u8>) -> Result<CollectedRuns> {
    let mut run_lengths = FlcVector::new();
    let mut heads: Vec<u8> = Vec::new();
    let mut counts = [0u64; ALPHABET_SIZE];
    let mut n = 0u64;
    let mut end_marker_count = 0u64;
    let mut end_marker_pos = 0u64;

    for run in ForwardRle::new(bwt) {
        if let Some(&prev) = heads.last() {
            if prev == run.head {
                return Err(Error::Inconsistent(
                    "ForwardRle emitted adjacent runs with equal heads".to_string(),
                ));
            }
        }
        if run.head == 0 {
            end_marker_count += 1;
            end_marker_pos = n;
        }
        counts[run.head as usize] += run.len;
        heads.push(run.head);
        run_lengths.push_back(run.len);
        n += run.len;
    }

    if n == 0 {
        return Err(Error::BadInput("BWT must be non-empty".to_string()));
    }
    if end_marker_count != 1 {
        return Err(Error::BadInput(format!(
            "BWT must contain exactly one end-marker (0x00), found {}",
            end_marker_count
        )));
    }

    let mut c_array = [0u64; ALPHABET_SIZE + 1];
    for c in 0..ALPHABET_SIZE {
        c_array[c + 1] = c_array[c] + counts[c];
    }

    let heads_u64: Vec<u64> = heads.iter().map(|&c| c as u64).collect();
    let heads_wt = WaveletMatrix::from_slice(&heads_u64, 8);

    let mut per_char_len_psum: Box<[FlcVector; ALPHABET_SIZE]> =
        Box::new(std::array::from_fn(|_| FlcVector::new()));
    let run_lens_vec: Vec<u64> = run_lengths.to_vec();
    for (&head, &len) in heads.iter().zip(run_lens_vec.iter()) {
        per_char_len_psum[head as usize].push_back(len);
    }

    Ok(CollectedRuns {
        run_lengths,
        heads,
        heads_wt,
        per_char_len_psum,
        c_array,
        n,
        end_marker_pos,
    })
}

impl Rlbwt<DenseFposIndex> {
    /// Build an index whose F-positions are precomputed in an O(r) table.
    pub fn from_bwt_bytes(bwt: impl Iterator<Item = u8>) -> Result<Self> {
        Self::from_bwt_bytes_with(bwt)
    }
}

impl Rlbwt<WaveletFposIndex> {
    /// Build an index whose F-positions are computed on demand via the
    /// run-head wavelet tree.
    pub fn from_bwt_bytes_wavelet(bwt: impl Iterator<Item = u8>) -> Result<Self> {
        Self::from_bwt_bytes_with(bwt)
    }
}

impl<F: FposIndex> Rlbwt<F> {
    fn from_bwt_bytes_with(bwt: impl Iterator<Item = u8>) -> Result<Self> {
        let parts = collect_runs(bwt)?;
        let fpos = F::build(&parts.heads, &parts.run_lengths.to_vec(), &parts.c_array);
        Ok(Rlbwt {
            run_lengths: parts.run_lengths,
            heads_wt: parts.heads_wt,
            per_char_len_psum: parts.per_char_len_psum,
            c_array: parts.c_array,
            n: parts.n,
            end_marker_pos: parts.end_marker_pos,
            fpos,
        })
    }

    pub fn len(&self) -> u64 {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn run_count(&self) -> usize {
        self.run_lengths.len()
    }

    pub fn end_marker_pos(&self) -> u64 {
        self.end_marker_pos
    }

    /// `C[c]`: the number of characters in the text lexicographically less
    /// than `c`.
    pub fn c(&self, c: u8) -> u64 {
        self.c_array[c as usize]
    }

    pub fn c_array(&self) -> &[u64; ALPHABET_SIZE + 1] {
        &self.c_array
    }

    pub fn head_char(&self, run_index: usize) -> u8 {
        self.heads_wt.get_u64_unchecked(run_index) as u8
    }

    /// Locates the run containing BWT position `i`, returning
    /// `(run_index, offset_within_run)`.
    pub fn locate(&self, i: u64) -> Result<(usize, u64)> {
        if i >= self.n {
            return Err(Error::OutOfRange(format!(
                "position {} >= length {}",
                i, self.n
            )));
        }
        let run_index = self
            .run_lengths
            .search(i + 1)
            .ok_or_else(|| Error::Inconsistent("run_lengths.search found no run".to_string()))?
            as usize;
        let prior = if run_index == 0 {
            0
        } else {
            self.run_lengths.psum_at(run_index - 1)
        };
        Ok((run_index, i - prior))
    }

    /// The character at BWT position `i`.
    pub fn char_at(&self, i: u64) -> Result<u8> {
        let (run_index, _) = self.locate(i)?;
        Ok(self.head_char(run_index))
    }

    /// Number of occurrences of `c` in `BWT[0..i)`.
    pub fn rank_c(&self, i: u64, c: u8) -> Result<u64> {
        if i == 0 {
            return Ok(0);
        }
        if i > self.n {
            return Err(Error::OutOfRange(format!(
                "position {} > length {}",
                i, self.n
            )));
        }
        let (run_index, offset) = self.locate(i - 1)?;
        let rank_before = self.heads_wt.rank_u64_unchecked(run_index, c as u64);
        let earlier_len = if rank_before == 0 {
            0
        } else {
            self.per_char_len_psum[c as usize].psum_at(rank_before - 1)
        };
        let partial = if self.head_char(run_index) == c {
            offset + 1
        } else {
            0
        };
        Ok(earlier_len + partial)
    }

    /// The F-position of the run at `run_index`.
    pub fn fpos(&self, run_index: usize) -> u64 {
        self.fpos
            .fpos(run_index, &self.heads_wt, &self.per_char_len_psum, &self.c_array)
    }

    /// `LF(i) = C[BWT[i]] + rank(BWT, i, BWT[i])`.
    pub fn lf(&self, i: u64) -> Result<u64> {
        let (run_index, offset) = self.locate(i)?;
        Ok(self.fpos(run_index) + offset)
    }
}

impl<F: FposIndex> HeapSize for Rlbwt<F> {
    fn heap_size(&self) -> usize {
        self.run_lengths.heap_size()
            + self.per_char_len_psum.iter().map(|v| v.heap_size()).sum::<usize>()
            + self.c_array.len() * std::mem::size_of::<u64>()
            + self.fpos.heap_size()
    }
}
