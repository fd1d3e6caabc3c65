//! Beller-style breadth-first LCP interval enumerator (component I).
//!
//! Produces every LCP interval of the text in nondecreasing order of depth,
//! without ever materializing the suffix array: each level splits every
//! interval surviving from the previous level via [`interval_symbols`] and
//! detects, via the `visited`/`last_idx`/`last_lb` bookkeeping below, when
//! two sibling child intervals at the same depth share a right endpoint —
//! the signal that their common parent interval is complete and can be
//! emitted.
//!
//! The per-character FIFOs are `deque::BitDeque`, each packing an interval
//! as two adjacent 64-bit fields (`i` then `j`) rather than a `(u64, u64)`
//! tuple queue, the way the bit-deque's original purpose-built role pays
//! for itself here: 256 of these FIFOs are live at once during a wide
//! level, and bit-packing them keeps that fan-out cheap.

use std::collections::{BTreeSet, VecDeque};

use crate::bitvec::BitVector;
use crate::deque::BitDeque;
use crate::error::Result;
use crate::rlbwt::{FposIndex, Rlbwt};
use crate::wavelet::interval_symbols;

/// A triple `(i, j, lcp)`: suffixes ranked `i..=j` share a common prefix of
/// length exactly `lcp`, maximally (neither widening `[i,j]` nor increasing
/// `lcp` preserves the property).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LcpInterval {
    pub i: u64,
    pub j: u64,
    pub lcp: u64,
}

/// Whether the enumerator reports full LCP intervals or a single LCP value
/// per text position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumMode {
    /// Emit every maximal LCP interval (the default enumeration).
    Intervals,
    /// Emit `(p, p, lcp[p])` exactly once per SA position `p`, matching the
    /// classical LCP array.
    LcpValues,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EnumState {
    Fresh,
    Running,
    Drained,
    Terminated,
}

fn mark_true(bv: &mut BitVector, i: usize) {
    bv.replace64(i, 1u64 << 63, 1)
        .expect("visited/lcp_emitted are preallocated to cover every valid index");
}

/// The BFS state machine itself. See [`EnumMode`] for output shape and the
/// module docs for the level-splitting algorithm.
pub struct BellerEnumerator<'a, F: FposIndex> {
    rlbwt: &'a Rlbwt<F>,
    mode: EnumMode,
    queues: Vec<BitDeque>,
    occurring: BTreeSet<u8>,
    next_occurring: BTreeSet<u8>,
    visited: BitVector,
    lcp_emitted: Option<BitVector>,
    last_idx: Option<u64>,
    last_lb: Option<u64>,
    lcp: u64,
    output_queue: VecDeque<LcpInterval>,
    process_end: bool,
    state: EnumState,
}

impl<'a, F: FposIndex> BellerEnumerator<'a, F> {
    pub fn new(rlbwt: &'a Rlbwt<F>, mode: EnumMode) -> Self {
        BellerEnumerator {
            rlbwt,
            mode,
            queues: (0..256).map(|_| BitDeque::new()).collect(),
            occurring: BTreeSet::new(),
            next_occurring: BTreeSet::new(),
            visited: BitVector::new(),
            lcp_emitted: None,
            last_idx: None,
            last_lb: None,
            lcp: 0,
            output_queue: VecDeque::new(),
            process_end: false,
            state: EnumState::Fresh,
        }
    }

    fn init(&mut self) -> Result<()> {
        let n = self.rlbwt.len();
        let mut visited = BitVector::with_capacity_bits((n + 1) as usize);
        for _ in 0..=n {
            visited.push_back_bit(false);
        }
        self.visited = visited;

        if self.mode == EnumMode::LcpValues {
            let mut lcp_emitted = BitVector::with_capacity_bits(n as usize);
            for _ in 0..n {
                lcp_emitted.push_back_bit(false);
            }
            self.lcp_emitted = Some(lcp_emitted);
        } else {
            self.output_queue.push_back(LcpInterval { i: 0, j: n - 1, lcp: 0 });
        }

        for child in interval_symbols(self.rlbwt, 0, n - 1)? {
            self.queues[child.c as usize].push_back64(child.l, 64);
            self.queues[child.c as usize].push_back64(child.r, 64);
            self.next_occurring.insert(child.c);
        }
        self.occurring = std::mem::take(&mut self.next_occurring);
        self.lcp = 1;
        Ok(())
    }

    fn run_level_step(&mut self) -> Result<()> {
        let chars: Vec<u8> = self.occurring.iter().copied().collect();
        let mut counter = [0u64; 256];
        for &c in &chars {
            counter[c as usize] = (self.queues[c as usize].len() / 2) as u64;
        }
        self.next_occurring.clear();
        // last_lb/last_idx track an in-progress merge of adjacent sibling
        // intervals and are meaningful only within a single level: reset
        // them before each round, matching the per-round-local sentinel in
        // the source algorithm.
        self.last_lb = None;
        self.last_idx = None;
        let mut occ_b = false;

        for &c in &chars {
            let mut remaining = counter[c as usize];
            while remaining > 0 {
                let i = self.queues[c as usize]
                    .pop_front64(64)
                    .expect("counter was snapshotted from this queue's length");
                let j = self.queues[c as usize]
                    .pop_front64(64)
                    .expect("counter was snapshotted from this queue's length");
                remaining -= 1;
                occ_b = true;

                if self.mode == EnumMode::LcpValues {
                    let lcp_emitted = self.lcp_emitted.as_mut().expect("set in init for LcpValues mode");
                    if !lcp_emitted.get(i as usize) {
                        let lcp_value = if self.lcp == 0 { 0 } else { self.lcp - 1 };
                        self.output_queue.push_back(LcpInterval { i, j: i, lcp: lcp_value });
                    }
                    mark_true(lcp_emitted, i as usize);
                }

                if !self.visited.get((j + 1) as usize) {
                    if self.last_lb.is_none() {
                        self.last_lb = Some(i);
                    }
                    mark_true(&mut self.visited, (j + 1) as usize);
                    self.last_idx = Some(j + 1);

                    for child in interval_symbols(self.rlbwt, i, j)? {
                        self.queues[child.c as usize].push_back64(child.l, 64);
                        self.queues[child.c as usize].push_back64(child.r, 64);
                        self.next_occurring.insert(child.c);
                    }
                } else {
                    mark_true(&mut self.visited, (j + 1) as usize);
                    if self.last_idx == Some(i) {
                        if self.mode == EnumMode::Intervals {
                            self.output_queue.push_back(LcpInterval {
                                i: self.last_lb.expect("last_idx is only set alongside last_lb"),
                                j,
                                lcp: self.lcp - 1,
                            });
                        }
                        self.last_lb = None;
                        self.last_idx = None;

                        for child in interval_symbols(self.rlbwt, i, j)? {
                            self.queues[child.c as usize].push_back64(child.l, 64);
                            self.queues[child.c as usize].push_back64(child.r, 64);
                            self.next_occurring.insert(child.c);
                        }
                    }
                }
            }
        }

        if !occ_b {
            self.process_end = true;
        } else {
            self.occurring = std::mem::take(&mut self.next_occurring);
            self.lcp += 1;
        }
        Ok(())
    }

    fn advance_until_ready(&mut self) -> Option<Result<LcpInterval>> {
        loop {
            if let Some(iv) = self.output_queue.pop_front() {
                return Some(Ok(iv));
            }
            if self.process_end {
                self.state = EnumState::Drained;
                return None;
            }
            if let Err(e) = self.run_level_step() {
                self.state = EnumState::Terminated;
                return Some(Err(e));
            }
        }
    }

    /// Advance the state machine and return the next LCP interval (or LCP
    /// value entry, in [`EnumMode::LcpValues`]), or `None` once exhausted.
    pub fn next_interval(&mut self) -> Option<Result<LcpInterval>> {
        match self.state {
            EnumState::Fresh => {
                if let Err(e) = self.init() {
                    self.state = EnumState::Terminated;
                    return Some(Err(e));
                }
                self.state = EnumState::Running;
                self.advance_until_ready()
            }
            EnumState::Running => self.advance_until_ready(),
            EnumState::Drained => {
                self.state = EnumState::Terminated;
                None
            }
            EnumState::Terminated => None,
        }
    }
}

impl<'a, F: FposIndex> Iterator for BellerEnumerator<'a, F> {
    type Item = Result<LcpInterval>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_interval()
    }
}
