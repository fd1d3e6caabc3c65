#![allow(clippy::len_without_is_empty)]

pub mod beller;
pub mod bitops;
pub mod bitvec;
pub mod deque;
pub mod error;
pub mod flc;
mod heap_size;
pub mod io;
pub mod lf;
pub mod packed;
pub mod rlbwt;
pub mod serialize;
pub mod stats;
#[cfg(test)]
mod testutil;
pub mod util;
pub mod wavelet;

pub use beller::{BellerEnumerator, EnumMode, LcpInterval};
pub use bitvec::BitVector;
pub use error::{Error, Result};
pub use flc::FlcVector;
pub use heap_size::HeapSize;
pub use lf::{backward_isa_iterator, reconstruct_text_reverse, BackwardIsaIter};
pub use rlbwt::{DenseFposIndex, ForwardRle, FposIndex, Rlbwt, WaveletFposIndex};
pub use stats::TextStatistics;
pub use wavelet::{interval_symbols, CharInterval};
