//! Binary serialization for bit-sequences and FLC vectors (§6.3).
//!
//! Layout of one record: little-endian `u64 length`, `u16 bit_size`, `u16
//! buffer_words`, `u8 code_width`, followed by `buffer_words * 8` bytes of
//! word payload. A leading `u64` count precedes a concatenation of records.
//! `length` is the element count (bits, for a bit-vector; lanes, for an FLC
//! vector); `bit_size` is `length * code_width`, which may be smaller than
//! `buffer_words * 64` since the growth schedule over-allocates.

use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::bitops;
use crate::bitvec::BitVector;
use crate::error::Result;
use crate::flc::FlcVector;

fn write_record<W: Write>(w: &mut W, length: u64, code_width: u8, words: &[u64]) -> Result<()> {
    let bit_size = length.saturating_mul(code_width as u64).min(u16::MAX as u64) as u16;
    w.write_u64::<LittleEndian>(length)?;
    w.write_u16::<LittleEndian>(bit_size)?;
    w.write_u16::<LittleEndian>(words.len() as u16)?;
    w.write_u8(code_width)?;
    for &word in words {
        w.write_u64::<LittleEndian>(word)?;
    }
    Ok(())
}

struct RawRecord {
    length: u64,
    code_width: u8,
    words: Vec<u64>,
}

fn read_record<R: Read>(r: &mut R) -> Result<RawRecord> {
    let length = r.read_u64::<LittleEndian>()?;
    let _bit_size = r.read_u16::<LittleEndian>()?;
    let buffer_words = r.read_u16::<LittleEndian>()?;
    let code_width = r.read_u8()?;
    let mut words = vec![0u64; buffer_words as usize];
    for word in words.iter_mut() {
        *word = r.read_u64::<LittleEndian>()?;
    }
    Ok(RawRecord {
        length,
        code_width,
        words,
    })
}

pub fn write_bit_vector<W: Write>(w: &mut W, bv: &BitVector) -> Result<()> {
    write_record(w, bv.len() as u64, 1, bv.words())
}

pub fn read_bit_vector<R: Read>(r: &mut R) -> Result<BitVector> {
    let rec = read_record(r)?;
    let mut bv = BitVector::with_capacity_bits(rec.length as usize);
    for i in 0..rec.length as usize {
        bv.push_back_bit(bitops::get_bit(&rec.words, i));
    }
    Ok(bv)
}

pub fn write_flc_vector<W: Write>(w: &mut W, v: &FlcVector) -> Result<()> {
    write_record(w, v.len() as u64, v.code_width(), v.words())
}

pub fn read_flc_vector<R: Read>(r: &mut R) -> Result<FlcVector> {
    let rec = read_record(r)?;
    let width = rec.code_width as u32;
    let mut v = FlcVector::new();
    for i in 0..rec.length as usize {
        let bit_pos = i as u64 * width as u64;
        let word = (bit_pos / 64) as usize;
        let bit = (bit_pos % 64) as u32;
        let value = bitops::get_bits(&rec.words, word, bit, width);
        v.push_back(value);
    }
    Ok(v)
}

pub fn write_bit_vectors<W: Write>(w: &mut W, vectors: &[BitVector]) -> Result<()> {
    w.write_u64::<LittleEndian>(vectors.len() as u64)?;
    for v in vectors {
        write_bit_vector(w, v)?;
    }
    Ok(())
}

pub fn read_bit_vectors<R: Read>(r: &mut R) -> Result<Vec<BitVector>> {
    let count = r.read_u64::<LittleEndian>()?;
    (0..count).map(|_| read_bit_vector(r)).collect()
}

pub fn write_flc_vectors<W: Write>(w: &mut W, vectors: &[FlcVector]) -> Result<()> {
    w.write_u64::<LittleEndian>(vectors.len() as u64)?;
    for v in vectors {
        write_flc_vector(w, v)?;
    }
    Ok(())
}

pub fn read_flc_vectors<R: Read>(r: &mut R) -> Result<Vec<FlcVector>> {
    let count = r.read_u64::<LittleEndian>()?;
    (0..count).map(|_| read_flc_vector(r)).collect()
}
