//! The capability contract candidate encodings must satisfy, and the
//! adapters for the encodings this binary compares.
//!
//! The harness only ever sees four capabilities: build from a sequence,
//! logical length, random access by position, serialized byte size. The
//! internal bit layout of each representation stays opaque, so candidates
//! can be added or removed in [`CANDIDATES`] without touching the runner.

use anyhow::Result;
use sucds::int_vectors::{Access, CompactVector, DacsByte, DacsOpt, NumVals, PrefixSummedEliasFano};
use sucds::Serializable;

/// A built representation of one workload, readable at any position.
///
/// Implementations must be lossless: `read(p)` returns exactly the value at
/// position `p` of the source sequence. Passing `p >= len()` is a contract
/// violation and panics.
pub trait EncodedSequence {
    /// Logical element count, equal to the source workload's length.
    fn len(&self) -> usize;

    /// True if the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The value at `pos` in the original sequence.
    fn read(&self, pos: usize) -> u64;

    /// Bytes required to persist the structure, including any auxiliary
    /// index it needs for its stated access complexity.
    fn size_in_bytes(&self) -> usize;
}

/// The fixed-width baseline: a plain `Vec<u64>`, 8 bytes per element.
#[derive(Debug)]
pub struct Uncompressed(Vec<u64>);

impl Uncompressed {
    pub fn build(values: &[u64]) -> Self {
        Self(values.to_vec())
    }
}

impl EncodedSequence for Uncompressed {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn read(&self, pos: usize) -> u64 {
        self.0[pos]
    }

    fn size_in_bytes(&self) -> usize {
        self.0.len() * std::mem::size_of::<u64>()
    }
}

/// Fixed-width bit packing at the minimum width for the largest value.
#[derive(Debug)]
pub struct BitPacked(CompactVector);

impl BitPacked {
    pub fn build(values: &[u64]) -> Result<Self> {
        Ok(Self(CompactVector::from_slice(values)?))
    }
}

impl EncodedSequence for BitPacked {
    fn len(&self) -> usize {
        self.0.num_vals()
    }

    fn read(&self, pos: usize) -> u64 {
        expect_in_range(self.0.access(pos), pos)
    }

    fn size_in_bytes(&self) -> usize {
        Serializable::size_in_bytes(&self.0)
    }
}

/// Prefix-summed Elias-Fano, the gap/prefix numeral code of the set.
///
/// Indexes by cumulative sum, so the sum of all values must fit in `usize`;
/// construction fails otherwise.
#[derive(Debug)]
pub struct PrefixSummed(PrefixSummedEliasFano);

impl PrefixSummed {
    pub fn build(values: &[u64]) -> Result<Self> {
        Ok(Self(PrefixSummedEliasFano::from_slice(values)?))
    }
}

impl EncodedSequence for PrefixSummed {
    fn len(&self) -> usize {
        self.0.num_vals()
    }

    fn read(&self, pos: usize) -> u64 {
        expect_in_range(self.0.access(pos), pos)
    }

    fn size_in_bytes(&self) -> usize {
        Serializable::size_in_bytes(&self.0)
    }
}

/// Directly-addressable codes with byte-aligned levels.
#[derive(Debug)]
pub struct DacByte(DacsByte);

impl DacByte {
    pub fn build(values: &[u64]) -> Result<Self> {
        Ok(Self(DacsByte::from_slice(values)?))
    }
}

impl EncodedSequence for DacByte {
    fn len(&self) -> usize {
        self.0.num_vals()
    }

    fn read(&self, pos: usize) -> u64 {
        expect_in_range(self.0.access(pos), pos)
    }

    fn size_in_bytes(&self) -> usize {
        Serializable::size_in_bytes(&self.0)
    }
}

/// Directly-addressable codes with level widths optimized for the input.
#[derive(Debug)]
pub struct DacOpt(DacsOpt);

impl DacOpt {
    pub fn build(values: &[u64]) -> Result<Self> {
        Ok(Self(DacsOpt::from_slice(values, None)?))
    }
}

impl EncodedSequence for DacOpt {
    fn len(&self) -> usize {
        self.0.num_vals()
    }

    fn read(&self, pos: usize) -> u64 {
        expect_in_range(self.0.access(pos), pos)
    }

    fn size_in_bytes(&self) -> usize {
        Serializable::size_in_bytes(&self.0)
    }
}

fn expect_in_range(value: Option<usize>, pos: usize) -> u64 {
    match value {
        Some(v) => v as u64,
        None => panic!("position {pos} out of logical range"),
    }
}

/// One candidate encoding: a report label and a build thunk.
pub struct Candidate {
    /// Label used in report rows, suffixed with the pass name.
    pub name: &'static str,
    /// Builds the representation from the active workload.
    pub build: fn(&[u64]) -> Result<Box<dyn EncodedSequence>>,
}

/// Label of the fixed-width baseline representation.
pub const BASELINE_NAME: &str = "uncompressed";

/// Candidate encodings in declared run order. The baseline runs first in
/// every pass and is not listed here.
pub static CANDIDATES: &[Candidate] = &[
    Candidate {
        name: "bitpacked",
        build: |w| Ok(Box::new(BitPacked::build(w)?)),
    },
    Candidate {
        name: "ef",
        build: |w| Ok(Box::new(PrefixSummed::build(w)?)),
    },
    Candidate {
        name: "dacbyte",
        build: |w| Ok(Box::new(DacByte::build(w)?)),
    },
    Candidate {
        name: "dacopt",
        build: |w| Ok(Box::new(DacOpt::build(w)?)),
    },
];
