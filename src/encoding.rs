//! Binary encoding of region indices.
//!
//! With `n` regions, the active region is stored in `ceil(log2 n)` system bit
//! propositions `s.bit0 .. s.bit{k-1}`, most significant bit first. Region `i`
//! is active exactly when the bits spell `i`:
//!
//! ```text
//! n = 3, k = 2:   0 -> !s.bit0 & !s.bit1
//!                 1 -> !s.bit0 &  s.bit1
//!                 2 ->  s.bit0 & !s.bit1
//! ```
//!
//! The pattern `11` is never referenced. With a single region there are no bits
//! at all and the region predicate is the constant `TRUE`.

use std::collections::HashMap;

use log::debug;

use crate::config::WriterConfig;
use crate::error::{Error, Result};
use crate::formula::Formula;
use crate::types::{EncodingMode, Region};

/// Number of bits needed to encode `count` regions, i.e. `ceil(log2 count)`.
///
/// Fails for `count == 0`, where no width is defined.
pub fn bit_width(count: usize) -> Result<usize> {
    if count == 0 {
        return Err(Error::invalid_input("cannot encode zero regions"));
    }
    Ok(count.next_power_of_two().trailing_zeros() as usize)
}

/// Current- and next-state predicates for each encoded index.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BitEncoding {
    num_bits: usize,
    current: Vec<Formula>,
    next: Vec<Formula>,
}

impl BitEncoding {
    pub fn num_bits(&self) -> usize {
        self.num_bits
    }

    /// Number of encoded indices.
    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Predicate over current bits that holds exactly when index `i` is active.
    pub fn current(&self, i: usize) -> &Formula {
        &self.current[i]
    }

    /// Predicate over next-state bits that holds exactly when index `i` is next active.
    pub fn next(&self, i: usize) -> &Formula {
        &self.next[i]
    }

    pub fn current_all(&self) -> &[Formula] {
        &self.current
    }

    pub fn next_all(&self) -> &[Formula] {
        &self.next
    }
}

/// Computes the bit encoding of indices `0..count` over `num_bits` bits.
///
/// This is a pure function of its arguments; see [`BitEncodingCache`] for memoization.
pub fn bit_encoding(count: usize, num_bits: usize, config: &WriterConfig) -> Result<BitEncoding> {
    if num_bits >= usize::BITS as usize || count > 1usize << num_bits {
        return Err(Error::invalid_input(format!(
            "{} indices do not fit in {} bits",
            count, num_bits
        )));
    }

    let bits: Vec<Formula> = (0..num_bits)
        .map(|k| Formula::var(config.sys_var(&config.bit_name(k))))
        .collect();

    let mut current = Vec::with_capacity(count);
    let mut next = Vec::with_capacity(count);
    for i in 0..count {
        let literal = |k: usize, value: Formula| {
            if (i >> (num_bits - 1 - k)) & 1 == 1 {
                value
            } else {
                Formula::not(value)
            }
        };
        current.push(Formula::and_all(
            bits.iter().enumerate().map(|(k, b)| literal(k, b.clone())),
        ));
        next.push(Formula::and_all(
            bits.iter().enumerate().map(|(k, b)| literal(k, Formula::next(b.clone()))),
        ));
    }

    Ok(BitEncoding {
        num_bits,
        current,
        next,
    })
}

/// Memo table for bit encodings, keyed by region count.
///
/// The encoding depends only on the count (and the naming in the config), so a
/// cache can be shared by every compilation that uses the same config.
#[derive(Debug)]
pub struct BitEncodingCache {
    config: WriterConfig,
    data: HashMap<usize, BitEncoding>,
    hits: usize,
    misses: usize,
}

impl Default for BitEncodingCache {
    fn default() -> Self {
        Self::new(WriterConfig::default())
    }
}

impl BitEncodingCache {
    pub fn new(config: WriterConfig) -> Self {
        Self {
            config,
            data: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// The naming used for encoded variables.
    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Get the number of cache hits.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Get the number of cache misses.
    pub fn misses(&self) -> usize {
        self.misses
    }

    /// Reset the cache.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the encoding of `count` regions, computing it on first use.
    pub fn get(&mut self, count: usize) -> Result<&BitEncoding> {
        if self.data.contains_key(&count) {
            self.hits += 1;
            debug!("bit encoding cache hit (count = {})", count);
        } else {
            self.misses += 1;
            let num_bits = bit_width(count)?;
            debug!("bit encoding cache miss (count = {}, bits = {})", count, num_bits);
            let encoding = bit_encoding(count, num_bits, &self.config)?;
            self.data.insert(count, encoding);
        }
        Ok(&self.data[&count])
    }
}

/// System propositions that encode the active region.
///
/// These must be declared alongside the robot propositions in the SMV file. Bit
/// names come from the cache's config, the same one that names the variables of
/// topology formulas compiled with that cache.
pub fn region_propositions(
    regions: &[Region],
    mode: EncodingMode,
    cache: &BitEncodingCache,
) -> Result<Vec<String>> {
    match mode {
        EncodingMode::Bits => {
            let num_bits = bit_width(regions.len())?;
            Ok((0..num_bits).map(|k| cache.config().bit_name(k)).collect())
        }
        EncodingMode::Explicit => {
            if regions.is_empty() {
                return Err(Error::invalid_input("cannot encode zero regions"));
            }
            Ok(regions.iter().map(|r| r.name().to_string()).collect())
        }
    }
}
