//! Core value types shared across the compiler and the writers.
//!
//! This module provides small, immutable wrappers for regions, the choice of
//! region encoding, and the structural classes of specification conjuncts.
use std::fmt;

/// A named workspace region at a fixed position in the region list.
///
/// # Invariants
///
/// - The index is the region's position in the ordered region list it belongs to.
/// - Regions are never mutated after construction.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Region {
    name: String,
    index: usize,
}

impl Region {
    /// Creates a new region with the given name and index.
    pub fn new(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index,
        }
    }

    /// Builds an ordered region list from names, assigning indices by position.
    pub fn from_names<I, S>(names: I) -> Vec<Region>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().enumerate().map(|(i, name)| Region::new(name, i)).collect()
    }

    /// Returns the region name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the region position.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// How the active region is represented with boolean variables.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum EncodingMode {
    /// `ceil(log2 n)` shared bit variables, one bit pattern per region.
    #[default]
    Bits,
    /// One boolean variable per region, exactly one of them true.
    Explicit,
}

impl fmt::Display for EncodingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingMode::Bits => write!(f, "bits"),
            EncodingMode::Explicit => write!(f, "explicit"),
        }
    }
}

/// Structural class of a top-level specification conjunct.
///
/// A synthesizable specification side needs at least one conjunct of each class.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ConjunctClass {
    Initial,
    Safety,
    Liveness,
}

impl ConjunctClass {
    /// All classes, in the order their placeholders are emitted.
    pub const ALL: [ConjunctClass; 3] = [ConjunctClass::Initial, ConjunctClass::Safety, ConjunctClass::Liveness];
}

impl fmt::Display for ConjunctClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConjunctClass::Initial => write!(f, "INITIAL"),
            ConjunctClass::Safety => write!(f, "SAFETY"),
            ConjunctClass::Liveness => write!(f, "LIVENESS"),
        }
    }
}
