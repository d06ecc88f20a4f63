//! Region topology and its compilation to transition-safety formulas.
//!
//! For every region `R` with successors `S1 .. Sm`, the compiled formula contains
//!
//! ```text
//! [](R -> (next(R) | next(S1) | ... | next(Sm)))
//! ```
//!
//! followed by a final conjunct `[](valid)` that forces exactly one declared
//! region to be active. Staying in `R` is always allowed, whatever the diagonal
//! of the adjacency matrix says.
//!
//! # Examples
//!
//! ```
//! use topo_spec::encoding::BitEncodingCache;
//! use topo_spec::topology::{compile_topology, AdjacencyMatrix};
//! use topo_spec::types::{EncodingMode, Region};
//!
//! let regions = Region::from_names(["r1", "r2"]);
//! let adj = AdjacencyMatrix::from_edges(2, [(0, 1)]).unwrap();
//! let mut cache = BitEncodingCache::default();
//!
//! let f = compile_topology(&adj, &regions, EncodingMode::Explicit, &mut cache).unwrap();
//! assert_eq!(
//!     f.render(),
//!     "[](s.r1 -> (next(s.r1) | next(s.r2))) & [](s.r2 -> next(s.r2)) & []((s.r1 & !s.r2) | (!s.r1 & s.r2))"
//! );
//! ```

use std::fmt;

use log::debug;

use crate::encoding::BitEncodingCache;
use crate::error::{Error, Result};
use crate::formula::Formula;
use crate::types::{EncodingMode, Region};

/// Square boolean matrix of permitted direct transitions.
///
/// Entry `(i, j)` is `true` when the robot may move from region `i` to region `j`
/// in one step.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AdjacencyMatrix {
    size: usize,
    data: Vec<bool>,
}

impl AdjacencyMatrix {
    /// Creates an `n × n` matrix with no transitions.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            data: vec![false; size * size],
        }
    }

    /// Creates a matrix from its rows, checking that it is square.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(Error::invalid_input(format!(
                    "adjacency matrix is not square: row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    size
                )));
            }
            data.extend(row);
        }
        Ok(Self { size, data })
    }

    /// Creates an `n × n` matrix from a list of `(from, to)` transitions.
    pub fn from_edges(size: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Result<Self> {
        let mut matrix = Self::new(size);
        for (from, to) in edges {
            if from >= size || to >= size {
                return Err(Error::invalid_input(format!(
                    "transition ({}, {}) out of range for {} regions",
                    from, to, size
                )));
            }
            matrix.set(from, to, true);
        }
        Ok(matrix)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the transition `from -> to` is permitted.
    pub fn get(&self, from: usize, to: usize) -> bool {
        self.data[from * self.size + to]
    }

    pub fn set(&mut self, from: usize, to: usize, value: bool) {
        self.data[from * self.size + to] = value;
    }

    /// Indices of the permitted destinations from `from`, in row order.
    pub fn successors(&self, from: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.size).filter(move |&to| self.get(from, to))
    }
}

impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.size {
            for j in 0..self.size {
                write!(f, "{}", if self.get(i, j) { '1' } else { '0' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Per-region current and next predicates under one encoding mode.
struct RegionPredicates {
    current: Vec<Formula>,
    next: Vec<Formula>,
}

impl RegionPredicates {
    fn build(regions: &[Region], mode: EncodingMode, cache: &mut BitEncodingCache) -> Result<Self> {
        if regions.is_empty() {
            return Err(Error::invalid_input("region list is empty"));
        }
        match mode {
            EncodingMode::Bits => {
                let encoding = cache.get(regions.len())?;
                Ok(Self {
                    current: encoding.current_all().to_vec(),
                    next: encoding.next_all().to_vec(),
                })
            }
            EncodingMode::Explicit => {
                let config = cache.config();
                let current: Vec<Formula> = regions.iter().map(|r| Formula::var(config.sys_var(r.name()))).collect();
                let next = current.iter().cloned().map(Formula::next).collect();
                Ok(Self { current, next })
            }
        }
    }

    fn valid_region(&self, mode: EncodingMode) -> Formula {
        match mode {
            EncodingMode::Bits => Formula::or_all(self.current.iter().cloned()),
            EncodingMode::Explicit => Formula::or_all((0..self.current.len()).map(|active| {
                Formula::and_all(self.current.iter().enumerate().map(|(i, var)| {
                    if i == active {
                        var.clone()
                    } else {
                        Formula::not(var.clone())
                    }
                }))
            })),
        }
    }
}

/// Compiles the adjacency relation into a transition-safety formula.
///
/// Conjuncts follow region order, destinations within a conjunct follow row order
/// with the stay transition first, and the valid-region invariant comes last.
///
/// Fails with [`Error::InvalidInput`] if the region list is empty or its length
/// differs from the matrix size.
pub fn compile_topology(
    adj: &AdjacencyMatrix,
    regions: &[Region],
    mode: EncodingMode,
    cache: &mut BitEncodingCache,
) -> Result<Formula> {
    let n = regions.len();
    debug!("compile_topology(regions = {}, mode = {})", n, mode);
    if adj.size() != n {
        return Err(Error::invalid_input(format!(
            "adjacency matrix is {}x{} but there are {} regions",
            adj.size(),
            adj.size(),
            n
        )));
    }

    let preds = RegionPredicates::build(regions, mode, cache)?;

    let mut conjuncts = Vec::with_capacity(n + 1);
    for origin in 0..n {
        // The diagonal is skipped: staying is already the first destination.
        let destinations = std::iter::once(origin).chain(adj.successors(origin).filter(|&dest| dest != origin));
        let step = Formula::or_all(destinations.map(|dest| preds.next[dest].clone()));
        conjuncts.push(Formula::always(Formula::implies(preds.current[origin].clone(), step)));
    }
    conjuncts.push(Formula::always(preds.valid_region(mode)));

    Ok(Formula::And(conjuncts))
}

/// Builds the formula asserting that exactly one declared region is active.
///
/// In bits mode this is the disjunction of the declared regions' encodings only,
/// so unused bit patterns are illegal states. In explicit mode it is the
/// disjunction of one-hot assignments. The caller wraps it in `[]` as needed.
pub fn valid_region_formula(
    regions: &[Region],
    mode: EncodingMode,
    cache: &mut BitEncodingCache,
) -> Result<Formula> {
    let preds = RegionPredicates::build(regions, mode, cache)?;
    Ok(preds.valid_region(mode))
}

/// System initial condition restricting the robot to start in a valid region.
pub fn initial_region_fragment(
    regions: &[Region],
    mode: EncodingMode,
    cache: &mut BitEncodingCache,
) -> Result<Formula> {
    valid_region_formula(regions, mode, cache)
}
