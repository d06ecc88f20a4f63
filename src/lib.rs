//! # topo-spec: synthesis input files from region topologies
//!
//! **`topo-spec`** turns a workspace topology (named regions plus an adjacency relation)
//! and a GR(1) specification into the two text files consumed by a temporal-logic
//! game-synthesis engine:
//!
//! - an **SMV file** declaring the boolean variables of the environment and the system,
//! - an **LTL file** holding the environment assumptions and the system guarantees.
//!
//! ## Region encodings
//!
//! The active region is a system-controlled one-of-`n` choice. It is encoded either
//!
//! - with **bits**: `ceil(log2 n)` shared propositions `s.bit0 ..`, one pattern per region, or
//! - **explicitly**: one proposition per region, exactly one of them true.
//!
//! The bit encoding is a pure function of `n`, memoized in a [`BitEncodingCache`][crate::encoding::BitEncodingCache]
//! that the caller owns and passes in.
//!
//! ## Synthesizable normal form
//!
//! Each side of the specification must contain at least one initial, one safety and one
//! liveness conjunct. Missing classes are filled with `TRUE`, `[](TRUE)` and `[]<>(TRUE)`,
//! so partial specifications remain synthesizable.
//!
//! ## Basic Usage
//!
//! ```rust
//! use topo_spec::encoding::BitEncodingCache;
//! use topo_spec::topology::{compile_topology, AdjacencyMatrix};
//! use topo_spec::types::{EncodingMode, Region};
//!
//! // 1. Describe the workspace
//! let regions = Region::from_names(["kitchen", "hall", "office"]);
//! let adj = AdjacencyMatrix::from_edges(3, [(0, 1), (1, 0), (1, 2), (2, 1)]).unwrap();
//!
//! // 2. Compile the topology with a shared encoding cache
//! let mut cache = BitEncodingCache::default();
//! let topology = compile_topology(&adj, &regions, EncodingMode::Bits, &mut cache).unwrap();
//!
//! // 3. One conjunct per region, plus the valid-region invariant
//! assert_eq!(topology.conjuncts().len(), 4);
//! ```
//!
//! ## Core Components
//!
//! - **[`topology`]**: adjacency matrices and the topology compiler.
//! - **[`encoding`]**: bit encodings of region indices and their cache.
//! - **[`completion`]**: filler conjuncts for missing classes.
//! - **[`smv`]** and **[`ltl`]**: the file writers.

pub mod classify;
pub mod completion;
pub mod config;
pub mod encoding;
pub mod error;
pub mod formula;
pub mod fragment;
pub mod ltl;
pub mod parser;
pub mod smv;
pub mod topology;
pub mod types;
pub mod utils;

pub use error::{Error, Result};
