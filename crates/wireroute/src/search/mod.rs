//! Graph search over geometric routing graphs.
//!
//! Purpose
//! - Shortest wire runs that prefer fewer bends among near-equal lengths.
//! - Spanning trees under `CostBend` weights, and source-to-terminal wiring
//!   built from both.
//!
//! Layout
//! - `argheap`: indexed min-heap with decrease-key, shared by the solvers.
//! - `cost`: `CostBend`, the `(length, bends)` key with a fuzz band on length.
//! - `mbsp`: bend-minimizing Dijkstra with tied-predecessor sets.
//! - `mst`: Prim over an external weight vector.
//! - `terminals`: metric-closure trees connecting a source to terminals.
//! - `interval`: closed 1-D interval union and exclusion.

pub mod argheap;
pub mod cost;
pub mod interval;
pub mod mbsp;
pub mod mst;
pub mod terminals;

pub use argheap::ArgHeap;
pub use cost::CostBend;
pub use interval::{intervals_exclude, intervals_union, Interval};
pub use mbsp::{MinBendShortestPath, StopReason};
pub use mst::{prim_minimum_spanning_tree, SpanningTree};
pub use terminals::{connect_terminals, TerminalMode, TerminalTree};
