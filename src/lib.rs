//! Maximum-flow computation over a shared residual-graph model, plus a few
//! stand-alone graph utilities.

pub mod data_structures;
pub mod maximum_flow;
pub mod traversal;
