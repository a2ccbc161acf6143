mod capacity_scaling;
mod dinic;
mod edmonds_karp;
pub mod error;
mod ford_fulkerson;
pub mod graph;
pub mod solver;
pub mod status;

pub use error::FlowError;
pub use graph::{Edge, FlowGraph};
pub use solver::{MaxFlowSolver, Strategy};
pub use status::Status;
