use crate::maximum_flow::error::FlowError;
use crate::maximum_flow::graph::{Edge, FlowGraph};
use crate::maximum_flow::status::Status;
use log::debug;
use num_traits::NumAssign;

/// The closed set of augmenting-path algorithms. All of them compute the
/// same maximum-flow value; they differ in how augmenting paths are chosen
/// and therefore in running time.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Strategy {
    /// Repeated depth-first augmentation, O(E * maxflow).
    FordFulkerson,
    /// Shortest (fewest-edge) augmenting paths via BFS, O(V * E^2).
    EdmondsKarp,
    /// Blocking flow over level graphs, O(V^2 * E).
    Dinic,
    /// DFS restricted to a halving capacity threshold, O(E^2 * log(max capacity)).
    CapacityScaling,
}

/// Maximum-flow solver over a single owned [`FlowGraph`].
///
/// The caller populates the graph with [`add_edge`](Self::add_edge) and then
/// queries [`max_flow`](Self::max_flow) or one of the snapshot accessors.
/// The first query runs the selected strategy to completion and freezes the
/// graph; every later query returns the cached solution.
pub struct MaxFlowSolver<Flow> {
    pub(crate) source: usize,
    pub(crate) sink: usize,
    pub(crate) graph: FlowGraph<Flow>,
    strategy: Strategy,
    status: Status,
    pub(crate) max_flow: Flow,
    pub(crate) max_capacity: Flow,
    visited: Vec<u32>,
    visited_token: u32,
}

impl<Flow> MaxFlowSolver<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn new(num_nodes: usize, source: usize, sink: usize, strategy: Strategy) -> Self {
        debug_assert!(source < num_nodes && sink < num_nodes && source != sink);
        MaxFlowSolver {
            source,
            sink,
            graph: FlowGraph::new(num_nodes),
            strategy,
            status: Status::NotSolved,
            max_flow: Flow::zero(),
            max_capacity: Flow::zero(),
            visited: vec![0; num_nodes],
            visited_token: 1,
        }
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.graph.num_nodes()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.graph.num_edges()
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Inserts a forward edge and its residual twin, returning the forward
    /// edge id. Edges with capacity <= 0 or out-of-range endpoints are
    /// dropped (`Ok(None)`), so callers can add edges conditionally without
    /// branching. Fails once a result has been queried.
    pub fn add_edge(&mut self, from: usize, to: usize, capacity: Flow) -> Result<Option<usize>, FlowError> {
        if self.status == Status::Optimal {
            return Err(FlowError::AlreadySolved);
        }

        let edge_id = self.graph.add_directed_edge(from, to, capacity);
        if edge_id.is_some() {
            // seeds the capacity-scaling threshold
            self.max_capacity = self.max_capacity.max(capacity);
        }
        Ok(edge_id)
    }

    /// Total flow pushed from source to sink. Runs the strategy on the first
    /// call; later calls return the cached value.
    pub fn max_flow(&mut self) -> Flow {
        self.execute();
        self.max_flow
    }

    /// Edge-state snapshot reflecting the final solution (solves first).
    pub fn edges(&mut self) -> Vec<Edge<Flow>> {
        self.execute();
        self.graph.edges()
    }

    pub fn get_edge(&mut self, edge_id: usize) -> Option<Edge<Flow>> {
        self.execute();
        self.graph.get_edge(edge_id)
    }

    /// The solved graph (solves first).
    pub fn graph(&mut self) -> &FlowGraph<Flow> {
        self.execute();
        &self.graph
    }

    fn execute(&mut self) {
        if self.status == Status::Optimal {
            return;
        }

        debug!(
            "solving maximum flow: strategy={:?} nodes={} edges={} source={} sink={}",
            self.strategy,
            self.num_nodes(),
            self.num_edges(),
            self.source,
            self.sink
        );
        match self.strategy {
            Strategy::FordFulkerson => self.ford_fulkerson(),
            Strategy::EdmondsKarp => self.edmonds_karp(),
            Strategy::Dinic => self.dinic(),
            Strategy::CapacityScaling => self.capacity_scaling(),
        }
        self.status = Status::Optimal;
    }

    #[inline]
    pub(crate) fn visit(&mut self, u: usize) {
        self.visited[u] = self.visited_token;
    }

    #[inline]
    pub(crate) fn visited(&self, u: usize) -> bool {
        self.visited[u] == self.visited_token
    }

    // marking every node unvisited is a token bump, O(1)
    #[inline]
    pub(crate) fn mark_all_unvisited(&mut self) {
        self.visited_token += 1;
    }

    // total capacity leaving the source; a safe initial bound for the
    // bottleneck threaded through the DFS variants
    pub(crate) fn source_capacity(&self) -> Flow {
        self.graph.adjacent_edge_ids[self.source]
            .iter()
            .fold(Flow::zero(), |sum, &edge_id| sum + self.graph.inside_edge_list[edge_id].capacity)
    }
}
