use num_traits::NumAssign;
use std::fmt::Debug;

/// Snapshot of one edge's state as seen by callers.
///
/// A residual twin is created with zero capacity and only ever carries
/// returned flow, so its `flow` is zero or negative.
#[derive(PartialEq, Debug, Clone)]
pub struct Edge<Flow> {
    pub from: usize,
    pub to: usize,
    pub flow: Flow,
    pub capacity: Flow,
}

impl<Flow> Edge<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    #[inline]
    pub fn residual_capacity(&self) -> Flow {
        self.capacity - self.flow
    }

    /// Residual twins are exactly the edges created with zero capacity;
    /// capacity never changes after insertion.
    #[inline]
    pub fn is_residual(&self) -> bool {
        self.capacity == Flow::zero()
    }
}

#[derive(Default, PartialEq, Debug)]
pub(crate) struct InsideEdge<Flow> {
    pub from: usize,
    pub to: usize,
    pub flow: Flow,
    pub capacity: Flow,
    pub rev: usize,
}

impl<Flow> InsideEdge<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    #[inline]
    pub fn residual_capacity(&self) -> Flow {
        self.capacity - self.flow
    }
}

/// Adjacency structure owning every edge of the network.
///
/// Edges live in a single arena; a forward edge and its residual twin are
/// appended as consecutive ids and reference each other through `rev`, so
/// there are no edge-to-edge pointers. Per-node adjacency keeps edge ids in
/// insertion order, which makes augmenting-path choice deterministic.
#[derive(Default)]
pub struct FlowGraph<Flow> {
    num_nodes: usize,
    num_edges: usize,
    pub(crate) inside_edge_list: Vec<InsideEdge<Flow>>,
    pub(crate) adjacent_edge_ids: Vec<Vec<usize>>,
}

impl<Flow> FlowGraph<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn new(num_nodes: usize) -> Self {
        FlowGraph {
            num_nodes,
            num_edges: 0,
            inside_edge_list: Vec::new(),
            adjacent_edge_ids: vec![Vec::new(); num_nodes],
        }
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Number of caller-inserted edges; residual twins are not counted.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    // return the forward edge id
    pub(crate) fn add_directed_edge(&mut self, from: usize, to: usize, capacity: Flow) -> Option<usize> {
        if capacity <= Flow::zero() || from >= self.num_nodes || to >= self.num_nodes {
            return None;
        }

        let forward = self.inside_edge_list.len();
        let residual = forward + 1;
        self.inside_edge_list.push(InsideEdge { from, to, flow: Flow::zero(), capacity, rev: residual });
        self.inside_edge_list.push(InsideEdge { from: to, to: from, flow: Flow::zero(), capacity: Flow::zero(), rev: forward });
        self.adjacent_edge_ids[from].push(forward);
        self.adjacent_edge_ids[to].push(residual);

        self.num_edges += 1;
        Some(forward)
    }

    pub fn get_edge(&self, edge_id: usize) -> Option<Edge<Flow>> {
        let edge = self.inside_edge_list.get(edge_id)?;
        Some(Edge { from: edge.from, to: edge.to, flow: edge.flow, capacity: edge.capacity })
    }

    /// All edges in creation order; each forward edge is immediately
    /// followed by its residual twin.
    pub fn edges(&self) -> Vec<Edge<Flow>> {
        self.inside_edge_list
            .iter()
            .map(|e| Edge { from: e.from, to: e.to, flow: e.flow, capacity: e.capacity })
            .collect()
    }

    /// Flow leaving `u` minus flow entering `u`, over caller edges.
    /// Zero for every node except the source (+max flow) and sink (-max flow).
    pub fn net_flow(&self, u: usize) -> Flow {
        self.inside_edge_list.iter().filter(|e| e.capacity > Flow::zero()).fold(Flow::zero(), |mut balance, e| {
            if e.from == u {
                balance += e.flow;
            } else if e.to == u {
                balance -= e.flow;
            }
            balance
        })
    }

    #[inline]
    pub(crate) fn push_flow(&mut self, edge_id: usize, flow: Flow) {
        debug_assert!(flow > Flow::zero());
        debug_assert!(flow <= self.inside_edge_list[edge_id].residual_capacity());
        let rev = self.inside_edge_list[edge_id].rev;

        // update flow
        self.inside_edge_list[edge_id].flow += flow;
        self.inside_edge_list[rev].flow -= flow;
    }
}
