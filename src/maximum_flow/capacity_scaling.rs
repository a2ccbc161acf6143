use crate::maximum_flow::solver::MaxFlowSolver;
use log::debug;
use num_traits::NumAssign;

impl<Flow> MaxFlowSolver<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    /// Ford-Fulkerson with a shrinking admissibility threshold. Only edges
    /// whose remaining capacity is at least delta are traversed, so each
    /// scale needs O(E) augmentations and the whole run is
    /// O(E^2 * log(max capacity)) even when capacities are large.
    pub(crate) fn capacity_scaling(&mut self) {
        let two = Flow::one() + Flow::one();

        // largest power of two not exceeding the largest inserted capacity;
        // zero when no edge was accepted, in which case the loop never runs
        let mut delta = Flow::zero();
        if self.max_capacity >= Flow::one() {
            delta = Flow::one();
            while delta <= self.max_capacity / two {
                delta *= two;
            }
        }
        let upper = self.source_capacity();
        let mut scales = 0usize;
        while delta > Flow::zero() {
            scales += 1;
            loop {
                self.mark_all_unvisited();
                match self.scaling_dfs(self.source, upper, delta) {
                    Some(d) => self.max_flow += d,
                    None => break,
                }
            }
            delta /= two;
        }
        debug!("capacity scaling: exhausted {} scales", scales);
    }

    // ford_fulkerson's search restricted to delta-admissible edges
    fn scaling_dfs(&mut self, u: usize, flow: Flow, delta: Flow) -> Option<Flow> {
        if u == self.sink {
            return Some(flow);
        }
        self.visit(u);

        for i in 0..self.graph.adjacent_edge_ids[u].len() {
            let edge_id = self.graph.adjacent_edge_ids[u][i];
            let edge = &self.graph.inside_edge_list[edge_id];
            let (to, residual_capacity) = (edge.to, edge.residual_capacity());
            if self.visited(to) || residual_capacity < delta {
                continue;
            }

            if let Some(d) = self.scaling_dfs(to, flow.min(residual_capacity), delta) {
                self.graph.push_flow(edge_id, d);
                return Some(d);
            }
        }

        None
    }
}
