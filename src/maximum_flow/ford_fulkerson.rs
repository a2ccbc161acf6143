use crate::maximum_flow::solver::MaxFlowSolver;
use num_traits::NumAssign;

impl<Flow> MaxFlowSolver<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    /// Repeated depth-first augmentation. Each round finds one augmenting
    /// path and pushes its bottleneck; with integer capacities every round
    /// adds at least one unit, so the loop terminates in O(E * maxflow).
    pub(crate) fn ford_fulkerson(&mut self) {
        let upper = self.source_capacity();
        loop {
            self.mark_all_unvisited();
            match self.augmenting_dfs(self.source, upper) {
                Some(delta) => self.max_flow += delta,
                None => break,
            }
        }
    }

    // The bottleneck is threaded through the recursive returns: the first
    // path that reaches the sink is augmented edge by edge on the unwind,
    // so the path is never materialized.
    fn augmenting_dfs(&mut self, u: usize, flow: Flow) -> Option<Flow> {
        if u == self.sink {
            return Some(flow);
        }
        self.visit(u);

        for i in 0..self.graph.adjacent_edge_ids[u].len() {
            let edge_id = self.graph.adjacent_edge_ids[u][i];
            let edge = &self.graph.inside_edge_list[edge_id];
            let (to, residual_capacity) = (edge.to, edge.residual_capacity());
            if self.visited(to) || residual_capacity == Flow::zero() {
                continue;
            }

            if let Some(delta) = self.augmenting_dfs(to, flow.min(residual_capacity)) {
                self.graph.push_flow(edge_id, delta);
                return Some(delta);
            }
        }

        None
    }
}
