use crate::maximum_flow::solver::MaxFlowSolver;
use log::trace;
use num_traits::NumAssign;
use std::collections::VecDeque;

const UNREACHABLE: usize = usize::MAX;

impl<Flow> MaxFlowSolver<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    /// Blocking flow over level graphs. Each phase rebuilds BFS levels from
    /// the source and exhausts augmenting paths restricted to level-ascending
    /// edges; the phase count is bounded by V, giving O(V^2 * E) overall and
    /// O(E * sqrt(V)) on unit-capacity graphs.
    pub(crate) fn dinic(&mut self) {
        let num_nodes = self.num_nodes();
        let mut level = vec![UNREACHABLE; num_nodes];
        let mut next_edge = vec![0; num_nodes];
        let upper = self.source_capacity();

        let mut phase = 0usize;
        while self.build_level_graph(&mut level) {
            phase += 1;
            next_edge.fill(0);
            while let Some(delta) = self.blocking_dfs(self.source, upper, &level, &mut next_edge) {
                self.max_flow += delta;
            }
            trace!("dinic phase {} complete", phase);
        }
    }

    // level[u] = fewest residual edges from the source to u;
    // returns false once the sink drops out of the level graph
    fn build_level_graph(&self, level: &mut [usize]) -> bool {
        level.fill(UNREACHABLE);
        level[self.source] = 0;

        let mut queue = VecDeque::from([self.source]);
        while let Some(u) = queue.pop_front() {
            for &edge_id in &self.graph.adjacent_edge_ids[u] {
                let edge = &self.graph.inside_edge_list[edge_id];
                if edge.residual_capacity() > Flow::zero() && level[edge.to] == UNREACHABLE {
                    level[edge.to] = level[u] + 1;
                    queue.push_back(edge.to);
                }
            }
        }

        level[self.sink] != UNREACHABLE
    }

    // Only edges stepping exactly one level up are admissible. next_edge is
    // the current-arc cursor: an edge found to lead nowhere is never
    // rescanned within the same phase.
    fn blocking_dfs(&mut self, u: usize, flow: Flow, level: &[usize], next_edge: &mut [usize]) -> Option<Flow> {
        if u == self.sink {
            return Some(flow);
        }

        while next_edge[u] < self.graph.adjacent_edge_ids[u].len() {
            let edge_id = self.graph.adjacent_edge_ids[u][next_edge[u]];
            let edge = &self.graph.inside_edge_list[edge_id];
            let (to, residual_capacity) = (edge.to, edge.residual_capacity());

            if residual_capacity > Flow::zero() && level[to] == level[u] + 1 {
                if let Some(delta) = self.blocking_dfs(to, flow.min(residual_capacity), level, next_edge) {
                    self.graph.push_flow(edge_id, delta);
                    return Some(delta);
                }
            }

            next_edge[u] += 1;
        }

        None
    }
}
