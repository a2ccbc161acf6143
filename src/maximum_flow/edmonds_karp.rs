use crate::maximum_flow::solver::MaxFlowSolver;
use num_traits::NumAssign;
use std::collections::VecDeque;

impl<Flow> MaxFlowSolver<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    /// Repeated BFS augmentation. Each augmenting path has the fewest edges
    /// possible in the residual graph, which bounds the number of rounds by
    /// O(V * E) and the total work by O(V * E^2).
    pub(crate) fn edmonds_karp(&mut self) {
        let mut prev = vec![None; self.num_nodes()];
        loop {
            self.mark_all_unvisited();
            prev.fill(None);
            match self.shortest_augmenting_path(&mut prev) {
                Some(delta) => self.max_flow += delta,
                None => break,
            }
        }
    }

    // prev[v] records the edge the BFS used to reach v; the augmenting path
    // is recovered by walking that chain back from the sink
    fn shortest_augmenting_path(&mut self, prev: &mut [Option<usize>]) -> Option<Flow> {
        let mut queue = VecDeque::from([self.source]);
        self.visit(self.source);

        while let Some(u) = queue.pop_front() {
            if u == self.sink {
                break;
            }

            for i in 0..self.graph.adjacent_edge_ids[u].len() {
                let edge_id = self.graph.adjacent_edge_ids[u][i];
                let edge = &self.graph.inside_edge_list[edge_id];
                let to = edge.to;
                if self.visited(to) || edge.residual_capacity() == Flow::zero() {
                    continue;
                }

                prev[to] = Some(edge_id);
                self.visit(to);
                queue.push_back(to);
            }
        }

        // calculate delta
        let mut delta = self.graph.inside_edge_list[prev[self.sink]?].residual_capacity();
        let mut v = self.sink;
        while let Some(edge_id) = prev[v] {
            let edge = &self.graph.inside_edge_list[edge_id];
            delta = delta.min(edge.residual_capacity());
            v = edge.from;
        }

        // update flow
        let mut v = self.sink;
        while let Some(edge_id) = prev[v] {
            v = self.graph.inside_edge_list[edge_id].from;
            self.graph.push_flow(edge_id, delta);
        }

        Some(delta)
    }
}
