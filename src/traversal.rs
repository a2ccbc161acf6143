//! Single-pass traversal primitives over plain adjacency lists.
//!
//! Collaborators for reachability and ordering questions; they share no
//! state with the maximum-flow core.

use std::collections::VecDeque;

/// BFS hop count from `start` to every node; `None` for unreachable nodes.
pub fn breadth_first_distances(adjacency: &[Vec<usize>], start: usize) -> Vec<Option<usize>> {
    let mut distances = vec![None; adjacency.len()];
    distances[start] = Some(0);

    let mut queue = VecDeque::from([start]);
    while let Some(u) = queue.pop_front() {
        for &v in &adjacency[u] {
            if distances[v].is_none() {
                distances[v] = Some(distances[u].unwrap() + 1);
                queue.push_back(v);
            }
        }
    }

    distances
}

/// Shortest (fewest-edge) path from `start` to `end`, reconstructed from the
/// BFS predecessor chain; `None` if `end` is unreachable.
pub fn shortest_path(adjacency: &[Vec<usize>], start: usize, end: usize) -> Option<Vec<usize>> {
    let mut prev = vec![None; adjacency.len()];
    let mut visited = vec![false; adjacency.len()];
    visited[start] = true;

    let mut queue = VecDeque::from([start]);
    while let Some(u) = queue.pop_front() {
        for &v in &adjacency[u] {
            if !visited[v] {
                visited[v] = true;
                prev[v] = Some(u);
                queue.push_back(v);
            }
        }
    }

    if !visited[end] {
        return None;
    }

    let mut path = vec![end];
    let mut at = end;
    while let Some(u) = prev[at] {
        path.push(u);
        at = u;
    }
    path.reverse();
    Some(path)
}

/// Preorder of the nodes reachable from `start`, following adjacency lists
/// in insertion order. Iterative, so depth is not bounded by the call stack.
pub fn depth_first_order(adjacency: &[Vec<usize>], start: usize) -> Vec<usize> {
    let mut order = Vec::new();
    let mut visited = vec![false; adjacency.len()];

    // next edge index per node, so each adjacency list is scanned once
    let mut cursor = vec![0usize; adjacency.len()];
    let mut stack = vec![start];
    visited[start] = true;
    order.push(start);

    while let Some(&u) = stack.last() {
        if cursor[u] < adjacency[u].len() {
            let v = adjacency[u][cursor[u]];
            cursor[u] += 1;
            if !visited[v] {
                visited[v] = true;
                order.push(v);
                stack.push(v);
            }
        } else {
            stack.pop();
        }
    }

    order
}
