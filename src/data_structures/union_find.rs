/// Disjoint-set forest with path compression and union by size.
///
/// Collaborator for spanning-tree style algorithms; independent of the
/// maximum-flow core.
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl UnionFind {
    pub fn new(num_nodes: usize) -> Self {
        UnionFind { parent: (0..num_nodes).collect(), size: vec![1; num_nodes] }
    }

    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while root != self.parent[root] {
            root = self.parent[root];
        }

        // path compression: repoint everything on the x -> root walk
        let mut current = x;
        while current != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Merges the components of `x` and `y`; returns false if they were
    /// already connected.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let (root_x, root_y) = (self.find(x), self.find(y));
        if root_x == root_y {
            return false;
        }

        // merge the smaller component into the larger one
        let (large, small) = if self.size[root_x] >= self.size[root_y] { (root_x, root_y) } else { (root_y, root_x) };
        self.parent[small] = large;
        self.size[large] += self.size[small];
        true
    }

    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Size of the component containing `x`.
    pub fn size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }
}
