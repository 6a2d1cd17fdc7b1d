//! Weighted undirected graph view over a similarity matrix
//!
//! Nodes are sentence indices. An edge exists between `i` and `j` when their
//! similarity is non-zero; its weight is that similarity. There are no
//! self-loops because the matrix diagonal is zero.

use super::matrix::SimilarityMatrix;

/// A sentence graph borrowing its adjacency from a [`SimilarityMatrix`]
#[derive(Debug, Clone)]
pub struct SentenceGraph<'a> {
    matrix: &'a SimilarityMatrix,
    /// Total edge weight per node
    total_weight: Vec<f64>,
    /// Number of edges per node
    degree: Vec<u32>,
}

impl<'a> SentenceGraph<'a> {
    /// Build the graph view, precomputing per-node weight and degree
    pub fn new(matrix: &'a SimilarityMatrix) -> Self {
        let n = matrix.len();
        let mut total_weight = Vec::with_capacity(n);
        let mut degree = Vec::with_capacity(n);

        for i in 0..n {
            let row = matrix.row(i);
            total_weight.push(row.iter().sum());
            degree.push(row.iter().filter(|&&w| w > 0.0).count() as u32);
        }

        Self {
            matrix,
            total_weight,
            degree,
        }
    }

    /// Number of nodes
    pub fn num_nodes(&self) -> usize {
        self.matrix.len()
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    /// Iterate over the neighbors of a node with their edge weights
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.matrix
            .row(node)
            .iter()
            .enumerate()
            .filter(|(_, &w)| w > 0.0)
            .map(|(j, &w)| (j, w))
    }

    /// Number of edges incident to a node
    pub fn degree(&self, node: usize) -> u32 {
        self.degree[node]
    }

    /// Sum of the weights of a node's edges
    pub fn node_total_weight(&self, node: usize) -> f64 {
        self.total_weight[node]
    }

    /// Number of undirected edges
    pub fn num_edges(&self) -> usize {
        self.matrix.nonzero_pairs()
    }

    /// Nodes without edges (sentences sharing no term with any other)
    pub fn dangling_nodes(&self) -> Vec<usize> {
        (0..self.num_nodes())
            .filter(|&n| self.degree[n] == 0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_matrix() -> SimilarityMatrix {
        // 0 - 1 - 2, and 3 isolated
        SimilarityMatrix::from_rows(vec![
            vec![0.0, 0.5, 0.0, 0.0],
            vec![0.5, 0.0, 0.25, 0.0],
            vec![0.0, 0.25, 0.0, 0.0],
            vec![0.0, 0.0, 0.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_neighbors_and_weights() {
        let matrix = path_matrix();
        let graph = SentenceGraph::new(&matrix);

        let neighbors: Vec<_> = graph.neighbors(1).collect();
        assert_eq!(neighbors, vec![(0, 0.5), (2, 0.25)]);
        assert_eq!(graph.degree(1), 2);
        assert!((graph.node_total_weight(1) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_dangling_nodes() {
        let matrix = path_matrix();
        let graph = SentenceGraph::new(&matrix);

        assert_eq!(graph.dangling_nodes(), vec![3]);
        assert_eq!(graph.num_edges(), 2);
        assert_eq!(graph.num_nodes(), 4);
    }

    #[test]
    fn test_empty_graph() {
        let matrix = SimilarityMatrix::zeros(0);
        let graph = SentenceGraph::new(&matrix);

        assert!(graph.is_empty());
        assert!(graph.dangling_nodes().is_empty());
        assert_eq!(graph.num_edges(), 0);
    }
}
