//! Max-Cut problem graphs.
//!
//! Max-Cut: partition the vertices of a graph into two sets to maximize the
//! total weight of edges between the sets. The problem maps onto finding the
//! ground state of the Ising operator
//!
//!   H = 1/2 Σ_{(i,j) ∈ E} w_{ij} · Z_i Z_j
//!
//! which is diagonal in the computational basis, so its spectrum is a plain
//! vector of 2^n energies: minimizing the expectation value maximizes the
//! cut.

use serde::{Deserialize, Serialize};

/// An undirected weighted graph for the Max-Cut problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    /// Number of nodes.
    pub n_nodes: usize,
    /// Edges as (`node_a`, `node_b`, weight).
    pub edges: Vec<(usize, usize, f64)>,
}

impl Graph {
    /// Create an unweighted graph (all edge weights 1).
    pub fn new(n_nodes: usize, edges: Vec<(usize, usize)>) -> Self {
        Self {
            n_nodes,
            edges: edges.into_iter().map(|(a, b)| (a, b, 1.0)).collect(),
        }
    }

    /// Create a weighted graph.
    pub fn weighted(n_nodes: usize, edges: Vec<(usize, usize, f64)>) -> Self {
        Self { n_nodes, edges }
    }

    /// Build a graph from a symmetric adjacency matrix, reading the upper
    /// triangle. A zero entry means no edge.
    pub fn from_adjacency(matrix: &[Vec<f64>]) -> Self {
        let n_nodes = matrix.len();
        let mut edges = vec![];
        for (a, row) in matrix.iter().enumerate() {
            for (b, &weight) in row.iter().enumerate().skip(a + 1) {
                if weight != 0.0 {
                    edges.push((a, b, weight));
                }
            }
        }
        Self { n_nodes, edges }
    }

    /// A 4-node square.
    ///
    /// ```text
    /// 0 --- 1
    /// |     |
    /// 3 --- 2
    /// ```
    pub fn square_4() -> Self {
        Self::new(4, vec![(0, 1), (1, 2), (2, 3), (3, 0)])
    }

    /// The complete graph on 4 nodes.
    pub fn complete_4() -> Self {
        Self::new(4, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)])
    }

    /// A 6-node ring.
    pub fn ring_6() -> Self {
        Self::new(6, vec![(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0)])
    }

    /// A 6-node, 9-edge graph with a dense cluster bridged to a sparse pair.
    pub fn braided_6() -> Self {
        Self::new(
            6,
            vec![
                (0, 1),
                (0, 3),
                (1, 4),
                (2, 3),
                (2, 4),
                (2, 5),
                (3, 4),
                (3, 5),
                (4, 5),
            ],
        )
    }

    /// Get the number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// The cut value for an assignment. `assignment[i] = true` puts node i
    /// in set S.
    pub fn cut_value(&self, assignment: &[bool]) -> f64 {
        self.edges
            .iter()
            .filter(|(a, b, _)| assignment[*a] != assignment[*b])
            .map(|(_, _, w)| w)
            .sum()
    }

    /// The cut value for a basis-state index, where bit i of `state` is
    /// node i's side.
    pub fn cut_value_of_index(&self, state: usize) -> f64 {
        let assignment: Vec<bool> = (0..self.n_nodes).map(|i| (state >> i) & 1 == 1).collect();
        self.cut_value(&assignment)
    }

    /// The cut value for a bit-string with node 0 as the first character.
    /// Characters other than `'1'` count as the zero side.
    pub fn cut_value_of_bits(&self, bits: &str) -> f64 {
        let assignment: Vec<bool> = bits.chars().map(|c| c == '1').collect();
        self.cut_value(&assignment)
    }

    /// Find the maximum cut by brute force (small graphs only).
    pub fn max_cut_brute_force(&self) -> (usize, f64) {
        assert!(self.n_nodes <= 20, "brute force limited to 20 nodes");
        let mut best_state = 0;
        let mut best_value = 0.0;
        for state in 0..(1usize << self.n_nodes) {
            let value = self.cut_value_of_index(state);
            if value > best_value {
                best_value = value;
                best_state = state;
            }
        }
        (best_state, best_value)
    }

    /// Split a basis-state index into the two node sets.
    pub fn partition(&self, state: usize) -> (Vec<usize>, Vec<usize>) {
        let mut set_s = vec![];
        let mut set_t = vec![];
        for i in 0..self.n_nodes {
            if (state >> i) & 1 == 1 {
                set_s.push(i);
            } else {
                set_t.push(i);
            }
        }
        (set_s, set_t)
    }

    /// Ising form of the cut objective: a constant offset plus ZZ couplings,
    /// such that `cut(s) = offset − eigenvalue(s)`.
    pub fn ising_terms(&self) -> (f64, Vec<(usize, usize, f64)>) {
        let offset: f64 = self.edges.iter().map(|(_, _, w)| w / 2.0).sum();
        let zz_terms = self
            .edges
            .iter()
            .map(|(a, b, w)| (*a, *b, w / 2.0))
            .collect();
        (offset, zz_terms)
    }

    /// The full 2^n diagonal of the Ising operator, indexed by basis state.
    pub fn ising_diagonal(&self) -> Vec<f64> {
        let (_, zz_terms) = self.ising_terms();
        let dim = 1usize << self.n_nodes;
        (0..dim)
            .map(|state| {
                zz_terms
                    .iter()
                    .map(|&(a, b, coeff)| {
                        let z_a = if (state >> a) & 1 == 1 { -1.0 } else { 1.0 };
                        let z_b = if (state >> b) & 1 == 1 { -1.0 } else { 1.0 };
                        coeff * z_a * z_b
                    })
                    .sum()
            })
            .collect()
    }
}

impl std::fmt::Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Graph ({} nodes, {} edges):",
            self.n_nodes,
            self.edges.len()
        )?;
        for (a, b, w) in &self.edges {
            if (*w - 1.0).abs() < 1e-10 {
                writeln!(f, "  {a} -- {b}")?;
            } else {
                writeln!(f, "  {a} -- {b} (weight: {w:.2})")?;
            }
        }
        Ok(())
    }
}
