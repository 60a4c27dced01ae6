use std::{fmt::Display, ops::Index};

use super::*;

/// A dense matrix of small non-negative entries, stored row by row.
///
/// Used for adjacency matrices (`n x n`, entries `0/1`) and incidence matrices
/// (`n x m`, one column per edge).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Matrix {
    rows: Vec<Vec<u8>>,
}

impl Matrix {
    /// Creates a `rows x columns` matrix of zeros
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self {
            rows: vec![vec![0; columns]; rows],
        }
    }

    /// Returns the number of rows
    pub fn number_of_rows(&self) -> usize {
        self.rows.len()
    }

    /// Returns the length of the first row, or 0 if there are no rows
    pub fn number_of_columns(&self) -> usize {
        self.rows.first().map_or(0, |r| r.len())
    }

    /// Returns all rows
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// Returns the entry at `(row, column)`
    /// ** Panics if out of bounds **
    pub fn get(&self, row: usize, column: usize) -> u8 {
        self.rows[row][column]
    }

    /// Sets the entry at `(row, column)`
    /// ** Panics if out of bounds **
    pub fn set(&mut self, row: usize, column: usize, value: u8) {
        self.rows[row][column] = value;
    }

    /// Consumes the matrix and returns its rows
    pub fn into_rows(self) -> Vec<Vec<u8>> {
        self.rows
    }
}

impl From<Vec<Vec<u8>>> for Matrix {
    fn from(rows: Vec<Vec<u8>>) -> Self {
        Self { rows }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = u8;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        &self.rows[row][column]
    }
}

impl Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            write!(f, "[")?;
            for (i, x) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{x}")?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

impl Graph {
    /// Returns the symmetric `n x n` adjacency matrix.
    /// A self-loop sets its diagonal entry to 1.
    pub fn adjacency_matrix(&self) -> Matrix {
        let mut matrix = Matrix::zeros(self.len(), self.len());
        for Edge(u, v) in self.edges() {
            matrix.set(u as usize, v as usize, 1);
            matrix.set(v as usize, u as usize, 1);
        }
        matrix
    }

    /// Returns the `n x m` incidence matrix with one column per edge in insertion order.
    /// A regular edge has two 1-entries in its column, a self-loop a single 2-entry.
    pub fn incidence_matrix(&self) -> Matrix {
        let mut matrix = Matrix::zeros(self.len(), self.number_of_edges() as usize);
        for (i, Edge(u, v)) in self.edges().enumerate() {
            if u == v {
                matrix.set(u as usize, i, 2);
            } else {
                matrix.set(u as usize, i, 1);
                matrix.set(v as usize, i, 1);
            }
        }
        matrix
    }

    /// Builds a graph from a square, symmetric 0/1 adjacency matrix.
    ///
    /// Edges are inserted scanning the upper triangle (diagonal included) row by row.
    ///
    /// # Example
    /// ```
    /// use grafo::prelude::*;
    ///
    /// let matrix = Matrix::from(vec![vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]]);
    /// let graph = Graph::from_adjacency_matrix(&matrix).unwrap();
    /// assert_eq!(graph.edge_list(), &[Edge(0, 1), Edge(1, 2)]);
    /// ```
    pub fn from_adjacency_matrix(matrix: &Matrix) -> Result<Self> {
        let n = matrix.number_of_rows();
        for (i, row) in matrix.rows().iter().enumerate() {
            if row.len() != n {
                return Err(GraphError::NonSquareMatrix {
                    rows: n,
                    row: i,
                    len: row.len(),
                });
            }
            if let Some((j, &value)) = row.iter().enumerate().find(|(_, x)| **x > 1) {
                return Err(GraphError::NonBinaryEntry {
                    row: i,
                    column: j,
                    value,
                });
            }
        }

        let mut graph = Self::new(n as NumNodes);
        for i in 0..n {
            for j in i..n {
                if matrix[(i, j)] != matrix[(j, i)] {
                    return Err(GraphError::AsymmetricMatrix(i as Node, j as Node));
                }
                if matrix[(i, j)] == 1 {
                    graph.add_edge(i as Node, j as Node)?;
                }
            }
        }
        Ok(graph)
    }

    /// Builds a graph from an incidence matrix with one row per vertex and one column per edge.
    ///
    /// Every column must either contain exactly two 1-entries or a single 2-entry (self-loop);
    /// anything else fails with [`GraphError::MalformedIncidenceColumn`].
    pub fn from_incidence_matrix(matrix: &Matrix) -> Result<Self> {
        let n = matrix.number_of_rows();
        let m = matrix.number_of_columns();
        for (i, row) in matrix.rows().iter().enumerate() {
            if row.len() != m {
                return Err(GraphError::RaggedMatrix {
                    row: i,
                    len: row.len(),
                    expected: m,
                });
            }
            if let Some((j, &value)) = row.iter().enumerate().find(|(_, x)| **x > 2) {
                return Err(GraphError::NonBinaryEntry {
                    row: i,
                    column: j,
                    value,
                });
            }
        }

        let mut graph = Self::new(n as NumNodes);
        let mut endpoints = Vec::with_capacity(2);
        for column in 0..m {
            endpoints.clear();
            let mut sum = 0usize;
            for row in 0..n {
                let x = matrix[(row, column)];
                if x > 0 {
                    sum += x as usize;
                    endpoints.push(row as Node);
                }
            }

            match (sum, endpoints.as_slice()) {
                (2, &[u, v]) => graph.add_edge(u, v)?,
                (2, &[u]) => graph.add_edge(u, u)?,
                _ => return Err(GraphError::MalformedIncidenceColumn { column, sum }),
            }
        }
        Ok(graph)
    }

    /// Builds a graph with one vertex per entry of `list`, connecting every vertex to all of its
    /// listed neighbors. Edges listed from both sides are only added once.
    pub fn from_adjacency_list<L>(list: &[L]) -> Result<Self>
    where
        L: AsRef<[Node]>,
    {
        let mut graph = Self::new(list.len() as NumNodes);
        for (u, nbs) in list.iter().enumerate() {
            for &v in nbs.as_ref() {
                graph.add_edge(u as Node, v)?;
            }
        }
        Ok(graph)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn adjacency_matrix() {
        let graph = Graph::from_edges(3, [(0, 1), (2, 1)]).unwrap();
        let matrix = graph.adjacency_matrix();
        assert_eq!(
            matrix.rows(),
            &[vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]]
        );
        assert_eq!(matrix.to_string(), "[0, 1, 0]\n[1, 0, 1]\n[0, 1, 0]\n");
    }

    #[test]
    fn incidence_matrix() {
        let graph = Graph::from_edges(3, [(0, 1), (2, 1), (2, 2)]).unwrap();
        let matrix = graph.incidence_matrix();
        assert_eq!(
            matrix.rows(),
            &[vec![1, 0, 0], vec![1, 1, 0], vec![0, 1, 2]]
        );
        assert_eq!(Graph::from_incidence_matrix(&matrix).unwrap(), graph);
    }

    #[test]
    fn malformed_matrices() {
        let not_square = Matrix::from(vec![vec![0, 1], vec![1, 0, 0]]);
        assert_eq!(
            Graph::from_adjacency_matrix(&not_square),
            Err(GraphError::NonSquareMatrix {
                rows: 2,
                row: 1,
                len: 3
            })
        );

        let asymmetric = Matrix::from(vec![vec![0, 1], vec![0, 0]]);
        assert_eq!(
            Graph::from_adjacency_matrix(&asymmetric),
            Err(GraphError::AsymmetricMatrix(0, 1))
        );

        let three_ends = Matrix::from(vec![vec![1], vec![1], vec![1]]);
        assert_eq!(
            Graph::from_incidence_matrix(&three_ends),
            Err(GraphError::MalformedIncidenceColumn { column: 0, sum: 3 })
        );

        let one_end = Matrix::from(vec![vec![0, 1], vec![1, 0]]);
        assert!(Graph::from_incidence_matrix(&one_end).is_err());

        let ragged = Matrix::from(vec![vec![1, 0], vec![1]]);
        assert_eq!(
            Graph::from_incidence_matrix(&ragged),
            Err(GraphError::RaggedMatrix {
                row: 1,
                len: 1,
                expected: 2
            })
        );
    }

    #[test]
    fn adjacency_list() {
        let graph = Graph::from_adjacency_list(&[vec![1, 2], vec![0], vec![0]]).unwrap();
        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.edge_list(), &[Edge(0, 1), Edge(0, 2)]);
        assert!(Graph::from_adjacency_list(&[vec![5]]).is_err());

        let again = Graph::from_adjacency_list(&graph.adjacency_list()).unwrap();
        assert_eq!(again, graph);
    }

    #[test]
    fn matrix_round_trips() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        for _ in 0..50 {
            let n = rng.random_range(0..12);
            let graph = random_graph(rng, n, 0.3);

            let from_adj = Graph::from_adjacency_matrix(&graph.adjacency_matrix()).unwrap();
            assert_eq!(from_adj, graph);

            let from_inc = Graph::from_incidence_matrix(&graph.incidence_matrix()).unwrap();
            assert_eq!(from_inc.edge_list(), graph.edge_list());
        }
    }
}
