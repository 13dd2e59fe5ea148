use crate::errors::GraphError;
use super::{Graph, LocationId};


const POSITIONS: [(f64, f64); 9] = [
    (100.0, 100.0), (200.0, 150.0), (300.0, 100.0),
    (400.0, 200.0), (500.0, 300.0), (600.0, 200.0),
    (700.0, 100.0), (400.0, 400.0), (200.0, 400.0),
];

const PAIRS: [(usize, usize); 10] = [
    (0, 1), (1, 2), (2, 3), (3, 4), (4, 5),
    (5, 6), (0, 7), (7, 8), (8, 0), (1, 7),
];

/// Fixed nine location map used by the demo binary
/// A chain 0-1-2-3-4-5-6 plus a loop 0-7-8 with a 1-7 shortcut
pub fn sample_map() -> Result<Graph, GraphError> {
    Graph::from_layout(POSITIONS, PAIRS)
}


/// Rectangular grid, 4-connected, `spacing` apart
/// Location ids run row-major: `row * cols + col`
pub fn grid(rows: usize, cols: usize, spacing: f64) -> Result<Graph, GraphError> {
    if !(spacing.is_finite() && spacing > 0.0) {
        return Err(GraphError::InvalidWeight(spacing));
    }

    let mut graph = Graph::new();
    for row in 0..rows {
        for col in 0..cols {
            graph.add_location((col as f64 * spacing, row as f64 * spacing))?;
        }
    }

    let id = |row: usize, col: usize| LocationId::new(row * cols + col);
    for row in 0..rows {
        for col in 0..cols {
            if col + 1 < cols {
                graph.add_connection(id(row, col), id(row, col + 1))?;
            }
            if row + 1 < rows {
                graph.add_connection(id(row, col), id(row + 1, col))?;
            }
        }
    }
    Ok(graph)
}

impl Graph {
    /// See [`grid`]
    pub fn grid(rows: usize, cols: usize, spacing: f64) -> Result<Self, GraphError> {
        grid(rows, cols, spacing)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sample_map_shape() {
        let graph = sample_map().unwrap();
        assert_eq!(graph.location_count(), 9);
        assert_eq!(graph.connection_count(), 10);

        // 0 touches 1, 7 and 8
        let mut neighbors: Vec<_> = graph.neighbors_of(LocationId::new(0)).unwrap().map(|(n, _)| n.index()).collect();
        neighbors.sort();
        assert_eq!(neighbors, vec![1, 7, 8]);
        assert_eq!(graph.location(LocationId::new(6)).unwrap().degree(), 1);
    }

    #[test]
    fn test_grid_is_four_connected() {
        let graph = Graph::grid(3, 4, 20.0).unwrap();
        assert_eq!(graph.location_count(), 12);
        // rows * (cols - 1) horizontal + (rows - 1) * cols vertical
        assert_eq!(graph.connection_count(), 3 * 3 + 2 * 4);

        let corner = graph.location(LocationId::new(0)).unwrap();
        assert_eq!(corner.degree(), 2);
        let inner = graph.location(LocationId::new(5)).unwrap();
        assert_eq!(inner.degree(), 4);
        assert_eq!(inner.position(), crate::geometry::Point { x: 20.0, y: 20.0 });

        for conn in graph.connections() {
            assert_relative_eq!(conn.weight(), 20.0);
        }
    }

    #[test]
    fn test_grid_rejects_bad_spacing() {
        assert_eq!(grid(2, 2, 0.0).unwrap_err(), GraphError::InvalidWeight(0.0));
        assert!(grid(2, 2, f64::NAN).is_err());
        assert_eq!(grid(0, 5, 1.0).unwrap().location_count(), 0);
    }
}
