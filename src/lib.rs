//! Stepwise shortest path search over small location graphs.
//!
//! A [`Graph`] holds locations joined by undirected connections weighted by the
//! Euclidean distance between their positions. [`dijkstra`] returns a lazy
//! stream of [`VisitEvent`]s, one per extracted location, ending in either
//! `Reached` or `Unreachable`. Once the end is reached, [`shortest_path`] walks
//! the predecessor links back into a [`Route`].
//!
//! ```
//! use waypath::{Graph, VisitEvent, dijkstra, shortest_path};
//!
//! let mut graph = Graph::from_layout([(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)], [(0, 1), (1, 2)])?;
//! let (start, end) = (waypath::LocationId::new(0), waypath::LocationId::new(2));
//!
//! let events: Vec<_> = dijkstra(&mut graph, start, end)?.collect();
//! assert!(matches!(events.last(), Some(VisitEvent::Reached { .. })));
//!
//! let route = shortest_path(&graph, end)?;
//! assert_eq!(route.distance(), 7.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;
pub mod pacing;
mod collections;

pub use errors::{GeometryError, GraphError, PathPlannerError};
pub use geometry::Point;
pub use graph::{Connection, ConnectionId, Graph, Location, LocationId, Role, Selection, grid, sample_map};
pub use graph_algos::{RunStatus, Route, VisitEvent, VisitationEvents, dijkstra, dijkstra_selected, shortest_path};
pub use pacing::{Paced, PacedExt, PacingConfig};
