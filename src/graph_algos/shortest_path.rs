use crate::errors::PathPlannerError;
use crate::graph::{ConnectionId, Graph, LocationId};
use super::RunStatus;


/// Final route of a finished search
/// Only built by [`shortest_path`], so it always holds at least the start and end
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    locations: Vec<LocationId>, // start .. end
    connections: Vec<ConnectionId>, // connections[i] joins locations[i] and locations[i + 1]
    distance: f64,
}

impl Route {

    /// Ordered locations from start to end
    pub fn locations(&self) -> &[LocationId] {
        &self.locations
    }

    /// Ordered connections traversed between consecutive locations
    pub fn connections(&self) -> &[ConnectionId] {
        &self.connections
    }

    /// Sum of the traversed connection weights
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn start(&self) -> LocationId {
        self.locations[0]
    }

    pub fn end(&self) -> LocationId {
        self.locations[self.locations.len() - 1]
    }

    /// Number of connections traversed
    pub fn hop_count(&self) -> usize {
        self.connections.len()
    }
}


/// Construct the shortest path from the start to `end` once a search reached it
/// Walks predecessor links back from `end` and returns the ordered route
pub fn shortest_path(graph: &Graph, end: LocationId) -> Result<Route, PathPlannerError> {

    let target = graph.location(end).ok_or(PathPlannerError::InvalidReference(end))?;
    if graph.run_status() != RunStatus::Reached || !target.is_visited() {
        return Err(PathPlannerError::NoPathFound);
    }

    let mut locations = vec![end];
    let mut connections = Vec::new();
    let mut current = target;

    // Trace back from end to start, a chain longer than the graph means corrupt links
    while let Some((previous, via)) = current.predecessor_link() {
        if locations.len() > graph.location_count() {
            return Err(PathPlannerError::NoPathFound);
        }
        locations.push(previous);
        connections.push(via);
        current = graph.location(previous).ok_or(PathPlannerError::NoPathFound)?;
    }

    // The chain must end on the location the search started from
    if current.distance() != 0.0 {
        return Err(PathPlannerError::NoPathFound);
    }

    // The path is in reverse order, so reverse it
    locations.reverse();
    connections.reverse();

    Ok(Route {
        locations,
        connections,
        distance: target.distance(),
    })
}
