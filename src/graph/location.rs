use crate::collections::FxIndexSet;
use crate::geometry::Point;
use super::{ConnectionId, LocationId, Role};


/// Selectable point on the graph
/// Run-scoped fields (distance, predecessor, visited) are written by the
/// search only and read back through the accessors
#[derive(Clone, Debug)]
pub struct Location {
    id: LocationId,
    position: Point,
    distance: f64, // f64::INFINITY while unreached
    predecessor: Option<(LocationId, ConnectionId)>, // non-owning, only used to rebuild the route
    visited: bool,
    blocked: bool, // obstacle, never entered by a search
    role: Option<Role>,
    connections: FxIndexSet<ConnectionId>, // incident connections in insertion order
}

impl Location {

    pub(crate) fn new(id: LocationId, position: Point) -> Self {
        Self {
            id,
            position,
            distance: f64::INFINITY,
            predecessor: None,
            visited: false,
            blocked: false,
            role: None,
            connections: FxIndexSet::default(),
        }
    }

    pub fn id(&self) -> LocationId {
        self.id
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Tentative distance from the start, `f64::INFINITY` if unreached
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn is_reached(&self) -> bool {
        self.distance.is_finite()
    }

    /// Previous location on the best known path
    pub fn predecessor(&self) -> Option<LocationId> {
        self.predecessor.map(|(location, _)| location)
    }

    /// Previous location together with the connection used to get here
    pub fn predecessor_link(&self) -> Option<(LocationId, ConnectionId)> {
        self.predecessor
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn is_start(&self) -> bool {
        self.role == Some(Role::Start)
    }

    pub fn is_end(&self) -> bool {
        self.role == Some(Role::End)
    }

    /// Incident connections
    pub fn connections(&self) -> impl ExactSizeIterator<Item = ConnectionId> + '_ {
        self.connections.iter().copied()
    }

    pub fn degree(&self) -> usize {
        self.connections.len()
    }

    pub(crate) fn attach(&mut self, connection: ConnectionId) {
        self.connections.insert(connection);
    }

    pub(crate) fn set_role(&mut self, role: Option<Role>) {
        self.role = role;
    }

    pub(crate) fn set_blocked(&mut self, blocked: bool) {
        self.blocked = blocked;
    }

    pub(crate) fn mark_start(&mut self) {
        self.distance = 0.0;
        self.predecessor = None;
    }

    pub(crate) fn mark_visited(&mut self) {
        self.visited = true;
    }

    /// Relax towards `distance` via `from`, only ever lowers the tentative distance
    pub(crate) fn relax(&mut self, distance: f64, from: LocationId, via: ConnectionId) -> bool {
        if distance < self.distance {
            self.distance = distance;
            self.predecessor = Some((from, via));
            true
        } else {
            false
        }
    }

    pub(crate) fn clear_run_state(&mut self) {
        self.distance = f64::INFINITY;
        self.predecessor = None;
        self.visited = false;
    }

    pub(crate) fn has_run_state(&self) -> bool {
        self.visited || self.predecessor.is_some() || self.distance != f64::INFINITY
    }
}
