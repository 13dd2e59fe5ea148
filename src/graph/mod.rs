
mod connection;
mod location;
mod sample;

pub use connection::Connection;
pub use location::Location;
pub use sample::{grid, sample_map};

use std::fmt;

use crate::collections::FxIndexMap;
use crate::errors::GraphError;
use crate::geometry::Point;
use crate::graph_algos::RunStatus;


/// Stable index of a location, assigned in insertion order
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocationId(usize);

impl LocationId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}


/// Stable index of a connection, assigned in insertion order
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConnectionId(usize);

impl ConnectionId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}


/// Selection role of a location, at most one holder each
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Start,
    End,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Start => "start",
            Role::End => "end",
        })
    }
}


/// Outcome of a click-style [`Graph::select`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Assigned(Role),
    Blocked,
    Unblocked,
}


/// Static undirected graph of locations joined by Euclidean-weighted connections
/// Structure is append-only; run state, roles and obstacles change after construction
#[derive(Clone, Debug, Default)]
pub struct Graph {
    locations: Vec<Location>,
    connections: Vec<Connection>,
    pairs: FxIndexMap<(LocationId, LocationId), ConnectionId>, // key is (lower id, higher id)
    start: Option<LocationId>,
    end: Option<LocationId>,
    status: RunStatus,
}

impl Graph {

    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from fixed positions and index pairs into that position list
    pub fn from_layout<P, IP, IC>(positions: IP, pairs: IC) -> Result<Self, GraphError>
    where
        P: Into<Point>,
        IP: IntoIterator<Item = P>,
        IC: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::new();
        for position in positions {
            graph.add_location(position)?;
        }
        for (a, b) in pairs {
            graph.add_connection(LocationId::new(a), LocationId::new(b))?;
        }
        Ok(graph)
    }

    /// Append a location with unreached run state
    pub fn add_location(&mut self, position: impl Into<Point>) -> Result<LocationId, GraphError> {
        let position = position.into();
        position.validate()?;

        let id = LocationId::new(self.locations.len());
        self.locations.push(Location::new(id, position));
        Ok(id)
    }

    /// Connect two locations, weighted by the distance between their positions
    pub fn add_connection(&mut self, a: LocationId, b: LocationId) -> Result<ConnectionId, GraphError> {
        self.check_pair(a, b)?;
        let weight = self.locations[a.0].position().distance(&self.locations[b.0].position());
        self.insert_connection(a, b, weight)
    }

    /// Connect two locations with an explicit weight instead of their distance
    pub fn add_weighted_connection(&mut self, a: LocationId, b: LocationId, weight: f64) -> Result<ConnectionId, GraphError> {
        self.check_pair(a, b)?;
        self.insert_connection(a, b, weight)
    }

    fn check_pair(&self, a: LocationId, b: LocationId) -> Result<(), GraphError> {
        self.check(a)?;
        self.check(b)?;
        if a == b {
            log::warn!("rejected self loop on location {a}");
            return Err(GraphError::SelfLoop(a));
        }
        if self.pairs.contains_key(&pair_key(a, b)) {
            log::warn!("rejected duplicate connection {a} - {b}");
            return Err(GraphError::DuplicateConnection(a, b));
        }
        Ok(())
    }

    fn insert_connection(&mut self, a: LocationId, b: LocationId, weight: f64) -> Result<ConnectionId, GraphError> {
        // Finite positions can still overflow to an infinite distance
        if !(weight.is_finite() && weight >= 0.0) {
            return Err(GraphError::InvalidWeight(weight));
        }

        let id = ConnectionId::new(self.connections.len());
        self.connections.push(Connection::new(id, a, b, weight));
        self.pairs.insert(pair_key(a, b), id);
        self.locations[a.0].attach(id);
        self.locations[b.0].attach(id);
        Ok(id)
    }

    fn check(&self, id: LocationId) -> Result<(), GraphError> {
        if id.0 < self.locations.len() {
            Ok(())
        } else {
            Err(GraphError::InvalidReference(id))
        }
    }

    pub fn contains(&self, id: LocationId) -> bool {
        id.0 < self.locations.len()
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.0)
    }

    pub fn connection(&self, id: ConnectionId) -> Option<&Connection> {
        self.connections.get(id.0)
    }

    pub fn locations(&self) -> impl ExactSizeIterator<Item = &Location> {
        self.locations.iter()
    }

    pub fn connections(&self) -> impl ExactSizeIterator<Item = &Connection> {
        self.connections.iter()
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Connection joining `a` and `b`, in either order
    pub fn connection_between(&self, a: LocationId, b: LocationId) -> Option<ConnectionId> {
        self.pairs.get(&pair_key(a, b)).copied()
    }

    /// Neighbors of a location with the weight of the joining connection
    pub fn neighbors_of(&self, id: LocationId) -> Result<impl Iterator<Item = (LocationId, f64)> + '_, GraphError> {
        self.check(id)?;
        Ok(self.incident(id).map(|(neighbor, _, weight)| (neighbor, weight)))
    }

    /// (neighbor, connection, weight) for every incident connection, id must exist
    pub(crate) fn incident(&self, id: LocationId) -> impl Iterator<Item = (LocationId, ConnectionId, f64)> + '_ {
        self.locations[id.0].connections().filter_map(move |cid| {
            let conn = &self.connections[cid.0];
            conn.other(id).map(|neighbor| (neighbor, cid, conn.weight()))
        })
    }

    /// Assign a role, rejecting a second holder, start == end or a blocked location
    pub fn set_role(&mut self, id: LocationId, role: Role) -> Result<(), GraphError> {
        self.check(id)?;
        if self.locations[id.0].is_blocked() {
            log::warn!("location {id} is blocked, cannot be {role}");
            return Err(GraphError::Blocked(id));
        }

        let (holder, opposite) = match role {
            Role::Start => (self.start, self.end),
            Role::End => (self.end, self.start),
        };
        if opposite == Some(id) {
            log::warn!("location {id} already holds the other role, cannot be {role} too");
            return Err(GraphError::SelfAssignment(id));
        }
        if let Some(holder) = holder.filter(|&holder| holder != id) {
            log::warn!("{role} role already held by location {holder}");
            return Err(GraphError::RoleConflict { role, holder });
        }

        match role {
            Role::Start => self.start = Some(id),
            Role::End => self.end = Some(id),
        }
        self.locations[id.0].set_role(Some(role));
        log::debug!("location {id} selected as {role}");
        Ok(())
    }

    /// Click-style selection: start first, then end, then toggle obstacles
    pub fn select(&mut self, id: LocationId) -> Result<Selection, GraphError> {
        let role = match (self.start, self.end) {
            (None, _) => Role::Start,
            (Some(_), None) => Role::End,
            (Some(_), Some(_)) => {
                self.check(id)?;
                let blocked = !self.locations[id.0].is_blocked();
                self.set_blocked(id, blocked)?;
                return Ok(if blocked { Selection::Blocked } else { Selection::Unblocked });
            }
        };
        self.set_role(id, role)?;
        Ok(Selection::Assigned(role))
    }

    /// Mark a location as an obstacle the search never enters
    /// Only allowed while idle, role holders cannot be blocked
    pub fn set_blocked(&mut self, id: LocationId, blocked: bool) -> Result<(), GraphError> {
        self.check(id)?;
        if self.status != RunStatus::Idle {
            return Err(GraphError::NotIdle);
        }
        if blocked && self.locations[id.0].role().is_some() {
            log::warn!("location {id} holds a role, cannot block it");
            return Err(GraphError::RoleHolder(id));
        }
        self.locations[id.0].set_blocked(blocked);
        log::debug!("location {id} blocked: {blocked}");
        Ok(())
    }

    /// Drop whatever role the location holds and unblock it, returns the dropped role
    pub fn clear_role(&mut self, id: LocationId) -> Result<Option<Role>, GraphError> {
        self.check(id)?;
        if self.locations[id.0].is_blocked() {
            self.set_blocked(id, false)?;
        }
        let role = self.locations[id.0].role();
        match role {
            Some(Role::Start) => self.start = None,
            Some(Role::End) => self.end = None,
            None => {}
        }
        self.locations[id.0].set_role(None);
        Ok(role)
    }

    /// Blocked locations in id order
    pub fn blocked(&self) -> impl Iterator<Item = LocationId> + '_ {
        self.locations.iter().filter(|l| l.is_blocked()).map(Location::id)
    }

    pub fn start(&self) -> Option<LocationId> {
        self.start
    }

    pub fn end(&self) -> Option<LocationId> {
        self.end
    }

    /// (start, end) once both roles are assigned
    pub fn selection(&self) -> Option<(LocationId, LocationId)> {
        self.start.zip(self.end)
    }

    pub fn run_status(&self) -> RunStatus {
        self.status
    }

    /// Reset distances, predecessors and visited flags, keeping the selected roles
    pub fn clear_run_state(&mut self) {
        for location in &mut self.locations {
            location.clear_run_state();
        }
        self.status = RunStatus::Idle;
    }

    /// Full reset: run state, both roles and every obstacle
    pub fn reset_run_state(&mut self) {
        self.clear_run_state();
        for location in &mut self.locations {
            location.set_role(None);
            location.set_blocked(false);
        }
        self.start = None;
        self.end = None;
        log::info!("graph reset, {} locations unreached", self.locations.len());
    }

    pub(crate) fn has_run_state(&self) -> bool {
        self.status != RunStatus::Idle || self.locations.iter().any(Location::has_run_state)
    }

    pub(crate) fn location_mut(&mut self, id: LocationId) -> &mut Location {
        &mut self.locations[id.0]
    }

    pub(crate) fn set_status(&mut self, status: RunStatus) {
        self.status = status;
    }
}

fn pair_key(a: LocationId, b: LocationId) -> (LocationId, LocationId) {
    if a <= b { (a, b) } else { (b, a) }
}
