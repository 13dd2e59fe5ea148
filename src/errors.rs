use thiserror::Error;

use crate::graph::{ConnectionId, LocationId, Role};


#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("position ({x}, {y}) is not finite")]
    NonFinite { x: f64, y: f64 }, // NaN or infinite coordinate
}


/// Construction and selection failures on a [`Graph`](crate::graph::Graph)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("location {0} does not exist")]
    InvalidReference(LocationId),

    #[error("location {0} cannot be connected to itself")]
    SelfLoop(LocationId),

    #[error("locations {0} and {1} are already connected")]
    DuplicateConnection(LocationId, LocationId),

    #[error("connection weight {0} is not a finite non-negative number")]
    InvalidWeight(f64),

    #[error("{role} role is already held by location {holder}")]
    RoleConflict { role: Role, holder: LocationId },

    #[error("location {0} cannot be both start and end")]
    SelfAssignment(LocationId),

    #[error("location {0} is blocked and cannot hold a role")]
    Blocked(LocationId),

    #[error("location {0} holds a role and cannot be blocked")]
    RoleHolder(LocationId),

    #[error("obstacles can only change while no search is in progress")]
    NotIdle,

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}


#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathPlannerError {
    #[error("location {0} does not exist")]
    InvalidReference(LocationId),

    #[error("start and end are the same location {0}")]
    SameStartEnd(LocationId),

    #[error("location {0} is blocked")]
    Blocked(LocationId),

    #[error("{role} role is held by location {holder}, not {requested}")]
    SelectionMismatch { role: Role, holder: LocationId, requested: LocationId },

    #[error("connection {connection} has negative weight {weight}")]
    NegativeWeight { connection: ConnectionId, weight: f64 },

    #[error("graph holds state from a previous run, reset it first")]
    StaleRunState,

    #[error("start and end roles are not both assigned")]
    MissingSelection,

    #[error("no path found to the end location")]
    NoPathFound, // Run ended unreachable, was abandoned, or never ran
}
