use super::{ConnectionId, LocationId};


/// Undirected weighted edge between two distinct locations
/// The weight is fixed when the connection is built
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
    id: ConnectionId,
    a: LocationId,
    b: LocationId,
    weight: f64,
}

impl Connection {

    pub(crate) fn new(id: ConnectionId, a: LocationId, b: LocationId, weight: f64) -> Self {
        Self { id, a, b, weight }
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn endpoints(&self) -> (LocationId, LocationId) {
        (self.a, self.b)
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Endpoint opposite to `location`, None if `location` is not an endpoint
    pub fn other(&self, location: LocationId) -> Option<LocationId> {
        if location == self.a {
            Some(self.b)
        } else if location == self.b {
            Some(self.a)
        } else {
            None
        }
    }

    /// True if the connection joins `x` and `y`, in either order
    pub fn joins(&self, x: LocationId, y: LocationId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_is_undirected() {
        let (a, b, c) = (LocationId::new(0), LocationId::new(1), LocationId::new(2));
        let conn = Connection::new(ConnectionId::new(0), a, b, 2.0);

        assert_eq!(conn.other(a), Some(b));
        assert_eq!(conn.other(b), Some(a));
        assert_eq!(conn.other(c), None);
        assert!(conn.joins(a, b));
        assert!(conn.joins(b, a));
        assert!(!conn.joins(a, c));
    }
}
