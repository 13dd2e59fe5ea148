use crate::graph::LocationId;


/// One observable step of a search
/// A run yields any number of `Visited` events and ends with exactly one
/// `Reached` or `Unreachable`
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VisitEvent {
    /// Location extracted with its final shortest distance
    Visited { location: LocationId, distance: f64 },
    /// End location extracted, a route exists
    /// Replaces `Visited` for the end location, no `Visited` precedes it
    Reached { location: LocationId, distance: f64 },
    /// Every reachable location was visited without meeting the end
    Unreachable,
}

impl VisitEvent {

    pub fn location(&self) -> Option<LocationId> {
        match self {
            VisitEvent::Visited { location, .. } | VisitEvent::Reached { location, .. } => Some(*location),
            VisitEvent::Unreachable => None,
        }
    }

    pub fn distance(&self) -> Option<f64> {
        match self {
            VisitEvent::Visited { distance, .. } | VisitEvent::Reached { distance, .. } => Some(*distance),
            VisitEvent::Unreachable => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, VisitEvent::Visited { .. })
    }
}


/// Search lifecycle tracked on the graph
/// Idle -> Running on start, Running -> Reached | Unreachable
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunStatus {
    #[default]
    Idle,
    Running,
    Reached,
    Unreachable,
}

impl RunStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunStatus::Reached | RunStatus::Unreachable)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_accessors() {
        let id = LocationId::new(3);
        let visited = VisitEvent::Visited { location: id, distance: 1.5 };
        let reached = VisitEvent::Reached { location: id, distance: 2.0 };

        assert_eq!(visited.location(), Some(id));
        assert_eq!(reached.distance(), Some(2.0));
        assert_eq!(VisitEvent::Unreachable.location(), None);
        assert!(!visited.is_terminal());
        assert!(reached.is_terminal());
        assert!(VisitEvent::Unreachable.is_terminal());
    }

    #[test]
    fn test_run_status_terminal() {
        assert!(!RunStatus::default().is_terminal());
        assert!(!RunStatus::Running.is_terminal());
        assert!(RunStatus::Reached.is_terminal());
        assert!(RunStatus::Unreachable.is_terminal());
    }
}
