use crate::errors::PathPlannerError;
use crate::graph::{Graph, LocationId, Role};
use super::{RunStatus, VisitEvent};

use std::{collections::BinaryHeap, cmp::Ordering, iter::FusedIterator};



/// Start a stepwise Dijkstra search from `start` towards `end`
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Nothing is extracted until the returned stream is pulled. The graph must be
/// idle: run state from an earlier search has to be cleared first.
/// Assigned roles must agree with `start` and `end`, blocked locations are never entered.
pub fn dijkstra(graph: &mut Graph, start: LocationId, end: LocationId) -> Result<VisitationEvents<'_>, PathPlannerError> {

    for id in [start, end] {
        if !graph.contains(id) {
            return Err(PathPlannerError::InvalidReference(id));
        }
    }
    if start == end {
        return Err(PathPlannerError::SameStartEnd(start));
    }
    for (role, holder, requested) in [(Role::Start, graph.start(), start), (Role::End, graph.end(), end)] {
        if let Some(holder) = holder.filter(|&holder| holder != requested) {
            return Err(PathPlannerError::SelectionMismatch { role, holder, requested });
        }
    }
    for id in [start, end] {
        if graph.location(id).is_some_and(|l| l.is_blocked()) {
            return Err(PathPlannerError::Blocked(id));
        }
    }
    if graph.has_run_state() {
        return Err(PathPlannerError::StaleRunState);
    }
    // Weights are validated on insert, re-checked so a bad graph fails loudly here
    if let Some(conn) = graph.connections().find(|c| c.weight().is_nan() || c.weight() < 0.0) {
        return Err(PathPlannerError::NegativeWeight { connection: conn.id(), weight: conn.weight() });
    }

    log::info!("searching from {start} to {end} over {} locations", graph.location_count());

    graph.location_mut(start).mark_start();
    graph.set_status(RunStatus::Running);

    let mut frontier = BinaryHeap::new();
    frontier.push(Candidate { location: start, distance: 0.0 });

    Ok(VisitationEvents {
        graph,
        end,
        frontier,
        pending: None,
    })
}

/// Search between the locations currently holding the start and end roles
pub fn dijkstra_selected(graph: &mut Graph) -> Result<VisitationEvents<'_>, PathPlannerError> {
    let (start, end) = graph.selection().ok_or(PathPlannerError::MissingSelection)?;
    dijkstra(graph, start, end)
}


/// Lazy, finite event stream of a running search
/// Each call to `next` performs one extraction. Dropping the stream abandons the
/// run and leaves the graph `Running` until it is reset.
pub struct VisitationEvents<'g> {
    graph: &'g mut Graph,
    end: LocationId,
    frontier: BinaryHeap<Candidate>, // may hold stale entries, skipped on pop
    pending: Option<LocationId>, // visited, neighbors not yet relaxed
}

impl<'g> VisitationEvents<'g> {

    /// Read-only view of the graph mid-run, e.g. for rendering tentative distances
    pub fn graph(&self) -> &Graph {
        self.graph
    }

    pub fn status(&self) -> RunStatus {
        self.graph.run_status()
    }

    /// Drain the remaining events into a vector
    pub fn drain_all(self) -> Vec<VisitEvent> {
        self.collect()
    }

    /// Relax every unvisited, unblocked neighbor of `current`
    fn relax_neighbors(&mut self, current: LocationId) {
        let base = self.graph.location_mut(current).distance();

        let links: Vec<_> = self.graph.incident(current).collect();
        for (neighbor, via, weight) in links {
            let location = self.graph.location_mut(neighbor);
            if location.is_visited() || location.is_blocked() {
                continue;
            }
            let candidate = base + weight;
            if location.relax(candidate, current, via) {
                self.frontier.push(Candidate { location: neighbor, distance: candidate });
            }
        }
    }

    fn finish(&mut self, status: RunStatus) {
        self.frontier.clear();
        self.pending = None;
        self.graph.set_status(status);
    }
}

impl Iterator for VisitationEvents<'_> {
    type Item = VisitEvent;

    fn next(&mut self) -> Option<VisitEvent> {
        if self.graph.run_status() != RunStatus::Running {
            return None;
        }

        // Relaxation of the previous extraction happens only once the consumer asks for more
        if let Some(current) = self.pending.take() {
            self.relax_neighbors(current);
        }

        while let Some(Candidate { location, distance }) = self.frontier.pop() {
            let entry = self.graph.location_mut(location);

            // Skip entries superseded by a shorter path or already extracted
            if entry.is_visited() || distance > entry.distance() {
                continue;
            }
            entry.mark_visited();

            if location == self.end {
                log::info!("reached {location} at distance {distance}");
                self.finish(RunStatus::Reached);
                return Some(VisitEvent::Reached { location, distance });
            }

            log::debug!("visited {location} at distance {distance}");
            self.pending = Some(location);
            return Some(VisitEvent::Visited { location, distance });
        }

        log::info!("{} is unreachable", self.end);
        self.finish(RunStatus::Unreachable);
        Some(VisitEvent::Unreachable)
    }
}

impl FusedIterator for VisitationEvents<'_> {}


/// Frontier entry
/// Ordered so the max-heap pops the smallest distance first, then the lowest id
#[derive(Debug)]
struct Candidate {
    location: LocationId,
    distance: f64,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other.distance.total_cmp(&self.distance)
            .then_with(|| other.location.cmp(&self.location))
    }
}
impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Candidate {}
