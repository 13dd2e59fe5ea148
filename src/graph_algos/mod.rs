
pub mod dijkstra;
mod events;
mod shortest_path;

pub use dijkstra::{dijkstra, dijkstra_selected, VisitationEvents};
pub use events::{RunStatus, VisitEvent};
pub use shortest_path::{shortest_path, Route};
