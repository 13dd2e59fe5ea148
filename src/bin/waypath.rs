//! Replays a Dijkstra search over the sample map in the terminal.

use std::time::Duration;

use clap::Parser;
use env_logger::Env;
use log::LevelFilter;
use waypath::{
    LocationId, PacedExt, PacingConfig, Role, RunStatus, VisitEvent, dijkstra_selected, sample_map,
    shortest_path,
};

#[derive(Parser)]
#[command(name = "waypath")]
#[command(author, version, about = "Step through a shortest path search on the sample map")]
struct Cli {
    /// Start location id (0-8)
    #[arg(short, long, default_value_t = 0)]
    start: usize,

    /// End location id (0-8)
    #[arg(short, long, default_value_t = 6)]
    end: usize,

    /// Location id to block as an obstacle, repeatable
    #[arg(short, long = "wall")]
    walls: Vec<usize>,

    /// Pause between steps in milliseconds
    #[arg(short, long, default_value_t = 100)]
    delay_ms: u64,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Explicit `-v` flags override RUST_LOG, none keeps it
fn verbosity_level(verbose: u8) -> Option<LevelFilter> {
    match verbose {
        0 => None,
        1 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    if let Some(level) = verbosity_level(cli.verbose) {
        logger.filter_level(level);
    }
    logger.init();

    let mut graph = sample_map()?;
    let (start, end) = (LocationId::new(cli.start), LocationId::new(cli.end));
    graph.set_role(start, Role::Start)?;
    graph.set_role(end, Role::End)?;
    for wall in &cli.walls {
        graph.set_blocked(LocationId::new(*wall), true)?;
    }

    let pacing = PacingConfig::new(Duration::from_millis(cli.delay_ms));
    for event in dijkstra_selected(&mut graph)?.paced(pacing) {
        match event {
            VisitEvent::Visited { location, distance } => {
                println!("visited  {:>2}  {:>8.1}", location.index(), distance);
            }
            VisitEvent::Reached { location, distance } => {
                println!("reached  {:>2}  {:>8.1}", location.index(), distance);
            }
            VisitEvent::Unreachable => {
                println!("no route from {start} to {end}");
            }
        }
    }

    if graph.run_status() == RunStatus::Reached {
        let route = shortest_path(&graph, end)?;
        let stops: Vec<String> = route.locations().iter().map(ToString::to_string).collect();
        println!(
            "route    {}  ({} hops, {:.1})",
            stops.join(" -> "),
            route.hop_count(),
            route.distance()
        );
    }

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_verbose_flag_leaves_rust_log_in_charge() {
        assert_eq!(verbosity_level(0), None);
        assert_eq!(verbosity_level(1), Some(LevelFilter::Debug));
        assert_eq!(verbosity_level(3), Some(LevelFilter::Trace));
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["waypath"]);
        assert_eq!((cli.start, cli.end, cli.delay_ms, cli.verbose), (0, 6, 100, 0));

        assert!(cli.walls.is_empty());

        let cli = Cli::parse_from(["waypath", "-s", "8", "-e", "5", "-d", "0", "-w", "1", "--wall", "7", "-vv"]);
        assert_eq!((cli.start, cli.end, cli.delay_ms, cli.verbose), (8, 5, 0, 2));
        assert_eq!(cli.walls, vec![1, 7]);
    }
}
