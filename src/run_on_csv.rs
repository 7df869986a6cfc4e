use anyhow::{Context, Result};
use carpool_route::{input, plan_route, road::max_location, RouteError};
use clap::Parser;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "bench")]
#[command(about = "Time repeated carpool route queries over a road CSV.", long_about = None)]
struct Cli {
    /// Path to the road CSV (from,to,solo,carpool with a header row)
    #[arg(short, long)]
    csv: String,

    /// Number of runs. Run i routes from location i to location (L - 1 - i), wrapping around L locations.
    #[arg(short, long)]
    num_runs: usize,

    /// Locations with a passenger waiting, comma separated
    #[arg(short, long, value_delimiter = ',')]
    passengers: Vec<usize>,
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let roads = input::read_roads(&cli.csv).with_context(|| format!("reading {}", &cli.csv))?;
    let total_locations = max_location(&roads).map_or(0, |max| max + 1);
    anyhow::ensure!(total_locations > 0, "{} contains no roads", &cli.csv);

    let mut duration_millis = Vec::new();
    let mut unreachable = 0;
    for run in 0..cli.num_runs {
        let start = run % total_locations;
        let end = total_locations - 1 - start;
        let now = Instant::now();
        match plan_route(start, end, &cli.passengers, &roads) {
            Ok(_) => duration_millis.push(now.elapsed().as_secs_f64() * 1000.0),
            Err(RouteError::NoRoute { .. }) => unreachable += 1,
            Err(err) => return Err(err).with_context(|| format!("routing {} -> {}", start, end)),
        }
    }
    println!("{:?}", duration_millis);
    if unreachable > 0 {
        println!("Skipped {} unreachable pairs", unreachable);
    }

    Ok(())
}
