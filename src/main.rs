use anyhow::{Context, Result};
use carpool_route::{dijkstra, input, plan_route};
use clap::Parser;
use csv::Writer;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "route")]
#[command(about = "Find the fastest route through a road CSV, picking up a passenger when it pays off.", long_about = None)]
struct Cli {
    /// Path to the road CSV (from,to,solo,carpool with a header row)
    #[arg(short, long)]
    csv: String,

    /// Departure location
    #[arg(short, long)]
    start: usize,

    /// Destination location
    #[arg(short, long)]
    end: usize,

    /// Locations with a passenger waiting, comma separated
    #[arg(short, long, value_delimiter = ',')]
    passengers: Vec<usize>,

    /// Also report the best route without any pickup
    #[arg(long, default_value_t = false)]
    compare_solo: bool,

    /// Output CSV of legs (from, to, mode, time). If omitted, prints a summary to stdout.
    #[arg(short, long)]
    out: Option<String>,
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let roads = input::read_roads(&cli.csv).with_context(|| format!("reading {}", &cli.csv))?;
    println!("Loaded {} roads", roads.len());

    let now = Instant::now();
    let plan = plan_route(cli.start, cli.end, &cli.passengers, &roads)
        .with_context(|| format!("routing {} -> {}", cli.start, cli.end))?;
    println!("{} s", now.elapsed().as_secs_f64());

    if let Some(out_path) = &cli.out {
        let mut wtr =
            Writer::from_path(out_path).with_context(|| format!("creating CSV {}", out_path))?;
        wtr.write_record(["from", "to", "mode", "time"])?;
        for leg in &plan.legs {
            wtr.write_record(&[
                leg.from.to_string(),
                leg.to.to_string(),
                leg.mode.as_str().to_string(),
                format!("{:.6}", leg.time),
            ])?;
        }
        wtr.flush()?;
        println!("Wrote {} legs to {}", plan.legs.len(), out_path);
    } else {
        let stops: Vec<String> = plan.stops.iter().map(|s| s.to_string()).collect();
        println!("Route: {}", stops.join(" -> "));
        println!("Total time: {:.2}", plan.total_time);
        match plan.pickup {
            Some(location) => println!("Passenger picked up at {}", location),
            None => println!("No passenger picked up"),
        }
    }

    if cli.compare_solo {
        let dist = dijkstra::dijkstra_all(&dijkstra::solo_adjacency(&roads), cli.start);
        let solo = dist.get(cli.end).copied().unwrap_or(f64::INFINITY);
        println!("Solo-only time: {:.2}", solo);
        println!("Saved by carpooling: {:.2}", solo - plan.total_time);
    }

    Ok(())
}
