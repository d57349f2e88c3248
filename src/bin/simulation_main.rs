// simulation_main.rs
use std::env;
use std::path::PathBuf;
use std::process;
use traffic_sim::monitoring::stats_log;
use traffic_sim::simulation_engine::simulation::{run_simulation, SimulationConfig};

const USAGE: &str = "usage: simulation_main [capacity] [ticks] \
[--name NAME] [--reversed] [--seed N] [--stats FILE] [--json]";

struct CliOptions {
    config: SimulationConfig,
    json: bool,
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut positional: Vec<i64> = Vec::new();
    let mut name = String::from("Main Street");
    let mut reverse_flow = false;
    let mut seed = None;
    let mut stats_path = None;
    let mut json = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--name" => {
                name = iter.next().ok_or("--name needs a value")?.clone();
            }
            "--reversed" => reverse_flow = true,
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                seed = Some(
                    value
                        .parse::<u64>()
                        .map_err(|_| format!("bad seed '{}'", value))?,
                );
            }
            "--stats" => {
                let value = iter.next().ok_or("--stats needs a value")?;
                stats_path = Some(PathBuf::from(value));
            }
            "--json" => json = true,
            other if other.starts_with("--") => {
                return Err(format!("unknown option '{}'", other));
            }
            other => {
                let value = other
                    .parse::<i64>()
                    .map_err(|_| format!("bad number '{}'", other))?;
                positional.push(value);
            }
        }
    }

    if positional.len() > 2 {
        return Err("too many positional arguments".to_string());
    }
    let capacity = positional.first().copied().unwrap_or(10);
    let ticks = match positional.get(1) {
        Some(&ticks) if ticks < 0 => return Err(format!("bad tick count '{}'", ticks)),
        Some(&ticks) => ticks as u64,
        None => SimulationConfig::default_ticks(capacity),
    };

    Ok(CliOptions {
        config: SimulationConfig {
            road_name: name,
            capacity,
            reverse_flow,
            ticks,
            seed,
            stats_path,
        },
        json,
    })
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };

    let summary = run_simulation(&options.config);

    if options.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("could not serialize summary: {}", e),
        }
    } else {
        println!(
            "{} finished after {} ticks: {} vehicles on the road \
({} cars, {} motorcycles), average occupancy {:.2}",
            summary.road_name,
            summary.ticks,
            summary.final_occupied,
            summary.final_cars,
            summary.final_motorcycles,
            summary.average_occupancy,
        );
    }

    if let Some(path) = &options.config.stats_path {
        match stats_log::read_tick_history(path) {
            Ok(history) => println!("{} records logged to {}", history.len(), path.display()),
            Err(e) => eprintln!("could not read back {}: {}", path.display(), e),
        }
    }
}
