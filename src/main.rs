use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use roamer::destination::METERS_PER_KILOMETER;
use roamer::prelude::*;
use serde::Serialize;
use tracing::{Level, info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Start latitude (degrees)
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    /// Start longitude (degrees)
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,

    /// Distance from the start, in --unit
    #[arg(long, default_value_t = 20.0)]
    radius: f64,

    /// Unit of --radius
    #[arg(long, value_enum, default_value_t = Unit::Km)]
    unit: Unit,

    /// Number of destinations to draw
    #[arg(long, default_value_t = 1)]
    count: u32,

    /// Fixed bearing in degrees from true north instead of a random one
    #[arg(long, allow_hyphen_values = true, conflicts_with = "count")]
    bearing: Option<f64>,

    /// Print one JSON object per destination
    #[arg(long)]
    json: bool,

    /// More logging, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Unit {
    Km,
    Mi,
}

impl From<Unit> for DistanceUnit {
    fn from(unit: Unit) -> Self {
        match unit {
            Unit::Km => DistanceUnit::Kilometers,
            Unit::Mi => DistanceUnit::Miles,
        }
    }
}

#[derive(Serialize)]
struct Output {
    start: GeoCoordinate,
    destination: GeoCoordinate,
    radius_km: f64,
    /// degrees from true north, drawn or given
    bearing: f64,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn effective_radius(radius: f64, unit: DistanceUnit) -> f64 {
    let requested = unit.to_kilometers(radius);
    let effective = effective_radius_km(requested);
    if effective != requested {
        warn!("Radius of {} {} is out of range, using {:.3} km", radius, unit, effective);
    }
    effective
}

/// Destination and the bearing in degrees that led there, drawing one when none is given.
fn next_destination<S: UniformSource>(
    generator: &mut DestinationGenerator<S>,
    start: GeoCoordinate,
    radius_km: f64,
    bearing: Option<f64>,
) -> Result<(GeoCoordinate, f64)> {
    let bearing = match bearing {
        Some(degrees) => degrees_to_radians(degrees),
        None => generator.draw_bearing().context("Failed to draw a random bearing")?,
    };
    let destination = start.project(generator.ellipsoid(), radius_km * METERS_PER_KILOMETER, bearing);
    Ok((destination, radians_to_degrees(bearing)))
}

fn print(output: &Output, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(output).context("Failed to serialize destination")?);
    } else {
        println!("{}", output.destination);
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(log_level(args.verbose))
        .with_writer(std::io::stderr)
        .init();

    let start = GeoCoordinate::try_new(args.lat, args.lon).context("Invalid start coordinate")?;
    let unit = DistanceUnit::from(args.unit);
    let radius_km = effective_radius(args.radius, unit);
    info!("Start {}, radius {:.3} km", start, radius_km);

    let mut generator = DestinationGenerator::wgs84();
    for _ in 0..args.count {
        let (destination, bearing) = next_destination(&mut generator, start, radius_km, args.bearing)?;

        print(
            &Output {
                start,
                destination,
                radius_km,
                bearing,
            },
            args.json,
        )?;
    }

    Ok(())
}
