/*

    Load a cuboid layout from JSON and report
    bounds, boundary fits, rotation outcomes and
    intersecting pairs.

    @date: Nov, 2025
    @author: Bartu

*/

use std::{self, env};
use tracing::{info, warn, error};
use tracing_subscriber;

use cuboid::Rotation;
use cuboid::json_parser::parse_json;

fn main()  -> Result<(), Box<dyn std::error::Error>> {

    // Logging on console
    tracing_subscriber::fmt::init();

    // Parse args
    let args: Vec<String> = env::args().collect();
    let json_path: &String = if args.len() == 1 {
        warn!("No arguments were provided, setting default layout path...");
        &String::from("./inputs/layout.json")
    } else if args.len() == 2 {
        &args[1]
    } else {
        error!("Usage: {} <filename>.json", args[0]);
        std::process::exit(1);
    };

    // Parse JSON
    info!("Loading layout from {}...", json_path);
    let layout = parse_json(json_path).map_err(|e| {
        error!("Failed to load layout: {}", e);
        e
    })?;

    let boundary = layout.boundary;
    let cuboids = layout.build_cuboids();
    info!("Loaded {} cuboids, boundary at {}", cuboids.len(), boundary);

    for (id, c) in cuboids.iter() {
        info!("Cuboid {}: center {} mins {} maxes {}", id, c.center(), c.mins(), c.maxes());

        if !c.fits_within(boundary) {
            warn!("Cuboid {} crosses the boundary", id);
        }

        // Dry run on a copy, the layout itself is only reported
        match c.clone().rotate_x_within(boundary) {
            Rotation::Rotated => info!("Cuboid {} can rotate about x in place", id),
            Rotation::NeedsRelocation(center) => info!("Cuboid {} needs to move to {} before rotating about x", id, center),
        }
    }

    for (i, (id_a, a)) in cuboids.iter().enumerate() {
        for (id_b, b) in cuboids.iter().skip(i + 1) {
            if a.intersects(b) {
                warn!("Cuboids {} and {} intersect", id_a, id_b);
            }
        }
    }

    info!("Finished execution.");
    Ok(())
}
