//! Coverage Tour - Sweeping Every Cell of the Grid
//!
//! Runs a serpentine sweep that visits all 36 cells, then proves full
//! coverage with the grid's own verification check.
//!
//! # Running
//!
//! ```bash
//! cargo run --example coverage_tour -p explorar
//! ```

#![allow(clippy::unwrap_used)]

use explorar::{NullSink, Simulation};

const M5: &str = "MMMMM";

fn main() {
    println!("=== Explorar Coverage Tour ===\n");

    let line = format!("0 0 E|{M5}LML{M5}RMR{M5}LML{M5}RMR{M5}LML{M5}");
    println!("Script line: {line}\n");

    let mut sim = Simulation::default();
    let rover = sim.run_line(&line, &mut NullSink).unwrap();

    for grid_row in sim.grid().to_lines() {
        println!("{grid_row}");
    }

    println!("\nFinal position: {}", rover.position());
    println!(
        "Unvisited cells: {} of {}",
        sim.grid().unvisited_count(),
        sim.grid().bounds().cell_count()
    );

    sim.grid().must_be_fully_traversed().unwrap();
    println!("Every cell was visited.");
}
