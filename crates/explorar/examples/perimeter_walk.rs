//! Perimeter Walk - One Rover Around the Grid Edge
//!
//! Replays the classic border loop and prints the grid after the run.
//!
//! # Running
//!
//! ```bash
//! cargo run --example perimeter_walk -p explorar
//! ```

#![allow(clippy::unwrap_used)]

use explorar::{NullSink, Simulation};

fn main() {
    println!("=== Explorar Perimeter Walk ===\n");

    let mut sim = Simulation::default();
    let rover = sim
        .run_line("0 0 E|MMMMMLMMMMMLMMMMMLMMMMM", &mut NullSink)
        .unwrap();

    println!("Final position: {}", rover.position());
    println!("Final heading:  {}\n", rover.heading());

    for line in sim.grid().to_lines() {
        println!("{line}");
    }

    rover.must_be_at(0, 0).unwrap();
    println!("\nThe rover is back at the origin.");
}
