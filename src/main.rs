use qlearner::*;
use std::error::Error;
use std::{env, fs};

const DEMO: &str = include_str!("../demos/five_states.json");

/// Usage: `qlearner [problem.json]`. Without a file the bundled five state demo runs.
fn main() -> std::result::Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let json = match env::args().nth(1) {
        Some(file) => fs::read_to_string(file)?,
        None => DEMO.to_string(),
    };

    let problem = Problem::from_json(&json)?;
    let policy = problem.solve()?;
    println!("{policy}");

    Ok(())
}
