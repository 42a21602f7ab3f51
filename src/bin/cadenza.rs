//! Cadenza CLI binary.

use clap::Parser;
use cadenza::cli::{args::CadenzaArgs, commands::execute_command};
use std::process;

fn main() {
    // Parse command line arguments using clap
    let args = CadenzaArgs::parse();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
