//! CLI entry point for the BSP dungeon generator

use bspdungeon::io::cli::{Cli, DungeonRunner};
use bspdungeon::io::logging::{default_level, init_tracing};
use clap::Parser;

fn main() -> bspdungeon::Result<()> {
    let cli = Cli::parse();
    init_tracing(default_level(cli.quiet))?;
    let mut runner = DungeonRunner::new(cli);
    runner.process()
}
