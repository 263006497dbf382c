// src/bin/cli.rs
use color_eyre::eyre::{eyre, Result};
use minalytics::{cli, log};

fn main() -> Result<()> {
    color_eyre::install()?;
    let _ = log::init();

    let (options, command) = cli::parse_args(std::env::args().skip(1)).map_err(|e| eyre!(e))?;
    let out = cli::run(&options, command).map_err(|e| eyre!(e))?;
    print!("{}", out);
    Ok(())
}
