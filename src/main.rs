use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::error;
use shotcut_gopro_proxies::cli::Cli;
use shotcut_gopro_proxies::component::ProxyLinker;
use std::process;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        error!("{e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let linker = ProxyLinker::new(&cli.project_path)?;
    linker.run()?;
    Ok(())
}
