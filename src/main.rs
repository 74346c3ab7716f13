use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = prof_sounds::cli::Cli::parse();
    prof_sounds::run(cli)
}
