use anyhow::Context;
use backdrop_cleaner::pipeline::remove_transparency_file;
use clap::Parser;
use cleanup_cli::CommonArgs;

/// Remove transparency from a PNG and replace it with a solid background.
#[derive(Parser)]
#[command(name = "remove_transparency")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.common.init_logging();

    let output = cli.common.output_path();
    remove_transparency_file(&cli.common.input, &output, &cli.common.config())
        .with_context(|| format!("removing transparency from {}", cli.common.input.display()))?;
    Ok(())
}
