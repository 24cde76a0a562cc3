use anyhow::Context;
use backdrop_cleaner::pipeline::remove_checkerboard_file;
use clap::Parser;
use cleanup_cli::CommonArgs;

/// Remove a baked-in checkerboard background from an image using flood fill.
#[derive(Parser)]
#[command(name = "remove_checkerboard")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.common.init_logging();

    let output = cli.common.output_path();
    let report = remove_checkerboard_file(&cli.common.input, &output, &cli.common.config())
        .with_context(|| format!("removing checkerboard from {}", cli.common.input.display()))?;

    if report.fill.seeded_corners == 0 {
        log::warn!("No corner matched the checkerboard; image was re-saved unchanged.");
    }
    Ok(())
}
