// THEORY:
// Shared command-line surface for the cleanup binaries. Both tools take the same
// arguments: an input image, an optional output path (defaulting to the input,
// i.e. in-place), and an optional background color. The background default comes
// straight from the library's `DEFAULT_BACKGROUND`.

use backdrop_cleaner::pipeline::{CleanupConfig, DEFAULT_BACKGROUND, Pixel};
use clap::Args;
use std::path::PathBuf;

/// The image both tools were written for.
pub const DEFAULT_INPUT: &str = "public/hero/image.png";

#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Input image path
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Output image path (defaults to overwriting the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Background color as `r,g,b` or `#rrggbb`
    #[arg(short, long, default_value_t = DEFAULT_BACKGROUND)]
    pub background: Pixel,

    /// Only report warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl CommonArgs {
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| self.input.clone())
    }

    pub fn config(&self) -> CleanupConfig {
        CleanupConfig {
            background: self.background,
        }
    }

    /// Installs the `env_logger` backend. `RUST_LOG` overrides the default level.
    pub fn init_logging(&self) {
        let default_level = if self.quiet { "warn" } else { "info" };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
            .format_target(false)
            .format_timestamp(None)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        common: CommonArgs,
    }

    #[test]
    fn defaults_to_in_place_on_the_hero_image() {
        let cli = TestCli::try_parse_from(["tool"]).expect("defaults should parse");
        assert_eq!(cli.common.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(cli.common.output_path(), PathBuf::from(DEFAULT_INPUT));
        assert_eq!(cli.common.config().background, DEFAULT_BACKGROUND);
        assert!(!cli.common.quiet);
    }

    #[test]
    fn explicit_output_and_background() {
        let cli = TestCli::try_parse_from(["tool", "in.png", "-o", "out.png", "-b", "#ffffff"])
            .expect("arguments should parse");
        assert_eq!(cli.common.output_path(), PathBuf::from("out.png"));
        assert_eq!(cli.common.background, Pixel::new(255, 255, 255));
    }

    #[test]
    fn rejects_bad_background() {
        assert!(TestCli::try_parse_from(["tool", "--background", "12,300,4"]).is_err());
    }
}
