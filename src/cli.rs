// cli.rs - Command-line interface configuration
use clap::Parser;

pub const DEFAULT_WINDOW_WIDTH: u32 = 1280;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 800;

#[derive(Parser, Debug, Clone)]
#[command(name = "my-mechanic")]
#[command(about = "MY MECHANIC vehicle service showcase", long_about = None)]
pub struct Cli {
    /// Start without the decorative 3D background
    #[arg(long = "no-scene", default_value = "false")]
    pub no_scene: bool,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = DEFAULT_WINDOW_WIDTH)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = DEFAULT_WINDOW_HEIGHT)]
    pub height: u32,

    /// Seed for the particle field (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the service catalog as JSON and exit
    #[arg(long = "print-catalog", default_value = "false")]
    pub print_catalog: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_scene() {
        let cli = Cli::parse_from(["my-mechanic"]);
        assert!(!cli.no_scene);
        assert_eq!(cli.width, DEFAULT_WINDOW_WIDTH);
        assert_eq!(cli.height, DEFAULT_WINDOW_HEIGHT);
        assert_eq!(cli.seed, None);
        assert!(!cli.print_catalog);
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from([
            "my-mechanic",
            "--no-scene",
            "--width",
            "640",
            "--height",
            "480",
            "--seed",
            "42",
        ]);
        assert!(cli.no_scene);
        assert_eq!((cli.width, cli.height), (640, 480));
        assert_eq!(cli.seed, Some(42));
    }
}
