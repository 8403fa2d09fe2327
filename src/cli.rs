use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "shotcut-gopro-proxies")]
#[command(about = "Link GoPro .LRV previews as Shotcut proxy files", long_about = None)]
pub struct Cli {
    /// Path to the Shotcut project directory (containing the .mlt file)
    #[arg(long)]
    pub project_path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_path_is_required() {
        assert!(Cli::try_parse_from(["shotcut-gopro-proxies"]).is_err());
    }

    #[test]
    fn test_project_path_parses() {
        let cli =
            Cli::try_parse_from(["shotcut-gopro-proxies", "--project-path", "/video/trip"])
                .unwrap();
        assert_eq!(cli.project_path, PathBuf::from("/video/trip"));
    }
}
