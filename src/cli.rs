use clap::Parser;
use std::path::PathBuf;

/// Schema Playground host: serves the form-rendering UI and the sample
/// JSON-Schema catalog it previews.
#[derive(Parser, Debug, Clone)]
#[command(name = "formant", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "FORMANT_CONFIG", default_value = "formant.toml")]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "FORMANT_HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "FORMANT_PORT")]
    pub port: Option<u16>,

    /// Directory the sample schemas are loaded from
    #[arg(long, env = "FORMANT_SCHEMA_DIR")]
    pub schema_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["formant"]);
        assert_eq!(cli.config, PathBuf::from("formant.toml"));
        assert!(cli.host.is_none());
        assert!(cli.port.is_none());
        assert!(cli.schema_dir.is_none());
    }

    #[test]
    fn test_cli_with_args() {
        let cli = Cli::parse_from([
            "formant",
            "--config",
            "custom.toml",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--schema-dir",
            "fixtures/schemas",
        ]);
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert_eq!(cli.host, Some("0.0.0.0".to_string()));
        assert_eq!(cli.port, Some(8080));
        assert_eq!(cli.schema_dir, Some(PathBuf::from("fixtures/schemas")));
    }
}
