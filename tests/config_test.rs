use clap::Parser;
use formant::cli::Cli;
use formant::config::Settings;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_defaults_without_config_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let absent = temp_dir.path().join("absent.toml");

    let cli = Cli::parse_from(["formant", "--config", absent.to_str().unwrap()]);
    let settings = Settings::new_with_cli(&cli)?;

    assert_eq!(settings.server.host, "127.0.0.1");
    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.schemas.dir, PathBuf::from("schemas"));
    Ok(())
}

#[test]
fn test_config_file_is_loaded() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("formant.toml");

    let formant_toml = r#"
[server]
host = "0.0.0.0"
port = 4000

[schemas]
dir = "samples"
"#;
    fs::write(&config_path, formant_toml)?;

    let cli = Cli::parse_from(["formant", "--config", config_path.to_str().unwrap()]);
    let settings = Settings::new_with_cli(&cli)?;

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 4000);
    assert_eq!(settings.schemas.dir, PathBuf::from("samples"));
    Ok(())
}

#[test]
fn test_cli_overrides_config_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("formant.toml");

    fs::write(&config_path, "[server]\nhost = \"0.0.0.0\"\nport = 4000\n")?;

    let cli = Cli::parse_from([
        "formant",
        "--config",
        config_path.to_str().unwrap(),
        "--port",
        "5000",
        "--schema-dir",
        "elsewhere",
    ]);
    let settings = Settings::new_with_cli(&cli)?;

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 5000);
    assert_eq!(settings.schemas.dir, PathBuf::from("elsewhere"));
    Ok(())
}
