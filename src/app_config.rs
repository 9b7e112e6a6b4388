//! Application configuration loading for CLI defaults.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use citation_core::CitationStyle;

/// Directory name used under the user config home.
const CONFIG_DIR_NAME: &str = "citation-engine";

/// File configuration for `cite` defaults.
#[derive(Debug, Clone, Default)]
pub struct FileConfig {
    /// Default citation style.
    pub style: Option<CitationStyle>,
    /// Default verbosity mode.
    pub verbosity: Option<VerbositySetting>,
    /// Default output format for listing commands.
    pub output: Option<OutputFormat>,
    /// Treat invalid records as errors instead of warnings.
    pub strict: Option<bool>,
}

/// Supported config verbosity labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbositySetting {
    Default,
    Verbose,
    Quiet,
    Debug,
}

impl VerbositySetting {
    /// Returns the stable string label for display output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Verbose => "verbose",
            Self::Quiet => "quiet",
            Self::Debug => "debug",
        }
    }

    /// Returns the tracing filter level this mode maps to.
    #[must_use]
    pub fn filter_level(self) -> &'static str {
        match self {
            Self::Default => "info",
            Self::Verbose => "debug",
            Self::Quiet => "error",
            Self::Debug => "trace",
        }
    }
}

/// Resolves the verbosity mode from CLI flags, then file config.
#[must_use]
pub fn effective_verbosity(
    verbose: u8,
    quiet: bool,
    configured: Option<VerbositySetting>,
) -> VerbositySetting {
    if quiet {
        return VerbositySetting::Quiet;
    }
    match verbose {
        0 => configured.unwrap_or(VerbositySetting::Default),
        1 => VerbositySetting::Verbose,
        _ => VerbositySetting::Debug,
    }
}

/// Output format for commands that print lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Returns the stable string label for display output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

/// Loaded config metadata.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// Resolved config path if a base directory is known.
    pub path: Option<PathBuf>,
    /// Parsed file config when a config file exists and was valid.
    pub config: Option<FileConfig>,
    /// Indicates whether configuration was loaded from disk.
    pub loaded_from_file: bool,
}

impl LoadedConfig {
    /// Returns the file config, or an empty one when nothing was loaded.
    #[must_use]
    pub fn file_config(&self) -> FileConfig {
        self.config.clone().unwrap_or_default()
    }
}

/// Settings after applying file defaults under CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveSettings {
    pub style: CitationStyle,
    pub output: OutputFormat,
    pub strict: bool,
}

impl EffectiveSettings {
    /// Resolves settings. A CLI value wins over the file value, which wins
    /// over the built-in default.
    ///
    /// A style given on the command line is resolved leniently.
    #[must_use]
    pub fn resolve(
        config: &FileConfig,
        cli_style: Option<&str>,
        cli_json: bool,
        cli_strict: bool,
    ) -> Self {
        let style = cli_style.map_or_else(
            || config.style.unwrap_or_default(),
            CitationStyle::from_tag_lenient,
        );
        let output = if cli_json {
            OutputFormat::Json
        } else {
            config.output.unwrap_or_default()
        };

        Self {
            style,
            output,
            strict: cli_strict || config.strict.unwrap_or(false),
        }
    }
}

/// Resolves default config path.
///
/// Priority:
/// 1. `$XDG_CONFIG_HOME/citation-engine/config.toml`
/// 2. `$HOME/.config/citation-engine/config.toml`
#[must_use]
pub fn resolve_default_config_path() -> Option<PathBuf> {
    if let Some(xdg_config_home) = env_var_non_empty_os("XDG_CONFIG_HOME") {
        return Some(
            PathBuf::from(xdg_config_home)
                .join(CONFIG_DIR_NAME)
                .join("config.toml"),
        );
    }

    let home = env_var_non_empty_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join(CONFIG_DIR_NAME)
            .join("config.toml"),
    )
}

fn env_var_non_empty_os(name: &str) -> Option<std::ffi::OsString> {
    let value = env::var_os(name)?;
    if value.is_empty() { None } else { Some(value) }
}

/// Loads config from default path if present.
pub fn load_default_file_config() -> Result<LoadedConfig> {
    let path = resolve_default_config_path();
    let Some(path_ref) = path.as_deref() else {
        return Ok(LoadedConfig {
            path,
            config: None,
            loaded_from_file: false,
        });
    };

    if !path_ref.exists() {
        return Ok(LoadedConfig {
            path,
            config: None,
            loaded_from_file: false,
        });
    }

    let config = load_file_config(path_ref)?;
    Ok(LoadedConfig {
        path,
        config: Some(config),
        loaded_from_file: true,
    })
}

fn load_file_config(path: &Path) -> Result<FileConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
    parse_config_str(&raw)
        .with_context(|| format!("Failed to parse config file '{}'", path.display()))
}

fn parse_config_str(raw: &str) -> Result<FileConfig> {
    let mut cfg = FileConfig::default();
    for (line_index, raw_line) in raw.lines().enumerate() {
        let line_number = line_index + 1;
        let line = strip_inline_comment(raw_line).trim();
        if line.is_empty() {
            continue;
        }

        let Some((raw_key, raw_value)) = line.split_once('=') else {
            bail!("Invalid config syntax on line {line_number}: expected key = value");
        };

        let key = raw_key.trim();
        let value = raw_value.trim();

        match key {
            "style" => {
                let parsed = parse_string_literal(value)
                    .with_context(|| format!("Invalid `style` value on line {line_number}"))?;
                let style = parsed.parse::<CitationStyle>().with_context(|| {
                    format!("Invalid `style` value '{parsed}' on line {line_number}")
                })?;
                cfg.style = Some(style);
            }
            "verbosity" => {
                let parsed = parse_string_literal(value)
                    .with_context(|| format!("Invalid `verbosity` value on line {line_number}"))?;
                cfg.verbosity = Some(parse_verbosity(&parsed).with_context(|| {
                    format!("Invalid `verbosity` value '{parsed}' on line {line_number}")
                })?);
            }
            "output" => {
                let parsed = parse_string_literal(value)
                    .with_context(|| format!("Invalid `output` value on line {line_number}"))?;
                cfg.output = Some(parse_output(&parsed).with_context(|| {
                    format!("Invalid `output` value '{parsed}' on line {line_number}")
                })?);
            }
            "strict" => {
                let parsed = parse_boolean(value)
                    .with_context(|| format!("Invalid `strict` value on line {line_number}"))?;
                cfg.strict = Some(parsed);
            }
            unknown => {
                bail!("Unknown configuration key: '{unknown}' on line {line_number}");
            }
        }
    }
    Ok(cfg)
}

fn strip_inline_comment(line: &str) -> &str {
    let mut in_string = false;
    for (index, ch) in line.char_indices() {
        match ch {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..index],
            _ => {}
        }
    }
    line
}

fn parse_string_literal(raw_value: &str) -> Result<String> {
    let Some(inner) = raw_value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    else {
        bail!("Expected double-quoted string");
    };
    Ok(inner.to_string())
}

fn parse_verbosity(value: &str) -> Result<VerbositySetting> {
    match value {
        "default" => Ok(VerbositySetting::Default),
        "verbose" => Ok(VerbositySetting::Verbose),
        "quiet" => Ok(VerbositySetting::Quiet),
        "debug" => Ok(VerbositySetting::Debug),
        _ => bail!("Expected one of: default, verbose, quiet, debug"),
    }
}

fn parse_output(value: &str) -> Result<OutputFormat> {
    match value {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        _ => bail!("Expected one of: text, json"),
    }
}

fn parse_boolean(raw_value: &str) -> Result<bool> {
    match raw_value.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => bail!("Expected 'true' or 'false'"),
    }
}
