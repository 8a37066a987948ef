// Shared plumbing for the tex2yaml and yaml2tex binaries.
//
// Each binary is one conversion direction. The library side (cvtex-babel) never touches the
// filesystem, so reading the input, picking the output path, writing it and mapping failures
// to exit codes all live here.
//
// Usage:
//  tex2yaml <input.tex> [--output <file>] [--config <file>] [-v]
//  yaml2tex <input.yaml> [--output <file>] [--config <file>] [-v]
//
// Configuration is layered: embedded defaults, then ./cvtex.toml if present, then --config.

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use cvtex_babel::{ConversionRules, FormatError, FormatRegistry};
use cvtex_config::{CvtexConfig, Loader, LOCAL_CONFIG_FILE};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Printed after a YAML syntax error, in place of a bare parser message.
pub const YAML_REMEDIATION: &str = "\
The YAML file contains syntax errors. Common issues:
  - Unquoted strings with colons (:) - these need to be in quotes
  - Unquoted strings with special characters

To fix: Either manually quote problematic values or regenerate the YAML
from the original .tex file with tex2yaml.";

/// One conversion direction, i.e. one binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    TexToYaml,
    YamlToTex,
}

impl Direction {
    pub fn bin_name(&self) -> &'static str {
        match self {
            Direction::TexToYaml => "tex2yaml",
            Direction::YamlToTex => "yaml2tex",
        }
    }

    /// Registry names of the (source, target) formats.
    pub fn formats(&self) -> (&'static str, &'static str) {
        match self {
            Direction::TexToYaml => ("latex", "yaml"),
            Direction::YamlToTex => ("yaml", "latex"),
        }
    }

    /// Target format as shown in the confirmation line.
    pub fn target_label(&self) -> &'static str {
        match self {
            Direction::TexToYaml => "YAML",
            Direction::YamlToTex => "LaTeX",
        }
    }

    fn output_extension<'c>(&self, config: &'c CvtexConfig) -> &'c str {
        match self {
            Direction::TexToYaml => &config.output.yaml_extension,
            Direction::YamlToTex => &config.output.tex_extension,
        }
    }
}

/// Everything that can stop a conversion run.
#[derive(Debug)]
pub enum CliError {
    Config(String),
    Read { path: PathBuf, source: std::io::Error },
    Write { path: PathBuf, source: std::io::Error },
    Conversion(FormatError),
}

impl CliError {
    /// YAML syntax errors exit with 2, everything else with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Conversion(FormatError::YamlSyntax(_)) => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(msg) => write!(f, "Failed to load configuration: {msg}"),
            CliError::Read { path, source } => {
                write!(f, "Error reading file '{}': {source}", path.display())
            }
            CliError::Write { path, source } => {
                write!(f, "Error writing file '{}': {source}", path.display())
            }
            CliError::Conversion(FormatError::YamlSyntax(msg)) => {
                write!(f, "Error parsing YAML file: {msg}\n\n{YAML_REMEDIATION}")
            }
            CliError::Conversion(err) => write!(f, "Error: {err}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<FormatError> for CliError {
    fn from(err: FormatError) -> Self {
        CliError::Conversion(err)
    }
}

pub fn build_cli(direction: Direction) -> Command {
    let (about, input_help) = match direction {
        Direction::TexToYaml => (
            "Convert a LaTeX CV into structured YAML",
            "Path to the .tex file",
        ),
        Direction::YamlToTex => (
            "Convert structured YAML back into a LaTeX CV",
            "Path to the .yaml file",
        ),
    };

    Command::new(direction.bin_name())
        .version(env!("CARGO_PKG_VERSION"))
        .about(about)
        .long_about(format!(
            "{about}.\n\n\
            The output is written next to the input with the same stem, unless\n\
            --output is given. Nothing is written when the conversion fails.\n\n\
            Configuration is read from the built-in defaults, then ./{LOCAL_CONFIG_FILE}\n\
            if present, then the file passed with --config."
        ))
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help(input_help)
                .required(true)
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("PATH")
                .help("Output file path (defaults to the sibling file)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a cvtex.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log each parsed line and entry (debug level)")
                .action(ArgAction::SetTrue),
        )
}

pub fn load_cli_config(explicit_path: Option<&str>) -> Result<CvtexConfig, CliError> {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().map_err(|err| CliError::Config(err.to_string()))
}

/// RUST_LOG wins over the configured level; `-v` raises the default to debug.
pub fn init_logging(config: &CvtexConfig, verbose: bool) {
    let level = if verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .try_init();
}

/// `cv.tex` → `cv.yaml`, keeping the directory and stem.
pub fn sibling_path(input: &Path, extension: &str) -> PathBuf {
    input.with_extension(extension)
}

/// The format an input's extension points at, when it differs from `expected`.
pub fn mismatched_input_format(
    registry: &FormatRegistry,
    input: &Path,
    expected: &str,
) -> Option<String> {
    let detected = registry.detect_format_from_filename(&input.to_string_lossy())?;
    (detected != expected).then_some(detected)
}

/// Read, convert and write one file. Returns the path written.
pub fn convert_file(
    direction: Direction,
    input: &Path,
    output: Option<&Path>,
    config: &CvtexConfig,
) -> Result<PathBuf, CliError> {
    let rules = ConversionRules::from(&config.conversion);
    let registry = FormatRegistry::with_rules(rules);
    let (from, to) = direction.formats();
    if let Some(detected) = mismatched_input_format(&registry, input, from) {
        log::warn!(
            "{} has a {detected} extension; reading it as {from}",
            input.display()
        );
    }

    let source = fs::read_to_string(input).map_err(|source| CliError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    log::debug!("parsing {} as {from}", input.display());
    let doc = registry.parse(&source, from)?;
    log::debug!("read {} sections", doc.sections.len());
    let rendered = registry.serialize(&doc, to)?;

    let target = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| sibling_path(input, direction.output_extension(config)));
    if target == input {
        log::warn!("overwriting the input file {}", input.display());
    }
    fs::write(&target, rendered).map_err(|source| CliError::Write {
        path: target.clone(),
        source,
    })?;
    Ok(target)
}

/// Run a parsed command line. Returns the path written.
pub fn run(direction: Direction, matches: &ArgMatches) -> Result<PathBuf, CliError> {
    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()))?;
    init_logging(&config, matches.get_flag("verbose"));

    let input = matches
        .get_one::<String>("input")
        .map(PathBuf::from)
        .ok_or_else(|| CliError::Config("missing input path".to_string()))?;
    let output = matches.get_one::<String>("output").map(PathBuf::from);

    convert_file(direction, &input, output.as_deref(), &config)
}

/// Entry point shared by both binaries.
pub fn main_for(direction: Direction) {
    let matches = build_cli(direction).get_matches();

    match run(direction, &matches) {
        Ok(_) => {
            let input = matches
                .get_one::<String>("input")
                .map(String::as_str)
                .unwrap_or_default();
            println!("Converted {input} to {} format.", direction.target_label());
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(err.exit_code());
        }
    }
}
