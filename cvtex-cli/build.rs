use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of build_cli from src/lib.rs
// We need to duplicate this here since build scripts can't access src/ modules
const BINARIES: &[(&str, &str, &str)] = &[
    (
        "tex2yaml",
        "Convert a LaTeX CV into structured YAML",
        "Path to the .tex file",
    ),
    (
        "yaml2tex",
        "Convert structured YAML back into a LaTeX CV",
        "Path to the .yaml file",
    ),
];

fn build_cli(name: &'static str, about: &'static str, input_help: &'static str) -> Command {
    Command::new(name)
        .version(env!("CARGO_PKG_VERSION"))
        .about(about)
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

fn main() -> Result<(), Error> {
    println!("cargo:rerun-if-changed=build.rs");

    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    for &(name, about, input_help) in BINARIES {
        let mut cmd = build_cli(name, about, input_help);

        generate_to(Bash, &mut cmd, name, &outdir)?;
        generate_to(Zsh, &mut cmd, name, &outdir)?;
        generate_to(Fish, &mut cmd, name, &outdir)?;
    }

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
