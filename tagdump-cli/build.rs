use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the formats registered by FormatRegistry::with_defaults
// We need to duplicate this here since build scripts can't access the library crates
const INPUT_FORMATS: &[&str] = &["html", "xml"];
const OUTPUT_FORMATS: &[&str] = &["yaml", "json"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("tagdump")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Dump the element tree of an HTML or XML file as YAML")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Input file path")
                .required_unless_present("list-formats")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("explicit")
                .long("explicit")
                .help("Spell element names out as `_name` instead of using them as keys")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .help("Source format")
                .value_parser(clap::builder::PossibleValuesParser::new(INPUT_FORMATS)),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .help("Target format")
                .value_parser(clap::builder::PossibleValuesParser::new(OUTPUT_FORMATS)),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output file path")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a tagdump.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "tagdump", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "tagdump", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "tagdump", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
