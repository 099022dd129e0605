// Command-line interface for tagdump
//
// This binary reads an HTML or XML file and prints its element tree as nested
// YAML (or JSON) mappings. All the work is done by the tagdump-babel crate; this
// crate only deals with arguments, configuration, files and exit codes.
//
// Converting:
//
// The input format is auto-detected from the file extension, while being overwrittable by an
// explicit --from flag. The output format comes from the configuration (yaml by default) and
// can be overwritten with --to.
// Usage:
//  tagdump <input> [--explicit] [--from <format>] [--to <format>] [--output <file>]
//  tagdump --list-formats
//
// Extra Parameters:
//
// Settings can also be passed using --extra-<parameter-name> <value>.
// Known settings (mode, traversal, explicit) override the configuration; anything else is
// handed to the input format, which rejects parameters it does not understand.
// Example:
//  tagdump snippet.html --extra-mode fragment --extra-traversal iterative

use clap::{Arg, ArgAction, Command, ValueHint};
use std::collections::HashMap;
use std::fs;
use tagdump_babel::formats::HtmlMode;
use tagdump_babel::{convert, FormatRegistry};
use tagdump_config::{HtmlModeConfig, Loader, TagdumpConfig, TraversalConfig};

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"));

        if let Some(key) = key {
            match args.get(i + 1).filter(|next| !next.starts_with('-')) {
                Some(value) => {
                    extra_params.insert(key.to_string(), value.clone());
                    i += 2;
                }
                None => {
                    extra_params.insert(key.to_string(), "true".to_string());
                    i += 1;
                }
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("tagdump")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Dump the element tree of an HTML or XML file as YAML")
        .long_about(
            "tagdump walks the element tree of an HTML or XML document and prints it as\n\
            nested mappings, one per element, with its text, attributes and children.\n\n\
            Output shapes:\n  \
            - shorthand (default): {<name>: {text, attribs, subs}}\n  \
            - explicit:            {_name, attribs, subs}\n\n\
            Extra Parameters:\n  \
            --extra-mode <source|document|fragment> How HTML input is read\n  \
            --extra-traversal <recursive|iterative> Walk implementation\n\n\
            Examples:\n  \
            tagdump page.html                       # YAML to stdout\n  \
            tagdump page.html --explicit            # Explicit shape\n  \
            tagdump feed.xml --to json -o feed.json # JSON to a file\n  \
            tagdump snippet.html --extra-mode fragment",
        )
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
                .help("Source format (auto-detected from file extension if not specified)")
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .help("Target format (defaults to the configured output format)")
                .long_help(
                    "Target format to convert to.\n\n\
                    Available formats: yaml, json\n\
                    Use the format name, not the file extension.",
                )
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output file path (defaults to stdout)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a tagdump.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let matches = build_cli()
        .try_get_matches_from(&cleaned_args)
        .unwrap_or_else(|e| e.exit());

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    if matches.get_flag("explicit") {
        config.convert.explicit = true;
    }

    let Some(input) = matches.get_one::<String>("input") else {
        eprintln!("Error: no input file given. Use --help for usage information.");
        std::process::exit(1);
    };

    let registry = FormatRegistry::default();
    let from = match matches.get_one::<String>("from") {
        Some(from) => from.to_string(),
        None => match registry.detect_format_from_filename(input) {
            Some(detected) => detected,
            None => {
                eprintln!("Error: Could not detect format from filename '{input}'");
                eprintln!("Please specify --from explicitly");
                std::process::exit(1);
            }
        },
    };
    let to = matches
        .get_one::<String>("to")
        .cloned()
        .unwrap_or_else(|| config.output.format.clone());
    let output = matches.get_one::<String>("output").map(|s| s.as_str());

    handle_convert_command(&registry, input, &from, &to, output, &extra_params, &config);
}

/// Handle the convert command
fn handle_convert_command(
    registry: &FormatRegistry,
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &TagdumpConfig,
) {
    // Validate formats exist
    for format in [from, to] {
        if let Err(e) = registry.get(format) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let parse_options = parse_params_from_config(config, from, extra_params);
    let options = config.convert_options();

    let result = convert(registry, &source, from, to, &options, &parse_options)
        .unwrap_or_else(|e| {
            eprintln!("Conversion error: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, result).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{result}"),
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();

    println!("Available formats:\n");
    for name in registry.list_formats() {
        let Ok(format) = registry.get(&name) else {
            continue;
        };
        let direction = match (format.supports_parsing(), format.supports_serialization()) {
            (true, true) => "in/out",
            (true, false) => "in",
            (false, true) => "out",
            (false, false) => "-",
        };
        println!(
            "  {name:<6} {direction:<6} {}  [{}]",
            format.description(),
            format.file_extensions().join(", ")
        );
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> TagdumpConfig {
    let loader = Loader::new().with_optional_file("tagdump.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(config: &mut TagdumpConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = extra_params.remove("explicit") {
        config.convert.explicit = parse_bool_arg("explicit", &raw);
    }

    if let Some(raw) = take_override(extra_params, &["traversal", "walk"]) {
        config.convert.traversal = match raw.as_str() {
            "recursive" => TraversalConfig::Recursive,
            "iterative" => TraversalConfig::Iterative,
            other => {
                eprintln!(
                    "Invalid traversal '{other}' for --extra-traversal (expected 'recursive' or 'iterative')"
                );
                std::process::exit(1);
            }
        };
    }

    if let Some(raw) = take_override(extra_params, &["mode", "html-mode"]) {
        config.input.html.mode = match raw.as_str() {
            "source" => HtmlModeConfig::Source,
            "document" => HtmlModeConfig::Document,
            "fragment" => HtmlModeConfig::Fragment,
            other => {
                eprintln!(
                    "Invalid mode '{other}' for --extra-mode (expected 'source', 'document' or 'fragment')"
                );
                std::process::exit(1);
            }
        };
    }
}

/// Parser parameters for the input format: configured defaults, then the remaining extras.
fn parse_params_from_config(
    config: &TagdumpConfig,
    from: &str,
    overrides: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut params = HashMap::new();

    if from == "html" {
        let mode = HtmlMode::from(config.input.html.mode);
        params.insert("mode".to_string(), mode.name().to_string());
    }

    for (key, value) in overrides {
        params.insert(key.clone(), value.clone());
    }

    params
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}
