// Command-line interface for casebrief
//
// This binary formats case analysis text and the analysis pages that host it, and checks
// intake form submissions. The heavy lifting lives in casebrief-fmt; this crate only deals
// with files, flags and exit codes.
//
// Usage:
//  casebrief <input> [--to <format>] [--output <file>]   - Render analysis text (default)
//  casebrief render <input> [--to <format>] [-o <file>]   - Same as above (explicit)
//  casebrief page <page.html> [-o <file>]                 - Format the page's analysis container
//  casebrief validate <intake.json>                       - Check an intake form submission
//  casebrief placeholder <case-type>                      - Query placeholder for a case type
//  casebrief generate-css                                 - Print the baseline CSS
//  casebrief --list-formats                               - List output formats
//
// Inputs may be `-` to read stdin.
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the format.
// Example:
//  casebrief analysis.txt --to html --extra-title "State v. Rao"

mod logging;

use anyhow::{bail, Context, Result};
use casebrief_config::{CasebriefConfig, Loader};
use casebrief_fmt::formats::get_default_css;
use casebrief_fmt::intake::{self, IntakeForm};
use casebrief_fmt::FormatRegistry;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;
use tracing::{debug, info};

const SUBCOMMANDS: &[&str] = &[
    "render",
    "page",
    "validate",
    "placeholder",
    "generate-css",
    "help",
];

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

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = args
                .get(i + 1)
                .is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn input_arg(help: &'static str) -> Arg {
    Arg::new("input")
        .help(help)
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .help("Output file path (defaults to stdout)")
        .value_hint(ValueHint::FilePath)
}

fn build_cli() -> Command {
    Command::new("casebrief")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Format case analyses and check intake submissions")
        .long_about(
            "casebrief turns markdown-like case analysis text into HTML.\n\n\
            Commands:\n  \
            - render:      Format analysis text as an HTML fragment or document\n  \
            - page:        Format the analysis container of an existing HTML page\n  \
            - validate:    Check an intake form submission (JSON)\n  \
            - placeholder: Show the query placeholder for a case type\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            casebrief analysis.txt                      # Standalone HTML on stdout\n  \
            casebrief analysis.txt --to fragment        # Bare fragment\n  \
            casebrief analysis.txt -o brief.html        # Format picked from extension\n  \
            casebrief page result.html -o result.html   # Format a rendered page",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a casebrief.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Enable debug logging on stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("render")
                .about("Render analysis text (default command)")
                .long_about(
                    "Format analysis text.\n\n\
                    Supported formats:\n  \
                    - fragment: The formatted HTML fragment (.frag)\n  \
                    - html:     Standalone HTML document with embedded CSS (.html)\n\n\
                    The target format comes from --to, then the output file extension,\n\
                    then the configured default.",
                )
                .arg(input_arg("Analysis text file, or '-' for stdin"))
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format")
                        .value_hint(ValueHint::Other),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("page")
                .about("Format the analysis container of an HTML page")
                .long_about(
                    "Finds the first element carrying the container class\n\
                    (analysis-content by default), formats its contents once and\n\
                    writes the whole page back. Pages without a container are\n\
                    written unchanged.",
                )
                .arg(input_arg("HTML page, or '-' for stdin"))
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("validate")
                .about("Validate an intake form submission")
                .long_about(
                    "Reads a JSON object with the intake form fields and reports\n\
                    every field error. Exits with status 1 when the form is invalid.",
                )
                .arg(input_arg("JSON submission, or '-' for stdin")),
        )
        .subcommand(
            Command::new("placeholder")
                .about("Print the query placeholder for a case type")
                .arg(
                    Arg::new("case-type")
                        .help("Case type, e.g. 'Theft' or 'Domestic Violence'")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("generate-css")
                .about("Output the baseline CSS used for HTML documents")
                .long_about(
                    "Use this as a starting point for custom styling. Save it, edit it,\n\
                    and point render.custom_css (or --extra-css-path) at the result.",
                ),
        )
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A bare path as first argument means the default render command
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "render".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    logging::init(matches.get_flag("verbose"));

    match run(&matches, &mut extra_params) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(matches: &ArgMatches, extra_params: &mut HashMap<String, String>) -> Result<ExitCode> {
    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()))?;
    apply_config_overrides(&mut config, extra_params)?;

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&config);
        return Ok(ExitCode::SUCCESS);
    }

    match matches.subcommand() {
        Some(("render", sub_matches)) => {
            let input = required(sub_matches, "input")?;
            let to = sub_matches.get_one::<String>("to").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_render_command(input, to, output, extra_params, &config)?;
        }
        Some(("page", sub_matches)) => {
            let input = required(sub_matches, "input")?;
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_page_command(input, output, &config)?;
        }
        Some(("validate", sub_matches)) => {
            let input = required(sub_matches, "input")?;
            return handle_validate_command(input);
        }
        Some(("placeholder", sub_matches)) => {
            let case_type = required(sub_matches, "case-type")?;
            println!("{}", intake::query_placeholder(case_type));
        }
        Some(("generate-css", _)) => {
            print!("{}", get_default_css());
        }
        _ => bail!("Unknown subcommand. Use --help for usage information."),
    }

    Ok(ExitCode::SUCCESS)
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str> {
    matches
        .get_one::<String>(name)
        .map(|s| s.as_str())
        .with_context(|| format!("missing required argument '{name}'"))
}

/// Handle the render command
fn handle_render_command(
    input: &str,
    to: Option<&str>,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &CasebriefConfig,
) -> Result<()> {
    let registry = FormatRegistry::with_formatter_options(config.formatter_options());
    let target = resolve_target_format(&registry, to, output, config);
    registry.get(&target)?;
    debug!(format = %target, input, "rendering analysis");

    let source = read_input(input)?;

    let mut format_options = HashMap::new();
    if target == "html" {
        format_options.insert("title".to_string(), config.render.title.clone());
        if let Some(css_path) = &config.render.custom_css {
            let css = fs::read_to_string(css_path)
                .with_context(|| format!("reading custom CSS '{css_path}'"))?;
            format_options.insert("css".to_string(), css);
        }
    }
    for (key, value) in extra_params {
        format_options.insert(key.clone(), value.clone());
    }

    let rendered = registry.render_with_options(&source, &target, &format_options)?;
    write_output(output, &rendered)
}

/// Handle the page command
fn handle_page_command(input: &str, output: Option<&str>, config: &CasebriefConfig) -> Result<()> {
    let page = read_input(input)?;
    let outcome = casebrief_fmt::initialize(&page, &config.page_options())?;

    if outcome.formatted {
        debug!(lists_merged = outcome.lists_merged, "page formatted");
    } else {
        info!(
            class = %config.page.container_class,
            "no content container found, page written unchanged"
        );
    }

    write_output(output, &outcome.html)
}

/// Handle the validate command
fn handle_validate_command(input: &str) -> Result<ExitCode> {
    let source = read_input(input)?;
    let form: IntakeForm = serde_json::from_str(&source)
        .with_context(|| format!("parsing intake submission '{input}'"))?;

    let report = intake::validate(&form);
    if report.is_valid() {
        println!("valid");
        return Ok(ExitCode::SUCCESS);
    }

    for error in &report.errors {
        println!("{error}");
    }
    Ok(ExitCode::FAILURE)
}

/// Handle the list-formats command
fn handle_list_formats_command(config: &CasebriefConfig) {
    let registry = FormatRegistry::with_formatter_options(config.formatter_options());
    println!("Output formats:\n");
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!("  {name:<10} {}", format.description());
        }
    }
}

/// Pick the output format: explicit flag, then output extension, then config default.
fn resolve_target_format(
    registry: &FormatRegistry,
    to: Option<&str>,
    output: Option<&str>,
    config: &CasebriefConfig,
) -> String {
    if let Some(to) = to {
        return to.to_string();
    }
    output
        .and_then(|path| registry.detect_format_from_filename(path))
        .unwrap_or_else(|| config.render.format.clone())
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("reading stdin")?;
        return Ok(source);
    }
    fs::read_to_string(input).with_context(|| format!("reading file '{input}'"))
}

fn write_output(output: Option<&str>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("writing file '{path}'"))
        }
        None => {
            print!("{content}");
            Ok(())
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> Result<CasebriefConfig> {
    let loader = Loader::new().with_optional_file("casebrief.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().context("failed to load configuration")
}

fn apply_config_overrides(
    config: &mut CasebriefConfig,
    extra_params: &mut HashMap<String, String>,
) -> Result<()> {
    if let Some(raw) = take_override(extra_params, &["merge-lists"]) {
        config.formatter.merge_adjacent_lists = parse_bool_arg("merge-lists", &raw)?;
    }
    if let Some(class) = take_override(extra_params, &["container-class"]) {
        config.page.container_class = class;
    }
    if let Some(title) = take_override(extra_params, &["title"]) {
        config.render.title = title;
    }
    // `css` is CSS text and goes to the format untouched
    if let Some(path) = take_override(extra_params, &["css-path"]) {
        config.render.custom_css = Some(path);
    }
    Ok(())
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| map.remove(*key))
}

fn parse_bool_arg(flag: &str, raw: &str) -> Result<bool> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        other => bail!("Invalid boolean value '{other}' for --extra-{flag}"),
    }
}
