use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

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

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    // Mirror of build_cli() in src/main.rs
    // We need to duplicate this here since build scripts can't access src/ modules.
    // `--to` stays free-form in both: the format registry decides what exists.
    let mut cmd = Command::new("casebrief")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Format case analyses and check intake submissions")
        .arg_required_else_help(true)
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
                .arg(input_arg("HTML page, or '-' for stdin"))
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("validate")
                .about("Validate an intake form submission")
                .arg(input_arg("JSON submission, or '-' for stdin")),
        )
        .subcommand(
            Command::new("placeholder")
                .about("Print the query placeholder for a case type")
                .arg(Arg::new("case-type").required(true).index(1)),
        )
        .subcommand(
            Command::new("generate-css").about("Output the baseline CSS used for HTML documents"),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "casebrief", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "casebrief", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "casebrief", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
