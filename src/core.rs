use clap::{CommandFactory, Parser};
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::{build_request, Args, Command, GenerateArgs, ParseArgs};
use crate::config::Config;
use crate::context::Environment;
use crate::curl::{format_curl_pretty, from_curl_command, to_curl_command};
use crate::errors::ReqcurlError;
use crate::logging;
use crate::models::{RequestDescriptor, ShellFlavor};
use crate::status::ExitStatus;

/// Main entry point for the CLI.
///
/// Loads configuration, parses arguments, sets up logging and dispatches
/// to `generate` or `parse`.
pub fn run(args: Vec<String>, mut env: Environment) -> ExitStatus {
    if let Some(name) = args.first() {
        if let Some(basename) = std::path::Path::new(name).file_stem() {
            env.program_name = basename.to_string_lossy().to_string();
        }
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config: {}", e);
            Config::default()
        }
    };

    let merged_args = merge_default_options(args, &config);

    let parsed = match Args::try_parse_from(&merged_args) {
        Ok(args) => args,
        Err(e) => {
            e.print().ok();
            return if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion {
                ExitStatus::Success
            } else {
                ExitStatus::Error
            };
        }
    };

    let log_format = parsed.log_format.or(config.log_format).unwrap_or_default();
    logging::init(log_format, parsed.debug);
    debug!(config_dir = %config.config_dir.display(), "Configuration resolved");

    if let Some(shell) = parsed.generate_completions {
        generate_completions(shell, &env.program_name);
        return ExitStatus::Success;
    }

    let traceback = parsed.traceback || parsed.debug;

    match program(parsed, &config, env) {
        Ok(status) => status,
        Err(e) => handle_error(e, traceback),
    }
}

pub fn program(args: Args, config: &Config, mut env: Environment) -> Result<ExitStatus, ReqcurlError> {
    match args.command {
        Some(Command::Generate(ref generate)) => run_generate(generate, config, &mut env),
        Some(Command::Parse(ref parse)) => run_parse(parse, &mut env),
        None => {
            eprintln!("usage: {} <generate|parse> ...", env.program_name);
            eprintln!("\nFor more information, run: {} --help", env.program_name);
            Ok(ExitStatus::Error)
        }
    }
}

fn run_generate(args: &GenerateArgs, config: &Config, env: &mut Environment) -> Result<ExitStatus, ReqcurlError> {
    let request = build_request(args, env)?;
    let flavor = args.shell.or(config.shell).unwrap_or_else(ShellFlavor::detect);

    let command = to_curl_command(&request, flavor);
    info!(method = %request.method, url = %request.url, ?flavor, "Generated curl command");

    if args.pretty && env.use_colors() {
        println!("{}", format_curl_pretty(&command));
    } else {
        println!("{}", command);
    }
    Ok(ExitStatus::Success)
}

/// JSON printed by `parse`: the request plus the name it would be saved under
#[derive(Serialize)]
struct ImportedRequest<'a> {
    name: String,
    #[serde(flatten)]
    request: &'a RequestDescriptor,
}

fn run_parse(args: &ParseArgs, env: &mut Environment) -> Result<ExitStatus, ReqcurlError> {
    let input = match (&args.command, &args.file) {
        (Some(command), _) => command.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) if env.stdin_isatty => String::new(),
        (None, None) => env.read_stdin()?,
    };

    if input.trim().is_empty() {
        return Err(ReqcurlError::Argument("Please enter a cURL command".to_string()));
    }

    let request = from_curl_command(&input)?;
    info!(method = %request.method, url = %request.url, headers = request.headers.len(), "Imported curl command");

    let imported = ImportedRequest {
        name: request.default_name(),
        request: &request,
    };
    let json = if args.compact {
        serde_json::to_string(&imported)?
    } else {
        serde_json::to_string_pretty(&imported)?
    };
    println!("{}", json);
    Ok(ExitStatus::Success)
}

/// Insert config-file default options right after the program name
fn merge_default_options(args: Vec<String>, config: &Config) -> Vec<String> {
    if config.default_options.is_empty() || args.is_empty() {
        return args;
    }

    let mut merged = Vec::with_capacity(args.len() + config.default_options.len());
    let mut iter = args.into_iter();
    merged.extend(iter.next());
    merged.extend(config.default_options.iter().cloned());
    merged.extend(iter);
    merged
}

fn generate_completions(shell: clap_complete::Shell, bin_name: &str) {
    let mut cmd = Args::command();
    clap_complete::generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
}

fn handle_error(error: ReqcurlError, traceback: bool) -> ExitStatus {
    if traceback {
        eprintln!("Error: {:?}", error);
    } else {
        eprintln!("Error: {}", error);
    }

    ExitStatus::Error
}
