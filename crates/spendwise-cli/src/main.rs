mod cli;
mod dispatch;
mod logging;
mod output;
mod stdout_io;

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use spendwise_client::ClientError;
use stdout_io::write_stdout_text;

const ROOT_HELP: &str = "Spendwise - expenses, budgets, and spending insights

Usage:
  spendwise <command>

Start here:
  spendwise expense add --amount 12.50 --category Food
  spendwise budget set 3000
  spendwise insights
";

const TOP_LEVEL_HELP: &str = "Spendwise - expenses, budgets, and spending insights

USAGE: spendwise [--owner <OWNER>] <command>

Record spending:
  spendwise expense add --amount <AMOUNT>                 Record an expense (category, description, date optional)
  spendwise expense list                                  List every expense, newest first
  spendwise expense list --month                          List this month's expenses

Budgets:
  spendwise budget set <AMOUNT>                           Set or overwrite this month's budget
  spendwise budget set <AMOUNT> --period YYYY-MM          Budget another month
  spendwise budget show                                   Budget, spend, and remaining for this month

Insights:
  spendwise insights                                      Trends, projection, categories, and tips

Every command accepts --json for machine-readable output.

Environment:
  SPENDWISE_HOME                 Ledger directory (default ~/.spendwise)
  SPENDWISE_OWNER                Owner used when --owner is omitted (default `default`)
  SPENDWISE_BENCHMARK_MONTHLY    Typical monthly spend shown by insights (default 15000)
  SPENDWISE_LOG                  Log filter for stderr diagnostics (default `warn`)
";

fn main() -> ExitCode {
    logging::init_tracing();
    match run() {
        Ok(code) => code,
        Err(code) => code,
    }
}

fn run() -> Result<ExitCode, ExitCode> {
    let raw_args = std::env::args().collect::<Vec<String>>();
    if raw_args.len() == 1 {
        if write_stdout_text(ROOT_HELP).is_err() {
            return Err(ExitCode::from(2));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let cli = match cli::Cli::try_parse() {
        Ok(value) => value,
        Err(err) => return success_on_help(handle_parse_error(&err, &raw_args)),
    };
    let mode = output::mode_for_command(&cli.command);

    match dispatch::dispatch(&cli) {
        Ok(success) => {
            if output::print_success(&success, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            tracing::debug!(code = %error.code, "command failed");
            if output::print_failure(&error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Err(exit_code_for_error(&error))
        }
    }
}

enum ParseOutcome {
    HelpShown,
    Failed(ExitCode),
}

fn success_on_help(outcome: ParseOutcome) -> Result<ExitCode, ExitCode> {
    match outcome {
        ParseOutcome::HelpShown => Ok(ExitCode::SUCCESS),
        ParseOutcome::Failed(code) => Err(code),
    }
}

fn handle_parse_error(err: &clap::Error, raw_args: &[String]) -> ParseOutcome {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            let text = if is_top_level_help_request(raw_args) {
                TOP_LEVEL_HELP.to_string()
            } else {
                err.to_string()
            };
            if write_stdout_text(&text).is_err() {
                return ParseOutcome::Failed(ExitCode::from(2));
            }
            ParseOutcome::HelpShown
        }
        ErrorKind::DisplayVersion => {
            if write_stdout_text(&err.to_string()).is_err() {
                return ParseOutcome::Failed(ExitCode::from(2));
            }
            ParseOutcome::HelpShown
        }
        kind => {
            let command_hint = if matches!(
                kind,
                ErrorKind::MissingRequiredArgument
                    | ErrorKind::InvalidValue
                    | ErrorKind::ValueValidation
                    | ErrorKind::WrongNumberOfValues
                    | ErrorKind::UnknownArgument
                    | ErrorKind::InvalidSubcommand
            ) {
                command_path_from_args(raw_args)
            } else {
                None
            };
            let clean_message = strip_clap_boilerplate(&err.to_string());
            let parse_error =
                ClientError::invalid_argument_for_command(&clean_message, command_hint);
            let mode = infer_requested_output_mode(raw_args);
            if output::print_failure(&parse_error, mode).is_err() {
                return ParseOutcome::Failed(ExitCode::from(2));
            }
            ParseOutcome::Failed(ExitCode::from(1))
        }
    }
}

fn is_top_level_help_request(raw_args: &[String]) -> bool {
    raw_args.len() == 2 && matches!(raw_args[1].as_str(), "--help" | "-h")
}

/// Drops clap's trailing usage block so the recovery steps are the only guidance.
fn strip_clap_boilerplate(message: &str) -> String {
    let trimmed = if let Some(pos) = message.find("\n\nUsage:") {
        &message[..pos]
    } else if let Some(pos) = message.find("\nFor more information") {
        &message[..pos]
    } else {
        message
    };
    trimmed.trim_end().to_string()
}

/// Maps raw args to the subcommand path used in `--help` hints, e.g. `budget set`.
fn command_path_from_args(raw_args: &[String]) -> Option<&'static str> {
    let words = raw_args
        .iter()
        .skip(1)
        .map(String::as_str)
        .filter(|value| matches!(*value, "expense" | "budget" | "insights" | "add" | "list" | "set" | "show"))
        .collect::<Vec<&str>>();

    match words.as_slice() {
        ["expense", "add", ..] => Some("expense add"),
        ["expense", "list", ..] => Some("expense list"),
        ["expense", ..] => Some("expense"),
        ["budget", "set", ..] => Some("budget set"),
        ["budget", "show", ..] => Some("budget show"),
        ["budget", ..] => Some("budget"),
        ["insights", ..] => Some("insights"),
        _ => None,
    }
}

fn infer_requested_output_mode(raw_args: &[String]) -> output::OutputMode {
    if raw_args.iter().skip(1).any(|value| value == "--json") {
        return output::OutputMode::Json;
    }
    output::OutputMode::Text
}

fn exit_code_for_error(error: &ClientError) -> ExitCode {
    if error.is_internal() {
        ExitCode::from(2)
    } else {
        ExitCode::from(1)
    }
}
