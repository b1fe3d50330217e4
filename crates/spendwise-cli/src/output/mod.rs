mod budget_text;
mod error_text;
mod expense_text;
mod format;
mod insights_text;
mod json;
mod mode;

use std::io;

use spendwise_client::{ClientError, SuccessEnvelope};

use crate::stdout_io::write_stdout_line;

pub use mode::{OutputMode, mode_for_command};

pub fn print_success(success: &SuccessEnvelope, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Text => render_text_success(success)?,
        OutputMode::Json => json::render_success_json(success)?,
    };
    write_stdout_line(&body)
}

pub fn print_failure(error: &ClientError, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Json => json::render_error_json(error)?,
        OutputMode::Text => error_text::render_error(error),
    };
    write_stdout_line(&body)
}

fn render_text_success(success: &SuccessEnvelope) -> io::Result<String> {
    match success.command.as_str() {
        "expense add" => expense_text::render_expense_add(&success.data),
        "expense list" => expense_text::render_expense_list(&success.data),
        "budget set" => budget_text::render_budget_set(&success.data),
        "budget show" => budget_text::render_budget_show(&success.data),
        "insights" => insights_text::render_insights(&success.data),
        _ => Err(io::Error::other(format!(
            "unsupported text output command `{}`",
            success.command
        ))),
    }
}
