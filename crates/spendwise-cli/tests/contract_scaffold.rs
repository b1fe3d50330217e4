use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

static TEST_COUNTER: AtomicU64 = AtomicU64::new(1);

fn unique_test_home() -> PathBuf {
    let mut path = std::env::temp_dir();
    let stamp = match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(value) => value.as_nanos(),
        Err(_) => 0,
    };
    let sequence = TEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    path.push(format!(
        "spendwise-cli-test-{}-{stamp}-{sequence}",
        std::process::id()
    ));
    path
}

struct CliRun {
    code: Option<i32>,
    stdout: String,
}

fn run_cli_with_env(home: &Path, args: &[&str], env: &[(&str, &str)]) -> CliRun {
    let mut command = Command::new(env!("CARGO_BIN_EXE_spendwise"));
    command.args(args);
    command.env("SPENDWISE_HOME", home);
    command.env_remove("SPENDWISE_OWNER");
    command.env_remove("SPENDWISE_BENCHMARK_MONTHLY");
    command.env_remove("SPENDWISE_LOG");
    for (key, value) in env {
        command.env(key, value);
    }
    command.stdout(Stdio::piped());
    command.stderr(Stdio::piped());

    let output = command.output();
    assert!(output.is_ok());
    match output {
        Ok(value) => CliRun {
            code: value.status.code(),
            stdout: String::from_utf8_lossy(&value.stdout).to_string(),
        },
        Err(_) => CliRun {
            code: None,
            stdout: String::new(),
        },
    }
}

fn run_cli(home: &Path, args: &[&str]) -> CliRun {
    run_cli_with_env(home, args, &[])
}

fn parse_json(stdout: &str) -> Value {
    let parsed = serde_json::from_str::<Value>(stdout);
    assert!(parsed.is_ok(), "stdout was not JSON: {stdout}");
    parsed.unwrap_or(Value::Null)
}

fn add_expense(home: &Path, amount: &str, category: &str, date: &str) {
    let run = run_cli(
        home,
        &[
            "expense", "add", "--amount", amount, "--category", category, "--date", date, "--json",
        ],
    );
    assert_eq!(run.code, Some(0), "expense add failed: {}", run.stdout);
}

fn cleanup(home: &Path) {
    let _ = fs::remove_dir_all(home);
}

#[test]
fn bare_invocation_prints_root_help() {
    let home = unique_test_home();
    let run = run_cli(&home, &[]);
    assert_eq!(run.code, Some(0));
    assert!(run.stdout.starts_with("Spendwise - expenses, budgets, and spending insights"));
    assert!(run.stdout.contains("spendwise insights"));
    cleanup(&home);
}

#[test]
fn top_level_help_lists_every_command() {
    let home = unique_test_home();
    let run = run_cli(&home, &["--help"]);
    assert_eq!(run.code, Some(0));
    for needle in [
        "spendwise expense add",
        "spendwise expense list",
        "spendwise budget set",
        "spendwise budget show",
        "spendwise insights",
        "SPENDWISE_HOME",
    ] {
        assert!(run.stdout.contains(needle), "missing {needle}");
    }
    cleanup(&home);
}

#[test]
fn expense_add_json_envelope_carries_the_stored_row() {
    let home = unique_test_home();
    let run = run_cli(
        &home,
        &[
            "expense",
            "add",
            "--amount",
            "12.50",
            "--category",
            "  eating OUT ",
            "--description",
            "lunch",
            "--date",
            "2025-06-14",
            "--json",
        ],
    );
    assert_eq!(run.code, Some(0));
    let payload = parse_json(&run.stdout);
    assert_eq!(payload["ok"], Value::Bool(true));
    assert_eq!(payload["version"], "v1");
    assert_eq!(payload["command"], "expense add");
    assert_eq!(payload["data"]["owner"], "default");

    let expense = &payload["data"]["expense"];
    assert_eq!(expense["amount"].as_f64(), Some(12.5));
    assert_eq!(expense["date"], "2025-06-14");
    assert_eq!(expense["category"], "eating OUT");
    assert_eq!(expense["category_label"], "Eating Out");
    assert_eq!(expense["description"], "lunch");
    assert!(expense["expense_id"].as_str().is_some_and(|id| !id.is_empty()));
    cleanup(&home);
}

#[test]
fn invalid_amount_is_a_user_error_with_exit_code_one() {
    let home = unique_test_home();
    let run = run_cli(&home, &["expense", "add", "--amount", "-4", "--json"]);
    assert_eq!(run.code, Some(1));
    let payload = parse_json(&run.stdout);
    assert_eq!(payload["error"]["code"], "invalid_amount");
    assert!(
        payload["error"]["recovery_steps"]
            .as_array()
            .is_some_and(|steps| !steps.is_empty())
    );
    cleanup(&home);
}

#[test]
fn invalid_expense_date_reports_invalid_date() {
    let home = unique_test_home();
    let run = run_cli(
        &home,
        &["expense", "add", "--amount", "5", "--date", "2025-02-30", "--json"],
    );
    assert_eq!(run.code, Some(1));
    let payload = parse_json(&run.stdout);
    assert_eq!(payload["error"]["code"], "invalid_date");
    cleanup(&home);
}

#[test]
fn malformed_as_of_is_an_argument_error() {
    let home = unique_test_home();
    let run = run_cli(&home, &["insights", "--as-of", "June", "--json"]);
    assert_eq!(run.code, Some(1));
    let payload = parse_json(&run.stdout);
    assert_eq!(payload["error"]["code"], "invalid_argument");
    let mentions_help = payload["error"]["recovery_steps"]
        .as_array()
        .is_some_and(|steps| {
            steps
                .iter()
                .any(|step| step.as_str().is_some_and(|text| text.contains("spendwise insights --help")))
        });
    assert!(mentions_help);
    cleanup(&home);
}

#[test]
fn expense_list_filters_to_the_reference_month() {
    let home = unique_test_home();
    add_expense(&home, "10", "Food", "2025-05-30");
    add_expense(&home, "20", "Food", "2025-06-01");
    add_expense(&home, "5.255", "Coffee", "2025-06-14");

    let all = parse_json(&run_cli(&home, &["expense", "list", "--json"]).stdout);
    assert_eq!(all["data"]["filter"], "all");
    assert_eq!(all["data"]["count"].as_u64(), Some(3));
    assert_eq!(all["data"]["data_range_hint"]["earliest"], "2025-05-30");
    assert_eq!(all["data"]["data_range_hint"]["latest"], "2025-06-14");

    let month = parse_json(
        &run_cli(
            &home,
            &["expense", "list", "--month", "--as-of", "2025-06-20", "--json"],
        )
        .stdout,
    );
    assert_eq!(month["data"]["filter"], "month");
    assert_eq!(month["data"]["from"], "2025-06-01");
    assert_eq!(month["data"]["to"], "2025-06-30");
    assert_eq!(month["data"]["count"].as_u64(), Some(2));
    assert_eq!(month["data"]["total"].as_f64(), Some(25.26));
    assert_eq!(month["data"]["rows"][0]["date"], "2025-06-14");
    cleanup(&home);
}

#[test]
fn budget_set_creates_then_updates() {
    let home = unique_test_home();
    let first = parse_json(
        &run_cli(
            &home,
            &["budget", "set", "3000", "--as-of", "2025-06-15", "--json"],
        )
        .stdout,
    );
    assert_eq!(first["data"]["outcome"], "created");
    assert_eq!(first["data"]["budget"]["period"], "2025-06");
    assert_eq!(first["data"]["budget"]["amount"].as_f64(), Some(3000.0));

    let second = parse_json(
        &run_cli(
            &home,
            &["budget", "set", "3500", "--period", "2025-06", "--json"],
        )
        .stdout,
    );
    assert_eq!(second["data"]["outcome"], "updated");
    assert_eq!(second["data"]["budget"]["amount"].as_f64(), Some(3500.0));
    assert_eq!(
        second["data"]["budget"]["budget_id"],
        first["data"]["budget"]["budget_id"]
    );
    cleanup(&home);
}

#[test]
fn budget_set_create_only_refuses_to_overwrite() {
    let home = unique_test_home();
    let created = run_cli(
        &home,
        &["budget", "set", "1000", "--period", "2025-06", "--create-only", "--json"],
    );
    assert_eq!(created.code, Some(0));

    let conflict = run_cli(
        &home,
        &["budget", "set", "2000", "--period", "2025-06", "--create-only", "--json"],
    );
    assert_eq!(conflict.code, Some(1));
    let payload = parse_json(&conflict.stdout);
    assert_eq!(payload["error"]["code"], "budget_conflict");
    cleanup(&home);
}

#[test]
fn negative_budget_is_rejected() {
    let home = unique_test_home();
    let run = run_cli(&home, &["budget", "set", "-100", "--json"]);
    assert_eq!(run.code, Some(1));
    let payload = parse_json(&run.stdout);
    assert_eq!(payload["error"]["code"], "invalid_amount");
    cleanup(&home);
}

#[test]
fn budget_show_without_budget_reports_null_remaining() {
    let home = unique_test_home();
    add_expense(&home, "250", "Rent", "2025-06-02");

    let payload = parse_json(
        &run_cli(
            &home,
            &["budget", "show", "--as-of", "2025-06-15", "--json"],
        )
        .stdout,
    );
    assert_eq!(payload["command"], "budget show");
    assert_eq!(payload["data"]["period"], "2025-06");
    assert_eq!(payload["data"]["budget"], Value::Null);
    assert_eq!(payload["data"]["remaining"], Value::Null);
    assert_eq!(payload["data"]["total_spent"].as_f64(), Some(250.0));
    assert_eq!(payload["data"]["percent_used"].as_f64(), Some(0.0));

    let set = run_cli(&home, &["budget", "set", "1000", "--period", "2025-06"]);
    assert_eq!(set.code, Some(0));
    let with_budget = parse_json(
        &run_cli(
            &home,
            &["budget", "show", "--period", "2025-06", "--json"],
        )
        .stdout,
    );
    assert_eq!(with_budget["data"]["remaining"].as_f64(), Some(750.0));
    assert_eq!(with_budget["data"]["percent_used"].as_f64(), Some(25.0));
    cleanup(&home);
}

#[test]
fn owners_keep_separate_ledgers() {
    let home = unique_test_home();
    add_expense(&home, "40", "Food", "2025-06-02");
    let run = run_cli(
        &home,
        &[
            "--owner", "bob", "expense", "add", "--amount", "7", "--date", "2025-06-03", "--json",
        ],
    );
    assert_eq!(run.code, Some(0));

    let bob = parse_json(&run_cli(&home, &["expense", "list", "--owner", "bob", "--json"]).stdout);
    assert_eq!(bob["data"]["owner"], "bob");
    assert_eq!(bob["data"]["count"].as_u64(), Some(1));

    let via_env = parse_json(
        &run_cli_with_env(&home, &["expense", "list", "--json"], &[("SPENDWISE_OWNER", "bob")])
            .stdout,
    );
    assert_eq!(via_env["data"]["owner"], "bob");
    assert_eq!(via_env["data"]["total"].as_f64(), Some(7.0));

    let default_owner = parse_json(&run_cli(&home, &["expense", "list", "--json"]).stdout);
    assert_eq!(default_owner["data"]["total"].as_f64(), Some(40.0));
    cleanup(&home);
}

#[test]
fn insights_json_reports_projection_categories_and_tips() {
    let home = unique_test_home();
    add_expense(&home, "100", "Food", "2025-06-01");
    add_expense(&home, "200", "travel", "2025-06-10");
    add_expense(&home, "500", "Travel", "2025-02-11");
    let set = run_cli(&home, &["budget", "set", "3000", "--period", "2025-06"]);
    assert_eq!(set.code, Some(0));

    let run = run_cli_with_env(
        &home,
        &["insights", "--as-of", "2025-06-15", "--json"],
        &[("SPENDWISE_BENCHMARK_MONTHLY", "20000")],
    );
    assert_eq!(run.code, Some(0));
    let payload = parse_json(&run.stdout);
    let data = &payload["data"];
    assert_eq!(payload["command"], "insights");
    assert_eq!(data["as_of"], "2025-06-15");
    assert_eq!(data["period"], "2025-06");
    assert_eq!(data["total_spent"].as_f64(), Some(300.0));
    assert_eq!(data["remaining"].as_f64(), Some(2700.0));
    assert_eq!(data["projection"]["days_passed"].as_i64(), Some(15));
    assert_eq!(data["projection"]["days_in_month"].as_u64(), Some(30));
    assert_eq!(data["projection"]["projected"].as_f64(), Some(600.0));
    assert_eq!(data["projection"]["percent_used"].as_f64(), Some(10.0));
    assert_eq!(data["benchmark_monthly"].as_f64(), Some(20000.0));

    assert_eq!(data["daily"].as_array().map(Vec::len), Some(30));
    assert_eq!(data["daily"][29]["date"], "2025-06-15");
    assert_eq!(data["monthly"].as_array().map(Vec::len), Some(12));
    assert_eq!(data["monthly"][1]["total"].as_f64(), Some(500.0));

    assert_eq!(data["top_category"]["key"], "travel");
    assert_eq!(data["top_category"]["label"], "Travel");
    assert_eq!(data["top_category"]["amount"].as_f64(), Some(700.0));
    assert_eq!(data["categories"][0]["key"], "travel");
    assert_eq!(data["categories"][0]["total"].as_f64(), Some(700.0));
    assert_eq!(data["categories"][1]["key"], "food");

    let tips = data["tips"].as_array().cloned().unwrap_or_default();
    assert_eq!(tips.len(), 2);
    assert_eq!(tips[0], "You spent most on Travel (87.5% of total).");
    assert_eq!(tips[1], "Consider reducing Travel expenses.");
    cleanup(&home);
}

#[test]
fn insights_on_an_empty_ledger_still_succeeds() {
    let home = unique_test_home();
    let run = run_cli(&home, &["insights", "--as-of", "2025-06-15", "--json"]);
    assert_eq!(run.code, Some(0));
    let payload = parse_json(&run.stdout);
    assert_eq!(payload["data"]["total_spent"].as_f64(), Some(0.0));
    assert_eq!(payload["data"]["budget"], Value::Null);
    assert_eq!(payload["data"]["top_category"]["key"], Value::Null);
    assert_eq!(payload["data"]["benchmark_monthly"].as_f64(), Some(15000.0));
    assert_eq!(payload["data"]["tips"].as_array().map(Vec::len), Some(1));
    cleanup(&home);
}

#[test]
fn text_output_renders_for_every_command() {
    let home = unique_test_home();
    let add = run_cli(
        &home,
        &["expense", "add", "--amount", "1234.5", "--category", "Rent", "--date", "2025-06-02"],
    );
    assert_eq!(add.code, Some(0));
    assert!(add.stdout.contains("Expense recorded."));
    assert!(add.stdout.contains("1,234.50"));

    let list = run_cli(&home, &["expense", "list"]);
    assert_eq!(list.code, Some(0));
    assert!(list.stdout.contains("All expenses"));
    assert!(list.stdout.contains("Rent"));

    let set = run_cli(&home, &["budget", "set", "2000", "--period", "2025-06"]);
    assert_eq!(set.code, Some(0));
    assert!(set.stdout.contains("Budget for 2025-06 set to"));

    let show = run_cli(&home, &["budget", "show", "--as-of", "2025-06-15"]);
    assert_eq!(show.code, Some(0));
    assert!(show.stdout.contains("Budget for 2025-06:"));
    assert!(show.stdout.contains("Remaining:"));

    let insights = run_cli(&home, &["insights", "--as-of", "2025-06-15"]);
    assert_eq!(insights.code, Some(0));
    assert!(insights.stdout.contains("Spending insights for 2025-06 (as of 2025-06-15):"));
    assert!(insights.stdout.contains("Top category: Rent"));
    assert!(insights.stdout.contains("Tips:"));
    cleanup(&home);
}

#[test]
fn text_errors_explain_how_to_recover() {
    let home = unique_test_home();
    let run = run_cli(&home, &["budget", "set", "lots"]);
    assert_eq!(run.code, Some(1));
    assert!(run.stdout.contains("Could not complete the command."));
    assert!(run.stdout.contains("lots"));
    cleanup(&home);
}
