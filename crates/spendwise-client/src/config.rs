use crate::{ClientError, ClientResult};

pub const OWNER_ENV_VAR: &str = "SPENDWISE_OWNER";
pub const DEFAULT_OWNER: &str = "default";
pub const BENCHMARK_ENV_VAR: &str = "SPENDWISE_BENCHMARK_MONTHLY";
pub const DEFAULT_BENCHMARK_MONTHLY: f64 = 15000.0;

const MAX_OWNER_LENGTH: usize = 64;

/// Resolves the ledger owner: explicit flag, then `SPENDWISE_OWNER`, then `default`.
pub fn resolve_owner(explicit: Option<&str>) -> ClientResult<String> {
    let from_env = std::env::var(OWNER_ENV_VAR).ok();
    owner_from_sources(explicit, from_env.as_deref())
}

pub fn resolve_benchmark_monthly() -> f64 {
    let from_env = std::env::var(BENCHMARK_ENV_VAR).ok();
    benchmark_from_source(from_env.as_deref())
}

fn owner_from_sources(explicit: Option<&str>, from_env: Option<&str>) -> ClientResult<String> {
    if let Some(value) = explicit {
        return validate_owner(value);
    }
    match from_env {
        Some(value) if !value.trim().is_empty() => validate_owner(value),
        _ => Ok(DEFAULT_OWNER.to_string()),
    }
}

fn validate_owner(value: &str) -> ClientResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ClientError::invalid_argument_with_recovery(
            "Owner must not be empty.",
            vec![format!(
                "Pass `--owner <name>` or unset `{OWNER_ENV_VAR}` to use `{DEFAULT_OWNER}`."
            )],
        ));
    }
    if trimmed.chars().count() > MAX_OWNER_LENGTH {
        return Err(ClientError::invalid_argument_with_recovery(
            &format!("Owner must be at most {MAX_OWNER_LENGTH} characters."),
            vec!["Choose a shorter owner name.".to_string()],
        ));
    }
    Ok(trimmed.to_string())
}

fn benchmark_from_source(from_env: Option<&str>) -> f64 {
    let Some(raw) = from_env else {
        return DEFAULT_BENCHMARK_MONTHLY;
    };
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => {
            tracing::warn!(
                env = BENCHMARK_ENV_VAR,
                value = %raw,
                "ignoring unreadable benchmark, using default"
            );
            DEFAULT_BENCHMARK_MONTHLY
        }
    }
}
