use crate::cli::{BudgetCommand, Commands, ExpenseCommand};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

impl OutputMode {
    fn from_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

pub fn mode_for_command(command: &Commands) -> OutputMode {
    match command {
        Commands::Expense { command } => match command {
            ExpenseCommand::Add { json, .. } | ExpenseCommand::List { json, .. } => {
                OutputMode::from_flag(*json)
            }
        },
        Commands::Budget { command } => match command {
            BudgetCommand::Set { json, .. } | BudgetCommand::Show { json, .. } => {
                OutputMode::from_flag(*json)
            }
        },
        Commands::Insights { json, .. } => OutputMode::from_flag(*json),
    }
}

#[cfg(test)]
mod tests {
    use super::{OutputMode, mode_for_command};
    use crate::cli::parse_from;

    #[test]
    fn json_flag_selects_json_for_every_command() {
        let cases: [&[&str]; 5] = [
            &["spendwise", "expense", "add", "--amount", "1", "--json"],
            &["spendwise", "expense", "list", "--json"],
            &["spendwise", "budget", "set", "10", "--json"],
            &["spendwise", "budget", "show", "--json"],
            &["spendwise", "insights", "--json"],
        ];
        for args in cases {
            let parsed = parse_from(args);
            assert!(parsed.is_ok());
            if let Ok(cli) = parsed {
                assert_eq!(mode_for_command(&cli.command), OutputMode::Json);
            }
        }
    }

    #[test]
    fn text_is_the_default() {
        let parsed = parse_from(["spendwise", "insights"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert_eq!(mode_for_command(&cli.command), OutputMode::Text);
        }

        let listing = parse_from(["spendwise", "expense", "list", "--month"]);
        assert!(listing.is_ok());
        if let Ok(cli) = listing {
            assert_eq!(mode_for_command(&cli.command), OutputMode::Text);
        }
    }
}
