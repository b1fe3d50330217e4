use std::collections::HashMap;

use crate::insights::types::{CategorySummary, CategoryTotal, TopCategory};
use crate::store::Expense;

pub fn normalize_category(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Title-cases a normalized key: letters following a non-letter are uppercased.
pub fn display_category(key: &str) -> String {
    let mut output = String::with_capacity(key.len());
    let mut previous_is_letter = false;
    for character in key.chars() {
        if character.is_alphabetic() {
            if previous_is_letter {
                output.extend(character.to_lowercase());
            } else {
                output.extend(character.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            output.push(character);
            previous_is_letter = false;
        }
    }
    output
}

/// Totals per normalized category in first-seen order.
///
/// The top entry is the strictly largest total; on ties the category seen
/// first keeps the spot.
pub fn category_summary(expenses: &[Expense]) -> CategorySummary {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for expense in expenses {
        let key = normalize_category(&expense.category);
        match positions.get(&key) {
            Some(&index) => totals[index].total += expense.amount,
            None => {
                positions.insert(key.clone(), totals.len());
                totals.push(CategoryTotal {
                    label: display_category(&key),
                    key,
                    total: expense.amount,
                });
            }
        }
    }

    let top = top_category(&totals);
    CategorySummary { totals, top }
}

fn top_category(totals: &[CategoryTotal]) -> TopCategory {
    let mut best: Option<&CategoryTotal> = None;
    for entry in totals {
        match best {
            Some(current) if entry.total <= current.total => {}
            _ => best = Some(entry),
        }
    }

    match best {
        Some(entry) => TopCategory {
            key: Some(entry.key.clone()),
            label: entry.label.clone(),
            amount: entry.total,
        },
        None => TopCategory::none_found(),
    }
}
