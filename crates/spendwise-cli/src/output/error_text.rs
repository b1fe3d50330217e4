use spendwise_client::ClientError;

pub fn render_error(error: &ClientError) -> String {
    let mut lines = vec![
        "Could not complete the command.".to_string(),
        String::new(),
        format!("  Error:    {}", error.code),
        format!("  Details:  {}", error.message),
    ];

    if let Some(received) = error
        .data
        .as_ref()
        .and_then(|data| data.get("received"))
        .and_then(|value| value.as_str())
    {
        lines.push(format!("  Received: {received}"));
    }

    lines.push(String::new());
    lines.push("What to do next:".to_string());
    if error.recovery_steps.is_empty() {
        lines.push("  1. Retry the command.".to_string());
    } else {
        for (index, step) in error.recovery_steps.iter().enumerate() {
            lines.push(format!("  {}. {step}", index + 1));
        }
    }

    lines.join("\n")
}
