use serde_json::Value;

/// Print a text-mode success line
pub fn output_success(message: &str) -> anyhow::Result<()> {
    println!("✓ {}", message);
    Ok(())
}

/// Print a server response as pretty JSON
pub fn output_value(value: &Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
