use anyhow::Result;

/// Prints the JSON schema of the paintpad config file.
fn main() -> Result<()> {
    let schema = paintpad::Config::json_schema();
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
