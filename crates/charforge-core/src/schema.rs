use anyhow::{bail, Context, Result};
use jsonschema::Validator;
use serde_json::Value;

const PAYLOAD_SCHEMA: &str = include_str!("../schema/agent-config.schema.json");

/// Compile the embedded payload schema.
pub fn validator() -> Result<Validator> {
    let schema: Value =
        serde_json::from_str(PAYLOAD_SCHEMA).context("embedded schema is invalid JSON")?;
    Validator::new(&schema).map_err(|e| anyhow::anyhow!("schema compilation failed: {e}"))
}

/// Validate a single payload value against the wire schema.
pub fn validate(data: &Value) -> Result<()> {
    let v = validator()?;
    if v.is_valid(data) {
        return Ok(());
    }
    let mut msgs: Vec<String> = Vec::new();
    for error in v.iter_errors(data) {
        let path = error.instance_path.to_string();
        let loc = if path.is_empty() {
            "(root)".into()
        } else {
            path
        };
        msgs.push(format!("  {loc}: {error}"));
    }
    bail!("validation failed:\n{}", msgs.join("\n"));
}

/// Validate multiple payload files, printing results. Returns
/// (passed, failed) counts.
pub fn validate_files(paths: &[String]) -> Result<(usize, usize)> {
    let v = validator()?;
    let mut passed = 0usize;
    let mut failed = 0usize;
    for path in paths {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("cannot read {path}"))?;
        let data: Value =
            serde_json::from_str(&content).with_context(|| format!("{path}: invalid JSON"))?;
        if v.is_valid(&data) {
            eprintln!("  ok  {path}");
            passed += 1;
        } else {
            failed += 1;
            eprintln!("  FAIL {path}");
            for error in v.iter_errors(&data) {
                let p = error.instance_path.to_string();
                let loc = if p.is_empty() { "(root)".into() } else { p };
                eprintln!("       {loc}: {error}");
            }
        }
    }
    Ok((passed, failed))
}
