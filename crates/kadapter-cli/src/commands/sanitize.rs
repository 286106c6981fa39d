use super::{json_pretty, EXIT_SUCCESS};

pub fn run(name: &str, json: bool) -> Result<u8, String> {
    let sanitized = kadapter_schema::sanitize(name);
    if json {
        let payload = serde_json::json!({
            "input": name,
            "name": sanitized,
        });
        println!("{}", json_pretty(&payload)?);
    } else {
        println!("{sanitized}");
    }
    Ok(EXIT_SUCCESS)
}
