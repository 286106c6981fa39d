use super::{display_name, format_port, json_pretty, load, EXIT_SUCCESS};
use std::path::Path;

pub fn run(file: &Path, json: bool) -> Result<u8, String> {
    let services = load(file)?;

    if json {
        let rows: Vec<_> = services
            .iter()
            .map(|s| {
                serde_json::json!({
                    "name": s.name(),
                    "scale": s.scale(),
                    "minPort": s.min_port(),
                })
            })
            .collect();
        println!("{}", json_pretty(&rows)?);
        return Ok(EXIT_SUCCESS);
    }

    if services.is_empty() {
        println!("no services in {}", file.display());
        return Ok(EXIT_SUCCESS);
    }

    println!("{:<30} {:>5}  PORT", "NAME", "SCALE");
    for service in &services {
        println!(
            "{:<30} {:>5}  {}",
            display_name(service),
            service.scale(),
            format_port(service.min_port())
        );
    }
    Ok(EXIT_SUCCESS)
}
