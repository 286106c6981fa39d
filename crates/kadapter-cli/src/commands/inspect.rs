use super::{display_name, format_port, json_pretty, load, service_report, EXIT_SUCCESS};
use kadapter_schema::{sanitize, ServiceDescriptor};
use std::path::Path;
use tracing::debug;

pub fn run(file: &Path, only: Option<&str>, json: bool) -> Result<u8, String> {
    let mut services = load(file)?;

    if let Some(wanted) = only {
        let wanted = sanitize(wanted);
        debug!("filtering services by name '{wanted}'");
        services.retain(|s| s.name().is_some_and(|n| *n == *wanted));
        if services.is_empty() {
            return Err(format!("no service named '{wanted}' in {}", file.display()));
        }
    }

    if json {
        let reports = services
            .iter()
            .map(service_report)
            .collect::<Result<Vec<_>, _>>()?;
        println!("{}", json_pretty(&reports)?);
    } else {
        for (idx, service) in services.iter().enumerate() {
            if idx > 0 {
                println!();
            }
            print_service(service);
        }
    }
    Ok(EXIT_SUCCESS)
}

fn print_service(service: &ServiceDescriptor) {
    println!("service: {}", display_name(service));
    if let Some(source) = service.source() {
        println!("  source: {source}");
    }
    if let Some(command) = service.command() {
        println!("  command: {command}");
    }
    println!("  scale: {}", service.scale());
    println!("  primary port: {}", format_port(service.min_port()));
    if !service.expose().is_empty() {
        let expose: Vec<String> = service.expose().iter().map(u32::to_string).collect();
        println!("  expose: {}", expose.join(", "));
    }
    for spec in service.ports() {
        match spec.resolve() {
            Some(p) => println!("  port: {}:{}", p.host_port, p.container_port),
            None => println!("  port: <unresolved>"),
        }
    }
    for var in service.environment() {
        println!("  env: {}={}", var.variable, var.value);
    }
    for volume in service.volumes() {
        println!("  volume: {}", volume.path);
    }
    for link in service.links() {
        println!("  link: {} as {}", link.name, link.alias);
    }
}
