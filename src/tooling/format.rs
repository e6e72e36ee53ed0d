//! Text rendering for CLI reports.

use crate::config::SourcesConfig;
use crate::error::ApiError;
use crate::resource::{McpServer, Skill};
use crate::types::ResourceKind;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::Serialize;

/// Section heading in bold and underlined.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ApiError::ConfigError(format!("Failed to serialize output: {}", e)))
}

fn table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(header);
    table
}

pub fn format_sources_text(sources: &SourcesConfig, schemes: &[String]) -> String {
    let mut out = format!("{}\n\n", format_section_heading("Sources"));
    let mut rows = table(vec!["Kind", "URI"]);
    for kind in ResourceKind::ALL {
        let uris = sources.uris(kind);
        if uris.is_empty() {
            rows.add_row(vec![kind.to_string(), "-".to_string()]);
        }
        for uri in uris {
            rows.add_row(vec![kind.to_string(), uri.clone()]);
        }
    }
    out.push_str(&format!("{}\n\n", rows));
    out.push_str(&format!(
        "{}\n  {}\n",
        format_section_heading("Registered schemes"),
        schemes.join(", ")
    ));
    out
}

/// One row of the `check` report.
#[derive(Debug, Clone, Serialize)]
pub struct CheckEntry {
    pub kind: &'static str,
    pub sources: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loaded: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn format_check_text(entries: &[(ResourceKind, CheckEntry)]) -> String {
    let mut out = format!("{}\n\n", format_section_heading("Source check"));
    let mut rows = table(vec!["Kind", "Sources", "Result"]);
    for (kind, entry) in entries {
        let result = match (&entry.loaded, &entry.error) {
            (_, Some(error)) => format!("{} {}", "error:".red(), error),
            (Some(count), None) => format!("{} loaded", count),
            (None, None) => "-".to_string(),
        };
        rows.add_row(vec![kind.to_string(), entry.sources.to_string(), result]);
    }
    let failed = entries.iter().filter(|(_, e)| e.error.is_some()).count();
    out.push_str(&format!("{}\n\n", rows));
    if failed == 0 {
        out.push_str(&format!("{}", "All sources loaded".green()));
    } else {
        out.push_str(&format!("{}", format!("{} kind(s) failed", failed).red()));
    }
    out
}

pub fn format_skills_text(skills: &[Skill]) -> String {
    if skills.is_empty() {
        return "No skills stored.".to_string();
    }
    let mut rows = table(vec!["Name", "Description", "Scripts"]);
    for skill in skills {
        rows.add_row(vec![
            skill.name.clone(),
            skill.description.clone(),
            skill.scripts.len().to_string(),
        ]);
    }
    format!(
        "{}\n\n{}\n\nTotal: {} skill(s)",
        format_section_heading("Skills"),
        rows,
        skills.len()
    )
}

fn transport(server: &McpServer) -> (&'static str, String) {
    match (&server.command, &server.url) {
        (Some(command), _) => {
            let mut line = command.clone();
            for arg in &server.args {
                line.push(' ');
                line.push_str(arg);
            }
            ("stdio", line)
        }
        (None, Some(url)) => ("http", url.clone()),
        (None, None) => ("-", String::new()),
    }
}

pub fn format_mcp_servers_text(servers: &[McpServer]) -> String {
    if servers.is_empty() {
        return "No MCP servers stored.".to_string();
    }
    let mut rows = table(vec!["Name", "Transport", "Target"]);
    for server in servers {
        let (kind, target) = transport(server);
        rows.add_row(vec![server.name.clone(), kind.to_string(), target]);
    }
    format!(
        "{}\n\n{}\n\nTotal: {} server(s)",
        format_section_heading("MCP servers"),
        rows,
        servers.len()
    )
}

pub fn format_skill_text(skill: &Skill) -> String {
    let mut out = format!("{}\n", format_section_heading(&skill.name));
    out.push_str(&format!("{}\n\n", skill.description));
    if skill.instructions.is_empty() {
        out.push_str("(no instructions)\n");
    } else {
        out.push_str(&skill.instructions);
        if !skill.instructions.ends_with('\n') {
            out.push('\n');
        }
    }
    if !skill.scripts.is_empty() {
        let mut rows = table(vec!["Script", "Content type", "Bytes"]);
        for (name, script) in &skill.scripts {
            rows.add_row(vec![
                name.clone(),
                script.content_type.clone(),
                script.content.len().to_string(),
            ]);
        }
        out.push_str(&format!("\n{}\n", rows));
    }
    out
}

pub fn format_mcp_server_text(server: &McpServer) -> String {
    let (kind, target) = transport(server);
    let mut out = format!("{}\n", format_section_heading(&server.name));
    if let Some(description) = &server.description {
        out.push_str(&format!("{}\n", description));
    }
    out.push_str(&format!("  Transport: {}\n  Target: {}\n", kind, target));
    for (key, value) in &server.env {
        out.push_str(&format!("  env {}={}\n", key, value));
    }
    for key in server.headers.keys() {
        // Header values routinely carry credentials.
        out.push_str(&format!("  header {}: ***\n", key));
    }
    out
}
