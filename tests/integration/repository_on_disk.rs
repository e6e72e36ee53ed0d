//! Repositories persisted under a project root.

use projectkit::config::RepositoryConfig;
use projectkit::error::RepositoryError;
use projectkit::repository::{McpServerRepository, SkillRepository};
use projectkit::resource::{McpServer, Script, Skill};
use std::collections::BTreeMap;
use std::fs;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

fn skill(name: &str) -> Skill {
    let mut scripts = BTreeMap::new();
    scripts.insert(
        "setup.sh".to_string(),
        Script {
            content_type: "application/x-sh".to_string(),
            content: b"#!/bin/sh\nset -e\n".to_vec(),
        },
    );
    Skill {
        name: name.to_string(),
        description: format!("{} description", name),
        instructions: "Step one.\nStep two.\n".to_string(),
        scripts,
    }
}

fn server(name: &str) -> McpServer {
    McpServer {
        name: name.to_string(),
        description: None,
        command: Some("npx".to_string()),
        args: vec!["-y".to_string(), format!("@mcp/{}", name)],
        env: BTreeMap::from([("TOKEN".to_string(), "t".to_string())]),
        url: None,
        headers: BTreeMap::new(),
    }
}

#[test]
fn default_layout_is_created_under_project() {
    let project = TempDir::new().unwrap();
    let layout = RepositoryConfig::default().layout(project.path());

    let skills = layout.open_skills().unwrap();
    skills.add_skill(&skill("review")).unwrap();

    let dir = project.path().join(".projectkit/repository/skills");
    let files: Vec<_> = fs::read_dir(&dir).unwrap().collect();
    assert_eq!(files.len(), 1);

    let reopened = layout.open_skills().unwrap();
    assert_eq!(reopened.get_skill_by_name("review").unwrap(), skill("review"));
}

#[test]
fn stored_file_is_pretty_json_with_base64_scripts() {
    let project = TempDir::new().unwrap();
    let layout = RepositoryConfig::default().layout(project.path());
    layout.open_skills().unwrap().add_skill(&skill("enc")).unwrap();

    let entry = fs::read_dir(layout.skills_dir())
        .unwrap()
        .next()
        .unwrap()
        .unwrap();
    let raw = fs::read_to_string(entry.path()).unwrap();
    assert!(raw.contains("\n  \"name\": \"enc\""));

    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value["scripts"]["setup.sh"]["content"],
        "IyEvYmluL3NoCnNldCAtZQo="
    );
}

#[test]
fn sorted_listing_and_clear() {
    let project = TempDir::new().unwrap();
    let skills = RepositoryConfig::default()
        .layout(project.path())
        .open_skills()
        .unwrap();
    for name in ["zebra", "alpha", "middle"] {
        skills.add_skill(&skill(name)).unwrap();
    }
    let names: Vec<String> = skills.get_all().unwrap().into_iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["alpha", "middle", "zebra"]);

    skills.remove_all().unwrap();
    skills.remove_all().unwrap();
    assert_eq!(skills.get_all().unwrap(), Vec::<Skill>::new());
    assert!(matches!(
        skills.get_skill_by_name("alpha"),
        Err(RepositoryError::SkillNotFound(_))
    ));
}

#[test]
fn mcp_servers_round_trip_on_disk() {
    let project = TempDir::new().unwrap();
    let servers = RepositoryConfig::default()
        .layout(project.path())
        .open_mcp_servers()
        .unwrap();
    servers.add_mcp_server(&server("fetch")).unwrap();
    servers.add_mcp_server(&server("fetch")).unwrap();

    assert_eq!(servers.get_all().unwrap(), vec![server("fetch"), server("fetch")]);
    assert_eq!(servers.get_mcp_server_by_name("fetch").unwrap(), server("fetch"));
}

#[test]
fn concurrent_duplicate_skill_adds_store_one() {
    let project = TempDir::new().unwrap();
    let skills = Arc::new(
        RepositoryConfig::default()
            .layout(project.path())
            .open_skills()
            .unwrap(),
    );

    let handles: Vec<_> = (0..6)
        .map(|_| {
            let skills = Arc::clone(&skills);
            thread::spawn(move || skills.add_skill(&skill("race")).is_ok())
        })
        .collect();
    let accepted = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();

    assert_eq!(accepted, 1);
    assert_eq!(skills.get_all().unwrap().len(), 1);
}
