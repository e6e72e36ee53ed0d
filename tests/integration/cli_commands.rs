//! CLI commands against a project directory with `projectkit.yaml`.

use crate::support::Fixture;
use clap::Parser;
use projectkit::error::{ApiError, RepositoryError};
use projectkit::resource::McpServer;
use projectkit::tooling::cli::{Cli, CliContext, Commands, OutputFormat, RepositoryKind, StoredKind};

fn project_with_sources() -> Fixture {
    let fixture = Fixture::new();
    fixture.skill("sources/skills", "lint", "Run the linter.\n");
    fixture.skill("sources/skills", "format", "Run the formatter.\n");
    fixture.write(
        "sources/mcp/docs.yaml",
        "name: docs\nurl: https://docs.example.com/mcp\n",
    );
    fixture.write(
        "projectkit.yaml",
        format!(
            "sources:\n  skills:\n    - {}\n  mcp_servers:\n    - {}\nagents:\n  - name: claude\n",
            fixture.uri("sources/skills"),
            fixture.uri("sources/mcp"),
        ),
    );
    fixture
}

fn context(fixture: &Fixture) -> CliContext {
    CliContext::new(fixture.dir.path().to_path_buf(), None).unwrap()
}

#[test]
fn loads_project_config_file() {
    let fixture = project_with_sources();
    let ctx = context(&fixture);
    assert_eq!(ctx.config().sources.skills.len(), 1);
    assert_eq!(ctx.config().agents[0].name, "claude");
}

#[test]
fn sync_list_show_clean_cycle() {
    let fixture = project_with_sources();
    let ctx = context(&fixture);

    let sync = ctx
        .execute(&Commands::Sync {
            kind: RepositoryKind::All,
        })
        .unwrap();
    assert!(sync.success);

    let list = ctx
        .execute(&Commands::List {
            kind: StoredKind::Skills,
            format: OutputFormat::Text,
        })
        .unwrap();
    assert!(list.text.contains("format"));
    assert!(list.text.contains("lint"));
    assert!(list.text.contains("Total: 2 skill(s)"));

    let servers = ctx
        .execute(&Commands::List {
            kind: StoredKind::McpServers,
            format: OutputFormat::Json,
        })
        .unwrap();
    let servers: Vec<McpServer> = serde_json::from_str(&servers.text).unwrap();
    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].url.as_deref(), Some("https://docs.example.com/mcp"));

    ctx.execute(&Commands::Clean {
        kind: RepositoryKind::All,
    })
    .unwrap();
    let list = ctx
        .execute(&Commands::List {
            kind: StoredKind::Skills,
            format: OutputFormat::Text,
        })
        .unwrap();
    assert_eq!(list.text, "No skills stored.");
}

#[test]
fn check_passes_when_every_kind_loads() {
    let fixture = project_with_sources();
    let out = context(&fixture)
        .execute(&Commands::Check {
            format: OutputFormat::Text,
        })
        .unwrap();
    assert!(out.success, "{}", out.text);
}

#[test]
fn missing_source_fails_sync_without_touching_repository() {
    let fixture = Fixture::new();
    fixture.write(
        "projectkit.yaml",
        format!("sources:\n  skills:\n    - {}\n", fixture.uri("gone")),
    );
    let ctx = context(&fixture);

    let err = ctx
        .execute(&Commands::Sync {
            kind: RepositoryKind::Skills,
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::SourceFailed { .. }));
    assert!(!fixture.path(".projectkit/repository/skills").exists());
}

#[test]
fn show_unknown_mcp_server() {
    let fixture = project_with_sources();
    let cli = Cli::try_parse_from(["projectkit", "show", "mcp-server", "nope"]).unwrap();
    let err = context(&fixture).execute(&cli.command).unwrap_err();
    assert!(matches!(
        err,
        ApiError::Repository(RepositoryError::ResourceNotFound { .. })
    ));
}

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["projectkit", "sources"],
        vec!["projectkit", "sources", "--format", "json"],
        vec!["projectkit", "check"],
        vec!["projectkit", "sync", "--kind", "mcp-servers"],
        vec!["projectkit", "list", "skills"],
        vec!["projectkit", "show", "skill", "lint", "--format", "json"],
        vec!["projectkit", "clean", "--kind", "skills"],
        vec!["projectkit", "--project", "/p", "--config", "/p/kit.yaml", "check"],
    ];
    for args in cases {
        assert!(Cli::try_parse_from(args.clone()).is_ok(), "expected valid parse for {:?}", args);
    }
}

#[test]
fn parse_rejects_unknown_kinds() {
    assert!(Cli::try_parse_from(["projectkit", "list", "workflows"]).is_err());
    assert!(Cli::try_parse_from(["projectkit", "sync", "--kind", "rulebooks"]).is_err());
    assert!(Cli::try_parse_from(["projectkit", "show", "skill"]).is_err());
}
