//! `local://` sources on disk through resolver, loaders and aggregator.

use crate::support::{local_uri, Fixture};
use projectkit::aggregate::SourceAggregator;
use projectkit::config::SourcesConfig;
use projectkit::error::{ApiError, LoadError, SourceError};
use projectkit::fs::FileSystem;
use projectkit::loader::{InstructionLoader, ResourceLoader};
use projectkit::source::{DriverRegistry, LocalDriver, Resolver};
use projectkit::types::ResourceKind;
use std::io;
use std::path::Path;
use std::sync::Arc;

fn resolver() -> Resolver {
    let registry = Arc::new(DriverRegistry::new());
    registry
        .register_driver(Arc::new(LocalDriver::new()))
        .unwrap();
    Resolver::new(registry)
}

fn root_cause(err: SourceError) -> SourceError {
    match err {
        SourceError::Resolve { source, .. } => root_cause(*source),
        other => other,
    }
}

#[test]
fn missing_directory_is_distinct_from_empty_path() {
    let fixture = Fixture::new();
    let resolver = resolver();

    let missing = resolver.resolve(&fixture.uri("nope")).err().unwrap();
    assert!(matches!(root_cause(missing), SourceError::DirectoryNotFound(_)));

    let empty = resolver.resolve("local://").err().unwrap();
    assert!(matches!(root_cause(empty), SourceError::EmptyPath(_)));
}

#[test]
fn regular_file_is_not_a_source() {
    let fixture = Fixture::new();
    fixture.write("plain.yaml", "name: x\n");
    let err = resolver().resolve(&fixture.uri("plain.yaml")).err().unwrap();
    assert!(matches!(root_cause(err), SourceError::DirectoryNotFound(_)));
}

#[test]
fn resolved_source_is_read_only_and_scoped() {
    let fixture = Fixture::new();
    fixture.write("src/a.yaml", "name: a\n");
    fixture.write("secret.txt", "outside");

    let fs = resolver().resolve(&fixture.uri("src")).unwrap();
    assert_eq!(fs.read_to_string(Path::new("a.yaml")).unwrap(), "name: a\n");

    let write = fs.write(Path::new("b.yaml"), b"x").unwrap_err();
    assert_eq!(write.kind(), io::ErrorKind::PermissionDenied);
    assert!(!fixture.path("src/b.yaml").exists());

    let escape = fs.read(Path::new("../secret.txt")).unwrap_err();
    assert_eq!(escape.kind(), io::ErrorKind::InvalidInput);
}

#[test]
fn dot_segments_are_cleaned() {
    let fixture = Fixture::new();
    fixture.workflow("flows", "a.yaml", "a");
    fixture.mkdir("other");

    let uri = local_uri(&fixture.path("other/../flows/."));
    let fs = resolver().resolve(&uri).unwrap();
    assert!(fs.read(Path::new("a.yaml")).is_ok());
}

#[test]
fn one_yaml_among_other_files_yields_one_resource() {
    let fixture = Fixture::new();
    fixture.write("inst/README.md", "# not a resource");
    fixture.write(
        "inst/style.YML",
        "name: style\ninstructions:\n  - title: Tone\n    content: Be brief.\n",
    );
    fixture.mkdir("inst/drafts");

    let fs = resolver().resolve(&fixture.uri("inst")).unwrap();
    let sets = InstructionLoader::new().load(fs.as_ref()).unwrap();
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].instructions[0].content, "Be brief.");
}

#[test]
fn skills_keep_script_bytes_from_disk() {
    let fixture = Fixture::new();
    fixture.skill("skills", "pack", "");
    let bytes: Vec<u8> = (0u8..=255).rev().collect();
    fixture.write("skills/pack/scripts/blob", &bytes);
    fixture.write("skills/pack/scripts/build.py", "print('ok')\n");
    fixture.mkdir("skills/pack/scripts/lib");

    let aggregator = SourceAggregator::new(resolver());
    let sources = SourcesConfig {
        skills: vec![fixture.uri("skills")],
        ..SourcesConfig::default()
    };
    let skills = aggregator.skills(&sources).unwrap();
    assert_eq!(skills.len(), 1);

    let skill = &skills[0];
    assert_eq!(skill.instructions, "");
    assert_eq!(skill.scripts.len(), 2);
    assert_eq!(skill.scripts["blob"].content, bytes);
    assert_eq!(skill.scripts["blob"].content_type, "application/octet-stream");
    assert_eq!(skill.scripts["build.py"].content_type, "text/x-python");
}

#[test]
fn skill_without_instructions_fails_the_source() {
    let fixture = Fixture::new();
    fixture.write(
        "skills/half/metadata.yaml",
        "name: half\ndescription: incomplete\n",
    );

    let aggregator = SourceAggregator::new(resolver());
    let sources = SourcesConfig {
        skills: vec![fixture.uri("skills")],
        ..SourcesConfig::default()
    };
    let err = aggregator.skills(&sources).unwrap_err();
    assert!(matches!(
        err.innermost(),
        ApiError::Load(LoadError::ReadFailed {
            kind: ResourceKind::Skills,
            ..
        })
    ));
    assert_eq!(err.io_kind(), Some(io::ErrorKind::NotFound));
}

#[test]
fn sources_concatenate_in_configured_order() {
    let fixture = Fixture::new();
    fixture.workflow("team", "deploy.yaml", "deploy");
    fixture.workflow("team", "review.yaml", "review");
    fixture.workflow("personal", "scratch.yml", "scratch");

    let aggregator = SourceAggregator::new(resolver());
    let sources = SourcesConfig {
        workflows: vec![fixture.uri("personal"), fixture.uri("team")],
        ..SourcesConfig::default()
    };
    let mut names: Vec<String> = aggregator
        .workflows(&sources)
        .unwrap()
        .into_iter()
        .map(|w| w.name)
        .collect();

    // Directory listing order within one source is not fixed on disk.
    assert_eq!(names.remove(0), "scratch");
    names.sort();
    assert_eq!(names, vec!["deploy", "review"]);
}

#[test]
fn empty_source_directory_is_none_found() {
    let fixture = Fixture::new();
    fixture.mkdir("rules");

    let aggregator = SourceAggregator::new(resolver());
    let sources = SourcesConfig {
        rulebooks: vec![fixture.uri("rules")],
        ..SourcesConfig::default()
    };
    match aggregator.rulebooks(&sources).unwrap_err() {
        ApiError::SourceFailed { uri, source, .. } => {
            assert_eq!(uri, fixture.uri("rules"));
            assert!(matches!(
                *source,
                ApiError::Load(LoadError::NoneFound(ResourceKind::Rulebooks))
            ));
        }
        other => panic!("expected SourceFailed, got {:?}", other),
    }
}
