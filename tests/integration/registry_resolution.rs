//! Registry and resolver behavior with custom drivers.

use crate::support::Fixture;
use parking_lot::Mutex;
use projectkit::aggregate::SourceAggregator;
use projectkit::config::SourcesConfig;
use projectkit::error::{ApiError, SourceError};
use projectkit::fs::{FileSystem, MemFs};
use projectkit::source::{Driver, DriverRegistry, LocalDriver, Resolver};
use std::sync::Arc;
use std::thread;

/// In-memory driver for several schemes that records what it resolved.
struct MemoryDriver {
    schemes: Vec<String>,
    fs: Arc<MemFs>,
    resolved: Mutex<Vec<String>>,
}

impl MemoryDriver {
    fn new(schemes: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            schemes: schemes.iter().map(|s| s.to_string()).collect(),
            fs: Arc::new(MemFs::new()),
            resolved: Mutex::new(Vec::new()),
        })
    }
}

impl Driver for MemoryDriver {
    fn supported_schemes(&self) -> &[String] {
        &self.schemes
    }

    fn resolve(&self, uri: &str) -> Result<Arc<dyn FileSystem>, SourceError> {
        self.resolved.lock().push(uri.to_string());
        Ok(self.fs.clone())
    }
}

#[test]
fn multi_scheme_driver_is_shared() {
    let registry = DriverRegistry::new();
    let driver = MemoryDriver::new(&["mem", "memory"]);
    registry.register_driver(driver.clone()).unwrap();

    let a = registry.get_driver_by_scheme("mem").unwrap();
    let b = registry.get_driver_by_scheme("memory").unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(registry.schemes(), vec!["mem", "memory"]);
}

#[test]
fn conflicting_registration_inserts_nothing() {
    let registry = DriverRegistry::new();
    registry
        .register_driver(MemoryDriver::new(&["git"]))
        .unwrap();

    let err = registry
        .register_driver(MemoryDriver::new(&["s3", "git", "gcs"]))
        .unwrap_err();
    assert!(matches!(err, SourceError::SchemeDriverAlreadyRegistered(ref s) if s == "git"));
    assert!(matches!(
        registry.get_driver_by_scheme("s3").err().unwrap(),
        SourceError::SchemeDriverNotRegistered(_)
    ));
    assert!(registry.get_driver_by_scheme("gcs").is_err());
}

#[test]
fn full_uri_reaches_the_driver() {
    let registry = Arc::new(DriverRegistry::new());
    let driver = MemoryDriver::new(&["http"]);
    registry.register_driver(driver.clone()).unwrap();

    Resolver::new(registry)
        .resolve("http://host://extra")
        .unwrap();
    assert_eq!(*driver.resolved.lock(), vec!["http://host://extra"]);
}

#[test]
fn failing_source_stops_later_resolution() {
    let fixture = Fixture::new();
    fixture.workflow("ok", "a.yaml", "a");
    fixture.mkdir("empty");

    let registry = Arc::new(DriverRegistry::new());
    registry
        .register_driver(Arc::new(LocalDriver::new()))
        .unwrap();
    let later = MemoryDriver::new(&["mem"]);
    registry.register_driver(later.clone()).unwrap();

    let aggregator = SourceAggregator::new(Resolver::new(registry));
    let sources = SourcesConfig {
        workflows: vec![fixture.uri("ok"), fixture.uri("empty"), "mem://later".to_string()],
        ..SourcesConfig::default()
    };

    let err = aggregator.workflows(&sources).unwrap_err();
    assert!(matches!(err, ApiError::SourceFailed { ref uri, .. } if *uri == fixture.uri("empty")));
    assert!(later.resolved.lock().is_empty());
}

#[test]
fn concurrent_registration_and_resolution() {
    let registry = Arc::new(DriverRegistry::new());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let scheme = format!("s{}", i);
                registry
                    .register_driver(MemoryDriver::new(&[&scheme]))
                    .unwrap();
                Resolver::new(registry)
                    .resolve(&format!("{}://x", scheme))
                    .is_ok()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
    assert_eq!(registry.schemes().len(), 8);
}
