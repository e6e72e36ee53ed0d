//! Scheme → driver registry.

use super::driver::Driver;
use crate::error::SourceError;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of drivers keyed by scheme.
///
/// Registration takes the write lock for the whole check-and-insert, so a multi-scheme driver
/// is either fully registered or not at all. Lookups take the read lock.
#[derive(Default)]
pub struct DriverRegistry {
    drivers: RwLock<HashMap<String, Arc<dyn Driver>>>,
}

impl DriverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every scheme of `driver`, or none of them.
    ///
    /// Fails with `SchemeDriverAlreadyRegistered` naming the first scheme, in the driver's own
    /// order, that is already taken.
    pub fn register_driver(&self, driver: Arc<dyn Driver>) -> Result<(), SourceError> {
        let schemes = driver.supported_schemes();
        let mut drivers = self.drivers.write();

        if let Some(taken) = schemes
            .iter()
            .find(|scheme| drivers.contains_key(scheme.as_str()))
        {
            return Err(SourceError::SchemeDriverAlreadyRegistered(taken.clone()));
        }

        for scheme in schemes {
            drivers.insert(scheme.clone(), Arc::clone(&driver));
        }
        tracing::debug!(schemes = ?schemes, "Registered source driver");
        Ok(())
    }

    pub fn get_driver_by_scheme(&self, scheme: &str) -> Result<Arc<dyn Driver>, SourceError> {
        self.drivers
            .read()
            .get(scheme)
            .cloned()
            .ok_or_else(|| SourceError::SchemeDriverNotRegistered(scheme.to_string()))
    }

    /// Registered schemes, sorted.
    pub fn schemes(&self) -> Vec<String> {
        let mut schemes: Vec<String> = self.drivers.read().keys().cloned().collect();
        schemes.sort();
        schemes
    }
}
