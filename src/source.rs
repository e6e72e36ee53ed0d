//! Source resolution
//!
//! Turns opaque `scheme://…` URIs into read-only filesystem capabilities. A `DriverRegistry`
//! maps schemes to `Driver`s and the `Resolver` dispatches on the scheme of each URI. The
//! registry is an explicit value owned by the composition root; there is no global instance.

pub mod driver;
pub mod local;
pub mod path;
pub mod registry;
pub mod resolver;

pub use driver::{split_scheme, Driver, SCHEME_SEPARATOR};
pub use local::{LocalDriver, LOCAL_SCHEME};
pub use path::clean_path;
pub use registry::DriverRegistry;
pub use resolver::Resolver;
