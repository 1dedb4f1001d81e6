//! Shared data types

pub mod types;

pub use types::{HeadersDict, HttpMethod, RequestDescriptor, ShellFlavor};
