//! Schema module - Configuration types for load-and-transform pipelines.

mod pipeline;

pub use pipeline::*;
