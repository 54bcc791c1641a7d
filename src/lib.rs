pub mod chain;
pub mod config;
pub mod dataset;
pub mod enrich;
pub mod error;
pub mod index;
pub mod ingest;
pub mod model;
pub mod snapshot;
pub mod stats;

pub use config::Config;
pub use dataset::RawDataset;
pub use enrich::EnrichedDataset;
pub use error::{MediagraphError, Result};
pub use chain::{resolve_ultimate_owners, UltimateOwner};
