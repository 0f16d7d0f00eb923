mod cuckoo_filters;
pub mod error;
mod registry;

pub use crate::cuckoo_filters::{
    fingerprint, primary_hash, Bucket, CuckooFilter, CuckooFilterConfig,
    CuckooFilterConfigBuilder, CuckooFilterConfigBuilderError, Filter, BUCKET_SIZE,
    DEFAULT_BUCKET_OVERHEAD, DEFAULT_MAX_KICKS, EMPTY,
};
pub use crate::error::Error;
pub use crate::registry::FilterRegistry;
