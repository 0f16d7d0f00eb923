mod base;
mod bucket;
mod config;
mod cuckoo_filter;
mod hash;

pub use self::base::Filter;
pub use self::bucket::{Bucket, BUCKET_SIZE, EMPTY};
pub use self::config::{
    CuckooFilterConfig, CuckooFilterConfigBuilder, CuckooFilterConfigBuilderError,
    DEFAULT_BUCKET_OVERHEAD, DEFAULT_MAX_KICKS,
};
pub use self::cuckoo_filter::CuckooFilter;
pub use self::hash::{fingerprint, primary_hash};
