use derive_builder::Builder;

/// maximum number of kicks before an insert gives up
pub const DEFAULT_MAX_KICKS: usize = 500;

/// buckets allocated per expected item
pub const DEFAULT_BUCKET_OVERHEAD: f64 = 1.06;

/// Construction parameters of a [`CuckooFilter`](crate::CuckooFilter).
///
/// ```
/// use c_f::CuckooFilterConfigBuilder;
///
/// let config = CuckooFilterConfigBuilder::default()
///     .expected_count(1_000)
///     .seed(7)
///     .build()
///     .unwrap();
/// assert_eq!(config.buckets_len(), 1060);
/// assert_eq!(config.max_kicks(), 500);
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
#[builder(pattern = "owned", build_fn(validate = "Self::validate"))]
pub struct CuckooFilterConfig {
    /// number of distinct items the filter is sized for
    expected_count: u32,

    #[builder(default = "DEFAULT_MAX_KICKS")]
    max_kicks: usize,

    #[builder(default = "DEFAULT_BUCKET_OVERHEAD")]
    bucket_overhead: f64,

    /// fixes the eviction choices, entropy seeded when absent
    #[builder(default, setter(strip_option))]
    seed: Option<u64>,
}

impl CuckooFilterConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.max_kicks == Some(0) {
            return Err("max_kicks must be greater than zero".to_string());
        }
        if let Some(overhead) = self.bucket_overhead {
            if !overhead.is_finite() || overhead < 1.0 {
                return Err(format!(
                    "bucket_overhead must be finite and at least 1.0, got {overhead}"
                ));
            }
        }
        Ok(())
    }
}

impl CuckooFilterConfig {
    /// Default configuration for `expected_count` items.
    pub fn new(expected_count: u32) -> Self {
        Self {
            expected_count,
            max_kicks: DEFAULT_MAX_KICKS,
            bucket_overhead: DEFAULT_BUCKET_OVERHEAD,
            seed: None,
        }
    }

    pub fn expected_count(&self) -> u32 {
        self.expected_count
    }

    pub fn max_kicks(&self) -> usize {
        self.max_kicks
    }

    pub fn bucket_overhead(&self) -> f64 {
        self.bucket_overhead
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// ceil(expected_count * bucket_overhead), at least one bucket
    pub fn buckets_len(&self) -> usize {
        ((self.expected_count as f64 * self.bucket_overhead).ceil() as usize).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CuckooFilterConfigBuilder::default()
            .expected_count(16)
            .build()
            .unwrap();
        assert_eq!(config, CuckooFilterConfig::new(16));
        assert_eq!(config.max_kicks(), DEFAULT_MAX_KICKS);
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn buckets_len_rounds_up() {
        assert_eq!(CuckooFilterConfig::new(6).buckets_len(), 7);
        assert_eq!(CuckooFilterConfig::new(16).buckets_len(), 17);
        assert_eq!(CuckooFilterConfig::new(50).buckets_len(), 53);
        assert_eq!(CuckooFilterConfig::new(0).buckets_len(), 1);
    }

    #[test]
    fn custom_overhead() {
        let config = CuckooFilterConfigBuilder::default()
            .expected_count(10)
            .bucket_overhead(1.5)
            .build()
            .unwrap();
        assert_eq!(config.buckets_len(), 15);
    }

    #[test]
    fn missing_expected_count_is_rejected() {
        let res = CuckooFilterConfigBuilder::default().seed(1).build();
        assert!(matches!(
            res,
            Err(CuckooFilterConfigBuilderError::UninitializedField("expected_count"))
        ));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let res = CuckooFilterConfigBuilder::default()
            .expected_count(10)
            .max_kicks(0)
            .build();
        assert!(matches!(res, Err(CuckooFilterConfigBuilderError::ValidationError(_))));

        let res = CuckooFilterConfigBuilder::default()
            .expected_count(10)
            .bucket_overhead(0.5)
            .build();
        assert!(matches!(res, Err(CuckooFilterConfigBuilderError::ValidationError(_))));

        let res = CuckooFilterConfigBuilder::default()
            .expected_count(10)
            .bucket_overhead(f64::NAN)
            .build();
        assert!(matches!(res, Err(CuckooFilterConfigBuilderError::ValidationError(_))));
    }
}
