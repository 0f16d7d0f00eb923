use crate::cuckoo_filters::bucket::{Bucket, BUCKET_SIZE};
use crate::cuckoo_filters::config::CuckooFilterConfig;
use crate::cuckoo_filters::hash::{fingerprint, fingerprint_hash, index_hash, primary_hash};
use crate::cuckoo_filters::Filter;
use crate::error::Error;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Approximate set of byte strings backed by 8-bit fingerprints.
///
/// Every item has two candidate buckets, `i1` picked from its hash and `i2`
/// derived from `i1` and the fingerprint alone, so a fingerprint can be moved
/// to its other bucket without knowing the item it came from. The filter never
/// grows: when both candidates are full an eviction chain of at most
/// `max_kicks` swaps tries to make room.
///
/// Unlike a classic cuckoo filter this one is a set. Inserting an item whose
/// fingerprint is already in one of its candidate buckets is rejected.
///
/// ```
/// use c_f::CuckooFilter;
///
/// let mut filter = CuckooFilter::new(6);
/// assert!(filter.insert(b"video1"));
/// assert!(filter.lookup(b"video1"));
/// assert!(!filter.insert(b"video1"));
/// ```
#[derive(Debug, Clone)]
pub struct CuckooFilter<R = StdRng> {
    buckets: Vec<Bucket>,
    max_kicks: usize,
    // number of stored fingerprints
    len: usize,
    rng: R,
}

impl CuckooFilter<StdRng> {
    /// n -- number of elements to insert
    pub fn new(n: u32) -> Self {
        Self::from_config(&CuckooFilterConfig::new(n))
    }

    /// Seeded from the config when it carries a seed, from OS entropy otherwise.
    pub fn from_config(config: &CuckooFilterConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_config_and_rng(config, rng)
    }
}

impl<R: Rng> CuckooFilter<R> {
    /// Filter for `n` elements whose eviction choices are drawn from `rng`.
    pub fn with_rng(n: u32, rng: R) -> Self {
        Self::with_config_and_rng(&CuckooFilterConfig::new(n), rng)
    }

    pub fn with_config_and_rng(config: &CuckooFilterConfig, rng: R) -> Self {
        Self {
            buckets: vec![Bucket::new(); config.buckets_len()],
            max_kicks: config.max_kicks(),
            len: 0,
            rng,
        }
    }

    pub fn insert(&mut self, value: &[u8]) -> bool {
        self.try_insert(value).is_ok()
    }

    /// Same as [`insert`](Self::insert) but reports why the value was not stored.
    ///
    /// A failed eviction chain is rolled back, the filter is left exactly as
    /// it was before the call.
    pub fn try_insert(&mut self, value: &[u8]) -> Result<(), Error> {
        let (fp, i1, i2) = self.candidates(value);
        if self.buckets[i1].contains(fp) || self.buckets[i2].contains(fp) {
            return Err(Error::AlreadyPresent);
        }

        if self.buckets[i1].insert(fp) || self.buckets[i2].insert(fp) {
            self.len += 1;
            return Ok(());
        }

        let start = if self.rng.gen_bool(0.5) { i1 } else { i2 };
        debug!(
            bucket = start,
            len = self.len,
            capacity = self.capacity(),
            "candidate buckets are full, relocating"
        );
        self.insert_with_relocation(fp, start)?;
        self.len += 1;
        Ok(())
    }

    fn insert_with_relocation(&mut self, mut fp: u8, mut i: usize) -> Result<(), Error> {
        // (bucket, slot, previous occupant) of every swap, replayed backwards on failure
        let mut journal = Vec::with_capacity(self.max_kicks);
        for _ in 0..self.max_kicks {
            let slot = self.rng.gen_range(0..BUCKET_SIZE);
            let evicted = self.buckets[i].get(slot)?;
            self.buckets[i].set(slot, fp)?;
            journal.push((i, slot, evicted));

            fp = evicted;
            i = alt_index(i, fp, self.buckets.len());
            if self.buckets[i].insert(fp) {
                return Ok(());
            }
        }

        for (i, slot, evicted) in journal.into_iter().rev() {
            self.buckets[i].set(slot, evicted)?;
        }
        debug!(
            kicks = self.max_kicks,
            len = self.len,
            capacity = self.capacity(),
            "eviction chain exhausted"
        );
        Err(Error::NotEnoughSpace {
            kicks: self.max_kicks,
        })
    }
}

impl<R> CuckooFilter<R> {
    pub fn lookup(&self, value: &[u8]) -> bool {
        let (fp, i1, i2) = self.candidates(value);
        self.buckets[i1].contains(fp) || self.buckets[i2].contains(fp)
    }

    /// fingerprint and both candidate bucket indices of a value
    fn candidates(&self, value: &[u8]) -> (u8, usize, usize) {
        let hash = primary_hash(value);
        let fp = fingerprint(hash);
        let i1 = (index_hash(hash) % self.buckets.len() as u64) as usize;
        let i2 = alt_index(i1, fp, self.buckets.len());
        (fp, i1, i2)
    }

    /// number of buckets
    pub fn get_size(&self) -> usize {
        self.buckets.len()
    }

    pub fn buckets_len(&self) -> usize {
        self.get_size()
    }

    /// total number of fingerprint slots
    pub fn capacity(&self) -> usize {
        self.buckets.len() * BUCKET_SIZE
    }

    /// number of values stored so far
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }
}

impl Filter for CuckooFilter<StdRng> {
    fn new(n: u32) -> Self {
        CuckooFilter::new(n)
    }

    fn insert(&mut self, value: &[u8]) -> bool {
        CuckooFilter::insert(self, value)
    }

    fn lookup(&self, value: &[u8]) -> bool {
        CuckooFilter::lookup(self, value)
    }

    fn get_size(&self) -> usize {
        CuckooFilter::get_size(self)
    }
}

/// The other candidate bucket of a fingerprint stored in bucket `i`.
///
/// With a power-of-two bucket count this is `i ^ (hash(fp) % buckets_len)`.
/// Other counts are not closed under XOR, so the offset is reflected instead:
/// `(hash(fp) - i) mod buckets_len`. Both stay in range and are their own
/// inverse, so the pair can be recomputed from the fingerprint alone.
fn alt_index(i: usize, fp: u8, buckets_len: usize) -> usize {
    let offset = (fingerprint_hash(fp) % buckets_len as u64) as usize;
    if buckets_len.is_power_of_two() {
        i ^ offset
    } else {
        (offset + buckets_len - i % buckets_len) % buckets_len
    }
}
