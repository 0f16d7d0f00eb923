use crate::error::Error;

/// number of fingerprint slots in every bucket
pub const BUCKET_SIZE: usize = 4;

/// slot value that marks an empty slot, never a real fingerprint
pub const EMPTY: u8 = 0;

/// Fixed-capacity holder of fingerprints. Knows nothing about hashing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bucket {
    slots: [u8; BUCKET_SIZE],
}

impl Bucket {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, index: usize, value: u8) -> Result<(), Error> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(Error::SlotOutOfRange { index })?;
        *slot = value;
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<u8, Error> {
        self.slots
            .get(index)
            .copied()
            .ok_or(Error::SlotOutOfRange { index })
    }

    /// Puts the fingerprint into the first empty slot, returns false when the bucket is full.
    pub fn insert(&mut self, fingerprint: u8) -> bool {
        match self.slots.iter_mut().find(|slot| **slot == EMPTY) {
            Some(slot) => {
                *slot = fingerprint;
                true
            }
            None => false,
        }
    }

    pub fn find_slot(&self, fingerprint: u8) -> Option<usize> {
        self.slots.iter().position(|&slot| slot == fingerprint)
    }

    pub fn contains(&self, fingerprint: u8) -> bool {
        self.find_slot(fingerprint).is_some()
    }

    /// number of occupied slots
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|&&slot| slot != EMPTY).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() == BUCKET_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_bucket_is_empty() {
        let bucket = Bucket::new();
        for i in 0..BUCKET_SIZE {
            assert_eq!(bucket.get(i), Ok(EMPTY));
        }
        assert!(bucket.is_empty());
        assert!(!bucket.is_full());
    }

    #[test]
    fn insert_fills_from_first_slot() {
        let mut bucket = Bucket::new();
        assert!(bucket.insert(7));
        assert_eq!(bucket.get(0), Ok(7));
        assert_eq!(bucket.find_slot(7), Some(0));

        assert!(bucket.insert(8));
        assert!(bucket.insert(9));
        assert!(bucket.insert(10));
        assert!(bucket.is_full());
        assert!(!bucket.insert(11), "full bucket accepted a fingerprint!");
        assert_eq!(bucket.find_slot(11), None);
    }

    #[test]
    fn insert_reuses_cleared_slot() {
        let mut bucket = Bucket::new();
        for fp in 1..=4 {
            assert!(bucket.insert(fp));
        }
        bucket.set(2, EMPTY).unwrap();
        assert_eq!(bucket.len(), 3);
        assert!(bucket.insert(42));
        assert_eq!(bucket.find_slot(42), Some(2));
    }

    #[test]
    fn find_slot_returns_first_match() {
        let mut bucket = Bucket::new();
        bucket.set(1, 5).unwrap();
        bucket.set(3, 5).unwrap();
        assert_eq!(bucket.find_slot(5), Some(1));
        assert!(bucket.contains(5));
        assert!(!bucket.contains(6));
    }

    #[test]
    fn out_of_range_slot_is_rejected() {
        let mut bucket = Bucket::new();
        assert_eq!(bucket.set(4, 1), Err(Error::SlotOutOfRange { index: 4 }));
        assert_eq!(bucket.get(17), Err(Error::SlotOutOfRange { index: 17 }));
        assert!(bucket.is_empty(), "rejected write changed the bucket!");
    }
}
