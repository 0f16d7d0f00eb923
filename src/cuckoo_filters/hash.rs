use xxhash_rust::xxh3::xxh3_64_with_seed;

const ACCUMULATOR_SEED: u32 = 5381;
const ODD_MULTIPLIER: u32 = 1566083941;

const INDEX_SEED: u64 = 0;
const FINGERPRINT_SEED: u64 = 64;

/// Double-accumulator rolling hash of the item.
///
/// Even-indexed bytes are folded into one accumulator and odd-indexed bytes
/// into the other, both as `acc = (acc << 5) + acc ^ byte`. Bytes are sign
/// extended before folding, so values above 0x7f hash as negative chars.
pub fn primary_hash(value: &[u8]) -> i32 {
    let mut even = ACCUMULATOR_SEED;
    let mut odd = ACCUMULATOR_SEED;
    for pair in value.chunks(2) {
        even = fold(even, pair[0]);
        if let Some(&byte) = pair.get(1) {
            odd = fold(odd, byte);
        }
    }
    even.wrapping_add(odd.wrapping_mul(ODD_MULTIPLIER)) as i32
}

fn fold(acc: u32, byte: u8) -> u32 {
    (acc << 5).wrapping_add(acc) ^ (byte as i8 as u32)
}

/// 8-bit fingerprint of a primary hash, never 0 (the empty slot marker).
pub fn fingerprint(hash: i32) -> u8 {
    // truncating remainder, then keep the low byte
    match (hash % 255) as u8 {
        0 => 1,
        fp => fp,
    }
}

/// Mixing hash applied on top of the primary hash to pick the first bucket.
pub fn index_hash(hash: i32) -> u64 {
    xxh3_64_with_seed(&hash.to_le_bytes(), INDEX_SEED)
}

/// Mixing hash of a fingerprint, the XOR offset between the two candidate buckets.
pub fn fingerprint_hash(fingerprint: u8) -> u64 {
    xxh3_64_with_seed(&[fingerprint], FINGERPRINT_SEED)
}
