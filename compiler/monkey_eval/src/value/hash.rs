//! Hash keys and the ordered hash map behind `Value::Hash`.

use super::Value;
use rustc_hash::FxHashMap;

/// FNV-1a offset basis (64-bit).
const FNV_OFFSET_BASIS: u64 = 14_695_981_039_346_656_037;
/// FNV-1a prime (64-bit).
const FNV_PRIME: u64 = 1_099_511_628_211;

fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Which hashable variant a key came from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum HashTag {
    Integer,
    Boolean,
    String,
}

/// Identity of a hashable value: its variant plus a 64-bit digest.
///
/// Tagging keeps `1` and `true` distinct even though both digest to 1.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct HashKey {
    pub tag: HashTag,
    pub digest: u64,
}

impl HashKey {
    #[expect(
        clippy::cast_sign_loss,
        reason = "the digest reinterprets the integer's bits"
    )]
    /// Key of an integer; the digest is its bit pattern.
    pub fn integer(value: i64) -> Self {
        HashKey {
            tag: HashTag::Integer,
            digest: value as u64,
        }
    }

    /// Key of a boolean; the digest is 0 or 1.
    pub fn boolean(value: bool) -> Self {
        HashKey {
            tag: HashTag::Boolean,
            digest: u64::from(value),
        }
    }

    /// Key of a string; the digest is FNV-1a over its bytes.
    pub fn string(value: &str) -> Self {
        HashKey {
            tag: HashTag::String,
            digest: fnv1a(value.as_bytes()),
        }
    }
}

/// A stored entry: the original key value and its paired value.
#[derive(Clone, Debug, PartialEq)]
pub struct HashPair {
    pub key: Value,
    pub value: Value,
}

/// Insertion-ordered map from hash keys to pairs.
///
/// Re-inserting an existing key replaces the value in place, so the entry
/// keeps the position of its first insertion.
#[derive(Clone, Debug, Default)]
pub struct HashValue {
    entries: Vec<HashPair>,
    index: FxHashMap<HashKey, usize>,
}

impl HashValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `pair` under `key`, overwriting an existing entry in place.
    pub fn insert(&mut self, key: HashKey, pair: HashPair) {
        if let Some(&slot) = self.index.get(&key) {
            self.entries[slot] = pair;
        } else {
            self.index.insert(key, self.entries.len());
            self.entries.push(pair);
        }
    }

    /// The pair stored under `key`.
    pub fn get(&self, key: &HashKey) -> Option<&HashPair> {
        self.index.get(key).map(|&slot| &self.entries[slot])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pairs in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, HashPair> {
        self.entries.iter()
    }
}

impl PartialEq for HashValue {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}
