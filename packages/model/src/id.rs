use crc32fast::Hasher;

/// Derive a stable scope seed from a scope name using CRC32.
pub fn scope_id(scope: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(scope.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential identity generator for records within one scope
/// (the components of a page, or the sites of a registry).
///
/// Identities are `"{seed}-{n}"`: opaque to callers, unique within the
/// scope, stable for the record's lifetime.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    count: u32,
}

impl IdGenerator {
    pub fn new(scope: &str) -> Self {
        Self {
            seed: scope_id(scope),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate the next identity.
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}
