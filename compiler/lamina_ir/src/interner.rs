//! String interner for identifiers, member names and string literals.
//!
//! Provides O(1) interning and lookup with thread-safe access through a
//! single `RwLock`. Independent type-checking runs may share one interner.

use super::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// The table exceeded `u32` capacity.
    Overflow { count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::Overflow { count } => write!(
                f,
                "interner exceeded capacity: {count} strings, max is {}",
                u32::MAX
            ),
        }
    }
}

impl std::error::Error for InternError {}

/// Storage behind the lock.
struct InternTable {
    /// Map from string content to index.
    map: FxHashMap<&'static str, u32>,
    /// Storage for string contents, indexed by `Name`.
    strings: Vec<&'static str>,
}

impl InternTable {
    fn with_empty() -> Self {
        let mut table = InternTable {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(64),
        };
        // Pre-intern empty string at index 0
        let empty: &'static str = "";
        table.map.insert(empty, 0);
        table.strings.push(empty);
        table
    }
}

/// String interner.
///
/// # Thread Safety
/// Uses an `RwLock` so lookups proceed concurrently; only the first
/// occurrence of a string takes the write lock.
pub struct StringInterner {
    table: RwLock<InternTable>,
}

impl StringInterner {
    /// Create a new interner with the nominal names of the base types
    /// pre-interned.
    pub fn new() -> Self {
        let interner = Self {
            table: RwLock::new(InternTable::with_empty()),
        };
        for s in ["Bool", "Int", "Float", "String"] {
            interner.intern(s);
        }
        interner
    }

    /// Try to intern a string, returning its Name or an error on overflow.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        // Fast path: already interned
        if let Some(&index) = self.table.read().map.get(s) {
            return Ok(Name::from_raw(index));
        }

        let mut guard = self.table.write();

        // Double-check after acquiring write lock
        if let Some(&index) = guard.map.get(s) {
            return Ok(Name::from_raw(index));
        }

        let index = u32::try_from(guard.strings.len()).map_err(|_| InternError::Overflow {
            count: guard.strings.len(),
        })?;

        // Leak the string to get 'static lifetime; interned strings live for
        // the rest of the process.
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        guard.strings.push(leaked);
        guard.map.insert(leaked, index);

        Ok(Name::from_raw(index))
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if the interner exceeds capacity (over 4 billion strings).
    /// Use `try_intern` for fallible interning.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Look up a string that was already interned, without interning it.
    pub fn get(&self, s: &str) -> Option<Name> {
        self.table.read().map.get(s).copied().map(Name::from_raw)
    }

    /// Look up the string for a Name.
    ///
    /// Names from a different interner resolve to the empty string.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.table
            .read()
            .strings
            .get(name.index())
            .copied()
            .unwrap_or("")
    }

    /// Number of interned strings (including the empty string).
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    /// Always false: the empty string is pre-interned.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
