//! String interner implementation using DashMap for concurrent access.
//!
//! The interner is a global table mapping strings to dense `u32` indices.
//! DashMap keeps lookups lock-free and `ahash` keeps hashing cheap; the
//! translator itself is single-threaded, but tests run concurrently against
//! the same global table.

use ahash::RandomState;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::LazyLock;

use super::Symbol;

/// Symbols pre-interned at startup, in index order.
///
/// The first twelve are the Devanagari keywords, followed by the two
/// standard-library entry points. The constants in `symbol/mod.rs` index
/// into this list, so the order here is load-bearing.
const KNOWN_SYMBOLS: &[&str] = &[
    "पूर्णांक", // int
    "दशमलव",  // float
    "वर्ण",    // char
    "शून्य",   // void
    "अगर",    // if
    "वरना",   // else
    "दौर",    // for
    "जबतक",   // while
    "करो",    // do
    "रुको",    // break
    "जारी",   // continue
    "वापस",   // return
    "लिखो",   // printf
    "पढ़ो",    // scanf
];

/// Global string table instance.
///
/// Initialized on first use via `LazyLock`. All known symbols are
/// pre-interned during initialization so they have stable indices.
pub static STRING_TABLE: LazyLock<StringTable> = LazyLock::new(|| {
    let table = StringTable::new();
    table.initialize_known_symbols();
    table
});

/// Thread-safe string table.
///
/// Strings are leaked to obtain `'static` references; the table lives for
/// the entire process and interned strings are never removed.
pub struct StringTable {
    /// Maps string content to its symbol index.
    map: DashMap<&'static str, u32, RandomState>,

    /// Maps symbol index back to string content.
    strings: DashMap<u32, &'static str, RandomState>,

    /// Counter for the next index (atomic for lock-free increment).
    next_index: AtomicU32,
}

impl StringTable {
    fn new() -> Self {
        Self {
            map: DashMap::with_capacity_and_hasher(256, RandomState::new()),
            strings: DashMap::with_capacity_and_hasher(256, RandomState::new()),
            next_index: AtomicU32::new(0),
        }
    }

    /// Pre-intern all known keyword and standard-library symbols.
    ///
    /// Must run before any other interning so the indices match the
    /// constants in `symbol/mod.rs`.
    fn initialize_known_symbols(&self) {
        for text in KNOWN_SYMBOLS {
            self.intern(text);
        }
    }

    /// Intern a string, returning its symbol.
    ///
    /// Returns the existing symbol if the string was interned before,
    /// otherwise allocates a new slot.
    pub fn intern(&self, text: &str) -> Symbol {
        if let Some(index) = self.map.get(text) {
            return Symbol(*index);
        }

        let leaked: &'static str = Box::leak(text.to_owned().into_boxed_str());
        let index = self.next_index.fetch_add(1, Ordering::SeqCst);

        // A concurrent intern of the same string may have won the race;
        // entry() keeps the first index and the duplicate slot is wasted.
        let index = *self.map.entry(leaked).or_insert(index);
        self.strings.entry(index).or_insert(leaked);

        Symbol(index)
    }

    /// Resolve a symbol index back to its string.
    pub fn resolve(&self, index: u32) -> &'static str {
        self.strings.get(&index).map(|s| *s).unwrap_or("")
    }

    /// Number of interned strings.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the table holds no strings at all.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
