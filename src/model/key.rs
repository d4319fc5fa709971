use std::fmt;

/// A record stored in one of the collections.
///
/// Every record carries an integer primary key and knows which collection
/// it belongs to.
pub trait Record {
    /// Collection name, used in logs and load errors.
    const COLLECTION: &'static str;

    fn id(&self) -> i64;
}

/// A statically typed integer field of `T`.
///
/// Keys replace string-based field dispatch: each record type exposes one
/// constant per integer field, and relation lookups take the key rather
/// than a field name.
pub struct Key<T> {
    name: &'static str,
    get: fn(&T) -> i64,
}

impl<T> Key<T> {
    pub const fn new(name: &'static str, get: fn(&T) -> i64) -> Self {
        Self { name, get }
    }

    /// Read this field from a record.
    pub fn get(&self, record: &T) -> i64 {
        (self.get)(record)
    }
}

// Manual impls: derives would wrongly require `T: Clone`/`T: Copy`.
impl<T> Clone for Key<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Key<T> {}

impl<T> fmt::Debug for Key<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Key").field(&self.name).finish()
    }
}
