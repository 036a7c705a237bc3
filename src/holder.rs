use std::collections::HashMap;
use std::io::Write;
use std::iter::FromIterator;

use crate::error::{Error, Result};

/// An in-memory mapping from string keys to string values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyValueHolder {
    entries: HashMap<String, String>,
}

// Name of the static type behind a reference
#[inline]
fn type_name_of<T: ?Sized>(_: &T) -> &'static str {
    std::any::type_name::<T>()
}

impl KeyValueHolder {
    /// Create a holder with no entries.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Live view of the underlying mapping.
    pub fn entries(&self) -> &HashMap<String, String> {
        &self.entries
    }

    /// Live mutable view of the underlying mapping.
    ///
    /// Changes made through the returned reference are visible to every
    /// later call on this holder.
    pub fn entries_mut(&mut self) -> &mut HashMap<String, String> {
        &mut self.entries
    }

    /// Insert a value, returning the one it replaced (if any).
    pub fn insert(&mut self, key: String, value: String) -> Option<String> {
        log::debug!("insert {}", key);
        self.entries.insert(key, value)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Remove a key. Removing an absent key is a no-op and returns `None`.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        log::debug!("remove {}", key);
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write two lines per entry to `out`: the key's type, then the value's type.
    ///
    /// Entries come out in the map's iteration order, which is unspecified.
    pub fn write_entries(&self, out: &mut impl Write) -> Result<()> {
        log::debug!("writing {} entries", self.entries.len());

        for (key, value) in self.entries.iter() {
            writeln!(out, "Key type: {}", type_name_of(key))?;
            writeln!(out, "Value type: {}", type_name_of(value))?;
        }

        out.flush()?;

        Ok(())
    }

    /// Same as `write_entries`, targeting standard output.
    pub fn print_entries(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.write_entries(&mut handle)
    }
}

impl FromIterator<(String, String)> for KeyValueHolder {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<(String, String)> for KeyValueHolder {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

/// Split a `KEY=VALUE` pair on its first `=`.
///
/// The value may itself contain `=` and may be empty; the key may not.
pub fn parse_entry(raw: &str) -> Result<(String, String)> {
    let mut parts = raw.splitn(2, '=');

    match (parts.next(), parts.next()) {
        (Some(key), Some(value)) if !key.is_empty() => Ok((key.to_owned(), value.to_owned())),
        _ => Err(Error::InvalidEntry(raw.to_owned())),
    }
}
