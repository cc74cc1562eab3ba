//! Encoded secret - the persisted form of a password
//!
//! Layout: `<hex salt>.<hex derived key>`. Hex digits never contain the
//! separator, so a well-formed secret splits into exactly two parts.

use std::fmt;

/// Separator between the salt and the derived key
pub const SECRET_SEPARATOR: char = '.';

/// Salt and derived key joined by [`SECRET_SEPARATOR`]
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedSecret(String);

impl EncodedSecret {
    /// Join a hex salt and a hex derived key
    pub fn compose(salt_hex: &str, key_hex: &str) -> Self {
        Self(format!("{salt_hex}{SECRET_SEPARATOR}{key_hex}"))
    }

    /// Wrap a value read back from a store
    ///
    /// No validation happens here: rows written by older code or corrupted
    /// in storage still load, and simply fail to verify.
    pub fn from_stored(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Split into `(salt, key)`
    ///
    /// Returns `None` unless both sides are non-empty lowercase hex.
    pub fn parts(&self) -> Option<(&str, &str)> {
        let (salt, key) = self.0.split_once(SECRET_SEPARATOR)?;
        (is_lower_hex(salt) && is_lower_hex(key)).then_some((salt, key))
    }

    /// The hex salt, if the secret is well formed
    pub fn salt(&self) -> Option<&str> {
        self.parts().map(|(salt, _)| salt)
    }

    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.parts().is_some()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

fn is_lower_hex(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

// The derived key never shows up in logs.
impl fmt::Debug for EncodedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.salt() {
            Some(salt) => write!(f, "EncodedSecret({salt}{SECRET_SEPARATOR}<redacted>)"),
            None => f.write_str("EncodedSecret(<malformed>)"),
        }
    }
}

impl AsRef<str> for EncodedSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
