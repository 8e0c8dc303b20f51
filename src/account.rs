//! Account identifier set for fan-out dispatch.

/// One or many VTEX account identifiers targeted by a single update.
///
/// Order is preserved: dispatch results are aligned with the order the
/// identifiers were given in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountIds {
    /// A single account.
    One(String),
    /// An ordered set of accounts.
    Many(Vec<String>),
}

impl AccountIds {
    /// View the identifiers as an ordered slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::One(id) => std::slice::from_ref(id),
            Self::Many(ids) => ids,
        }
    }

    /// Number of accounts targeted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns true if no account is targeted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl From<&str> for AccountIds {
    fn from(id: &str) -> Self {
        Self::One(id.to_string())
    }
}

impl From<String> for AccountIds {
    fn from(id: String) -> Self {
        Self::One(id)
    }
}

impl From<Vec<String>> for AccountIds {
    fn from(ids: Vec<String>) -> Self {
        Self::Many(ids)
    }
}

impl From<Vec<&str>> for AccountIds {
    fn from(ids: Vec<&str>) -> Self {
        Self::Many(ids.into_iter().map(str::to_string).collect())
    }
}
