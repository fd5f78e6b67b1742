//! Best-effort version keys for directory names that are not strict semver.
//!
//! A key is split on `.`, and every segment is split again into runs of ASCII
//! digits and runs of everything else. `1.0rc1` therefore becomes
//! `[1, 0, "rc", 1]` and `not-a-version` becomes a single text component.

use std::cmp::Ordering;

/// One comparable piece of a [`LooseVersion`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Component {
    /// A run of non-digit characters, compared as a string.
    Text(String),

    /// A run of ASCII digits with leading zeros trimmed.
    ///
    /// Kept as a string so arbitrarily long numbers never overflow; two numbers
    /// compare by digit count first, then lexically.
    Number(String),
}

impl Component {
    fn from_run(run: &str, digits: bool) -> Self {
        if digits {
            let trimmed = run.trim_start_matches('0');
            let value = if trimmed.is_empty() { "0" } else { trimmed };
            Self::Number(value.to_string())
        } else {
            Self::Text(run.to_string())
        }
    }
}

impl Ord for Component {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Text(_), Self::Number(_)) => Ordering::Less,
            (Self::Number(_), Self::Text(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Component {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A tolerant version key.
///
/// Ordering is component-wise; a key that is a prefix of another sorts first,
/// so `1.2` < `1.2.0` < `1.2.1`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct LooseVersion {
    components: Vec<Component>,
}

impl LooseVersion {
    /// Split `key` into components. Never fails.
    #[must_use]
    pub fn parse(key: &str) -> Self {
        let mut components = Vec::new();

        for segment in key.split('.') {
            let mut rest = segment;

            while let Some(first) = rest.chars().next() {
                let digits = first.is_ascii_digit();
                let end = rest
                    .find(|c: char| c.is_ascii_digit() != digits)
                    .unwrap_or(rest.len());
                let (run, tail) = rest.split_at(end);

                components.push(Component::from_run(run, digits));
                rest = tail;
            }
        }

        Self { components }
    }

    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.components
    }
}
