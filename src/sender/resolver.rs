//! Sender override resolution.

/// Snapshot of the stored sender overrides.
///
/// Resolution is pure and total: a stored, non-empty value replaces the
/// original; an absent or empty value leaves the original unchanged. An
/// explicitly saved empty string therefore means "use the default".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SenderOverride {
    name: Option<String>,
    email: Option<String>,
}

impl SenderOverride {
    /// Create a new override snapshot from stored values.
    pub fn new(name: Option<String>, email: Option<String>) -> Self {
        Self { name, email }
    }

    /// Resolve the effective sender display name.
    ///
    /// Returns the stored name if present and non-empty, otherwise the
    /// original unchanged.
    pub fn resolve_from_name(&self, original: &str) -> String {
        match &self.name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => original.to_string(),
        }
    }

    /// Resolve the effective sender email address.
    ///
    /// Returns the stored email if present and non-empty, otherwise the
    /// original unchanged.
    pub fn resolve_from_email(&self, original: &str) -> String {
        match &self.email {
            Some(email) if !email.is_empty() => email.clone(),
            _ => original.to_string(),
        }
    }
}
