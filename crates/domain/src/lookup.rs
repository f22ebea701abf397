use crate::errors::DomainError;

/// Raw lookup parameters as received from the request surface.
///
/// Exactly one of `domain` / `domains` must be set; `domains` is a
/// comma-separated list.
#[derive(Debug, Clone, Default)]
pub struct LookupRequest {
    pub domain: Option<String>,
    pub domains: Option<String>,
}

impl LookupRequest {
    pub fn single(domain: impl Into<String>) -> Self {
        Self {
            domain: Some(domain.into()),
            domains: None,
        }
    }

    pub fn list(domains: impl Into<String>) -> Self {
        Self {
            domain: None,
            domains: Some(domains.into()),
        }
    }

    /// Validates the parameter combination and returns the trimmed domains
    /// to look up, in input order. Duplicates are preserved here; the
    /// result assembly resolves them last-write-wins.
    pub fn requested_domains(&self) -> Result<Vec<String>, DomainError> {
        match (&self.domain, &self.domains) {
            (Some(_), Some(_)) => Err(DomainError::InvalidQuery(
                "Both domains and domain parameters cannot be provided simultaneously."
                    .to_string(),
            )),
            (Some(domain), None) => Ok(vec![domain.trim().to_string()]),
            (None, Some(domains)) => Ok(domains
                .split(',')
                .map(|d| d.trim().to_string())
                .collect()),
            (None, None) => Err(DomainError::InvalidQuery(
                "No valid parameters provided.".to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupEntry {
    pub domain: String,
    pub blocked: bool,
}

/// Ordered domain -> blocked mapping.
///
/// Keys appear in first-occurrence order of the query; inserting an existing
/// key overwrites its flag in place.
#[derive(Debug, Clone, Default)]
pub struct LookupResult {
    entries: Vec<LookupEntry>,
}

impl LookupResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, domain: String, blocked: bool) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.domain == domain) {
            entry.blocked = blocked;
        } else {
            self.entries.push(LookupEntry { domain, blocked });
        }
    }

    pub fn entries(&self) -> &[LookupEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Line-oriented rendering: one newline-terminated
    /// `"<domain>: Blocked"` / `"<domain>: Not Blocked"` line per entry,
    /// in result order.
    pub fn to_plain_text(&self) -> String {
        let mut body = String::new();
        for entry in &self.entries {
            body.push_str(&entry.domain);
            body.push_str(if entry.blocked {
                ": Blocked\n"
            } else {
                ": Not Blocked\n"
            });
        }
        body
    }
}
