//! Read-only access to the caller's application records.

use tracing::debug;

use crate::error::StoreError;
use crate::types::ApplicationRef;

/// Read-only view over tracked applications.
///
/// Implementors back this with whatever persistence the host app uses;
/// the matcher only needs a full scan and a case-insensitive substring
/// search over company names.
pub trait ApplicationStore {
    /// Every tracked application.
    fn all(&self) -> Result<Vec<ApplicationRef>, StoreError>;

    /// Applications whose company name contains `fragment`,
    /// case-insensitively.
    fn search_by_company(&self, fragment: &str) -> Result<Vec<ApplicationRef>, StoreError>;
}

/// In-memory store, used in tests and by hosts without a database.
#[derive(Debug, Default)]
pub struct MemoryStore {
    applications: Vec<ApplicationRef>,
}

impl MemoryStore {
    pub fn new(applications: Vec<ApplicationRef>) -> Self {
        Self { applications }
    }
}

impl ApplicationStore for MemoryStore {
    fn all(&self) -> Result<Vec<ApplicationRef>, StoreError> {
        Ok(self.applications.clone())
    }

    fn search_by_company(&self, fragment: &str) -> Result<Vec<ApplicationRef>, StoreError> {
        let needle = fragment.to_lowercase();
        let hits: Vec<ApplicationRef> = self
            .applications
            .iter()
            .filter(|app| app.company_name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        debug!(fragment = %fragment, hits = hits.len(), "company search");
        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(id: i64, company: &str) -> ApplicationRef {
        ApplicationRef {
            id,
            company_name: company.to_string(),
            position: None,
            status: "applied".to_string(),
            date_applied: None,
            response_received: false,
            response_date: None,
        }
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let store = MemoryStore::new(vec![app(1, "Acme Robotics"), app(2, "Globex")]);
        let hits = store.search_by_company("acme").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }

    #[test]
    fn search_with_no_hits_is_empty() {
        let store = MemoryStore::new(vec![app(1, "Acme Robotics")]);
        assert!(store.search_by_company("initech").unwrap().is_empty());
    }
}
