//! # Collection Registry
//!
//! Explicit set of permitted collection names. The generic routes bind a
//! collection from the URL path; binding is only allowed for registered
//! names, so a typo or probe never creates or scans an arbitrary bucket.

use std::collections::BTreeSet;

use thiserror::Error;

use super::errors::{RestError, RestResult};

/// Fixed collection behind `/lessons`
pub const LESSONS: &str = "lessons";

/// Fixed collection behind `/orders`
pub const ORDERS: &str = "orders";

/// Maximum length of a collection name
pub const MAX_NAME_LEN: usize = 64;

/// Rejected collection name at registration time
#[derive(Debug, Error)]
#[error("Invalid collection name: {0}")]
pub struct InvalidCollectionName(pub String);

/// Set of collection names the generic routes may bind
#[derive(Debug, Clone)]
pub struct CollectionRegistry {
    names: BTreeSet<String>,
}

fn valid_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_NAME_LEN
        && name
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'-')
}

impl CollectionRegistry {
    /// Registry containing only the fixed resources
    pub fn with_defaults() -> Self {
        let mut names = BTreeSet::new();
        names.insert(LESSONS.to_string());
        names.insert(ORDERS.to_string());
        Self { names }
    }

    /// Permit an additional collection name
    pub fn register(&mut self, name: &str) -> Result<(), InvalidCollectionName> {
        if !valid_name(name) {
            return Err(InvalidCollectionName(name.to_string()));
        }
        self.names.insert(name.to_string());
        Ok(())
    }

    /// Resolve a path segment to a permitted collection name
    pub fn resolve<'a>(&'a self, name: &str) -> RestResult<&'a str> {
        self.names
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| RestError::UnknownCollection(name.to_string()))
    }

    /// All permitted names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for CollectionRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
