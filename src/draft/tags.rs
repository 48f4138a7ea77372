//! Client-side tag predicates
//!
//! The app's query interface has no tag filtering, so it happens here after
//! the drafts are retrieved.

use std::collections::HashSet;

use crate::draft::Draft;

/// Require all of `include` and none of `exclude`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilter {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl TagFilter {
    pub fn new(include: Vec<String>, exclude: Vec<String>) -> Self {
        Self { include, exclude }
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }

    pub fn matches(&self, draft: &Draft) -> bool {
        let tags: HashSet<&str> = draft.tags.iter().map(String::as_str).collect();
        has_all(&tags, &self.include) && !has_any(&tags, &self.exclude)
    }
}

fn has_all(tags: &HashSet<&str>, required: &[String]) -> bool {
    required.iter().all(|t| tags.contains(t.as_str()))
}

fn has_any(tags: &HashSet<&str>, excluded: &[String]) -> bool {
    excluded.iter().any(|t| tags.contains(t.as_str()))
}
