//! Guest list view model

use std::collections::HashSet;

use gala_core::{group_by_family, FamilyGroup, GuestRecord};

/// One rendered line of the guest list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestRow {
    /// Family key of the group this row belongs to
    pub key: String,
    pub name: String,
    pub age: String,
    pub category: String,
    pub contact: String,
    pub stay: String,
    /// Nested row for an additional family member
    pub is_detail: bool,
    pub family_size: usize,
    pub expanded: bool,
}

impl GuestRow {
    fn from_record(
        record: &GuestRecord,
        group: &FamilyGroup,
        is_detail: bool,
        expanded: bool,
    ) -> Self {
        let contact = [record.phone.as_deref(), record.email.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" / ");

        let stay = match (record.arrival_date, record.departure_date) {
            (Some(a), Some(d)) => format!("{} to {}", a, d),
            (Some(a), None) => format!("from {}", a),
            (None, Some(d)) => format!("until {}", d),
            (None, None) => String::new(),
        };

        Self {
            key: group.key.clone(),
            name: record.name.clone(),
            age: record.age.map(|a| a.to_string()).unwrap_or_default(),
            category: record.category.display_name().to_string(),
            contact,
            stay,
            is_detail,
            family_size: group.size(),
            expanded,
        }
    }
}

/// Guests of one event, grouped into expandable family rows
#[derive(Debug, Default)]
pub struct GuestListViewModel {
    groups: Vec<FamilyGroup>,
    expanded: HashSet<String>,
}

impl GuestListViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the result of a directory fetch. A failure is logged and leaves
    /// the list empty.
    pub fn apply_fetch<E: std::fmt::Display>(&mut self, result: Result<Vec<GuestRecord>, E>) {
        self.expanded.clear();
        match result {
            Ok(records) => {
                self.groups = group_by_family(records);
                tracing::debug!(groups = self.groups.len(), "Guest list grouped");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch guests");
                self.groups.clear();
            }
        }
    }

    pub fn groups(&self) -> &[FamilyGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of individual guests across all families
    pub fn guest_count(&self) -> usize {
        self.groups.iter().map(|g| g.size()).sum()
    }

    /// Expand or collapse a family. Returns the new expanded state.
    pub fn toggle(&mut self, key: &str) -> bool {
        if !self.groups.iter().any(|g| g.key == key && g.size() > 1) {
            return false;
        }
        if self.expanded.remove(key) {
            false
        } else {
            self.expanded.insert(key.to_string());
            true
        }
    }

    pub fn expand_all(&mut self) {
        self.expanded = self
            .groups
            .iter()
            .filter(|g| g.size() > 1)
            .map(|g| g.key.clone())
            .collect();
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.contains(key)
    }

    /// Head row per family, followed by detail rows when expanded
    pub fn rows(&self) -> Vec<GuestRow> {
        let mut rows = Vec::new();
        for group in &self.groups {
            let expanded = self.is_expanded(&group.key);
            rows.push(GuestRow::from_record(group.head(), group, false, expanded));
            if expanded {
                rows.extend(
                    group
                        .others()
                        .iter()
                        .map(|member| GuestRow::from_record(member, group, true, expanded)),
                );
            }
        }
        rows
    }
}
