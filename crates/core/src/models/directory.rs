//! Guest directory records and family grouping

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Guest;

/// Age category of a directory guest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuestCategory {
    Adult,
    Child,
}

impl GuestCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            GuestCategory::Adult => "Adult",
            GuestCategory::Child => "Child",
        }
    }
}

impl std::fmt::Display for GuestCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A guest as known to the event's guest directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestRecord {
    pub id: String,
    pub name: String,
    pub age: Option<u32>,
    pub category: GuestCategory,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub event_id: String,
    /// Shared by all members of one family; absent for solo guests
    pub family_id: Option<String>,
    pub arrival_date: Option<NaiveDate>,
    pub departure_date: Option<NaiveDate>,
}

impl GuestRecord {
    /// Key this record is grouped under.
    ///
    /// Solo guests get a `solo:` prefix so their id can never collide with
    /// another record's family id.
    pub fn family_key(&self) -> String {
        match self.family_id.as_deref() {
            Some(family) if !family.trim().is_empty() => family.to_string(),
            _ => format!("solo:{}", self.id),
        }
    }
}

/// Guests sharing a family key, in directory order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyGroup {
    pub key: String,
    pub members: Vec<GuestRecord>,
}

impl FamilyGroup {
    /// The member shown on the group's head row
    pub fn head(&self) -> &GuestRecord {
        &self.members[0]
    }

    /// Members shown as nested detail rows
    pub fn others(&self) -> &[GuestRecord] {
        &self.members[1..]
    }

    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Treat the whole family as one guest-unit for room mapping
    pub fn to_guest(&self) -> Guest {
        let head = self.head();
        let name = match self.size() {
            1 => head.name.clone(),
            n => format!("{} (+{})", head.name, n - 1),
        };
        Guest::new(self.key.clone(), name, self.size() as u32)
    }
}

/// Group records by family key, keeping first-appearance order.
///
/// Records without a family id form singleton groups keyed by `solo:{id}`.
pub fn group_by_family(records: Vec<GuestRecord>) -> Vec<FamilyGroup> {
    let mut groups: Vec<FamilyGroup> = Vec::new();

    for record in records {
        let key = record.family_key();
        match groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.members.push(record),
            None => groups.push(FamilyGroup {
                key,
                members: vec![record],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str, family: Option<&str>) -> GuestRecord {
        GuestRecord {
            id: id.to_string(),
            name: name.to_string(),
            age: Some(30),
            category: GuestCategory::Adult,
            phone: None,
            email: None,
            event_id: "evt-1".to_string(),
            family_id: family.map(str::to_string),
            arrival_date: None,
            departure_date: None,
        }
    }

    #[test]
    fn test_groups_by_family_in_first_appearance_order() {
        let groups = group_by_family(vec![
            record("1", "Ana", Some("fam-a")),
            record("2", "Ben", None),
            record("3", "Cai", Some("fam-a")),
            record("4", "Dee", Some("fam-b")),
        ]);

        let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["fam-a", "solo:2", "fam-b"]);
        assert_eq!(groups[0].head().name, "Ana");
        assert_eq!(groups[0].others().len(), 1);
        assert_eq!(groups[0].others()[0].name, "Cai");
    }

    #[test]
    fn test_solo_id_does_not_join_family() {
        // Ben's own id happens to equal the family id Ana and Cai share
        let groups = group_by_family(vec![
            record("1", "Ana", Some("fam-a")),
            record("fam-a", "Ben", None),
            record("3", "Cai", Some("fam-a")),
        ]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].size(), 2);
        assert_eq!(groups[1].key, "solo:fam-a");
        assert_eq!(groups[1].head().name, "Ben");
    }

    #[test]
    fn test_blank_family_id_is_solo() {
        let groups = group_by_family(vec![
            record("1", "Ana", Some("  ")),
            record("2", "Ben", Some("")),
        ]);
        assert_eq!(groups.len(), 2);
        assert!(groups.iter().all(|g| g.size() == 1));
    }

    #[test]
    fn test_family_as_guest_unit() {
        let groups = group_by_family(vec![
            record("1", "Ana", Some("fam-a")),
            record("2", "Ben", Some("fam-a")),
            record("3", "Cai", Some("fam-a")),
            record("4", "Dee", None),
        ]);

        let family = groups[0].to_guest();
        assert_eq!(family.id.as_str(), "fam-a");
        assert_eq!(family.name, "Ana (+2)");
        assert_eq!(family.occupancy, 3);

        let solo = groups[1].to_guest();
        assert_eq!(solo.name, "Dee");
        assert_eq!(solo.occupancy, 1);
    }

    #[test]
    fn test_category_wire_format() {
        let json = serde_json::to_string(&GuestCategory::Child).unwrap();
        assert_eq!(json, "\"child\"");
    }
}
