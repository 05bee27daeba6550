//! # Domain models for the dashboard
//!
//! Wire types shared by the API client and the UI. Everything is
//! `Serialize + Deserialize` so the same structs travel over the REST
//! boundary and through Dioxus component props.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`UserInfo`] | The authenticated user: display name plus [`Role`]. Created on login, replaced on logout, never persisted. |
//! | [`Standard`] | A written policy/expectation document with a freeform text category. |
//! | [`Guide`] | A step-by-step procedure (SOP) whose category is one of the two [`GuideCategory`] labels. |
//! | [`ItemDraft`] | The `{title, category, content}` payload for create/update calls. |
//!
//! [`filter_guides`] is the pure tab filter: no stored filtered copy,
//! recomputed from the full collection on every render.

use serde::{Deserialize, Serialize};

/// Role of the authenticated user. Gates the create/edit/delete affordances
/// in the UI; the backend enforces authorization independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Staff,
}

impl Role {
    /// Whether this role may create, edit, and delete content.
    pub fn is_owner(&self) -> bool {
        matches!(self, Role::Owner)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Staff => "staff",
        }
    }
}

/// The authenticated user, as returned by `/api/auth/login` and
/// `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub role: Role,
}

/// A standards/policies document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Standard {
    /// Server-assigned identifier.
    pub id: i64,
    pub title: String,
    /// Freeform text category (not an enum on this entity).
    pub category: String,
    pub content: String,
}

/// A how-to guide (SOP). `category` is constrained by the guide form to one
/// of the two [`GuideCategory`] labels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub content: String,
}

/// The two recognized guide categories, driving the tab filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuideCategory {
    #[default]
    Service,
    Maintenance,
}

impl GuideCategory {
    pub const ALL: [GuideCategory; 2] = [GuideCategory::Service, GuideCategory::Maintenance];

    /// The exact category string stored on the backend.
    pub fn label(&self) -> &'static str {
        match self {
            GuideCategory::Service => "Service Work",
            GuideCategory::Maintenance => "Equipment & Maintenance",
        }
    }

    pub fn matches(&self, guide: &Guide) -> bool {
        guide.category == self.label()
    }
}

/// Return the guides belonging to one tab, preserving server order.
pub fn filter_guides(guides: &[Guide], tab: GuideCategory) -> Vec<Guide> {
    guides.iter().filter(|g| tab.matches(g)).cloned().collect()
}

/// Editable fields for creating or updating a standard or guide.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub title: String,
    pub category: String,
    pub content: String,
}

impl ItemDraft {
    pub fn new(title: &str, category: &str, content: &str) -> Self {
        Self {
            title: title.to_string(),
            category: category.to_string(),
            content: content.to_string(),
        }
    }

    /// Client-side required-field check, run before anything is sent.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("Title is required");
        }
        if self.category.trim().is_empty() {
            return Err("Category is required");
        }
        if self.content.trim().is_empty() {
            return Err("Content is required");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guide(id: i64, category: &str) -> Guide {
        Guide {
            id,
            title: format!("guide-{id}"),
            category: category.to_string(),
            content: "steps".to_string(),
        }
    }

    #[test]
    fn role_gates_management() {
        assert!(Role::Owner.is_owner());
        assert!(!Role::Staff.is_owner());
    }

    #[test]
    fn role_wire_format_is_lowercase() {
        let user: UserInfo =
            serde_json::from_str(r#"{"name":"Sam","role":"staff"}"#).unwrap();
        assert_eq!(user.role, Role::Staff);
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains(r#""role":"staff""#));
    }

    #[test]
    fn filter_partitions_recognized_categories() {
        let guides = vec![
            guide(1, "Service Work"),
            guide(2, "Equipment & Maintenance"),
            guide(3, "Service Work"),
            guide(4, "Unrecognized"),
        ];

        let service = filter_guides(&guides, GuideCategory::Service);
        let maintenance = filter_guides(&guides, GuideCategory::Maintenance);

        // Server order preserved within each tab.
        assert_eq!(service.iter().map(|g| g.id).collect::<Vec<_>>(), [1, 3]);
        assert_eq!(maintenance.iter().map(|g| g.id).collect::<Vec<_>>(), [2]);

        // The two tabs reconstruct exactly the recognized guides: no overlap,
        // no omissions.
        let mut union: Vec<i64> = service.iter().chain(&maintenance).map(|g| g.id).collect();
        union.sort_unstable();
        assert_eq!(union, [1, 2, 3]);
    }

    #[test]
    fn default_tab_is_service() {
        assert_eq!(GuideCategory::default(), GuideCategory::Service);
    }

    #[test]
    fn draft_validation_requires_all_fields() {
        assert!(ItemDraft::new("Mowing", "Quality", "Stripes.").validate().is_ok());
        assert_eq!(
            ItemDraft::new("", "Quality", "x").validate(),
            Err("Title is required")
        );
        assert_eq!(
            ItemDraft::new("Mowing", "  ", "x").validate(),
            Err("Category is required")
        );
        assert_eq!(
            ItemDraft::new("Mowing", "Quality", "").validate(),
            Err("Content is required")
        );
    }
}
