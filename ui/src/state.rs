//! # View-controller state machine
//!
//! All dashboard UI state that is not the content itself: the active
//! sub-view, the open form and its edit target, the open detail modal, the
//! pending delete confirmation, the failure banner from the last destructive
//! action, and the guide filter tab. Transitions are plain methods on
//! [`ViewState`], so every flow is unit-testable without a renderer.
//!
//! The edit target is split into per-entity slots carried inside
//! [`FormState::Standard`] and [`FormState::Guide`], so a standard can never
//! leak into the guide form or vice versa.

use store::{Guide, GuideCategory, Standard};

/// Which sub-view of the dashboard is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Standards,
    Guides,
}

/// The open form, if any, with its optional edit target.
/// `None` inside a variant means "create new".
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FormState {
    #[default]
    Closed,
    Standard(Option<Standard>),
    Guide(Option<Guide>),
}

impl FormState {
    pub fn is_open(&self) -> bool {
        !matches!(self, FormState::Closed)
    }
}

/// The open read-only detail modal, if any.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DetailState {
    #[default]
    Closed,
    Standard(Standard),
    Guide(Guide),
}

/// A delete awaiting the user's explicit confirmation. No API call happens
/// until it is confirmed; declining clears it without side effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingDelete {
    Standard(i64),
    Guide(i64),
}

/// The whole per-session UI state of the dashboard.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    pub tab: DashboardTab,
    pub form: FormState,
    pub detail: DetailState,
    pub pending_delete: Option<PendingDelete>,
    /// Failure notice from the last destructive action, shown as a banner.
    pub action_error: Option<String>,
    pub guide_tab: GuideCategory,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch between the Standards and Guides sub-views.
    pub fn show(&mut self, tab: DashboardTab) {
        self.tab = tab;
    }

    pub fn set_guide_tab(&mut self, tab: GuideCategory) {
        self.guide_tab = tab;
    }

    // ---- forms ----

    pub fn open_add_standard(&mut self) {
        self.form = FormState::Standard(None);
    }

    pub fn open_edit_standard(&mut self, standard: Standard) {
        self.form = FormState::Standard(Some(standard));
    }

    pub fn open_add_guide(&mut self) {
        self.form = FormState::Guide(None);
    }

    pub fn open_edit_guide(&mut self, guide: Guide) {
        self.form = FormState::Guide(Some(guide));
    }

    /// Close the form and drop the edit target. Used both on submit success
    /// and on cancel/backdrop/close; in-progress edits are discarded.
    pub fn close_form(&mut self) {
        self.form = FormState::Closed;
    }

    // ---- detail modal ----

    pub fn open_standard_detail(&mut self, standard: Standard) {
        self.detail = DetailState::Standard(standard);
    }

    pub fn open_guide_detail(&mut self, guide: Guide) {
        self.detail = DetailState::Guide(guide);
    }

    pub fn close_detail(&mut self) {
        self.detail = DetailState::Closed;
    }

    // ---- delete confirmation ----

    /// Ask for confirmation. A fresh delete flow starts with the previous
    /// failure banner dismissed.
    pub fn request_delete_standard(&mut self, id: i64) {
        self.action_error = None;
        self.pending_delete = Some(PendingDelete::Standard(id));
    }

    pub fn request_delete_guide(&mut self, id: i64) {
        self.action_error = None;
        self.pending_delete = Some(PendingDelete::Guide(id));
    }

    /// Decline (or finish) a delete: clears the confirmation, nothing else.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    // ---- action banner ----

    pub fn set_action_error(&mut self, message: String) {
        self.action_error = Some(message);
    }

    pub fn clear_action_error(&mut self) {
        self.action_error = None;
    }

    /// Back to a blank dashboard (logout or session expiry).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard(id: i64) -> Standard {
        Standard {
            id,
            title: format!("standard-{id}"),
            category: "Quality".to_string(),
            content: "Expectations.".to_string(),
        }
    }

    fn guide(id: i64) -> Guide {
        Guide {
            id,
            title: format!("guide-{id}"),
            category: GuideCategory::Service.label().to_string(),
            content: "Steps.".to_string(),
        }
    }

    #[test]
    fn dashboard_defaults_to_standards_and_service_tab() {
        let state = ViewState::new();
        assert_eq!(state.tab, DashboardTab::Standards);
        assert_eq!(state.guide_tab, GuideCategory::Service);
        assert_eq!(state.form, FormState::Closed);
        assert_eq!(state.detail, DetailState::Closed);
        assert!(state.pending_delete.is_none());
    }

    #[test]
    fn add_opens_form_without_edit_target() {
        let mut state = ViewState::new();
        state.open_add_standard();
        assert_eq!(state.form, FormState::Standard(None));

        state.open_add_guide();
        assert_eq!(state.form, FormState::Guide(None));
        assert!(state.form.is_open());
    }

    #[test]
    fn edit_carries_the_clicked_item_and_close_discards_it() {
        let mut state = ViewState::new();
        state.open_edit_standard(standard(3));
        assert_eq!(state.form, FormState::Standard(Some(standard(3))));

        state.close_form();
        assert_eq!(state.form, FormState::Closed);
    }

    #[test]
    fn edit_slots_are_per_entity_type() {
        let mut state = ViewState::new();
        state.open_edit_standard(standard(1));
        // Opening the guide form replaces the slot entirely; no standard can
        // bleed into a guide edit.
        state.open_edit_guide(guide(2));
        assert_eq!(state.form, FormState::Guide(Some(guide(2))));
    }

    #[test]
    fn detail_opens_and_closes_independently_of_the_list() {
        let mut state = ViewState::new();
        state.open_guide_detail(guide(5));
        assert_eq!(state.detail, DetailState::Guide(guide(5)));

        state.close_detail();
        assert_eq!(state.detail, DetailState::Closed);
    }

    #[test]
    fn delete_requires_explicit_confirmation() {
        let mut state = ViewState::new();
        state.request_delete_standard(9);
        assert_eq!(state.pending_delete, Some(PendingDelete::Standard(9)));

        // Declining performs no other transition.
        state.cancel_delete();
        assert!(state.pending_delete.is_none());
        assert_eq!(state.form, FormState::Closed);
    }

    #[test]
    fn switching_views_keeps_orthogonal_flags() {
        let mut state = ViewState::new();
        state.show(DashboardTab::Guides);
        state.set_guide_tab(GuideCategory::Maintenance);
        state.show(DashboardTab::Standards);
        state.show(DashboardTab::Guides);
        // The filter tab is sticky across view switches.
        assert_eq!(state.guide_tab, GuideCategory::Maintenance);
    }

    #[test]
    fn new_delete_request_dismisses_the_stale_failure_banner() {
        let mut state = ViewState::new();
        state.request_delete_guide(4);
        state.cancel_delete();
        state.set_action_error("Request failed with status 500".to_string());

        // Retrying the delete must not show last time's failure.
        state.request_delete_guide(4);
        assert!(state.action_error.is_none());
        assert_eq!(state.pending_delete, Some(PendingDelete::Guide(4)));
    }

    #[test]
    fn reset_clears_everything() {
        let mut state = ViewState::new();
        state.show(DashboardTab::Guides);
        state.set_guide_tab(GuideCategory::Maintenance);
        state.open_edit_guide(guide(1));
        state.request_delete_guide(1);
        state.set_action_error("Request failed with status 500".to_string());

        state.reset();
        assert_eq!(state, ViewState::default());
    }
}
