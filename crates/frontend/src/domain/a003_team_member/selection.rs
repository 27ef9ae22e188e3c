//! Row selection and bulk delete of the team grid.
//!
//! Deletes run one id at a time, in ascending id order, and stop at the first
//! failure. Each attempt is recorded, so local state drops exactly the rows the
//! server confirmed and keeps the failed and untried ones selected.

use crate::domain::a003_team_member::api::TeamMemberApi;
use crate::shared::reporter::{DashboardEvent, Reporter};
use contracts::domain::a003_team_member::TeamMember;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptResult {
    Succeeded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteAttempt {
    pub id: u32,
    pub result: AttemptResult,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Empty selection; nobody was asked and nothing was sent.
    NothingSelected,
    /// The user declined the confirmation.
    Cancelled,
    /// One entry per request actually sent, in order.
    Completed { attempts: Vec<DeleteAttempt> },
}

impl DeleteOutcome {
    pub fn deleted_ids(&self) -> Vec<u32> {
        match self {
            DeleteOutcome::Completed { attempts } => attempts
                .iter()
                .filter(|a| a.result == AttemptResult::Succeeded)
                .map(|a| a.id)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// The attempt that stopped the batch, if any.
    pub fn failure(&self) -> Option<&DeleteAttempt> {
        match self {
            DeleteOutcome::Completed { attempts } => attempts
                .iter()
                .find(|a| matches!(a.result, AttemptResult::Failed(_))),
            _ => None,
        }
    }
}

/// Rows of the team grid plus the ids currently ticked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamSelection {
    rows: Vec<TeamMember>,
    selected: BTreeSet<u32>,
}

impl TeamSelection {
    pub fn new(rows: Vec<TeamMember>) -> Self {
        Self {
            rows,
            selected: BTreeSet::new(),
        }
    }

    pub fn rows(&self) -> &[TeamMember] {
        &self.rows
    }

    pub fn selected(&self) -> &BTreeSet<u32> {
        &self.selected
    }

    /// Replaces the rows (fresh fetch); selected ids that vanished are dropped.
    pub fn set_rows(&mut self, rows: Vec<TeamMember>) {
        self.rows = rows;
        let known: BTreeSet<u32> = self.rows.iter().map(|m| m.id).collect();
        self.selected.retain(|id| known.contains(id));
    }

    /// Replaces the selection wholesale, ignoring ids that are not rows.
    pub fn replace_selection(&mut self, ids: impl IntoIterator<Item = u32>) {
        let known: BTreeSet<u32> = self.rows.iter().map(|m| m.id).collect();
        self.selected = ids.into_iter().filter(|id| known.contains(id)).collect();
    }

    pub fn toggle(&mut self, id: u32, checked: bool) {
        if checked {
            if self.rows.iter().any(|m| m.id == id) {
                self.selected.insert(id);
            }
        } else {
            self.selected.remove(&id);
        }
    }

    pub fn select_all(&mut self, checked: bool) {
        if checked {
            self.selected = self.rows.iter().map(|m| m.id).collect();
        } else {
            self.selected.clear();
        }
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.selected.contains(&id)
    }

    pub fn all_selected(&self) -> bool {
        !self.rows.is_empty() && self.rows.iter().all(|m| self.selected.contains(&m.id))
    }

    /// Drops the rows and selection entries the server confirmed as deleted.
    pub fn apply(&mut self, outcome: &DeleteOutcome) {
        let deleted: BTreeSet<u32> = outcome.deleted_ids().into_iter().collect();
        if deleted.is_empty() {
            return;
        }
        self.rows.retain(|m| !deleted.contains(&m.id));
        self.selected.retain(|id| !deleted.contains(id));
    }

    /// Selected ids in ascending order, the order deletes are sent in.
    pub fn selected_ids(&self) -> Vec<u32> {
        self.selected.iter().copied().collect()
    }
}

/// Sends one DELETE per id, awaiting each before the next.
///
/// `confirm` receives the number of ids and is not called for an empty list.
pub async fn delete_members<A>(
    ids: &[u32],
    api: &A,
    confirm: impl FnOnce(usize) -> bool,
    reporter: &Reporter,
) -> DeleteOutcome
where
    A: TeamMemberApi + ?Sized,
{
    if ids.is_empty() {
        return DeleteOutcome::NothingSelected;
    }
    if !confirm(ids.len()) {
        return DeleteOutcome::Cancelled;
    }

    let mut attempts = Vec::with_capacity(ids.len());
    for &id in ids {
        match api.delete_member(id).await {
            Ok(()) => {
                reporter.report(DashboardEvent::MemberDeleted { id });
                attempts.push(DeleteAttempt {
                    id,
                    result: AttemptResult::Succeeded,
                });
            }
            Err(e) => {
                let error = e.to_string();
                reporter.report(DashboardEvent::MemberDeleteFailed {
                    id,
                    error: error.clone(),
                });
                attempts.push(DeleteAttempt {
                    id,
                    result: AttemptResult::Failed(error),
                });
                break;
            }
        }
    }

    DeleteOutcome::Completed { attempts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_error::ApiError;
    use crate::shared::reporter::testing::recording;
    use async_trait::async_trait;
    use contracts::domain::a003_team_member::AccessLevel;
    use std::cell::RefCell;

    /// Records every id it is asked to delete; fails for `fail_on`.
    #[derive(Default)]
    struct FakeApi {
        calls: RefCell<Vec<u32>>,
        fail_on: Option<u32>,
    }

    impl FakeApi {
        fn failing_on(id: u32) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail_on: Some(id),
            }
        }

        fn calls(&self) -> Vec<u32> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl TeamMemberApi for FakeApi {
        async fn delete_member(&self, id: u32) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(id);
            if self.fail_on == Some(id) {
                Err(ApiError::Status {
                    status: 500,
                    url: format!("/api/users/{}", id),
                })
            } else {
                Ok(())
            }
        }
    }

    fn member(id: u32) -> TeamMember {
        TeamMember {
            id,
            name: format!("Member {}", id),
            phone: "0049301234567".to_string(),
            email: format!("member{}@example.com", id),
            role: "Sales".to_string(),
            access: AccessLevel::User,
        }
    }

    fn team(ids: &[u32]) -> TeamSelection {
        TeamSelection::new(ids.iter().copied().map(member).collect())
    }

    /// Same sequence as the grid's delete button.
    async fn delete_and_apply(
        state: &mut TeamSelection,
        api: &FakeApi,
        confirm: impl FnOnce(usize) -> bool,
        reporter: &Reporter,
    ) -> DeleteOutcome {
        let ids = state.selected_ids();
        let outcome = delete_members(&ids, api, confirm, reporter).await;
        state.apply(&outcome);
        outcome
    }

    fn row_ids(state: &TeamSelection) -> Vec<u32> {
        state.rows().iter().map(|m| m.id).collect()
    }

    #[tokio::test]
    async fn test_empty_selection_neither_prompts_nor_sends() {
        let mut state = team(&[1, 2, 3]);
        let api = FakeApi::default();
        let (_, reporter) = recording();
        let mut prompted = false;

        let outcome = delete_and_apply(&mut state, &api, |_| {
            prompted = true;
            true
        }, &reporter)
        .await;

        assert_eq!(outcome, DeleteOutcome::NothingSelected);
        assert!(!prompted);
        assert!(api.calls().is_empty());
        assert_eq!(row_ids(&state), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_declined_confirmation_sends_nothing() {
        let mut state = team(&[1, 2, 3]);
        state.replace_selection([1, 3]);
        let api = FakeApi::default();
        let (_, reporter) = recording();
        let mut asked_for = 0;

        let outcome = delete_and_apply(&mut state, &api, |n| {
            asked_for = n;
            false
        }, &reporter)
        .await;

        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert_eq!(asked_for, 2);
        assert!(api.calls().is_empty());
        assert_eq!(row_ids(&state), vec![1, 2, 3]);
        assert_eq!(state.selected().len(), 2);
    }

    #[tokio::test]
    async fn test_all_succeeding_removes_every_selected_row() {
        let mut state = team(&[1, 2, 3, 4]);
        state.replace_selection([4, 2, 1]);
        let api = FakeApi::default();
        let (recorder, reporter) = recording();

        let outcome = delete_and_apply(&mut state, &api, |_| true, &reporter).await;

        assert_eq!(api.calls(), vec![1, 2, 4]);
        assert_eq!(outcome.deleted_ids(), vec![1, 2, 4]);
        assert!(outcome.failure().is_none());
        assert_eq!(row_ids(&state), vec![3]);
        assert!(state.selected().is_empty());
        assert_eq!(
            recorder.events(),
            vec![
                DashboardEvent::MemberDeleted { id: 1 },
                DashboardEvent::MemberDeleted { id: 2 },
                DashboardEvent::MemberDeleted { id: 4 },
            ]
        );
    }

    #[tokio::test]
    async fn test_failure_stops_batch_and_keeps_remaining_rows_selected() {
        let mut state = team(&[1, 2, 3, 4, 5]);
        state.select_all(true);
        let api = FakeApi::failing_on(3);
        let (recorder, reporter) = recording();

        let outcome = delete_and_apply(&mut state, &api, |_| true, &reporter).await;

        // 4 and 5 are never requested
        assert_eq!(api.calls(), vec![1, 2, 3]);
        assert_eq!(outcome.deleted_ids(), vec![1, 2]);
        let failed = outcome.failure().unwrap();
        assert_eq!(failed.id, 3);
        assert!(matches!(failed.result, AttemptResult::Failed(_)));

        assert_eq!(row_ids(&state), vec![3, 4, 5]);
        assert_eq!(
            state.selected().iter().copied().collect::<Vec<_>>(),
            vec![3, 4, 5]
        );
        assert!(matches!(
            recorder.events().last(),
            Some(DashboardEvent::MemberDeleteFailed { id: 3, .. })
        ));
    }

    #[tokio::test]
    async fn test_first_request_failing_changes_nothing() {
        let mut state = team(&[7, 8]);
        state.select_all(true);
        let api = FakeApi::failing_on(7);
        let (_, reporter) = recording();

        let outcome = delete_and_apply(&mut state, &api, |_| true, &reporter).await;

        assert_eq!(api.calls(), vec![7]);
        assert!(outcome.deleted_ids().is_empty());
        assert_eq!(row_ids(&state), vec![7, 8]);
        assert!(state.all_selected());
    }

    #[test]
    fn test_selection_ignores_unknown_ids() {
        let mut state = team(&[1, 2]);
        state.replace_selection([2, 9]);
        assert_eq!(state.selected().iter().copied().collect::<Vec<_>>(), vec![2]);
        state.toggle(9, true);
        assert!(!state.is_selected(9));
        state.toggle(2, false);
        assert!(state.selected().is_empty());
    }

    #[test]
    fn test_refetch_drops_vanished_selection() {
        let mut state = team(&[1, 2, 3]);
        state.select_all(true);
        state.set_rows(vec![member(2), member(3)]);
        assert_eq!(state.selected().iter().copied().collect::<Vec<_>>(), vec![2, 3]);
        assert!(state.all_selected());
    }
}
