//! Consensus Merge for board sessions.
//!
//! Three reviewers critique the same deck. Their lists are merged into one
//! prioritized consensus:
//!
//! 1. Pool each category across reviewers in role order (persona_1, 2, 3).
//! 2. For each category independently, prefer the selected reviewer's list
//!    if it is non-empty, else fall back to the pooled list.
//! 3. Keep at most [`MAX_PRIORITIZED`] items, preserving order.
//!
//! Narratives and past-work leverage come from the deck only.

use super::entities::{Consensus, ReviewerBoard, SelectedPath};
use crate::agent::results::{DeckOutline, ReviewerResponse};
use crate::session::persona::PersonaId;

/// Upper bound on items per prioritized category
pub const MAX_PRIORITIZED: usize = 5;

/// The five categories that are pooled and prioritized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Strengths,
    Gaps,
    NextSteps,
    CustomerChanges,
    WebsiteChanges,
}

impl Category {
    fn of(self, response: &ReviewerResponse) -> &[String] {
        match self {
            Category::Strengths => &response.top_strengths,
            Category::Gaps => &response.top_gaps,
            Category::NextSteps => &response.highest_roi_next_steps_30d,
            Category::CustomerChanges => &response.customer_requested_changes,
            Category::WebsiteChanges => &response.website_change_recommendations,
        }
    }
}

/// Concatenate one category across all present reviewers, in role order
fn pooled(reviewers: &ReviewerBoard, category: Category) -> Vec<String> {
    PersonaId::ALL
        .iter()
        .filter_map(|persona| reviewers.get(persona))
        .flat_map(|entry| category.of(&entry.response).iter().cloned())
        .collect()
}

/// Selected list if non-empty, else pooled; then truncate
fn prioritized(
    reviewers: &ReviewerBoard,
    selected: Option<&ReviewerResponse>,
    category: Category,
) -> Vec<String> {
    let mut items = match selected.map(|r| category.of(r)) {
        Some(list) if !list.is_empty() => list.to_vec(),
        _ => pooled(reviewers, category),
    };
    items.truncate(MAX_PRIORITIZED);
    items
}

fn selected_path(reviewers: &ReviewerBoard, selected: PersonaId) -> SelectedPath {
    match reviewers.get(&selected) {
        Some(entry) => {
            let r = &entry.response;
            SelectedPath {
                persona_id: selected,
                label: if entry.label.is_empty() {
                    selected.as_str().to_string()
                } else {
                    entry.label.clone()
                },
                focus: entry.focus.clone(),
                top_strengths: r.top_strengths.clone(),
                top_gaps: r.top_gaps.clone(),
                key_questions: r.key_questions.clone(),
                highest_roi_next_steps_30d: r.highest_roi_next_steps_30d.clone(),
                customer_requested_changes: r.customer_requested_changes.clone(),
                website_change_recommendations: r.website_change_recommendations.clone(),
            }
        }
        None => SelectedPath {
            persona_id: selected,
            label: selected.as_str().to_string(),
            ..SelectedPath::default()
        },
    }
}

/// Merge reviewer outputs and the deck into a prioritized consensus.
///
/// Pure: never fails, whatever the reviewers returned. A degraded reviewer
/// (empty or invalid model output) simply contributes empty lists.
pub fn merge_reviewer_consensus(
    reviewers: &ReviewerBoard,
    deck: &DeckOutline,
    selected: PersonaId,
) -> Consensus {
    let selected_response = reviewers.get(&selected).map(|entry| &entry.response);
    let pick = |category| prioritized(reviewers, selected_response, category);

    Consensus {
        selected_persona_path: Some(selected_path(reviewers, selected)),
        top_strengths: pick(Category::Strengths),
        top_gaps: pick(Category::Gaps),
        highest_roi_next_steps_30d: pick(Category::NextSteps),
        customer_requested_changes: pick(Category::CustomerChanges),
        website_change_recommendations: pick(Category::WebsiteChanges),
        investor_narrative_60s: deck.investor_narrative_60s.clone(),
        interview_narrative_60s: deck.interview_narrative_60s.clone(),
        past_work_leverage: deck.past_work_leverage.clone(),
        ..Consensus::default()
    }
}
