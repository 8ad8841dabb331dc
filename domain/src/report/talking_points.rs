//! Plain-text talking points rendered from a consensus.

use crate::consensus::Consensus;
use crate::session::mode::SessionMode;

const TOP_N: usize = 5;

fn numbered<'a>(lines: &mut Vec<String>, items: impl IntoIterator<Item = &'a String>) {
    for (idx, item) in items.into_iter().enumerate() {
        lines.push(format!("{}. {}", idx + 1, item));
    }
}

/// Sections appended only when they have content
fn optional_sections(consensus: &Consensus) -> [(&'static str, &[String]); 7] {
    [
        (
            "Customer-Requested Changes:",
            consensus.customer_requested_changes.as_slice(),
        ),
        (
            "Website Changes to Improve Customer Adoption:",
            consensus.website_change_recommendations.as_slice(),
        ),
        (
            "Realistic Investor Questions:",
            consensus.realistic_investor_questions.as_slice(),
        ),
        (
            "Suggested Strong Answers:",
            consensus.suggested_strong_answers.as_slice(),
        ),
        (
            "Likely Follow-up Questions:",
            consensus.likely_follow_up_questions.as_slice(),
        ),
        (
            "Diligence Red Flags to Prepare For:",
            consensus.diligence_red_flags.as_slice(),
        ),
        ("Funding Use Plan:", consensus.funding_use_plan.as_slice()),
    ]
}

/// Render the talking-points document.
///
/// `date_label` is the already formatted `YYYY-MM-DD HH:MM` stamp. Lines are
/// joined with `\n` and there is no trailing newline.
pub fn render(mode: SessionMode, consensus: &Consensus, date_label: &str) -> String {
    let mut lines = vec![
        "CHARTROOM TALKING POINTS".to_string(),
        format!("Mode: {mode}"),
        format!("Date: {date_label}"),
        String::new(),
        "Top 5 Strengths:".to_string(),
    ];
    numbered(&mut lines, consensus.top_strengths.iter().take(TOP_N));

    lines.push(String::new());
    lines.push("Top 5 Gaps to Fix:".to_string());
    numbered(&mut lines, consensus.top_gaps.iter().take(TOP_N));

    lines.extend([
        String::new(),
        "Investor Narrative (60 sec):".to_string(),
        consensus.investor_narrative_60s.clone(),
        String::new(),
        "Interview Narrative (60 sec):".to_string(),
        consensus.interview_narrative_60s.clone(),
        String::new(),
        "Past Work Leverage for Future Interviews:".to_string(),
    ]);
    lines.extend(consensus.past_work_leverage.iter().map(|item| format!("- {item}")));

    lines.push(String::new());
    lines.push("Highest ROI Next Steps (30 days):".to_string());
    numbered(&mut lines, &consensus.highest_roi_next_steps_30d);

    for (heading, items) in optional_sections(consensus) {
        if items.is_empty() {
            continue;
        }
        lines.push(String::new());
        lines.push(heading.to_string());
        numbered(&mut lines, items);
    }

    lines.join("\n")
}
