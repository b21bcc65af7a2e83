use std::fmt::Write;

use crate::engine::RecommendationRecord;

const BAR_WIDTH: usize = 20;

fn bullets(out: &mut String, items: &[String]) {
    for item in items {
        let _ = writeln!(out, "- {item}");
    }
}

fn bar(percent: u8) -> String {
    let filled = usize::from(percent.min(100)) * BAR_WIDTH / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Terminal-friendly rendering of a recommendation.
pub fn render_markdown(record: &RecommendationRecord) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# {}\n", record.title);
    let _ = writeln!(
        out,
        "_{} • Complexity: {} • Performance priority: {} • {}_\n",
        record.profile_label,
        record.complexity_label(),
        record.performance_label(),
        record.goal_focus()
    );

    out.push_str("## Recommended stack\n\n");
    for (label, items) in record.technology_sections() {
        let _ = writeln!(out, "**{label}:** {}", items.join(", "));
    }
    out.push('\n');

    out.push_str("### Benefits\n\n");
    bullets(&mut out, &record.pros);
    out.push_str("\n### Trade-offs\n\n");
    bullets(&mut out, &record.cons);
    out.push('\n');

    out.push_str("### Scores\n\n```text\n");
    for score in record.score_bars() {
        let _ = writeln!(out, "{:<28} {} {:>3}%", score.label, bar(score.percent), score.percent);
    }
    out.push_str("```\n\n");

    let _ = writeln!(
        out,
        "## Architecture & deployment blueprint\n\n_{} • Team: {} • Timeline: {}_\n",
        record.project_type, record.team_skill, record.timeline
    );
    let _ = writeln!(out, "{}\n", record.architecture_summary);
    out.push_str("**Deployment strategy (first 60–90 days):**\n\n");
    for (i, step) in record.rollout_plan().iter().enumerate() {
        let _ = writeln!(out, "{}. {step}", i + 1);
    }
    out.push('\n');
    if !record.budget_notes.is_empty() {
        out.push_str("**Budget-aware infra notes:**\n\n");
        bullets(&mut out, &record.budget_notes);
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "## DevOps, security & risk\n\n_Data sensitivity: {} • Traffic: {}_\n",
        record.data_sensitivity.to_uppercase(),
        record.traffic.to_uppercase()
    );
    out.push_str("### DevOps & workflow\n\n");
    bullets(&mut out, &record.devops_guidance);
    out.push_str("\n### Security focus areas\n\n");
    bullets(&mut out, &record.security_notes);
    out.push_str("\n### Common pitfalls\n\n");
    bullets(&mut out, &record.pitfalls);
    out.push('\n');

    out.push_str("## Getting started checklist & learning path\n\n");
    if let Some(context) = &record.context {
        let _ = writeln!(out, "### Your project context\n\n{context}\n");
    }
    out.push_str("### Execution checklist\n\n");
    for item in &record.checklist {
        let _ = writeln!(out, "- [ ] {item}");
    }
    out.push_str("\n### Recommended learning order\n\n");
    for (i, step) in record.learning_order().iter().enumerate() {
        let _ = writeln!(out, "{}. {step}", i + 1);
    }

    out
}
