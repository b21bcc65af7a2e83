//! HTML rendering: the four result cards, the questionnaire form and the
//! page shell around them. Every interpolated string goes through
//! `html_escape`.

use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;

use crate::engine::RecommendationRecord;
use crate::input::{
    AiAssistance, Budget, Complexity, DataSensitivity, Goal, Performance, ProjectType, TeamSkill,
    Traffic,
};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; background: #0f172a; color: #e2e8f0; margin: 0; }
main { max-width: 1100px; margin: 0 auto; padding: 24px; display: grid; gap: 16px; }
.card { background: #1e293b; border-radius: 12px; padding: 18px 22px; }
.card-header { display: flex; justify-content: space-between; align-items: center; gap: 12px; }
.card-title { font-size: 1.1rem; font-weight: 600; }
.card-meta { font-size: 0.8rem; color: #94a3b8; font-weight: 400; }
.pill { font-size: 0.75rem; padding: 4px 10px; border-radius: 999px; background: #334155; }
.card-body-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 18px; margin-top: 12px; }
.stack-label, .section-title-sm { font-weight: 600; margin: 10px 0 4px; }
.tech-badge { display: inline-block; background: #0ea5e9; color: #0f172a; border-radius: 6px; padding: 2px 8px; margin: 2px; font-size: 0.8rem; }
.metrics-row { display: grid; grid-template-columns: repeat(3, 1fr); gap: 12px; margin-top: 16px; }
.metric-bar { background: #334155; border-radius: 6px; height: 8px; overflow: hidden; }
.metric-fill { background: linear-gradient(90deg, #22c55e, #ef4444); height: 100%; }
.block-note { background: #0f172a; border-left: 3px solid #f59e0b; padding: 10px 12px; margin-top: 10px; }
form { display: grid; grid-template-columns: 1fr 1fr; gap: 12px; }
label { display: grid; gap: 4px; font-size: 0.85rem; }
select, input, textarea { padding: 6px; border-radius: 6px; border: 1px solid #475569; background: #0f172a; color: inherit; }
.error { border-left: 3px solid #ef4444; }
"#;

fn text(s: &str) -> String {
    encode_text(s).into_owned()
}

fn list(out: &mut String, class: &str, marker: &str, items: &[String]) {
    let _ = write!(out, "<ul class=\"{class}\">");
    for item in items {
        let _ = write!(
            out,
            "<li><span>{}</span> <span>{}</span></li>",
            text(marker),
            text(item)
        );
    }
    out.push_str("</ul>");
}

fn card_header(out: &mut String, title: &str, meta: &str, pill: &str) {
    let _ = write!(
        out,
        "<div class=\"card-header\"><div class=\"card-title\">{}<div class=\"card-meta\">{}</div></div><div class=\"pill\">{}</div></div>",
        text(title),
        text(meta),
        text(pill)
    );
}

/// Wraps a body fragment in a complete HTML document.
pub fn render_page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n<main>\n{body}\n</main>\n</body>\n</html>\n",
        text(title)
    )
}

/// The four result cards, without the page shell.
pub fn render_cards(record: &RecommendationRecord) -> String {
    let mut out = String::new();

    // Stack & trade-offs
    out.push_str("<article class=\"card\">");
    card_header(
        &mut out,
        &record.title,
        &format!(
            "{} • Complexity: {} • Performance priority: {}",
            record.profile_label,
            record.complexity_label(),
            record.performance_label()
        ),
        record.goal_focus(),
    );
    out.push_str("<div class=\"card-body-grid\"><div>");
    for (label, items) in record.technology_sections() {
        let _ = write!(
            out,
            "<div class=\"stack-group\"><div class=\"stack-label\">{}</div><div class=\"stack-items\">",
            text(label)
        );
        for item in items {
            let _ = write!(out, "<span class=\"tech-badge\">{}</span>", text(item));
        }
        out.push_str("</div></div>");
    }
    out.push_str("</div><div><div class=\"section-title-sm\">Why this stack works for you</div>");
    out.push_str(
        "<p class=\"section-text\">Selected based on your project type, performance needs, budget, and team skill. It balances maintainability, ecosystem maturity, and available hosting options.</p>",
    );
    out.push_str("<div class=\"pros\"><h4>Benefits</h4>");
    list(&mut out, "pros-list", "+", &record.pros);
    out.push_str("</div><div class=\"cons\"><h4>Trade-offs</h4>");
    list(&mut out, "cons-list", "−", &record.cons);
    out.push_str("</div></div></div><div class=\"metrics-row\">");
    for score in record.score_bars() {
        let _ = write!(
            out,
            "<div class=\"metric\"><div class=\"metric-label\">{}</div><div class=\"metric-bar\"><div class=\"metric-fill\" style=\"width: {}%;\"></div></div></div>",
            text(score.label),
            score.percent.min(100)
        );
    }
    out.push_str("</div></article>\n");

    // Architecture & deployment
    out.push_str("<article class=\"card\">");
    card_header(
        &mut out,
        "Architecture & Deployment Blueprint",
        &format!(
            "{} • Team: {} • Timeline: {}",
            record.project_type, record.team_skill, record.timeline
        ),
        "Start simple, evolve later",
    );
    let _ = write!(
        out,
        "<div class=\"section-title-sm\">High-level architecture</div><p class=\"section-text\">{}</p>",
        text(&record.architecture_summary)
    );
    out.push_str("<div class=\"block-note\"><strong>Deployment Strategy (first 60–90 days):</strong><ol>");
    for step in record.rollout_plan() {
        let _ = write!(out, "<li>{}</li>", text(&step));
    }
    out.push_str("</ol></div>");
    if !record.budget_notes.is_empty() {
        out.push_str("<div class=\"section-title-sm\">Budget-aware infra notes</div>");
        list(&mut out, "checklist", "•", &record.budget_notes);
    }
    out.push_str("</article>\n");

    // DevOps, security & risk
    out.push_str("<article class=\"card\">");
    card_header(
        &mut out,
        "DevOps, Security & Risk",
        &format!(
            "Data sensitivity: {} • Traffic: {}",
            record.data_sensitivity.to_uppercase(),
            record.traffic.to_uppercase()
        ),
        "Avoid hidden technical debt",
    );
    out.push_str("<div class=\"card-body-grid\"><div><div class=\"section-title-sm\">DevOps &amp; workflow</div>");
    list(&mut out, "checklist", "•", &record.devops_guidance);
    out.push_str("<div class=\"section-title-sm\">Security focus areas</div>");
    list(&mut out, "checklist", "•", &record.security_notes);
    out.push_str("</div><div><div class=\"section-title-sm\">Common pitfalls for this profile</div>");
    list(&mut out, "checklist", "⚠", &record.pitfalls);
    out.push_str("</div></div></article>\n");

    // Checklist & learning path
    out.push_str("<article class=\"card\">");
    card_header(
        &mut out,
        "Getting Started Checklist & Learning Path",
        "Use this as a linear path from idea → running app.",
        "Execution roadmap",
    );
    if let Some(context) = &record.context {
        let _ = write!(
            out,
            "<div class=\"section-title-sm\">Your project context</div><p class=\"section-text\">{}</p>",
            text(context)
        );
    }
    out.push_str("<div class=\"section-title-sm\">Execution checklist</div>");
    list(&mut out, "checklist", "☑", &record.checklist);
    out.push_str("<div class=\"section-title-sm\">Recommended learning order</div><ol class=\"learning-order\">");
    for step in record.learning_order() {
        let _ = write!(out, "<li>{}</li>", text(&step));
    }
    out.push_str("</ol></article>\n");

    out
}

/// Full HTML document for a record.
pub fn render_html(record: &RecommendationRecord) -> String {
    render_page(&record.title, &render_cards(record))
}

fn select<T: Copy>(
    out: &mut String,
    name: &str,
    caption: &str,
    options: &[T],
    key: impl Fn(&T) -> &'static str,
    label: impl Fn(&T) -> &'static str,
) {
    let _ = write!(
        out,
        "<label>{}<select name=\"{}\" required><option value=\"\">Select…</option>",
        text(caption),
        encode_double_quoted_attribute(name)
    );
    for option in options {
        let _ = write!(
            out,
            "<option value=\"{}\">{}</option>",
            encode_double_quoted_attribute(key(option)),
            text(label(option))
        );
    }
    out.push_str("</select></label>");
}

/// Questionnaire page. `notice` is shown above the form, e.g. a validation
/// message.
pub fn render_form_page(notice: Option<&str>) -> String {
    let mut out = String::new();
    out.push_str("<article class=\"card\">");
    card_header(
        &mut out,
        "Tech Stack Advisor",
        "Describe your project to get a stack, architecture blueprint and checklist.",
        "Deterministic",
    );
    if let Some(notice) = notice {
        let _ = write!(out, "<div class=\"block-note error\">{}</div>", text(notice));
    }
    out.push_str("<form method=\"post\" action=\"/recommend\">");
    select(&mut out, "projectType", "Project type", ProjectType::ALL, ProjectType::as_str, ProjectType::label);
    select(&mut out, "complexity", "Complexity", Complexity::ALL, Complexity::as_str, Complexity::label);
    select(&mut out, "performance", "Performance priority", Performance::ALL, Performance::as_str, Performance::label);
    out.push_str("<label>Timeline<input name=\"timeline\" placeholder=\"e.g. 3 months\" required></label>");
    select(&mut out, "budget", "Budget", Budget::ALL, Budget::as_str, Budget::label);
    select(&mut out, "teamSkill", "Team skill", TeamSkill::ALL, TeamSkill::as_str, TeamSkill::label);
    select(&mut out, "dataSensitivity", "Data sensitivity", DataSensitivity::ALL, DataSensitivity::as_str, DataSensitivity::label);
    select(&mut out, "traffic", "Expected traffic", Traffic::ALL, Traffic::as_str, Traffic::label);
    select(&mut out, "goal", "Primary goal", Goal::ALL, Goal::as_str, Goal::label);
    select(&mut out, "aiAssistance", "AI assistance", AiAssistance::ALL, AiAssistance::as_str, AiAssistance::label);
    out.push_str("<label style=\"grid-column: 1 / -1\">Project description (optional)<textarea name=\"description\" rows=\"3\"></textarea></label>");
    out.push_str("<button type=\"submit\">Generate recommendation</button></form></article>\n");

    out.push_str("<article class=\"card\"><h2>No recommendation yet</h2><p>Fill the form and get:</p><ul>");
    for item in [
        "Suggested frontend, backend, database, and deployment stack",
        "Architecture blueprint (monolith vs modular vs microservices)",
        "DevOps & workflow recommendations (Git, CI/CD, environments)",
        "Security, risk, and technical-debt considerations",
        "Actionable startup checklist to move from “idea” to “running app”",
    ] {
        let _ = write!(out, "<li>{}</li>", text(item));
    }
    out.push_str("</ul></article>");

    render_page("Tech Stack Advisor", &out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_lists_every_option() {
        let page = render_form_page(None);
        for kind in ProjectType::ALL {
            assert!(page.contains(&format!("value=\"{}\"", kind.as_str())));
        }
        assert!(page.contains("name=\"aiAssistance\""));
        assert!(!page.contains("block-note error"));
    }

    #[test]
    fn test_form_notice_is_escaped() {
        let page = render_form_page(Some("<b>missing</b>"));
        assert!(page.contains("&lt;b&gt;missing&lt;/b&gt;"));
    }
}
