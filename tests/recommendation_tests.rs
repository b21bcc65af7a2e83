use pretty_assertions::assert_eq;
use std::sync::Arc;

use stack_advisor::engine::{
    build_recommendation, recommend, RecommendationEngine, AGENTIC_ARCHITECTURE_GUIDANCE,
    AGENTS_DEVOPS_ADVICE, AI_TOOLING_CHECKLIST, PERSONAL_SHIP_FAST_GUIDANCE,
};
use stack_advisor::{InputError, KnowledgeBase, ProjectInput};

fn ecommerce_scenario() -> ProjectInput {
    ProjectInput {
        project_type: "ecommerce".to_string(),
        complexity: "complex".to_string(),
        performance: "critical".to_string(),
        budget: "high".to_string(),
        team_skill: "experienced".to_string(),
        data_sensitivity: "high".to_string(),
        traffic: "high".to_string(),
        timeline: "3 months".to_string(),
        goal: "long-term".to_string(),
        ai_assistance: "agents".to_string(),
        description: Some(String::new()),
    }
}

#[test]
fn test_ecommerce_scenario() {
    let record = build_recommendation(&ecommerce_scenario());

    assert!(record.title.contains("E-Commerce / Payments – COMPLEX / CRITICAL"));
    assert_eq!(record.profile_label, "E-Commerce / Payments");
    // 20 base + 40 high sensitivity + 20 high traffic
    assert_eq!(record.metrics.risk_score, 80);
    assert_eq!(record.metrics.cost_score, 80);
    assert_eq!(record.metrics.complexity_score, 85);

    assert!(record
        .architecture_summary
        .starts_with("Start with modular monolith but design seams for future services"));
    assert!(record.architecture_summary.contains(AGENTIC_ARCHITECTURE_GUIDANCE));
    assert!(!record.architecture_summary.contains("ACID transactions"));

    assert_eq!(record.devops_guidance.last().map(String::as_str), Some(AGENTS_DEVOPS_ADVICE));
    assert_eq!(record.devops_guidance.len(), 4);

    for line in AI_TOOLING_CHECKLIST {
        assert!(record.checklist.iter().any(|item| item == line));
    }
    assert_eq!(record.checklist.len(), 5 + 3 + 2);
    assert_eq!(record.context, None);

    assert_eq!(
        record.deployment,
        vec![
            "AWS / DO / Render",
            "Specialized SaaS like Shopify for simpler use-cases",
            "AWS (ECS/EKS)",
            "GCP",
            "Azure",
        ]
    );
    assert_eq!(record.security_notes.len(), 4);
    assert_eq!(record.budget_notes.len(), 3);
    assert_eq!(record.pitfalls.len(), 6);
}

#[test]
fn test_inputs_are_echoed() {
    let input = ecommerce_scenario();
    let record = build_recommendation(&input);

    assert_eq!(record.project_type, input.project_type);
    assert_eq!(record.complexity, input.complexity);
    assert_eq!(record.performance, input.performance);
    assert_eq!(record.budget, input.budget);
    assert_eq!(record.team_skill, input.team_skill);
    assert_eq!(record.data_sensitivity, input.data_sensitivity);
    assert_eq!(record.traffic, input.traffic);
    assert_eq!(record.timeline, input.timeline);
    assert_eq!(record.goal, input.goal);
    assert_eq!(record.ai_assistance, input.ai_assistance);
    assert_eq!(record.description, input.description);
}

#[test]
fn test_unknown_project_type_falls_back_to_personal() {
    let mut input = ecommerce_scenario();
    input.project_type = "enterprise".to_string();
    let record = build_recommendation(&input);

    let personal = KnowledgeBase::builtin().profile(stack_advisor::input::ProjectType::Personal).unwrap();
    assert_eq!(record.profile_label, personal.label);
    assert_eq!(record.frontend, personal.frontend);
    assert_eq!(record.backend, personal.backend);
    assert_eq!(record.database, personal.database);
    assert_eq!(record.pros, personal.pros);
    assert_eq!(record.cons, personal.cons);
    assert_eq!(&record.deployment[..3], personal.deployment.as_slice());
    // No type-specific checklist for an unknown type.
    assert_eq!(record.checklist.len(), 5 + 2);
    assert_eq!(record.project_type, "enterprise");
}

#[test]
fn test_personal_deployment_deduplicates_budget_hosts() {
    let mut input = ecommerce_scenario();
    input.project_type = "personal".to_string();
    input.budget = "minimal".to_string();
    let record = build_recommendation(&input);

    assert_eq!(
        record.deployment,
        vec![
            "Vercel",
            "Netlify",
            "Render (for full-stack)",
            "Vercel (frontend)",
            "Render free tier",
        ]
    );
    assert_eq!(record.deployment.iter().filter(|d| *d == "Netlify").count(), 1);
}

#[test]
fn test_small_team_moderate_budget_overlap() {
    let mut input = ecommerce_scenario();
    input.project_type = "small-team".to_string();
    input.budget = "moderate".to_string();
    let record = build_recommendation(&input);

    assert_eq!(
        record.deployment,
        vec!["Render", "Railway", "DigitalOcean App Platform", "AWS Lightsail"]
    );
}

#[test]
fn test_every_augmentation_fires_once_in_order() {
    let mut input = ecommerce_scenario();
    input.project_type = "personal".to_string();
    input.goal = "ship-fast".to_string();
    input.team_skill = "solo-junior".to_string();
    let record = build_recommendation(&input);

    let expected = format!(
        "Keep a single repo and monolithic architecture. Avoid microservices, message queues, and Kubernetes until necessary. {} {}",
        PERSONAL_SHIP_FAST_GUIDANCE, AGENTIC_ARCHITECTURE_GUIDANCE
    );
    assert_eq!(record.architecture_summary, expected);
}

#[test]
fn test_no_ai_means_no_ai_lines() {
    let mut input = ecommerce_scenario();
    input.ai_assistance = "none".to_string();
    let record = build_recommendation(&input);

    assert_eq!(record.devops_guidance.len(), 3);
    assert!(!record.architecture_summary.contains(AGENTIC_ARCHITECTURE_GUIDANCE));
    assert!(AI_TOOLING_CHECKLIST
        .iter()
        .all(|line| !record.checklist.iter().any(|item| item == line)));
}

#[test]
fn test_context_absent_vs_present() {
    let mut input = ecommerce_scenario();
    input.description = Some("   ".to_string());
    assert_eq!(build_recommendation(&input).context, None);

    input.description = Some("hello".to_string());
    assert_eq!(build_recommendation(&input).context.as_deref(), Some("hello"));

    input.description = Some("  padded  ".to_string());
    assert_eq!(build_recommendation(&input).context.as_deref(), Some("padded"));

    input.description = None;
    assert_eq!(build_recommendation(&input).context, None);
}

#[test]
fn test_build_is_deterministic() {
    let input = ecommerce_scenario();
    let first = build_recommendation(&input);
    for _ in 0..5 {
        assert_eq!(build_recommendation(&input), first);
    }
}

#[test]
fn test_concurrent_builds_agree_and_leave_tables_untouched() {
    let kb = Arc::new(KnowledgeBase::builtin().clone());
    let snapshot = kb.as_ref().clone();
    let expected = RecommendationEngine::new(&kb).build(&ecommerce_scenario());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let kb = Arc::clone(&kb);
            std::thread::spawn(move || RecommendationEngine::new(&kb).build(&ecommerce_scenario()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
    assert_eq!(kb.as_ref(), &snapshot);
}

#[test]
fn test_records_do_not_share_lists() {
    let input = ecommerce_scenario();
    let mut first = build_recommendation(&input);
    first.deployment.push("Self-hosted".to_string());
    first.pros.clear();
    first.architecture_summary.push_str(" mutated");

    let second = build_recommendation(&input);
    assert_eq!(second.deployment.len(), 5);
    assert_eq!(second.pros.len(), 3);
    assert!(!second.architecture_summary.ends_with("mutated"));
    assert_eq!(
        KnowledgeBase::builtin().resolve_profile("ecommerce").deployment.len(),
        2
    );
}

#[test]
fn test_recommend_rejects_incomplete_input() {
    let mut input = ecommerce_scenario();
    input.goal = " ".to_string();
    input.timeline = String::new();

    let err = recommend(&input, KnowledgeBase::builtin()).unwrap_err();
    assert_eq!(err, InputError::MissingFields(vec!["timeline", "goal"]));
}

#[test]
fn test_recommend_trims_before_building() {
    let mut input = ecommerce_scenario();
    input.project_type = " ecommerce ".to_string();
    let record = recommend(&input, KnowledgeBase::builtin()).unwrap();
    assert_eq!(record.profile_label, "E-Commerce / Payments");
    assert_eq!(record.project_type, "ecommerce");
}

#[test]
fn test_json_shape() {
    let record = build_recommendation(&ecommerce_scenario());
    let value = serde_json::to_value(&record).unwrap();

    assert_eq!(value["metrics"]["riskScore"], 80);
    assert_eq!(value["profileLabel"], "E-Commerce / Payments");
    assert!(value["context"].is_null());
    assert!(value["architectureSummary"].is_string());
    assert_eq!(value["budgetNotes"].as_array().unwrap().len(), 3);
}
