//! Built-in knowledge base content.
//!
//! Pure data. Nothing here is consulted directly by the engine; it goes
//! through [`KnowledgeBase`](super::KnowledgeBase) lookups.

use std::collections::BTreeMap;

use super::{
    Adjustments, BaseProfile, BudgetAdjustment, KnowledgeBase, SecurityAdjustment, SkillAdjustment,
};
use crate::input::{Budget, DataSensitivity, ProjectType, TeamSkill};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(super) fn knowledge_base() -> KnowledgeBase {
    KnowledgeBase {
        profiles: profiles(),
        adjustments: adjustments(),
        checklist_base: strings(&[
            "Define 3–5 core user journeys and success metrics (sign-ups, activations, paid conversions).",
            "Sketch information architecture and key screens before coding.",
            "Create a single git repo and branch strategy (e.g., main + feature branches).",
            "Set up environment variable management (local .env + secrets in hosting provider).",
            "Add basic error boundaries and logging on the frontend and backend.",
        ]),
        checklist_by_type: checklist_by_type(),
        pitfalls: strings(&[
            "Choosing a ‘cool’ stack your team cannot maintain long-term.",
            "Skipping automated tests completely, leading to fear of shipping.",
            "Overusing microservices too early; exploding deployment and debugging complexity.",
            "Ignoring performance budgets and letting bundle sizes grow uncontrolled.",
            "Treating security as an afterthought instead of an ongoing practice.",
            "Not planning for technical debt; never scheduling refactor time.",
        ]),
    }
}

fn profiles() -> BTreeMap<ProjectType, BaseProfile> {
    let mut profiles = BTreeMap::new();

    profiles.insert(
        ProjectType::Personal,
        BaseProfile {
            label: "Personal / Side Project".to_string(),
            frontend: strings(&[
                "React (or Next.js App Router)",
                "Vue.js",
                "Plain HTML/CSS/JS for very simple UIs",
            ]),
            backend: strings(&[
                "Node.js + Express",
                "Supabase / Firebase (BaaS)",
                "No dedicated backend for simple CRUD",
            ]),
            database: strings(&[
                "SQLite / Supabase Postgres",
                "Browser storage (localStorage/IndexedDB) for ultra-small apps",
            ]),
            deployment: strings(&["Vercel", "Netlify", "Render (for full-stack)"]),
            architecture: "Single repo, simple monolith. SPA or lightweight SSR if you care about SEO."
                .to_string(),
            pros: strings(&[
                "Fast to build and deploy using managed services",
                "Simple DevOps – mostly git pushes and automatic deploys",
                "Free / low-cost infrastructure for early experiments",
                "Good ecosystem and tutorials for learning",
            ]),
            cons: strings(&[
                "Not optimized for huge traffic or complex workflows",
                "Tight coupling between features in one codebase",
                "Risk of skipping testing / observability early",
            ]),
        },
    );

    profiles.insert(
        ProjectType::SmallTeam,
        BaseProfile {
            label: "Small Team / Internal Tool".to_string(),
            frontend: strings(&[
                "React + component library (MUI/Chakra)",
                "Next.js for internal dashboards",
            ]),
            backend: strings(&["Node.js + Express / NestJS", "Python + FastAPI / Django"]),
            database: strings(&["PostgreSQL", "Redis for caching (optional)"]),
            deployment: strings(&["Render", "Railway", "DigitalOcean App Platform"]),
            architecture: "Modular monolith: single deployable unit, clear module boundaries for auth, users, domain logic."
                .to_string(),
            pros: strings(&[
                "Good balance of complexity vs control",
                "Can scale to tens of thousands of users before needing microservices",
                "Teams can iterate quickly with short feedback loops",
                "Straightforward CI/CD using GitHub Actions",
            ]),
            cons: strings(&[
                "Requires basic DevOps and environment management",
                "Can become a “big ball of mud” if modules are not respected",
                "Migrations to microservices later need planning",
            ]),
        },
    );

    profiles.insert(
        ProjectType::Scalable,
        BaseProfile {
            label: "Scalable SaaS / Consumer App".to_string(),
            frontend: strings(&["Next.js (SSR/SSG + API routes)", "React SPA with backend API"]),
            backend: strings(&[
                "Node.js (NestJS)",
                "Go",
                "Java (Spring Boot) for stricter environments",
            ]),
            database: strings(&[
                "PostgreSQL (primary)",
                "Redis (cache)",
                "Optional: Elastic / OpenSearch for search",
            ]),
            deployment: strings(&["AWS (ECS / Fargate)", "GCP / GKE", "DigitalOcean Kubernetes"]),
            architecture: "Start as a well-structured modular monolith or a small set of services. Use message queues and async jobs early."
                .to_string(),
            pros: strings(&[
                "Built for growth and multi-tenant usage",
                "Can handle spikes and long-term expansion",
                "More options for observability, security, and SRE practices",
                "Easier to segregate responsibilities across teams",
            ]),
            cons: strings(&[
                "Higher infra cost from day one",
                "DevOps / SRE skills become mandatory",
                "Onboarding complexity for new developers",
                "Easy to over-engineer for early-stage MVPs",
            ]),
        },
    );

    profiles.insert(
        ProjectType::Realtime,
        BaseProfile {
            label: "Real-Time Application".to_string(),
            frontend: strings(&["React / Next.js", "Vue with real-time state syncing"]),
            backend: strings(&[
                "Node.js + Socket.io",
                "Go with WebSockets",
                "Elixir (Phoenix Channels) for heavy real-time",
            ]),
            database: strings(&[
                "PostgreSQL",
                "Redis (Pub/Sub)",
                "Optional: Time-series DB for metrics",
            ]),
            deployment: strings(&["AWS / GCP", "Railway / Render for early stages"]),
            architecture: "Thin HTTP API + separate real-time gateway using WebSockets. Use Redis or message queues for fan-out."
                .to_string(),
            pros: strings(&[
                "Low-latency communication with users",
                "Designed for chat, live dashboards, gaming, or trading UIs",
                "Supports event-driven architecture from the beginning",
            ]),
            cons: strings(&[
                "More complex debugging and monitoring",
                "State synchronization issues across clients and servers",
                "Higher infra usage even at moderate scale",
            ]),
        },
    );

    profiles.insert(
        ProjectType::Ecommerce,
        BaseProfile {
            label: "E-Commerce / Payments".to_string(),
            frontend: strings(&["Next.js (SEO + SSR)", "React / Vue storefront"]),
            backend: strings(&["Node.js (Medusa.js / custom)", "Python (Django)"]),
            database: strings(&["PostgreSQL", "Optional: Redis for carts / sessions"]),
            deployment: strings(&[
                "AWS / DO / Render",
                "Specialized SaaS like Shopify for simpler use-cases",
            ]),
            architecture: "Core: orders, catalog, payments, inventory, users. Build around ACID transactions and strong audit trails."
                .to_string(),
            pros: strings(&[
                "SEO-friendly storefronts",
                "Battle-tested integrations (Stripe, PayPal, Razorpay, etc.)",
                "Clear domain boundaries (cart, checkout, fulfillment)",
            ]),
            cons: strings(&[
                "Security and compliance requirements (PCI, data protection)",
                "Failure scenarios are expensive (lost orders, double charges)",
                "High expectations on performance and UX",
            ]),
        },
    );

    profiles.insert(
        ProjectType::Social,
        BaseProfile {
            label: "Social / Community Platform".to_string(),
            frontend: strings(&["React + Next.js", "React Native / Expo for mobile"]),
            backend: strings(&[
                "Node.js",
                "Python (Django/DRF)",
                "Go for performance-critical services",
            ]),
            database: strings(&["PostgreSQL", "Redis", "Search engine (Elastic / OpenSearch)"]),
            deployment: strings(&["AWS / GCP with Kubernetes", "DigitalOcean Kubernetes"]),
            architecture: "Feed, notifications, search, and media usually become separate services. Start monolith + background workers."
                .to_string(),
            pros: strings(&[
                "Real-time interactions and growth potential",
                "Well-understood domain patterns (feed ranking, notifications)",
                "Natural fit for event-driven architecture",
            ]),
            cons: strings(&[
                "Very high infra + product complexity at scale",
                "Content moderation, abuse, and legal risks",
                "Requires serious observability and incident response discipline",
            ]),
        },
    );

    profiles
}

fn adjustments() -> Adjustments {
    let mut budget = BTreeMap::new();
    budget.insert(
        Budget::Minimal,
        BudgetAdjustment {
            deployment: strings(&["Vercel (frontend)", "Netlify", "Render free tier"]),
            notes: strings(&[
                "Prefer serverless or managed services with generous free tiers.",
                "Avoid self-managed Kubernetes early; that’s unnecessary overhead.",
                "Limit external SaaS costs; choose free monitoring/logging where possible.",
            ]),
        },
    );
    budget.insert(
        Budget::Moderate,
        BudgetAdjustment {
            deployment: strings(&[
                "Render",
                "Railway",
                "DigitalOcean App Platform",
                "AWS Lightsail",
            ]),
            notes: strings(&[
                "Use managed Postgres plans instead of running databases manually.",
                "Consider separate staging and production environments.",
                "Budget a small amount for observability (e.g., Sentry, basic APM).",
            ]),
        },
    );
    budget.insert(
        Budget::High,
        BudgetAdjustment {
            deployment: strings(&["AWS (ECS/EKS)", "GCP", "Azure"]),
            notes: strings(&[
                "You can afford multi-environment setups with dedicated staging, UAT, and production.",
                "Introduce Kubernetes or ECS with autoscaling from the beginning.",
                "Add stronger observability stack (Prometheus/Grafana, DataDog, New Relic).",
            ]),
        },
    );

    let mut team_skill = BTreeMap::new();
    team_skill.insert(
        TeamSkill::SoloJunior,
        SkillAdjustment {
            architecture: Some(
                "Keep a single repo and monolithic architecture. Avoid microservices, message queues, and Kubernetes until necessary."
                    .to_string(),
            ),
            devops: strings(&[
                "Use Vercel/Netlify for frontend and Render/Railway for backend.",
                "Start with a single Postgres database and simple environment variables.",
                "Use GitHub Actions only for basic build + deploy, if at all.",
            ]),
        },
    );
    team_skill.insert(
        TeamSkill::SmallFullstack,
        SkillAdjustment {
            architecture: Some(
                "Modular monolith with well-defined boundaries per domain (auth, billing, core domain, reporting)."
                    .to_string(),
            ),
            devops: strings(&[
                "Introduce basic CI (lint, tests) before deploy.",
                "Use infrastructure-as-code later (Pulumi/Terraform) once stack stabilizes.",
                "Create explicit staging environment mirroring production.",
            ]),
        },
    );
    team_skill.insert(
        TeamSkill::Experienced,
        SkillAdjustment {
            architecture: Some(
                "Start with modular monolith but design seams for future services (auth, billing, async jobs). Use message queues where it clearly helps."
                    .to_string(),
            ),
            devops: strings(&[
                "Automate CI/CD from day one with GitHub Actions or GitLab CI.",
                "Set up IaC (Terraform/Pulumi) and secrets management (SSM, Vault).",
                "Introduce metrics, tracing, and log aggregation early.",
            ]),
        },
    );

    let mut data_sensitivity = BTreeMap::new();
    data_sensitivity.insert(
        DataSensitivity::Low,
        SecurityAdjustment {
            security: strings(&[
                "Use OAuth or password auth with a proven library.",
                "Enforce HTTPS everywhere (via managed hosting).",
                "Rotate secrets periodically and avoid committing them to git.",
            ]),
        },
    );
    data_sensitivity.insert(
        DataSensitivity::Medium,
        SecurityAdjustment {
            security: strings(&[
                "Use battle-tested auth (e.g., Auth0, Clerk, NextAuth, Django auth).",
                "Encrypt data at rest (most managed DBs handle this, but verify).",
                "Implement basic rate limiting and brute-force protection on auth.",
                "Log access to sensitive endpoints for audit purposes.",
            ]),
        },
    );
    data_sensitivity.insert(
        DataSensitivity::High,
        SecurityAdjustment {
            security: strings(&[
                "Segregate sensitive data into separate services or schemas.",
                "Harden authentication: MFA, device checks, session management.",
                "Regular security reviews, dependency scanning, and patching.",
                "Plan for compliance requirements (PCI, HIPAA-like regimes where applicable).",
            ]),
        },
    );

    Adjustments {
        budget,
        team_skill,
        data_sensitivity,
    }
}

fn checklist_by_type() -> BTreeMap<ProjectType, Vec<String>> {
    let mut checklist = BTreeMap::new();
    checklist.insert(
        ProjectType::Personal,
        strings(&[
            "Keep infrastructure minimal; prioritize learning speed over perfect architecture.",
            "Avoid premature optimization. Deploy something small in the first week.",
            "Integrate basic analytics (privacy-friendly if possible).",
        ]),
    );
    checklist.insert(
        ProjectType::SmallTeam,
        strings(&[
            "Define owners for modules (auth, billing, core domain).",
            "Introduce code review and CI checks before merging.",
            "Create a simple runbook: how to deploy, rollback, and debug incidents.",
        ]),
    );
    checklist.insert(
        ProjectType::Scalable,
        strings(&[
            "Decide early on multi-tenant vs single-tenant architecture.",
            "Introduce background job processing for heavy tasks (emails, exports).",
            "Design a migration strategy for schema changes without downtime.",
        ]),
    );
    checklist.insert(
        ProjectType::Realtime,
        strings(&[
            "Decide how you will handle dropped WebSocket connections and reconnection.",
            "Centralize real-time events into an event bus or Redis Pub/Sub.",
            "Simulate load for concurrent users early to avoid surprises.",
        ]),
    );
    checklist.insert(
        ProjectType::Ecommerce,
        strings(&[
            "Run test transactions in sandbox for each payment provider.",
            "Implement idempotency keys for payment-related endpoints.",
            "Define refund, dispute, and chargeback flows from day one.",
        ]),
    );
    checklist.insert(
        ProjectType::Social,
        strings(&[
            "Design privacy controls and content visibility rules clearly.",
            "Plan for abuse reporting and moderation tooling early.",
            "Consider a long-term data retention strategy (especially for media).",
        ]),
    );
    checklist
}
