//! The six middleware stages a request traverses

use serde::Serialize;

use crate::tone::{Glyph, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stage {
    pub label: &'static str,
    pub sub: &'static str,
    pub glyph: Glyph,
    pub tone: Tone,
    pub detail: &'static str,
}

pub const STAGES: [Stage; 6] = [
    Stage {
        label: "Incoming",
        sub: "req arrives",
        glyph: Glyph::Wifi,
        tone: Tone::Blue,
        detail: "Raw HTTP request enters the API Gateway. Headers, method, and URL are parsed.",
    },
    Stage {
        label: "Rate Limit",
        sub: "req/sec check",
        glyph: Glyph::Activity,
        tone: Tone::Orange,
        detail: "IP-based rate limiting: 100 req/min by default. Burst protection prevents flooding.",
    },
    Stage {
        label: "Body Parse",
        sub: "schema check",
        glyph: Glyph::FileCheck,
        tone: Tone::Amber,
        detail: "JSON body parsed, validated against OpenAPI schema. Rejects malformed or dangerous input.",
    },
    Stage {
        label: "Auth Verify",
        sub: "JWT/Cookie",
        glyph: Glyph::UserCheck,
        tone: Tone::Purple,
        detail: "JWT signature verified with server secret. Claims extracted: userId, role, exp.",
    },
    Stage {
        label: "Authz Check",
        sub: "RBAC policy",
        glyph: Glyph::Key,
        tone: Tone::Indigo,
        detail: "Policy engine evaluates: user.role vs resource.requiredRole. Scoped permissions enforced.",
    },
    Stage {
        label: "Handler",
        sub: "business logic",
        glyph: Glyph::Server,
        tone: Tone::Emerald,
        detail: "Route handler executes business logic. Calls services, reads/writes DB, returns response.",
    },
];
