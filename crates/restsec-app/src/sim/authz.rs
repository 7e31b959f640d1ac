//! Authorization decision simulator
//!
//! Stateless apart from the two selections: every render is a lookup in the
//! permission matrix.

use restsec_core::permissions::{Endpoint, PermissionMatrix, Role};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthzMessage {
    SelectRole(Role),
    SelectEndpoint(Endpoint),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Unauthenticated,
    Granted,
    Forbidden,
}

impl Verdict {
    pub fn status_code(self) -> u16 {
        match self {
            Verdict::Unauthenticated => 401,
            Verdict::Granted => 200,
            Verdict::Forbidden => 403,
        }
    }
}

/// Everything the decision panel shows for one (role, endpoint) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub role: Role,
    pub endpoint: Endpoint,
    pub verdict: Verdict,
    pub status_line: &'static str,
    pub explanation: String,
    pub result_line: String,
    pub role_summary: &'static str,
    pub identity_badge: &'static str,
}

/// Evaluate `role` against `endpoint`.
///
/// An unauthenticated caller is always challenged, whatever the matrix says.
pub fn decide(matrix: &PermissionMatrix, role: Role, endpoint: Endpoint) -> Decision {
    let (verdict, status_line, explanation) = if !role.is_authenticated() {
        (
            Verdict::Unauthenticated,
            "401 Unauthorized",
            "No JWT token. ChallengeAsync() called.".to_string(),
        )
    } else if matrix.allows(role, endpoint) {
        (
            Verdict::Granted,
            "200 OK — Access Granted",
            format!("{} has permission for {}", role, endpoint),
        )
    } else {
        (
            Verdict::Forbidden,
            "403 Forbidden",
            format!("{} lacks permission for {}", role, endpoint),
        )
    };

    let result_line = match verdict {
        Verdict::Granted => "200 — Proceed".to_string(),
        _ => status_line.to_string(),
    };

    Decision {
        role,
        endpoint,
        verdict,
        status_line,
        explanation,
        result_line,
        role_summary: role.status_summary(),
        identity_badge: if role.is_authenticated() {
            "JWT Verified"
        } else {
            "Anonymous"
        },
    }
}

/// Lines of the policy pseudo-code panel; the last one carries the result.
pub fn policy_lines(decision: &Decision) -> [String; 4] {
    [
        "if (user.isAuthenticated === false) return Challenge(); // ← 401".to_string(),
        "if (policy.evaluate(user.role, resource) === false) return Forbid(); // ← 403"
            .to_string(),
        "return next(); // ← 200".to_string(),
        format!("// Result: {}", decision.result_line),
    ]
}

/// Index of the policy line that decided the request.
pub fn deciding_line(verdict: Verdict) -> usize {
    match verdict {
        Verdict::Unauthenticated => 0,
        Verdict::Forbidden => 1,
        Verdict::Granted => 2,
    }
}

#[derive(Debug, Clone)]
pub struct AuthzSimulator {
    role: Role,
    endpoint: Endpoint,
    matrix: &'static PermissionMatrix,
}

impl Default for AuthzSimulator {
    fn default() -> Self {
        Self::new(PermissionMatrix::standard())
    }
}

impl AuthzSimulator {
    pub fn new(matrix: &'static PermissionMatrix) -> Self {
        Self {
            role: Role::Admin,
            endpoint: Endpoint::Users,
            matrix,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    pub fn update(&mut self, msg: AuthzMessage) {
        match msg {
            AuthzMessage::SelectRole(role) => self.role = role,
            AuthzMessage::SelectEndpoint(endpoint) => self.endpoint = endpoint,
        }
        debug!("Authz selection: {} → {}", self.role, self.endpoint);
    }

    /// Select by table position, as the role and endpoint pickers do.
    ///
    /// Out-of-range indexes are a wiring bug; in release builds the
    /// selection is left unchanged.
    pub fn select_role_index(&mut self, index: usize) {
        let role = Role::from_index(index);
        debug_assert!(role.is_some(), "role index {index} out of range");
        if let Some(role) = role {
            self.update(AuthzMessage::SelectRole(role));
        }
    }

    pub fn select_endpoint_index(&mut self, index: usize) {
        let endpoint = Endpoint::from_index(index);
        debug_assert!(endpoint.is_some(), "endpoint index {index} out of range");
        if let Some(endpoint) = endpoint {
            self.update(AuthzMessage::SelectEndpoint(endpoint));
        }
    }

    pub fn decision(&self) -> Decision {
        decide(self.matrix, self.role, self.endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection() {
        let sim = AuthzSimulator::default();
        assert_eq!(sim.role(), Role::Admin);
        assert_eq!(sim.endpoint(), Endpoint::Users);
        assert_eq!(sim.decision().verdict, Verdict::Granted);
    }

    #[test]
    fn test_every_pair_matches_the_matrix() {
        let matrix = PermissionMatrix::standard();
        for role in Role::ALL {
            for endpoint in Endpoint::ALL {
                let d = decide(matrix, role, endpoint);
                let expected = match (role.is_authenticated(), matrix.allows(role, endpoint)) {
                    (false, _) => Verdict::Unauthenticated,
                    (true, true) => Verdict::Granted,
                    (true, false) => Verdict::Forbidden,
                };
                assert_eq!(d.verdict, expected, "{role} {endpoint}");
            }
        }
    }

    #[test]
    fn test_granted_strings() {
        let d = decide(PermissionMatrix::standard(), Role::Admin, Endpoint::Billing);
        assert_eq!(d.status_line, "200 OK — Access Granted");
        assert_eq!(d.explanation, "Admin has permission for /api/billing");
        assert_eq!(d.result_line, "200 — Proceed");
        assert_eq!(d.identity_badge, "JWT Verified");
    }

    #[test]
    fn test_forbidden_strings() {
        let d = decide(PermissionMatrix::standard(), Role::Guest, Endpoint::Billing);
        assert_eq!(d.verdict, Verdict::Forbidden);
        assert_eq!(d.status_line, "403 Forbidden");
        assert_eq!(d.explanation, "Guest lacks permission for /api/billing");
        assert_eq!(d.role_summary, "200 / 403");
    }

    #[test]
    fn test_no_auth_is_never_granted_or_forbidden() {
        for endpoint in Endpoint::ALL {
            let d = decide(PermissionMatrix::standard(), Role::NoAuth, endpoint);
            assert_eq!(d.verdict, Verdict::Unauthenticated);
            assert_eq!(d.status_line, "401 Unauthorized");
            assert_eq!(d.explanation, "No JWT token. ChallengeAsync() called.");
            assert_eq!(d.identity_badge, "Anonymous");
            assert_eq!(d.verdict.status_code(), 401);
        }
    }

    #[test]
    fn test_policy_lines_end_with_result() {
        let d = decide(PermissionMatrix::standard(), Role::Manager, Endpoint::AdminPanel);
        let lines = policy_lines(&d);
        assert_eq!(lines[3], "// Result: 403 Forbidden");
        assert_eq!(deciding_line(d.verdict), 1);
    }

    #[test]
    fn test_index_selection() {
        let mut sim = AuthzSimulator::default();
        sim.select_role_index(1);
        sim.select_endpoint_index(2);
        assert_eq!(sim.role(), Role::Manager);
        assert_eq!(sim.endpoint(), Endpoint::Billing);
        assert_eq!(sim.decision().verdict, Verdict::Forbidden);
    }
}
