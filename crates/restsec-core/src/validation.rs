//! Canned request payloads and the rule checks the scanner reveals for them

use serde::Serialize;

use crate::error::Result;
use crate::scenario::{self, ScenarioCase};
use crate::tone::Tone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Pass,
    Fail,
}

impl Outcome {
    pub fn is_pass(self) -> bool {
        self == Outcome::Pass
    }
}

/// One line of the scan report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleCheck {
    pub rule: &'static str,
    pub detail: &'static str,
    pub outcome: Outcome,
}

const fn pass(rule: &'static str, detail: &'static str) -> RuleCheck {
    RuleCheck {
        rule,
        detail,
        outcome: Outcome::Pass,
    }
}

const fn fail(rule: &'static str, detail: &'static str) -> RuleCheck {
    RuleCheck {
        rule,
        detail,
        outcome: Outcome::Fail,
    }
}

/// A request body plus the scripted verdict of the validation layer.
#[derive(Debug, Serialize)]
pub struct ValidationCase {
    #[serde(flatten)]
    pub scenario: ScenarioCase<RuleCheck>,
    pub payload: &'static str,
}

impl ValidationCase {
    pub fn id(&self) -> &'static str {
        self.scenario.id
    }

    pub fn rules(&self) -> &'static [RuleCheck] {
        self.scenario.steps
    }

    /// True when every rule passes.
    pub fn ok(&self) -> bool {
        self.rules().iter().all(|r| r.outcome.is_pass())
    }
}

pub static VALIDATION_CASES: [ValidationCase; 4] = [
    ValidationCase {
        scenario: ScenarioCase {
            id: "valid-json",
            label: "✓ Valid JSON",
            tone: Tone::Emerald,
            steps: &[
                pass(
                    "JSON Schema",
                    "username: string ✓, age: number ✓, role: enum ✓",
                ),
                pass("Length Check", "Payload 82 bytes — within 10KB limit ✓"),
                pass("Type Coercion", "No unexpected type coercion detected ✓"),
            ],
            result: "200 OK — Forwarded to Business Logic",
        },
        payload: "{\n  \"username\": \"alice\",\n  \"age\": 28,\n  \"role\": \"user\"\n}",
    },
    ValidationCase {
        scenario: ScenarioCase {
            id: "sql-injection",
            label: "✗ SQL Injection",
            tone: Tone::Rose,
            steps: &[
                pass("JSON Schema", "username: string ✓ (syntactically valid)"),
                pass("Length Check", "Payload 52 bytes — within limit ✓"),
                fail("SQL Pattern", "Dangerous pattern detected: \\' OR 1=1-- ✗"),
            ],
            result: "400 Bad Request — SQL injection pattern in 'username'",
        },
        payload: "{\n  \"username\": \"' OR 1=1--\",\n  \"password\": \"anything\"\n}",
    },
    ValidationCase {
        scenario: ScenarioCase {
            id: "xss",
            label: "✗ XSS Attack",
            tone: Tone::Rose,
            steps: &[
                pass("JSON Schema", "comment: string ✓"),
                fail("XSS Pattern", "<script> tag detected in \"comment\" field ✗"),
                fail("HTML Encoding", "Unescaped HTML entities found ✗"),
            ],
            result: "400 Bad Request — XSS payload detected in request body",
        },
        payload: "{\n  \"comment\": \"<script>\\n    document.cookie='x'\\n  </script>\"\n}",
    },
    ValidationCase {
        scenario: ScenarioCase {
            id: "missing-fields",
            label: "✗ Missing Fields",
            tone: Tone::Rose,
            steps: &[
                fail("JSON Schema", "Required field \"username\" missing ✗"),
                fail("JSON Schema", "Required field \"password\" missing ✗"),
                fail("Length Check", "N/A — Schema failed first ✗"),
            ],
            result: "422 Unprocessable Entity — Missing required fields: username, password",
        },
        payload: "{\n  \"email\": \"bob@example.com\"\n  // missing: username, password\n}",
    },
];

pub fn find(id: &str) -> Result<&'static ValidationCase> {
    scenario::find(&VALIDATION_CASES, "validation case", id, |c| c.id())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_valid_json_passes() {
        let ok: Vec<_> = VALIDATION_CASES.iter().map(|c| c.ok()).collect();
        assert_eq!(ok, vec![true, false, false, false]);
    }

    #[test]
    fn test_every_case_has_three_rules() {
        for case in &VALIDATION_CASES {
            assert_eq!(case.rules().len(), 3, "{}", case.id());
        }
    }

    #[test]
    fn test_result_status_matches_verdict() {
        for case in &VALIDATION_CASES {
            let status = case.scenario.result.starts_with("200");
            assert_eq!(status, case.ok(), "{}", case.id());
        }
    }

    #[test]
    fn test_find_by_id() {
        assert_eq!(find("xss").unwrap().scenario.label, "✗ XSS Attack");
        assert!(find("csrf").unwrap_err().is_recoverable());
    }

    #[test]
    fn test_payload_keeps_escaped_newlines() {
        let xss = find("xss").unwrap();
        assert!(xss.payload.contains("<script>\\n"));
        assert_eq!(xss.payload.lines().count(), 3);
    }
}
