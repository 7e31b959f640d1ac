//! Consistency checks over every shipped table
//!
//! The permission matrix is checked for totality when first used; the other
//! tables are plain statics, so their invariants are verified here and by
//! `restsec check`.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::content::{HERO, JWT_DIAGRAM, JWT_TOKEN_SEGMENTS, NAV_LINKS, SECTION_ANCHORS, SECURITY_FLOWS};
use crate::error::{Error, Result};
use crate::permissions::{PermissionMatrix, STANDARD_GRANTS};
use crate::pipeline::STAGES;
use crate::samples::CODE_TABS;
use crate::sequence::AUTH_SCENARIOS;
use crate::traffic::LANES;
use crate::validation::VALIDATION_CASES;

/// Outcome of checking one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableReport {
    pub table: &'static str,
    pub rows: usize,
}

fn ensure(cond: bool, message: impl FnOnce() -> String) -> Result<()> {
    if cond {
        Ok(())
    } else {
        Err(Error::table(message()))
    }
}

fn unique_ids<'a>(table: &str, ids: impl IntoIterator<Item = &'a str>) -> Result<usize> {
    let mut seen = HashSet::new();
    for id in ids {
        ensure(seen.insert(id), || format!("{table}: duplicate id '{id}'"))?;
    }
    Ok(seen.len())
}

pub fn check_permissions() -> Result<TableReport> {
    PermissionMatrix::build(STANDARD_GRANTS)?;
    Ok(TableReport {
        table: "permissions",
        rows: STANDARD_GRANTS.len(),
    })
}

pub fn check_validation_cases() -> Result<TableReport> {
    let rows = unique_ids("validation", VALIDATION_CASES.iter().map(|c| c.id()))?;
    for case in &VALIDATION_CASES {
        ensure(!case.rules().is_empty(), || {
            format!("validation case '{}' has no rules", case.id())
        })?;
        ensure(case.scenario.result.starts_with("200") == case.ok(), || {
            format!(
                "validation case '{}' verdict disagrees with its rules",
                case.id()
            )
        })?;
    }
    Ok(TableReport {
        table: "validation",
        rows,
    })
}

pub fn check_auth_scenarios() -> Result<TableReport> {
    let rows = unique_ids("authn", AUTH_SCENARIOS.iter().map(|s| s.id))?;
    for scenario in &AUTH_SCENARIOS {
        ensure(!scenario.is_empty(), || {
            format!("auth scenario '{}' has no hops", scenario.id)
        })?;
    }
    Ok(TableReport {
        table: "authn",
        rows,
    })
}

pub fn check_pipeline() -> Result<TableReport> {
    let labels: HashSet<_> = STAGES.iter().map(|s| s.label).collect();
    ensure(labels.len() == STAGES.len(), || {
        "pipeline: stage labels must be distinct".to_string()
    })?;
    Ok(TableReport {
        table: "pipeline",
        rows: STAGES.len(),
    })
}

pub fn check_lanes() -> Result<TableReport> {
    ensure(!LANES.is_empty(), || "traffic: no lanes".to_string())?;
    Ok(TableReport {
        table: "traffic",
        rows: LANES.len(),
    })
}

pub fn check_content() -> Result<TableReport> {
    for flow in SECURITY_FLOWS.flows {
        let d = &flow.diagram;
        ensure(!d.nodes.is_empty() && d.arrows.len() == d.nodes.len() - 1, || {
            format!(
                "flow '{}': {} nodes need {} arrows, found {}",
                flow.name,
                d.nodes.len(),
                d.nodes.len().saturating_sub(1),
                d.arrows.len()
            )
        })?;
    }
    ensure(JWT_DIAGRAM.parts.len() == JWT_TOKEN_SEGMENTS.len(), || {
        "jwt: part count differs from token segment count".to_string()
    })?;
    ensure(HERO.content.len() == HERO.accents.len(), || {
        "hero: every entry needs an accent".to_string()
    })?;
    for entry in HERO.content {
        ensure(entry.contains(':'), || {
            format!("hero: entry has no heading separator: {entry}")
        })?;
    }
    for link in &NAV_LINKS {
        ensure(SECTION_ANCHORS.contains(&link.anchor), || {
            format!("nav: link '{}' targets missing section", link.anchor)
        })?;
    }
    Ok(TableReport {
        table: "content",
        rows: SECURITY_FLOWS.flows.len() + JWT_DIAGRAM.parts.len() + HERO.content.len(),
    })
}

pub fn check_samples() -> Result<TableReport> {
    let rows = unique_ids("samples", CODE_TABS.iter().map(|t| t.id))?;
    for tab in &CODE_TABS {
        ensure(!tab.files.is_empty(), || {
            format!("samples: tab '{}' has no files", tab.id)
        })?;
    }
    Ok(TableReport {
        table: "samples",
        rows,
    })
}

/// Run every table check, stopping at the first failure.
pub fn check_all() -> Result<Vec<TableReport>> {
    let checks: [fn() -> Result<TableReport>; 7] = [
        check_permissions,
        check_validation_cases,
        check_auth_scenarios,
        check_pipeline,
        check_lanes,
        check_content,
        check_samples,
    ];

    checks
        .iter()
        .map(|check| {
            let report = check()?;
            debug!("Table '{}' ok ({} rows)", report.table, report.rows);
            Ok(report)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_tables_pass() {
        let reports = check_all().unwrap();
        assert_eq!(reports.len(), 7);
        let permissions = &reports[0];
        assert_eq!(permissions.table, "permissions");
        assert_eq!(permissions.rows, 16);
    }

    #[test]
    fn test_duplicate_ids_are_reported() {
        let err = unique_ids("demo", ["a", "b", "a"]).unwrap_err();
        assert!(err.is_fatal());
        assert!(err.to_string().contains("duplicate id 'a'"));
    }
}
