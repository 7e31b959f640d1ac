//! Role × endpoint permission matrix for the authorization simulator
//!
//! The shipped table is declared as one [`Grant`] row per (role, endpoint)
//! pair and checked for totality when it is first used.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::tone::{Glyph, Tone};

/// Identity presented by the simulated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Manager,
    Guest,
    NoAuth,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Manager, Role::Guest, Role::NoAuth];

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::Guest => "Guest",
            Role::NoAuth => "No Auth",
        }
    }

    /// Headline status range shown next to the role picker.
    pub fn status_summary(self) -> &'static str {
        match self {
            Role::Admin => "200 OK",
            Role::Manager | Role::Guest => "200 / 403",
            Role::NoAuth => "401",
        }
    }

    pub fn is_authenticated(self) -> bool {
        self != Role::NoAuth
    }

    pub fn glyph(self) -> Glyph {
        match self {
            Role::Admin => Glyph::ShieldCheck,
            Role::Manager => Glyph::User,
            Role::Guest => Glyph::Unlock,
            Role::NoAuth => Glyph::AlertCircle,
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Role::Admin => Tone::Violet,
            Role::Manager => Tone::Blue,
            Role::Guest => Tone::Slate,
            Role::NoAuth => Tone::Rose,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Role> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace(['_', ' '], "-").as_str() {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "guest" => Ok(Role::Guest),
            "no-auth" | "noauth" | "anonymous" => Ok(Role::NoAuth),
            _ => Err(Error::unknown("role", s)),
        }
    }
}

/// Protected resource the caller is trying to reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Endpoint {
    #[serde(rename = "/admin/panel")]
    AdminPanel,
    #[serde(rename = "/api/users")]
    Users,
    #[serde(rename = "/api/billing")]
    Billing,
    #[serde(rename = "/api/reports")]
    Reports,
}

impl Endpoint {
    pub const ALL: [Endpoint; 4] = [
        Endpoint::AdminPanel,
        Endpoint::Users,
        Endpoint::Billing,
        Endpoint::Reports,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Endpoint::AdminPanel => "/admin/panel",
            Endpoint::Users => "/api/users",
            Endpoint::Billing => "/api/billing",
            Endpoint::Reports => "/api/reports",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Endpoint> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Endpoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|e| e.path() == s)
            .ok_or_else(|| Error::unknown("endpoint", s))
    }
}

/// One declared row of the permission table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Grant {
    pub role: Role,
    pub endpoint: Endpoint,
    pub allowed: bool,
}

const fn grant(role: Role, endpoint: Endpoint, allowed: bool) -> Grant {
    Grant {
        role,
        endpoint,
        allowed,
    }
}

/// The table the site ships with.
pub const STANDARD_GRANTS: &[Grant] = &[
    grant(Role::Admin, Endpoint::AdminPanel, true),
    grant(Role::Admin, Endpoint::Users, true),
    grant(Role::Admin, Endpoint::Billing, true),
    grant(Role::Admin, Endpoint::Reports, true),
    grant(Role::Manager, Endpoint::AdminPanel, false),
    grant(Role::Manager, Endpoint::Users, true),
    grant(Role::Manager, Endpoint::Billing, false),
    grant(Role::Manager, Endpoint::Reports, true),
    grant(Role::Guest, Endpoint::AdminPanel, false),
    grant(Role::Guest, Endpoint::Users, false),
    grant(Role::Guest, Endpoint::Billing, false),
    grant(Role::Guest, Endpoint::Reports, false),
    grant(Role::NoAuth, Endpoint::AdminPanel, false),
    grant(Role::NoAuth, Endpoint::Users, false),
    grant(Role::NoAuth, Endpoint::Billing, false),
    grant(Role::NoAuth, Endpoint::Reports, false),
];

// Built from a const table, so a gap or duplicate panics on first use in
// every build profile. `test_standard_matrix_is_total` and `tables::check_all`
// keep that from shipping.
static STANDARD: LazyLock<PermissionMatrix> = LazyLock::new(|| {
    PermissionMatrix::build(STANDARD_GRANTS).expect("Standard grant table is total")
});

/// Total mapping (role, endpoint) → allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionMatrix {
    cells: [[bool; 4]; 4],
}

impl PermissionMatrix {
    /// Build a matrix, rejecting tables with a missing or repeated pair.
    pub fn build(grants: &[Grant]) -> Result<Self> {
        let mut cells = [[None::<bool>; 4]; 4];

        for g in grants {
            let cell = &mut cells[g.role.index()][g.endpoint.index()];
            if cell.is_some() {
                return Err(Error::MatrixDuplicate {
                    role: g.role,
                    endpoint: g.endpoint,
                });
            }
            *cell = Some(g.allowed);
        }

        let mut out = [[false; 4]; 4];
        for role in Role::ALL {
            for endpoint in Endpoint::ALL {
                out[role.index()][endpoint.index()] = cells[role.index()][endpoint.index()]
                    .ok_or(Error::MatrixIncomplete { role, endpoint })?;
            }
        }

        Ok(Self { cells: out })
    }

    /// The shipped table, built once.
    pub fn standard() -> &'static PermissionMatrix {
        &STANDARD
    }

    pub fn allows(&self, role: Role, endpoint: Endpoint) -> bool {
        self.cells[role.index()][endpoint.index()]
    }

    /// Every endpoint with its permission for `role`, in display order.
    pub fn row(&self, role: Role) -> impl Iterator<Item = (Endpoint, bool)> + '_ {
        Endpoint::ALL
            .into_iter()
            .map(move |e| (e, self.allows(role, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_matrix_is_total() {
        assert!(PermissionMatrix::build(STANDARD_GRANTS).is_ok());
        assert_eq!(STANDARD_GRANTS.len(), Role::ALL.len() * Endpoint::ALL.len());
    }

    #[test]
    fn test_standard_matrix_rows() {
        let m = PermissionMatrix::standard();
        assert!(Endpoint::ALL.iter().all(|&e| m.allows(Role::Admin, e)));
        assert!(m.allows(Role::Manager, Endpoint::Users));
        assert!(m.allows(Role::Manager, Endpoint::Reports));
        assert!(!m.allows(Role::Manager, Endpoint::Billing));
        assert!(!m.allows(Role::Manager, Endpoint::AdminPanel));
        assert!(Endpoint::ALL.iter().all(|&e| !m.allows(Role::Guest, e)));
        assert!(Endpoint::ALL.iter().all(|&e| !m.allows(Role::NoAuth, e)));
    }

    #[test]
    fn test_build_rejects_missing_pair() {
        let err = PermissionMatrix::build(&STANDARD_GRANTS[..15]).unwrap_err();
        assert!(matches!(
            err,
            Error::MatrixIncomplete {
                role: Role::NoAuth,
                endpoint: Endpoint::Reports
            }
        ));
    }

    #[test]
    fn test_build_rejects_duplicate_pair() {
        let mut rows = STANDARD_GRANTS.to_vec();
        rows.push(grant(Role::Guest, Endpoint::Billing, true));
        let err = PermissionMatrix::build(&rows).unwrap_err();
        assert!(matches!(err, Error::MatrixDuplicate { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_index_round_trip_and_out_of_range() {
        for role in Role::ALL {
            assert_eq!(Role::from_index(role.index()), Some(role));
        }
        assert_eq!(Role::from_index(4), None);
        assert_eq!(Endpoint::from_index(2), Some(Endpoint::Billing));
        assert_eq!(Endpoint::from_index(9), None);
    }

    #[test]
    fn test_parse_role_and_endpoint() {
        assert_eq!("Admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("no_auth".parse::<Role>().unwrap(), Role::NoAuth);
        assert_eq!("No Auth".parse::<Role>().unwrap(), Role::NoAuth);
        assert!("root".parse::<Role>().is_err());

        assert_eq!(
            "/api/billing".parse::<Endpoint>().unwrap(),
            Endpoint::Billing
        );
        assert!("/api/secret".parse::<Endpoint>().is_err());
    }

    #[test]
    fn test_role_summaries() {
        assert_eq!(Role::Admin.status_summary(), "200 OK");
        assert_eq!(Role::Guest.status_summary(), "200 / 403");
        assert_eq!(Role::NoAuth.status_summary(), "401");
        assert!(!Role::NoAuth.is_authenticated());
    }
}
