//! Actors and scripted message hops for the authentication sequence player

use serde::Serialize;

use crate::error::Result;
use crate::scenario::{self, ScenarioCase};
use crate::tone::{Glyph, Tone};

/// A lifeline on the sequence diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Actor {
    Client,
    AuthServer,
    Database,
    LocalStorage,
}

impl Actor {
    pub const ALL: [Actor; 4] = [
        Actor::Client,
        Actor::AuthServer,
        Actor::Database,
        Actor::LocalStorage,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Actor::Client => "Browser / Client",
            Actor::AuthServer => "Auth Server",
            Actor::Database => "Database",
            Actor::LocalStorage => "localStorage",
        }
    }

    pub fn glyph(self) -> Glyph {
        match self {
            Actor::Client => Glyph::Monitor,
            Actor::AuthServer => Glyph::ShieldCheck,
            Actor::Database => Glyph::Database,
            Actor::LocalStorage => Glyph::HardDrive,
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Actor::Client => Tone::Blue,
            Actor::AuthServer => Tone::Indigo,
            Actor::Database => Tone::Violet,
            Actor::LocalStorage => Tone::Emerald,
        }
    }

    /// Horizontal position of the lifeline, in percent of the canvas width.
    pub fn x_percent(self) -> u8 {
        match self {
            Actor::Client => 12,
            Actor::AuthServer => 40,
            Actor::Database => 68,
            Actor::LocalStorage => 92,
        }
    }
}

/// One message between two actors. `from == to` is a self action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hop {
    pub from: Actor,
    pub to: Actor,
    pub label: &'static str,
    pub payload: &'static str,
    pub tone: Tone,
    pub glyph: Glyph,
}

impl Hop {
    pub fn is_self(&self) -> bool {
        self.from == self.to
    }
}

const fn hop(
    from: Actor,
    to: Actor,
    label: &'static str,
    payload: &'static str,
    tone: Tone,
    glyph: Glyph,
) -> Hop {
    Hop {
        from,
        to,
        label,
        payload,
        tone,
        glyph,
    }
}

use self::Actor::{AuthServer, Client, Database, LocalStorage};

pub static AUTH_SCENARIOS: [ScenarioCase<Hop>; 4] = [
    ScenarioCase {
        id: "login-success",
        label: "✓ Login Success",
        tone: Tone::Emerald,
        steps: &[
            hop(Client, AuthServer, "POST /login", "{\"user\":\"alice\",\"pass\":\"••••\"}", Tone::Blue, Glyph::User),
            hop(AuthServer, Database, "SQL Lookup", "SELECT * FROM users WHERE email=? LIMIT 1", Tone::Purple, Glyph::Database),
            hop(Database, AuthServer, "Row Found", "{ id:42, role:\"admin\", hash:\"$2b$...\" }", Tone::Emerald, Glyph::CheckCircle),
            hop(AuthServer, AuthServer, "bcrypt.compare()", "Verify password hash — match ✓", Tone::Green, Glyph::Lock),
            hop(AuthServer, Client, "JWT Issued", "eyJhbGci.eyJzdWIiOiI0Mn0.SflK...", Tone::Amber, Glyph::Key),
            hop(Client, LocalStorage, "Stored in localStorage", "key: \"auth_token\" ← JWT saved", Tone::Indigo, Glyph::HardDrive),
        ],
        result: "User authenticated. JWT token (exp: 24h) issued and stored client-side.",
    },
    ScenarioCase {
        id: "wrong-password",
        label: "✗ Wrong Password",
        tone: Tone::Rose,
        steps: &[
            hop(Client, AuthServer, "POST /login", "{\"user\":\"alice\",\"pass\":\"wrong123\"}", Tone::Blue, Glyph::User),
            hop(AuthServer, Database, "SQL Lookup", "SELECT * FROM users WHERE email=?", Tone::Purple, Glyph::Database),
            hop(Database, AuthServer, "Row Found", "{ id:42, hash:\"$2b$...\" }", Tone::Emerald, Glyph::CheckCircle),
            hop(AuthServer, AuthServer, "bcrypt.compare()", "Hash mismatch ✗ — reject!", Tone::Red, Glyph::XCircle),
            hop(AuthServer, Client, "401 Unauthorized", "{\"error\":\"Invalid credentials\"}", Tone::Red, Glyph::AlertCircle),
        ],
        result: "401 Unauthorized — Password hash mismatch. Generic error to prevent username enumeration.",
    },
    ScenarioCase {
        id: "token-expired",
        label: "⏰ Token Expired",
        tone: Tone::Amber,
        steps: &[
            hop(Client, AuthServer, "GET /api/data", "Authorization: Bearer eyJhbGci... (old)", Tone::Blue, Glyph::Lock),
            hop(AuthServer, AuthServer, "jwt.verify()", "Check signature OK. Check exp: 1708000000 ✗ EXPIRED", Tone::Amber, Glyph::AlertCircle),
            hop(AuthServer, Client, "401 Token Expired", "{\"error\":\"Token expired\",\"code\":\"JWT_EXP\"}", Tone::Amber, Glyph::AlertCircle),
            hop(Client, AuthServer, "POST /auth/refresh", "{ refreshToken: \"eyJ...\" }", Tone::Emerald, Glyph::Key),
            hop(AuthServer, Client, "New JWT Issued", "eyJhbGci.eyJuZXci0.newToken...", Tone::Emerald, Glyph::CheckCircle),
        ],
        result: "401 Expired → Client uses Refresh Token → New JWT issued without re-login.",
    },
    ScenarioCase {
        id: "no-token",
        label: "🔒 No Token",
        tone: Tone::Slate,
        steps: &[
            hop(Client, AuthServer, "GET /api/profile", "(no Authorization header)", Tone::Slate, Glyph::Unlock),
            hop(AuthServer, AuthServer, "Auth Middleware", "req.headers.authorization === undefined", Tone::Red, Glyph::ShieldAlert),
            hop(AuthServer, Client, "401 Challenge", "WWW-Authenticate: Bearer realm=\"api\"", Tone::Red, Glyph::AlertCircle),
        ],
        result: "401 Unauthorized — No credentials. Auth Middleware calls ChallengeAsync() immediately.",
    },
];

pub fn find(id: &str) -> Result<&'static ScenarioCase<Hop>> {
    scenario::find(&AUTH_SCENARIOS, "auth scenario", id, |s| s.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hop_counts() {
        let counts: Vec<_> = AUTH_SCENARIOS.iter().map(|s| s.len()).collect();
        assert_eq!(counts, vec![6, 5, 5, 3]);
    }

    #[test]
    fn test_actor_positions_increase_left_to_right() {
        let xs: Vec<_> = Actor::ALL.iter().map(|a| a.x_percent()).collect();
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
        assert!(xs.iter().all(|&x| x <= 100));
    }

    #[test]
    fn test_every_scenario_has_a_self_action() {
        for s in &AUTH_SCENARIOS {
            assert!(s.steps.iter().any(Hop::is_self), "{}", s.id);
        }
    }

    #[test]
    fn test_find_scenario() {
        let s = find("no-token").unwrap();
        assert_eq!(s.steps[2].label, "401 Challenge");
        assert!(find("mfa").is_err());
    }
}
