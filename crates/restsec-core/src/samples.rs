//! ASP.NET Core code samples shown in the C# implementation section

use serde::Serialize;

use crate::error::Result;
use crate::highlight::Lang;
use crate::scenario;
use crate::tone::{Glyph, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodeFile {
    pub filename: &'static str,
    pub lang: Lang,
    pub code: &'static str,
}

impl CodeFile {
    pub fn lines(&self) -> impl Iterator<Item = &'static str> {
        self.code.lines()
    }
}

#[derive(Debug, Serialize)]
pub struct CodeTab {
    pub id: &'static str,
    pub label: &'static str,
    pub glyph: Glyph,
    pub tone: Tone,
    pub badge: &'static str,
    pub description: &'static str,
    pub files: &'static [CodeFile],
    pub tip: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SectionHeader {
    pub badge: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const HEADER: SectionHeader = SectionHeader {
    badge: "C# Implementation",
    title: "How to implement it in C# / ASP.NET Core",
    subtitle: "Real-world, production-ready code snippets to secure your RESTful API",
};

macro_rules! sample {
    ($filename:literal, $lang:ident, $path:literal) => {
        CodeFile {
            filename: $filename,
            lang: Lang::$lang,
            code: include_str!(concat!("../samples/", $path)),
        }
    };
}

pub static CODE_TABS: [CodeTab; 5] = [
    CodeTab {
        id: "jwt",
        label: "JWT Authentication",
        glyph: Glyph::Key,
        tone: Tone::Amber,
        badge: "Microsoft.AspNetCore.Authentication.JwtBearer",
        description: "Set up JWT Bearer Authentication in ASP.NET Core. The server verifies the token signature using a secret key, extracts the claims, and assigns them to HttpContext.User.",
        files: &[
            sample!("Program.cs", CSharp, "jwt_1.cs"),
            sample!("Services/TokenService.cs", CSharp, "jwt_2.cs"),
            sample!("Controllers/AuthController.cs", CSharp, "jwt_3.cs"),
        ],
        tip: "Never store the JWT secret in source code. Use dotnet user-secrets in development and Azure Key Vault or environment variables in production.",
    },
    CodeTab {
        id: "authz",
        label: "Authorization (RBAC)",
        glyph: Glyph::ShieldCheck,
        tone: Tone::Violet,
        badge: "Role-Based & Policy-Based",
        description: "Control access by Role or Policy. ASP.NET Core Authorization Middleware automatically validates the user claims before allowing the request to reach the handler.",
        files: &[
            sample!("Program.cs — Authorization Policies", CSharp, "authz_1.cs"),
            sample!("Controllers/AdminController.cs", CSharp, "authz_2.cs"),
            sample!("Requirements/MinAgeRequirement.cs", CSharp, "authz_3.cs"),
        ],
        tip: "Prefer Policies over manual role checks (if user.IsInRole) — Policies are more flexible and much easier to unit test.",
    },
    CodeTab {
        id: "ratelimit",
        label: "Rate Limiting",
        glyph: Glyph::Activity,
        tone: Tone::Rose,
        badge: "Microsoft.AspNetCore.RateLimiting (.NET 7+)",
        description: "Limit the number of requests per IP/user within a time window. The built-in .NET 7+ Rate Limiter supports Fixed Window, Sliding Window, Token Bucket, and Concurrency limiters.",
        files: &[
            sample!("Program.cs", CSharp, "ratelimit_1.cs"),
            sample!("Controllers/ApiController.cs", CSharp, "ratelimit_2.cs"),
            sample!("Middleware/IpRateLimitMiddleware.cs", CSharp, "ratelimit_3.cs"),
        ],
        tip: "In production, use a Redis-backed rate limiter (AspNetCoreRateLimit) so it works correctly when scaled across multiple instances.",
    },
    CodeTab {
        id: "validation",
        label: "Input Validation",
        glyph: Glyph::FileCheck,
        tone: Tone::Emerald,
        badge: "FluentValidation + DataAnnotations",
        description: "Validate every input from the client on the server side. Use FluentValidation for complex rules or DataAnnotations for simple ones. Never trust data coming from the client.",
        files: &[
            sample!("DTOs/CreateUserDto.cs — DataAnnotations", CSharp, "validation_1.cs"),
            sample!("Validators/CreateUserValidator.cs — FluentValidation", CSharp, "validation_2.cs"),
            sample!("Controllers/UsersController.cs", CSharp, "validation_3.cs"),
        ],
        tip: "FluentValidation supports async rules (MustAsync), making it ideal for DB checks like \"is this email already taken?\".",
    },
    CodeTab {
        id: "https",
        label: "HTTPS & Headers",
        glyph: Glyph::Lock,
        tone: Tone::Blue,
        badge: "TLS / HSTS / Security Headers",
        description: "Secure the transport layer with TLS/SSL, enforce HTTPS, and add HTTP Security Headers to protect against XSS, clickjacking, and content sniffing.",
        files: &[
            sample!("Program.cs", CSharp, "https_1.cs"),
            sample!("Middleware/SecurityHeadersMiddleware.cs", CSharp, "https_2.cs"),
            sample!("appsettings.json", Json, "https_3.json"),
        ],
        tip: "Content Security Policy (CSP) is the most important header for preventing XSS. Test your CSP config with report-uri.com before deploying.",
    },
];

pub fn find(id: &str) -> Result<&'static CodeTab> {
    scenario::find(&CODE_TABS, "code tab", id, |t| t.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tab_has_files() {
        for tab in &CODE_TABS {
            assert!((2..=3).contains(&tab.files.len()), "{}", tab.id);
            for file in tab.files {
                assert!(!file.code.trim().is_empty(), "{}", file.filename);
                assert!(!file.code.ends_with('\n'), "{}", file.filename);
            }
        }
    }

    #[test]
    fn test_only_appsettings_is_json() {
        let json: Vec<_> = CODE_TABS
            .iter()
            .flat_map(|t| t.files)
            .filter(|f| f.lang == Lang::Json)
            .map(|f| f.filename)
            .collect();
        assert_eq!(json, vec!["appsettings.json"]);
    }

    #[test]
    fn test_jwt_program_registers_bearer_auth() {
        let tab = find("jwt").unwrap();
        assert!(tab.files[0].code.contains("JwtBearer"));
        assert!(find("grpc").is_err());
    }
}
