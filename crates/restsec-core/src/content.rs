//! Immutable display text for every section of the guide
//!
//! Strings are stored as authored and may carry `[cite: N]` markers; callers
//! pass them through [`crate::text::clean`] when composing a section.

use serde::Serialize;

use crate::tone::{Glyph, Tone};

// ─────────────────────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Brand {
    pub mark: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
}

pub const BRAND: Brand = Brand {
    mark: "S",
    name: "Security in RESTful",
    tagline: "Tech Documentation",
};

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink {
        label: "Luồng Standard",
        anchor: "flow",
    },
    NavLink {
        label: "Khái niệm",
        anchor: "concepts",
    },
    NavLink {
        label: "JWT",
        anchor: "jwt",
    },
    NavLink {
        label: "ABAC (Advanced)",
        anchor: "abac",
    },
    NavLink {
        label: "C#",
        anchor: "csharp",
    },
];

/// Every anchored section on the page, in scroll order.
pub const SECTION_ANCHORS: [&str; 7] = [
    "flow",
    "concepts",
    "jwt",
    "sequence",
    "conclusion",
    "abac",
    "csharp",
];

pub const FOOTER_TITLE: &str = "Security in RESTful WebService — 2024 Technical Guide";
pub const FOOTER_NOTE: &str = "Built with Rust + Leptos + Tailwind";

// ─────────────────────────────────────────────────────────────────────────
// Hero
// ─────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Accent {
    pub glyph: Glyph,
    pub tone: Tone,
}

#[derive(Debug, Serialize)]
pub struct HeroCode {
    pub filename: &'static str,
    pub lines: &'static [&'static str],
    pub status_title: &'static str,
    pub status_sub: &'static str,
}

/// Landing block. Each `content` entry reads `"Heading: description"`.
#[derive(Debug, Serialize)]
pub struct Hero {
    pub badge: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub content: &'static [&'static str],
    pub accents: &'static [Accent],
    pub code: HeroCode,
}

pub const HERO: Hero = Hero {
    badge: "Enterprise Security Standard v2.0",
    title: "Bảo mật trong RESTful WebService",
    subtitle: "Tại sao hệ thống của bạn cần được bảo vệ?",
    content: &[
        "Bảo vệ dữ liệu (Data Protection): Xác định rõ quyền truy cập, đặc biệt với các method như DELETE (xóa tài nguyên) và PUT (cập nhật tài nguyên).",
        "Chống tấn công DOS: Ngăn chặn API rơi vào trạng thái ngừng hoạt động do bị quá tải nếu không có biện pháp bảo mật đúng đắn.",
        "Chống Farming: Nếu không có cơ chế xác thực/cấp quyền, API có thể bị lạm dụng, làm quá tải server và giảm tốc độ phản hồi.",
    ],
    accents: &[
        Accent {
            glyph: Glyph::ShieldAlert,
            tone: Tone::Blue,
        },
        Accent {
            glyph: Glyph::Zap,
            tone: Tone::Amber,
        },
        Accent {
            glyph: Glyph::TrendingDown,
            tone: Tone::Rose,
        },
    ],
    code: HeroCode {
        filename: "auth_middleware.ts",
        lines: &[
            "async function secureRequest(req, res) {",
            "  const token = req.headers['Authorization'];",
            "  if (!token) return ChallengeAsync();",
            "  const user = await verifyJWT(token);",
            "  await enforceABAC(user, req.resource);",
            "}",
        ],
        status_title: "Secure",
        status_sub: "Middleware Active",
    },
};

// ─────────────────────────────────────────────────────────────────────────
// Core concepts
// ─────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardIcon {
    ShieldCheck,
    Key,
}

impl CardIcon {
    pub fn glyph(self) -> Glyph {
        match self {
            CardIcon::ShieldCheck => Glyph::ShieldCheck,
            CardIcon::Key => Glyph::Key,
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            CardIcon::ShieldCheck => Tone::Blue,
            CardIcon::Key => Tone::Violet,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            CardIcon::ShieldCheck => "WHO you are",
            CardIcon::Key => "WHAT you can do",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ComparisonCard {
    pub header: &'static str,
    pub icon: CardIcon,
    pub description: &'static str,
    pub analogy: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Comparison {
    pub title: &'static str,
    pub left: ComparisonCard,
    pub right: ComparisonCard,
}

pub const COMPARISON: Comparison = Comparison {
    title: "Khái niệm Cốt lõi: Authentication vs Authorization",
    left: ComparisonCard {
        header: "Authentication (Xác thực)",
        icon: CardIcon::ShieldCheck,
        description: "Là quá trình xác định danh tính của một người dùng. Người dùng cung cấp thông tin xác thực (credentials) để so sánh với dữ liệu được lưu trữ.",
        analogy: "Giống như việc bạn xuất trình thẻ từ để bước qua cửa chính của một tòa nhà server.",
    },
    right: ComparisonCard {
        header: "Authorization (Cấp quyền)",
        icon: CardIcon::Key,
        description: "Là quá trình xác định xem người dùng có quyền truy cập vào một tài nguyên cụ thể hay không. Nó quyết định những gì người dùng được phép làm.",
        analogy: "Sau khi vào tòa nhà, nó quyết định bạn được phép vào những phòng nào và thao tác trên những thiết bị nào.",
    },
};

// ─────────────────────────────────────────────────────────────────────────
// Best practices
// ─────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridItem {
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Serialize)]
pub struct GridList {
    pub title: &'static str,
    pub items: &'static [GridItem],
}

pub const BEST_PRACTICES: GridList = GridList {
    title: "Best Practices cho RESTful API",
    items: &[
        GridItem {
            title: "Validation",
            desc: "Xác thực mọi input trên server để chống SQL/NoSQL injection.",
        },
        GridItem {
            title: "No Sensitive Data in URL",
            desc: "Không bao giờ truyền username, password hoặc token trong URL; hãy dùng method POST.",
        },
        GridItem {
            title: "Method Restriction",
            desc: "Giới hạn nghiêm ngặt các method GET, POST, DELETE. Method GET không được phép có khả năng xóa dữ liệu.",
        },
        GridItem {
            title: "Generic Error Messages",
            desc: "Sử dụng mã lỗi HTTP chuẩn (ví dụ 403 Forbidden).",
        },
    ],
};

// ─────────────────────────────────────────────────────────────────────────
// JWT structure
// ─────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JwtPart {
    pub step: &'static str,
    pub label: &'static str,
    pub sublabel: &'static str,
    pub detail: &'static str,
    pub glyph: Glyph,
    pub tone: Tone,
}

#[derive(Debug, Serialize)]
pub struct JwtDiagram {
    pub title: &'static str,
    pub description: &'static str,
    pub parts: &'static [JwtPart],
}

pub const JWT_DIAGRAM: JwtDiagram = JwtDiagram {
    title: "Kiến trúc JSON Web Token (JWT)",
    description: "JWT bao gồm 3 phần: Header, Payload, và Signature. Kích thước nhỏ gọn, dễ dàng truyền tải trong môi trường HTML và HTTP.",
    parts: &[
        JwtPart {
            step: "1",
            label: "Header",
            sublabel: "Algorithm + Type",
            detail: "Chứa thông tin thuật toán (vd: HMAC SHA256) và loại token (JWT). Được encode bằng Base64Url.",
            glyph: Glyph::FileCode,
            tone: Tone::Red,
        },
        JwtPart {
            step: "2",
            label: "Payload",
            sublabel: "User Claims",
            detail: "Chứa các 'claims' (thông tin về user) như sub, name, iat. Không nên chứa dữ liệu nhạy cảm vì chỉ được encode, không encrypt.",
            glyph: Glyph::Database,
            tone: Tone::Purple,
        },
        JwtPart {
            step: "3",
            label: "Signature",
            sublabel: "HMAC SHA256",
            detail: "Được tạo bằng cách kết hợp encoded header, encoded payload, và một chuỗi secret. Đảm bảo token không bị giả mạo.",
            glyph: Glyph::ShieldCheck,
            tone: Tone::Blue,
        },
    ],
};

/// Base64url segments of the sample token, in part order.
pub const JWT_TOKEN_SEGMENTS: [&str; 3] = [
    "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9",
    "eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIn0",
    "SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c",
];

pub const JWT_LABELS: JwtLabels = JwtLabels {
    inspect_hint: "Click box to inspect",
    preview: "JWT Token Preview",
    structure: "JWT Structure",
    formula: "JWT Token = Header.Payload.Signature",
    empty_hint: "↑ Click một node để xem chi tiết",
};

#[derive(Debug, Serialize)]
pub struct JwtLabels {
    pub inspect_hint: &'static str,
    pub preview: &'static str,
    pub structure: &'static str,
    pub formula: &'static str,
    pub empty_hint: &'static str,
}

/// Toggle the inspected part: clicking the open part closes it.
pub fn toggle_part(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

// ─────────────────────────────────────────────────────────────────────────
// Security flows
// ─────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlowNode {
    pub label: &'static str,
    pub sublabel: &'static str,
    pub glyph: Glyph,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlowArrow {
    pub label: &'static str,
    pub tone: Tone,
}

/// Architecture strip drawn above a flow's step list.
#[derive(Debug, Serialize)]
pub struct FlowDiagram {
    pub nodes: &'static [FlowNode],
    pub arrows: &'static [FlowArrow],
    pub tone: Tone,
}

#[derive(Debug, Serialize)]
pub struct SecurityFlow {
    pub name: &'static str,
    pub steps: &'static [&'static str],
    pub diagram: FlowDiagram,
}

#[derive(Debug, Serialize)]
pub struct SecurityFlows {
    pub title: &'static str,
    pub diagram_label: &'static str,
    pub flows: &'static [SecurityFlow],
}

const fn node(label: &'static str, sublabel: &'static str, glyph: Glyph, tone: Tone) -> FlowNode {
    FlowNode {
        label,
        sublabel,
        glyph,
        tone,
    }
}

const fn arrow(label: &'static str, tone: Tone) -> FlowArrow {
    FlowArrow { label, tone }
}

pub const SECURITY_FLOWS: SecurityFlows = SecurityFlows {
    title: "Luồng hoạt động (Security Flow)",
    diagram_label: "Architecture Flow",
    flows: &[
        SecurityFlow {
            name: "Truy cập khi chưa xác thực",
            steps: &[
                "Request đến Authentication Middleware.",
                "Middleware kiểm tra credential. Nếu không có, gán User thành anonymous.",
                "Authorization Middleware kiểm tra quyền. Nếu cần quyền, gọi ChallengeAsync() để từ chối/redirect.",
            ],
            diagram: FlowDiagram {
                nodes: &[
                    node("Client", "Anonymous", Glyph::User, Tone::Slate),
                    node("Auth Middleware", "Checks cred", Glyph::ShieldQuestion, Tone::Amber),
                    node("ChallengeAsync", "403 / Redirect", Glyph::CheckCircle, Tone::Rose),
                ],
                arrows: &[
                    arrow("Request", Tone::Amber),
                    arrow("No cred → Reject", Tone::Red),
                ],
                tone: Tone::Amber,
            },
        },
        SecurityFlow {
            name: "Quá trình Đăng nhập (Signing In)",
            steps: &[
                "User gửi ID & Password qua Login form.",
                "Hệ thống kiểm tra với database.",
                "Nếu dùng JWT, tạo JWT Token chứa claims của User.",
                "Gửi JWT Token về cho client lưu trữ (Local storage, session, cookie).",
            ],
            diagram: FlowDiagram {
                nodes: &[
                    node("User Client", "ID + Password", Glyph::User, Tone::Slate),
                    node("Database", "Verify cred", Glyph::Database, Tone::Emerald),
                    node("JWT Service", "Create Token", Glyph::KeyRound, Tone::Blue),
                    node("Client Storage", "localStorage", Glyph::HardDrive, Tone::Violet),
                ],
                arrows: &[
                    arrow("Login form", Tone::Emerald),
                    arrow("Check", Tone::Blue),
                    arrow("JWT Token", Tone::Purple),
                ],
                tone: Tone::Emerald,
            },
        },
        SecurityFlow {
            name: "Các Request tiếp theo",
            steps: &[
                "User gửi request kèm token trong Authorization header.",
                "Authentication Middleware đọc token, tạo ClaimsIdentity và cập nhật HttpContext.",
                "Authorization Middleware kiểm tra HttpContext.User và cho phép truy cập.",
            ],
            diagram: FlowDiagram {
                nodes: &[
                    node("Client", "Auth header", Glyph::User, Tone::Slate),
                    node("Auth Middleware", "Reads token", Glyph::ShieldQuestion, Tone::Blue),
                    node("Authorization", "Check policy", Glyph::CheckCircle, Tone::Emerald),
                ],
                arrows: &[
                    arrow("Bearer token", Tone::Blue),
                    arrow("ClaimsIdentity", Tone::Emerald),
                ],
                tone: Tone::Blue,
            },
        },
    ],
};

// ─────────────────────────────────────────────────────────────────────────
// Pros / cons and conclusion
// ─────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ProsCons {
    pub title: &'static str,
    pub pros_header: &'static str,
    pub cons_header: &'static str,
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
}

pub const PROS_CONS: ProsCons = ProsCons {
    title: "Điểm mạnh & Điểm yếu của JWT trong RESTful",
    pros_header: "Điểm mạnh (Pros)",
    cons_header: "Điểm yếu (Cons)",
    pros: &[
        "Nhỏ gọn (Compact): Kích thước nhỏ hơn XML/SAML, tối ưu cho HTTP.",
        "Dễ parse: JSON mapping trực tiếp ra object trong hầu hết các ngôn ngữ lập trình.",
        "Stateless: Server không cần lưu trữ session, dễ dàng Scale mở rộng hệ thống.",
    ],
    cons: &[
        "Không thể thu hồi (Revoke) ngay lập tức: Token có thời hạn, nếu lộ token trước khi hết hạn sẽ rủi ro.",
        "Data lộ diện: Payload chỉ được encode base64, không encrypt, không nên chứa dữ liệu nhạy cảm.",
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pill {
    pub label: &'static str,
    pub glyph: Glyph,
}

#[derive(Debug, Serialize)]
pub struct CallOut {
    pub title: &'static str,
    pub content: &'static str,
    pub pills: &'static [Pill],
}

pub const CONCLUSION: CallOut = CallOut {
    title: "Kết luận",
    content: "Bảo mật WebService không chỉ là việc cấp phát Token. Nó là một chiến lược toàn diện từ việc mã hóa kênh truyền (TLS/SSL), xác thực đầu vào, quản lý danh tính (Authentication), cho đến phân quyền chặt chẽ (Authorization) dựa trên Role hoặc Policy. Việc sử dụng JWT là giải pháp tối ưu cho REST API hiện đại nhờ tính stateless và gọn nhẹ.",
    pills: &[
        Pill {
            label: "TLS/SSL",
            glyph: Glyph::Lock,
        },
        Pill {
            label: "Input Validation",
            glyph: Glyph::ShieldCheck,
        },
        Pill {
            label: "Authentication",
            glyph: Glyph::Database,
        },
        Pill {
            label: "Authorization",
            glyph: Glyph::Layers,
        },
        Pill {
            label: "JWT",
            glyph: Glyph::Lightbulb,
        },
    ],
};

// ─────────────────────────────────────────────────────────────────────────
// ABAC
// ─────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AbacAttribute {
    pub title: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub glyph: Glyph,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccessModelNote {
    pub heading: &'static str,
    pub rule: &'static str,
    pub verdict: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Abac {
    pub badge: &'static str,
    pub title: &'static str,
    pub quote: &'static str,
    pub attributes: &'static [AbacAttribute],
    pub engine: &'static str,
    pub engine_sub: &'static str,
    pub pdp_rules: &'static [&'static str],
    pub policy_count: &'static str,
    pub permit: &'static str,
    pub permit_sub: &'static str,
    pub deny: &'static str,
    pub rbac_note: AccessModelNote,
    pub abac_note: AccessModelNote,
}

pub const ABAC: Abac = Abac {
    badge: "Must Know: Modern Security",
    title: "Attribute-Based Access Control",
    quote: "\"ABAC không chỉ kiểm tra Role, mà kiểm tra mọi thuộc tính có sẵn của User, Tài nguyên và cả bối cảnh xung quanh để đưa ra quyết định thông minh.\"",
    attributes: &[
        AbacAttribute {
            title: "Subject (Who?)",
            label: "Identity",
            value: "Alice (Position: Nurse)",
            glyph: Glyph::User,
            tone: Tone::Blue,
        },
        AbacAttribute {
            title: "Resource (What?)",
            label: "Data Type",
            value: "Patient Record (ID: #404)",
            glyph: Glyph::FileText,
            tone: Tone::Emerald,
        },
        AbacAttribute {
            title: "Action (Method)",
            label: "Operation",
            value: "READ / VIEW",
            glyph: Glyph::Settings,
            tone: Tone::Amber,
        },
        AbacAttribute {
            title: "Context (When?)",
            label: "Environment",
            value: "Time: 10:00 AM (In-Shift)",
            glyph: Glyph::Clock,
            tone: Tone::Purple,
        },
    ],
    engine: "PDP ENGINE",
    engine_sub: "Policy Decision Point",
    pdp_rules: &[
        "IF user.position == 'Nurse' AND resource.dept == user.dept",
        "AND env.time WITHIN shift_range",
    ],
    policy_count: "Policies: 4,028",
    permit: "PERMIT",
    permit_sub: "Access Granted",
    deny: "DENY ACCESS",
    rbac_note: AccessModelNote {
        heading: "RBAC (Old Way)",
        rule: "\"Nếu là Quản lý thì được xóa.\"",
        verdict: "— Quá thô sơ, không kiểm tra được Alice xóa vào ban đêm hay ban ngày, xóa dữ liệu của ai.",
    },
    abac_note: AccessModelNote {
        heading: "ABAC (New Way)",
        rule: "\"Nếu Alice là Y tá, trực ca sáng, và bệnh nhân này thuộc khoa của Alice thì mới được xem.\"",
        verdict: "— Bảo mật tuyệt đối và cực kỳ linh hoạt.",
    },
};

// ─────────────────────────────────────────────────────────────────────────
// Aggregate
// ─────────────────────────────────────────────────────────────────────────

/// The full content store, in page order.
#[derive(Debug, Serialize)]
pub struct Site {
    pub brand: Brand,
    pub nav: &'static [NavLink],
    pub hero: Hero,
    pub comparison: Comparison,
    pub best_practices: GridList,
    pub jwt: JwtDiagram,
    pub jwt_token: &'static [&'static str],
    pub flows: SecurityFlows,
    pub pros_cons: ProsCons,
    pub conclusion: CallOut,
    pub abac: Abac,
    pub footer: &'static str,
}

pub const SITE: Site = Site {
    brand: BRAND,
    nav: &NAV_LINKS,
    hero: HERO,
    comparison: COMPARISON,
    best_practices: BEST_PRACTICES,
    jwt: JWT_DIAGRAM,
    jwt_token: &JWT_TOKEN_SEGMENTS,
    flows: SECURITY_FLOWS,
    pros_cons: PROS_CONS,
    conclusion: CONCLUSION,
    abac: ABAC,
    footer: FOOTER_TITLE,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text;

    #[test]
    fn test_flow_diagrams_link_every_node() {
        assert_eq!(SECURITY_FLOWS.flows.len(), 3);
        for flow in SECURITY_FLOWS.flows {
            assert_eq!(
                flow.diagram.arrows.len(),
                flow.diagram.nodes.len() - 1,
                "{}",
                flow.name
            );
        }
    }

    #[test]
    fn test_hero_entries_split_into_cards() {
        assert_eq!(HERO.content.len(), HERO.accents.len());
        let (heading, desc) = text::split_heading(HERO.content[1]);
        assert_eq!(heading, "Chống tấn công DOS");
        assert!(desc.starts_with("Ngăn chặn API"));
    }

    #[test]
    fn test_jwt_parts_align_with_token_segments() {
        assert_eq!(JWT_DIAGRAM.parts.len(), JWT_TOKEN_SEGMENTS.len());
        let steps: Vec<_> = JWT_DIAGRAM.parts.iter().map(|p| p.step).collect();
        assert_eq!(steps, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_toggle_part() {
        assert_eq!(toggle_part(None, 1), Some(1));
        assert_eq!(toggle_part(Some(1), 1), None);
        assert_eq!(toggle_part(Some(0), 2), Some(2));
    }

    #[test]
    fn test_nav_links_point_at_sections() {
        for link in NAV_LINKS {
            assert!(SECTION_ANCHORS.contains(&link.anchor), "{}", link.anchor);
        }
    }

    #[test]
    fn test_comparison_tags() {
        assert_eq!(COMPARISON.left.icon.tag(), "WHO you are");
        assert_eq!(COMPARISON.right.icon.tag(), "WHAT you can do");
    }

    #[test]
    fn test_site_serializes() {
        let json = serde_json::to_value(&SITE).unwrap();
        assert_eq!(json["nav"].as_array().unwrap().len(), 5);
        assert_eq!(json["conclusion"]["pills"][0]["label"], "TLS/SSL");
    }
}
