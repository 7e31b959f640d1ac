//! Simulated clients feeding the rate limiter

use serde::Serialize;

use crate::tone::{Glyph, Tone};

/// One traffic source row on the flood canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Lane {
    pub label: &'static str,
    pub sub: &'static str,
    pub glyph: Glyph,
    pub packet_label: &'static str,
    pub packet_glyph: Glyph,
    pub tone: Tone,
}

pub const LANES: [Lane; 5] = [
    Lane {
        label: "Browser",
        sub: "Chrome v121",
        glyph: Glyph::Monitor,
        packet_label: "GET /api",
        packet_glyph: Glyph::FileJson,
        tone: Tone::Blue,
    },
    Lane {
        label: "iOS App",
        sub: "Swift v3.2",
        glyph: Glyph::Smartphone,
        packet_label: "POST /data",
        packet_glyph: Glyph::FileJson,
        tone: Tone::Purple,
    },
    Lane {
        label: "Android",
        sub: "React Native",
        glyph: Glyph::Tablet,
        packet_label: "{query}",
        packet_glyph: Glyph::Code,
        tone: Tone::Emerald,
    },
    Lane {
        label: "Bot Script",
        sub: "⚠ Automated",
        glyph: Glyph::Terminal,
        packet_label: "FLOOD",
        packet_glyph: Glyph::Code,
        tone: Tone::Amber,
    },
    Lane {
        label: "IoT Sensor",
        sub: "MQTT Bridge",
        glyph: Glyph::Radio,
        packet_label: "PING×99",
        packet_glyph: Glyph::Activity,
        tone: Tone::Rose,
    },
];

/// Banner shown while the flood is running.
pub const ATTACK_NOTICE: &str = "DDoS Attack detected — Rate Limiter in OVERLOAD. \
Requests exceeding threshold (>2/200ms) are dropped with HTTP 429 Too Many Requests. \
Legitimate traffic from trusted IPs may still pass through a whitelist policy.";
