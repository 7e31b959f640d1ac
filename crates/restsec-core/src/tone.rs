//! Accent colors and pictograms referenced by the content tables
//!
//! Tables only name a [`Tone`] and a [`Glyph`]; renderers decide what they
//! look like.

use serde::Serialize;

/// Accent color of a card, lane, hop or stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Blue,
    Purple,
    Violet,
    Indigo,
    Emerald,
    Green,
    Amber,
    Orange,
    Rose,
    Red,
    Slate,
}

/// Named pictogram. The website maps each one to an inline SVG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Glyph {
    Activity,
    AlertCircle,
    Brain,
    CheckCircle,
    Clock,
    Code,
    Database,
    FileCheck,
    FileCode,
    FileJson,
    FileText,
    HardDrive,
    Key,
    KeyRound,
    Layers,
    Lightbulb,
    Lock,
    Monitor,
    Radio,
    Server,
    Settings,
    ShieldAlert,
    ShieldCheck,
    ShieldQuestion,
    Smartphone,
    Tablet,
    Terminal,
    TrendingDown,
    Unlock,
    User,
    UserCheck,
    Wifi,
    XCircle,
    Zap,
}
