//! Tailwind classes for each [`Tone`]
//!
//! Full class strings in match arms so the Tailwind scanner picks them up.

use restsec_core::{TokenKind, Tone};

pub trait ToneClasses: Copy {
    /// Light tinted surface with a matching border.
    fn card(self) -> &'static str;

    /// Foreground accent.
    fn ink(self) -> &'static str;

    /// Icon tile or small label.
    fn chip(self) -> &'static str;

    /// Selected button.
    fn solid(self) -> &'static str;

    /// Result box.
    fn panel(self) -> &'static str;

    /// Foreground accent on the dark code panels.
    fn on_dark(self) -> &'static str;

    /// CSS color for inline backgrounds.
    fn hex(self) -> &'static str;
}

impl ToneClasses for Tone {
    fn card(self) -> &'static str {
        match self {
            Tone::Blue => "bg-blue-50 border-blue-300",
            Tone::Purple => "bg-purple-50 border-purple-300",
            Tone::Violet => "bg-violet-50 border-violet-300",
            Tone::Indigo => "bg-indigo-50 border-indigo-300",
            Tone::Emerald => "bg-emerald-50 border-emerald-300",
            Tone::Green => "bg-green-50 border-green-300",
            Tone::Amber => "bg-amber-50 border-amber-300",
            Tone::Orange => "bg-orange-50 border-orange-300",
            Tone::Rose => "bg-rose-50 border-rose-300",
            Tone::Red => "bg-red-50 border-red-300",
            Tone::Slate => "bg-slate-50 border-slate-300",
        }
    }

    fn ink(self) -> &'static str {
        match self {
            Tone::Blue => "text-blue-600",
            Tone::Purple => "text-purple-600",
            Tone::Violet => "text-violet-600",
            Tone::Indigo => "text-indigo-600",
            Tone::Emerald => "text-emerald-600",
            Tone::Green => "text-green-600",
            Tone::Amber => "text-amber-600",
            Tone::Orange => "text-orange-600",
            Tone::Rose => "text-rose-600",
            Tone::Red => "text-red-600",
            Tone::Slate => "text-slate-600",
        }
    }

    fn chip(self) -> &'static str {
        match self {
            Tone::Blue => "bg-blue-100 text-blue-600",
            Tone::Purple => "bg-purple-100 text-purple-600",
            Tone::Violet => "bg-violet-100 text-violet-600",
            Tone::Indigo => "bg-indigo-100 text-indigo-600",
            Tone::Emerald => "bg-emerald-100 text-emerald-600",
            Tone::Green => "bg-green-100 text-green-600",
            Tone::Amber => "bg-amber-100 text-amber-600",
            Tone::Orange => "bg-orange-100 text-orange-600",
            Tone::Rose => "bg-rose-100 text-rose-600",
            Tone::Red => "bg-red-100 text-red-600",
            Tone::Slate => "bg-slate-100 text-slate-600",
        }
    }

    fn solid(self) -> &'static str {
        match self {
            Tone::Blue => "bg-blue-600 text-white border-blue-700",
            Tone::Purple => "bg-purple-600 text-white border-purple-700",
            Tone::Violet => "bg-violet-600 text-white border-violet-700",
            Tone::Indigo => "bg-indigo-600 text-white border-indigo-700",
            Tone::Emerald => "bg-emerald-600 text-white border-emerald-700",
            Tone::Green => "bg-green-600 text-white border-green-700",
            Tone::Amber => "bg-amber-600 text-white border-amber-700",
            Tone::Orange => "bg-orange-600 text-white border-orange-700",
            Tone::Rose => "bg-rose-600 text-white border-rose-700",
            Tone::Red => "bg-red-600 text-white border-red-700",
            Tone::Slate => "bg-slate-600 text-white border-slate-700",
        }
    }

    fn panel(self) -> &'static str {
        match self {
            Tone::Blue => "bg-blue-50 border-blue-300 text-blue-900",
            Tone::Purple => "bg-purple-50 border-purple-300 text-purple-900",
            Tone::Violet => "bg-violet-50 border-violet-300 text-violet-900",
            Tone::Indigo => "bg-indigo-50 border-indigo-300 text-indigo-900",
            Tone::Emerald => "bg-emerald-50 border-emerald-300 text-emerald-900",
            Tone::Green => "bg-green-50 border-green-300 text-green-900",
            Tone::Amber => "bg-amber-50 border-amber-300 text-amber-900",
            Tone::Orange => "bg-orange-50 border-orange-300 text-orange-900",
            Tone::Rose => "bg-rose-50 border-rose-300 text-rose-900",
            Tone::Red => "bg-red-50 border-red-300 text-red-900",
            Tone::Slate => "bg-slate-50 border-slate-300 text-slate-900",
        }
    }

    fn on_dark(self) -> &'static str {
        match self {
            Tone::Blue => "text-blue-400",
            Tone::Purple => "text-purple-400",
            Tone::Violet => "text-violet-400",
            Tone::Indigo => "text-indigo-400",
            Tone::Emerald => "text-emerald-400",
            Tone::Green => "text-green-400",
            Tone::Amber => "text-amber-400",
            Tone::Orange => "text-orange-400",
            Tone::Rose => "text-rose-400",
            Tone::Red => "text-red-400",
            Tone::Slate => "text-slate-400",
        }
    }

    fn hex(self) -> &'static str {
        match self {
            Tone::Blue => "#3b82f6",
            Tone::Purple => "#a855f7",
            Tone::Violet => "#8b5cf6",
            Tone::Indigo => "#6366f1",
            Tone::Emerald => "#10b981",
            Tone::Green => "#22c55e",
            Tone::Amber => "#f59e0b",
            Tone::Orange => "#f97316",
            Tone::Rose => "#f43f5e",
            Tone::Red => "#ef4444",
            Tone::Slate => "#94a3b8",
        }
    }
}

/// Text color for a highlighted code token on the dark code panel.
pub fn token_class(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Plain => "text-slate-300",
        TokenKind::Comment => "text-slate-500 italic",
        TokenKind::String => "text-amber-300",
        TokenKind::Attribute => "text-yellow-300",
        TokenKind::Keyword => "text-blue-400",
        TokenKind::Number => "text-orange-300",
        TokenKind::Type => "text-emerald-300",
        TokenKind::Key => "text-sky-300",
        TokenKind::Literal => "text-purple-300",
    }
}
