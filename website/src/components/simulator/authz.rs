use leptos::prelude::*;
use restsec_app::sim::authz::{deciding_line, policy_lines};
use restsec_app::{AuthzMessage, AuthzSimulator, Verdict};
use restsec_core::{Endpoint, Glyph, Role};

use crate::components::icons::Icon;
use crate::components::palette::ToneClasses;

struct VerdictStyle {
    circle: &'static str,
    glyph: Glyph,
    ink: &'static str,
    pill: &'static str,
    result: &'static str,
}

fn verdict_style(verdict: Verdict) -> VerdictStyle {
    match verdict {
        Verdict::Unauthenticated => VerdictStyle {
            circle: "w-20 h-20 rounded-full flex items-center justify-center border-4 shadow-xl bg-amber-50 border-amber-400 shadow-amber-100",
            glyph: Glyph::AlertCircle,
            ink: "w-9 h-9 text-amber-500",
            pill: "px-5 py-2.5 rounded-2xl font-mono text-sm font-black border-2 shadow bg-amber-50 border-amber-300 text-amber-900",
            result: "text-amber-400",
        },
        Verdict::Granted => VerdictStyle {
            circle: "w-20 h-20 rounded-full flex items-center justify-center border-4 shadow-xl bg-emerald-100 border-emerald-500 shadow-emerald-100",
            glyph: Glyph::CheckCircle,
            ink: "w-9 h-9 text-emerald-600",
            pill: "px-5 py-2.5 rounded-2xl font-mono text-sm font-black border-2 shadow bg-emerald-50 border-emerald-300 text-emerald-900",
            result: "text-emerald-400",
        },
        Verdict::Forbidden => VerdictStyle {
            circle: "w-20 h-20 rounded-full flex items-center justify-center border-4 shadow-xl bg-rose-100 border-rose-500 shadow-rose-100",
            glyph: Glyph::XCircle,
            ink: "w-9 h-9 text-rose-600",
            pill: "px-5 py-2.5 rounded-2xl font-mono text-sm font-black border-2 shadow bg-rose-50 border-rose-300 text-rose-900",
            result: "text-rose-400",
        },
    }
}

/// Role × endpoint picker with the decision and the policy that made it.
#[component]
pub fn AuthzPanel() -> impl IntoView {
    let sim = RwSignal::new(AuthzSimulator::default());
    let decision = Memo::new(move |_| sim.with(AuthzSimulator::decision));

    let roles = Role::ALL
        .into_iter()
        .map(|role| {
            let class = move || {
                if sim.with(AuthzSimulator::role) == role {
                    format!(
                        "px-4 py-2 rounded-xl text-xs font-black border-2 flex items-center gap-2 transition-all text-slate-800 {}",
                        role.tone().card()
                    )
                } else {
                    "px-4 py-2 rounded-xl text-xs font-black border-2 flex items-center gap-2 transition-all bg-white border-slate-200 text-slate-500".to_string()
                }
            };
            view! {
                <button
                    class=class
                    title=role.status_summary()
                    on:click=move |_| sim.update(|s| s.update(AuthzMessage::SelectRole(role)))
                >
                    <Icon glyph=role.glyph() class="w-3.5 h-3.5" />
                    {role.label()}
                </button>
            }
        })
        .collect_view();

    let endpoints = Endpoint::ALL
        .into_iter()
        .map(|endpoint| {
            let class = move || {
                if sim.with(AuthzSimulator::endpoint) == endpoint {
                    "px-3 py-2 rounded-xl text-[11px] font-mono font-bold border-2 transition-all text-left bg-slate-900 text-white border-slate-700"
                } else {
                    "px-3 py-2 rounded-xl text-[11px] font-mono font-bold border-2 transition-all text-left bg-white border-slate-200 text-slate-600 hover:border-slate-300"
                }
            };
            view! {
                <button
                    class=class
                    on:click=move |_| sim.update(|s| s.update(AuthzMessage::SelectEndpoint(endpoint)))
                >
                    {endpoint.path()}
                </button>
            }
        })
        .collect_view();

    let user = move || {
        let d = decision.get();
        let tile = format!(
            "w-16 h-16 rounded-2xl border-2 flex items-center justify-center animate-rise {}",
            d.role.tone().card()
        );
        let badge = if d.role.is_authenticated() {
            "text-[8px] font-bold uppercase px-2 py-0.5 rounded-full border bg-emerald-50 border-emerald-200 text-emerald-600"
        } else {
            "text-[8px] font-bold uppercase px-2 py-0.5 rounded-full border bg-rose-50 border-rose-200 text-rose-600"
        };
        view! {
            <div class=tile>
                <Icon glyph=d.role.glyph() class="w-7 h-7 text-slate-700" />
            </div>
            <span class="text-[11px] font-black text-slate-800">{d.role.label()}</span>
            <span class=badge>{d.identity_badge}</span>
        }
    };

    let verdict = move || {
        let d = decision.get();
        let style = verdict_style(d.verdict);
        view! {
            <div class="flex flex-col items-center gap-3 animate-rise">
                <div class=style.circle>
                    <Icon glyph=style.glyph class=style.ink />
                </div>
                <div class=style.pill>{d.status_line}</div>
                <p class="text-[10px] text-slate-400 font-medium text-center max-w-[200px]">{d.explanation}</p>
            </div>
        }
    };

    let policy = move || {
        let d = decision.get();
        let deciding = deciding_line(d.verdict);
        let [challenge, forbid, proceed, result] = policy_lines(&d);
        let line = move |i: usize, text: String| {
            let class = if i == deciding {
                "mt-1 px-2 -mx-2 rounded bg-white/10 text-white"
            } else {
                "mt-1 text-slate-400"
            };
            view! { <div class=class>{text}</div> }
        };
        view! {
            <div class="text-slate-500 mb-2 text-[9px] uppercase tracking-widest">
                {format!("// Policy evaluation for: {} → {}", d.role, d.endpoint)}
            </div>
            {line(0, challenge)}
            {line(1, forbid)}
            {line(2, proceed)}
            <div class=format!("mt-3 {}", verdict_style(d.verdict).result)>{result}</div>
        }
    };

    view! {
        <div class="flex flex-col gap-6">
            <div class="flex flex-wrap gap-2">{roles}</div>

            <div class="flex items-stretch gap-6 flex-wrap">
                <div class="flex flex-col items-center gap-2">{user}</div>

                <div class="text-slate-300 font-black text-2xl self-center">"→→"</div>

                <div class="flex flex-col gap-2">
                    <span class="text-[9px] font-black text-slate-400 uppercase tracking-widest">"Select Endpoint"</span>
                    {endpoints}
                </div>

                <div class="text-slate-300 font-black text-2xl self-center">"→→"</div>

                <div class="flex-1 flex flex-col items-center justify-center gap-4 min-w-[200px]">{verdict}</div>
            </div>

            <div class="bg-slate-900 rounded-2xl p-5 font-mono text-[11px] border border-slate-700">{policy}</div>
        </div>
    }
}
