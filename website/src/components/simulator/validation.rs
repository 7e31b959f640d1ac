use leptos::prelude::*;
use restsec_app::config::SimSettings;
use restsec_app::{ScannerMessage, UpdateResult, ValidationScanner};
use restsec_core::{Glyph, RuleCheck, VALIDATION_CASES};

use crate::components::icons::Icon;
use crate::ticker::Ticker;

/// Payload scanner revealing one rule per tick.
#[component]
pub fn ValidationPanel() -> impl IntoView {
    let scanner = RwSignal::new(ValidationScanner::new(&SimSettings::default().scanner));
    let ticker = Ticker::new();

    let send = move |msg: ScannerMessage| {
        let result = scanner.try_update(|s| s.update(msg)).unwrap_or_default();
        ticker.apply(result, move |run| {
            scanner
                .try_update(|s| s.update(ScannerMessage::Tick { run }))
                .unwrap_or_else(UpdateResult::stop)
        });
    };

    let scanning = move || scanner.with(ValidationScanner::is_scanning);
    let case = move || scanner.with(|s| s.case());

    let cases = VALIDATION_CASES
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let class = move || {
                match (scanner.with(|s| s.selected()) == i, c.ok()) {
                    (true, true) => "px-3 py-1.5 rounded-xl text-[11px] font-black border-2 transition-all bg-emerald-600 text-white border-emerald-700",
                    (true, false) => "px-3 py-1.5 rounded-xl text-[11px] font-black border-2 transition-all bg-rose-600 text-white border-rose-700",
                    _ => "px-3 py-1.5 rounded-xl text-[11px] font-black border-2 transition-all bg-white text-slate-500 border-slate-200 hover:border-slate-300",
                }
            };
            view! {
                <button class=class on:click=move |_| send(ScannerMessage::Select(i))>
                    {c.scenario.label}
                </button>
            }
        })
        .collect_view();

    let run_class = move || {
        if scanning() {
            "ml-auto px-5 py-1.5 rounded-xl text-[11px] font-black border-2 transition-all bg-slate-100 text-slate-400 border-slate-200 cursor-wait"
        } else {
            "ml-auto px-5 py-1.5 rounded-xl text-[11px] font-black border-2 transition-all bg-blue-600 text-white border-blue-700 hover:bg-blue-700 shadow-lg shadow-blue-200"
        }
    };

    let rules = move || {
        let case = case();
        let revealed = scanner.with(|s| s.revealed_rules().len());
        let scanning = scanning();
        case.rules()
            .iter()
            .enumerate()
            .map(|(i, rule)| {
                if i < revealed {
                    view! { <RuleResult rule=rule /> }.into_any()
                } else {
                    let class = if scanning {
                        "p-3 rounded-xl border-2 border-blue-400 bg-slate-50 flex items-center gap-2 animate-pulse"
                    } else {
                        "p-3 rounded-xl border-2 border-slate-100 bg-slate-50 flex items-center gap-2"
                    };
                    view! {
                        <div class=class>
                            <div class="w-3 h-3 rounded-full bg-slate-200 flex-shrink-0"></div>
                            <span class="text-[10px] font-black text-slate-300 uppercase">{rule.rule}</span>
                        </div>
                    }
                    .into_any()
                }
            })
            .collect_view()
    };

    let response = move || match scanner.with(|s| s.verdict()) {
        Some(result) => {
            let ok = case().ok();
            let (circle, glyph, ink, pill) = if ok {
                (
                    "w-16 h-16 rounded-full flex items-center justify-center border-4 shadow-xl bg-emerald-100 border-emerald-400 shadow-emerald-200",
                    Glyph::CheckCircle,
                    "w-8 h-8 text-emerald-600",
                    "px-4 py-2 rounded-xl font-mono text-xs font-black border-2 bg-emerald-50 border-emerald-200 text-emerald-800",
                )
            } else {
                (
                    "w-16 h-16 rounded-full flex items-center justify-center border-4 shadow-xl bg-rose-100 border-rose-400 shadow-rose-200",
                    Glyph::XCircle,
                    "w-8 h-8 text-rose-600",
                    "px-4 py-2 rounded-xl font-mono text-xs font-black border-2 bg-rose-50 border-rose-300 text-rose-800",
                )
            };
            view! {
                <div class="flex flex-col items-center gap-3 text-center animate-rise">
                    <div class=circle>
                        <Icon glyph=glyph class=ink />
                    </div>
                    <div class=pill>{result}</div>
                </div>
            }
            .into_any()
        }
        None => view! {
            <div class="text-slate-300 text-[10px] font-bold uppercase tracking-widest text-center">
                "Awaiting validator..."
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="flex flex-col gap-5">
            <div class="flex flex-wrap gap-2">
                {cases}
                <button
                    class=run_class
                    disabled=scanning
                    on:click=move |_| send(ScannerMessage::Run)
                >
                    {move || if scanning() { "⏳ Scanning..." } else { "▶ Run Validator" }}
                </button>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <div class="flex flex-col gap-2">
                    <div class="flex items-center gap-2 text-[10px] font-black text-slate-500 uppercase tracking-widest">
                        <Icon glyph=Glyph::FileJson class="w-3 h-3" />
                        "Raw Payload (Request Body)"
                    </div>
                    <div class="flex-1 bg-slate-900 rounded-2xl p-4 font-mono text-[11px] text-slate-300 border border-slate-700 leading-relaxed relative overflow-hidden">
                        <pre class="whitespace-pre-wrap break-all">{move || case().payload}</pre>
                        {move || scanning().then(|| view! {
                            <div class="absolute left-0 right-0 h-6 pointer-events-none scan-beam bg-gradient-to-b from-transparent via-blue-500/30 to-transparent"></div>
                        })}
                    </div>
                </div>

                <div class="flex flex-col gap-2">
                    <div class="flex items-center gap-2 text-[10px] font-black text-slate-500 uppercase tracking-widest">
                        <Icon glyph=Glyph::ShieldAlert class="w-3 h-3" />
                        "Security Rules Engine"
                    </div>
                    <div class="flex flex-col gap-2 flex-1">{rules}</div>
                </div>

                <div class="flex flex-col gap-2">
                    <div class="flex items-center gap-2 text-[10px] font-black text-slate-500 uppercase tracking-widest">
                        <Icon glyph=Glyph::Server class="w-3 h-3" />
                        "HTTP Response"
                    </div>
                    <div class="flex-1 flex flex-col items-center justify-center gap-4 p-4 rounded-2xl border-2 border-slate-100 bg-slate-50 min-h-[120px]">
                        {response}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn RuleResult(rule: &'static RuleCheck) -> impl IntoView {
    let (class, glyph, ink) = if rule.is_pass() {
        (
            "p-3 rounded-xl border-2 flex items-start gap-2.5 bg-emerald-50 border-emerald-200 animate-rise",
            Glyph::CheckCircle,
            "w-3.5 h-3.5 text-emerald-500 flex-shrink-0 mt-0.5",
        )
    } else {
        (
            "p-3 rounded-xl border-2 flex items-start gap-2.5 bg-rose-50 border-rose-400 animate-rise",
            Glyph::XCircle,
            "w-3.5 h-3.5 text-rose-500 flex-shrink-0 mt-0.5",
        )
    };
    view! {
        <div class=class>
            <Icon glyph=glyph class=ink />
            <div>
                <span class="text-[10px] font-black text-slate-800 uppercase block">{rule.rule}</span>
                <span class="text-[9px] font-medium text-slate-500 block mt-0.5">{rule.detail}</span>
            </div>
        </div>
    }
}
