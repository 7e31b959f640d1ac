use leptos::prelude::*;
use restsec_app::config::SimSettings;
use restsec_app::{
    GuardStatus, LaneState, Mode, Packet, RateLimitMessage, RateLimiter, RunId, UpdateResult,
};
use restsec_core::traffic::{ATTACK_NOTICE, LANES};
use restsec_core::Glyph;

use crate::components::icons::Icon;
use crate::components::palette::ToneClasses;
use crate::ticker::{now_ms, Ticker};

const LANE_HEIGHT: usize = 60;

fn on_tick(limiter: RwSignal<RateLimiter>) -> impl Fn(RunId) -> UpdateResult + 'static {
    move |run| {
        limiter
            .try_update(|l| l.update(RateLimitMessage::Tick { run, now: now_ms() }))
            .unwrap_or_else(UpdateResult::stop)
    }
}

/// Packet flood against the rate limiter. Runs for as long as it is mounted.
#[component]
pub fn RateLimitCanvas() -> impl IntoView {
    let settings = SimSettings::default();
    let limiter = RwSignal::new(RateLimiter::new(&settings.rate_limit, now_ms()));
    let ticker = Ticker::new();

    let start = limiter
        .try_update(|l| l.update(RateLimitMessage::Start { now: now_ms() }))
        .unwrap_or_default();
    ticker.apply(start, on_tick(limiter));

    let set_mode = move |mode: Mode| {
        let result = limiter
            .try_update(|l| l.update(RateLimitMessage::SetMode { mode, now: now_ms() }))
            .unwrap_or_default();
        ticker.apply(result, on_tick(limiter));
    };

    let mode = move || limiter.with(RateLimiter::mode);
    let overload = move || limiter.with(|l| l.guard_status() == GuardStatus::Overload);

    let mode_button = move |target: Mode, active: &'static str| {
        let class = move || {
            if mode() == target {
                format!("px-5 py-2.5 rounded-xl text-xs font-black transition-all shadow-lg {active}")
            } else {
                "px-5 py-2.5 rounded-xl text-xs font-black transition-all bg-slate-100 text-slate-500 hover:bg-slate-200".to_string()
            }
        };
        view! {
            <button class=class on:click=move |_| set_mode(target)>
                {target.label()}
            </button>
        }
    };

    let lanes = LANES
        .iter()
        .enumerate()
        .map(|(i, lane)| {
            let state = move || limiter.with(|l| l.lane_state(i, now_ms()));
            let row = move || match state() {
                LaneState::Idle => "flex items-center gap-3 px-3 rounded-xl border-2 border-slate-100 bg-white transition-all",
                LaneState::Active => "flex items-center gap-3 px-3 rounded-xl border-2 border-emerald-300 bg-emerald-50 transition-all",
                LaneState::Blocked => "flex items-center gap-3 px-3 rounded-xl border-2 border-rose-300 bg-rose-50 transition-all",
            };
            let tile = format!("p-1.5 rounded-lg {}", lane.tone.chip());
            view! {
                <div class=row style=format!("height: {}px", LANE_HEIGHT - 8)>
                    <div class=tile>
                        <Icon glyph=lane.glyph class="w-4 h-4" />
                    </div>
                    <div class="flex flex-col">
                        <span class="text-[11px] font-black text-slate-800">{lane.label}</span>
                        <span class="text-[9px] font-bold text-slate-400 uppercase tracking-wider">{lane.sub}</span>
                    </div>
                </div>
            }
        })
        .collect_view();

    let packets = move || limiter.with(|l| l.packets().copied().collect::<Vec<Packet>>());

    let guard_class = move || {
        if overload() {
            "w-36 rounded-2xl border-4 border-rose-500 bg-rose-50 p-4 flex flex-col items-center gap-2 overload-glow"
        } else {
            "w-36 rounded-2xl border-4 border-emerald-400 bg-emerald-50 p-4 flex flex-col items-center gap-2"
        }
    };
    let queue_bar = move || {
        let fill = limiter.with(RateLimiter::queue_fill);
        let color = if overload() { "#ef4444" } else { "#10b981" };
        format!("width: {:.0}%; background: {color}", fill * 100.0)
    };

    view! {
        <div class="flex flex-wrap items-center justify-between gap-4 mb-6">
            <div class="flex gap-3">
                {mode_button(Mode::Normal, "bg-emerald-600 text-white shadow-emerald-200")}
                {mode_button(Mode::Attack, "bg-rose-600 text-white shadow-rose-200")}
            </div>
            <div class="flex gap-4 text-[11px] font-black uppercase tracking-wider">
                <span class="text-emerald-600">"✓ Passed: " {move || limiter.with(|l| l.totals().passed)}</span>
                <span class="text-rose-600">"✗ Blocked: " {move || limiter.with(|l| l.totals().blocked)}</span>
                <span class="text-slate-400">
                    "Threshold: " {move || limiter.with(RateLimiter::threshold)}
                </span>
            </div>
        </div>

        <div class="flex gap-4 items-stretch">
            <div class="flex flex-col gap-2 w-40 flex-shrink-0">{lanes}</div>

            <div class="relative flex-1 min-w-[420px] overflow-hidden" style=format!("height: {}px", LANES.len() * LANE_HEIGHT)>
                <div class="absolute inset-y-0 left-[210px] w-px border-l-2 border-dashed border-slate-200"></div>
                <For
                    each=packets
                    key=|packet| packet.id
                    children=move |packet| {
                        let lane = packet.lane_info();
                        let (class, color) = if packet.blocked {
                            ("absolute left-0 flex items-center gap-1 px-2 py-1 rounded-full text-[9px] font-black text-white shadow packet-blocked", "#ef4444")
                        } else {
                            ("absolute left-0 flex items-center gap-1 px-2 py-1 rounded-full text-[9px] font-black text-white shadow packet-pass", lane.tone.hex())
                        };
                        let top = packet.lane * LANE_HEIGHT + 16;
                        view! {
                            <div class=class style=format!("top: {top}px; background: {color}")>
                                <Icon glyph=lane.packet_glyph class="w-2.5 h-2.5" />
                                {lane.packet_label}
                                {packet.blocked.then(|| view! {
                                    <span class="ml-1 px-1 rounded bg-white/20">"BLOCKED"</span>
                                })}
                            </div>
                        }
                    }
                />
            </div>

            <div class="flex flex-col items-center justify-center gap-6 flex-shrink-0">
                <div class=guard_class>
                    <Icon glyph=Glyph::ShieldAlert class="w-6 h-6 text-slate-700" />
                    <span class="text-[10px] font-black uppercase tracking-widest text-slate-700">"Rate Limiter"</span>
                    <span class="text-[10px] font-black">
                        {move || if overload() { "🔴 OVERLOAD" } else { "🟢 OK" }}
                    </span>
                    <div class="w-full h-2 rounded-full bg-white border border-slate-200 overflow-hidden">
                        <div class="h-full transition-all" style=queue_bar></div>
                    </div>
                    <span class="text-[9px] font-bold text-slate-400">
                        "In flight: " {move || limiter.with(RateLimiter::in_flight)}
                    </span>
                </div>
                <div class="w-36 rounded-2xl border-4 border-slate-800 bg-slate-900 p-4 flex flex-col items-center gap-2">
                    <Icon glyph=Glyph::Server class="w-6 h-6 text-blue-400" />
                    <span class="text-[10px] font-black uppercase tracking-widest text-white">"Origin Server"</span>
                    <span class="text-[10px] font-black text-emerald-400">"🟢 ACTIVE"</span>
                </div>
            </div>
        </div>

        {move || (mode() == Mode::Attack).then(|| view! {
            <div class="mt-6 p-4 rounded-2xl bg-rose-950 border-2 border-rose-800 flex items-start gap-3 animate-rise">
                <Icon glyph=Glyph::AlertCircle class="w-5 h-5 text-rose-400 flex-shrink-0 mt-0.5" />
                <p class="text-rose-200 text-xs font-medium leading-relaxed">{ATTACK_NOTICE}</p>
            </div>
        })}
    }
}
