use leptos::prelude::*;
use restsec_app::config::SimSettings;
use restsec_app::sim::sequence::Direction;
use restsec_app::{HopGeometry, SequenceMessage, SequencePlayer, UpdateResult};
use restsec_core::{Actor, Hop, AUTH_SCENARIOS};

use crate::components::icons::{ArrowHead, Icon};
use crate::components::palette::ToneClasses;
use crate::ticker::Ticker;

/// Sequence diagram for the four authentication scenarios.
#[component]
pub fn AuthnSimulator() -> impl IntoView {
    let player = RwSignal::new(SequencePlayer::new(&SimSettings::default().sequence));
    let ticker = Ticker::new();

    let send = move |msg: SequenceMessage| {
        let result = player.try_update(|p| p.update(msg)).unwrap_or_default();
        ticker.apply(result, move |run| {
            player
                .try_update(|p| p.update(SequenceMessage::Tick { run }))
                .unwrap_or_else(UpdateResult::stop)
        });
    };

    let playing = move || player.with(SequencePlayer::is_playing);

    let scenarios = AUTH_SCENARIOS
        .iter()
        .enumerate()
        .map(|(i, scenario)| {
            let class = move || {
                if player.with(|p| p.selected()) == i {
                    format!(
                        "px-3 py-2 rounded-xl text-[11px] font-black border-2 transition-all {}",
                        scenario.tone.solid()
                    )
                } else {
                    "px-3 py-2 rounded-xl text-[11px] font-black border-2 transition-all bg-white text-slate-500 border-slate-200 hover:border-slate-300".to_string()
                }
            };
            view! {
                <button class=class on:click=move |_| send(SequenceMessage::Select(i))>
                    {scenario.label}
                </button>
            }
        })
        .collect_view();

    let actors = Actor::ALL
        .into_iter()
        .map(|actor| {
            let tile = format!(
                "w-12 h-12 rounded-2xl border-2 flex items-center justify-center shadow-sm {}",
                actor.tone().card()
            );
            view! {
                <div class="flex flex-col items-center gap-1.5 w-[22%]">
                    <div class=tile>
                        <Icon glyph=actor.glyph() class="w-5 h-5 text-slate-600" />
                    </div>
                    <span class="text-[9px] font-black text-slate-600 uppercase tracking-tighter text-center leading-tight">
                        {actor.label()}
                    </span>
                </div>
            }
        })
        .collect_view();

    let lifelines = Actor::ALL
        .into_iter()
        .map(|actor| {
            view! {
                <div
                    class="absolute top-[100px] bottom-4 border-l-2 border-dashed border-slate-200 pointer-events-none"
                    style=format!("left: {}%", actor.x_percent())
                ></div>
            }
        })
        .collect_view();

    let hops = move || {
        player
            .with(|p| p.revealed_hops())
            .iter()
            .map(|hop| view! { <HopRow hop=hop /> })
            .collect_view()
    };

    let result = move || {
        player.with(|p| p.outcome().map(|outcome| (p.scenario().tone, outcome))).map(|(tone, outcome)| {
            let class = format!(
                "p-4 rounded-xl border-2 font-mono text-xs leading-relaxed animate-rise {}",
                tone.panel()
            );
            view! { <div class=class>{outcome}</div> }
        })
    };

    view! {
        <div class="flex flex-col gap-6">
            <div class="flex flex-wrap gap-2">
                {scenarios}
                <button
                    class=move || {
                        if playing() {
                            "ml-auto px-5 py-2 rounded-xl text-[11px] font-black border-2 bg-slate-100 text-slate-400 border-slate-200"
                        } else {
                            "ml-auto px-5 py-2 rounded-xl text-[11px] font-black border-2 bg-blue-600 text-white border-blue-700 shadow-lg shadow-blue-200"
                        }
                    }
                    disabled=playing
                    on:click=move |_| send(SequenceMessage::Play)
                >
                    {move || if playing() { "⏳ Simulating..." } else { "▶ Play Flow" }}
                </button>
            </div>

            <div class="relative rounded-2xl border-2 border-slate-100 bg-slate-50 p-6 min-h-[280px] overflow-hidden">
                <div class="flex justify-around mb-6">{actors}</div>
                {lifelines}
                <div class="flex flex-col gap-2 mt-1">{hops}</div>
            </div>

            {result}
        </div>
    }
}

#[component]
fn HopRow(hop: &'static Hop) -> impl IntoView {
    let color = hop.tone.hex();

    match HopGeometry::for_hop(hop) {
        HopGeometry::SelfAction { left, width } => view! {
            <div class="relative h-12 animate-rise">
                <div
                    class="absolute top-1/2 -translate-y-1/2 flex flex-col items-center"
                    style=format!("left: {left}%; width: {width}%")
                >
                    <div
                        class="text-white rounded-lg px-2 py-1 flex items-center gap-1 text-[8px] font-black shadow-md border border-white/20 leading-tight"
                        style=format!("background: {color}")
                    >
                        <Icon glyph=hop.glyph class="w-2 h-2" />
                        <span class="truncate">{hop.label}</span>
                    </div>
                    <div class="text-[7px] text-slate-400 mt-0.5 truncate max-w-full text-center px-1">
                        {format!("↩ {}", hop.payload)}
                    </div>
                </div>
            </div>
        }
        .into_any(),
        HopGeometry::Arrow {
            left,
            width,
            direction,
            line_left,
            line_width,
        } => {
            let head = match direction {
                Direction::Right => "absolute top-1/2 -translate-y-1/2 right-0",
                Direction::Left => "absolute top-1/2 -translate-y-1/2 left-0 rotate-180",
            };
            view! {
                <div class="relative h-9 animate-rise">
                    <div
                        class="absolute top-1/2 -translate-y-1/2"
                        style=format!("left: {line_left}%; width: {line_width}%")
                    >
                        <div class="w-full h-0.5 rounded" style=format!("background: {color}")></div>
                        <div class=head style=format!("color: {color}")>
                            <ArrowHead />
                        </div>
                    </div>
                    <div
                        class="absolute top-0 flex flex-col items-center"
                        style=format!("left: {left}%; width: {width}%")
                    >
                        <div
                            class="text-white rounded-md px-2 py-0.5 flex items-center gap-1 text-[8px] font-black shadow-md overflow-hidden max-w-full"
                            style=format!("background: {color}")
                        >
                            <Icon glyph=hop.glyph class="w-2 h-2" />
                            <span class="truncate">{hop.label}</span>
                            <span class="opacity-75 truncate max-w-[80px] hidden sm:inline">
                                {format!(" — {}", hop.payload)}
                            </span>
                        </div>
                    </div>
                </div>
            }
            .into_any()
        }
    }
}
