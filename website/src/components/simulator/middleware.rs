use leptos::prelude::*;
use restsec_app::config::SimSettings;
use restsec_app::{MiddlewareStepper, StageStatus, StepperMessage, UpdateResult};
use restsec_core::STAGES;

use crate::components::icons::Icon;
use crate::components::palette::ToneClasses;
use crate::ticker::Ticker;

/// Six-stage middleware pipeline. Idle stages can be clicked to read them.
#[component]
pub fn MiddlewareChain() -> impl IntoView {
    let stepper = RwSignal::new(MiddlewareStepper::new(&SimSettings::default().stepper));
    let ticker = Ticker::new();

    let send = move |msg: StepperMessage| {
        let result = stepper.try_update(|s| s.update(msg)).unwrap_or_default();
        ticker.apply(result, move |run| {
            stepper
                .try_update(|s| s.update(StepperMessage::Tick { run }))
                .unwrap_or_else(UpdateResult::stop)
        });
    };

    let running = move || stepper.with(MiddlewareStepper::is_running);

    let stages = STAGES
        .iter()
        .enumerate()
        .map(|(i, stage)| {
            let status = move || stepper.with(|s| s.stage_status(i));
            let card = move || match status() {
                StageStatus::Active => format!(
                    "flex-1 flex flex-col items-center gap-3 p-5 rounded-2xl border-2 mx-1 relative transition-all duration-200 shadow-xl -translate-y-2 scale-105 {}",
                    stage.tone.card()
                ),
                StageStatus::Done => "flex-1 flex flex-col items-center gap-3 p-5 rounded-2xl border-2 mx-1 relative transition-all duration-200 bg-slate-50 border-slate-100 opacity-50".to_string(),
                StageStatus::Pending => "flex-1 flex flex-col items-center gap-3 p-5 rounded-2xl border-2 mx-1 relative transition-all duration-200 bg-white border-slate-200 hover:border-slate-300 cursor-pointer".to_string(),
            };
            let badge = move || match status() {
                StageStatus::Active => "absolute -top-3 -right-3 w-6 h-6 rounded-full text-[9px] font-black text-white flex items-center justify-center shadow bg-blue-600",
                StageStatus::Done => "absolute -top-3 -right-3 w-6 h-6 rounded-full text-[9px] font-black text-white flex items-center justify-center shadow bg-emerald-500",
                StageStatus::Pending => "absolute -top-3 -right-3 w-6 h-6 rounded-full text-[9px] font-black text-white flex items-center justify-center shadow bg-slate-300",
            };
            let ink = move || match status() {
                StageStatus::Active => "w-5 h-5 text-slate-800",
                StageStatus::Done => "w-5 h-5 text-slate-400",
                StageStatus::Pending => "w-5 h-5 text-slate-300",
            };
            let label = move || match status() {
                StageStatus::Active => "text-[11px] font-black leading-tight block text-slate-900",
                StageStatus::Done => "text-[11px] font-black leading-tight block text-slate-400",
                StageStatus::Pending => "text-[11px] font-black leading-tight block text-slate-300",
            };
            let chevron = move || match status() {
                StageStatus::Done => "font-black text-xl flex-shrink-0 text-emerald-500",
                StageStatus::Active => "font-black text-xl flex-shrink-0 text-blue-500",
                StageStatus::Pending => "font-black text-xl flex-shrink-0 text-slate-300",
            };

            view! {
                <div class="flex items-center flex-1 min-w-[130px]">
                    <div class=card on:click=move |_| send(StepperMessage::Inspect(i))>
                        <div class=badge>
                            {move || if status() == StageStatus::Done { "✓".to_string() } else { (i + 1).to_string() }}
                        </div>
                        <div class="w-12 h-12 rounded-2xl flex items-center justify-center shadow-sm border bg-slate-50 border-slate-100">
                            <Icon glyph=stage.glyph class=ink />
                        </div>
                        <div class="text-center">
                            <span class=label>{stage.label}</span>
                            <span class="text-[8px] font-bold uppercase tracking-tighter block mt-0.5 text-slate-400">{stage.sub}</span>
                        </div>
                    </div>
                    {(i + 1 < STAGES.len()).then(|| view! { <div class=chevron>"›"</div> })}
                </div>
            }
        })
        .collect_view();

    let detail = move || {
        stepper.with(|s| s.detail_stage()).map(|i| {
            let stage = &STAGES[i];
            let class = format!("p-5 rounded-2xl border-2 animate-rise {}", stage.tone.card());
            view! {
                <div class=class>
                    <div class="flex items-center gap-3 mb-2">
                        <Icon glyph=stage.glyph class="w-4 h-4 text-slate-700" />
                        <span class="font-black text-slate-900 text-sm">{stage.label}</span>
                        <span class="text-[9px] font-bold text-slate-400 uppercase bg-white px-2 py-0.5 rounded-full border ml-auto">
                            {format!("Step {}", i + 1)}
                        </span>
                    </div>
                    <p class="text-sm text-slate-700 leading-relaxed font-medium">{stage.detail}</p>
                </div>
            }
        })
    };

    view! {
        <div class="flex flex-col gap-6">
            <div class="flex items-center gap-4">
                <button
                    class=move || {
                        if running() {
                            "px-5 py-2.5 rounded-xl text-sm font-black border-2 transition-all bg-slate-100 text-slate-400 border-slate-200"
                        } else {
                            "px-5 py-2.5 rounded-xl text-sm font-black border-2 transition-all bg-blue-600 text-white border-blue-700 shadow-lg shadow-blue-200 hover:bg-blue-700"
                        }
                    }
                    disabled=running
                    on:click=move |_| send(StepperMessage::Fire)
                >
                    {move || if running() { "⏳ Request traversing..." } else { "▶ Fire a Request Through the Chain" }}
                </button>
                {move || stepper.with(|s| s.progress()).map(|(step, total)| view! {
                    <div class="ml-auto text-[11px] font-black text-slate-500 uppercase tracking-widest">
                        {format!("Step {step} / {total}")}
                    </div>
                })}
            </div>

            <div class="overflow-x-auto pt-4 pb-2">
                <div class="flex gap-0 min-w-[860px]">{stages}</div>
            </div>

            {detail}
        </div>
    }
}
