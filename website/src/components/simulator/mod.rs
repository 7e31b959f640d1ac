//! Interactive security simulator
//!
//! One tab is mounted at a time. Switching tabs unmounts the previous
//! simulator, which clears its ticker.

mod authn;
mod authz;
mod middleware;
mod rate_limit;
mod validation;

use leptos::prelude::*;
use restsec_core::Glyph;

use super::icons::Icon;
use super::section::SectionHeading;

pub use authn::AuthnSimulator;
pub use authz::AuthzPanel;
pub use middleware::MiddlewareChain;
pub use rate_limit::RateLimitCanvas;
pub use validation::ValidationPanel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimTab {
    Dos,
    Validation,
    Middleware,
    Authn,
    Authz,
}

impl SimTab {
    pub const ALL: [SimTab; 5] = [
        SimTab::Dos,
        SimTab::Validation,
        SimTab::Middleware,
        SimTab::Authn,
        SimTab::Authz,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SimTab::Dos => "DoS / Rate Limit",
            SimTab::Validation => "Validation",
            SimTab::Middleware => "Middleware Chain",
            SimTab::Authn => "Authentication",
            SimTab::Authz => "Authorization",
        }
    }

    pub fn glyph(self) -> Glyph {
        match self {
            SimTab::Dos => Glyph::ShieldAlert,
            SimTab::Validation => Glyph::FileCheck,
            SimTab::Middleware => Glyph::Layers,
            SimTab::Authn => Glyph::UserCheck,
            SimTab::Authz => Glyph::Key,
        }
    }
}

#[component]
pub fn SecuritySimulator() -> impl IntoView {
    let (active, set_active) = signal(SimTab::Dos);

    let tabs = SimTab::ALL
        .into_iter()
        .map(|tab| {
            let class = move || {
                if active.get() == tab {
                    "flex items-center gap-2 px-6 py-4 text-[11px] font-black uppercase tracking-tighter whitespace-nowrap border-b-2 transition-all flex-shrink-0 border-blue-600 text-blue-700 bg-white"
                } else {
                    "flex items-center gap-2 px-6 py-4 text-[11px] font-black uppercase tracking-tighter whitespace-nowrap border-b-2 transition-all flex-shrink-0 border-transparent text-slate-400 hover:text-slate-600"
                }
            };
            view! {
                <button class=class on:click=move |_| set_active.set(tab)>
                    <Icon glyph=tab.glyph() class="w-3.5 h-3.5" />
                    {tab.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <SectionHeading
            badge="Interactive Security Simulator"
            title="RESTful WebService Defense"
            subtitle="Animated — click each tab to simulate a real security scenario"
        />

        <div class="bg-white rounded-[40px] border-2 border-slate-100 shadow-2xl overflow-hidden">
            <div class="flex overflow-x-auto border-b-2 border-slate-100 bg-slate-50">{tabs}</div>
            <div class="p-8 min-h-[480px] animate-rise">
                {move || match active.get() {
                    SimTab::Dos => view! { <RateLimitCanvas /> }.into_any(),
                    SimTab::Validation => view! { <ValidationPanel /> }.into_any(),
                    SimTab::Middleware => view! { <MiddlewareChain /> }.into_any(),
                    SimTab::Authn => view! { <AuthnSimulator /> }.into_any(),
                    SimTab::Authz => view! { <AuthzPanel /> }.into_any(),
                }}
            </div>
        </div>
    }
}
