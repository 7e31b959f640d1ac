use leptos::prelude::*;

/// Thin rule with a ring in the middle, placed between sections.
#[component]
pub fn Divider() -> impl IntoView {
    view! {
        <div class="flex items-center gap-4 my-8">
            <div class="flex-1 h-px bg-slate-200"></div>
            <div class="w-2 h-2 rounded-full border-2 border-slate-300"></div>
            <div class="flex-1 h-px bg-slate-200"></div>
        </div>
    }
}

/// Centered pill badge, title and optional subtitle.
#[component]
pub fn SectionHeading(
    badge: &'static str,
    title: &'static str,
    #[prop(optional)] subtitle: &'static str,
) -> impl IntoView {
    view! {
        <div class="mb-10 text-center">
            <span class="px-3 py-1 rounded-full bg-blue-50 text-blue-600 text-[10px] font-black uppercase tracking-widest border border-blue-200 mb-4 inline-block">
                {badge}
            </span>
            <h2 class="text-4xl font-black tracking-tighter text-slate-900">{title}</h2>
            {(!subtitle.is_empty()).then(|| view! {
                <p class="text-slate-500 mt-2 font-medium">{subtitle}</p>
            })}
        </div>
    }
}
