//! Fade-in-once wrapper for page sections

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Section that rises into place the first time it scrolls into view.
#[component]
pub fn Reveal(
    children: Children,
    #[prop(optional)] id: &'static str,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let node = NodeRef::<html::Section>::new();
    let (visible, set_visible) = signal(false);

    Effect::new(move |_| {
        if let Some(el) = node.get() {
            if !visible.get_untracked() {
                observe_once(&el, move || set_visible.set(true));
            }
        }
    });

    let class = move || {
        let state = if visible.get() { "reveal is-visible" } else { "reveal" };
        format!("{state} {class}")
    };

    view! {
        <section id=(!id.is_empty()).then_some(id) node_ref=node class=class>
            {children()}
        </section>
    }
}

/// Call `on_visible` once when `target` enters the viewport.
///
/// Without IntersectionObserver the section is shown immediately.
fn observe_once(target: &web_sys::Element, on_visible: impl Fn() + Clone + 'static) {
    let notify = on_visible.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let seen = entries.iter().any(|entry| {
                entry
                    .dyn_into::<IntersectionObserverEntry>()
                    .map(|entry| entry.is_intersecting())
                    .unwrap_or(false)
            });
            if seen {
                notify();
                observer.disconnect();
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin("-80px");

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(target);
            callback.forget();
        }
        Err(e) => {
            log::debug!("IntersectionObserver unavailable: {e:?}");
            drop(callback);
            on_visible();
        }
    }
}
