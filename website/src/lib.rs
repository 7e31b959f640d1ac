pub mod clipboard;
pub mod components;
pub mod pages;
pub mod ticker;

use components::footer::Footer;
use components::navbar::Navbar;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use pages::home::Home;
use restsec_core::content::BRAND;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=BRAND.name />
        <Router>
            <div class="min-h-screen bg-white text-slate-900 selection:bg-blue-100 font-sans">
                <Navbar />
                <Routes fallback=|| "Page not found.">
                    <Route path=path!("/") view=Home />
                </Routes>
                <Footer />
            </div>
        </Router>
    }
}
