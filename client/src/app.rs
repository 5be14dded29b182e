//! Root application component with the shared layout and routing.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{A, Route, Router, Routes},
};

use crate::pages::{home::HomePage, rods::RodsPage, syllables::SyllablesPage};

/// Root application component.
///
/// Renders the site chrome (header, nav, footer) around the routed pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Mindtzijib Learning"/>

        <Router>
            <div class="layout">
                <header class="layout__header">
                    <h1 class="layout__title">"Mindtzijib Learning"</h1>
                    <nav class="layout__nav">
                        <A href="/">"Inicio"</A>
                        <A href="/matematicas/regletas-cuisinaire">"Regletas Cuisenaire"</A>
                        <A href="/lenguaje/prodai">"PRODAI"</A>
                    </nav>
                </header>
                <main class="layout__main">
                    <Routes fallback=|| "Página no encontrada.".into_view()>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route
                            path=(StaticSegment("matematicas"), StaticSegment("regletas-cuisinaire"))
                            view=RodsPage
                        />
                        <Route
                            path=(StaticSegment("lenguaje"), StaticSegment("prodai"))
                            view=SyllablesPage
                        />
                    </Routes>
                </main>
                <footer class="layout__footer">"© Mindtzijib"</footer>
            </div>
        </Router>
    }
}
