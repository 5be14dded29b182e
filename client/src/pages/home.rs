//! Landing page with links to the available activities.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <h2 class="home__heading">"Actividades"</h2>
            <div class="home__cards">
                <A href="/matematicas/regletas-cuisinaire" attr:class="home__card">
                    <h3>"Regletas de Cuisenaire"</h3>
                    <p>"Arrastra, alinea y suma regletas de colores sobre el lienzo."</p>
                </A>
                <A href="/lenguaje/prodai" attr:class="home__card">
                    <h3>"PRODAI - Silabario Interactivo"</h3>
                    <p>"Aprende a leer y escribir con el método silábico."</p>
                </A>
            </div>
        </div>
    }
}
