//! PRODAI syllable trainer page.

use leptos::prelude::*;

use crate::components::syllable_board::SyllableBoard;

#[component]
pub fn SyllablesPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="page__intro">
                <h2>"PRODAI - Silabario Interactivo"</h2>
                <p>"Aprende a leer y escribir con el método silábico."</p>
            </div>
            <SyllableBoard/>
        </div>
    }
}
