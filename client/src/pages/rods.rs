//! Cuisenaire rods page.

use leptos::prelude::*;

use crate::components::rod_board::RodBoard;

#[component]
pub fn RodsPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="page__intro">
                <h2>"Regletas de Cuisenaire"</h2>
                <p>"Arrastra, alinea y suma. Doble clic para eliminar."</p>
            </div>
            <RodBoard/>
        </div>
    }
}
