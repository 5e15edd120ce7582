use leptos::prelude::*;

/// Card wrapper with a heading and an optional control slot on the right
#[component]
pub fn Section(
    #[prop(into)] id: String,
    #[prop(into)] title: String,
    #[prop(optional)] controls: Option<AnyView>,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class="card">
            <div class="card-header">
                <h2 class="card-title">{title}</h2>
                {controls}
            </div>
            {children()}
        </section>
    }
}
