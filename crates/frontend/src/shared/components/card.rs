use leptos::prelude::*;

/// Card container with an optional title and description
#[component]
pub fn Card(
    /// Card title
    #[prop(optional, into)]
    title: Option<String>,
    /// Line under the title
    #[prop(optional)]
    description: Option<Signal<String>>,
    children: Children,
) -> impl IntoView {
    let has_header = title.is_some() || description.is_some();

    view! {
        <section class="card">
            {has_header.then(|| view! {
                <header class="card__header">
                    {title.map(|t| view! { <h2 class="card__title">{t}</h2> })}
                    {description.map(|d| view! {
                        <p class="card__description">{move || d.get()}</p>
                    })}
                </header>
            })}
            <div class="card__content">
                {children()}
            </div>
        </section>
    }
}
