use leptos::prelude::*;

/// Failed-load message with a retry button
#[component]
pub fn ErrorState(message: &'static str, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="state-message state-message--error">
            <p class="state-message__text">{message}</p>
            <button class="button button--retry" on:click=move |_| on_retry.run(())>
                "Try again"
            </button>
        </div>
    }
}
