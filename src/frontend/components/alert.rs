use leptos::prelude::*;

#[component]
pub fn ErrorAlert(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div role="alert" class="p-3 bg-red-100 text-red-700 rounded-lg text-sm">
            {message}
        </div>
    }
}
