use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center p-4">
            <div class="text-center space-y-4">
                <h1 class="text-6xl font-bold text-[#093f87]">"404"</h1>
                <p class="text-lg text-gray-700">"Page not found"</p>
                <A href="/" attr:class="text-[#093f87] hover:underline">"Back to the shop"</A>
            </div>
        </div>
    }
}
