use leptos::prelude::*;

use crate::catalog::sample_products;
use crate::frontend::components::ProductCard;

#[component]
pub fn HomePage() -> impl IntoView {
    let cards = sample_products()
        .iter()
        .map(|product| view! { <ProductCard product=*product/> })
        .collect_view();

    view! {
        <div class="bg-gray-100 min-h-screen py-8 px-4">
            <h1 class="text-4xl font-bold text-center mb-8">"Welcome to NbuyIt!"</h1>
            // Search is not wired to the catalog yet.
            <div class="flex justify-center mb-8">
                <input
                    type="text"
                    placeholder="Search for products..."
                    class="px-4 py-2 rounded-lg border border-gray-300 w-full max-w-sm"
                />
            </div>

            <div class="mx-auto grid max-w-6xl grid-cols-1 gap-6 p-6 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4">
                {cards}
            </div>
        </div>
    }
}
