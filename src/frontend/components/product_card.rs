use leptos::prelude::*;

use crate::frontend::components::CartIcon;
use crate::models::Product;

/// Catalog card. "Add to cart" is rendered without a handler.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    view! {
        <article class="bg-white rounded-lg shadow-lg overflow-hidden transform flex flex-col h-full">
            <div class="relative flex items-end overflow-hidden rounded-xl">
                <img src=product.image alt=product.name class="w-full h-full object-cover"/>
            </div>

            <div class="mt-1 p-2 mt-auto">
                <h2 title=product.name class="text-slate-700 line-clamp-2">{product.name}</h2>

                <div class="mt-3 flex items-end justify-between">
                    <p class="text-lg font-bold text-red-500">{product.price}</p>

                    <div class="flex items-center space-x-1.5 rounded-lg bg-[#093f87] px-4 py-1.5 text-white duration-100 hover:bg-blue-600">
                        <CartIcon size="h-4 w-4"/>
                        <button type="button" class="text-sm">"Add to cart"</button>
                    </div>
                </div>
            </div>
        </article>
    }
}
