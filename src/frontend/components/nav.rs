use leptos::prelude::*;
use leptos_router::components::A;

use crate::services::use_auth;

const CART_ICON_PATH: &str = "M2.25 3h1.386c.51 0 .955.343 1.087.835l.383 1.437M7.5 14.25a3 3 0 00-3 3h15.75m-12.75-3h11.218c1.121-2.3 2.1-4.684 2.924-7.138a60.114 60.114 0 00-16.536-1.84M7.5 14.25L5.106 5.272M6 20.25a.75.75 0 11-1.5 0 .75.75 0 011.5 0zm12.75 0a.75.75 0 11-1.5 0 .75.75 0 011.5 0z";

/// Which link cluster the navbar shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavCluster {
    /// Cart and profile links.
    Account,
    /// The login affordance.
    SignIn,
}

impl NavCluster {
    pub fn for_session(is_authenticated: bool) -> Self {
        if is_authenticated {
            NavCluster::Account
        } else {
            NavCluster::SignIn
        }
    }
}

#[component]
pub fn CartIcon(#[prop(optional)] size: Option<&'static str>) -> impl IntoView {
    let class = size.unwrap_or("w-6 h-6");

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
            stroke-width="1.5"
            stroke="currentColor"
            class=class
        >
            <path stroke-linecap="round" stroke-linejoin="round" d=CART_ICON_PATH/>
        </svg>
    }
}

#[component]
pub fn Nav() -> impl IntoView {
    let auth = use_auth();

    let links = move || match NavCluster::for_session(auth.is_authenticated()) {
        NavCluster::Account => view! {
            <div class="flex items-center space-x-4">
                <A href="/cart" attr:class="text-white hover:text-gray-300 transition-colors">
                    <CartIcon/>
                </A>
                <A href="/profile" attr:class="text-sm font-medium hover:text-gray-300 transition-colors">
                    "My Account"
                </A>
            </div>
        }
        .into_any(),
        NavCluster::SignIn => view! {
            <A
                href="/login"
                attr:class="px-4 py-2 rounded-lg border border-white/40 text-sm font-medium hover:bg-white hover:text-[#093f87] transition-colors"
            >
                "Log In"
            </A>
        }
        .into_any(),
    };

    view! {
        <nav class="bg-[#093f87] text-white shadow-lg sticky top-0 z-50">
            <div class="container mx-auto px-4 py-4 flex justify-between items-center">
                <A href="/" attr:class="text-2xl font-bold text-white hover:text-gray-300 transition-colors">
                    "NbuyIt!"
                </A>
                <div class="flex items-center space-x-6">{links}</div>
            </div>
        </nav>
    }
}
