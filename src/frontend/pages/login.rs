//! Login page

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::forms::{LoginFormData, LoginFormState};
use crate::frontend::components::{EmailInput, ErrorAlert, PasswordInput, SubmitButton};
use crate::services::{HttpLoginApi, LoginFlow, RequestScope, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let config = expect_context::<ClientConfig>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let state = RwSignal::new(LoginFormState::default());

    // Requests still running when the page goes away are aborted.
    let scope = RequestScope::new();
    on_cleanup({
        let scope = scope.clone();
        move || scope.close()
    });

    let navigate = use_navigate();
    let auth_for_redirect = auth.clone();
    Effect::new(move |_| {
        if auth_for_redirect.is_authenticated() {
            navigate("/", Default::default());
        }
    });

    Effect::new(move |_| {
        let form = LoginFormData {
            email: email.get(),
            password: password.get(),
        };
        state.update(|s| s.revalidate(&form));
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let form = LoginFormData {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let Some(Ok(request)) = state.try_update(|s| s.begin(&form)) else {
            return;
        };

        let flow = LoginFlow::new(HttpLoginApi::new(&config), auth.store(), auth.clone());
        let scope = scope.clone();
        spawn_local(async move {
            let result = flow.submit(&request, &scope).await;
            if !scope.is_closed() {
                state.update(|s| s.finish(&result));
            }
        });
    };

    let busy = Signal::derive(move || state.with(LoginFormState::submit_disabled));
    let email_error = Signal::derive(move || state.with(|s| s.field_errors.email));
    let password_error = Signal::derive(move || state.with(|s| s.field_errors.password));
    let api_error = move || {
        state
            .with(|s| s.api_error.clone())
            .map(|message| view! { <ErrorAlert message=message/> })
    };

    view! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center p-4">
            <form
                on:submit=on_submit
                novalidate=true
                class="bg-white rounded-xl shadow-lg max-w-2xl w-full"
            >
                <div class="p-6 space-y-6">
                    <h1 class="text-3xl font-bold text-[#093f87] text-center">"Welcome Back"</h1>

                    {api_error}

                    <div class="space-y-4">
                        <EmailInput label="Email Address" value=email error=email_error/>
                        <PasswordInput label="Password" value=password error=password_error/>
                    </div>

                    <div class="flex flex-col sm:flex-row gap-4">
                        <SubmitButton busy=busy>
                            {move || state.with(LoginFormState::submit_label)}
                        </SubmitButton>
                    </div>

                    <div class="flex flex-col sm:flex-row justify-between gap-2">
                        <p class="text-sm text-gray-500 text-center">
                            "Don't have an account? "
                            <A href="/sign-up" attr:class="text-[#093f87] hover:underline">"Sign Up"</A>
                        </p>
                    </div>
                </div>
            </form>
        </div>
    }
}
