use leptos::prelude::*;

const INPUT_CLASSES: &str = "w-full px-4 py-2 rounded-lg border border-gray-200 focus:border-[#093f87] focus:ring-2 focus:ring-[#093f87]/20";

const EYE_OUTLINE_PATH: &str = "M2.036 12.322a1.012 1.012 0 0 1 0-.639C3.423 7.51 7.36 4.5 12 4.5c4.638 0 8.573 3.007 9.963 7.178.07.207.07.431 0 .639C20.577 16.49 16.64 19.5 12 19.5c-4.638 0-8.573-3.007-9.963-7.178Z";
const EYE_PUPIL_PATH: &str = "M15 12a3 3 0 1 1-6 0 3 3 0 0 1 6 0Z";

const EYE_SLASH_PATH: &str = "M3.98 8.223A10.477 10.477 0 0 0 1.934 12C3.226 16.338 7.244 19.5 12 19.5c.993 0 1.953-.138 2.863-.395M6.228 6.228A10.451 10.451 0 0 1 12 4.5c4.756 0 8.773 3.162 10.065 7.498a10.522 10.522 0 0 1-4.293 5.774M6.228 6.228 3 3m3.228 3.228 3.65 3.65m7.894 7.894L21 21m-3.228-3.228-3.65-3.65m0 0a3 3 0 1 0-4.243-4.243m4.242 4.242L9.88 9.88";

#[component]
pub fn FieldError(message: Signal<Option<&'static str>>) -> impl IntoView {
    move || {
        message
            .get()
            .map(|m| view! { <p class="text-red-500 text-sm mt-1">{m}</p> })
    }
}

#[component]
pub fn EmailInput(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    error: Signal<Option<&'static str>>,
) -> impl IntoView {
    view! {
        <div>
            <label for="email" class="block text-sm font-medium text-gray-700 mb-1">
                {label}
            </label>
            <input
                type="email"
                id="email"
                name="email"
                autocomplete="username"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                class=INPUT_CLASSES
            />
            <FieldError message=error/>
        </div>
    }
}

/// Password field with a show/hide toggle. Visibility is local to the field.
#[component]
pub fn PasswordInput(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    error: Signal<Option<&'static str>>,
) -> impl IntoView {
    let visible = RwSignal::new(false);

    let icon = move || {
        if visible.get() {
            view! {
                <svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="currentColor" class="w-5 h-5">
                    <path stroke-linecap="round" stroke-linejoin="round" d=EYE_SLASH_PATH/>
                </svg>
            }
            .into_any()
        } else {
            view! {
                <svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="currentColor" class="w-5 h-5">
                    <path stroke-linecap="round" stroke-linejoin="round" d=EYE_OUTLINE_PATH/>
                    <path stroke-linecap="round" stroke-linejoin="round" d=EYE_PUPIL_PATH/>
                </svg>
            }
            .into_any()
        }
    };

    view! {
        <div>
            <label for="password" class="block text-sm font-medium text-gray-700 mb-1">
                {label}
            </label>
            <div class="relative">
                <input
                    type=move || if visible.get() { "text" } else { "password" }
                    id="password"
                    name="password"
                    autocomplete="current-password"
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                    class=INPUT_CLASSES
                />
                <button
                    type="button"
                    on:click=move |_| visible.update(|v| *v = !*v)
                    class="absolute right-3 top-1/2 -translate-y-1/2 text-gray-400 hover:text-[#093f87]"
                >
                    {icon}
                </button>
            </div>
            <FieldError message=error/>
        </div>
    }
}
