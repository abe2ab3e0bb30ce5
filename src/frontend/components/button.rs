use leptos::prelude::*;

const BASE_CLASSES: &str = "w-full px-6 py-3 text-white rounded-lg transition-colors";
const IDLE_CLASSES: &str = "bg-[#093f87] hover:bg-[#082f6a]";
const BUSY_CLASSES: &str = "bg-gray-400 cursor-not-allowed";

/// Form submit button, disabled and greyed out while `busy`.
#[component]
pub fn SubmitButton(
    children: Children,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let classes = move || {
        let state = if busy.get() { BUSY_CLASSES } else { IDLE_CLASSES };
        format!("{BASE_CLASSES} {state}")
    };

    view! {
        <button type="submit" disabled=move || busy.get() class=classes>
            {children()}
        </button>
    }
}
