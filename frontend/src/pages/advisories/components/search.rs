use crate::components::icons::{Icon, IconKind};
use leptos::*;

/// Free-text filter; every keystroke updates `search`.
#[component]
pub fn SearchBar(search: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="mb-6">
            <div class="relative max-w-lg mx-auto">
                <Icon
                    kind=IconKind::Search
                    class="absolute left-3 top-1/2 transform -translate-y-1/2 text-gray-400 w-5 h-5"
                />
                <input
                    type="text"
                    placeholder="Search advisories..."
                    class="pl-10 pr-4 py-2 w-full border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </div>
        </div>
    }
}
