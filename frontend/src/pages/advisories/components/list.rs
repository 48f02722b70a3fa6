use super::{card::AdvisoryCard, search::SearchBar};
use crate::{
    api::{Advisory, ApiError},
    components::layout::{EmptyState, ErrorMessage, LoadingSpinner},
};
use leptos::*;

#[component]
pub fn AdvisoryListView(
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<ApiError>>,
    #[prop(into)] advisories: Signal<Vec<Advisory>>,
    search: RwSignal<String>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! {
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                    <LoadingSpinner />
                </div>
            }
        >
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <SearchBar search=search />
                {move || {
                    error
                        .get()
                        .map(|err| view! {
                            <div class="mb-4">
                                <ErrorMessage message=format!("Could not load advisories: {}", err) />
                            </div>
                        })
                }}
                <div class="space-y-4">
                    <Show
                        when=move || !advisories.with(|list| list.is_empty()) || error.with(|e| e.is_some())
                        fallback=|| view! { <EmptyState message="No advisories match your search." /> }
                    >
                        <For
                            each=move || advisories.get()
                            key=|advisory| advisory.id.clone()
                            children=|advisory| view! { <AdvisoryCard advisory=advisory /> }
                        />
                    </Show>
                </div>
            </main>
        </Show>
    }
}
