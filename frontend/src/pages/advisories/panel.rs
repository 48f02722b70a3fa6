use super::{components::list::AdvisoryListView, view_model::use_advisories_view_model};
use leptos::*;

#[component]
pub fn AdvisoriesPage() -> impl IntoView {
    let vm = use_advisories_view_model();
    let loading = Signal::derive(move || vm.is_loading());
    let error = Signal::derive(move || vm.load_error());
    view! {
        <AdvisoryListView
            loading=loading
            error=error
            advisories=vm.filtered
            search=vm.search
        />
    }
}
