use leptos::*;
use leptos_router::Redirect;

pub mod create_advisory;

pub use create_advisory::CreateAdvisoryPage;

pub const ADMIN_ADVISORIES_PATH: &str = "/admin/advisories";

/// Bare `/admin` lands on the creation form.
#[component]
pub fn AdminIndex() -> impl IntoView {
    view! { <Redirect path=ADMIN_ADVISORIES_PATH /> }
}
