use crate::{
    components::icons::{Icon, IconKind},
    state::auth::{self, use_auth},
};
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let is_admin = create_memo(move |_| auth.get().is_admin());
    let sign_out_action = auth::use_sign_out_action();
    let sign_out_pending = sign_out_action.pending();
    let on_sign_out = move |_| {
        if sign_out_pending.get_untracked() {
            return;
        }
        sign_out_action.dispatch(());
    };
    view! {
        <header class="bg-white shadow-sm">
            <div class="max-w-7xl mx-auto px-4 py-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between">
                    <a href="/" class="text-2xl font-bold text-gray-900 flex items-center gap-2">
                        <Icon kind=IconKind::Shield class="w-8 h-8 text-indigo-600" />
                        "Security Advisories"
                    </a>
                    <div class="flex items-center gap-4">
                        <Show when=move || is_admin.get()>
                            <a
                                href="/admin/advisories"
                                class="flex items-center gap-2 px-4 py-2 rounded-lg text-gray-700 hover:bg-gray-100"
                            >
                                <Icon kind=IconKind::FileUp class="w-5 h-5" />
                                "New Advisory"
                            </a>
                        </Show>
                        <button
                            on:click=on_sign_out
                            class="flex items-center gap-2 px-4 py-2 rounded-lg text-gray-700 hover:bg-gray-100 disabled:opacity-50"
                            disabled=move || sign_out_pending.get()
                        >
                            <Icon kind=IconKind::LogOut class="w-5 h-5" />
                            "Sign Out"
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center h-64">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-indigo-600"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded-md" role="alert">
            {message}
        </div>
    }
}

#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="text-center text-sm text-gray-500 py-12">
            {message}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::Role;
    use crate::test_support::helpers::{provide_auth, session};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_shows_admin_link_for_admins() {
        let html = render_to_string(|| {
            provide_auth(Some(session("a")), Role::Admin);
            view! { <Header /> }
        });
        assert!(html.contains("Security Advisories"));
        assert!(html.contains("/admin/advisories"));
        assert!(html.contains("Sign Out"));
    }

    #[test]
    fn header_hides_admin_link_for_standard_users() {
        let html = render_to_string(|| {
            provide_auth(Some(session("a")), Role::Standard);
            view! { <Header /> }
        });
        assert!(!html.contains("/admin/advisories"));
        assert!(html.contains("Sign Out"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(|| {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="listing failed" />
                    <EmptyState message="nothing here" />
                </div>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("listing failed"));
        assert!(html.contains("nothing here"));
    }
}
