use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::{
        guard::AdminGate,
        layout::{Header, LoadingSpinner},
    },
    pages::{
        admin::ADMIN_ADVISORIES_PATH, AdminIndex, AdvisoriesPage, CreateAdvisoryPage, LoginPage,
    },
    state::auth::{use_auth, AuthProvider},
};

pub const HOME_PATH: &str = "/";
pub const ADMIN_PATH: &str = "/admin";

pub const ROUTE_PATHS: &[&str] = &[HOME_PATH, ADMIN_PATH, ADMIN_ADVISORIES_PATH];

pub const ADMIN_ROUTE_PATHS: &[&str] = &[ADMIN_PATH, ADMIN_ADVISORIES_PATH];

pub const APP_TITLE: &str = "Security Advisories";

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    provide_meta_context();
    view! {
        <Title text=APP_TITLE />
        <AuthProvider>
            <Router>
                <Shell>
                    <AppRoutes />
                </Shell>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn AppRoutes() -> impl IntoView {
    view! {
        <Routes>
            <Route path=HOME_PATH view=AdvisoriesPage />
            <Route path=ADMIN_PATH view=AdminGate>
                <Route path="advisories" view=CreateAdvisoryPage />
                <Route path="" view=AdminIndex />
            </Route>
            <Route path="/*any" view=|| view! { <Redirect path=HOME_PATH /> } />
        </Routes>
    }
}

/// Anonymous visitors only ever see the login view. Routing is mounted once
/// a session exists.
#[component]
pub fn Shell(children: ChildrenFn) -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let loading = create_memo(move |_| auth.get().loading);
    let authenticated = create_memo(move |_| auth.get().is_authenticated());

    move || {
        if loading.get() {
            view! { <LoadingSpinner /> }.into_view()
        } else if !authenticated.get() {
            view! { <LoginPage /> }.into_view()
        } else {
            view! {
                <div class="min-h-screen bg-gray-50">
                    <Header />
                    <main>{children()}</main>
                </div>
            }
            .into_view()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn admin_routes_are_subset_of_all() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        for path in ADMIN_ROUTE_PATHS {
            assert!(all.contains(path), "admin path missing from ROUTE_PATHS: {}", path);
            assert!(path.starts_with(ADMIN_PATH));
        }
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }

    #[test]
    fn creation_form_lives_under_admin() {
        assert_eq!(ADMIN_ADVISORIES_PATH, "/admin/advisories");
    }
}
