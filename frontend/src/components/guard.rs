use crate::{
    api::{ApiClient, Role},
    components::layout::LoadingSpinner,
};
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions, Outlet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminAccess {
    Granted,
    Denied,
}

/// Re-verifies the caller against the backend instead of trusting the
/// session store: the identity comes from `get_user` and the role from a
/// fresh profile lookup.
pub async fn check_admin_access(api: &ApiClient) -> AdminAccess {
    let identity = match api.get_user().await {
        Ok(Some(identity)) => identity,
        Ok(None) => return AdminAccess::Denied,
        Err(err) => {
            log::warn!("Admin check could not load the current user: {}", err);
            return AdminAccess::Denied;
        }
    };
    match api.fetch_profile(&identity.id).await {
        Ok(profile) => match profile.role {
            Role::Admin => AdminAccess::Granted,
            Role::Standard => AdminAccess::Denied,
        },
        Err(err) => {
            log::warn!("Admin check profile lookup for {} failed: {}", identity.id, err);
            AdminAccess::Denied
        }
    }
}

fn should_render_admin_children(access: Option<AdminAccess>) -> bool {
    matches!(access, Some(AdminAccess::Granted))
}

/// Where a settled check sends the visitor. `None` while pending or granted.
fn redirect_target(access: Option<AdminAccess>) -> Option<&'static str> {
    match access {
        Some(AdminAccess::Denied) => Some("/"),
        Some(AdminAccess::Granted) | None => None,
    }
}

#[component]
pub fn AdminGateView(
    #[prop(into)] access: Signal<Option<AdminAccess>>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show
            when=move || should_render_admin_children(access.get())
            fallback=move || {
                if access.get().is_none() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

/// Route guard for everything under `/admin`. Denied visitors are sent to
/// `/` with the history entry replaced.
#[component]
pub fn AdminGate() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let access = create_local_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { check_admin_access(&api).await }
        },
    );
    let navigate = use_navigate();
    create_effect(move |_| {
        if let Some(target) = redirect_target(access.get()) {
            navigate(
                target,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });
    view! {
        <AdminGateView access=Signal::derive(move || access.get())>
            <Outlet />
        </AdminGateView>
    }
}
