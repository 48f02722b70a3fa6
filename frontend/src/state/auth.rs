use crate::api::{ApiClient, ApiError, Role, Session, SignInRequest};
use leptos::*;
use std::{cell::Cell, rc::Rc};

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub role: Role,
    pub loading: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.role.is_admin()
    }
}

/// Orders session changes. Only the change holding the latest ticket may
/// write its resolved role.
#[derive(Clone, Default)]
pub struct ResolutionGeneration(Rc<Cell<u64>>);

impl ResolutionGeneration {
    pub fn advance(&self) -> u64 {
        let next = self.0.get().wrapping_add(1);
        self.0.set(next);
        next
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.get() == ticket
    }
}

/// Looks up the profile role for the session's identity. Any failure is
/// logged and resolves to [`Role::Standard`].
pub async fn resolve_role(api: &ApiClient, session: Option<&Session>) -> Role {
    let Some(session) = session else {
        return Role::Standard;
    };
    match api.fetch_profile(&session.user.id).await {
        Ok(profile) => profile.role,
        Err(err) => {
            log::warn!("Profile lookup for {} failed: {}", session.user.id, err);
            Role::Standard
        }
    }
}

pub async fn apply_session(
    api: &ApiClient,
    session: Option<Session>,
    generation: &ResolutionGeneration,
    ticket: u64,
    set_state: WriteSignal<AuthState>,
) {
    set_state.update(|state| {
        let same_identity = state.session.as_ref().map(|s| s.user.id.as_str())
            == session.as_ref().map(|s| s.user.id.as_str());
        if !same_identity {
            state.role = Role::Standard;
        }
        state.session = session.clone();
        state.loading = false;
    });

    let role = resolve_role(api, session.as_ref()).await;
    if generation.is_current(ticket) {
        set_state.update(|state| state.role = role);
    } else {
        log::debug!("Discarding role resolution superseded by a newer auth event");
    }
}

pub async fn load_initial_session(
    api: &ApiClient,
    generation: &ResolutionGeneration,
    set_state: WriteSignal<AuthState>,
) {
    let ticket = generation.advance();
    let session = match api.get_session().await {
        Ok(session) => session,
        Err(err) => {
            log::error!("Failed to load session: {}", err);
            None
        }
    };
    if !generation.is_current(ticket) {
        return;
    }
    apply_session(api, session, generation, ticket, set_state).await;
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState {
        loading: true,
        ..AuthState::default()
    });

    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let generation = ResolutionGeneration::default();

    let subscription = {
        let listener_api = api.clone();
        let generation = generation.clone();
        api.on_auth_state_change(move |event, session| {
            log::info!("Auth state changed: {:?}", event);
            let ticket = generation.advance();
            let api = listener_api.clone();
            let generation = generation.clone();
            spawn_local(async move {
                apply_session(&api, session, &generation, ticket, set_auth_state).await;
            });
        })
    };
    on_cleanup(move || subscription.unsubscribe());

    spawn_local(async move {
        load_initial_session(&api, &generation, set_auth_state).await;
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn sign_in(api: &ApiClient, request: SignInRequest) -> Result<(), ApiError> {
    api.sign_in_with_password(request).await.map(|_| ())
}

/// The subscription delivers `SignedOut`, which is what clears view state.
pub async fn sign_out(api: &ApiClient) -> Result<(), ApiError> {
    let result = api.sign_out().await;
    if let Err(err) = &result {
        log::warn!("Sign-out request failed: {}", err);
    }
    result
}

pub fn use_sign_in_action() -> Action<SignInRequest, Result<(), ApiError>> {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    create_action(move |request: &SignInRequest| {
        let api = api.clone();
        let request = request.clone();
        async move { sign_in(&api, request).await }
    })
}

pub fn use_sign_out_action() -> Action<(), Result<(), ApiError>> {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    create_action(move |_: &()| {
        let api = api.clone();
        async move { sign_out(&api).await }
    })
}
