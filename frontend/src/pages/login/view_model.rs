use super::utils;
use crate::{
    api::{ApiError, SignInRequest},
    state::auth,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<String>>,
    pub sign_in_action: Action<SignInRequest, Result<(), ApiError>>,
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.sign_in_action.pending().get_untracked() {
            return;
        }
        let email = self.form.email.get_untracked();
        let password = self.form.password.get_untracked();
        match utils::build_sign_in_request(&email, &password) {
            Ok(request) => {
                self.error.set(None);
                self.sign_in_action.dispatch(request);
            }
            Err(msg) => self.error.set(Some(msg)),
        }
    }
}

/// Success needs no navigation: the `SignedIn` event swaps the shell over.
pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<String>);
    let sign_in_action = auth::use_sign_in_action();

    create_effect(move |_| {
        if let Some(result) = sign_in_action.value().get() {
            match result {
                Ok(()) => {
                    error.set(None);
                    form.password.set(String::new());
                }
                Err(err) => error.set(Some(err.into())),
            }
        }
    });

    LoginViewModel {
        form,
        error,
        sign_in_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn login_view_model_defaults_empty() {
        with_runtime(|| {
            let vm = use_login_view_model();
            assert!(vm.error.get_untracked().is_none());
            assert!(vm.form.email.get_untracked().is_empty());
            assert!(!vm.sign_in_action.pending().get_untracked());
        });
    }

    #[test]
    fn invalid_credentials_set_error_without_dispatch() {
        with_runtime(|| {
            let vm = use_login_view_model();
            vm.form.password.set("secret".into());
            vm.submit();
            assert_eq!(vm.error.get_untracked().as_deref(), Some("Email is required"));
            assert_eq!(vm.sign_in_action.version().get_untracked(), 0);
        });
    }
}
