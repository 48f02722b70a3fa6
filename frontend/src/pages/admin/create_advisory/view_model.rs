use super::{
    repository::CreateAdvisoryRepository,
    utils::{AdvisoryDraft, CreateAdvisoryFormState},
};
use crate::{
    api::{ApiClient, ApiError},
    utils::single_flight::{FlightToken, SingleFlight},
};
use leptos::*;

#[derive(Clone, Debug)]
pub struct SubmitRequest {
    pub draft: AdvisoryDraft,
    pub token: FlightToken,
}

#[derive(Debug, PartialEq)]
pub enum SubmitRejection {
    AlreadyInFlight,
    Invalid(ApiError),
}

pub type SubmitOutcome = (FlightToken, Result<(), ApiError>);

/// Validates the form and claims the guard. Invalid input never claims it.
pub fn prepare_submission(
    form: &CreateAdvisoryFormState,
    guard: &SingleFlight,
) -> Result<SubmitRequest, SubmitRejection> {
    let draft = form.to_draft().map_err(SubmitRejection::Invalid)?;
    let token = guard.try_begin().ok_or(SubmitRejection::AlreadyInFlight)?;
    Ok(SubmitRequest { draft, token })
}

pub fn apply_submit_result(
    result: Result<(), ApiError>,
    error: RwSignal<Option<ApiError>>,
    on_created: Callback<()>,
) {
    match result {
        Ok(()) => {
            error.set(None);
            on_created.call(());
        }
        Err(err) => {
            log::error!("Failed to create advisory: {}", err);
            error.set(Some(err));
        }
    }
}

#[derive(Clone)]
pub struct CreateAdvisoryViewModel {
    pub form: CreateAdvisoryFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub guard: SingleFlight,
    pub submit_action: Action<SubmitRequest, SubmitOutcome>,
}

impl CreateAdvisoryViewModel {
    pub fn submit(&self) {
        self.error.set(None);
        match prepare_submission(&self.form, &self.guard) {
            Ok(request) => self.submit_action.dispatch(request),
            Err(SubmitRejection::AlreadyInFlight) => {
                log::debug!("Ignoring submit while a previous one is in flight");
            }
            Err(SubmitRejection::Invalid(err)) => self.error.set(Some(err)),
        }
    }

    pub fn pending(&self) -> Signal<bool> {
        self.submit_action.pending().into()
    }
}

pub fn use_create_advisory_view_model(on_created: Callback<()>) -> CreateAdvisoryViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = store_value(CreateAdvisoryRepository::new(api));
    let form = CreateAdvisoryFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let guard = SingleFlight::default();

    let submit_action = create_action(move |request: &SubmitRequest| {
        let repo = repository.get_value();
        let SubmitRequest { draft, token } = request.clone();
        async move { (token, repo.create(draft).await) }
    });

    {
        let guard = guard.clone();
        create_effect(move |_| {
            if let Some((token, result)) = submit_action.value().get() {
                guard.settle(token);
                apply_submit_result(result, error, on_created);
            }
        });
    }

    CreateAdvisoryViewModel {
        form,
        error,
        guard,
        submit_action,
    }
}
