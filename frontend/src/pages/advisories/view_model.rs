use super::{
    repository::{AdvisoriesRepository, ListingLoad},
    utils::filter_advisories,
};
use crate::api::{Advisory, ApiClient, ApiError};
use leptos::*;

#[derive(Clone, Copy)]
pub struct AdvisoriesViewModel {
    pub search: RwSignal<String>,
    pub listing: Resource<(), ListingLoad>,
    pub filtered: Memo<Vec<Advisory>>,
}

impl AdvisoriesViewModel {
    /// True until the fetch settles.
    pub fn is_loading(&self) -> bool {
        self.listing.with(|load| load.is_none())
    }

    /// The listing failure, once the fetch has settled with one.
    pub fn load_error(&self) -> Option<ApiError> {
        self.listing
            .with(|load| load.as_ref().and_then(|load| load.error.clone()))
    }
}

/// The fetch runs once per mount. It is a local resource owned by the page,
/// so a response that lands after the page unmounts goes nowhere.
pub fn use_advisories_view_model() -> AdvisoriesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AdvisoriesRepository::new(api);
    let search = create_rw_signal(String::new());

    let listing = create_local_resource(
        || (),
        move |_| {
            let repository = repository.clone();
            async move { repository.load().await }
        },
    );

    let filtered = create_memo(move |_| {
        let term = search.get();
        listing.with(|load| {
            load.as_ref()
                .map(|load| filter_advisories(&load.advisories, &term))
                .unwrap_or_default()
        })
    });

    AdvisoriesViewModel {
        search,
        listing,
        filtered,
    }
}
