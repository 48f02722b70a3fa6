use crate::{
    api::{ApiError, Severity},
    components::{
        icons::{Icon, IconKind},
        layout::ErrorMessage,
    },
    pages::admin::create_advisory::utils::CreateAdvisoryFormState,
};
use leptos::{ev::SubmitEvent, *};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

const INPUT_CLASS: &str = "mt-1 block w-full rounded-md border border-gray-300 px-3 py-2 shadow-sm focus:border-indigo-500 focus:outline-none focus:ring-indigo-500";

#[component]
pub fn AdvisoryForm(
    form: CreateAdvisoryFormState,
    #[prop(into)] error: Signal<Option<ApiError>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let id = form.id_signal();
    let title = form.title_signal();
    let severity = form.severity_signal();
    let description = form.description_signal();
    let affected_systems = form.affected_systems_signal();

    view! {
        <form class="space-y-6" on:submit=move |ev| on_submit.call(ev)>
            {move || error.get().map(|err| view! { <ErrorMessage message=err.error /> })}
            <div>
                <label for="advisory-id" class="block text-sm font-medium text-gray-700">
                    "Advisory ID"
                </label>
                <input
                    id="advisory-id"
                    type="text"
                    required
                    placeholder="CVE-2024-XXX"
                    class=INPUT_CLASS
                    prop:value=move || id.get()
                    on:input=move |ev| id.set(event_target::<HtmlInputElement>(&ev).value())
                />
            </div>
            <div>
                <label for="advisory-title" class="block text-sm font-medium text-gray-700">
                    "Title"
                </label>
                <input
                    id="advisory-title"
                    type="text"
                    required
                    class=INPUT_CLASS
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target::<HtmlInputElement>(&ev).value())
                />
            </div>
            <div>
                <label for="advisory-severity" class="block text-sm font-medium text-gray-700">
                    "Severity"
                </label>
                <select
                    id="advisory-severity"
                    class=INPUT_CLASS
                    prop:value=move || severity.get()
                    on:change=move |ev| {
                        severity.set(event_target::<HtmlSelectElement>(&ev).value())
                    }
                >
                    {Severity::ALL
                        .iter()
                        .map(|level| {
                            let value = level.as_str();
                            view! {
                                <option value=value selected=move || severity.get() == value>
                                    {level.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <div>
                <label for="advisory-description" class="block text-sm font-medium text-gray-700">
                    "Description"
                </label>
                <textarea
                    id="advisory-description"
                    rows="4"
                    required
                    class=INPUT_CLASS
                    prop:value=move || description.get()
                    on:input=move |ev| {
                        description.set(event_target::<HtmlTextAreaElement>(&ev).value())
                    }
                ></textarea>
            </div>
            <div>
                <label for="advisory-systems" class="block text-sm font-medium text-gray-700">
                    "Affected Systems"
                </label>
                <input
                    id="advisory-systems"
                    type="text"
                    required
                    placeholder="System 1, System 2, System 3"
                    class=INPUT_CLASS
                    prop:value=move || affected_systems.get()
                    on:input=move |ev| {
                        affected_systems.set(event_target::<HtmlInputElement>(&ev).value())
                    }
                />
                <p class="mt-1 text-sm text-gray-500">"Comma-separated list of affected systems"</p>
            </div>
            <div class="flex justify-end">
                <button
                    type="submit"
                    disabled=move || pending.get()
                    class="inline-flex items-center px-4 py-2 rounded-md text-white bg-indigo-600 hover:bg-indigo-700 disabled:opacity-50"
                >
                    <Icon kind=IconKind::FileUp class="w-5 h-5 mr-2" />
                    {move || if pending.get() { "Creating..." } else { "Create Advisory" }}
                </button>
            </div>
        </form>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn render(error: Option<ApiError>, pending: bool) -> String {
        render_to_string(move || {
            let form = CreateAdvisoryFormState::default();
            view! {
                <AdvisoryForm
                    form=form
                    error=Signal::derive(move || error.clone())
                    pending=Signal::derive(move || pending)
                    on_submit=Callback::new(|_| ())
                />
            }
        })
    }

    #[test]
    fn form_renders_fields_and_severity_options() {
        let html = render(None, false);
        assert!(html.contains("Advisory ID"));
        assert!(html.contains("CVE-2024-XXX"));
        assert!(html.contains("Comma-separated list of affected systems"));
        assert!(html.contains("System 1, System 2, System 3"));
        for level in Severity::ALL {
            assert!(html.contains(&format!("value=\"{}\"", level.as_str())));
        }
        assert!(html.contains("Create Advisory"));
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn form_shows_error_verbatim() {
        let html = render(
            Some(ApiError::request_failed("duplicate key value violates unique constraint")),
            false,
        );
        assert!(html.contains("role=\"alert\""));
        assert!(html.contains("duplicate key value violates unique constraint"));
    }

    #[test]
    fn pending_form_disables_submit() {
        let html = render(None, true);
        assert!(html.contains("Creating..."));
        assert!(!html.contains(">Create Advisory<"));
    }
}
