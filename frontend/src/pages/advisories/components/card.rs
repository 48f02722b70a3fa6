use crate::{
    api::Advisory,
    components::icons::Icon,
    pages::advisories::utils::severity_style,
    utils::time::format_publication_date,
};
use leptos::*;

#[component]
pub fn AdvisoryCard(advisory: Advisory) -> impl IntoView {
    let style = severity_style(advisory.severity);
    let published = format_publication_date(&advisory.date);
    let systems = advisory
        .affected_systems
        .iter()
        .map(|system| {
            view! {
                <span class="inline-flex items-center px-3 py-1 rounded-full text-sm font-medium bg-gray-100 text-gray-800">
                    {system.clone()}
                </span>
            }
        })
        .collect_view();
    view! {
        <div class="bg-white shadow rounded-lg overflow-hidden hover:shadow-md transition-shadow duration-200">
            <div class="p-6">
                <div class="flex items-start justify-between">
                    <div class="flex items-center gap-4">
                        <Icon kind=style.icon class=style.icon_class />
                        <div>
                            <h3 class="text-lg font-semibold text-gray-900">{advisory.title.clone()}</h3>
                            <p class="text-sm text-gray-500">
                                {format!("{} • {}", advisory.id, published)}
                            </p>
                        </div>
                    </div>
                    <span class=format!("px-3 py-1 rounded-full text-sm font-medium {}", style.badge_class)>
                        {advisory.severity.label()}
                    </span>
                </div>
                <p class="mt-4 text-gray-600">{advisory.description.clone()}</p>
                <div class="mt-4">
                    <h4 class="text-sm font-medium text-gray-900">"Affected Systems:"</h4>
                    <div class="mt-2 flex flex-wrap gap-2">{systems}</div>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::Severity;
    use crate::test_support::{helpers::advisory, ssr::render_to_string};

    #[test]
    fn card_renders_fields_and_severity_styling() {
        let mut item = advisory("CVE-2024-1", "Heap overflow", "Parser bug", 15);
        item.severity = Severity::Critical;
        item.affected_systems = vec!["api".into(), "worker".into()];
        let html = render_to_string(move || view! { <AdvisoryCard advisory=item /> });
        assert!(html.contains("Heap overflow"));
        assert!(html.contains("CVE-2024-1 • 2024-01-15"));
        assert!(html.contains("Parser bug"));
        assert!(html.contains("bg-red-100 text-red-800"));
        assert!(html.contains("data-icon=\"alert-triangle\""));
        assert!(html.contains("Critical"));
        assert!(html.contains("worker"));
    }
}
