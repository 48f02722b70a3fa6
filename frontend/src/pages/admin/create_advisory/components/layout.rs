use leptos::*;

/// Two-column page frame: heading and blurb on the left, form on the right.
#[component]
pub fn CreateAdvisoryLayout(children: Children) -> impl IntoView {
    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <div class="md:grid md:grid-cols-3 md:gap-6">
                <div class="md:col-span-1">
                    <div class="px-4 sm:px-0">
                        <h3 class="text-lg font-medium leading-6 text-gray-900">
                            "Create New Advisory"
                        </h3>
                        <p class="mt-1 text-sm text-gray-600">
                            "Add a new security advisory to the system."
                        </p>
                    </div>
                </div>
                <div class="mt-5 md:mt-0 md:col-span-2">
                    <div class="shadow sm:rounded-md sm:overflow-hidden bg-white px-4 py-5 sm:p-6">
                        {children()}
                    </div>
                </div>
            </div>
        </div>
    }
}
