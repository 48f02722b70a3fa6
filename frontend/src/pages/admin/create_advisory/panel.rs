use super::{
    components::{form::AdvisoryForm, layout::CreateAdvisoryLayout},
    view_model::use_create_advisory_view_model,
};
use leptos::{ev::SubmitEvent, *};
use leptos_router::use_navigate;

#[component]
pub fn CreateAdvisoryPage() -> impl IntoView {
    let navigate = use_navigate();
    let vm = use_create_advisory_view_model(Callback::new(move |_| {
        navigate("/", Default::default());
    }));

    let on_submit = {
        let vm = vm.clone();
        Callback::new(move |ev: SubmitEvent| {
            ev.prevent_default();
            vm.submit();
        })
    };

    view! {
        <CreateAdvisoryLayout>
            <AdvisoryForm
                form=vm.form
                error=vm.error
                pending=vm.pending()
                on_submit=on_submit
            />
        </CreateAdvisoryLayout>
    }
}
