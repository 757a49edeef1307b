use desk_types::FieldErrors;
use leptos::prelude::*;

/// Messages recorded for `field`, empty when it passed validation.
pub fn errors_for(errors: &FieldErrors, field: &str) -> Vec<String> {
    errors.get(field).cloned().unwrap_or_default()
}

#[component]
pub fn FieldErrorList(errors: Vec<String>) -> impl IntoView {
    (!errors.is_empty()).then(move || {
        view! {
            <ul class="errorlist">
                {errors
                    .into_iter()
                    .map(|message| view! { <li>{message}</li> })
                    .collect_view()}
            </ul>
        }
    })
}
