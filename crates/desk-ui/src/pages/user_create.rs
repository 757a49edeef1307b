use desk_types::FieldErrors;
use leptos::prelude::*;

use crate::app::render_page;
use crate::components::field_errors::{errors_for, FieldErrorList};

/// Add form. `email` and `name` echo a rejected submission.
#[component]
pub fn UserCreatePage(email: String, name: String, errors: FieldErrors) -> impl IntoView {
    let emailErrors = errors_for(&errors, "email");
    let nameErrors = errors_for(&errors, "name");
    let passwordErrors = errors_for(&errors, "password");
    let confirmationErrors = errors_for(&errors, "password2");

    view! {
        <div class="dashboard-header">
            <h1>"Add user"</h1>
            <p class="subtitle">"Enter an email and password, then edit the remaining fields."</p>
        </div>
        <div class="card">
            <form method="post" action="/admin/users/create">
                <div class="form-group">
                    <label for="email">"Email"</label>
                    <FieldErrorList errors=emailErrors />
                    <input type="email" id="email" name="email" value=email required />
                </div>
                <div class="form-group">
                    <label for="name">"Name"</label>
                    <FieldErrorList errors=nameErrors />
                    <input type="text" id="name" name="name" value=name />
                </div>
                <div class="form-group">
                    <label for="password1">"Password"</label>
                    <FieldErrorList errors=passwordErrors />
                    <input type="password" id="password1" name="password1" required />
                </div>
                <div class="form-group">
                    <label for="password2">"Password confirmation"</label>
                    <FieldErrorList errors=confirmationErrors />
                    <input type="password" id="password2" name="password2" required />
                </div>
                <button type="submit" class="btn btn-primary">"Save"</button>
            </form>
        </div>
    }
}

pub fn render_user_create(
    admin_email: String,
    email: String,
    name: String,
    errors: FieldErrors,
) -> String {
    render_page(
        "Add user",
        Some(admin_email),
        view! { <UserCreatePage email=email name=name errors=errors /> },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_field_errors_next_to_inputs() {
        let mut errors = FieldErrors::new();
        errors.insert("password".into(), vec!["Too short".into()]);

        let html = view! {
            <UserCreatePage email="new@ukraine.gov".to_string() name=String::new() errors=errors />
        }
        .to_html();

        assert!(html.contains("Too short"));
        assert!(html.contains("new@ukraine.gov"));
        assert!(html.contains("password2"));
    }
}
