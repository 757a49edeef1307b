use desk_types::{AccountDetail, FieldErrors};
use leptos::prelude::*;

use crate::app::render_page;
use crate::components::field_errors::{errors_for, FieldErrorList};

#[component]
pub fn UserEditPage(account: AccountDetail, errors: FieldErrors) -> impl IntoView {
    let action = format!("/admin/users/{}/edit", account.id);
    let heading = account.email.clone();
    let emailErrors = errors_for(&errors, "email");
    let nameErrors = errors_for(&errors, "name");

    view! {
        <div class="dashboard-header">
            <h1>"Change user"</h1>
            <p class="subtitle">{heading}</p>
        </div>
        <div class="card">
            <form method="post" action=action>
                <div class="form-group">
                    <label for="email">"Email"</label>
                    <FieldErrorList errors=emailErrors />
                    <input type="email" id="email" name="email" value=account.email required />
                </div>
                <div class="form-group">
                    <label for="name">"Name"</label>
                    <FieldErrorList errors=nameErrors />
                    <input type="text" id="name" name="name" value=account.name />
                </div>
                <div class="form-group">
                    <label>"Password"</label>
                    <p class="help">"Raw passwords are not stored, so there is no way to see this user's password."</p>
                </div>
                <div class="form-group">
                    <label>
                        <input type="checkbox" name="is_active" checked=account.is_active />
                        " Active"
                    </label>
                    <label>
                        <input type="checkbox" name="is_staff" checked=account.is_staff />
                        " Staff status"
                    </label>
                    <label>
                        <input type="checkbox" name="is_superuser" checked=account.is_superuser />
                        " Superuser status"
                    </label>
                </div>
                <button type="submit" class="btn btn-primary">"Save"</button>
            </form>
        </div>
    }
}

pub fn render_user_edit(admin_email: String, account: AccountDetail, errors: FieldErrors) -> String {
    render_page(
        "Change user",
        Some(admin_email),
        view! { <UserEditPage account=account errors=errors /> },
    )
}
