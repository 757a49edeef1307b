use desk_types::AccountDetail;
use leptos::prelude::*;

use crate::app::render_page;

fn flag_label(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Changelist: every account with its email, name and flags.
#[component]
pub fn UserListPage(accounts: Vec<AccountDetail>) -> impl IntoView {
    let count = accounts.len();

    view! {
        <div class="dashboard-header">
            <h1>"Users"</h1>
            <p class="subtitle">
                <a href="/admin/users/create" class="btn btn-primary">"Add user"</a>
            </p>
        </div>
        <div class="card">
            <div class="card-title">
                {format!("{count} user{}", if count == 1 { "" } else { "s" })}
            </div>
            <table id="result_list">
                <thead>
                    <tr>
                        <th>"Email"</th>
                        <th>"Name"</th>
                        <th>"Staff"</th>
                        <th>"Superuser"</th>
                        <th>"Active"</th>
                    </tr>
                </thead>
                <tbody>
                    {accounts
                        .into_iter()
                        .map(|account| {
                            let editUrl = format!("/admin/users/{}/edit", account.id);
                            view! {
                                <tr>
                                    <td>
                                        <a href=editUrl>{account.email}</a>
                                    </td>
                                    <td>{account.name}</td>
                                    <td>{flag_label(account.is_staff)}</td>
                                    <td>{flag_label(account.is_superuser)}</td>
                                    <td>{flag_label(account.is_active)}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

pub fn render_user_list(admin_email: String, accounts: Vec<AccountDetail>) -> String {
    render_page("Users", Some(admin_email), view! { <UserListPage accounts=accounts /> })
}
