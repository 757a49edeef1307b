use leptos::prelude::*;

use crate::app::render_page;

#[component]
pub fn ForbiddenPage() -> impl IntoView {
    view! {
        <div class="card">
            <h1>"Permission denied"</h1>
            <p>"This account is not allowed to use the admin site."</p>
            <form method="post" action="/admin/logout">
                <button type="submit" class="btn btn-primary">"Log in as another user"</button>
            </form>
        </div>
    }
}

pub fn render_forbidden() -> String {
    render_page("Permission denied", None, view! { <ForbiddenPage /> })
}
