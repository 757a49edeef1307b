use leptos::prelude::*;

#[component]
pub fn Nav(user_email: String) -> impl IntoView {
    view! {
        <nav class="nav-sidebar">
            <div class="nav-brand">
                <div class="brand-icon">"A"</div>
                <span class="brand-text">"Account Desk"</span>
            </div>
            <ul class="nav-links">
                <li class="nav-item">
                    <a href="/admin/users">
                        <span class="nav-icon">"\u{25A3}"</span>
                        <span>"Users"</span>
                    </a>
                </li>
                <li class="nav-item">
                    <a href="/admin/users/create">
                        <span class="nav-icon">"\u{271A}"</span>
                        <span>"Add user"</span>
                    </a>
                </li>
            </ul>
            <div class="nav-user">
                <span class="nav-user-email">{user_email}</span>
                <form method="post" action="/admin/logout">
                    <button type="submit" class="btn btn-ghost btn-sm">"Log out"</button>
                </form>
            </div>
        </nav>
    }
}
