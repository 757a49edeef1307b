use leptos::prelude::*;

use crate::app::render_page;

#[component]
pub fn AdminLoginPage(error: Option<String>, email: String, next: String) -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card card">
                <div class="login-header">
                    <div class="login-icon">"A"</div>
                    <h1>"Account Desk"</h1>
                    <p>"Sign in with a superuser account"</p>
                </div>

                {error.map(|message| view! { <div class="login-error">{message}</div> })}

                <form method="post" action="/admin/login">
                    <input type="hidden" name="next" value=next />
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input type="email" id="email" name="email" value=email required />
                    </div>
                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input type="password" id="password" name="password" required />
                    </div>
                    <button type="submit" class="btn btn-primary">
                        "Log in"
                    </button>
                </form>
            </div>
        </div>
    }
}

pub fn render_login(error: Option<String>, email: String, next: String) -> String {
    render_page(
        "Log in",
        None,
        view! { <AdminLoginPage error=error email=email next=next /> },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_error_and_keeps_next_target() {
        let html = view! {
            <AdminLoginPage
                error=Some("bad credentials".to_string())
                email="admin@ukraine.gov".to_string()
                next="/admin/users/3/edit".to_string()
            />
        }
        .to_html();

        assert!(html.contains("bad credentials"));
        assert!(html.contains("admin@ukraine.gov"));
        assert!(html.contains("/admin/users/3/edit"));
    }
}
