use leptos::prelude::*;

use crate::components::nav::Nav;

const ADMIN_CSS: &str = "
body { margin: 0; font-family: system-ui, sans-serif; background: #f6f7f9; color: #1f2430; }
.app-layout { display: flex; min-height: 100vh; }
.nav-sidebar { width: 14rem; background: #1f2430; color: #e8eaf0; padding: 1rem; }
.nav-sidebar a { color: #e8eaf0; text-decoration: none; }
.nav-links { list-style: none; padding: 0; }
.main-content { flex: 1; padding: 2rem; }
.card { background: #fff; border-radius: 6px; padding: 1.25rem; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08); }
table { width: 100%; border-collapse: collapse; }
th, td { text-align: left; padding: 0.5rem; border-bottom: 1px solid #e3e5ea; }
.form-group { display: flex; flex-direction: column; gap: 0.25rem; margin-bottom: 1rem; }
.errorlist, .login-error { color: #b42318; }
.login-page { display: flex; justify-content: center; padding-top: 10vh; }
.login-card { width: 22rem; }
";

/// Wraps a page body in the admin document and renders it to an HTML string.
/// The navigation sidebar is shown when `user_email` is set.
pub fn render_page(
    title: &str,
    user_email: Option<String>,
    content: impl IntoView + 'static,
) -> String {
    let pageTitle = format!("{title} | Account Desk");
    let nav = user_email.map(|email| view! { <Nav user_email=email /> });

    let document = view! {
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{pageTitle}</title>
                <style>{ADMIN_CSS}</style>
            </head>
            <body>
                <div class="app-layout">
                    {nav}
                    <main class="main-content">{content}</main>
                </div>
            </body>
        </html>
    };

    format!("<!DOCTYPE html>{}", document.to_html())
}
