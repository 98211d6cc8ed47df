//! Page handlers
//!
//! The real pages are rendered by the frontend; these bodies only mark which
//! page was reached once the route guard let the request through.

use axum::{
    http::{StatusCode, Uri},
    response::Html,
};

fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title} - nratakit</title>
</head>
<body>
    <main>
        <h1>{title}</h1>
        {body}
    </main>
</body>
</html>"#
    ))
}

pub async fn home() -> Html<String> {
    page(
        "Welcome",
        r#"<p><a href="/login">Log in</a> or <a href="/signup">create an account</a>.</p>"#,
    )
}

pub async fn login() -> Html<String> {
    page(
        "Login",
        r#"<p>Forgot your password? <a href="/reset-password">Reset it</a>.</p>"#,
    )
}

pub async fn signup() -> Html<String> {
    page(
        "Create an account",
        r#"<p>Already registered? <a href="/login">Log in</a>.</p>"#,
    )
}

pub async fn reset_password() -> Html<String> {
    page(
        "Forgot Password",
        "<p>Enter your email and we will send you a reset link.</p>",
    )
}

pub async fn new_password() -> Html<String> {
    page(
        "Reset Password",
        "<p>Please fill in the form below to reset your password</p>",
    )
}

pub async fn resend_verification() -> Html<String> {
    page(
        "Verify your email",
        "<p>Your email address is not verified yet. Request a new verification link.</p>",
    )
}

pub async fn check_email() -> Html<String> {
    page(
        "Check Your Email",
        r#"<p>We have sent a verification link to your email address. Please check
        your inbox (and spam folder) and click the link to continue.</p>
        <p><a href="/login">Back to login</a></p>"#,
    )
}

pub async fn dashboard(uri: Uri) -> Html<String> {
    page(
        "Dashboard",
        &format!("<p>Signed in area: <code>{}</code></p>", uri.path()),
    )
}

pub async fn not_found(uri: Uri) -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        page("Not Found", &format!("<p>No page at <code>{}</code>.</p>", uri.path())),
    )
}
