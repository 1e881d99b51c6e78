use axum::response::Html;

/// Serves the demo page, embedded at compile time.
///
/// The page fires requests against the protected endpoint from the browser:
/// one without credentials to show the challenge, one with an
/// `Authorization` header pre-computed client side from the demo credential
/// pair to show that no interactive prompt is involved, and one with an
/// empty password to show the explicit reset path.
pub async fn demo_page() -> Html<&'static str> {
    Html(include_str!("demo.html"))
}
