use axum::response::Html;

const LANDING_PAGE: &str = include_str!("../../../../templates/index.html");

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Landing page", content_type = "text/html", body = String))
)]
pub async fn index_handler() -> Html<&'static str> {
    Html(LANDING_PAGE)
}
