//! Unauthenticated informational routes.

use axum::response::Html;

pub const WELCOME: &str = "Welcome to the Card Server!";

const CARD_PAGE: &str = include_str!("../../assets/card.html");

/// `GET /`
pub async fn welcome() -> &'static str { WELCOME }

/// `GET /card` — the kiosk page, compiled into the binary.
pub async fn card_page() -> Html<&'static str> { Html(CARD_PAGE) }
