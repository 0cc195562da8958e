use axum::{body::Body, response::Response};
use scraper::{ElementRef, Html, Selector};

pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    let body = response.into_body();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Could not get response body");
    let text = String::from_utf8_lossy(&body).to_string();

    Html::parse_document(&text)
}

pub(crate) async fn parse_html_fragment(response: Response<Body>) -> Html {
    let body = response.into_body();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Could not get response body");
    let text = String::from_utf8_lossy(&body).to_string();

    Html::parse_fragment(&text)
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

/// The text of the first element matching `selector`, with surrounding whitespace removed.
#[track_caller]
pub(crate) fn select_text(html: &Html, selector: &str) -> String {
    let parsed_selector = Selector::parse(selector).expect("Invalid selector");

    html.select(&parsed_selector)
        .next()
        .map(element_text)
        .unwrap_or_else(|| panic!("No element matches {selector} in {}", html.html()))
}

/// The text of every element matching `selector`, with surrounding whitespace removed.
pub(crate) fn select_all_text(html: &Html, selector: &str) -> Vec<String> {
    let parsed_selector = Selector::parse(selector).expect("Invalid selector");

    html.select(&parsed_selector).map(element_text).collect()
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_owned()
}
