use axum_test::TestResponse;
use scraper::{Html, Selector};

pub(crate) fn parse_html_document(response: &TestResponse) -> Html {
    Html::parse_document(&response.text())
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

#[track_caller]
pub(crate) fn count_elements(html: &Html, selector: &str) -> usize {
    html.select(&Selector::parse(selector).unwrap()).count()
}
