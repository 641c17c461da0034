use scraper::{Html, Selector};

/// Enumerates the raw `href` attribute values of all anchor elements
/// in the document, in document order.
///
/// The parser is error-tolerant: a document that fails to produce any
/// anchors simply yields an empty list, never an error.
pub fn anchors(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);

    let link_selector = Selector::parse("a").unwrap();
    let hrefs = doc
        .select(&link_selector)
        .filter_map(|e| e.value().attr("href"))
        .map(|s| s.to_string())
        .collect::<Vec<String>>();

    ::log::debug!("Anchor source found {} hrefs", hrefs.len());
    if !hrefs.is_empty() {
        ::log::debug!(
            "First few hrefs: {:?}",
            hrefs.iter().take(5).collect::<Vec<_>>()
        );
    }

    hrefs
}
