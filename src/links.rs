use std::collections::HashSet;
use url::Url;

/// Resolves raw anchor hrefs against a base URL and deduplicates them.
///
/// Each href is resolved with standard reference-resolution rules:
/// absolute hrefs pass through, path/query/fragment-relative and
/// scheme-relative hrefs are combined with the base. Empty hrefs and
/// bare `#` self-references contribute nothing. A href that fails to
/// resolve is skipped; one bad anchor never aborts the rest of the
/// page.
///
/// The returned sequence contains each resolved URL exactly once, in
/// the order of its first occurrence in the document.
pub fn normalize<I, S>(raw_hrefs: I, base: &Url) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for href in raw_hrefs {
        let href = href.as_ref();
        if href.is_empty() || href == "#" {
            continue;
        }

        let resolved = match base.join(href) {
            Ok(url) => url.to_string(),
            Err(e) => {
                ::log::debug!("Skipping unresolvable href {:?}: {}", href, e);
                continue;
            }
        };

        if seen.insert(resolved.clone()) {
            links.push(resolved);
        }
    }

    links
}
