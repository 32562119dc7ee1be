//! Query-string encoding.

use url::form_urlencoded::Serializer;

use crate::options::QueryOptions;

/// Encodes query options as a URL query string.
///
/// Parameters are emitted in a fixed order (fields, search, joins, sort,
/// page, limit, resetCache) and serialized as
/// `application/x-www-form-urlencoded`. Missing or zero-valued parts are
/// skipped, so this never fails.
///
/// # Example
///
/// ```
/// use dataui_query::{encode, QueryOptions};
///
/// let options = QueryOptions::new().search("name", "Mary Ann").page(3).build();
/// assert_eq!(encode(&options), "search%5Bname%5D=Mary+Ann&page=3");
/// ```
pub fn encode(options: &QueryOptions) -> String {
    let mut params = Serializer::new(String::new());

    let fields = options.get_fields();
    if !fields.is_empty() {
        params.append_pair("fields", &fields.join(","));
    }

    for (key, value) in options.get_search() {
        match value.as_deref() {
            Some(value) if !value.is_empty() => {
                params.append_pair(&format!("search[{key}]"), value);
            }
            _ => {}
        }
    }

    for (index, join) in options.get_joins().iter().enumerate() {
        params.append_pair(&format!("join[{index}]"), &join.field);
    }

    for (index, order) in options.get_sort().iter().enumerate() {
        params.append_pair(&format!("sort[{index}][field]"), &order.field);
        params.append_pair(&format!("sort[{index}][order]"), order.dir.as_str());
    }

    if let Some(page) = options.get_page().filter(|page| *page != 0) {
        params.append_pair("page", &page.to_string());
    }

    if let Some(limit) = options.get_limit().filter(|limit| *limit != 0) {
        params.append_pair("limit", &limit.to_string());
    }

    if options.get_reset_cache() {
        params.append_pair("resetCache", "true");
    }

    params.finish()
}
