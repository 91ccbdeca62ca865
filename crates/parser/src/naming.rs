//! Identifier normalization
//!
//! Converts hyphenated tokens into camel-case identifiers and derives method
//! names from HTTP verb + path when the schema supplies no explicit name.

/// Camel-case a hyphen-delimited token.
///
/// The first segment gets a lower-cased leading character, every subsequent
/// segment gets an upper-cased leading character, and segments are
/// concatenated without separators. Empty segments are skipped. The rule is
/// total: hyphen-free input still gets its leading character lower-cased.
pub fn to_camel_case(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    let mut first_segment = true;
    for segment in id.split('-') {
        let mut chars = segment.chars();
        let Some(leading) = chars.next() else {
            continue;
        };
        if first_segment {
            out.extend(leading.to_lowercase());
            first_segment = false;
        } else {
            out.extend(leading.to_uppercase());
        }
        out.push_str(chars.as_str());
    }
    out
}

/// Derive a method name from an HTTP verb token and a URL template.
///
/// Path segments are joined with hyphens and camel-cased; a `{param}`
/// placeholder segment becomes `by` + the placeholder's first character
/// upper-cased + the remaining characters with the braces dropped
/// (`{userId}` → `byUserId`). The result is prefixed with the lower-cased
/// verb, upper-casing the first character of the remainder:
/// `GET /users/{id}/orders` → `getUsersByIdOrders`.
///
/// Used only when the schema declares neither a vendor-extension name nor an
/// operation identifier.
pub fn method_name_from_path(verb: &str, path: &str) -> String {
    let segments: Vec<String> = path
        .split('/')
        .skip(1)
        .map(|segment| {
            if segment.starts_with('{') && segment.ends_with('}') && segment.len() >= 2 {
                let inner = &segment[1..segment.len() - 1];
                let mut chars = inner.chars();
                match chars.next() {
                    Some(leading) => format!(
                        "by{}{}",
                        leading.to_uppercase(),
                        chars.as_str()
                    ),
                    None => "by".to_string(),
                }
            } else {
                segment.to_string()
            }
        })
        .collect();

    let camel = to_camel_case(&segments.join("-"));
    let mut chars = camel.chars();
    match chars.next() {
        Some(leading) => format!(
            "{}{}{}",
            verb.to_lowercase(),
            leading.to_uppercase(),
            chars.as_str()
        ),
        None => verb.to_lowercase(),
    }
}
