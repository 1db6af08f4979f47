//! URL construction: host prefixing and query-string encoding.

use serde_json::Value;
use ::url::form_urlencoded;

/// Prefix a request path with the configured host.
///
/// Absolute `http://` / `https://` URLs are returned untouched. When the host
/// ends with `/` and the path starts with `/`, one slash is dropped. Every
/// other combination is concatenated as-is, so `"http://x.com"` + `"/a"`
/// yields `"http://x.com/a"` and `"http://x.com"` + `"a"` yields
/// `"http://x.coma"`.
pub fn prefix_api_host(host: &str, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        return url.to_string();
    }
    if host.ends_with('/') && url.starts_with('/') {
        return format!("{host}{}", &url[1..]);
    }
    format!("{host}{url}")
}

/// Append `query` to `url` as an `application/x-www-form-urlencoded` string.
///
/// Entries are taken in the object's own order; `null` values are skipped.
/// Returns `url` unchanged when nothing remains to encode.
pub fn build_query(url: &str, query: &Value) -> String {
    let pairs = query_pairs(query);
    if pairs.is_empty() {
        return url.to_string();
    }
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in &pairs {
        serializer.append_pair(key, value);
    }
    format!("{url}?{}", serializer.finish())
}

fn query_pairs(query: &Value) -> Vec<(String, String)> {
    match query {
        Value::Object(map) => map
            .iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| (k.clone(), coerce(v)))
            .collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.is_null())
            .map(|(i, v)| (i.to_string(), coerce(v)))
            .collect(),
        _ => Vec::new(),
    }
}

/// String form of a query value: arrays join their elements with `,`,
/// nested objects collapse to `[object Object]`.
fn coerce(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) => format_float(f),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(coerce).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Number-to-string in the browser's form: plain decimals for magnitudes in
/// `[1e-6, 1e21)`, exponent notation with an explicit sign outside it, and
/// `-0` written as `0`.
fn format_float(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    if (1e-6..1e21).contains(&f.abs()) {
        return f.to_string();
    }
    let exp = format!("{f:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}
