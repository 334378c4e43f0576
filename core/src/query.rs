//! Query-string conversion between URLs and JSON parameter maps.
//!
//! Parsing follows the rules the API's own links use: `key[]` collects into
//! an array, pairs that are not exactly `key=value` with both sides
//! non-empty are skipped, and both halves are form-url-decoded. Encoding is the inverse for GET/HEAD
//! parameters: arrays become repeated `key[]=v`, nested objects become
//! `key[sub]=v`, booleans are sent as `1`/`0`.

use serde_json::Value;
use url::form_urlencoded;

use crate::endpoint::Parameters;

/// Parse a raw query string (without the leading `?`) into parameters.
pub fn parse_query(query: &str) -> Parameters {
    let mut params = Parameters::new();
    for pair in query.split('&') {
        match pair.split_once('=') {
            Some((key, value)) if !key.is_empty() && !value.is_empty() && !value.contains('=') => {}
            _ => continue,
        }
        let Some((key, value)) = form_urlencoded::parse(pair.as_bytes()).next() else {
            continue;
        };
        match key.strip_suffix("[]") {
            Some(array_key) => {
                let entry = params
                    .entry(array_key.to_string())
                    .or_insert_with(|| Value::Array(Vec::new()));
                match entry {
                    Value::Array(items) => items.push(Value::String(value.into_owned())),
                    other => *other = Value::Array(vec![Value::String(value.into_owned())]),
                }
            }
            None => {
                params.insert(key.into_owned(), Value::String(value.into_owned()));
            }
        }
    }
    params
}

/// Encode parameters as a query string (without the leading `?`).
/// Keys come out in sorted order.
pub fn encode_query(params: &Parameters) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        append_component(&mut serializer, key, value);
    }
    serializer.finish()
}

fn append_component(
    serializer: &mut form_urlencoded::Serializer<'_, String>,
    key: &str,
    value: &Value,
) {
    match value {
        Value::Object(map) => {
            for (sub_key, sub_value) in map {
                append_component(serializer, &format!("{key}[{sub_key}]"), sub_value);
            }
        }
        Value::Array(items) => {
            let array_key = format!("{key}[]");
            for item in items {
                append_component(serializer, &array_key, item);
            }
        }
        Value::String(s) => {
            serializer.append_pair(key, s);
        }
        Value::Bool(b) => {
            serializer.append_pair(key, if *b { "1" } else { "0" });
        }
        Value::Number(n) => {
            serializer.append_pair(key, &n.to_string());
        }
        Value::Null => {
            serializer.append_pair(key, "");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_plain_pairs() {
        let params = parse_query("a=1&b=2");
        assert_eq!(Value::Object(params), json!({"a": "1", "b": "2"}));
    }

    #[test]
    fn collects_bracket_keys_into_arrays() {
        let params = parse_query("ids[]=1&ids[]=2&kind=x");
        assert_eq!(Value::Object(params), json!({"ids": ["1", "2"], "kind": "x"}));
    }

    #[test]
    fn skips_malformed_pairs_and_decodes_values() {
        let params = parse_query("flag&a=b=c&before=2014-06-03T00%3A00%3A00%2B0000&q=two+words");
        assert_eq!(
            Value::Object(params),
            json!({"before": "2014-06-03T00:00:00+0000", "q": "two words"})
        );
    }

    #[test]
    fn skips_pairs_with_empty_key_or_value() {
        let params = parse_query("a=&=b&c=1&d");
        assert_eq!(Value::Object(params), json!({"c": "1"}));
    }

    #[test]
    fn encodes_nested_values() {
        let Value::Object(params) = json!({
            "meta": true,
            "per_page": 10,
            "ids": ["a", "b"],
            "terms": "cats & dogs",
        }) else {
            panic!("expected object");
        };
        assert_eq!(
            encode_query(&params),
            "ids%5B%5D=a&ids%5B%5D=b&meta=1&per_page=10&terms=cats+%26+dogs"
        );
    }
}
