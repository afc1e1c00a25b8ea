//! JSON object extraction from free-form provider text
//!
//! The provider is asked for a single JSON object but routinely wraps it in
//! prose, markdown fences, or trailing commentary. This module scans for the
//! first complete top-level `{...}` object with a string- and escape-aware
//! depth counter, instead of the brace regex the original glue code used
//! (which breaks on braces inside string values).

/// Find the first complete JSON object in `text`.
///
/// Returns the exact `{...}` slice, or `None` when the text contains no `{`
/// or the object opened by the first `{` never closes (truncated output).
pub fn first_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_object() {
        assert_eq!(first_json_object(r#"{"a": 1}"#), Some(r#"{"a": 1}"#));
    }

    #[test]
    fn object_wrapped_in_prose() {
        let text = "Sure! Here is the analysis:\n```json\n{\"a\": 1}\n```\nLet me know.";
        assert_eq!(first_json_object(text), Some(r#"{"a": 1}"#));
    }

    #[test]
    fn nested_objects_return_outermost() {
        let text = r#"{"outer": {"inner": {"deep": true}}} trailing"#;
        assert_eq!(
            first_json_object(text),
            Some(r#"{"outer": {"inner": {"deep": true}}}"#)
        );
    }

    #[test]
    fn braces_inside_string_values_are_ignored() {
        let text = r#"{"note": "use {curly} braces", "n": 2}"#;
        assert_eq!(first_json_object(text), Some(text));
    }

    #[test]
    fn escaped_quotes_inside_strings() {
        let text = r#"{"quote": "she said \"hi {there}\"", "ok": true} extra"#;
        assert_eq!(
            first_json_object(text),
            Some(r#"{"quote": "she said \"hi {there}\"", "ok": true}"#)
        );
    }

    #[test]
    fn no_braces_yields_none() {
        assert_eq!(first_json_object("I could not produce an analysis."), None);
    }

    #[test]
    fn truncated_object_yields_none() {
        assert_eq!(first_json_object(r#"{"a": {"b": 1}"#), None);
    }

    #[test]
    fn only_first_object_is_returned() {
        let text = r#"{"first": 1} {"second": 2}"#;
        assert_eq!(first_json_object(text), Some(r#"{"first": 1}"#));
    }

    #[test]
    fn multibyte_text_around_object() {
        let text = "résumé → {\"ok\": \"é\"} ✓";
        assert_eq!(first_json_object(text), Some("{\"ok\": \"é\"}"));
    }
}
