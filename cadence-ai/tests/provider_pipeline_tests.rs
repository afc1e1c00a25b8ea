//! Provider parsing pipeline tests
//!
//! Exercises the extract-then-decode path the adapter runs on real provider
//! text: a syntactically valid JSON object with the expected keys must decode
//! to exactly that object, regardless of surrounding prose.

use cadence_ai::models::{ContentAnalysis, PitchAnalysis, SentimentLabel};
use cadence_ai::provider::extract::first_json_object;

#[test]
fn content_analysis_decodes_from_prose_wrapped_response() {
    let raw = r#"Sure! Here is the requested analysis:

```json
{
  "sentiment": {"type": "positive", "confidence": 92},
  "insights": [
    {"icon": "🚀", "title": "Momentum", "text": "Strong customer response."}
  ],
  "suggestedActions": ["Post a follow-up"],
  "trendAnalysis": "Engagement is rising week over week.",
  "networkOpportunities": ["Intro to the partner team"]
}
```

Let me know if you need anything else."#;

    let json = first_json_object(raw).expect("embedded JSON object");
    let analysis: ContentAnalysis = serde_json::from_str(json).expect("decodes cleanly");

    assert_eq!(analysis.sentiment.label, SentimentLabel::Positive);
    assert_eq!(analysis.sentiment.confidence, 92.0);
    assert_eq!(analysis.insights.len(), 1);
    assert_eq!(analysis.insights[0].title, "Momentum");
    assert_eq!(analysis.suggested_actions, vec!["Post a follow-up"]);
}

#[test]
fn pitch_analysis_decodes_with_braces_in_strings() {
    let raw = r#"{"strengths": ["Uses {placeholders} well"], "concerns": [],
        "recommendations": ["Tighten the ask"], "investmentPotential": 61,
        "summary": "Solid, needs focus."} trailing commentary"#;

    let json = first_json_object(raw).expect("embedded JSON object");
    let pitch: PitchAnalysis = serde_json::from_str(json).expect("decodes cleanly");

    assert_eq!(pitch.strengths, vec!["Uses {placeholders} well"]);
    assert_eq!(pitch.investment_potential, 61.0);
    assert!(pitch.concerns.is_empty());
}

#[test]
fn missing_expected_keys_fail_decode() {
    // A valid object with the wrong shape must be a decode failure, not a
    // silently defaulted value.
    let raw = r#"{"totally": "unrelated"}"#;
    let json = first_json_object(raw).expect("embedded JSON object");
    assert!(serde_json::from_str::<ContentAnalysis>(json).is_err());
}

#[test]
fn brace_free_response_has_no_object() {
    assert!(first_json_object("I'm sorry, I can't help with that.").is_none());
}
