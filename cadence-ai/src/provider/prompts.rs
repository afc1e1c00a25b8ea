//! Fixed prompt templates, one per task kind
//!
//! Each prompt embeds the input text and the exact JSON shape the adapter
//! expects back. The provider is told to answer with only the JSON object;
//! extraction still tolerates surrounding prose.

/// Content analysis (sentiment + insights + actions)
pub fn content_analysis(content: &str, platform: Option<&str>) -> String {
    let platform = platform.unwrap_or("general");
    format!(
        r#"Analyze this {platform} content for a meeting/CRM productivity tool.

Content:
{content}

Respond with only a JSON object of this exact shape:
{{
  "sentiment": {{"type": "positive|neutral|negative", "confidence": 0-100}},
  "insights": [{{"icon": "emoji", "title": "short title", "text": "one sentence"}}],
  "suggestedActions": ["action"],
  "trendAnalysis": "one paragraph",
  "networkOpportunities": ["opportunity"]
}}"#
    )
}

/// Question generation for a meeting context
pub fn question_generation(context: &str, style: Option<&str>) -> String {
    let style_hint = match style {
        Some(style) => format!(" Emphasize {style} questions."),
        None => String::new(),
    };
    format!(
        r#"Generate conversation questions for this meeting context.{style_hint}

Context:
{context}

Respond with only a JSON object of this exact shape:
{{
  "professional": ["question", "question", "question"],
  "social": ["question", "question"],
  "humorous": ["question"]
}}"#
    )
}

/// Key-point extraction from a transcript
pub fn key_point_extraction(transcript: &str) -> String {
    format!(
        r#"Extract the key points from this meeting transcript, in order of appearance.

Transcript:
{transcript}

Respond with only a JSON object of this exact shape:
{{"keyPoints": ["point", "point"]}}"#
    )
}

/// Topic research brief
pub fn topic_research(topic: &str) -> String {
    format!(
        r#"Research the topic "{topic}" as preparation for a business meeting.

Respond with only a JSON object of this exact shape:
{{
  "overview": "two sentences",
  "talkingPoints": ["point"],
  "recentDevelopments": ["development"],
  "questions": ["question to ask"]
}}"#
    )
}

/// Investor-style pitch analysis
pub fn pitch_analysis(pitch: &str) -> String {
    format!(
        r#"Analyze this pitch as an experienced investor.

Pitch:
{pitch}

Respond with only a JSON object of this exact shape:
{{
  "strengths": ["strength"],
  "concerns": ["concern"],
  "recommendations": ["recommendation"],
  "investmentPotential": 0-100,
  "summary": "one paragraph"
}}"#
    )
}

/// Contract summary
pub fn contract_summary(content: &str) -> String {
    format!(
        r#"Summarize this contract for a business reader.

Contract:
{content}

Respond with only a JSON object of this exact shape:
{{
  "keyTerms": ["term"],
  "obligations": ["obligation"],
  "risks": ["risk"],
  "summary": "one paragraph"
}}"#
    )
}

/// Pre-meeting contact insight
pub fn contact_insight(context: &str) -> String {
    format!(
        r#"Prepare insights for meeting this contact.

Contact notes:
{context}

Respond with only a JSON object of this exact shape:
{{
  "talkingPoints": ["point"],
  "iceBreakers": ["opener"],
  "meetingStrategy": "one paragraph"
}}"#
    )
}

/// Venue suggestion
pub fn venue_suggestion(context: &str) -> String {
    format!(
        r#"Suggest meeting venues for this situation.

Situation:
{context}

Respond with only a JSON object of this exact shape:
{{
  "venues": [{{"name": "venue", "type": "cafe|restaurant|office|virtual", "reason": "one sentence"}}],
  "bestPractices": ["tip"]
}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_prompt_embeds_input_and_platform() {
        let prompt = content_analysis("Big launch today", Some("linkedin"));
        assert!(prompt.contains("Big launch today"));
        assert!(prompt.contains("linkedin"));
        assert!(prompt.contains("suggestedActions"));
    }

    #[test]
    fn question_prompt_style_hint_is_optional() {
        let plain = question_generation("quarterly review", None);
        assert!(!plain.contains("Emphasize"));
        let styled = question_generation("quarterly review", Some("humorous"));
        assert!(styled.contains("Emphasize humorous questions"));
    }
}
