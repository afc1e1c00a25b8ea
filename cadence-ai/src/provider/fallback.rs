//! Hand-authored fallback values, one per task kind
//!
//! Substituted whenever the real provider call or its response parsing fails.
//! Deterministic: the same task always yields the same value, so callers and
//! tests can rely on byte-identical fallback payloads.

use crate::models::{
    ContactInsight, ContentAnalysis, ContractSummary, Insight, PitchAnalysis, QuestionSet,
    Sentiment, SentimentLabel, TopicResearch, Venue, VenueSuggestion,
};

pub fn content_analysis() -> ContentAnalysis {
    ContentAnalysis {
        sentiment: Sentiment {
            label: SentimentLabel::Neutral,
            confidence: 50.0,
        },
        insights: vec![Insight {
            icon: "💡".to_string(),
            title: "Analysis unavailable".to_string(),
            text: "Automatic analysis could not be completed for this content.".to_string(),
        }],
        suggested_actions: vec![
            "Review the content manually".to_string(),
            "Try the analysis again later".to_string(),
        ],
        trend_analysis: "No trend analysis is available right now.".to_string(),
        network_opportunities: vec!["Share this update with your existing network.".to_string()],
    }
}

pub fn question_set() -> QuestionSet {
    QuestionSet {
        professional: vec![
            "What does success look like for this project?".to_string(),
            "What are the biggest obstacles you are facing right now?".to_string(),
            "How does this fit into your roadmap for the year?".to_string(),
        ],
        social: vec![
            "How did you get started in this field?".to_string(),
            "What are you most excited about outside of work?".to_string(),
        ],
        humorous: vec!["What's the most memorable meeting you've ever been in?".to_string()],
    }
}

pub fn key_points() -> Vec<String> {
    vec![
        "Automatic key-point extraction was unavailable for this transcript.".to_string(),
        "Review the transcript manually for important points.".to_string(),
    ]
}

pub fn topic_research() -> TopicResearch {
    TopicResearch {
        overview: "Automatic research is unavailable right now. \
                   General preparation guidance is provided instead."
            .to_string(),
        talking_points: vec![
            "Ask about their current priorities on this topic".to_string(),
            "Share your own experience with the topic".to_string(),
        ],
        recent_developments: vec!["Check recent industry news before the meeting.".to_string()],
        questions: vec!["What changes have you seen in this area recently?".to_string()],
    }
}

pub fn pitch_analysis() -> PitchAnalysis {
    PitchAnalysis {
        strengths: vec!["Clear problem statement".to_string()],
        concerns: vec!["Automatic analysis unavailable; review manually".to_string()],
        recommendations: vec![
            "Validate the market size with independent data".to_string(),
            "Clarify the revenue model".to_string(),
        ],
        investment_potential: 50.0,
        summary: "Automatic pitch analysis could not be completed. \
                  The pitch should be reviewed manually."
            .to_string(),
    }
}

pub fn contract_summary() -> ContractSummary {
    ContractSummary {
        key_terms: vec!["Automatic extraction unavailable".to_string()],
        obligations: vec!["Review the contract manually for obligations".to_string()],
        risks: vec!["Have the contract reviewed by a qualified professional".to_string()],
        summary: "Automatic contract summarization could not be completed.".to_string(),
    }
}

pub fn contact_insight() -> ContactInsight {
    ContactInsight {
        talking_points: vec![
            "Ask about their current role and priorities".to_string(),
            "Explore shared professional interests".to_string(),
        ],
        ice_breakers: vec!["How has your week been so far?".to_string()],
        meeting_strategy: "Keep the first meeting short and focused on listening.".to_string(),
    }
}

pub fn venue_suggestion() -> VenueSuggestion {
    VenueSuggestion {
        venues: vec![
            Venue {
                name: "A quiet local cafe".to_string(),
                kind: "cafe".to_string(),
                reason: "Neutral ground that suits informal first meetings.".to_string(),
            },
            Venue {
                name: "Video call".to_string(),
                kind: "virtual".to_string(),
                reason: "Lowest scheduling friction when travel is impractical.".to_string(),
            },
        ],
        best_practices: vec![
            "Confirm the venue a day ahead".to_string(),
            "Arrive ten minutes early".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Fallbacks must be deterministic: repeated calls yield identical values.
    #[test]
    fn fallbacks_are_idempotent() {
        assert_eq!(content_analysis(), content_analysis());
        assert_eq!(question_set(), question_set());
        assert_eq!(key_points(), key_points());
        assert_eq!(topic_research(), topic_research());
        assert_eq!(pitch_analysis(), pitch_analysis());
        assert_eq!(contract_summary(), contract_summary());
        assert_eq!(contact_insight(), contact_insight());
        assert_eq!(venue_suggestion(), venue_suggestion());
    }

    #[test]
    fn fallback_sentiment_is_neutral_midscale() {
        let analysis = content_analysis();
        assert_eq!(analysis.sentiment.label, SentimentLabel::Neutral);
        assert!((0.0..=100.0).contains(&analysis.sentiment.confidence));
    }

    #[test]
    fn fallback_pitch_score_in_range() {
        let pitch = pitch_analysis();
        assert!((0.0..=100.0).contains(&pitch.investment_potential));
        assert!(!pitch.summary.is_empty());
    }
}
