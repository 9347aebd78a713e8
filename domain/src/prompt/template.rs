//! Prompt templates for the three study aids
//!
//! Every prompt starts with a one-line instruction naming the task. The
//! offline stand-in provider keys off that line, so the topic and the
//! source text are always placed on later lines.

use crate::core::text::{collapse_whitespace, take_chars};
use crate::study::{GlossaryRequest, QuizRequest, SummaryRequest};

/// Default cap on source material embedded in a prompt (characters).
pub const DEFAULT_MAX_CONTEXT_CHARS: usize = 15_000;

/// Renders kind-specific prompts from study requests.
#[derive(Debug, Clone)]
pub struct StudyPromptTemplate {
    max_context_chars: usize,
}

impl Default for StudyPromptTemplate {
    fn default() -> Self {
        Self {
            max_context_chars: DEFAULT_MAX_CONTEXT_CHARS,
        }
    }
}

impl StudyPromptTemplate {
    pub fn new(max_context_chars: usize) -> Self {
        Self { max_context_chars }
    }

    pub fn max_context_chars(&self) -> usize {
        self.max_context_chars
    }

    /// Prompt for a multiple-choice quiz
    pub fn quiz(&self, request: &QuizRequest) -> String {
        format!(
            r#"Generate a {count}-question multiple-choice quiz.
Topic: {topic}
Difficulty: {difficulty}

OUTPUT SCHEMA:
Return ONLY valid JSON, with no commentary and no Markdown. Use exactly this shape:
{{
  "topic": "{topic}",
  "questions": [
    {{
      "id": 1,
      "question": "string",
      "options": ["string", "string", "string", "string"],
      "answer": "string (matching one of the options)",
      "explanation": "string"
    }}
  ]
}}
Every question must have exactly 4 options.

SOURCE MATERIAL:
{source}"#,
            count = request.num_questions,
            topic = request.topic,
            difficulty = request.difficulty,
            source = self.source_text(&request.context_text),
        )
    }

    /// Prompt for a concise summary
    pub fn summary(&self, request: &SummaryRequest) -> String {
        format!(
            r#"Summarize the following study material.
Topic: {topic}

Write a concise summary of the key ideas in a few short paragraphs.

OUTPUT SCHEMA:
Return ONLY valid JSON, with no commentary and no Markdown. Use exactly this shape:
{{
  "topic": "{topic}",
  "summary": "string"
}}

SOURCE MATERIAL:
{source}"#,
            topic = request.topic,
            source = self.source_text(&request.context_text),
        )
    }

    /// Prompt for a glossary of key terms
    pub fn glossary(&self, request: &GlossaryRequest) -> String {
        format!(
            r#"Extract a glossary of key terms from the following study material.
Topic: {topic}

List the important terms with a one-sentence definition each.

OUTPUT SCHEMA:
Return ONLY valid JSON, with no commentary and no Markdown. Use exactly this shape:
{{
  "topic": "{topic}",
  "terms": [
    {{"term": "string", "definition": "string"}}
  ]
}}

SOURCE MATERIAL:
{source}"#,
            topic = request.topic,
            source = self.source_text(&request.context_text),
        )
    }

    /// Collapse whitespace and cap the length of the embedded material.
    fn source_text(&self, text: &str) -> String {
        let collapsed = collapse_whitespace(text);
        take_chars(&collapsed, self.max_context_chars).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_line(prompt: &str) -> &str {
        prompt.lines().next().unwrap_or_default()
    }

    #[test]
    fn test_quiz_prompt_embeds_parameters() {
        let request = QuizRequest::new("Python was\n\n released in   1991.", "Python")
            .with_difficulty("hard")
            .with_num_questions(3);
        let prompt = StudyPromptTemplate::default().quiz(&request);

        assert_eq!(first_line(&prompt), "Generate a 3-question multiple-choice quiz.");
        assert!(prompt.contains("Topic: Python"));
        assert!(prompt.contains("Difficulty: hard"));
        assert!(prompt.contains("Return ONLY valid JSON"));
        assert!(prompt.ends_with("Python was released in 1991."));
    }

    #[test]
    fn test_instruction_lines_name_the_task() {
        let template = StudyPromptTemplate::default();
        let summary = template.summary(&SummaryRequest::new("text", "History"));
        let glossary = template.glossary(&GlossaryRequest::new("text", "History"));

        assert!(first_line(&summary).to_lowercase().contains("summarize"));
        assert!(first_line(&glossary).to_lowercase().contains("glossary"));
        assert!(summary.contains("\"summary\": \"string\""));
        assert!(glossary.contains("\"terms\""));
    }

    #[test]
    fn test_quiz_instruction_avoids_other_kind_keywords() {
        let prompt = StudyPromptTemplate::default()
            .quiz(&QuizRequest::new("Summary of terms to extract", "Glossary terms"));
        let line = first_line(&prompt).to_lowercase();
        for keyword in ["summary", "summarize", "glossary", "terms", "extract"] {
            assert!(!line.contains(keyword), "quiz instruction contains {keyword}");
        }
    }

    #[test]
    fn test_source_text_is_truncated() {
        let template = StudyPromptTemplate::new(10);
        let prompt = template.summary(&SummaryRequest::new("abcdefghijklmnop", "T"));
        assert!(prompt.ends_with("SOURCE MATERIAL:\nabcdefghij"));
        assert_eq!(template.max_context_chars(), 10);
    }
}
