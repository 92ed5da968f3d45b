//! Fixed instructional template wrapped around the submitted sermon text.

/// Consultant persona and background knowledge prepended to every request.
pub const SYSTEM_CONTEXT: &str = "You are an expert homiletics consultant with deep knowledge of sermon analysis, biblical hermeneutics, and preaching effectiveness. You provide constructive, encouraging feedback to help preachers improve their craft.

BACKGROUND KNOWLEDGE:
- Classical sermon structure: Introduction, Main Points (usually 2-4), Illustration/Application, Conclusion
- Key elements: Clear thesis, biblical foundation, practical application, engaging delivery
- Common sermon types: Expository, Topical, Textual, Narrative
- Evaluation criteria: Biblical accuracy, clarity of message, practical relevance, rhetorical effectiveness
- Cultural sensitivity and pastoral care considerations

ANALYSIS FRAMEWORK:
1. Biblical Foundation - How well grounded in Scripture
2. Structure & Flow - Logical organization and transitions
3. Clarity of Message - Main point and supporting arguments
4. Practical Application - Real-world relevance and actionability
5. Engagement - Use of illustrations, stories, rhetorical devices
6. Pastoral Sensitivity - Tone, empathy, cultural awareness";

/// Analysis instructions. The sermon text is appended directly after this.
pub const ANALYSIS_PROMPT: &str = "Please analyze the following sermon text and provide constructive feedback. Focus on:

1. **Biblical Foundation**: How well does the sermon engage with and interpret the biblical text?
2. **Structure & Clarity**: Is the main message clear? How effective is the organization?
3. **Practical Application**: How well does it connect biblical truth to daily life?
4. **Engagement**: What works well for keeping the audience engaged?
5. **Areas for Growth**: What specific suggestions do you have for improvement?

Be encouraging while providing specific, actionable feedback. Assume this is from a sincere preacher seeking to improve their craft.

SERMON TEXT TO ANALYZE:
";

/// Assemble the full prompt sent upstream.
pub fn build_analysis_prompt(sermon_text: &str) -> String {
    format!("{}\n\n{}{}", SYSTEM_CONTEXT, ANALYSIS_PROMPT, sermon_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_wraps_the_sermon_text() {
        let prompt = build_analysis_prompt("For God so loved the world...");

        assert!(prompt.starts_with(SYSTEM_CONTEXT));
        assert!(prompt.contains("SERMON TEXT TO ANALYZE:"));
        assert!(prompt.ends_with("For God so loved the world..."));
    }

    #[test]
    fn sermon_text_is_embedded_unmodified() {
        let sermon = "  leading and trailing whitespace preserved \n";
        let prompt = build_analysis_prompt(sermon);
        assert!(prompt.ends_with(sermon));
    }
}
