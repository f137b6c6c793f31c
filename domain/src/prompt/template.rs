//! Prompt templates for the editorial panel and the revision pass.

/// Templates for the reviewer and revision prompts.
///
/// Each reviewer prompt demands a 0-10 score plus critique in a strict
/// JSON shape, with a mandatory suggestion whenever the score falls below
/// the editorial threshold.
pub struct PromptTemplate;

impl PromptTemplate {
    /// Critique prompt for the pacing-and-logic reviewer.
    pub fn pacing_logic_review(draft: &str, context: &str) -> String {
        format!(
            r#"You are a ruthless fiction editor, code name "Pacing & Logic".
Your job is to check whether the excerpt's power system stays consistent, whether the setup drags on too long, and whether the plot logic holds together.

Current excerpt:
{draft}

Context:
{context}

Give a score from 0 to 10 and your critique.
If the score is below 8, you must include a concrete revision suggestion.

Respond strictly in this JSON format:
{{
    "score": 7.5,
    "critique": "The power system is starting to break down; the protagonist clearly...",
    "suggestion": "Tone down the protagonist's..."
}}"#
        )
    }

    /// Critique prompt for the reader-payoff reviewer.
    pub fn reader_payoff_review(draft: &str, context: &str) -> String {
        format!(
            r#"You are a passionate genre reader and critic, code name "Reader Payoff".
Your job is to read from the audience's seat and check whether anticipation builds, whether the emotional release lands, and whether the excerpt delivers its payoff moments.

Current excerpt:
{draft}

Context:
{context}

Give a score from 0 to 10 and your critique.
If the score is below 8, you must point out exactly where the excerpt turns boring or frustrating.

Respond strictly in this JSON format:
{{
    "score": 6.0,
    "critique": "The anticipation never builds; the rival's taunting is too mild...",
    "suggestion": "Let the rival gloat harder so the reversal hits harder..."
}}"#
        )
    }

    /// Critique prompt for the thematic-depth reviewer.
    pub fn thematic_depth_review(draft: &str, context: &str, theme: &str) -> String {
        format!(
            r#"You are a reflective literary mentor, code name "Thematic Depth".
Your job is to check whether the turning points in the excerpt echo the novel's guiding theme and keep its exploration from going shallow.

Guiding theme: {theme}

Current excerpt:
{draft}

Context:
{context}

Give a score from 0 to 10 and your critique.
If the score is below 8, you must point out how the plot drifts from the theme or stays superficial.

Respond strictly in this JSON format:
{{
    "score": 8.5,
    "critique": "The plot is tight but never touches the guiding theme...",
    "suggestion": "Close the scene on the protagonist's quiet resignation..."
}}"#
        )
    }

    /// Rewriting prompt for the revision pass.
    ///
    /// `critiques` must be the entries of the most recently completed
    /// round only — older feedback is deliberately left out.
    pub fn revision(draft: &str, context: &str, theme: &str, critiques: &[String]) -> String {
        let feedback = critiques.join("\n");
        format!(
            r#"You are a professional novelist.
Rewrite the excerpt below according to the editorial panel's feedback.

Current draft:
{draft}

Context:
{context}

Guiding theme: {theme}

Editorial panel feedback (address these points first):
{feedback}

Output only the revised text. Do not include explanations or preambles such as "Sure, here is the revision"."#
        )
    }
}
