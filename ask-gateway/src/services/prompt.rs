//! Fixed prompt template wrapped around every question.

/// Persona and answer-style instruction placed before the question.
pub const INSTRUCTION: &str = "You are a Christian AI assistant. Please answer the following \
     question clearly from a biblical perspective:";

/// Build the prompt for `question`.
///
/// The layout (leading newline, four-space indented lines, trailing
/// indentation) is kept byte-for-byte stable for existing callers.
pub fn build_prompt(question: &str) -> String {
    format!("\n    {INSTRUCTION}\n\n    Question: {question}\n    Answer:\n    ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_is_placed_between_instruction_and_answer_cue() {
        assert_eq!(
            build_prompt("Does God exist?"),
            "\n    You are a Christian AI assistant. Please answer the following question clearly \
             from a biblical perspective:\n\n    Question: Does God exist?\n    Answer:\n    "
        );
    }

    #[test]
    fn empty_question_leaves_slot_empty() {
        let prompt = build_prompt("");
        assert!(prompt.contains("    Question: \n    Answer:"));
        assert!(prompt.contains(INSTRUCTION));
    }

    #[test]
    fn question_text_is_not_escaped_or_trimmed() {
        let prompt = build_prompt("  {braces} and \"quotes\"\n");
        assert!(prompt.contains("Question:   {braces} and \"quotes\"\n\n    Answer:"));
    }
}
