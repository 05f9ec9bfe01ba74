//! Prompt templates
//!
//! Pure string rewrites applied to the user's text before the wire
//! request is built, one per formula flavor. Templates never influence
//! protocol classification; that is decided by the model name alone.

use cellgate_gateway::{GatewayError, Result};
use indoc::indoc;

/// Delimiter between few-shot example pairs
const EXAMPLE_DELIMITER: &str = "```";

/// Few-shot preamble steering the model toward short factual answers
const QA_PREAMBLE: &str = indoc! {r#"
    I am a highly intelligent question answering bot. If you ask me a
    question that is rooted in truth, I will give you the answer. If you
    ask me a question that is nonsense, trickery, or has no clear answer,
    I will respond with "Unknown".

    Q: What is human life expectancy in the United States?
    A: Human life expectancy in the United States is 78 years.

    Q: Who was president of the United States in 1955?
    A: Dwight D. Eisenhower was president of the United States in 1955.

    Q: How many squigs are in a bonk?
    A: Unknown

"#};

/// Wrap a question in the fixed Q/A preamble
pub fn question(text: &str) -> String {
    format!("{QA_PREAMBLE}Q: {text}\nA: ")
}

/// Summarization prompt
pub fn summarize(text: &str) -> String {
    format!("{text}\ntldr;\n")
}

/// Keyword extraction prompt
pub fn keywords(text: &str) -> String {
    format!("Extract keywords from this text:\n{text}")
}

/// Sentiment classification prompt
pub fn sentiment(text: &str) -> String {
    format!("Decide whether the text's sentiment is positive, neutral, or negative.\nText: {text}\nSentiment: ")
}

/// Color-from-mood prompt; the model continues after the `#`
pub fn mood_color(text: &str) -> String {
    format!("The css code for a color like {text}:\nbackground-color: #")
}

/// Interleave caller-supplied example pairs ahead of the real prompt
///
/// Each pair renders as `"{prompt}\n{response}"`; pairs and the final
/// prompt are joined by [`EXAMPLE_DELIMITER`], with a trailing newline.
///
/// # Errors
///
/// Returns [`GatewayError::ValidationFailure`] when the pair lists have
/// different lengths or no pairs are supplied; raised before any
/// network call.
pub fn few_shot(example_prompts: &[String], example_responses: &[String], text: &str) -> Result<String> {
    if example_prompts.is_empty() {
        return Err(GatewayError::ValidationFailure(
            "at least one example pair is required".to_owned(),
        ));
    }

    if example_prompts.len() != example_responses.len() {
        return Err(GatewayError::ValidationFailure(format!(
            "example prompts and responses must pair up, got {} prompts and {} responses",
            example_prompts.len(),
            example_responses.len()
        )));
    }

    let mut out = String::new();
    for (example_prompt, example_response) in example_prompts.iter().zip(example_responses) {
        out.push_str(example_prompt);
        out.push('\n');
        out.push_str(example_response);
        out.push_str(EXAMPLE_DELIMITER);
    }
    out.push_str(text);
    out.push('\n');

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_ends_with_answer_cue() {
        let prompt = question("Why is the sky blue?");
        assert!(prompt.starts_with("I am a highly intelligent question answering bot."));
        assert!(prompt.ends_with("Q: Why is the sky blue?\nA: "));
    }

    #[test]
    fn summarize_appends_tldr_marker() {
        assert_eq!(summarize("long text"), "long text\ntldr;\n");
    }

    #[test]
    fn keywords_prefixes_instruction() {
        assert_eq!(keywords("some text"), "Extract keywords from this text:\nsome text");
    }

    #[test]
    fn sentiment_ends_with_label_cue() {
        let prompt = sentiment("I love it");
        assert!(prompt.ends_with("Text: I love it\nSentiment: "));
    }

    #[test]
    fn mood_color_ends_with_hex_cue() {
        assert_eq!(
            mood_color("a stormy sea"),
            "The css code for a color like a stormy sea:\nbackground-color: #"
        );
    }

    #[test]
    fn few_shot_joins_pairs_with_delimiter() {
        let prompts = vec!["a".to_owned(), "b".to_owned()];
        let responses = vec!["1".to_owned(), "2".to_owned()];

        assert_eq!(few_shot(&prompts, &responses, "c").unwrap(), "a\n1```b\n2```c\n");
    }

    #[test]
    fn few_shot_rejects_mismatched_pairs() {
        let prompts = vec!["a".to_owned(), "b".to_owned()];
        let responses = vec!["1".to_owned()];

        let err = few_shot(&prompts, &responses, "c").unwrap_err();
        assert!(matches!(err, GatewayError::ValidationFailure(_)));
    }

    #[test]
    fn few_shot_rejects_zero_examples() {
        let err = few_shot(&[], &[], "c").unwrap_err();
        assert!(matches!(err, GatewayError::ValidationFailure(_)));
    }
}
