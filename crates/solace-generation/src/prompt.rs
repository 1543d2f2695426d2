//! Prompt assembly for the consultation flow.
//!
//! The final request carries the standing system instruction, the bounded
//! conversation history as alternating turns, and the current user message
//! with any retrieved reference material prepended as a delimited block.

use solace_core::constants::CONTEXT_EXCERPT_CHARS;
use solace_core::models::{GenerationRequest, PromptTurn, RetrievedChunk, Turn};

/// Standing instruction for the consultation persona.
pub const CONSULT_SYSTEM_PROMPT: &str = "\
You are a warm, supportive mental-wellness companion grounded in \
cognitive-behavioural techniques. In every reply:

1. Acknowledge what the person said and the feeling behind it.
2. Reflect it back briefly in your own words so they feel heard.
3. Offer one small, concrete, evidence-based suggestion they could try.
4. Close with one gentle, open question that invites them to continue.

Keep replies under 250 words. Use plain, kind language and write in the \
second person. When reference material is provided between the markers \
below, draw on it where it genuinely helps, but never quote source labels \
or bracketed citations back to the user.

You are not a clinician. Never diagnose a condition, never recommend or \
adjust medication, and never present yourself as a substitute for \
professional care. If the person seems to need more help than \
conversation can offer, gently encourage them to reach out to a \
professional.";

/// Renders retrieved chunks as a numbered reference block, or `None`
/// when there is nothing to cite.
pub fn format_context_block(chunks: &[RetrievedChunk]) -> Option<String> {
    if chunks.is_empty() {
        return None;
    }
    let mut block = String::from("Reference material:\n");
    for (i, chunk) in chunks.iter().enumerate() {
        let excerpt: String = chunk
            .content
            .chars()
            .take(CONTEXT_EXCERPT_CHARS)
            .collect();
        block.push_str(&format!(
            "\n[Source {}: {} — {}]\n{}\n",
            i + 1,
            chunk.book_name,
            chunk.section,
            excerpt.trim()
        ));
    }
    Some(block)
}

/// Assembles the full generation request for one consultation turn.
pub fn build_consult_request(
    history: &[Turn],
    chunks: &[RetrievedChunk],
    user_text: &str,
    temperature: f32,
    max_output_tokens: u32,
) -> GenerationRequest {
    let mut turns: Vec<PromptTurn> = history
        .iter()
        .map(|t| PromptTurn {
            role: t.role,
            text: t.content.clone(),
        })
        .collect();

    let current = match format_context_block(chunks) {
        Some(block) => format!("{block}\n---\n\n{user_text}"),
        None => user_text.to_string(),
    };
    turns.push(PromptTurn::user(current));

    GenerationRequest {
        system_instruction: CONSULT_SYSTEM_PROMPT.to_string(),
        turns,
        temperature,
        max_output_tokens,
        disable_safety_filters: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solace_core::models::Role;

    fn chunk(book: &str, section: &str, content: &str) -> RetrievedChunk {
        RetrievedChunk {
            book_name: book.to_string(),
            section: section.to_string(),
            content: content.to_string(),
        }
    }

    fn turn(role: Role, content: &str) -> Turn {
        Turn {
            id: 0,
            session_id: "s".to_string(),
            role,
            content: content.to_string(),
            is_crisis: false,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn context_block_numbers_sources_in_order() {
        let chunks = vec![
            chunk("Feeling Good", "Ch. 3", "First excerpt."),
            chunk("Mind Over Mood", "Worksheet 2", "Second excerpt."),
        ];
        let block = format_context_block(&chunks).unwrap();
        assert!(block.contains("[Source 1: Feeling Good — Ch. 3]"));
        assert!(block.contains("[Source 2: Mind Over Mood — Worksheet 2]"));
        let first = block.find("Source 1").unwrap();
        let second = block.find("Source 2").unwrap();
        assert!(first < second);
    }

    #[test]
    fn context_block_empty_when_no_chunks() {
        assert!(format_context_block(&[]).is_none());
    }

    #[test]
    fn context_excerpt_is_bounded() {
        let long = "x".repeat(CONTEXT_EXCERPT_CHARS * 2);
        let block = format_context_block(&[chunk("B", "S", &long)]).unwrap();
        let excerpt_len = block
            .lines()
            .filter(|l| l.starts_with('x'))
            .map(|l| l.chars().count())
            .sum::<usize>();
        assert_eq!(excerpt_len, CONTEXT_EXCERPT_CHARS);
    }

    #[test]
    fn request_carries_history_then_current_message() {
        let history = vec![turn(Role::User, "hi"), turn(Role::Model, "hello")];
        let req = build_consult_request(&history, &[], "how are you", 0.7, 600);
        assert_eq!(req.turns.len(), 3);
        assert_eq!(req.turns[0].text, "hi");
        assert_eq!(req.turns[1].role, Role::Model);
        assert_eq!(req.turns[2].text, "how are you");
        assert_eq!(req.turns[2].role, Role::User);
    }

    #[test]
    fn current_message_prefixed_with_context_when_present() {
        let chunks = vec![chunk("B", "S", "excerpt text")];
        let req = build_consult_request(&[], &chunks, "I feel stuck", 0.7, 600);
        let last = &req.turns.last().unwrap().text;
        assert!(last.contains("Reference material:"));
        assert!(last.contains("---"));
        assert!(last.ends_with("I feel stuck"));
    }

    #[test]
    fn bare_message_when_no_context() {
        let req = build_consult_request(&[], &[], "I feel stuck", 0.7, 600);
        assert_eq!(req.turns.last().unwrap().text, "I feel stuck");
    }
}
