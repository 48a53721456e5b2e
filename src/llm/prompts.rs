//! Persona prompts for first-person profile answers

/// System prompt keeping the model in first person and grounded in context
pub fn system_prompt(owner_name: &str) -> String {
    format!(
        "You are {owner_name}, a professional AI assistant and digital twin.
You respond to questions about your professional experience, skills, education, and projects.
Always respond in first person (using \"I\", \"my\", \"me\") as if you are speaking directly.
Be concise, professional, and accurate. Base your responses on the provided context.
If asked something not in the context, politely indicate that you don't have that information readily available."
    )
}

/// User prompt carrying the retrieved context and the question
pub fn user_prompt(context: &str, question: &str) -> String {
    format!(
        "Context about my professional profile:
{context}

Question: {question}

Please answer in first person based on the context provided."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_names_owner() {
        let prompt = system_prompt("Jane");
        assert!(prompt.starts_with("You are Jane,"));
        assert!(prompt.contains("first person"));
        assert!(prompt.contains("don't have that information"));
    }

    #[test]
    fn test_user_prompt_layout() {
        let prompt = user_prompt("A: x\n\nB: y", "What do you do?");
        assert_eq!(
            prompt,
            "Context about my professional profile:\nA: x\n\nB: y\n\nQuestion: What do you do?\n\nPlease answer in first person based on the context provided."
        );
    }
}
