//! Sample catalog content.
//!
//! A small fixed catalog used for demos and integration tests: six
//! tutorials and six prompts, including one private prompt so the
//! visibility gate is exercised. Production code replaces this with a real
//! [`crate::CatalogStore`] backend.

use crate::prompts::{ModelProvider, Prompt, StructureType, Visibility};
use crate::tutorials::{Difficulty, Tutorial};
use chrono::{DateTime, Utc};
use promptcraft_common::{RecordId, UserId};
use serde_json::{json, Map, Value};

fn ts(rfc3339: &str) -> DateTime<Utc> {
    rfc3339.parse().expect("fixture timestamp")
}

fn params(pairs: &[(&str, Value)]) -> Map<String, Value> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// The sample tutorial collection
pub fn sample_tutorials() -> Vec<Tutorial> {
    vec![
        Tutorial {
            id: RecordId::new("1"),
            title: "Chain-of-Thought Prompting for Complex Reasoning".to_string(),
            description: "Learn how to guide AI models through step-by-step reasoning \
                          processes to solve complex problems more effectively."
                .to_string(),
            content: "# Chain-of-Thought Prompting\n\nThis tutorial covers...".to_string(),
            category: "Chain-of-Thought".to_string(),
            difficulty: Difficulty::Intermediate,
            github_url: Some("https://github.com/example/cot-prompting".to_string()),
            author_id: UserId::new("1"),
            author_name: "Alex Johnson".to_string(),
            created_at: ts("2024-01-15T10:00:00Z"),
            updated_at: ts("2024-01-15T10:00:00Z"),
            is_approved: true,
            tags: tags(&["reasoning", "problem-solving", "step-by-step"]),
        },
        Tutorial {
            id: RecordId::new("2"),
            title: "Few-Shot Learning with Examples".to_string(),
            description: "Master the technique of providing a few examples to teach AI \
                          models new patterns and behaviors."
                .to_string(),
            content: "# Few-Shot Learning\n\nThis approach involves...".to_string(),
            category: "Few-Shot Learning".to_string(),
            difficulty: Difficulty::Beginner,
            github_url: Some("https://github.com/example/few-shot".to_string()),
            author_id: UserId::new("2"),
            author_name: "Sarah Chen".to_string(),
            created_at: ts("2024-01-14T15:30:00Z"),
            updated_at: ts("2024-01-14T15:30:00Z"),
            is_approved: true,
            tags: tags(&["examples", "learning", "patterns"]),
        },
        Tutorial {
            id: RecordId::new("3"),
            title: "Advanced Code Generation Techniques".to_string(),
            description: "Explore sophisticated prompting strategies for generating \
                          high-quality code with detailed specifications."
                .to_string(),
            content: "# Code Generation\n\nAdvanced techniques for...".to_string(),
            category: "Code Generation".to_string(),
            difficulty: Difficulty::Advanced,
            github_url: Some("https://github.com/example/code-gen".to_string()),
            author_id: UserId::new("3"),
            author_name: "Mike Rodriguez".to_string(),
            created_at: ts("2024-01-13T09:15:00Z"),
            updated_at: ts("2024-01-13T09:15:00Z"),
            is_approved: true,
            tags: tags(&["coding", "programming", "automation"]),
        },
        Tutorial {
            id: RecordId::new("4"),
            title: "Creative Writing Prompts for Storytelling".to_string(),
            description: "Unlock AI creativity with prompting techniques designed for \
                          narrative generation and creative content."
                .to_string(),
            content: "# Creative Writing\n\nTechniques for creative...".to_string(),
            category: "Creative Writing".to_string(),
            difficulty: Difficulty::Beginner,
            github_url: None,
            author_id: UserId::new("4"),
            author_name: "Emma Davis".to_string(),
            created_at: ts("2024-01-12T14:20:00Z"),
            updated_at: ts("2024-01-12T14:20:00Z"),
            is_approved: true,
            tags: tags(&["creativity", "storytelling", "content"]),
        },
        Tutorial {
            id: RecordId::new("5"),
            title: "Role-Playing and Persona Prompts".to_string(),
            description: "Learn how to create convincing AI personas and role-playing \
                          scenarios for specialized tasks."
                .to_string(),
            content: "# Role-Playing Prompts\n\nCreating personas...".to_string(),
            category: "Role-Playing".to_string(),
            difficulty: Difficulty::Intermediate,
            github_url: Some("https://github.com/example/role-playing".to_string()),
            author_id: UserId::new("5"),
            author_name: "David Kim".to_string(),
            created_at: ts("2024-01-11T11:45:00Z"),
            updated_at: ts("2024-01-11T11:45:00Z"),
            is_approved: true,
            tags: tags(&["persona", "character", "specialized"]),
        },
        Tutorial {
            id: RecordId::new("6"),
            title: "Zero-Shot Classification Mastery".to_string(),
            description: "Master zero-shot classification techniques for categorizing \
                          content without prior training examples."
                .to_string(),
            content: "# Zero-Shot Classification\n\nClassification without...".to_string(),
            category: "Classification".to_string(),
            difficulty: Difficulty::Advanced,
            github_url: None,
            author_id: UserId::new("6"),
            author_name: "Lisa Park".to_string(),
            created_at: ts("2024-01-10T16:00:00Z"),
            updated_at: ts("2024-01-10T16:00:00Z"),
            is_approved: true,
            tags: tags(&["classification", "zero-shot", "categories"]),
        },
    ]
}

/// The sample prompt collection
///
/// "Market Research Analysis" (id 4) is private to author "1", so anonymous
/// listings contain five prompts and author "1" sees all six.
pub fn sample_prompts() -> Vec<Prompt> {
    vec![
        Prompt {
            id: RecordId::new("1"),
            title: "Professional Email Writer".to_string(),
            description: "Generates professional business emails with customizable tone \
                          and length"
                .to_string(),
            content: "You are a professional email writer. Write an email to \
                      {{recipient}} about {{subject}} with a {{tone}} tone. The email \
                      should be {{length}} in length."
                .to_string(),
            category: "Business".to_string(),
            tags: tags(&["email", "professional", "communication"]),
            author_id: UserId::new("1"),
            author_name: "Alex Johnson".to_string(),
            created_at: ts("2024-05-15T10:00:00Z"),
            updated_at: ts("2024-05-15T10:00:00Z"),
            provider: ModelProvider::OpenAi,
            model: "gpt-4o".to_string(),
            parameters: params(&[("temperature", json!(0.7)), ("max_tokens", json!(500))]),
            version: 1,
            visibility: Visibility::Public,
            structure_type: Some(StructureType::RoleBased),
        },
        Prompt {
            id: RecordId::new("2"),
            title: "Code Explainer".to_string(),
            description: "Explains complex code snippets step by step with examples".to_string(),
            content: "You are a coding tutor. Explain the following code snippet in \
                      simple terms:\n\n```{{language}}\n{{code}}\n```\n\nBreak down your \
                      explanation into these sections:\n1. Overview of what the code \
                      does\n2. Step-by-step explanation\n3. Key concepts used\n4. A \
                      simpler example if possible"
                .to_string(),
            category: "Programming".to_string(),
            tags: tags(&["code", "explanation", "tutorial"]),
            author_id: UserId::new("2"),
            author_name: "Sarah Chen".to_string(),
            created_at: ts("2024-05-14T15:30:00Z"),
            updated_at: ts("2024-05-14T15:30:00Z"),
            provider: ModelProvider::Gemini,
            model: "gemini-pro-2.5".to_string(),
            parameters: params(&[("temperature", json!(0.3)), ("max_tokens", json!(1000))]),
            version: 2,
            visibility: Visibility::Public,
            structure_type: Some(StructureType::ChainOfThought),
        },
        Prompt {
            id: RecordId::new("3"),
            title: "Creative Story Generator".to_string(),
            description: "Creates imaginative stories based on provided elements and genre"
                .to_string(),
            content: "Write a {{genre}} story that includes the following elements: \
                      {{elements}}. The story should be {{length}} words long and have a \
                      {{mood}} mood."
                .to_string(),
            category: "Creative".to_string(),
            tags: tags(&["story", "creative", "writing"]),
            author_id: UserId::new("3"),
            author_name: "Mike Rodriguez".to_string(),
            created_at: ts("2024-05-13T09:15:00Z"),
            updated_at: ts("2024-05-13T09:15:00Z"),
            provider: ModelProvider::Anthropic,
            model: "claude-3".to_string(),
            parameters: params(&[("temperature", json!(0.9)), ("max_tokens", json!(2000))]),
            version: 1,
            visibility: Visibility::Public,
            structure_type: Some(StructureType::FreeForm),
        },
        Prompt {
            id: RecordId::new("4"),
            title: "Market Research Analysis".to_string(),
            description: "Analyzes market trends and provides strategic recommendations"
                .to_string(),
            content: "You are a market research analyst. Analyze the current trends in \
                      the {{industry}} industry, focusing on {{specific_area}}. \
                      Provide:\n\n1. An overview of key market trends\n2. Analysis of \
                      major competitors\n3. Identification of market gaps\n4. Strategic \
                      recommendations for entering or expanding in this market"
                .to_string(),
            category: "Business".to_string(),
            tags: tags(&["market", "analysis", "strategy"]),
            author_id: UserId::new("1"),
            author_name: "Alex Johnson".to_string(),
            created_at: ts("2024-05-12T14:20:00Z"),
            updated_at: ts("2024-05-12T14:20:00Z"),
            provider: ModelProvider::OpenAi,
            model: "gpt-4".to_string(),
            parameters: params(&[("temperature", json!(0.4)), ("max_tokens", json!(1500))]),
            version: 3,
            visibility: Visibility::Private,
            structure_type: Some(StructureType::RoleBased),
        },
        Prompt {
            id: RecordId::new("5"),
            title: "Recipe Generator".to_string(),
            description: "Creates detailed recipes based on available ingredients and \
                          dietary restrictions"
                .to_string(),
            content: "You are a professional chef. Create a recipe using the following \
                      ingredients: {{ingredients}}. The recipe should be suitable for \
                      someone with {{dietary_restrictions}} dietary restrictions. \
                      Include preparation time, cooking time, serving size, ingredients \
                      list, step-by-step instructions, and nutritional information."
                .to_string(),
            category: "Food".to_string(),
            tags: tags(&["recipe", "cooking", "food"]),
            author_id: UserId::new("4"),
            author_name: "Emma Davis".to_string(),
            created_at: ts("2024-05-11T11:45:00Z"),
            updated_at: ts("2024-05-11T11:45:00Z"),
            provider: ModelProvider::Local,
            model: "ollama".to_string(),
            parameters: params(&[("temperature", json!(0.6)), ("max_tokens", json!(800))]),
            version: 1,
            visibility: Visibility::Public,
            structure_type: Some(StructureType::RoleBased),
        },
        Prompt {
            id: RecordId::new("6"),
            title: "Learning Concepts with Examples".to_string(),
            description: "Explains complex concepts with multiple examples using few-shot \
                          learning"
                .to_string(),
            content: "I want you to explain {{concept}} using the few-shot learning \
                      approach.\n\nExample 1: {{example1}}\nExplanation 1: \
                      {{explanation1}}\n\nExample 2: {{example2}}\nExplanation 2: \
                      {{explanation2}}\n\nNow explain {{target_concept}} following the \
                      same pattern."
                .to_string(),
            category: "Education".to_string(),
            tags: tags(&["learning", "examples", "education"]),
            author_id: UserId::new("2"),
            author_name: "Sarah Chen".to_string(),
            created_at: ts("2024-05-10T16:00:00Z"),
            updated_at: ts("2024-05-10T16:00:00Z"),
            provider: ModelProvider::Gemini,
            model: "gemini-flash-2.5".to_string(),
            parameters: params(&[("temperature", json!(0.5)), ("max_tokens", json!(1200))]),
            version: 1,
            visibility: Visibility::Public,
            structure_type: Some(StructureType::FewShot),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_ids_are_unique() {
        let tutorials = sample_tutorials();
        let mut ids: Vec<_> = tutorials.iter().map(|t| t.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), tutorials.len());

        let prompts = sample_prompts();
        let mut ids: Vec<_> = prompts.iter().map(|p| p.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), prompts.len());
    }

    #[test]
    fn test_exactly_one_private_prompt() {
        let private: Vec<_> = sample_prompts()
            .into_iter()
            .filter(|p| p.visibility == Visibility::Private)
            .collect();
        assert_eq!(private.len(), 1);
        assert_eq!(private[0].title, "Market Research Analysis");
        assert_eq!(private[0].author_id, UserId::new("1"));
    }

    #[test]
    fn test_sample_prompts_have_template_variables() {
        for prompt in sample_prompts() {
            assert!(prompt.has_variables(), "prompt {} has no variables", prompt.id);
        }
    }
}
