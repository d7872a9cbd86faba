//! Integration tests for filtering and facet enumeration over the sample
//! catalog.

use promptcraft_catalog::{
    fixtures, Difficulty, ModelProvider, PromptFacets, PromptFilter, StructureType, TutorialFacets,
    TutorialFilter, Visibility,
};

fn prompt_titles(filter: &PromptFilter) -> Vec<String> {
    filter
        .apply(&fixtures::sample_prompts())
        .into_iter()
        .map(|p| p.title)
        .collect()
}

fn tutorial_titles(filter: &TutorialFilter) -> Vec<String> {
    filter
        .apply(&fixtures::sample_tutorials())
        .into_iter()
        .map(|t| t.title)
        .collect()
}

#[test]
fn test_anonymous_prompt_listing_hides_the_private_prompt() {
    let titles = prompt_titles(&PromptFilter::new());
    assert_eq!(titles.len(), 5);
    assert!(!titles.contains(&"Market Research Analysis".to_string()));
}

#[test]
fn test_author_sees_their_private_prompt() {
    let titles = prompt_titles(&PromptFilter::new().with_viewer("1"));
    assert_eq!(titles.len(), 6);
    assert!(titles.contains(&"Market Research Analysis".to_string()));

    // any other signed-in user is still excluded
    let titles = prompt_titles(&PromptFilter::new().with_viewer("2"));
    assert_eq!(titles.len(), 5);
}

#[test]
fn test_search_by_author_name() {
    let filter = PromptFilter::new().with_search_query("sarah");
    assert_eq!(
        prompt_titles(&filter),
        vec!["Code Explainer", "Learning Concepts with Examples"]
    );
}

#[test]
fn test_category_filter_composes_with_access_rule() {
    let business = PromptFilter::new().with_category("Business");

    // anonymous: only the public Business prompt
    assert_eq!(prompt_titles(&business), vec!["Professional Email Writer"]);

    // the author of the private one sees both
    let as_author = business.with_viewer("1");
    assert_eq!(
        prompt_titles(&as_author),
        vec!["Professional Email Writer", "Market Research Analysis"]
    );
}

#[test]
fn test_provider_filter() {
    let filter = PromptFilter::new().with_provider(ModelProvider::Gemini);
    assert_eq!(
        prompt_titles(&filter),
        vec!["Code Explainer", "Learning Concepts with Examples"]
    );
}

#[test]
fn test_structure_type_filter() {
    let filter = PromptFilter::new().with_structure_type(StructureType::FewShot);
    assert_eq!(prompt_titles(&filter), vec!["Learning Concepts with Examples"]);
}

#[test]
fn test_tutorial_difficulty_filter() {
    let filter = TutorialFilter::new().with_difficulty(Difficulty::Beginner);
    assert_eq!(
        tutorial_titles(&filter),
        vec![
            "Few-Shot Learning with Examples",
            "Creative Writing Prompts for Storytelling"
        ]
    );
}

#[test]
fn test_tutorial_tags_are_any_of() {
    let filter = TutorialFilter::new()
        .with_tags(vec!["reasoning".to_string(), "examples".to_string()]);
    assert_eq!(
        tutorial_titles(&filter),
        vec![
            "Chain-of-Thought Prompting for Complex Reasoning",
            "Few-Shot Learning with Examples"
        ]
    );
}

#[test]
fn test_all_criteria_stacked() {
    let filter = TutorialFilter::new()
        .with_search_query("classification")
        .with_category("Classification")
        .with_difficulty(Difficulty::Advanced)
        .with_tags(vec!["zero-shot".to_string()]);
    assert_eq!(tutorial_titles(&filter), vec!["Zero-Shot Classification Mastery"]);

    // flipping one criterion away empties the result
    let mismatched = filter.with_difficulty(Difficulty::Beginner);
    assert!(tutorial_titles(&mismatched).is_empty());
}

#[test]
fn test_tutorial_facets_follow_first_seen_order() {
    let facets = TutorialFacets::from_tutorials(&fixtures::sample_tutorials());
    assert_eq!(
        facets.categories,
        vec![
            "Chain-of-Thought",
            "Few-Shot Learning",
            "Code Generation",
            "Creative Writing",
            "Role-Playing",
            "Classification"
        ]
    );
    assert_eq!(facets.tags.len(), 18);
    assert_eq!(facets.tags[0], "reasoning");
}

#[test]
fn test_prompt_facets_cover_the_private_prompt() {
    let facets = PromptFacets::from_prompts(&fixtures::sample_prompts());

    // "Business" appears once even though two prompts carry it, and the
    // private prompt's tags are enumerated like any other's
    assert_eq!(
        facets.categories,
        vec!["Business", "Programming", "Creative", "Food", "Education"]
    );
    assert!(facets.tags.contains(&"strategy".to_string()));
    assert_eq!(
        facets.providers,
        vec![
            ModelProvider::OpenAi,
            ModelProvider::Gemini,
            ModelProvider::Anthropic,
            ModelProvider::Local
        ]
    );
    assert_eq!(
        facets.structure_types,
        vec![
            StructureType::RoleBased,
            StructureType::ChainOfThought,
            StructureType::FreeForm,
            StructureType::FewShot
        ]
    );
}

#[test]
fn test_visibility_facet_composes_with_access_rule() {
    let private_only = PromptFilter::new().with_visibility(Visibility::Private);

    // anonymous viewers get nothing: the facet selects private prompts and
    // the access rule then excludes them all
    assert!(prompt_titles(&private_only).is_empty());

    let as_author = private_only.with_viewer("1");
    assert_eq!(prompt_titles(&as_author), vec!["Market Research Analysis"]);
}
