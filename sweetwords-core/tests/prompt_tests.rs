//! Property tests for prompt construction and request validation

use proptest::prelude::*;
use sweetwords_core::prompt::{chat_prompts, single_prompt, NameRepetition};
use sweetwords_core::protocol::keywords_from_input;
use sweetwords_core::{GenerationRequest, Language};

fn language() -> impl Strategy<Value = Language> {
    prop_oneof![Just(Language::Zh), Just(Language::En)]
}

proptest! {
    #[test]
    fn name_rule_bands(max in 2u32..500) {
        let rule = NameRepetition::for_max_length(max);
        let expected = if max < 35 {
            NameRepetition::Once
        } else if max <= 50 {
            NameRepetition::TwiceIfRhyming
        } else {
            NameRepetition::TwiceOrMore
        };
        prop_assert_eq!(rule, expected);
    }

    #[test]
    fn prompts_carry_name_scene_and_bounds(
        name in "[A-Za-z]{1,12}",
        min in 1u32..100,
        span in 1u32..100,
        language in language(),
    ) {
        let max = min + span;
        let request = GenerationRequest::builder()
            .name(name.clone())
            .style("playful")
            .scene("rainy evening")
            .lengths(min, max)
            .language(language)
            .build()
            .unwrap();

        let single = single_prompt(&request);
        prop_assert!(single.contains(&name));
        prop_assert!(single.contains("rainy evening"));
        prop_assert!(single.contains(&min.to_string()));
        prop_assert!(single.contains(&max.to_string()));

        let chat = chat_prompts(&request);
        prop_assert!(chat.system.contains(&max.to_string()));
        prop_assert!(chat.user.contains(&name));
        prop_assert!(chat.user.contains("playful"));
    }

    #[test]
    fn min_must_stay_below_max(min in 1u32..200, max in 1u32..200) {
        let built = GenerationRequest::builder()
            .name("Alex")
            .style("sweet")
            .scene("morning")
            .lengths(min, max)
            .build();
        prop_assert_eq!(built.is_ok(), min < max);
    }

    #[test]
    fn keyword_split_drops_blanks(parts in prop::collection::vec("[a-z]{0,6}", 0..8)) {
        let input = parts.join(" , ");
        let keywords = keywords_from_input(&input);
        let expected: Vec<String> = parts.into_iter().filter(|p| !p.is_empty()).collect();
        prop_assert_eq!(keywords, expected);
    }
}

#[test]
fn prompts_are_deterministic() {
    let request = GenerationRequest::builder()
        .name("小红")
        .style("诗意")
        .scene("想念")
        .keywords(["月光", "海"])
        .language(Language::Zh)
        .build()
        .unwrap();

    assert_eq!(single_prompt(&request), single_prompt(&request));
    assert_eq!(chat_prompts(&request), chat_prompts(&request));
    assert!(single_prompt(&request).contains("月光、海"));
}
