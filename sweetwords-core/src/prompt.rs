//! Prompt construction
//!
//! Prompts are a pure function of the request. Both vendor families share the
//! same conditioning rules: an adaptive name-repetition instruction keyed on
//! `max_length`, a length bound, a ban on clichés and a completeness rule.
//! None of these are checked against the output; they are instructions only.

use crate::protocol::{GenerationRequest, Language};

/// Below this `max_length` the name appears exactly once
pub const SHORT_LENGTH_THRESHOLD: u32 = 35;

/// Above this `max_length` the name appears two or more times
pub const LONG_LENGTH_THRESHOLD: u32 = 50;

/// How often the recipient's name should appear in the message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRepetition {
    /// Exactly one mention
    Once,
    /// Two mentions (start and end) when they rhyme or resonate, otherwise one
    TwiceIfRhyming,
    /// Two or more mentions that refer back to each other
    TwiceOrMore,
}

impl NameRepetition {
    /// Pick the rule for a given upper length bound
    pub fn for_max_length(max_length: u32) -> Self {
        if max_length < SHORT_LENGTH_THRESHOLD {
            NameRepetition::Once
        } else if max_length <= LONG_LENGTH_THRESHOLD {
            NameRepetition::TwiceIfRhyming
        } else {
            NameRepetition::TwiceOrMore
        }
    }

    /// Render the instruction in the target language
    pub fn instruction(&self, name: &str, language: Language) -> String {
        match (self, language) {
            (NameRepetition::Once, Language::Zh) => {
                format!("必须在情话中自然地提到\"{}\"，且只提到一次", name)
            }
            (NameRepetition::TwiceIfRhyming, Language::Zh) => format!(
                "若能做到押韵或呼应，在开头和结尾各提到\"{}\"一次；否则只自然地提到一次",
                name
            ),
            (NameRepetition::TwiceOrMore, Language::Zh) => {
                format!("至少提到\"{}\"两次，并让每一处相互呼应、前后关联", name)
            }
            (NameRepetition::Once, Language::En) => {
                format!("Naturally include \"{}\" exactly once", name)
            }
            (NameRepetition::TwiceIfRhyming, Language::En) => format!(
                "Include \"{}\" twice, once at the start and once at the end, only if the two mentions rhyme or resonate; otherwise include it exactly once",
                name
            ),
            (NameRepetition::TwiceOrMore, Language::En) => format!(
                "Include \"{}\" two or more times, letting each mention echo and refer back to the others",
                name
            ),
        }
    }
}

/// System and user prompts for chat-style vendors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPrompts {
    pub system: String,
    pub user: String,
}

/// Unit the length bound is counted in
fn length_unit(language: Language) -> &'static str {
    match language {
        Language::Zh => "字",
        Language::En => "words",
    }
}

/// Keyword hint clause, empty when there are no keywords
fn keyword_clause(request: &GenerationRequest) -> String {
    if request.keywords().is_empty() {
        return String::new();
    }

    match request.language() {
        Language::Zh => format!(
            "，围绕\"{}\"的意境（关键词只作灵感，不必原样出现），",
            request.keywords().join("、")
        ),
        Language::En => format!(
            ", inspired by these keywords: {} (they set the mood and need not appear verbatim)",
            request.keywords().join(", ")
        ),
    }
}

/// Single prompt used by the Gemini-style family
pub fn single_prompt(request: &GenerationRequest) -> String {
    let name = request.name();
    let scene = request.scene();
    let rule = NameRepetition::for_max_length(request.max_length())
        .instruction(name, request.language());
    let keywords = keyword_clause(request);

    match request.language() {
        Language::Zh => format!(
            "请以\"{style}\"的风格，在\"{scene}\"的场景下{keywords}为{name}创作一段情话。要求：\n\
             1. {rule}；\n\
             2. 内容要贴合{scene}场景的具体需求；\n\
             3. 富有创意和感染力；\n\
             4. 避免陈词滥调；\n\
             5. 字数必须在{min}到{max}{unit}之间；\n\
             6. 注重语言的韵律感，可以采用对偶、押韵等修辞手法；\n\
             7. 确保句子完整，不要断句。",
            style = request.style(),
            min = request.min_length(),
            max = request.max_length(),
            unit = length_unit(Language::Zh),
        ),
        Language::En => format!(
            "Create a love message for {name} in the \"{style}\" style, for the \"{scene}\" scene{keywords}. Requirements:\n\
             1. {rule};\n\
             2. Make it relevant to the {scene} scene;\n\
             3. Be creative and touching;\n\
             4. Avoid clichés;\n\
             5. The message must be between {min} and {max} {unit};\n\
             6. Focus on rhythm and musicality, using techniques like parallelism and rhyme;\n\
             7. Ensure the message is complete and not cut off.",
            style = request.style(),
            min = request.min_length(),
            max = request.max_length(),
            unit = length_unit(Language::En),
        ),
    }
}

/// System + user prompts used by the OpenAI-compatible family
pub fn chat_prompts(request: &GenerationRequest) -> ChatPrompts {
    let name = request.name();
    let scene = request.scene();
    let min = request.min_length();
    let max = request.max_length();
    let rule = NameRepetition::for_max_length(max).instruction(name, request.language());
    let keywords = keyword_clause(request);

    match request.language() {
        Language::Zh => ChatPrompts {
            system: format!(
                "你是一个浪漫的情话生成器。请创作优美、富有韵律感的情话，要求：\n\
                 1. 字数要求在{min}到{max}{unit}之间\n\
                 2. 要巧妙地将收信人的名字融入情话中，使其成为情话的一部分，而不是生硬地添加\n\
                 3. 注意语言的节奏感和音韵美，可以适当使用对偶、押韵等修辞手法\n\
                 4. 确保生成的是完整的句子，不要断句",
                unit = length_unit(Language::Zh),
            ),
            user: format!(
                "请以\"{style}\"的风格，在\"{scene}\"的场景下{keywords}为{name}创作一段情话。要求：\n\
                 1. {rule}，使其成为情话的一部分\n\
                 2. 内容要贴合{scene}场景的具体需求\n\
                 3. 注重语言的韵律感，可以采用对偶、押韵等手法\n\
                 4. 富有创意和感染力\n\
                 5. 避免陈词滥调\n\
                 6. 确保句子完整，不要断句",
                style = request.style(),
            ),
        },
        Language::En => ChatPrompts {
            system: format!(
                "You are a romantic message generator. Create beautiful and rhythmic love messages with these requirements:\n\
                 1. The message should be between {min} and {max} {unit}\n\
                 2. Creatively incorporate the recipient's name into the message, making it an integral part of the expression\n\
                 3. Pay attention to rhythm and phonetic beauty, using techniques like parallelism and rhyme where appropriate\n\
                 4. Ensure the message is complete and not cut off",
                unit = length_unit(Language::En),
            ),
            user: format!(
                "Create a love message for {name} in the \"{style}\" style, for the \"{scene}\" scene{keywords}. Requirements:\n\
                 1. {rule}, weaving the name in as an integral part\n\
                 2. Make it relevant to the {scene} scene\n\
                 3. Focus on rhythm and musicality, using techniques like parallelism and rhyme\n\
                 4. Be creative and touching\n\
                 5. Avoid clichés\n\
                 6. Ensure the message is complete and not cut off",
                style = request.style(),
            ),
        },
    }
}
