//! Base instruction templates and the user-prompt wrappers.

/// Base instruction blocks, one per template kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseTemplate {
    Generate,
    Rewrite,
    Elaborate,
    Polish,
    Shorten,
}

impl BaseTemplate {
    pub fn text(self) -> &'static str {
        match self {
            BaseTemplate::Generate => GENERATE,
            BaseTemplate::Rewrite => REWRITE,
            BaseTemplate::Elaborate => ELABORATE,
            BaseTemplate::Polish => POLISH,
            BaseTemplate::Shorten => SHORTEN,
        }
    }
}

const GENERATE: &str = "You write a new content block for a premium travel itinerary. \
Work every detail the user gives you into the text: places, hotel names, amenities, \
attractions and experiences must appear exactly as stated.

Write so that the block:
- is specific and accurate, never generic;
- conveys what makes the trip special without exaggeration;
- reads as polished, professional copy that fits the itinerary layout;
- suits any traveler unless the user names an audience;
- stays readable, favoring clarity over length.

The text goes straight into the itinerary and on to the client, so get it right the first time.

Output only the newly generated text.";

const REWRITE: &str = "You revise an existing content block from a premium travel itinerary. \
Start from the user's existing text and apply their instructions.

While revising:
- keep every fact (hotel names, places, dates, itinerary specifics) unless told otherwise;
- improve flow and structure and remove awkward phrasing;
- match the style the user asks for;
- keep the language inviting but free of cliches;
- when the instructions conflict with the text, choose the reading a traveler would expect.

The text goes straight into the itinerary and on to the client, so get it right the first time.

Output only the rewritten text.";

const ELABORATE: &str = "You expand an existing content block from a premium travel itinerary. \
Keep the user's original text as the foundation and add depth.

While elaborating:
- keep every original fact and never invent new ones;
- add relevant detail about the places, amenities and experiences already mentioned;
- add sensory and local color where it helps the reader picture the trip;
- blend additions into the original so the text reads as one piece;
- avoid cliches and padding.

Output only the elaborated text.";

const POLISH: &str = "You polish an existing content block from a premium travel itinerary.

While polishing:
- keep every fact exactly as given;
- fix grammar, punctuation, sentence structure and word choice;
- keep the current tone, lifting it gently where it falls flat;
- remove repetition and ambiguous phrasing;
- keep it inviting and grounded.

Output only the polished text.";

const SHORTEN: &str = "You shorten an existing content block from a premium travel itinerary.

While shortening:
- keep every essential fact (names, dates, places, activities);
- cut redundant phrases, stacked adjectives and repetition;
- keep the result clear and professional;
- keep the original tone unless told otherwise;
- stay inviting rather than abrupt.

Output only the shortened text.";

/// Formatting block appended when the output is rendered as HTML.
pub const MARKDOWN: &str = "Format your answer as markdown and nothing else. \
Do not wrap it in backticks.

Allowed markdown syntax:
<allowedMarkdownSyntax>
Bold: **bold text**

Italic: *italic text*

Strikethrough: <s>struck text</s>

Underline: <u>underlined text</u>

Bulleted list:
- first item
- second item

Numbered list:
1. first item
2. second item

Link: [link text](https://example.com)

Line break: '\\n'
</allowedMarkdownSyntax>

<importantInstruction>
Use ONLY the markdown styles listed above. Never use any other formatting.
Use formatting sparingly, to emphasize key points and keep the text readable.
</importantInstruction>

The output is fed directly to a markdown renderer, so malformed markdown breaks the page.";

/// Prompt for writing from scratch.
pub fn generate_prompt(user_instructions: &str) -> String {
    format!(
        "The user gave you this guiding message:\n\
         <guidingMessage>\n{user_instructions}\n</guidingMessage>\n\n\
         Generate a text block for their travel itinerary. \
         Only output the newly generated text and nothing else."
    )
}

/// Prompt for adjusting existing text, optionally guided by the user.
pub fn rewrite_prompt(existing_text: &str, user_instructions: Option<&str>) -> String {
    let mut prompt = String::new();
    if let Some(instructions) = user_instructions {
        prompt.push_str(&format!(
            "The user gave you this guiding message:\n\
             <guidingMessage>\n{instructions}\n</guidingMessage>\n"
        ));
    }
    prompt.push_str(&format!(
        "\nHere is the existing text that the user wants to adjust:\n\
         <existingText>\n{existing_text}\n</existingText>\n\n\
         Consider the existing text, then rewrite it according to the instructions \
         for their travel itinerary. Only output the rewrite and nothing else."
    ));
    prompt
}
