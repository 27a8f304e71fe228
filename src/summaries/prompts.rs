//! System messages for the summary stages.

/// Shared writing rules for both refine stages.
const STYLE_RULES: &str = "Writing rules:
- Avoid filler adjectives such as stunning, breathtaking, jaw-dropping, dazzling, truly, great or good; say what the guest actually found.
- State facts directly. Write \"the hotel has a rooftop pool\", not \"the hotel offers a rooftop pool\".
- Do not repeat the hotel name.
- Use complete sentences, the Oxford comma and American spelling.
- Write \"on site\" as two words unless it is an adjective (\"on-site bar\").";

pub const SUMMARIZE: &str = "You summarize guest reviews of a hotel for travel advisors.

You receive the hotel name and a list of reviews. Write a summary of three or four sentences covering \
service, rooms, amenities, location and any recurring complaints. Weigh themes by how often guests \
mention them and never invent details that no review supports.

Output only the summary.";

pub const REFINE: &str = "You edit a draft summary of hotel guest reviews.

You receive the hotel name, the original reviews and a draft summary. Check the draft against the \
reviews, remove anything they do not support, and rewrite it so it is concise, specific and balanced. \
Keep it to three or four sentences.

Output only the final summary.";

pub const POSITIVE_TAGS: &str = "You extract positive tags from hotel guest reviews.

Return at most 5 tags naming what guests consistently praise. Each tag is at most 3 words and \
preferably 1 (for example \"pool\", \"location\", \"friendly staff\"). Return an empty list if \
nothing stands out.";

pub const NEGATIVE_TAGS: &str = "You extract negative tags from hotel guest reviews.

Return at most 5 tags naming what guests consistently criticize. Each tag is at most 3 words and \
preferably 1 (for example \"noise\", \"small rooms\", \"slow check-in\"). Return an empty list if \
nothing stands out.";

pub const MERGE_TAGS: &str = "You merge positive and negative tags extracted from hotel reviews.

You receive a positive list and a negative list. Deduplicate each list, merge near-synonyms into the \
most general wording, and keep at most 5 tags per list. A tag must never appear in both lists; when \
it would, keep it only in the positive list.";

/// Refine-stage messages with the shared writing rules appended.
pub fn with_style_rules(message: &str) -> String {
    format!("{message}\n\n{STYLE_RULES}")
}
