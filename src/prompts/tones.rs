//! Built-in instruction block for each tone.

use super::kinds::Tone;

const KEEP_FACTS: &str = "Keep every name, date, place and itinerary detail exactly as given.";

/// Style line for a tone. The full block is assembled by [`builtin_block`].
fn style(tone: Tone) -> &'static str {
    use Tone::*;
    match tone {
        Sophisticated => "Rewrite the text with quiet, understated sophistication: a refined vocabulary, \
            measured phrasing and luxury implied rather than announced. Avoid stuffiness and piles of adjectives.",
        Friendly => "Rewrite the text in a warm, welcoming voice, like a trusted advisor who is genuinely \
            excited for the traveler. Stay conversational but professional.",
        Casual => "Rewrite the text in a relaxed, conversational voice, like advice from a well-traveled \
            friend over coffee. Keep it easy-going without getting sloppy.",
        Shakespeare => "Rewrite the text with a light Elizabethan flavor: a near-iambic cadence, the odd \
            \"thou\" or \"hath\" and playful wordplay, always readable to a modern traveler.",
        Victorian => "Rewrite the text in gently ornate Victorian prose, formal and warm, with graceful \
            transitions and genteel consideration for the reader.",
        JaneAusten => "Rewrite the text with Jane Austen's poise: ironic wit, social observation and \
            elegantly balanced sentences.",
        CharlesDickens => "Rewrite the text with Dickensian color: vivid characters, lively detail and a \
            warm sense of humanity.",
        Hemingway => "Rewrite the text in spare, direct sentences in the manner of Hemingway. Plain words. \
            No ornament.",
        Homer => "Rewrite the text as a Homeric epic would tell it: elevated narration, epithets and the \
            journey framed as a voyage.",
        Renaissance => "Rewrite the text as polished humanist prose from the Renaissance, curious and learned.",
        Medieval => "Rewrite the text in the dignified cadence of a medieval chronicle.",
        OldEnglish => "Rewrite the text with an accessible Old English flavor from before Shakespeare's time.",
        Transcendentalist => "Rewrite the text in a reflective, nature-centered transcendentalist voice.",
        BeatGeneration => "Rewrite the text as free-flowing, jazz-inflected Beat prose.",
        Flapper1920s => "Rewrite the text with the fizz and slang of a 1920s flapper at a Jazz Age party.",
        KingArthur => "Rewrite the text in the noble language of Arthurian legend, as a quest worthy of \
            the Round Table.",
        SherlockHolmes => "Rewrite the text with the crisp deductions and dry wit of Sherlock Holmes.",
        Yoda => "Rewrite the text in Yoda's inverted syntax, wise and brief.",
        Gandalf => "Rewrite the text in the lofty, kindly diction of Gandalf.",
        Gollum => "Rewrite the text in Gollum's hissing, fractured whisper.",
        TonyStark => "Rewrite the text with Tony Stark's confident, tech-savvy wit.",
        CaptainJackSparrow => "Rewrite the text with Captain Jack Sparrow's rakish, meandering charm.",
        StarfleetOfficer => "Rewrite the text as a Starfleet officer's duty log: professional and curious.",
        EightiesActionHero => "Rewrite the text as an 80s action hero would deliver it: high stakes and \
            one-liners.",
        MarieAntoinette => "Rewrite the text with Marie Antoinette's lavish, pampered delight.",
        QueenElizabethI => "Rewrite the text as a royal proclamation from Queen Elizabeth I.",
        WinstonChurchill => "Rewrite the text with Churchill's stirring oratory and resolve.",
        AlbertEinstein => "Rewrite the text with Einstein's curious, playful wonder at the universe.",
        GothicNovel => "Rewrite the text with the brooding atmosphere and elegant melancholy of a Gothic novel.",
        FairyTale => "Rewrite the text as a gentle, wonder-filled fairy tale.",
        Horror => "Rewrite the text with the eerie atmosphere of a classic horror story.",
        Thriller => "Rewrite the text with the pulse-quickening urgency of a spy thriller.",
        SciFi => "Rewrite the text as polished, future-facing science fiction.",
        Fantasy => "Rewrite the text as high-fantasy narration with a sense of mythic wonder.",
        Western => "Rewrite the text in a drawling frontier voice, all sagebrush and sunsets.",
        Mystery => "Rewrite the text with quiet intrigue, as though clues were unfolding.",
        Satire => "Rewrite the text as playful, tongue-in-cheek social satire.",
        Philosophical => "Rewrite the text as a calm, contemplative reflection in the spirit of classical \
            philosophy.",
        Romantic => "Rewrite the text in softly lyrical phrasing inspired by Romantic-era poetry.",
        Haiku => "Rewrite the text as a short sequence of imagistic, haiku-like lines.",
        Sarcastic => "Rewrite the text with dry, sardonic humor that pokes at the obvious.",
        Dramatic => "Rewrite the text with heightened theatrical flair, as if every moment were destiny.",
        Melancholic => "Rewrite the text with quiet wistfulness and reflective longing.",
        Optimistic => "Rewrite the text with unwavering positivity, treating every moment as a joy.",
        Apathetic => "Rewrite the text in a deliberately indifferent, almost bored voice.",
        Euphoric => "Rewrite the text with effusive, bubbling joy.",
        PassiveAggressive => "Rewrite the text with irritation thinly veiled as politeness.",
        MatterOfFact => "Rewrite the text in plain, objective prose without flourish.",
        Cynical => "Rewrite the text with world-weary skepticism.",
        NycTaxiDriver => "Rewrite the text as a fast-talking New York cab driver giving directions.",
        TravelBlogger => "Rewrite the text as an upbeat travel blogger sharing personal tips.",
        SportsCommentator => "Rewrite the text as an energetic play-by-play announcer.",
        FashionCritic => "Rewrite the text with the discerning flair of a runway critic.",
        SouthernGentleman => "Rewrite the text with gracious, honey-smooth Southern charm.",
        KindergartenTeacher => "Rewrite the text as a patient, encouraging kindergarten teacher would \
            explain it.",
        DrillSergeant => "Rewrite the text as barked orders from a drill sergeant.",
        StartupBro => "Rewrite the text as a startup founder pitching the trip, buzzwords and all.",
        Grandparent => "Rewrite the text as a doting grandparent sharing fond advice.",
        Librarian => "Rewrite the text as a precise, softly spoken librarian.",
        Streamer => "Rewrite the text as a live streamer hyping their chat.",
        Politician => "Rewrite the text as a campaign speech from a polished politician.",
        NewsAnchor => "Rewrite the text as a measured evening news report.",
        Youtuber => "Rewrite the text as an enthusiastic YouTuber's video intro.",
        Lawyer => "Rewrite the text with a lawyer's careful, qualified precision.",
        Doctor => "Rewrite the text with a doctor's calm, reassuring bedside manner.",
        SoftwareEngineer => "Rewrite the text as a software engineer would document it: structured and exact.",
        Professor => "Rewrite the text as an engaging lecture from a knowledgeable professor.",
        Chef => "Rewrite the text as a passionate chef describing a tasting menu.",
        AirlinePilot => "Rewrite the text as a calm cabin announcement from the flight deck.",
        RedditAmaAnswer => "Rewrite the text as a candid, slightly geeky answer in a Reddit AMA.",
        TwitterThread => "Rewrite the text as a concise, numbered Twitter thread.",
        LinkedinBragPost => "Rewrite the text as a humble-brag LinkedIn post.",
        AussieOutbackExplorer => "Rewrite the text with the laid-back spirit of an Australian outback explorer.",
        Pirate => "Rewrite the text in a hearty pirate brogue.",
        SurferDude => "Rewrite the text in relaxed surfer lingo.",
        SciFiAi => "Rewrite the text as a polite, precise and slightly synthetic starship AI.",
    }
}

/// Instruction block for `tone`.
pub fn builtin_block(tone: Tone) -> String {
    format!(
        "{}\n{KEEP_FACTS}\n\nONLY OUTPUT THE REWRITTEN TEXT.",
        style(tone)
    )
}
