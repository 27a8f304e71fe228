//! Request vocabulary: function kinds, output formats and tones.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// What the caller wants done with the text.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Function {
    Generate,
    Shorten,
    Elaborate,
    Polish,
    ChangeMyTone,
}

impl Function {
    /// Every function except `generate` rewrites existing text.
    pub fn is_rewrite(self) -> bool {
        self != Function::Generate
    }
}

/// Output syntax the downstream renderer accepts.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
}

/// Named writing styles for `change_my_tone`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Tone {
    Sophisticated,
    Friendly,
    Casual,
    Shakespeare,
    Victorian,
    JaneAusten,
    CharlesDickens,
    Hemingway,
    Homer,
    Renaissance,
    Medieval,
    OldEnglish,
    Transcendentalist,
    BeatGeneration,
    #[serde(rename = "flapper_1920s")]
    #[strum(serialize = "flapper_1920s")]
    Flapper1920s,
    KingArthur,
    SherlockHolmes,
    Yoda,
    Gandalf,
    Gollum,
    TonyStark,
    CaptainJackSparrow,
    StarfleetOfficer,
    #[serde(rename = "80s_action_hero")]
    #[strum(serialize = "80s_action_hero")]
    EightiesActionHero,
    MarieAntoinette,
    #[serde(rename = "queen_elizabeth_i")]
    #[strum(serialize = "queen_elizabeth_i")]
    QueenElizabethI,
    WinstonChurchill,
    AlbertEinstein,
    GothicNovel,
    FairyTale,
    Horror,
    Thriller,
    SciFi,
    Fantasy,
    Western,
    Mystery,
    Satire,
    Philosophical,
    Romantic,
    Haiku,
    Sarcastic,
    Dramatic,
    Melancholic,
    Optimistic,
    Apathetic,
    Euphoric,
    PassiveAggressive,
    MatterOfFact,
    Cynical,
    NycTaxiDriver,
    TravelBlogger,
    SportsCommentator,
    FashionCritic,
    SouthernGentleman,
    KindergartenTeacher,
    DrillSergeant,
    StartupBro,
    Grandparent,
    Librarian,
    Streamer,
    Politician,
    NewsAnchor,
    Youtuber,
    Lawyer,
    Doctor,
    SoftwareEngineer,
    Professor,
    Chef,
    AirlinePilot,
    RedditAmaAnswer,
    TwitterThread,
    LinkedinBragPost,
    AussieOutbackExplorer,
    Pirate,
    SurferDude,
    SciFiAi,
}
