use std::sync::Arc;

use pretty_assertions::assert_eq;
use strum::IntoEnumIterator;

use penwright::prompts::{
    BaseTemplate, Function, OutputFormat, PromptCompiler, PromptLibrary, Tone,
};

#[test]
fn change_my_tone_html_orders_base_then_tone_then_markdown() {
    let compiler = PromptCompiler::default();
    let library = compiler.library();
    let compiled = compiler.compile_instructions(
        Function::ChangeMyTone,
        true,
        Some(Tone::Pirate),
        OutputFormat::Html,
    );

    let expected = [
        library.base(BaseTemplate::Rewrite),
        library.tone(Tone::Pirate).unwrap(),
        library.markdown(),
    ]
    .join("\n\n");
    assert_eq!(compiled, expected);
}

#[test]
fn text_output_has_no_markdown_block() {
    let compiler = PromptCompiler::default();
    let compiled =
        compiler.compile_instructions(Function::Shorten, true, None, OutputFormat::Text);
    assert_eq!(compiled, BaseTemplate::Shorten.text());
    assert!(!compiled.contains("<allowedMarkdownSyntax>"));
}

#[test]
fn html_output_appends_the_markdown_block() {
    let compiler = PromptCompiler::default();
    let compiled =
        compiler.compile_instructions(Function::Elaborate, true, None, OutputFormat::Html);
    assert!(compiled.starts_with(BaseTemplate::Elaborate.text()));
    assert!(compiled.ends_with(compiler.library().markdown()));
    assert!(compiled.contains("<importantInstruction>"));
}

#[test]
fn compilation_is_deterministic() {
    let compiler = PromptCompiler::default();
    for function in Function::iter() {
        for format in OutputFormat::iter() {
            let a = compiler.compile_instructions(function, true, Some(Tone::Yoda), format);
            let b = compiler.compile_instructions(function, true, Some(Tone::Yoda), format);
            assert_eq!(a, b);
        }
    }
    assert_eq!(
        compiler.compile_prompt(Function::Polish, Some("text"), Some("tighter")),
        compiler.compile_prompt(Function::Polish, Some("text"), Some("tighter"))
    );
}

#[test]
fn every_tone_has_a_builtin_block() {
    let library = PromptLibrary::builtin();
    for tone in Tone::iter() {
        let block = library.tone(tone).unwrap();
        assert!(block.ends_with("ONLY OUTPUT THE REWRITTEN TEXT."), "{tone}");
    }
}

#[test]
fn custom_tone_block_overrides_the_builtin() {
    let library = PromptLibrary::builtin().with_tone(Tone::Shakespeare, "Speak in iambs.");
    let compiler = PromptCompiler::new(Arc::new(library));
    let compiled = compiler.compile_instructions(
        Function::ChangeMyTone,
        true,
        Some(Tone::Shakespeare),
        OutputFormat::Text,
    );
    assert_eq!(
        compiled,
        format!("{}\n\nSpeak in iambs.", BaseTemplate::Rewrite.text())
    );
}

#[test]
fn generate_prompt_wraps_user_instructions() {
    let compiler = PromptCompiler::default();
    let prompt = compiler.compile_prompt(Function::Generate, None, Some("Three days in Lisbon"));
    assert!(prompt.contains("<guidingMessage>\nThree days in Lisbon\n</guidingMessage>"));
    assert!(!prompt.contains("<existingText>"));
}

#[test]
fn generate_over_existing_text_uses_the_rewrite_prompt() {
    let compiler = PromptCompiler::default();
    let prompt = compiler.compile_prompt(Function::Generate, Some("Day 1: arrive."), Some("add dinner"));
    assert!(prompt.contains("<existingText>\nDay 1: arrive.\n</existingText>"));
    assert!(prompt.contains("<guidingMessage>\nadd dinner\n</guidingMessage>"));
    assert!(prompt.find("<guidingMessage>") < prompt.find("<existingText>"));
}

#[test]
fn empty_existing_text_counts_as_absent() {
    let compiler = PromptCompiler::default();
    assert_eq!(
        compiler.compile_prompt(Function::Generate, Some(""), Some("beach week")),
        compiler.compile_prompt(Function::Generate, None, Some("beach week"))
    );
}

#[test]
fn rewrite_without_instructions_has_no_guiding_message() {
    let compiler = PromptCompiler::default();
    for function in [Function::Shorten, Function::Polish, Function::Elaborate, Function::ChangeMyTone] {
        let prompt = compiler.compile_prompt(function, Some("A calm stay."), None);
        assert!(!prompt.contains("<guidingMessage>"), "{function}");
        assert!(prompt.contains("<existingText>\nA calm stay.\n</existingText>"));
    }
}

#[test]
fn tone_wire_names() {
    let parsed: Vec<Tone> = serde_json::from_str(
        r#"["80s_action_hero", "flapper_1920s", "queen_elizabeth_i", "pirate", "sci_fi_ai"]"#,
    )
    .unwrap();
    assert_eq!(
        parsed,
        vec![
            Tone::EightiesActionHero,
            Tone::Flapper1920s,
            Tone::QueenElizabethI,
            Tone::Pirate,
            Tone::SciFiAi
        ]
    );
    assert!(serde_json::from_str::<Tone>(r#""gangster""#).is_err());
}
