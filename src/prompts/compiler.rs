//! Prompt library and compiler.

use std::collections::HashMap;
use std::sync::Arc;

use strum::IntoEnumIterator;

use super::kinds::{Function, OutputFormat, Tone};
use super::templates::{self, BaseTemplate};
use super::tones;

/// Static text resources: base templates, tone blocks and the markdown block.
///
/// Tone blocks are looked up by key. A tone with no block contributes
/// nothing to the compiled instructions.
#[derive(Debug, Clone, Default)]
pub struct PromptLibrary {
    tones: HashMap<Tone, String>,
}

impl PromptLibrary {
    /// Library with a block for every [`Tone`].
    pub fn builtin() -> Self {
        Self {
            tones: Tone::iter().map(|t| (t, tones::builtin_block(t))).collect(),
        }
    }

    /// Library with no tone blocks at all.
    pub fn without_tones() -> Self {
        Self::default()
    }

    /// Replace (or add) the block for one tone.
    pub fn with_tone(mut self, tone: Tone, block: impl Into<String>) -> Self {
        self.tones.insert(tone, block.into());
        self
    }

    pub fn base(&self, template: BaseTemplate) -> &'static str {
        template.text()
    }

    pub fn tone(&self, tone: Tone) -> Option<&str> {
        self.tones.get(&tone).map(String::as_str)
    }

    pub fn markdown(&self) -> &'static str {
        templates::MARKDOWN
    }
}

/// Builds the instruction string and the user prompt for a content request.
///
/// Pure: identical inputs always produce identical output.
#[derive(Debug, Clone)]
pub struct PromptCompiler {
    library: Arc<PromptLibrary>,
}

impl Default for PromptCompiler {
    fn default() -> Self {
        Self::new(Arc::new(PromptLibrary::builtin()))
    }
}

impl PromptCompiler {
    pub fn new(library: Arc<PromptLibrary>) -> Self {
        Self { library }
    }

    pub fn library(&self) -> &PromptLibrary {
        &self.library
    }

    /// Base template for a function. `generate` over existing text and
    /// `change_my_tone` both use the rewrite template.
    pub fn base_template(function: Function, has_existing_text: bool) -> BaseTemplate {
        match function {
            Function::Generate if has_existing_text => BaseTemplate::Rewrite,
            Function::Generate => BaseTemplate::Generate,
            Function::ChangeMyTone => BaseTemplate::Rewrite,
            Function::Elaborate => BaseTemplate::Elaborate,
            Function::Polish => BaseTemplate::Polish,
            Function::Shorten => BaseTemplate::Shorten,
        }
    }

    /// Instruction blocks joined by a blank line, in the order
    /// base, tone (change_my_tone only), markdown (html only).
    pub fn compile_instructions(
        &self,
        function: Function,
        has_existing_text: bool,
        tone: Option<Tone>,
        output_format: OutputFormat,
    ) -> String {
        let mut blocks: Vec<&str> = vec![self
            .library
            .base(Self::base_template(function, has_existing_text))];

        if function == Function::ChangeMyTone {
            if let Some(block) = tone.and_then(|t| self.library.tone(t)) {
                blocks.push(block);
            }
        }

        if output_format == OutputFormat::Html {
            blocks.push(self.library.markdown());
        }

        blocks.join("\n\n")
    }

    /// User prompt: a from-scratch prompt for `generate` without existing
    /// text, otherwise a rewrite prompt around the existing text.
    pub fn compile_prompt(
        &self,
        function: Function,
        existing_text: Option<&str>,
        user_instructions: Option<&str>,
    ) -> String {
        let existing_text = existing_text.filter(|t| !t.is_empty());
        let user_instructions = user_instructions.filter(|t| !t.is_empty());
        match (function, existing_text) {
            (Function::Generate, None) => {
                templates::generate_prompt(user_instructions.unwrap_or_default())
            }
            (_, existing) => {
                templates::rewrite_prompt(existing.unwrap_or_default(), user_instructions)
            }
        }
    }
}
