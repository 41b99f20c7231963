use crate::render::{glyphs, layout};
use crate::{EmptyTextHint, PngfyError, MAX_CANVAS_HEIGHT, MAX_CANVAS_WIDTH};

const DISPLAY_CAP: usize = 60;
const DISPLAY_SEPARATOR: &str = "..";

/// Runs the full text validation pipeline and returns the text that may be
/// committed to the store.
///
/// The steps run in a fixed order: reject empty input, validate and apply the
/// replacement text, reject replacement-induced emptiness, reject unsupported
/// characters, then check the canvas dimensions the text would need under the
/// current spacings. Nothing is committed unless every step passes.
pub fn validate_text(
    desired: &str,
    replacement: Option<&str>,
    horizontal_spacing: u32,
    vertical_spacing: u32,
) -> Result<String, PngfyError> {
    if desired.is_empty() {
        let hint = match replacement {
            Some("") => EmptyTextHint::BothEmpty,
            _ => EmptyTextHint::TextEmpty,
        };
        return Err(PngfyError::EmptyText { hint });
    }

    let text = match replacement {
        Some(replacement) => {
            let unsupported = unsupported_characters(replacement);
            if !unsupported.is_empty() {
                return Err(PngfyError::InvalidReplacementText {
                    characters: enumerate_characters(&unsupported),
                });
            }
            replace_unsupported(desired, replacement)
        },
        None => desired.to_owned(),
    };

    if text.is_empty() {
        return Err(PngfyError::EmptyText { hint: EmptyTextHint::ReplacementProducedEmpty });
    }

    let unsupported = unsupported_characters(&text);
    if !unsupported.is_empty() {
        return Err(PngfyError::InvalidCharacter { characters: enumerate_characters(&unsupported) });
    }

    if layout::canvas_width(&text, horizontal_spacing) > MAX_CANVAS_WIDTH {
        let line = layout::longest_line(&text);
        return Err(PngfyError::TextLineTooLong { line: cap_for_display(line) });
    }

    if layout::canvas_height(&text, vertical_spacing) > MAX_CANVAS_HEIGHT {
        return Err(PngfyError::TooManyTextLines { text: cap_for_display(&text) });
    }

    Ok(text)
}

/// Distinct unsupported characters in order of first appearance.
fn unsupported_characters(text: &str) -> Vec<char> {
    let mut found = Vec::new();
    for character in text.chars() {
        if !glyphs::is_supported(character) && !found.contains(&character) {
            found.push(character);
        }
    }
    found
}

/// Substitutes the whole replacement text at every unsupported position.
fn replace_unsupported(text: &str, replacement: &str) -> String {
    let mut replaced = String::with_capacity(text.len());
    for character in text.chars() {
        if glyphs::is_supported(character) {
            replaced.push(character);
        } else {
            replaced.push_str(replacement);
        }
    }
    replaced
}

/// Joins quoted characters as `'x', 'y' and 'z'` for error messages.
fn enumerate_characters(characters: &[char]) -> String {
    let quoted: Vec<String> = characters.iter().map(|character| format!("{character:?}")).collect();
    match quoted.split_last() {
        None => String::new(),
        Some((only, [])) => only.clone(),
        Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
    }
}

/// Keeps overlong text presentable in error messages by cutting out the
/// middle: the first and last ~29 characters joined by `..`.
fn cap_for_display(text: &str) -> String {
    let characters: Vec<char> = text.chars().collect();
    if characters.len() <= DISPLAY_CAP {
        return text.to_owned();
    }

    let half = (DISPLAY_CAP - DISPLAY_SEPARATOR.len()) / 2;
    let head: String = characters[..half].iter().collect();
    let tail: String = characters[characters.len() - half..].iter().collect();
    format!("{head}{DISPLAY_SEPARATOR}{tail}")
}
