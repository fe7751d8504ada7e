//! `{{ Name }}` slot parsing and substitution

use super::RenderError;
use std::fmt;

/// Every slot the asset templates may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    MainScript,
    BodyScript,
    MediaFiles,
    PlayOnlyOne,
    LoopFirstVideo,
    HaveTransitionVideo,
    TransitionVideo,
    HashKey,
}

/// Substitution pass a slot belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Scripts,
    Answers,
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pass::Scripts => write!(f, "script injection"),
            Pass::Answers => write!(f, "answer injection"),
        }
    }
}

impl Slot {
    pub const ALL: [Slot; 8] = [
        Slot::MainScript,
        Slot::BodyScript,
        Slot::MediaFiles,
        Slot::PlayOnlyOne,
        Slot::LoopFirstVideo,
        Slot::HaveTransitionVideo,
        Slot::TransitionVideo,
        Slot::HashKey,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Slot::MainScript => "MainScript",
            Slot::BodyScript => "BodyScript",
            Slot::MediaFiles => "MediaFiles",
            Slot::PlayOnlyOne => "PlayOnlyOne",
            Slot::LoopFirstVideo => "LoopFirstVideo",
            Slot::HaveTransitionVideo => "HaveTransitionVideo",
            Slot::TransitionVideo => "TransitionVideo",
            Slot::HashKey => "HashKey",
        }
    }

    pub fn from_name(name: &str) -> Option<Slot> {
        Slot::ALL.into_iter().find(|slot| slot.name() == name)
    }

    pub fn pass(&self) -> Pass {
        match self {
            Slot::MainScript | Slot::BodyScript => Pass::Scripts,
            _ => Pass::Answers,
        }
    }
}

/// What to do with a slot found in the text
pub enum Resolution<'a> {
    /// Replace the slot with this text
    Replace(&'a str),
    /// Leave the slot markup as it was
    Keep,
}

/// Replace every `{{ Name }}` in `text` using `resolve`.
///
/// Text outside slots is copied as-is and replacement text is never scanned
/// for further slots.
pub fn substitute<'a, F>(text: &str, pass: Pass, mut resolve: F) -> Result<String, RenderError>
where
    F: FnMut(Slot) -> Resolution<'a>,
{
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut offset = 0;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);

        let after_open = &rest[start + 2..];
        let end = after_open.find("}}").ok_or(RenderError::Unterminated {
            pass,
            offset: offset + start,
        })?;

        let raw = &after_open[..end];
        let name = raw.trim();
        if !is_identifier(name) {
            return Err(RenderError::MalformedSlot {
                pass,
                offset: offset + start,
                text: raw.to_string(),
            });
        }

        let slot = Slot::from_name(name).ok_or_else(|| RenderError::UnknownSlot {
            pass,
            name: name.to_string(),
        })?;

        match resolve(slot) {
            Resolution::Replace(value) => out.push_str(value),
            Resolution::Keep => out.push_str(&rest[start..start + 2 + end + 2]),
        }

        let consumed = start + 2 + end + 2;
        rest = &rest[consumed..];
        offset += consumed;
    }

    out.push_str(rest);
    Ok(out)
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
