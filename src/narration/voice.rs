//! Speech voice descriptors and the selection heuristic.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Voice Scoring
=============

Platforms expose a grab-bag of voices with inconsistent naming. We want a
clear, warm voice that players get used to, so every candidate gets a score
from its name and the best one wins.

  base                 0
  male keyword       -1000   effectively excludes the voice
  female keyword      +200
  quality vendor       +50   engines that tend to sound natural
  female AND quality  +100   on top of the two above
  runs locally         +10   no network round-trip before speaking

Only voices whose language tag starts with the target prefix compete.
The highest score wins; ties go to the voice the platform listed first.

Matching works on whole name tokens after lower-casing and folding
accents, so "Mónica" matches "monica" and "female" never matches "male".
*/

const MALE_KEYWORDS: &[&str] = &[
    "male", "man", "hombre", "masculino", "jorge", "diego", "carlos", "enrique", "pablo", "juan",
    "raul", "alvaro", "miguel", "andres",
];

const FEMALE_KEYWORDS: &[&str] = &[
    "female", "woman", "mujer", "femenino", "monica", "paulina", "helena", "laura", "lucia",
    "elvira", "sabina", "marisol", "conchita", "penelope", "lupe", "paloma", "elena", "dalia",
];

const QUALITY_KEYWORDS: &[&str] = &[
    "google", "microsoft", "apple", "amazon", "neural", "natural", "premium", "enhanced",
];

pub const MALE_PENALTY: i32 = -1000;
pub const FEMALE_BONUS: i32 = 200;
pub const QUALITY_BONUS: i32 = 50;
pub const FEMALE_QUALITY_BONUS: i32 = 100;
pub const LOCAL_BONUS: i32 = 10;

/// A speech voice offered by the platform.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    pub name: String,
    /// BCP-47 style tag, e.g. `es-ES`.
    pub language: String,
    /// Synthesized on this machine rather than by a remote service.
    pub local: bool,
    /// Extra descriptor some platforms attach ("enhanced", "premium").
    pub quality_hint: Option<String>,
}

impl Voice {
    pub fn new(name: &str, language: &str) -> Self {
        Self {
            name: name.to_string(),
            language: language.to_string(),
            local: false,
            quality_hint: None,
        }
    }

    pub fn local(mut self) -> Self {
        self.local = true;
        self
    }

    pub fn with_quality_hint(mut self, hint: &str) -> Self {
        self.quality_hint = Some(hint.to_string());
        self
    }

    /// True when the language tag starts with `prefix` (case-insensitive).
    pub fn speaks(&self, prefix: &str) -> bool {
        self.language
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    }
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'ä' | 'â' => 'a',
        'é' | 'è' | 'ë' | 'ê' => 'e',
        'í' | 'ì' | 'ï' | 'î' => 'i',
        'ó' | 'ò' | 'ö' | 'ô' => 'o',
        'ú' | 'ù' | 'ü' | 'û' => 'u',
        'ñ' => 'n',
        other => other,
    }
}

fn tokens(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(|token| token.chars().flat_map(char::to_lowercase).map(fold_accent).collect())
        .collect()
}

fn matches_any(tokens: &[String], keywords: &[&str]) -> bool {
    tokens.iter().any(|token| keywords.contains(&token.as_str()))
}

/// Selection score for one voice.
pub fn score(voice: &Voice) -> i32 {
    let mut name_tokens = tokens(&voice.name);
    let male = matches_any(&name_tokens, MALE_KEYWORDS);
    let female = matches_any(&name_tokens, FEMALE_KEYWORDS);

    if let Some(hint) = &voice.quality_hint {
        name_tokens.extend(tokens(hint));
    }
    let quality = matches_any(&name_tokens, QUALITY_KEYWORDS);

    let mut total = 0;
    if male {
        total += MALE_PENALTY;
    }
    if female {
        total += FEMALE_BONUS;
    }
    if quality {
        total += QUALITY_BONUS;
    }
    if female && quality {
        total += FEMALE_QUALITY_BONUS;
    }
    if voice.local {
        total += LOCAL_BONUS;
    }
    total
}

/// Best voice for `language_prefix`, or `None` to use the platform default.
pub fn select<'a>(candidates: &'a [Voice], language_prefix: &str) -> Option<&'a Voice> {
    let mut best: Option<(&Voice, i32)> = None;

    for voice in candidates.iter().filter(|v| v.speaks(language_prefix)) {
        let s = score(voice);
        // Strictly greater keeps the earliest voice on ties.
        if best.map_or(true, |(_, top)| s > top) {
            best = Some((voice, s));
        }
    }

    best.map(|(voice, _)| voice)
}
