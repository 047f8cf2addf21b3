use std::collections::HashSet;

use renit_common::WarningLog;

use super::ParseOptions;
use crate::tags::{DEFAULT_AFFIXES, SPECIAL_TAGS, VOID_TAGS};

/// Immutable configuration for one or more parses.
///
/// Built by [`ParseOptions::compile`]. Holds the merged tag vocabularies, the
/// affix matcher and the transform/position flags. Safe to share between
/// threads.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    void_tags: HashSet<String>,
    special_tags: HashSet<String>,
    affix: Option<AffixMatcher>,
    preserve_whitespace: bool,
    trim: bool,
    track_index: bool,
    track_loc: bool,
}

impl ParserConfig {
    pub(super) fn from_options(options: &ParseOptions) -> Self {
        let void_tags = match &options.tags.void {
            Some(tags) => tags.iter().cloned().collect(),
            None => VOID_TAGS.iter().map(|&tag| tag.to_string()).collect(),
        };

        let mut special_tags: HashSet<String> = match &options.tags.special {
            Some(tags) => tags.iter().cloned().collect(),
            None => SPECIAL_TAGS.iter().map(|&tag| tag.to_string()).collect(),
        };
        special_tags.extend(options.tags.add_special.iter().cloned());

        let affix = options.attribute.affix.then(|| {
            let base = options.attribute.affix_list.as_ref().map_or_else(
                || DEFAULT_AFFIXES.iter().map(|&a| a.to_string()).collect(),
                Clone::clone,
            );
            AffixMatcher::new(base.into_iter().chain(options.attribute.add_affix.iter().cloned()))
        });

        Self {
            void_tags,
            special_tags,
            affix,
            preserve_whitespace: options.transform.whitespace,
            trim: options.transform.trim,
            track_index: options.position.index,
            track_loc: options.position.loc,
        }
    }

    /// Whether `name` is a void tag.
    #[must_use]
    pub fn is_void(&self, name: &str) -> bool {
        self.void_tags.contains(name)
    }

    /// Whether `name` is a special (raw content) tag.
    #[must_use]
    pub fn is_special(&self, name: &str) -> bool {
        self.special_tags.contains(name)
    }

    /// The affix matcher, or `None` when affix decomposition is disabled.
    #[must_use]
    pub const fn affix(&self) -> Option<&AffixMatcher> {
        self.affix.as_ref()
    }

    /// Whether text runs are kept verbatim.
    #[must_use]
    pub const fn preserve_whitespace(&self) -> bool {
        self.preserve_whitespace
    }

    /// Whether text runs are trimmed (only when whitespace is not preserved).
    #[must_use]
    pub const fn trim(&self) -> bool {
        self.trim
    }

    /// Whether nodes get byte spans.
    #[must_use]
    pub const fn track_index(&self) -> bool {
        self.track_index
    }

    /// Whether nodes get line/column spans.
    #[must_use]
    pub const fn track_loc(&self) -> bool {
        self.track_loc
    }

    /// Apply the whitespace/trim policy to a text run.
    ///
    /// Returns `None` when the run must not produce a node.
    #[must_use]
    pub fn transform_text<'a>(&self, content: &'a str) -> Option<&'a str> {
        if self.preserve_whitespace {
            return (!content.is_empty()).then_some(content);
        }
        if content.chars().all(char::is_whitespace) {
            return None;
        }
        Some(if self.trim { content.trim() } else { content })
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParseOptions::default().compile()
    }
}

/// Recognizes affix markers inside attribute names.
///
/// Markers are matched longest first, so a multi-character marker wins over a
/// single-character one sharing its first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffixMatcher {
    affixes: Vec<String>,
}

/// One piece of a decomposed attribute name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffixSegment<'a> {
    /// The marker that introduced this segment, if any.
    pub prefix: Option<&'a str>,
    /// Text up to the next marker.
    pub name: &'a str,
}

impl AffixMatcher {
    /// Build a matcher from marker strings.
    ///
    /// Empty markers and markers containing alphanumerics, whitespace, quotes,
    /// `=`, `/` or angle brackets cannot delimit a name and are discarded.
    pub fn new<I>(affixes: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut warnings = WarningLog::new();
        let mut accepted: Vec<String> = Vec::new();
        for affix in affixes {
            if !Self::is_valid_marker(&affix) {
                let _ = warnings.warn_once("Options", &format!("ignoring invalid attribute affix {affix:?}"));
                continue;
            }
            if !accepted.contains(&affix) {
                accepted.push(affix);
            }
        }
        accepted.sort_by(|a, b| b.len().cmp(&a.len()));
        Self { affixes: accepted }
    }

    fn is_valid_marker(affix: &str) -> bool {
        !affix.is_empty()
            && affix.chars().all(|c| {
                !c.is_alphanumeric()
                    && !c.is_whitespace()
                    && !matches!(c, '"' | '\'' | '=' | '/' | '<' | '>')
            })
    }

    /// The markers, longest first.
    #[must_use]
    pub fn affixes(&self) -> &[String] {
        &self.affixes
    }

    /// The longest marker `text` starts with.
    #[must_use]
    pub fn match_at<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.affixes
            .iter()
            .find(|affix| text.starts_with(affix.as_str()))
            .map(|affix| &text[..affix.len()])
    }

    /// Whether any marker occurs anywhere in `name`.
    #[must_use]
    pub fn contains_affix(&self, name: &str) -> bool {
        name.char_indices()
            .any(|(i, _)| self.match_at(&name[i..]).is_some())
    }

    /// Split `name` at every marker.
    ///
    /// The first segment carries the leading marker (if the name starts with
    /// one); every later segment starts with a marker. A name without markers
    /// yields a single unprefixed segment.
    #[must_use]
    pub fn split<'t>(&self, name: &'t str) -> Vec<AffixSegment<'t>> {
        let mut segments = Vec::new();
        let mut pos = 0;
        while pos < name.len() {
            let prefix = self.match_at(&name[pos..]);
            let core_start = pos + prefix.map_or(0, str::len);
            let mut core_end = core_start;
            while let Some(c) = name[core_end..].chars().next() {
                if self.match_at(&name[core_end..]).is_some() {
                    break;
                }
                core_end += c.len_utf8();
            }
            segments.push(AffixSegment {
                prefix,
                name: &name[core_start..core_end],
            });
            pos = core_end;
        }
        segments
    }
}
