//! Parse options and the option resolver.
//!
//! [`ParseOptions`] is the caller-facing, partially specified configuration.
//! Every key is optional when loaded from JSON or TOML; unspecified keys take
//! their defaults. [`ParseOptions::compile`] merges the options with the static
//! tag tables and produces the immutable [`ParserConfig`] the tokenizer and
//! tree builder read.
//!
//! Merge rules per key:
//! - `tags.void` replaces the default void set
//! - `tags.special` replaces the default special set, `tags.addSpecial` appends
//! - `attribute.affixList` replaces the default affixes, `attribute.addAffix` appends

/// Compiled configuration.
pub mod config;
/// Option loading errors.
pub mod error;

use serde::{Deserialize, Serialize};

pub use config::{AffixMatcher, AffixSegment, ParserConfig};
pub use error::OptionsError;

/// Caller-facing parse configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseOptions {
    /// Tag vocabularies.
    pub tags: TagOptions,
    /// Attribute name handling.
    pub attribute: AttributeOptions,
    /// Text transforms.
    pub transform: TransformOptions,
    /// Source position tracking.
    pub position: PositionOptions,
}

/// `tags.*` keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TagOptions {
    /// Replacement for the default void tag set.
    pub void: Option<Vec<String>>,
    /// Replacement for the default special (raw content) tag set.
    pub special: Option<Vec<String>>,
    /// Special tags appended to the (possibly replaced) special set.
    pub add_special: Vec<String>,
}

/// `attribute.*` keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AttributeOptions {
    /// Decompose attribute names into prefix, name and suffixes.
    pub affix: bool,
    /// Replacement for the default affix markers.
    pub affix_list: Option<Vec<String>>,
    /// Affix markers appended to the (possibly replaced) list.
    pub add_affix: Vec<String>,
}

impl Default for AttributeOptions {
    fn default() -> Self {
        Self {
            affix: true,
            affix_list: None,
            add_affix: Vec::new(),
        }
    }
}

/// `transform.*` keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransformOptions {
    /// Keep every text run verbatim. When false, whitespace-only runs are dropped.
    pub whitespace: bool,
    /// With `whitespace` off, trim the remaining text runs at both ends.
    pub trim: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            whitespace: true,
            trim: false,
        }
    }
}

/// `position.*` keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PositionOptions {
    /// Attach byte spans to nodes.
    pub index: bool,
    /// Attach line/column spans to nodes.
    pub loc: bool,
}

impl ParseOptions {
    /// Default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a (possibly partial) JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::Json`] if the text is not valid JSON or a key
    /// has a value of the wrong type.
    pub fn from_json(text: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load options from a (possibly partial) TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::Toml`] if the text is not valid TOML or a key
    /// has a value of the wrong type.
    pub fn from_toml(text: &str) -> Result<Self, OptionsError> {
        Ok(toml::from_str(text)?)
    }

    /// Replace the void tag set.
    #[must_use]
    pub fn with_void_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.void = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the special tag set.
    #[must_use]
    pub fn with_special_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.special = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Append to the special tag set.
    #[must_use]
    pub fn add_special_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.add_special.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Enable or disable affix decomposition of attribute names.
    #[must_use]
    pub const fn with_affix(mut self, enabled: bool) -> Self {
        self.attribute.affix = enabled;
        self
    }

    /// Replace the affix marker list.
    #[must_use]
    pub fn with_affix_list<I, S>(mut self, affixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attribute.affix_list = Some(affixes.into_iter().map(Into::into).collect());
        self
    }

    /// Append to the affix marker list.
    #[must_use]
    pub fn add_affixes<I, S>(mut self, affixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attribute.add_affix.extend(affixes.into_iter().map(Into::into));
        self
    }

    /// Keep (true) or drop (false) whitespace-only text runs.
    #[must_use]
    pub const fn with_whitespace(mut self, preserve: bool) -> Self {
        self.transform.whitespace = preserve;
        self
    }

    /// Trim text runs when whitespace is not preserved.
    #[must_use]
    pub const fn with_trim(mut self, trim: bool) -> Self {
        self.transform.trim = trim;
        self
    }

    /// Attach byte spans to nodes.
    #[must_use]
    pub const fn with_index(mut self, index: bool) -> Self {
        self.position.index = index;
        self
    }

    /// Attach line/column spans to nodes.
    #[must_use]
    pub const fn with_loc(mut self, loc: bool) -> Self {
        self.position.loc = loc;
        self
    }

    /// Merge with the static tables and build the immutable parser configuration.
    #[must_use]
    pub fn compile(&self) -> ParserConfig {
        ParserConfig::from_options(self)
    }
}
