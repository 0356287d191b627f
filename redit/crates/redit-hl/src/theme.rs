//! Colour theme and the category to style mapping.
//!
//! A [`Theme`] is the configured form: six `#rrggbb` strings, one per
//! [`StyleSlot`]. Resolving it yields a [`Palette`] of parsed [`Rgb`]
//! values, which is what the highlighter consults for every token.

use std::fmt;

use redit_lex::Category;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// A 24-bit colour
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Create a colour from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` string (hex digits in either case)
    ///
    /// ```
    /// use redit_hl::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#FF8000"), Some(Rgb::new(255, 128, 0)));
    /// assert_eq!(Rgb::from_hex("ff8000"), None);
    /// assert_eq!(Rgb::from_hex("#fff"), None);
    /// ```
    pub fn from_hex(value: &str) -> Option<Self> {
        let digits = value.strip_prefix('#')?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// One of the six configurable colour slots
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleSlot {
    /// Plain text, operators and ordinary names
    Normal,
    /// Quoted strings
    String,
    /// Numeric literals
    Number,
    /// Reserved words
    Keyword,
    /// Comments
    Comment,
    /// Backtick-quoted names and variadic references
    Identifier,
}

impl StyleSlot {
    /// Every slot, in palette order.
    pub const ALL: [StyleSlot; 6] = [
        StyleSlot::Normal,
        StyleSlot::String,
        StyleSlot::Number,
        StyleSlot::Keyword,
        StyleSlot::Comment,
        StyleSlot::Identifier,
    ];

    /// The slot that colours tokens of `category`
    ///
    /// ```
    /// use redit_hl::StyleSlot;
    /// use redit_lex::Category;
    ///
    /// assert_eq!(StyleSlot::for_category(Category::SingleQuotedString), StyleSlot::String);
    /// assert_eq!(StyleSlot::for_category(Category::Variable), StyleSlot::Identifier);
    /// assert_eq!(StyleSlot::for_category(Category::Word), StyleSlot::Normal);
    /// ```
    pub const fn for_category(category: Category) -> Self {
        match category {
            Category::DoubleQuotedString | Category::SingleQuotedString => StyleSlot::String,
            Category::Numeric => StyleSlot::Number,
            Category::ReservedWord => StyleSlot::Keyword,
            Category::Comment => StyleSlot::Comment,
            Category::BacktickQuotedIdentifier | Category::Variable => StyleSlot::Identifier,
            Category::Whitespace | Category::Word | Category::Other => StyleSlot::Normal,
        }
    }

    /// Configuration key of this slot
    pub const fn name(self) -> &'static str {
        match self {
            StyleSlot::Normal => "normal",
            StyleSlot::String => "string",
            StyleSlot::Number => "number",
            StyleSlot::Keyword => "keyword",
            StyleSlot::Comment => "comment",
            StyleSlot::Identifier => "identifier",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for StyleSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configured colours, one `#rrggbb` string per slot
///
/// Missing keys take the default colour for that slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Theme {
    /// Plain text colour.
    #[serde(default = "default_normal")]
    pub normal: String,

    /// String literal colour.
    #[serde(default = "default_string")]
    pub string: String,

    /// Numeric literal colour.
    #[serde(default = "default_number")]
    pub number: String,

    /// Reserved word colour.
    #[serde(default = "default_keyword")]
    pub keyword: String,

    /// Comment colour.
    #[serde(default = "default_comment")]
    pub comment: String,

    /// Quoted name and variadic reference colour.
    #[serde(default = "default_identifier")]
    pub identifier: String,
}

fn default_normal() -> String {
    "#000000".to_string()
}

fn default_string() -> String {
    "#a31515".to_string()
}

fn default_number() -> String {
    "#098658".to_string()
}

fn default_keyword() -> String {
    "#0000ff".to_string()
}

fn default_comment() -> String {
    "#008000".to_string()
}

fn default_identifier() -> String {
    "#001080".to_string()
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            normal: default_normal(),
            string: default_string(),
            number: default_number(),
            keyword: default_keyword(),
            comment: default_comment(),
            identifier: default_identifier(),
        }
    }
}

impl Theme {
    /// The configured string for `slot`
    pub fn get(&self, slot: StyleSlot) -> &str {
        match slot {
            StyleSlot::Normal => &self.normal,
            StyleSlot::String => &self.string,
            StyleSlot::Number => &self.number,
            StyleSlot::Keyword => &self.keyword,
            StyleSlot::Comment => &self.comment,
            StyleSlot::Identifier => &self.identifier,
        }
    }

    /// Parse every slot into a [`Palette`]
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidColor`] for the first slot whose value is not
    /// `#rrggbb`.
    pub fn resolve(&self) -> ConfigResult<Palette> {
        let mut colors = [Rgb::default(); 6];
        for slot in StyleSlot::ALL {
            let value = self.get(slot);
            colors[slot.index()] = Rgb::from_hex(value).ok_or_else(|| ConfigError::InvalidColor {
                slot,
                value: value.to_string(),
            })?;
        }
        Ok(Palette { colors })
    }
}

/// Resolved colours, indexed by [`StyleSlot`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Palette {
    colors: [Rgb; 6],
}

impl Palette {
    /// Colour of `slot`
    #[inline]
    pub fn color(&self, slot: StyleSlot) -> Rgb {
        self.colors[slot.index()]
    }

    /// Colour used for tokens of `category`
    #[inline]
    pub fn for_category(&self, category: Category) -> Rgb {
        self.color(StyleSlot::for_category(category))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: [
                Rgb::new(0x00, 0x00, 0x00),
                Rgb::new(0xa3, 0x15, 0x15),
                Rgb::new(0x09, 0x86, 0x58),
                Rgb::new(0x00, 0x00, 0xff),
                Rgb::new(0x00, 0x80, 0x00),
                Rgb::new(0x00, 0x10, 0x80),
            ],
        }
    }
}
