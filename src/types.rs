//! Common types used throughout gcli
//!
//! Search option enums shared by the CLI, the configuration and the
//! request builder, plus a few small utilities.

// ============================================================================
// Type Aliases
// ============================================================================

/// Zero-based index of the first result on a page
pub type PageOffset = u32;

// ============================================================================
// Safe Search
// ============================================================================

/// Safe-search level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SafeSearch {
    Active,
    High,
    Medium,
    #[default]
    Off,
}

impl SafeSearch {
    /// Value of the `safe` query parameter.
    ///
    /// The service only knows `active` and `off`; the legacy `high` and
    /// `medium` levels are treated as `active`.
    pub fn as_param(self) -> &'static str {
        match self {
            SafeSearch::Active | SafeSearch::High | SafeSearch::Medium => "active",
            SafeSearch::Off => "off",
        }
    }
}

// ============================================================================
// Image Filters
// ============================================================================

/// Kind of image to return
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ImageType {
    Clipart,
    Face,
    Lineart,
    News,
    Photo,
}

impl ImageType {
    pub fn as_param(self) -> &'static str {
        match self {
            ImageType::Clipart => "clipart",
            ImageType::Face => "face",
            ImageType::Lineart => "lineart",
            ImageType::News => "news",
            ImageType::Photo => "photo",
        }
    }
}

/// Image size bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ImageSize {
    Huge,
    Icon,
    Large,
    Medium,
    Small,
    Xlarge,
    Xxlarge,
}

impl ImageSize {
    pub fn as_param(self) -> &'static str {
        match self {
            ImageSize::Huge => "huge",
            ImageSize::Icon => "icon",
            ImageSize::Large => "large",
            ImageSize::Medium => "medium",
            ImageSize::Small => "small",
            ImageSize::Xlarge => "xlarge",
            ImageSize::Xxlarge => "xxlarge",
        }
    }
}

/// Dominant image color
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ImageColor {
    Black,
    Blue,
    Brown,
    Gray,
    Green,
    Orange,
    Pink,
    Purple,
    Red,
    Teal,
    White,
    Yellow,
}

impl ImageColor {
    pub fn as_param(self) -> &'static str {
        match self {
            ImageColor::Black => "black",
            ImageColor::Blue => "blue",
            ImageColor::Brown => "brown",
            ImageColor::Gray => "gray",
            ImageColor::Green => "green",
            ImageColor::Orange => "orange",
            ImageColor::Pink => "pink",
            ImageColor::Purple => "purple",
            ImageColor::Red => "red",
            ImageColor::Teal => "teal",
            ImageColor::White => "white",
            ImageColor::Yellow => "yellow",
        }
    }
}

/// Image color scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ImageScale {
    Color,
    Gray,
    Mono,
}

impl ImageScale {
    pub fn as_param(self) -> &'static str {
        match self {
            ImageScale::Color => "color",
            ImageScale::Gray => "gray",
            ImageScale::Mono => "mono",
        }
    }
}

// ============================================================================
// File Type
// ============================================================================

/// File type restriction
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FileType {
    Bmp,
    Gif,
    Png,
    Jpg,
    Svg,
    Pdf,
}

impl FileType {
    pub fn as_param(self) -> &'static str {
        match self {
            FileType::Bmp => "bmp",
            FileType::Gif => "gif",
            FileType::Png => "png",
            FileType::Jpg => "jpg",
            FileType::Svg => "svg",
            FileType::Pdf => "pdf",
        }
    }
}

// ============================================================================
// Line Format
// ============================================================================

/// How result lines are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LineFormat {
    /// Space-separated plain text
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for Option<String> to handle empty strings
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.is_empty())
    }
}

impl OptionStringExt for String {
    fn none_if_empty(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_search_default() {
        assert_eq!(SafeSearch::default(), SafeSearch::Off);
    }

    #[test]
    fn test_safe_search_param() {
        assert_eq!(SafeSearch::Off.as_param(), "off");
        assert_eq!(SafeSearch::Active.as_param(), "active");
        assert_eq!(SafeSearch::High.as_param(), "active");
        assert_eq!(SafeSearch::Medium.as_param(), "active");
    }

    #[test]
    fn test_option_names_parse() {
        use clap::ValueEnum;

        assert_eq!(ImageType::from_str("lineart", false), Ok(ImageType::Lineart));
        assert_eq!(ImageColor::from_str("PINK", true), Ok(ImageColor::Pink));
        assert_eq!(LineFormat::from_str("json", false), Ok(LineFormat::Json));
        assert!(SafeSearch::from_str("strict", false).is_err());
    }

    #[test]
    fn test_params_match_value_names() {
        use clap::ValueEnum;

        for ty in FileType::value_variants() {
            let name = ty.to_possible_value().unwrap();
            assert_eq!(name.get_name(), ty.as_param());
        }
        for size in ImageSize::value_variants() {
            let name = size.to_possible_value().unwrap();
            assert_eq!(name.get_name(), size.as_param());
        }
    }

    #[test]
    fn test_option_string_none_if_empty() {
        assert_eq!(
            Some("test".to_string()).none_if_empty(),
            Some("test".to_string())
        );
        assert_eq!(Some(String::new()).none_if_empty(), None);
        assert_eq!(None::<String>.none_if_empty(), None);
        assert_eq!("test".to_string().none_if_empty(), Some("test".to_string()));
        assert_eq!(String::new().none_if_empty(), None);
    }
}
