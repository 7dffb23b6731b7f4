use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Lazy-initialized static variables
pub static DEFAULT_INPUT_PATH: LazyLock<PathBuf> = LazyLock::new(|| define_path!("test.txt"));

pub static DEFAULT_OUTPUT_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("analysis_result.png"));

/// WHATWG label for the Korean legacy code page (CP949 / Unified Hangul Code).
pub const DEFAULT_ENCODING_LABEL: &str = "windows-949";

/// Preferred font family for chart glyphs; must cover Hangul.
pub const DEFAULT_FONT_FAMILY: &str = "Malgun Gothic";

/// Used when the preferred font family cannot be resolved on the host.
pub const FALLBACK_FONT_FAMILY: &str = "sans-serif";

pub const DEFAULT_TOP_N: usize = 5;

// Figure is 15 x 6 units at 100 px per unit
pub const DEFAULT_CHART_SIZE: (u32, u32) = (1500, 600);

pub const CHART_CAPTION: &str = "Character frequency analysis result";
pub const CHART_X_DESC: &str = "character";
pub const CHART_Y_DESC: &str = "frequency";

/// Characters stripped in addition to whitespace.
pub const STRIPPED_CHARS: &[char] = &['.'];
