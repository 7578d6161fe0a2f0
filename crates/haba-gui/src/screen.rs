pub mod preview;
pub mod tokens;

/// Which page is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Preview,
    Tokens,
}

/// Pixel value without a trailing `.0` for whole numbers.
pub fn format_px(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
