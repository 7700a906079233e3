//! Vertical-rhythm sizing used by the inline style presets.

const BASELINE_REM: f64 = 1.75;
const SCALE_RATIO: f64 = 2.25;

#[derive(Clone, Debug, PartialEq)]
pub struct TypeStyle {
    pub font_size: String,
    pub line_height: String,
}

impl TypeStyle {
    pub fn css(&self) -> String {
        format!("font-size:{};line-height:{}", self.font_size, self.line_height)
    }
}

/// Spacing in whole or fractional baseline units.
pub fn rhythm(lines: f64) -> String {
    format!("{}rem", BASELINE_REM * lines)
}

/// Font sizing `steps` above or below the body copy on the modular scale.
pub fn scale(steps: f64) -> TypeStyle {
    let size = SCALE_RATIO.powf(steps);
    let line_height = if steps >= 0.0 { "1.1" } else { "1.625" };
    TypeStyle {
        font_size: format!("{}rem", size),
        line_height: line_height.to_string(),
    }
}
