//! Built-in background presets and CSS rendering for the desktop background.

use desktop_app_contract::BackgroundKind;

use crate::model::{BackgroundState, DEFAULT_BACKGROUND_IMAGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A named, pickable background.
pub struct BackgroundPreset {
    pub name: &'static str,
    pub value: &'static str,
    pub kind: BackgroundKind,
}

impl BackgroundPreset {
    const fn new(name: &'static str, value: &'static str, kind: BackgroundKind) -> Self {
        Self { name, value, kind }
    }

    pub fn to_state(self) -> BackgroundState {
        BackgroundState::new(self.value, self.kind)
    }
}

/// Featured wallpapers shown first in the background picker.
pub const WALLPAPERS: [BackgroundPreset; 6] = [
    BackgroundPreset::new("Default", DEFAULT_BACKGROUND_IMAGE, BackgroundKind::Image),
    BackgroundPreset::new(
        "Neon City",
        "/assets/wallpapers/neon-city.jpg",
        BackgroundKind::Image,
    ),
    BackgroundPreset::new(
        "Mountain Vista",
        "/assets/wallpapers/mountain.jpg",
        BackgroundKind::Image,
    ),
    BackgroundPreset::new(
        "Mountain Sunset",
        "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
        BackgroundKind::Gradient,
    ),
    BackgroundPreset::new(
        "Ocean Blue",
        "linear-gradient(135deg, #74b9ff 0%, #0984e3 100%)",
        BackgroundKind::Gradient,
    ),
    BackgroundPreset::new(
        "Forest Green",
        "linear-gradient(135deg, #55a3ff 0%, #003d82 100%)",
        BackgroundKind::Gradient,
    ),
];

pub const SOLID_COLORS: [&str; 8] = [
    "#1a1a1a", "#2d3748", "#1a202c", "#2a4365", "#553c9a", "#6b46c1", "#7c2d12", "#92400e",
];

pub const GRADIENTS: [&str; 6] = [
    "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
    "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)",
    "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)",
    "linear-gradient(135deg, #43e97b 0%, #38f9d7 100%)",
    "linear-gradient(135deg, #fa709a 0%, #fee140 100%)",
    "linear-gradient(135deg, #a8edea 0%, #fed6e3 100%)",
];

/// Every preset the picker offers: wallpapers, then solid colors, then gradients.
pub fn background_presets() -> Vec<BackgroundPreset> {
    let mut presets = WALLPAPERS.to_vec();
    presets.extend(
        SOLID_COLORS
            .iter()
            .map(|value| BackgroundPreset::new(value, value, BackgroundKind::Color)),
    );
    presets.extend(
        GRADIENTS
            .iter()
            .map(|value| BackgroundPreset::new(value, value, BackgroundKind::Gradient)),
    );
    presets
}

/// CSS `background` shorthand for the desktop surface.
pub fn css_background(background: &BackgroundState) -> String {
    match background.kind {
        BackgroundKind::Image => format!(
            "url(\"{}\") center / cover no-repeat",
            background.value.replace('"', "%22")
        ),
        BackgroundKind::Color | BackgroundKind::Gradient => background.value.clone(),
    }
}

/// Inline swatch style for a preset tile.
pub fn preset_swatch_style(preset: &BackgroundPreset) -> String {
    format!("background: {};", css_background(&preset.to_state()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn preset_kinds_match_inferred_kinds() {
        for preset in background_presets() {
            assert_eq!(BackgroundKind::infer(preset.value), preset.kind, "{}", preset.name);
        }
    }

    #[test]
    fn picker_lists_every_color_and_gradient() {
        let presets = background_presets();
        assert_eq!(presets.len(), WALLPAPERS.len() + 8 + 6);
        assert_eq!(
            presets
                .iter()
                .filter(|p| p.kind == BackgroundKind::Color)
                .count(),
            8
        );
    }

    #[test]
    fn css_background_wraps_images_only() {
        assert_eq!(
            css_background(&BackgroundState::default()),
            "url(\"/assets/wallpapers/default.jpg\") center / cover no-repeat"
        );
        assert_eq!(
            css_background(&BackgroundState::new("#2d3748", BackgroundKind::Color)),
            "#2d3748"
        );
        assert_eq!(
            css_background(&BackgroundState::new(GRADIENTS[2], BackgroundKind::Gradient)),
            GRADIENTS[2]
        );
    }

    #[test]
    fn image_urls_cannot_break_out_of_quotes() {
        let css = css_background(&BackgroundState::new(
            "a\"); color: red",
            BackgroundKind::Image,
        ));
        assert_eq!(css, "url(\"a%22); color: red\") center / cover no-repeat");
    }
}
