use bevy_egui::egui::{self, Color32};
use bevy_egui::EguiContexts;

/// Colour tokens of the café look: cream paper, coffee accents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CafePalette {
    pub paper: Color32,
    pub milk: Color32,
    pub foam: Color32,
    pub crema: Color32,
    pub latte: Color32,
    pub coffee: Color32,
    pub espresso: Color32,
}

impl Default for CafePalette {
    fn default() -> Self {
        Self {
            paper: Color32::from_rgb(250, 244, 234),
            milk: Color32::from_rgb(255, 250, 243),
            foam: Color32::from_rgb(244, 236, 222),
            crema: Color32::from_rgb(236, 224, 206),
            latte: Color32::from_rgb(222, 200, 170),
            coffee: Color32::from_rgb(150, 95, 55),
            espresso: Color32::from_rgb(60, 40, 28),
        }
    }
}

impl CafePalette {
    /// Light visuals painted with this palette.
    pub fn visuals(&self) -> egui::Visuals {
        let mut visuals = egui::Visuals::light();
        visuals.override_text_color = Some(self.espresso);
        visuals.window_fill = self.paper;
        visuals.panel_fill = self.paper;
        visuals.extreme_bg_color = self.milk;
        visuals.faint_bg_color = self.foam;

        let widgets = &mut visuals.widgets;
        widgets.noninteractive.bg_fill = self.paper;
        for (state, fill) in [
            (&mut widgets.inactive, self.crema),
            (&mut widgets.hovered, self.latte),
            (&mut widgets.active, self.coffee),
        ] {
            state.bg_fill = fill;
            state.weak_bg_fill = fill;
        }

        // Active category tab
        visuals.selection.bg_fill = self.coffee;
        visuals.selection.stroke = egui::Stroke::new(1.0, Color32::WHITE);

        visuals.window_corner_radius = egui::CornerRadius::same(10);
        let widget_rounding = egui::CornerRadius::same(6);
        for state in [
            &mut visuals.widgets.noninteractive,
            &mut visuals.widgets.inactive,
            &mut visuals.widgets.hovered,
            &mut visuals.widgets.active,
        ] {
            state.corner_radius = widget_rounding;
        }
        visuals
    }
}

pub fn apply_cafe_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();
    style.visuals = CafePalette::default().visuals();
    style.spacing.button_padding = egui::vec2(10.0, 4.0);
    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_paints_panels_and_selection() {
        let palette = CafePalette::default();
        let visuals = palette.visuals();
        assert_eq!(visuals.panel_fill, palette.paper);
        assert_eq!(visuals.selection.bg_fill, palette.coffee);
        assert_eq!(visuals.widgets.hovered.weak_bg_fill, palette.latte);
        assert_eq!(visuals.override_text_color, Some(palette.espresso));
        assert!(!visuals.dark_mode);
    }
}
