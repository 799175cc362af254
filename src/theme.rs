use ratatui::style::Color;
use serde::Deserialize;

pub fn hex_to_color(hex: &str) -> Color {
    let h = hex.trim_start_matches('#');
    if h.len() != 6 || !h.is_ascii() { return Color::Reset; }
    let r = u8::from_str_radix(&h[0..2], 16).unwrap_or(0);
    let g = u8::from_str_radix(&h[2..4], 16).unwrap_or(0);
    let b = u8::from_str_radix(&h[4..6], 16).unwrap_or(0);
    Color::Rgb(r, g, b)
}

/// Picker colours, `#rrggbb`. Any missing key keeps its default.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub bg:          String,
    pub popup_bg:    String,
    pub fg:          String,
    pub muted:       String,
    pub accent:      String,
    pub border:      String,
    pub weekend:     String,
    pub today_bg:    String,
    pub today_fg:    String,
    pub selected_bg: String,
    pub selected_fg: String,
}

impl Default for Theme {
    // Catppuccin Mocha
    fn default() -> Self {
        Self {
            bg:          "#1e1e2e".into(),
            popup_bg:    "#181825".into(),
            fg:          "#cdd6f4".into(),
            muted:       "#6c7086".into(),
            accent:      "#cba6f7".into(),
            border:      "#89b4fa".into(),
            weekend:     "#f38ba8".into(),
            today_bg:    "#45475a".into(),
            today_fg:    "#f9e2af".into(),
            selected_bg: "#cba6f7".into(),
            selected_fg: "#1e1e2e".into(),
        }
    }
}

impl Theme {
    pub fn bg(&self)       -> Color { hex_to_color(&self.bg) }
    pub fn popup_bg(&self) -> Color { hex_to_color(&self.popup_bg) }
    pub fn fg(&self)       -> Color { hex_to_color(&self.fg) }
    pub fn muted(&self)    -> Color { hex_to_color(&self.muted) }
    pub fn accent(&self)   -> Color { hex_to_color(&self.accent) }
    pub fn border(&self)   -> Color { hex_to_color(&self.border) }
    pub fn weekend(&self)  -> Color { hex_to_color(&self.weekend) }

    pub fn today_highlight(&self) -> (Color, Color) {
        (hex_to_color(&self.today_bg), hex_to_color(&self.today_fg))
    }
    pub fn selected_highlight(&self) -> (Color, Color) {
        (hex_to_color(&self.selected_bg), hex_to_color(&self.selected_fg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb_hex() {
        assert_eq!(hex_to_color("#cba6f7"), Color::Rgb(0xcb, 0xa6, 0xf7));
        assert_eq!(hex_to_color("1e1e2e"), Color::Rgb(0x1e, 0x1e, 0x2e));
    }

    #[test]
    fn bad_hex_resets() {
        assert_eq!(hex_to_color("#fff"), Color::Reset);
        assert_eq!(hex_to_color("aébcd"), Color::Reset);
    }
}
