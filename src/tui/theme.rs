use ratatui::style::Color;

use rutherford_scholarship::eligibility::AwardTier;

pub struct Theme {
    pub primary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
    pub foreground: Color,
    pub highlight: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            muted: Color::DarkGray,
            foreground: Color::White,
            highlight: Color::DarkGray,
        }
    }
}

impl Theme {
    /// Row colour for a verdict; `None` is a name missing from the store.
    pub fn tier_color(&self, tier: Option<AwardTier>) -> Color {
        match tier {
            Some(AwardTier::Top) => self.success,
            Some(AwardTier::Reduced) => self.warning,
            Some(AwardTier::None) => self.error,
            None => self.muted,
        }
    }
}
