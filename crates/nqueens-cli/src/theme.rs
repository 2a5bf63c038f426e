use crossterm::style::Color;

/// Color theme for console output
#[derive(Debug, Clone)]
pub struct Theme {
    /// Default text color
    pub fg: Color,
    /// Section headings
    pub title: Color,
    /// Light squares
    pub light_square: Color,
    /// Dark squares
    pub dark_square: Color,
    /// Queen glyph
    pub queen: Color,
    /// Solution details and highlights
    pub highlight: Color,
    /// Error text
    pub error: Color,
    /// Finished progress bar and success text
    pub success: Color,
    /// Secondary text
    pub info: Color,
    /// Key binding text color
    pub key: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            title: Color::Rgb { r: 80, g: 180, b: 255 },
            light_square: Color::Rgb { r: 60, g: 64, b: 80 },
            dark_square: Color::Rgb { r: 35, g: 40, b: 55 },
            queen: Color::Rgb { r: 255, g: 255, b: 255 },
            highlight: Color::Rgb { r: 255, g: 210, b: 100 },
            error: Color::Rgb { r: 255, g: 90, b: 90 },
            success: Color::Rgb { r: 90, g: 255, b: 130 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
        }
    }

    /// Plain ANSI colors for terminals without true color
    pub fn basic() -> Self {
        Self {
            fg: Color::White,
            title: Color::Blue,
            light_square: Color::Grey,
            dark_square: Color::DarkGrey,
            queen: Color::Black,
            highlight: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            info: Color::Grey,
            key: Color::Yellow,
        }
    }

    /// Pick a theme from `COLORTERM`.
    pub fn detect() -> Self {
        match std::env::var("COLORTERM") {
            Ok(value) if value == "truecolor" || value == "24bit" => Self::dark(),
            _ => Self::basic(),
        }
    }

    pub fn square(&self, column: usize, row: usize) -> Color {
        if (column + row) % 2 == 0 {
            self.dark_square
        } else {
            self.light_square
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squares_alternate() {
        let theme = Theme::dark();
        assert_eq!(theme.square(0, 0), theme.dark_square);
        assert_eq!(theme.square(1, 0), theme.light_square);
        assert_eq!(theme.square(1, 1), theme.dark_square);
    }
}
