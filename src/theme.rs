use crossterm::style::Color;

pub struct Theme {
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub number: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    primary: Color::Rgb {
        r: 137,
        g: 180,
        b: 250,
    },
    secondary: Color::Rgb {
        r: 250,
        g: 179,
        b: 135,
    },
    comment: Color::Rgb {
        r: 108,
        g: 112,
        b: 134,
    },
    number: Color::Rgb {
        r: 166,
        g: 227,
        b: 161,
    }, // Green, so values stand apart from addresses
};
