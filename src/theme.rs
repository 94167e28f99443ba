pub mod catppuccin {
    use nu_ansi_term::Color;
    pub struct Mocha;
    impl Mocha {
        pub const SURFACE2: Color = Color::Rgb(108, 112, 134); // Subtle dim

        // Accents
        pub const RED: Color = Color::Rgb(243, 139, 168);
        pub const YELLOW: Color = Color::Rgb(249, 226, 175);
        pub const PEACH: Color = Color::Rgb(250, 179, 135);
    }
}

use nu_ansi_term::Style;

/// Styles for diagnostics on stderr.
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticStyle {
    pub error: Style,
    pub warning: Style,
    pub caret: Style,
    pub gutter: Style,
}

impl DiagnosticStyle {
    pub fn mocha() -> Self {
        use catppuccin::Mocha as P;
        Self {
            error: Style::new().fg(P::RED).bold(),
            warning: Style::new().fg(P::YELLOW).bold(),
            caret: Style::new().fg(P::PEACH).bold(),
            gutter: Style::new().fg(P::SURFACE2),
        }
    }

    /// No escapes at all, for pipes and files.
    pub fn plain() -> Self {
        Self {
            error: Style::new(),
            warning: Style::new(),
            caret: Style::new(),
            gutter: Style::new(),
        }
    }

    pub fn for_terminal(is_terminal: bool) -> Self {
        if is_terminal { Self::mocha() } else { Self::plain() }
    }
}
