//! Compile-time icon registry. The backend and the CMS reference icons by
//! free-form string identifiers; everything unknown resolves to the plain
//! circle instead of failing.

/// Every icon the dashboard and homepage can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Flame,
    GrayDot,
    DashedCircle,
    Calculator,
    Atom,
    Laptop,
    Globe,
    Flask,
    Leaf,
    Puzzle,
    Book,
    Trophy,
    Star,
    Rocket,
    Telegram,
    Circle,
}

impl Icon {
    /// Maps a string identifier to an icon. Total: unknown, empty and
    /// mixed-case input all land on [`Icon::Circle`].
    pub fn resolve(name: &str) -> Icon {
        match name.trim().to_lowercase().as_str() {
            "flame" | "fire" | "streak" => Icon::Flame,
            "calculator" | "math" => Icon::Calculator,
            "atom" | "physics" => Icon::Atom,
            "laptop" | "code" | "informatics" => Icon::Laptop,
            "globe" | "language" | "english" => Icon::Globe,
            "flask" | "chemistry" => Icon::Flask,
            "leaf" | "biology" => Icon::Leaf,
            "puzzle" | "logic" => Icon::Puzzle,
            "book" | "course" => Icon::Book,
            "trophy" | "olympiad" | "winner" => Icon::Trophy,
            "star" | "xp" => Icon::Star,
            "rocket" | "profession" => Icon::Rocket,
            "telegram" | "bot" => Icon::Telegram,
            _ => Icon::Circle,
        }
    }

    /// Terminal rendering of the icon.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Flame => "🔥",
            Icon::GrayDot => "●",
            Icon::DashedCircle => "◌",
            Icon::Calculator => "🧮",
            Icon::Atom => "⚛",
            Icon::Laptop => "💻",
            Icon::Globe => "🌍",
            Icon::Flask => "⚗",
            Icon::Leaf => "🌿",
            Icon::Puzzle => "🧩",
            Icon::Book => "📖",
            Icon::Trophy => "🏆",
            Icon::Star => "⭐",
            Icon::Rocket => "🚀",
            Icon::Telegram => "✈",
            Icon::Circle => "○",
        }
    }
}
