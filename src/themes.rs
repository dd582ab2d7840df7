//! Subject names are free text entered by the content team, so the visual
//! theme is picked by substring matching against a fixed keyword table.

use crate::icons::Icon;

#[derive(Debug, PartialEq, Eq)]
pub struct SubjectTheme {
    pub name: &'static str,
    pub background: &'static str,
    pub light_variant: &'static str,
    pub text_color: &'static str,
    pub icon: Icon,
    pub fallback_image_url: &'static str,
}

pub static MATH: SubjectTheme = SubjectTheme {
    name: "math",
    background: "#4f46e5",
    light_variant: "#eef2ff",
    text_color: "#ffffff",
    icon: Icon::Calculator,
    fallback_image_url: "https://cdn.bilim.uz/subjects/math.png",
};

pub static PHYSICS: SubjectTheme = SubjectTheme {
    name: "physics",
    background: "#0ea5e9",
    light_variant: "#e0f2fe",
    text_color: "#ffffff",
    icon: Icon::Atom,
    fallback_image_url: "https://cdn.bilim.uz/subjects/physics.png",
};

pub static INFORMATICS: SubjectTheme = SubjectTheme {
    name: "informatics",
    background: "#10b981",
    light_variant: "#ecfdf5",
    text_color: "#ffffff",
    icon: Icon::Laptop,
    fallback_image_url: "https://cdn.bilim.uz/subjects/informatics.png",
};

pub static ENGLISH: SubjectTheme = SubjectTheme {
    name: "english",
    background: "#f59e0b",
    light_variant: "#fffbeb",
    text_color: "#1f2937",
    icon: Icon::Globe,
    fallback_image_url: "https://cdn.bilim.uz/subjects/english.png",
};

pub static CHEMISTRY: SubjectTheme = SubjectTheme {
    name: "chemistry",
    background: "#ef4444",
    light_variant: "#fef2f2",
    text_color: "#ffffff",
    icon: Icon::Flask,
    fallback_image_url: "https://cdn.bilim.uz/subjects/chemistry.png",
};

pub static BIOLOGY: SubjectTheme = SubjectTheme {
    name: "biology",
    background: "#22c55e",
    light_variant: "#f0fdf4",
    text_color: "#ffffff",
    icon: Icon::Leaf,
    fallback_image_url: "https://cdn.bilim.uz/subjects/biology.png",
};

pub static LOGIC: SubjectTheme = SubjectTheme {
    name: "logic",
    background: "#a855f7",
    light_variant: "#faf5ff",
    text_color: "#ffffff",
    icon: Icon::Puzzle,
    fallback_image_url: "https://cdn.bilim.uz/subjects/logic.png",
};

pub static DEFAULT: SubjectTheme = SubjectTheme {
    name: "default",
    background: "#64748b",
    light_variant: "#f1f5f9",
    text_color: "#ffffff",
    icon: Icon::Book,
    fallback_image_url: "https://cdn.bilim.uz/subjects/default.png",
};

/* groups are checked in order, first match wins */
static KEYWORD_GROUPS: [(&[&str], &SubjectTheme); 7] = [
    (&["matematika", "matem", "математик", "math"], &MATH),
    (&["fizika", "физик", "physics"], &PHYSICS),
    (
        &["informatika", "информатик", "dasturlash", "программирован", "informatics"],
        &INFORMATICS,
    ),
    (&["ingliz", "англий", "english"], &ENGLISH),
    (&["kimyo", "хими", "chemistry"], &CHEMISTRY),
    (&["biologiya", "биолог", "biology"], &BIOLOGY),
    (&["mantiq", "логик", "logic"], &LOGIC),
];

/// Resolves a free-text subject name to its theme. Never fails: empty, absent
/// and unmatched names get the default slate theme.
pub fn resolve_subject_theme(subject: Option<&str>) -> &'static SubjectTheme {
    let Some(subject) = subject else {
        return &DEFAULT;
    };
    let lowered = subject.to_lowercase();
    for (keywords, theme) in KEYWORD_GROUPS.iter() {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            return theme;
        }
    }
    &DEFAULT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uzbek_and_russian_names_match() {
        assert_eq!(resolve_subject_theme(Some("Matematika fani")), &MATH);
        assert_eq!(resolve_subject_theme(Some("Оргкимё")).name, "default");
        assert_eq!(resolve_subject_theme(Some("Органическая химия")), &CHEMISTRY);
        assert_eq!(resolve_subject_theme(Some("Ingliz tili B2")), &ENGLISH);
        assert_eq!(resolve_subject_theme(Some("FIZIKA")), &PHYSICS);
    }

    #[test]
    fn absent_and_unknown_get_the_slate_theme() {
        assert_eq!(resolve_subject_theme(None), &DEFAULT);
        assert_eq!(resolve_subject_theme(Some("")), &DEFAULT);
        assert_eq!(resolve_subject_theme(Some("Tarix")), &DEFAULT);
        assert_eq!(resolve_subject_theme(Some("日本語")), &DEFAULT);
    }

    #[test]
    fn first_matching_group_wins() {
        // Contains both a math and a logic keyword; math is checked first.
        assert_eq!(
            resolve_subject_theme(Some("Matematik mantiq")),
            &MATH
        );
    }
}
