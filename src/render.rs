//! Terminal rendering of the fetched view models. Everything here returns a
//! `String` so tests can assert on the output without a terminal.

use chrono::{DateTime, Utc};

use crate::gamification::{compute_level_progress, rank_bucket};
use crate::icons::Icon;
use crate::models::dashboard_model::{
    ActiveDashboard, DashboardView, EmptyDashboard, Enrollment, TimeAgo,
};
use crate::models::homepage_model::{section_visible, HomepageContent, Section};
use crate::models::Lang;
use crate::streak::{derive_calendar_view, is_urgent};
use crate::themes::resolve_subject_theme;

/* returns the string for the requested language */
fn label<'a>(lang: Lang, uz: &'a str, ru: &'a str) -> &'a str {
    match lang {
        Lang::Uz => uz,
        Lang::Ru => ru,
    }
}

pub fn progress_bar(percent: f64, width: usize) -> String {
    let clamped = percent.clamp(0.0, 100.0);
    let filled = (clamped / 100.0 * width as f64).round() as usize;
    format!(
        "[{}{}] {:.0}%",
        "█".repeat(filled),
        "░".repeat(width - filled),
        clamped
    )
}

pub fn render_dashboard(view: &DashboardView, lang: Lang, now: DateTime<Utc>) -> String {
    match view {
        DashboardView::Active(active) => render_active(active, lang, now),
        DashboardView::Empty(empty) => render_empty(empty, lang),
    }
}

fn render_active(d: &ActiveDashboard, lang: Lang, now: DateTime<Utc>) -> String {
    let mut lines: Vec<String> = Vec::new();

    /* hero */
    lines.push(format!(
        "{}: {} {}",
        label(lang, "Seriya", "Серия"),
        d.hero.streak_count,
        label(lang, "kun", "дн.")
    ));
    if d.hero.is_danger || is_urgent(d.hero.hours_left) {
        lines.push(match lang {
            Lang::Uz => format!(
                "!!! Seriyani saqlash uchun {} soat qoldi",
                d.hero.hours_left
            ),
            Lang::Ru => format!(
                "!!! Чтобы сохранить серию, осталось {} ч.",
                d.hero.hours_left
            ),
        });
    }

    /* 7-day calendar */
    match derive_calendar_view(&d.calendar) {
        Ok(cells) => {
            let labels: Vec<&str> = cells.iter().map(|c| c.label.as_str()).collect();
            let glyphs: Vec<&str> = cells.iter().map(|c| c.icon.glyph()).collect();
            lines.push(labels.join("  "));
            lines.push(glyphs.join("  "));
        }
        Err(e) => lines.push(format!("({})", e)),
    }

    /* level: backend percent wins, local formula is the fallback */
    let percent = d.level.progress_percent.unwrap_or_else(|| {
        compute_level_progress(d.level.current, d.level.xp_current).percent
    });
    lines.push(format!(
        "{} {}  {}  {} XP · {}",
        label(lang, "Daraja", "Уровень"),
        d.level.current,
        progress_bar(percent, 10),
        d.level.xp_current,
        rank_bucket(d.level.xp_current)
    ));

    /* daily mission */
    let done = if d.mission.is_completed { " ✓" } else { "" };
    lines.push(format!(
        "{} {}: {} (+{} XP){}",
        Icon::resolve(d.mission.icon.as_deref().unwrap_or("star")).glyph(),
        label(lang, "Kunlik vazifa", "Задание дня"),
        d.mission.title,
        d.mission.xp_reward,
        done
    ));

    /* telegram */
    if d.telegram.linked {
        let username = d.telegram.username.as_deref().unwrap_or("-");
        lines.push(format!(
            "Telegram: {} ({})",
            label(lang, "ulangan", "подключён"),
            username
        ));
    } else {
        lines.push(format!(
            "Telegram: {}",
            label(lang, "ulanmagan", "не подключён")
        ));
    }

    /* subject stats */
    if !d.subject_stats.is_empty() {
        lines.push(format!("== {} ==", label(lang, "Fanlar", "Предметы")));
        for stat in &d.subject_stats {
            let theme = resolve_subject_theme(Some(&stat.subject));
            lines.push(format!(
                "{} {}: {}/{} · {} XP",
                theme.icon.glyph(),
                stat.subject,
                stat.completed_lessons,
                stat.total_lessons,
                stat.xp_earned
            ));
        }
    }

    /* enrolled courses */
    if !d.enrolled_courses.is_empty() {
        lines.push(format!("== {} ==", label(lang, "Kurslarim", "Мои курсы")));
        for enrollment in &d.enrolled_courses {
            lines.push(render_enrollment(enrollment, lang, now));
        }
    }

    /* profession roadmap */
    if let Some(profession) = &d.active_profession {
        lines.push(format!(
            "== {}: {} ({:.0}%) ==",
            label(lang, "Kasb yo'li", "Профессия"),
            profession.name,
            profession.progress
        ));
        let continue_id = profession.continue_step().map(|step| step.id);
        for step in &profession.steps {
            let marker = if step.is_completed { "[x]" } else { "[ ]" };
            let pointer = if continue_id == Some(step.id) { "→ " } else { "  " };
            lines.push(format!("{}{} {} ({})", pointer, marker, step.title, step.step_type));
        }
    }

    lines.join("\n")
}

pub fn render_enrollment(enrollment: &Enrollment, lang: Lang, now: DateTime<Utc>) -> String {
    format!(
        "{}  {}  {}/{} XP · {}",
        enrollment.course.title,
        progress_bar(enrollment.progress, 10),
        enrollment.xp_earned,
        enrollment.total_xp_available,
        age_label(enrollment.age_bucket(now), lang)
    )
}

fn age_label(bucket: TimeAgo, lang: Lang) -> String {
    match bucket {
        TimeAgo::Today => label(lang, "bugun", "сегодня").to_string(),
        TimeAgo::Yesterday => label(lang, "kecha", "вчера").to_string(),
        TimeAgo::Days(n) => match lang {
            Lang::Uz => format!("{} kun oldin", n),
            Lang::Ru => format!("{} дн. назад", n),
        },
        TimeAgo::Weeks(n) => match lang {
            Lang::Uz => format!("{} hafta oldin", n),
            Lang::Ru => format!("{} нед. назад", n),
        },
    }
}

fn render_empty(d: &EmptyDashboard, lang: Lang) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(
        label(
            lang,
            "Hali faol kursingiz yo'q. Boshlash uchun kurs tanlang!",
            "У вас пока нет активных курсов. Выберите курс, чтобы начать!",
        )
        .to_string(),
    );

    if !d.recommended_courses.is_empty() {
        lines.push(format!(
            "== {} ==",
            label(lang, "Tavsiya etilgan kurslar", "Рекомендуемые курсы")
        ));
        for course in &d.recommended_courses {
            let theme = resolve_subject_theme(course.subject.as_deref());
            lines.push(format!("{} {}", theme.icon.glyph(), course.title));
        }
    }

    if !d.featured_subjects.is_empty() {
        lines.push(format!("== {} ==", label(lang, "Fanlar", "Предметы")));
        for subject in &d.featured_subjects {
            let theme = resolve_subject_theme(Some(subject));
            lines.push(format!("{} {}", theme.icon.glyph(), subject));
        }
    }

    if !d.featured_professions.is_empty() {
        lines.push(format!("== {} ==", label(lang, "Kasblar", "Профессии")));
        for profession in &d.featured_professions {
            lines.push(format!("· {}", profession.name));
        }
    }

    lines.join("\n")
}

pub fn render_courses(enrollments: &[Enrollment], lang: Lang, now: DateTime<Utc>) -> String {
    if enrollments.is_empty() {
        return label(lang, "Kurslar topilmadi", "Курсы не найдены").to_string();
    }
    enrollments
        .iter()
        .map(|enrollment| render_enrollment(enrollment, lang, now))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_homepage(content: &HomepageContent, lang: Lang) -> String {
    let mut lines: Vec<String> = Vec::new();
    let config = content.config.as_ref();

    if let Some(config) = config {
        if let Some(title) = config.hero_title(lang) {
            lines.push(title.to_string());
        }
        if let Some(subtitle) = config.hero_subtitle(lang) {
            lines.push(subtitle.to_string());
        }
    }

    for section in Section::ALL {
        if !section_visible(config, section) {
            continue;
        }
        if section == Section::Cta {
            let cta = config
                .and_then(|c| c.cta_text(lang))
                .unwrap_or(label(lang, "Bepul boshlash", "Начать бесплатно"));
            lines.push(format!(">> {}", cta));
        } else {
            lines.push(format!("[{}]", section_name(section, lang)));
        }
    }

    for banner in content.banners.iter().filter(|b| b.is_active) {
        lines.push(format!("banner: {}", banner.image_url));
    }

    lines.join("\n")
}

fn section_name(section: Section, lang: Lang) -> &'static str {
    match section {
        Section::Stats => label(lang, "Statistika", "Статистика"),
        Section::Winners => label(lang, "G'oliblar", "Победители"),
        Section::Olympiads => label(lang, "Olimpiadalar", "Олимпиады"),
        Section::Courses => label(lang, "Kurslar", "Курсы"),
        Section::Professions => label(lang, "Kasblar", "Профессии"),
        Section::Testimonials => label(lang, "Fikrlar", "Отзывы"),
        Section::Mentors => label(lang, "Mentorlar", "Менторы"),
        Section::Cta => "CTA",
    }
}
