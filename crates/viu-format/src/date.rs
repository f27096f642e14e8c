//! Date, relative-time, and duration formatting in Brazilian
//! conventions.

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Formats a datetime with a token pattern. Recognized tokens: `DD`,
/// `MM`, `YYYY`, `HH`, `mm`, `ss`; anything else passes through. The
/// platform default is `DD/MM/YYYY`.
pub fn format_date(date: DateTime<Utc>, pattern: &str) -> String {
    pattern
        .replacen("DD", &format!("{:02}", date.day()), 1)
        .replacen("MM", &format!("{:02}", date.month()), 1)
        .replacen("YYYY", &date.year().to_string(), 1)
        .replacen("HH", &format!("{:02}", date.hour()), 1)
        .replacen("mm", &format!("{:02}", date.minute()), 1)
        .replacen("ss", &format!("{:02}", date.second()), 1)
}

fn plural(n: i64, singular: &str, plural: &str) -> String {
    if n > 1 {
        format!("há {n} {plural}")
    } else {
        format!("há {n} {singular}")
    }
}

/// Renders how long ago `date` was, relative to `now`, in pt-BR
/// phrasing ("agora mesmo", "há 2 horas", "ontem"). Future dates are
/// treated as "agora mesmo".
pub fn format_relative(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - date).num_seconds();
    if secs < 60 {
        return "agora mesmo".to_string();
    }
    let minutes = secs / 60;
    if minutes < 60 {
        return plural(minutes, "minuto", "minutos");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return plural(hours, "hora", "horas");
    }
    let days = hours / 24;
    if days == 1 {
        return "ontem".to_string();
    }
    if days < 7 {
        return format!("há {days} dias");
    }
    if days < 30 {
        return plural(days / 7, "semana", "semanas");
    }
    if days < 365 {
        return plural(days / 30, "mês", "meses");
    }
    plural(days / 365, "ano", "anos")
}

/// Renders a duration in seconds as `2h 30m 15s`, omitting zero parts.
pub fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        return format!("{seconds}s");
    }

    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let rest = seconds % 60;

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes}m"));
    }
    if rest > 0 {
        parts.push(format!("{rest}s"));
    }
    parts.join(" ")
}
