//! # Password Strength
//!
//! The strength meter behind the registration form and the
//! password-change flow. Score runs 0–5 over length and the four
//! character classes, with a penalty for well-known weak patterns.
//!
//! The regex crate has no lookahead, so the four per-class rules are
//! explicit character scans here instead of one lookahead regex; the
//! payload schemas call [`meets_complexity`] from a refinement.

/// Special characters the platform accepts toward the complexity rule.
const SPECIAL_CHARS: &[char] = &['@', '$', '!', '%', '*', '?', '&'];

/// Substrings that immediately mark a password as weak.
const COMMON_PATTERNS: &[&str] = &["123456", "password", "qwerty", "abc123", "admin", "senha"];

/// Result of a strength evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordStrength {
    /// 0 (unusable) to 5 (all rules satisfied).
    pub score: u8,
    /// Portuguese guidance for each unmet rule.
    pub feedback: Vec<String>,
    /// True when the password meets the platform minimum (score >= 4).
    pub is_valid: bool,
}

/// Evaluate a candidate password.
pub fn password_strength(password: &str) -> PasswordStrength {
    let mut score: u8 = 0;
    let mut feedback = Vec::new();

    if password.chars().count() < 8 {
        feedback.push("Senha deve ter pelo menos 8 caracteres".to_string());
    } else {
        score += 1;
    }

    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        feedback.push("Adicione pelo menos uma letra minúscula".to_string());
    } else {
        score += 1;
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        feedback.push("Adicione pelo menos uma letra maiúscula".to_string());
    } else {
        score += 1;
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        feedback.push("Adicione pelo menos um número".to_string());
    } else {
        score += 1;
    }

    if !password.chars().any(|c| SPECIAL_CHARS.contains(&c)) {
        feedback.push("Adicione pelo menos um caractere especial (@$!%*?&)".to_string());
    } else {
        score += 1;
    }

    let lowered = password.to_lowercase();
    if COMMON_PATTERNS.iter().any(|p| lowered.contains(p)) {
        feedback.push("Evite padrões comuns como \"123456\" ou \"password\"".to_string());
        score = score.saturating_sub(1);
    }

    PasswordStrength {
        score,
        feedback,
        is_valid: score >= 4,
    }
}

/// True when the password has at least one lowercase letter, one
/// uppercase letter, one digit, and one accepted special character.
/// Length bounds are enforced by the schema, not here.
pub fn meets_complexity(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| SPECIAL_CHARS.contains(&c))
}
