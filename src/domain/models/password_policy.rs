use std::fmt;

/// Minimum number of characters a password must have
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Characters accepted by the special-character rule
pub const SPECIAL_CHARACTERS: &[char] = &['!', '@', '#', '$', '%', '^', '&', '*'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRuleId {
    MinLength,
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl PasswordRuleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MinLength => "min-length",
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::Digit => "digit",
            Self::Special => "special",
        }
    }
}

/// One independent predicate over the password string
pub struct PasswordRule {
    id: PasswordRuleId,
    label: &'static str,
    predicate: fn(&str) -> bool,
}

impl PasswordRule {
    pub fn id(&self) -> PasswordRuleId {
        self.id
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn is_satisfied_by(&self, password: &str) -> bool {
        (self.predicate)(password)
    }
}

impl fmt::Debug for PasswordRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordRule")
            .field("id", &self.id)
            .field("label", &self.label)
            .finish()
    }
}

fn has_min_length(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}

fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

fn has_special(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARACTERS.contains(&c))
}

/// Fixed rule set, in display order.
pub static PASSWORD_RULES: [PasswordRule; 5] = [
    PasswordRule {
        id: PasswordRuleId::MinLength,
        label: "Minimum 8 characters",
        predicate: has_min_length,
    },
    PasswordRule {
        id: PasswordRuleId::Uppercase,
        label: "At least 1 uppercase letter",
        predicate: has_uppercase,
    },
    PasswordRule {
        id: PasswordRuleId::Lowercase,
        label: "At least 1 lowercase letter",
        predicate: has_lowercase,
    },
    PasswordRule {
        id: PasswordRuleId::Digit,
        label: "At least 1 number",
        predicate: has_digit,
    },
    PasswordRule {
        id: PasswordRuleId::Special,
        label: "At least 1 special character (!@#$%^&*)",
        predicate: has_special,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct RuleEvaluation {
    rule: &'static PasswordRule,
    satisfied: bool,
}

impl RuleEvaluation {
    pub fn rule(&self) -> &'static PasswordRule {
        self.rule
    }

    pub fn satisfied(&self) -> bool {
        self.satisfied
    }
}

impl fmt::Display for RuleEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.satisfied { "✔️" } else { "⚪" };
        write!(f, "{} {}", mark, self.rule.label)
    }
}

/// Result of checking a password against every rule
#[derive(Debug, Clone)]
pub struct PasswordEvaluation {
    evaluations: Vec<RuleEvaluation>,
}

impl PasswordEvaluation {
    pub fn evaluations(&self) -> &[RuleEvaluation] {
        &self.evaluations
    }

    pub fn is_valid(&self) -> bool {
        self.evaluations.iter().all(RuleEvaluation::satisfied)
    }

    pub fn unsatisfied(&self) -> impl Iterator<Item = PasswordRuleId> + '_ {
        self.evaluations
            .iter()
            .filter(|e| !e.satisfied)
            .map(|e| e.rule.id)
    }
}

/// Evaluate every rule against `password`. Never fails; an empty password
/// simply leaves every rule unsatisfied.
pub fn evaluate(password: &str) -> PasswordEvaluation {
    let evaluations = PASSWORD_RULES
        .iter()
        .map(|rule| RuleEvaluation {
            rule,
            satisfied: rule.is_satisfied_by(password),
        })
        .collect();

    PasswordEvaluation { evaluations }
}
