//! Local heuristic analysis used when no AI explanation is available.
//!
//! This is deliberately not a parser: every check is a substring or prefix
//! match against individual trimmed lines. Multi-line constructs and nested
//! definitions are invisible to it. It exists so a submission still gets a
//! useful answer when the remote call fails or no credential is configured.

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some code to analyze.";

pub const CREDENTIAL_HINT: &str =
    "*For a detailed AI explanation, set GEMINI_API_KEY in your environment or .env file.*";

const ANALYSIS_HEADER: &str = "**Code Analysis:**";

const FUNCTION_KEYWORD: &str = "def ";
const COMMENT_PREFIX: char = '#';
const ASSIGNMENT_TOKEN: &str = " = ";

/// How many detected functions are listed by name. Further functions only
/// contribute to the count.
const NAMED_FUNCTION_LIMIT: usize = 2;

/// Fixed checklist of structural patterns. Output order follows this list,
/// not the order the patterns appear in the snippet.
const STRUCTURAL_PATTERNS: &[(&str, &str)] = &[
    ("for ", "Contains `for` loops"),
    ("if ", "Uses conditional statements"),
    ("import ", "Imports external libraries"),
    ("print(", "Displays output"),
];

/// Produce a bullet-point structural summary of `code`. Never fails.
pub fn analyze(code: &str) -> String {
    let lines: Vec<&str> = code
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        return EMPTY_INPUT_MESSAGE.to_string();
    }

    let mut summary = format!("{ANALYSIS_HEADER}\n\n");

    let functions: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|line| line.starts_with(FUNCTION_KEYWORD))
        .collect();

    if !functions.is_empty() {
        summary.push_str(&format!("- **Functions defined:** {}\n", functions.len()));
        for line in functions.iter().take(NAMED_FUNCTION_LIMIT) {
            summary.push_str(&format!("  - `{}` function\n", function_name(line)));
        }
    }

    let variables = lines.iter().filter(|line| is_assignment_line(line)).count();
    if variables > 0 {
        summary.push_str(&format!("- **Variables used:** {variables}\n"));
    }

    for (pattern, description) in STRUCTURAL_PATTERNS {
        if lines.iter().any(|line| line.contains(pattern)) {
            summary.push_str(&format!("- **{description}**\n"));
        }
    }

    summary.push_str(&format!("\n{CREDENTIAL_HINT}"));
    summary
}

/// The name is whatever sits between the definition keyword and the first
/// opening parenthesis; a malformed line without parentheses yields the
/// whole remainder.
fn function_name(line: &str) -> &str {
    let rest = line.strip_prefix(FUNCTION_KEYWORD).unwrap_or(line);
    rest.split('(').next().unwrap_or(rest).trim()
}

fn is_assignment_line(line: &str) -> bool {
    line.contains(ASSIGNMENT_TOKEN)
        && !line.starts_with(COMMENT_PREFIX)
        && !line.starts_with(FUNCTION_KEYWORD)
}
