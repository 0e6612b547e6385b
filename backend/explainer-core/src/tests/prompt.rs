// Unit tests for the instruction template

use crate::prompt::explanation_prompt;

/// **VALUE**: The snippet must land in the prompt verbatim - the model
/// explains exactly what the user pasted, indentation included.
#[test]
fn given_snippet_when_prompt_built_then_code_is_embedded_verbatim() {
    let code = "def add(a, b):\n    return a + b";

    let prompt = explanation_prompt(code);

    assert!(prompt.contains(code));
}

#[test]
fn given_any_snippet_when_prompt_built_then_names_all_coverage_areas() {
    let prompt = explanation_prompt("x = 1");

    assert!(prompt.contains("What the code does overall"));
    assert!(prompt.contains("How each function works"));
    assert!(prompt.contains("inputs and outputs"));
    assert!(prompt.contains("programming concepts"));
    assert!(prompt.contains("beginner"));
}
