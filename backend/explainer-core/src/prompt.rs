//! The fixed instruction template sent to the model.

/// Wrap a code snippet in the explanation instructions.
///
/// The snippet is embedded verbatim; the surrounding text asks for overall
/// behavior, per-function behavior, inputs and outputs, and the programming
/// concepts involved, pitched at a beginner audience.
pub fn explanation_prompt(code: &str) -> String {
    format!(
        "Explain this Python code in simple, clear English for beginner programmers:\n\
         {code}\n\
         Please provide a concise explanation that covers:\n\
         1. What the code does overall\n\
         2. How each function works (if any)\n\
         3. What the inputs and outputs are\n\
         4. Any important programming concepts demonstrated\n\
         Keep the explanation educational and easy to understand."
    )
}
