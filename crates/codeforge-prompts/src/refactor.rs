use crate::{PromptContext, LANGUAGE_NOT_SUPPORTED};

/// Build the refactor prompt for `code` written in the free-form `language`.
pub fn prompt(language: &str, code: &str, ctx: &PromptContext) -> String {
    let mut prompt = String::new();
    prompt.push_str(&format!(
        "Refactor the following code written in {language}. \
         Focus on fixing errors, improving readability, and following common coding conventions for the language.\n\n"
    ));
    prompt.push_str(&format!("```\n{code}\n```\n\n"));
    prompt.push_str("Output:\n\n");
    prompt.push_str(
        "Provide *only* the corrected and refactored code. \
         Do *not* include any explanations, markdown formatting, headers, or any other extraneous text. \
         If there are errors in the original code, indicate them with inline comments in the corrected code, \
         following this format: `// Error: [Specific error message]`.\n\n",
    );
    prompt.push_str(&format!(
        "If the code is already correct and well-formatted, simply return the original code. \
         If the code cannot be parsed as valid {language}, return \"{LANGUAGE_NOT_SUPPORTED}\"\n"
    ));
    ctx.append_time_reference(&mut prompt);
    prompt
}
