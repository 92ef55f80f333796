use crate::PromptContext;

/// Build the code-generation prompt.
///
/// `language` is free-form: any name the model understands is accepted.
pub fn prompt(language: &str, problem_description: &str, ctx: &PromptContext) -> String {
    let mut prompt = String::new();
    prompt.push_str(&format!(
        "Generate code in {language} that solves the following problem:\n\n"
    ));
    prompt.push_str(problem_description);
    prompt.push_str("\n\nOutput:\n\n");
    prompt.push_str(&format!(
        "Provide *only* one complete, runnable code solution. \
         Do *not* include any explanations, markdown formatting, headers, or any other extraneous text. \
         Include concise inline comments within the code to explain the logic and important steps. \
         The code must produce some visible output (e.g., by printing to the console). \
         If the problem cannot be solved in {language}, return \"{}\"\n",
        cannot_generate(language)
    ));
    ctx.append_time_reference(&mut prompt);
    prompt
}

/// The reply the model is told to give when the problem cannot be solved.
pub fn cannot_generate(language: &str) -> String {
    format!("Cannot generate code for this problem in {language}.")
}
