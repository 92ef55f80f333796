//! Execution-output analysis: ask the model what a snippet would print.

use codeforge_core::{Language, LanguageKind};

use crate::{PromptContext, LANGUAGE_NOT_SUPPORTED};

/// How a language's toolchain reports problems, used to steer the model
/// toward realistic error messages.
struct Diagnostics {
    /// Representative syntax error messages; empty when none is worth quoting.
    syntax_examples: &'static [&'static str],
    runtime_examples: &'static [&'static str],
}

fn diagnostics(language: Language) -> Diagnostics {
    match language {
        Language::Python => Diagnostics {
            syntax_examples: &[],
            runtime_examples: &["Division by zero", "Index out of bounds"],
        },
        Language::Javascript => Diagnostics {
            syntax_examples: &[],
            runtime_examples: &["TypeError", "ReferenceError"],
        },
        Language::C => Diagnostics {
            syntax_examples: &["expected ‘;’ before"],
            runtime_examples: &["Segmentation fault"],
        },
        Language::Cpp => Diagnostics {
            syntax_examples: &["expected ‘;’ before"],
            runtime_examples: &["Segmentation fault", "NullPointerException"],
        },
        Language::Java => Diagnostics {
            syntax_examples: &[],
            runtime_examples: &["NullPointerException", "ArrayIndexOutOfBoundsException"],
        },
        Language::Csharp => Diagnostics {
            syntax_examples: &["CS1002: ; expected"],
            runtime_examples: &["NullReferenceException", "IndexOutOfRangeException"],
        },
        Language::Rust => Diagnostics {
            syntax_examples: &["unexpected closing delimiter"],
            runtime_examples: &["panic occurred", "borrow checker error"],
        },
        Language::Go => Diagnostics {
            syntax_examples: &["syntax error: unexpected ..."],
            runtime_examples: &["panic: runtime error"],
        },
        Language::Shell => Diagnostics {
            syntax_examples: &["syntax error near unexpected token"],
            runtime_examples: &["command not found", "permission denied"],
        },
        Language::Sql => Diagnostics {
            syntax_examples: &["Syntax error near..."],
            runtime_examples: &["Table not found", "Column does not exist"],
        },
        Language::Mongodb => Diagnostics {
            syntax_examples: &["Unexpected token", "Unknown operator"],
            runtime_examples: &["No such collection", "Invalid field name"],
        },
        Language::Swift => Diagnostics {
            syntax_examples: &["Expected ‘;’"],
            runtime_examples: &["Nil pointer exception", "Index out of range"],
        },
        Language::Ruby => Diagnostics {
            syntax_examples: &["syntax error, unexpected ..."],
            runtime_examples: &["NoMethodError", "IndexError"],
        },
        Language::Typescript => Diagnostics {
            syntax_examples: &["Property 'x' does not exist on type 'y'"],
            runtime_examples: &["TypeError", "undefined is not a function"],
        },
        Language::Dart => Diagnostics {
            syntax_examples: &["The method 'x' isn't defined for the class 'y'"],
            runtime_examples: &["Null check operator used on a null value"],
        },
        Language::Kotlin => Diagnostics {
            syntax_examples: &["Unresolved reference: x"],
            runtime_examples: &["NullPointerException", "IndexOutOfBoundsException"],
        },
        Language::Perl => Diagnostics {
            syntax_examples: &["syntax error at ..."],
            runtime_examples: &["Undefined subroutine", "Array index out of range"],
        },
        Language::Scala => Diagnostics {
            syntax_examples: &["not found: value x"],
            runtime_examples: &["NullPointerException", "ArrayIndexOutOfBoundsException"],
        },
        Language::Julia => Diagnostics {
            syntax_examples: &["syntax: unexpected ..."],
            runtime_examples: &["MethodError", "BoundsError"],
        },
    }
}

/// What the snippet is called in the prompt ("Python code", "SQL query", ...).
fn subject(language: Language) -> String {
    match language.kind() {
        LanguageKind::Program => format!("{} code", language.display_name()),
        LanguageKind::Script => format!("{} script", language.display_name()),
        LanguageKind::Query => format!("{} query", language.display_name()),
    }
}

fn quoted_list(items: &[&str]) -> String {
    items
        .iter()
        .map(|i| format!("\"{i}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build the analysis prompt for `code` written in `language`.
pub fn prompt(language: Language, code: &str, ctx: &PromptContext) -> String {
    let diag = diagnostics(language);
    let subject = subject(language);
    let is_query = language.kind() == LanguageKind::Query;

    let mut prompt = String::new();
    prompt.push_str(&format!("Analyze the following {subject}:\n\n"));
    prompt.push_str(&format!("```\n{code}\n```\n\n"));
    prompt.push_str("Output:\n\n");

    if is_query {
        prompt.push_str(&format!(
            "Carefully examine the provided {subject} for potential issues.\n\n"
        ));
    } else {
        prompt.push_str(
            "Carefully examine the provided code line-by-line and character-by-character. \
             Focus on errors such as syntax or runtime issues.\n\n",
        );
    }

    prompt.push_str("If errors are found:\n");
    let most_probable = if language == Language::Java {
        "all the most probable error messages"
    } else {
        "the most probable error message"
    };
    if diag.syntax_examples.is_empty() {
        prompt.push_str(&format!(
            "- Syntax errors: Provide {most_probable} {} would report.\n",
            language.tool()
        ));
    } else {
        prompt.push_str(&format!(
            "- Syntax errors: Provide {most_probable} {} would report (e.g., {}).\n",
            language.tool(),
            quoted_list(diag.syntax_examples)
        ));
    }
    prompt.push_str(&format!(
        "- Runtime errors: Provide a clear description (e.g., {}).\n",
        quoted_list(diag.runtime_examples)
    ));
    prompt.push_str("- Only provide the error message, not the code or explanations.\n");
    if language == Language::Python {
        prompt.push_str(
            "- Check if there is any spelling mistake in the words (e.g., \"sel f\", \"sprint\").\n",
        );
    }
    prompt.push_str(
        "- Review the code repeatedly to ensure it is error-free before proceeding with the output.\n\n",
    );

    if is_query {
        prompt.push_str("If the query is likely error-free:\n");
        prompt.push_str("- If the query would return results, show a sample output (if possible).\n");
        prompt.push_str(
            "- Otherwise, indicate if the query would run successfully without returning results.\n\n",
        );
    } else {
        prompt.push_str("If the code is likely error-free:\n");
        prompt.push_str("- If there's an infinite loop, show the first 20 iterations followed by \"...\"\n");
        prompt.push_str("- If the code uses randomness, show the output with different values for each run.\n");
        prompt.push_str("- Otherwise, show the full output.\n\n");
    }

    let noun = if is_query { "query" } else { "code" };
    prompt.push_str(&format!(
        "If the {noun} is not valid {}:\n- Output: \"{LANGUAGE_NOT_SUPPORTED}\"\n",
        language.display_name()
    ));

    ctx.append_time_reference(&mut prompt);
    prompt
}
