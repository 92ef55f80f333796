//! Templates for the coordinated HTML → CSS → JS pipeline.
//!
//! Each later template embeds the output of the earlier stages so the model
//! only styles and scripts elements that actually exist.

/// Stage 1: body-only HTML for a project description.
pub fn html_prompt(description: &str) -> String {
    let mut prompt = String::new();
    prompt.push_str(
        "Generate HTML code for the following project, suitable for placement directly within the `<body>` tag.\n\n",
    );
    prompt.push_str("*   Exclude all `<html>`, `<head>`, and `<body>` tags.\n");
    prompt.push_str(
        "*   **Absolutely do not include any inline JavaScript** (e.g., `<script>...</script>` within HTML tags, \
         event handlers like `onclick=\"...\"`, or any other form of inline scripting). \
         The HTML should be purely structural.\n",
    );
    prompt.push_str(
        "*   Do not include any inline styles (e.g., `style=\"...\"`), or links to external CSS/JS files \
         *except for essential CDNs as specified below*.\n\n",
    );
    prompt.push_str("Regarding external libraries/CDNs:\n\n");
    prompt.push_str(
        "*   If the project description *explicitly mentions* a specific library (e.g., \"use jQuery\"), \
         include it using the appropriate `<link>` or `<script>` tag within the `<body>`.\n",
    );
    prompt.push_str(
        "*   If the project requires functionality that is *commonly provided by a well-known library* \
         (e.g., date/time picking, charting, complex UI components) and the project description does \
         *not explicitly forbid* their use, you *may* include the appropriate CDN link within the `<body>`.\n",
    );
    prompt.push_str(
        "*   If you include a CDN, use the most common and reputable CDN provider (e.g., cdnjs, unpkg).\n",
    );
    prompt.push_str(
        "*   Only include CDNs that are *directly relevant* to the functionality of the page as described \
         in the project description.\n",
    );
    prompt.push_str(
        "*   The CDN links should be placed **at the very bottom of the body section** \
         (just before the closing `</body>` tag).\n\n",
    );
    prompt.push_str(&format!("Project description: {description}\n"));
    prompt
}

/// Stage 2: CSS for exactly the elements in `html`.
pub fn css_prompt(html: &str) -> String {
    let mut prompt = String::new();
    prompt.push_str(
        "Generate CSS code to style only the classes, IDs, or elements that appear in the following HTML structure.\n\n",
    );
    prompt.push_str("*   Provide only the CSS code.\n");
    prompt.push_str("*   Do not include any explanations, HTML tags, or other extraneous text.\n");
    prompt.push_str(
        "*   Only style the classes, IDs, or elements present in the provided HTML. Do not add any unrelated styles.\n",
    );
    prompt.push_str(
        "*   **Do not include any styles for inline styles that are already included in the HTML elements.** \
         Only add styles not yet included.\n\n",
    );
    prompt.push_str(&format!("HTML:\n```html\n{html}\n```\n"));
    prompt
}

/// Stage 3: JS for the elements in `html`, aware of the `css` applied to them.
pub fn js_prompt(html: &str, css: &str) -> String {
    let mut prompt = String::new();
    prompt.push_str(
        "Generate JavaScript code to add functionality only for the elements and IDs present in the \
         following HTML structure, styled with the provided CSS.\n\n",
    );
    prompt.push_str("*   Do not add functionality for elements or IDs not included in the HTML.\n");
    prompt.push_str(
        "*   **Do not repeat JavaScript** or event handlers that already exist in the HTML \
         (e.g., avoid `onclick` attributes within HTML tags).\n",
    );
    prompt.push_str("*   Provide only the JavaScript code.\n");
    prompt.push_str("*   Do not include any explanations, HTML tags, or other extraneous text.\n\n");
    prompt.push_str(&format!("HTML:\n```html\n{html}\n```\n\n"));
    prompt.push_str(&format!("CSS:\n```css\n{css}\n```\n"));
    prompt
}
