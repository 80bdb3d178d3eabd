// All LLM prompt constants for the refine module.

/// System prompt for bullet polishing — plain rewritten text only.
pub const POLISH_SYSTEM: &str =
    "You are a resume editor for engineering students. \
    Rewrite resume text to be professional and concise. \
    Respond with the rewritten text ONLY. \
    Do NOT include explanations, quotes, or markdown.";

/// Polishing prompt template. Replace `{content}` before sending.
pub const POLISH_PROMPT_TEMPLATE: &str = r#"Polish and shorten the following resume text to be more professional and concise.

Original Content: "{content}"

Requirements:
1. Keep the meaning but remove redundancy.
2. Use professional phrasing suitable for a technical resume.
3. Ensure it flows well.
4. Return ONLY the rewritten text in Chinese."#;

/// System prompt for the STAR-method rewrite.
pub const STAR_REWRITE_SYSTEM: &str =
    "You are a professional resume consultant for engineering students. \
    Rewrite resume bullet points using the STAR method. \
    Respond with the rewritten text ONLY. \
    Do NOT include explanations, quotes, or markdown.";

/// STAR rewrite template. Replace `{role}` and `{content}` before sending.
pub const STAR_REWRITE_PROMPT_TEMPLATE: &str = r#"Rewrite the following resume bullet point using the STAR method (Situation, Task, Action, Result).

Context: The student was a {role}.
Original Content: "{content}"

Requirements:
1. Use professional engineering terminology (e.g., "Optimized", "Designed", "Implemented").
2. Quantify results where possible (even if estimating based on context, e.g., "Improved efficiency by X%").
3. Keep it concise (1-2 sentences).
4. Return ONLY the rewritten text in Chinese."#;

/// System prompt for tech-stack extraction — enforces JSON-only output.
pub const TECH_STACK_SYSTEM: &str =
    "You extract technical keywords from project descriptions. \
    You MUST respond with a valid JSON array of strings only. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences.";

/// Tech-stack extraction template. Replace `{description}` before sending.
pub const TECH_STACK_PROMPT_TEMPLATE: &str = r#"Extract relevant technical keywords (Tech Stack) from the following project description.
Return them as a JSON array of strings.

Description: "{description}""#;
