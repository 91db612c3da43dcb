//! Instruction text for the generative landing page model

use crate::form::FormData;

/// Sections the model must produce, in page order
pub const PAGE_SECTIONS: [(&str, &str); 6] = [
    ("Hero", "Compelling headline, subheadline, and CTA button"),
    (
        "Problem/Solution",
        "Address the pain point and position the business as the solution",
    ),
    ("Benefits", "3 key benefits with icons (use emoji)"),
    ("Social Proof", "Placeholder testimonial section"),
    ("Final CTA", "Strong closing with clear call to action"),
    ("Footer", "Simple footer with business name"),
];

/// Build the single-turn prompt asking for a `{ "html", "css" }` JSON object
pub fn build_page_prompt(data: &FormData, accent: &str, tone_phrase: &str) -> String {
    let sections = PAGE_SECTIONS
        .iter()
        .enumerate()
        .map(|(i, (name, detail))| format!("{}. {} - {}", i + 1, name, detail))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are a landing page generator. Create a modern, conversion-focused landing page for:

Business: {business}
Industry: {industry}
Target Audience: {audience}
Problem Solved: {problem}
Key Benefits: {benefits}
Call to Action: {cta}
Tone: {tone_phrase}
Accent Color: {accent}

Generate the page with these sections:
{sections}

Requirements:
- Mobile-responsive design
- Clean, modern aesthetic
- Use the accent color for buttons and highlights
- Include smooth scroll behavior
- Use system fonts for fast loading

Return ONLY valid JSON in this exact format (no markdown code fences, no explanation before or after):
{{
  "html": "<the complete HTML body content>",
  "css": "<the complete CSS styles>"
}}

The JSON object must have exactly two string keys, "html" and "css".
The HTML should NOT include <!DOCTYPE>, <html>, <head>, or <body> tags - just the inner content.
The CSS should be complete and self-contained."#,
        business = data.business_name,
        industry = data.industry,
        audience = data.target_audience,
        problem = data.problem_solved,
        benefits = data.key_benefits,
        cta = data.call_to_action,
    )
}
