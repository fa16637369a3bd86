/// Keyword phrases matched against the lower-cased tweak text, with the
/// canonical fragment each one appends. Order is the application order.
const TWEAK_RULES: [(&str, &str); 8] = [
    (
        "corporate colors",
        " Corporate blue and white color scheme, professional branding.",
    ),
    (
        "professional lighting",
        " Professional studio lighting, clean and bright.",
    ),
    (
        "clean background",
        " Clean, uncluttered background, minimal distractions.",
    ),
    (
        "business setting",
        " Professional business environment, corporate setting.",
    ),
    (
        "modern office",
        " Modern office space, contemporary business interior.",
    ),
    (
        "executive style",
        " Executive-level professional appearance, high-end business aesthetic.",
    ),
    (
        "minimalist",
        " Minimalist clean design, lots of white space, simple composition.",
    ),
    (
        "brand colors",
        " Emphasize brand colors and corporate identity.",
    ),
];

/// Appends keyword-triggered fragments and then the raw tweak text to the
/// base prompt. A blank tweak returns the base prompt unchanged.
pub fn apply_tweak(base_prompt: &str, tweak_text: &str) -> String {
    if tweak_text.trim().is_empty() {
        return base_prompt.to_string();
    }
    let lowered = tweak_text.to_lowercase();
    let mut prompt = base_prompt.to_string();
    for (keyword, fragment) in TWEAK_RULES {
        if lowered.contains(keyword) {
            prompt.push_str(fragment);
        }
    }
    prompt.push(' ');
    prompt.push_str(tweak_text);
    prompt
}
