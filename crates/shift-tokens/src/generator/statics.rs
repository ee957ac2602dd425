//! Spacing and the fixed typography, motion and shadow blocks.

use crate::model::SpacingTokens;
use crate::util::css_var;

pub(crate) fn spacing_lines(spacing: &SpacingTokens) -> Vec<String> {
    let mut lines = vec![String::new(), "    /* SPACING SCALE */".to_string()];
    for (step, token) in &spacing.spacing {
        // `0.5` → `0_5`
        let name = format!("spacing-{}", step.replacen('.', "_", 1));
        lines.push(css_var(&name, &token.value));
    }

    lines.push(String::new());
    lines.push("    /* BORDER RADIUS */".to_string());
    for (name, token) in &spacing.radius {
        lines.push(css_var(&format!("radius-{}", name), &token.value));
    }
    lines
}

pub(crate) const TYPOGRAPHY: &[&str] = &[
    "",
    "    /* TYPOGRAPHY */",
    "    --font-sans: ui-sans-serif, system-ui, sans-serif, \"Apple Color Emoji\", \"Segoe UI Emoji\", \"Segoe UI Symbol\", \"Noto Color Emoji\";",
    "    --font-serif: ui-serif, Georgia, Cambria, \"Times New Roman\", Times, serif;",
    "    --font-mono: ui-monospace, SFMono-Regular, \"SF Mono\", Menlo, Consolas, \"Liberation Mono\", monospace;",
    "",
    "    /* FONT SIZES (fluid) */",
    "    --text-xs: clamp(0.6875rem, 0.625rem + 0.25vi, 0.75rem);",
    "    --text-sm: clamp(0.8125rem, 0.75rem + 0.25vi, 0.875rem);",
    "    --text-base: clamp(0.9375rem, 0.875rem + 0.25vi, 1rem);",
    "    --text-lg: clamp(1.0625rem, 1rem + 0.25vi, 1.125rem);",
    "    --text-xl: clamp(1.1875rem, 1.0625rem + 0.5vi, 1.25rem);",
    "    --text-2xl: clamp(1.4375rem, 1.25rem + 0.75vi, 1.5rem);",
    "    --text-3xl: clamp(1.75rem, 1.5rem + 1vi, 1.875rem);",
    "    --text-4xl: clamp(2.125rem, 1.75rem + 1.5vi, 2.25rem);",
    "    --text-5xl: clamp(2.75rem, 2.25rem + 2vi, 3rem);",
    "",
    "    /* LINE HEIGHTS */",
    "    --leading-none: 1;",
    "    --leading-tight: 1.25;",
    "    --leading-snug: 1.375;",
    "    --leading-normal: 1.5;",
    "    --leading-relaxed: 1.625;",
    "    --leading-loose: 2;",
    "",
    "    /* FONT WEIGHTS */",
    "    --font-thin: 100;",
    "    --font-extralight: 200;",
    "    --font-light: 300;",
    "    --font-normal: 400;",
    "    --font-medium: 500;",
    "    --font-semibold: 600;",
    "    --font-bold: 700;",
    "    --font-extrabold: 800;",
    "    --font-black: 900;",
    "",
    "    /* LETTER SPACING */",
    "    --tracking-tighter: -0.05em;",
    "    --tracking-tight: -0.025em;",
    "    --tracking-normal: 0;",
    "    --tracking-wide: 0.025em;",
    "    --tracking-wider: 0.05em;",
    "    --tracking-widest: 0.1em;",
];

pub(crate) const TRANSITIONS: &[&str] = &[
    "",
    "    /* TRANSITIONS */",
    "    --duration-75: 75ms;",
    "    --duration-100: 100ms;",
    "    --duration-150: 150ms;",
    "    --duration-200: 200ms;",
    "    --duration-300: 300ms;",
    "    --duration-500: 500ms;",
    "    --duration-700: 700ms;",
    "    --duration-1000: 1000ms;",
    "",
    "    /* EASING */",
    "    --ease-linear: linear;",
    "    --ease-in: cubic-bezier(0.4, 0, 1, 1);",
    "    --ease-out: cubic-bezier(0, 0, 0.2, 1);",
    "    --ease-in-out: cubic-bezier(0.4, 0, 0.2, 1);",
    "    --ease-bounce: cubic-bezier(0.68, -0.55, 0.265, 1.55);",
];

pub(crate) const SHADOWS: &[&str] = &[
    "",
    "    /* SHADOWS */",
    "    --shadow-sm: 0 1px 2px 0 rgb(0 0 0 / 0.05);",
    "    --shadow-base: 0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1);",
    "    --shadow-md: 0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1);",
    "    --shadow-lg: 0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1);",
    "    --shadow-xl: 0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1);",
    "    --shadow-2xl: 0 25px 50px -12px rgb(0 0 0 / 0.25);",
    "    --shadow-inner: inset 0 2px 4px 0 rgb(0 0 0 / 0.05);",
    "    --shadow-none: 0 0 #0000;",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Token;

    #[test]
    fn fractional_steps_use_underscore() {
        let spacing = SpacingTokens {
            spacing: [("0.5", "0.125rem"), ("4", "1rem")]
                .into_iter()
                .map(|(k, v)| (k.to_string(), Token::new(v)))
                .collect(),
            radius: [("full", "9999px")]
                .into_iter()
                .map(|(k, v)| (k.to_string(), Token::new(v)))
                .collect(),
        };
        let lines = spacing_lines(&spacing);
        assert!(lines.contains(&"    --spacing-0_5: 0.125rem;".to_string()));
        assert!(lines.contains(&"    --spacing-4: 1rem;".to_string()));
        assert!(lines.contains(&"    --radius-full: 9999px;".to_string()));
        assert_eq!(lines[5], "    /* BORDER RADIUS */");
    }
}
