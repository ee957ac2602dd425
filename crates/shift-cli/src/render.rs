//! Templates and theme for the text output of each command.
//!
//! Templates mark styled spans with `[name]text[/name]` tags. The renderer
//! turns them into ANSI styling in term mode, strips them in text mode and
//! leaves them visible in term-debug mode. Bracketed text that names no
//! style, such as a CSS attribute selector, passes through.

use console::Style;
use standout_render::{OutputMode, RenderError, Renderer, Theme};

const TEMPLATES: [(&str, &str); 7] = [
    ("init", include_str!("templates/init.jinja")),
    ("add", include_str!("templates/add.jinja")),
    ("list", include_str!("templates/list.jinja")),
    ("types", include_str!("templates/types.jinja")),
    ("tokens", include_str!("templates/tokens.jinja")),
    ("convert", include_str!("templates/convert.jinja")),
    ("contrast", include_str!("templates/contrast.jinja")),
];

/// Style names usable in templates.
pub fn theme() -> Theme {
    Theme::new()
        .add("title", Style::new().bold().cyan().force_styling(true))
        .add("strong", Style::new().bold().force_styling(true))
        .add("ok", Style::new().green().force_styling(true))
        .add("warn", Style::new().yellow().force_styling(true))
        .add("error", Style::new().red().bold().force_styling(true))
        .add("dim", Style::new().dim().force_styling(true))
        .add("accent", Style::new().magenta().force_styling(true))
        .add("code", "title")
}

/// A renderer for `mode` with every command template registered.
pub fn renderer(mode: OutputMode) -> Result<Renderer, RenderError> {
    let mut renderer = Renderer::with_output(theme(), mode)?;
    for (name, source) in TEMPLATES {
        renderer.add_template(name, source)?;
    }
    Ok(renderer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use serde_json::json;

    fn render(name: &str, data: &impl Serialize, mode: OutputMode) -> String {
        renderer(mode).unwrap().render(name, data).unwrap()
    }

    #[test]
    fn theme_aliases_resolve() {
        assert!(theme().validate().is_ok());
    }

    #[test]
    fn every_template_compiles() {
        assert_eq!(TEMPLATES.len(), 7);
        renderer(OutputMode::Text).unwrap();
    }

    #[test]
    fn text_mode_strips_tags() {
        let data = json!({
            "first": "97.8%", "second": "32.0%", "ratio_text": "12.14:1",
            "level_label": "AAA", "aa": true, "aaa": true, "aa_large": true
        });
        let out = render("contrast", &data, OutputMode::Text);
        assert!(out.starts_with("97.8% vs 32.0%: 12.14:1 (AAA)"), "{}", out);
        assert!(!out.contains("[ok]"));
        assert!(!out.contains("\u{1b}["));
    }

    #[test]
    fn term_mode_styles() {
        let data = json!({"colors": [{"input": "#zz", "error": "bad hex"}]});
        let out = render("convert", &data, OutputMode::Term);
        assert!(out.contains("\u{1b}["), "{:?}", out);
        assert!(out.contains("#zz: bad hex"));
    }

    #[test]
    fn debug_mode_keeps_tags() {
        let data = json!({"colors": [{"input": "#zz", "error": "bad hex"}]});
        let out = render("convert", &data, OutputMode::TermDebug);
        assert!(out.contains("[error]invalid[/error]"), "{}", out);
    }

    #[test]
    fn block_tags_leave_no_blank_lines() {
        let data = json!({
            "colors": [
                {"input": "#fff", "hex": "#ffffff", "oklch": "oklch(100.0% 0.000 none)"},
                {"input": "#f00", "hex": "#ff0000", "oklch": "oklch(62.8% 0.258 29)", "hue_name": "Red"}
            ]
        });
        let out = render("convert", &data, OutputMode::Text);
        let lines: Vec<&str> = out.trim().lines().collect();
        assert_eq!(lines.len(), 2, "{:?}", out);
        assert!(lines[0].starts_with("#ffffff  oklch(100.0% 0.000 none)"), "{}", lines[0]);
        assert!(lines[0].ends_with("achromatic"));
        assert!(lines[1].ends_with("Red"));
    }

    #[test]
    fn attribute_selectors_pass_through() {
        let data = json!({
            "file": "shift.d.ts", "framework": null, "detected": false,
            "published_types": null
        });
        let out = render("types", &data, OutputMode::Text);
        assert!(out.contains(r#""include": ["shift.d.ts"]"#), "{}", out);
    }
}
