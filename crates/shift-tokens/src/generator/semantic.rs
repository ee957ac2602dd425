//! Semantic tokens emitted through `light-dark()`.

use crate::model::SemanticTokens;
use crate::util::{camel_to_kebab, css_var, light_dark, resolve_token_reference};

pub(crate) fn css_lines(semantic: &SemanticTokens) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        "    /* SEMANTIC TOKENS with light-dark() */".to_string(),
    ];

    for (category, tokens) in &semantic.semantic {
        lines.push(String::new());
        lines.push(format!("    /* {} */", category.to_uppercase()));

        for (name, token) in tokens {
            let value = light_dark(
                &resolve_token_reference(&token.light.value),
                &resolve_token_reference(&token.dark.value),
            );
            lines.push(css_var(
                &format!("{}-{}", category, camel_to_kebab(name)),
                &value,
            ));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_categories_in_declared_order() {
        let semantic: SemanticTokens = serde_json::from_str(
            r#"{"semantic": {
                "text": {"onPrimary": {"light": {"value": "white"}, "dark": {"value": "{color.primary.950}"}}},
                "border": {"focus": {"light": {"value": "{color.primary.500}"}, "dark": {"value": "{color.primary.400}"}}}
            }}"#,
        )
        .unwrap();

        let lines = css_lines(&semantic);
        assert_eq!(
            lines,
            vec![
                "",
                "    /* SEMANTIC TOKENS with light-dark() */",
                "",
                "    /* TEXT */",
                "    --text-on-primary: light-dark(white, var(--color-primary-950));",
                "",
                "    /* BORDER */",
                "    --border-focus: light-dark(var(--color-primary-500), var(--color-primary-400));",
            ]
        );
    }
}
