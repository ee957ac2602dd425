//! End-to-end generation from the shipped token files.

use std::fs;

use proptest::prelude::*;
use shift_color::lightness_contrast;
use shift_tokens::{count_variables, generate_tokens_css, Generator, TokenError, TokenSet};

fn builtin_css() -> String {
    generate_tokens_css(&TokenSet::builtin().unwrap()).unwrap()
}

// =============================================================================
// Document shape
// =============================================================================

#[test]
fn document_header_and_layer() {
    let css = builtin_css();
    assert!(css.starts_with("/**\n * Shift CSS - Design Tokens\n"));
    assert!(css.contains("@layer shift.tokens {\n  :root {\n    color-scheme: light dark;\n"));
    assert!(css.ends_with("  }\n}\n"));
}

#[test]
fn primary_500_uses_formatted_values() {
    let css = builtin_css();
    assert!(css.contains("    --color-primary-500: oklch(64.8% 0.147 var(--shift-hue-primary));"));
    assert!(css.contains("    --color-neutral-50: oklch(97.8% 0.005 var(--shift-hue-neutral));"));
    assert!(css.contains("    --color-danger-950: oklch(23.8% 0.054 var(--shift-hue-danger));"));
}

#[test]
fn seed_hues_are_emitted() {
    let css = builtin_css();
    for (name, hue) in [
        ("primary", 260),
        ("secondary", 320),
        ("accent", 45),
        ("neutral", 260),
    ] {
        assert!(
            css.contains(&format!("    --shift-hue-{}: {};", name, hue)),
            "missing seed {}",
            name
        );
    }
}

#[test]
fn sections_appear_in_order() {
    let css = builtin_css();
    let markers = [
        "/* SEED HUE CUSTOMIZATION POINTS */",
        "/* PRIMARY SCALE */",
        "/* DANGER SCALE */",
        "/* NEUTRAL SCALE */",
        "/* SEMANTIC TOKENS with light-dark() */",
        "/* SPACING SCALE */",
        "/* BORDER RADIUS */",
        "/* TYPOGRAPHY */",
        "/* TRANSITIONS */",
        "/* SHADOWS */",
    ];
    let positions: Vec<usize> = markers
        .iter()
        .map(|m| css.find(m).unwrap_or_else(|| panic!("missing {}", m)))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn semantic_tokens_resolve_references() {
    let css = builtin_css();
    assert!(css.contains(
        "    --surface-base: light-dark(var(--color-neutral-50), var(--color-neutral-950));"
    ));
    assert!(css.contains("    --text-on-primary: light-dark(white, var(--color-primary-950));"));
    assert!(css.contains("    --interactive-primary-hover: light-dark("));
}

#[test]
fn spacing_and_radius() {
    let css = builtin_css();
    assert!(css.contains("    --spacing-0_5: 0.125rem;"));
    assert!(css.contains("    --spacing-px: 1px;"));
    assert!(css.contains("    --radius-full: 9999px;"));
}

#[test]
fn every_scale_has_every_step() {
    let css = builtin_css();
    for scale in [
        "primary",
        "secondary",
        "accent",
        "success",
        "warning",
        "danger",
        "neutral",
    ] {
        for step in [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950] {
            let var = format!("--color-{}-{}:", scale, step);
            assert!(css.contains(&var), "missing {}", var);
        }
    }
    assert!(count_variables(&css) > 7 * 11);
}

#[test]
fn hue_override_flows_into_seed_only() {
    let tokens = TokenSet::builtin().unwrap();
    let css = Generator::new(&tokens)
        .with_seed_hue("primary", 140)
        .generate()
        .unwrap();
    assert!(css.contains("    --shift-hue-primary: 140;"));
    assert!(css.contains("var(--shift-hue-primary));"));
}

// =============================================================================
// Loading from disk
// =============================================================================

fn write_tokens(dir: &std::path::Path, colors: &str) {
    let shipped = env!("CARGO_MANIFEST_DIR");
    fs::write(dir.join("colors.json"), colors).unwrap();
    for name in ["semantic.json", "spacing.json"] {
        fs::copy(format!("{}/tokens/{}", shipped, name), dir.join(name)).unwrap();
    }
}

#[test]
fn loads_custom_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_tokens(
        dir.path(),
        r#"{"color": {
            "seed": {"primary": {"value": "200"}},
            "lightness": {"50": {"value": "0.95"}, "500": {"value": "0.6"}},
            "chroma": {
                "vivid": {"50": {"value": "0.02"}, "500": {"value": "0.15"}},
                "neutral": {"50": {"value": "0.005"}}
            }
        }}"#,
    );

    let tokens = TokenSet::load_dir(dir.path()).unwrap();
    let css = generate_tokens_css(&tokens).unwrap();
    assert!(css.contains("    --shift-hue-primary: 200;"));
    assert!(css.contains("    --color-primary-500: oklch(60.0% 0.150 var(--shift-hue-primary));"));
    assert!(css.contains("    --color-neutral-50:"));
    assert!(!css.contains("--color-neutral-500:"));
}

#[test]
fn bad_lightness_order_aborts() {
    let dir = tempfile::tempdir().unwrap();
    write_tokens(
        dir.path(),
        r#"{"color": {
            "seed": {},
            "lightness": {"50": {"value": "0.5"}, "100": {"value": "0.9"}},
            "chroma": {
                "vivid": {"50": {"value": "0.02"}, "100": {"value": "0.05"}},
                "neutral": {}
            }
        }}"#,
    );

    let tokens = TokenSet::load_dir(dir.path()).unwrap();
    assert!(matches!(
        generate_tokens_css(&tokens),
        Err(TokenError::NonMonotonicLightness { .. })
    ));
}

// =============================================================================
// Scale properties
// =============================================================================

#[test]
fn shipped_lightness_strictly_decreases() {
    let tokens = TokenSet::builtin().unwrap();
    for scale in Generator::new(&tokens).scales().unwrap() {
        assert!(scale
            .steps
            .windows(2)
            .all(|w| w[1].lightness < w[0].lightness));
        assert!(scale.has_single_chroma_peak(), "{}", scale.name);
    }
}

#[test]
fn vivid_peak_is_the_500_step() {
    let tokens = TokenSet::builtin().unwrap();
    let scales = Generator::new(&tokens).scales().unwrap();
    assert_eq!(scales[0].peak().map(|s| s.step.as_str()), Some("500"));
}

#[test]
fn neutral_text_pairs_meet_aa() {
    let tokens = TokenSet::builtin().unwrap();
    let l = |step: &str| {
        tokens.colors.color.lightness[step]
            .value
            .parse::<f64>()
            .unwrap()
    };
    assert!(lightness_contrast(l("50"), l("900")) >= 7.0);
    assert!(lightness_contrast(l("900"), l("100")) >= 4.5);
    assert!(lightness_contrast(l("50"), l("700")) >= 4.5);
}

proptest! {
    #[test]
    fn any_valid_seed_hue_generates(hue in 0u16..=360) {
        let tokens = TokenSet::builtin().unwrap();
        let css = Generator::new(&tokens).with_seed_hue("primary", hue).generate().unwrap();
        let expected = format!("    --shift-hue-primary: {};", hue);
        prop_assert!(css.contains(&expected));
    }
}
