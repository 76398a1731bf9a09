// build.rs

//! Compiles `locales/*.toml` into the `t!` macro included by `src/lib.rs`.
//!
//! Every locale is checked against the English table on each build: a key
//! English does not define, or a message whose `{placeholders}` differ from
//! the English ones, fails the build. Keys a locale leaves out fall back to
//! English.

use anyhow::{Context, Result, bail};
use std::collections::{BTreeMap, BTreeSet};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const LOCALES_DIR: &str = "locales";
const BASE_LANG: &str = "en";

type Messages = BTreeMap<String, String>;

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={LOCALES_DIR}");
    println!("cargo:rerun-if-env-changed=PYNANO_LANG");

    let base = read_locale(&locale_path(BASE_LANG))?;
    check_locales(&base)?;

    let lang = selected_lang();
    println!("cargo:rustc-env=PYNANO_LANG_EFFECTIVE={lang}");
    let messages = overlay(base, &lang)?;

    let out_dir = env::var("OUT_DIR").context("OUT_DIR is not set")?;
    let dest = Path::new(&out_dir).join("translations.rs");
    fs::write(&dest, render_macro(&messages))
        .with_context(|| format!("writing {}", dest.display()))?;
    Ok(())
}

/// A `lang_*` feature wins over `PYNANO_LANG`; English is the default.
fn selected_lang() -> String {
    let mut features: Vec<String> = env::vars()
        .filter_map(|(key, _)| {
            key.strip_prefix("CARGO_FEATURE_LANG_")
                .map(str::to_lowercase)
        })
        .collect();
    features.sort();

    match features.split_first() {
        Some((first, rest)) => {
            if !rest.is_empty() {
                println!("cargo:warning=Several lang_* features enabled {features:?}; using '{first}'.");
            }
            first.clone()
        }
        None => env::var("PYNANO_LANG").unwrap_or_else(|_| BASE_LANG.to_string()),
    }
}

fn locale_path(lang: &str) -> PathBuf {
    Path::new(LOCALES_DIR).join(format!("{lang}.toml"))
}

fn read_locale(path: &Path) -> Result<Messages> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}

/// Validates every non-English locale file against `base`.
fn check_locales(base: &Messages) -> Result<()> {
    let entries = fs::read_dir(LOCALES_DIR).with_context(|| format!("listing {LOCALES_DIR}/"))?;
    for entry in entries {
        let path = entry?.path();
        let is_other_locale = path.extension().is_some_and(|ext| ext == "toml")
            && path.file_stem().is_some_and(|stem| stem != BASE_LANG);
        if !is_other_locale {
            continue;
        }

        let messages = read_locale(&path)?;
        for (key, text) in &messages {
            let Some(english) = base.get(key) else {
                bail!("{}: key '{key}' is not defined in {BASE_LANG}.toml", path.display());
            };
            if placeholders(text) != placeholders(english) {
                bail!(
                    "{}: '{key}' uses placeholders {:?}, {BASE_LANG}.toml uses {:?}",
                    path.display(),
                    placeholders(text),
                    placeholders(english)
                );
            }
        }
    }
    Ok(())
}

/// Names between `{` and `}` in a message.
fn placeholders(text: &str) -> BTreeSet<&str> {
    text.split('{')
        .skip(1)
        .filter_map(|rest| rest.split_once('}').map(|(name, _)| name))
        .collect()
}

fn overlay(mut base: Messages, lang: &str) -> Result<Messages> {
    if lang == BASE_LANG {
        return Ok(base);
    }
    let path = locale_path(lang);
    if !path.exists() {
        println!("cargo:warning=No {} found; messages stay in English.", path.display());
        return Ok(base);
    }
    base.extend(read_locale(&path)?);
    Ok(base)
}

/// One literal arm per key. Unknown keys become a compile error at the call site.
fn render_macro(messages: &Messages) -> String {
    let mut code = String::from("#[macro_export]\nmacro_rules! t {\n");
    for (key, text) in messages {
        code.push_str(&format!("    ({key:?}) => {{ {text:?} }};\n"));
    }
    code.push_str(
        "    ($key:expr) => { compile_error!(concat!(\"Missing translation key: \", $key)) };\n}\n",
    );
    code
}
