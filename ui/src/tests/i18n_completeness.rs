use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Canonical FTL file per locale.
const FTL_FILENAME: &str = "fleetdesk-ui.ftl";

/// Root (relative to crate) for i18n assets.
const I18N_DIR: &str = "i18n";

/// Message IDs defined in a Fluent file. Lines of the form `<identifier> =`
/// count; comments, terms (`-` prefix), attributes and blank lines do not.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let id = line[..eq_pos].trim();
            if !id.is_empty() && id.chars().all(valid_key_char) {
                keys.insert(id.to_string());
            }
        }
    }
    keys
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Literal first arguments of every `t!(...)` call under `src_root`. Whitespace
/// between `t!(` and the literal is allowed so multi-line calls are found too.
fn extract_translation_keys_from_source(src_root: &Path) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        for (pos, _) in content.match_indices("t!(") {
            // Skip `fl!(` / `...t!(` suffix matches inside other identifiers.
            if content[..pos]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_alphanumeric() || c == '_')
            {
                continue;
            }
            let rest = content[pos + 3..].trim_start();
            let Some(literal) = rest.strip_prefix('"') else {
                continue;
            };
            if let Some(end) = literal.find('"') {
                let key = &literal[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }

    found
}

#[test]
fn i18n_completeness() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let fallback_file = crate_root.join(I18N_DIR).join("en-US").join(FTL_FILENAME);

    let fallback_content =
        fs::read_to_string(&fallback_file).expect("Failed to read fallback FTL file");
    let fallback_keys = parse_ftl_keys(&fallback_content);
    assert!(
        !fallback_keys.is_empty(),
        "No message keys parsed from fallback FTL: {:?}",
        fallback_file
    );

    let referenced_keys = extract_translation_keys_from_source(&crate_root.join("src"));
    assert!(
        referenced_keys.contains("app-title"),
        "Source scan found no t! lookups; scanner is broken"
    );

    let mut missing: Vec<_> = referenced_keys
        .iter()
        .filter(|k| !fallback_keys.contains(*k))
        .collect();
    missing.sort();
    assert!(
        missing.is_empty(),
        "Referenced translation keys missing in fallback ({}):\n{}",
        missing.len(),
        missing
            .iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    );

    let mut unused: Vec<_> = fallback_keys
        .iter()
        .filter(|k| !referenced_keys.contains(*k))
        .collect();
    unused.sort();
    assert!(
        unused.is_empty(),
        "Fallback keys never looked up from src/ ({}):\n{}",
        unused.len(),
        unused
            .iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    );
}
