//! Display labels for cluster add-on charts.

use std::sync::LazyLock;

use regex::Regex;

use crate::store::Translator;

/// Distribution prefixes stripped from chart names before display.
static ADDON_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(rke|rke2|rancher)-").unwrap());

/// Convert a compact identifier (`nodeDriver`, `backup-restore`) to a
/// capitalized title (`Node Driver`, `Backup Restore`). Words break on
/// lower-to-upper case changes and on any non-alphanumeric separator.
pub fn camel_to_title(name: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in name.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase();
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|w| capitalize(w))
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Display label for a cluster add-on chart, resolved through the
/// translation accessor with a generated fallback.
///
/// `configuration` selects the chart's `.configuration` key (used on
/// settings forms) over the plain `.label` key, and drops the `Add-on: `
/// prefix from the fallback text.
pub fn label_for_addon(translator: &impl Translator, name: &str, configuration: bool) -> String {
    let addon = camel_to_title(ADDON_PREFIX.replace(name, "").as_ref());
    let fallback = if configuration {
        addon
    } else {
        format!("Add-on: {addon}")
    };
    let suffix = if configuration {
        ".configuration"
    } else {
        ".label"
    };
    let key = format!("cluster.addonChart.\"{name}\"{suffix}");

    translator.with_fallback(&key, &fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Translator with no translations: always returns the fallback.
    struct Untranslated;

    impl Translator for Untranslated {
        fn with_fallback(&self, _key: &str, fallback: &str) -> String {
            fallback.to_string()
        }
    }

    /// Translator that echoes the key, for asserting key construction.
    struct KeyEcho;

    impl Translator for KeyEcho {
        fn with_fallback(&self, key: &str, _fallback: &str) -> String {
            key.to_string()
        }
    }

    #[test]
    fn test_camel_to_title() {
        assert_eq!(camel_to_title("nodeDriver"), "Node Driver");
        assert_eq!(camel_to_title("backup-restore"), "Backup Restore");
        assert_eq!(camel_to_title("snapshot_controller"), "Snapshot Controller");
        assert_eq!(camel_to_title("ingressNginx"), "Ingress Nginx");
        assert_eq!(camel_to_title("coredns"), "Coredns");
        assert_eq!(camel_to_title(""), "");
    }

    #[test]
    fn test_prefix_stripping() {
        let label = label_for_addon(&Untranslated, "rke2-ingress-nginx", true);
        assert_eq!(label, "Ingress Nginx");

        let label = label_for_addon(&Untranslated, "rancher-backup", true);
        assert_eq!(label, "Backup");

        let label = label_for_addon(&Untranslated, "rke-metrics", true);
        assert_eq!(label, "Metrics");

        // Only a single leading prefix is stripped.
        let label = label_for_addon(&Untranslated, "external-dns", true);
        assert_eq!(label, "External Dns");
    }

    #[test]
    fn test_fallback_prefix_for_plain_labels() {
        let label = label_for_addon(&Untranslated, "rke2-canal", false);
        assert_eq!(label, "Add-on: Canal");
    }

    #[test]
    fn test_key_construction() {
        let key = label_for_addon(&KeyEcho, "rke2-canal", true);
        assert_eq!(key, "cluster.addonChart.\"rke2-canal\".configuration");

        let key = label_for_addon(&KeyEcho, "rke2-canal", false);
        assert_eq!(key, "cluster.addonChart.\"rke2-canal\".label");
    }

    #[test]
    fn test_translation_wins_over_fallback() {
        struct Fixed;
        impl Translator for Fixed {
            fn with_fallback(&self, key: &str, fallback: &str) -> String {
                if key == "cluster.addonChart.\"rke2-canal\".label" {
                    "Canal CNI".to_string()
                } else {
                    fallback.to_string()
                }
            }
        }

        assert_eq!(label_for_addon(&Fixed, "rke2-canal", false), "Canal CNI");
        assert_eq!(label_for_addon(&Fixed, "rke2-calico", false), "Add-on: Calico");
    }
}
