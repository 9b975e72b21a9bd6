//! Vault store integration tests: round trips, confidentiality, and
//! resilience to damaged state.

mod support;

use support::TestEnv;
use talon::core::vault::{mask, Vault};

#[test]
fn roundtrip_preserves_credential_exactly() {
    let env = TestEnv::new();
    let vault = Vault::new(&env.settings);

    let credential = "sk-test-12345-αβγ-\"quotes\"-{braces}";
    vault.put("openai", credential).unwrap();
    assert_eq!(vault.get("openai").unwrap().as_deref(), Some(credential));
}

#[test]
fn vault_file_never_contains_plaintext() {
    let env = TestEnv::new();
    let vault = Vault::new(&env.settings);

    let credentials = [
        "sk-plain-ascii-credential",
        r#"{"json":"looking","credential":true}"#,
        "with\nnewlines\tand\ttabs",
    ];
    for (i, credential) in credentials.iter().enumerate() {
        vault.put(&format!("provider{i}"), credential).unwrap();
    }

    let raw = std::fs::read_to_string(env.settings.keys_file()).unwrap();
    for credential in credentials {
        assert!(!raw.contains(credential));
    }
    // Not even fragments of the recognizable middle parts.
    assert!(!raw.contains("plain-ascii"));
    assert!(!raw.contains("newlines"));
}

#[test]
fn one_truncated_entry_does_not_block_the_rest() {
    let env = TestEnv::new();
    let vault = Vault::new(&env.settings);

    for i in 0..5 {
        vault.put(&format!("provider{i}"), &format!("secret{i}")).unwrap();
    }

    // Truncate provider2's ciphertext in the raw file.
    let raw = std::fs::read_to_string(env.settings.keys_file()).unwrap();
    let mut entries: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let sealed = entries["provider2"].as_str().unwrap().to_string();
    entries["provider2"] = serde_json::Value::String(sealed[..10].to_string());
    std::fs::write(env.settings.keys_file(), entries.to_string()).unwrap();

    // All five ids still enumerate.
    assert_eq!(vault.list().unwrap().len(), 5);

    // The four intact entries still decrypt; only the damaged one is absent.
    for i in [0usize, 1, 3, 4] {
        assert_eq!(
            vault.get(&format!("provider{i}")).unwrap().as_deref(),
            Some(format!("secret{i}").as_str()),
        );
    }
    assert_eq!(vault.get("provider2").unwrap(), None);
}

#[test]
fn replaced_master_key_degrades_old_entries_to_absent() {
    let env = TestEnv::new();
    let vault = Vault::new(&env.settings);

    vault.put("openai", "sk-old").unwrap();

    // Operator replaces the key file.
    std::fs::write(env.settings.master_key_file(), [9u8; 32]).unwrap();

    assert_eq!(vault.get("openai").unwrap(), None);

    // New writes under the new key work and read back.
    vault.put("anthropic", "sk-new").unwrap();
    assert_eq!(vault.get("anthropic").unwrap().as_deref(), Some("sk-new"));
}

#[test]
fn masked_view_reveals_only_edges() {
    let env = TestEnv::new();
    let vault = Vault::new(&env.settings);

    vault.put("openai", "sk-ABCDEFGHIJKLMNOP").unwrap();
    let masked = vault.masked("openai").unwrap().unwrap();
    assert!(masked.starts_with("sk-ABCDE"));
    assert!(masked.ends_with("MNOP"));
    assert!(masked.contains("..."));
    assert!(!masked.contains("FGHIJKL"));
}

#[test]
fn masked_view_of_short_credential_reveals_nothing() {
    let env = TestEnv::new();
    let vault = Vault::new(&env.settings);

    vault.put("openai", "abc123").unwrap();
    let masked = vault.masked("openai").unwrap().unwrap();
    assert_eq!(masked, "***");
}

#[test]
fn mask_is_pure_and_matches_store_behavior() {
    assert_eq!(mask("sk-ABCDEFGHIJKLMNOP"), "sk-ABCDE...MNOP");
    assert_eq!(mask("short"), "***");
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        /// get(put(id, cred)) == cred for arbitrary ids and credentials.
        #[test]
        fn roundtrip_for_all_inputs(
            provider in "[a-zA-Z0-9:_-]{1,32}",
            credential in ".{1,200}",
        ) {
            let env = TestEnv::new();
            let vault = Vault::new(&env.settings);

            vault.put(&provider, &credential).unwrap();
            let got = vault.get(&provider).unwrap();
            prop_assert_eq!(got.as_deref(), Some(credential.as_str()));
        }
    }
}
