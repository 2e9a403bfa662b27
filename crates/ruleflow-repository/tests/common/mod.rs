//! Common fixtures for repository integration tests

#![allow(dead_code)]

use std::path::Path;

/// One feature with a pre-condition on `ds1` and a condition on `ds2`
pub const OFFERS_JSON: &str = r#"{
  "features": [
    {
      "name": "premium-offer",
      "requirements": {
        "preConditions": [{"key": "ds1:attr", "equals": "p-one"}],
        "conditions": [{"key": "ds2:attr", "equals": "c-two"}]
      },
      "actions": [{"type": "return", "value": "OFFER", "defaultValue": "NO_OFFER"}]
    }
  ]
}"#;

pub const OFFERS_YAML: &str = r#"
features:
  - name: premium-offer
    requirements:
      preConditions:
        - key: ds1:attr
          equals: p-one
      conditions:
        - key: ds2:attr
          equals: c-two
"#;

/// Write a fixture file, creating parent directories
pub fn write_fixture(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}
