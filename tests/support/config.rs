use std::io::Write;

use tempfile::NamedTempFile;

/// Write `contents` to a `.toml` temp file, removed when the handle drops.
pub fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("polyfeed-config-")
        .suffix(".toml")
        .tempfile()
        .expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file.flush().expect("flush temp config");
    file
}

/// A valid config pointing every endpoint at local servers.
pub fn local_config(gamma_url: &str, ws_url: &str, slugs: &[&str]) -> String {
    let mut toml = format!(
        r#"
[polymarket]
ws_url = "{ws_url}"
gamma_url = "{gamma_url}"
clob_url = "{gamma_url}"
"#
    );
    for slug in slugs {
        toml.push_str(&format!("\n[[polymarket.events]]\nslug = \"{slug}\"\n"));
    }
    toml
}
