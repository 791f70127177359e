//! Digital Asset Links generation.
//!
//! The `assetlinks.json` statement lets Android verify that the signed app and
//! the web origin belong to the same owner, which is what allows a Trusted Web
//! Activity to run without browser UI.

use serde::Serialize;

use crate::bundler::Result;

const HANDLE_ALL_URLS: &str = "delegate_permission/common.handle_all_urls";
const ANDROID_APP_NAMESPACE: &str = "android_app";

#[derive(Debug, Serialize)]
struct Statement<'a> {
    relation: [&'static str; 1],
    target: Target<'a>,
}

#[derive(Debug, Serialize)]
struct Target<'a> {
    namespace: &'static str,
    package_name: &'a str,
    sha256_cert_fingerprints: [&'a str; 1],
}

/// Serializes the asset links statement list for `package_id`.
///
/// `sha256_fingerprint` is the colon separated upper-case hex form printed by
/// `keytool -list -v`.
pub fn generate_asset_links(package_id: &str, sha256_fingerprint: &str) -> Result<String> {
    let statements = [Statement {
        relation: [HANDLE_ALL_URLS],
        target: Target {
            namespace: ANDROID_APP_NAMESPACE,
            package_name: package_id,
            sha256_cert_fingerprints: [sha256_fingerprint],
        },
    }];

    Ok(serde_json::to_string_pretty(&statements)?)
}
