//! Share-link parsing.
//!
//! A Mega file-share URL packs everything one attempt needs:
//! `https://mega.nz/file/<id>#<file-key>!<shared-key>`. Parsing is a pure
//! function of the input string; no network or filesystem access.

use url::Url;

use crate::error::{MegaError, MegaResult};

/// Host names accepted for file-share links.
const ACCEPTED_HOSTS: &[&str] = &["mega.nz", "mega.co"];

/// Delimiter between the two encoded key segments in the URL fragment.
const KEY_DELIMITER: char = '!';

/// A parsed share link. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareReference {
    /// The host's file identifier, alphanumeric.
    pub file_id: String,
    /// First fragment segment: the file-specific encoded key.
    pub encoded_file_key: String,
    /// Second fragment segment: the encoded shared key the AES key and IV
    /// are sliced from.
    pub encoded_shared_key: String,
}

/// Parse a share URL into a [`ShareReference`].
///
/// Accepts only `https` URLs on the accepted hosts with path
/// `/file/<id>` and a fragment of at least two `!`-delimited segments.
/// Segments beyond the second are ignored.
pub fn parse(raw: &str) -> MegaResult<ShareReference> {
    let url = Url::parse(raw).map_err(|e| MegaError::invalid_link(format!("not a URL: {e}")))?;

    if url.scheme() != "https" {
        return Err(MegaError::invalid_link(format!(
            "scheme must be https, got {:?}",
            url.scheme()
        )));
    }

    let host = url
        .host_str()
        .ok_or_else(|| MegaError::invalid_link("URL has no host"))?;
    if !ACCEPTED_HOSTS.contains(&host) {
        return Err(MegaError::invalid_link(format!(
            "host {host:?} is not a recognized share host"
        )));
    }

    let file_id = file_id_from_path(url.path())?;

    let fragment = url
        .fragment()
        .filter(|f| !f.is_empty())
        .ok_or_else(|| MegaError::invalid_link("URL carries no key fragment"))?;

    let mut segments = fragment.split(KEY_DELIMITER);
    let encoded_file_key = segments.next().unwrap_or_default();
    let encoded_shared_key = segments
        .next()
        .ok_or_else(|| MegaError::invalid_link("key fragment has fewer than two '!' segments"))?;

    if encoded_file_key.is_empty() || encoded_shared_key.is_empty() {
        return Err(MegaError::invalid_link("key fragment has an empty segment"));
    }

    Ok(ShareReference {
        file_id,
        encoded_file_key: encoded_file_key.to_string(),
        encoded_shared_key: encoded_shared_key.to_string(),
    })
}

/// Extract and validate the file id from a `/file/<id>` path.
fn file_id_from_path(path: &str) -> MegaResult<String> {
    let id = path
        .strip_prefix("/file/")
        .ok_or_else(|| MegaError::invalid_link(format!("path {path:?} is not /file/<id>")))?;

    if id.is_empty() || id.contains('/') {
        return Err(MegaError::invalid_link(format!(
            "path {path:?} is not /file/<id>"
        )));
    }
    if !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(MegaError::invalid_link(format!(
            "file id {id:?} contains characters outside [A-Za-z0-9]"
        )));
    }

    Ok(id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_id_and_key_segments() {
        let reference =
            parse("https://mega.nz/file/mhJyxLxS#kTpYLbOMIxzLYUGedovrzL1ds3hJhIuDtr3XsLFd5F8!c29tZXNoYXJlZGtleWJ5dGVzMDEyMzQ1Njc4OTAxMjM")
                .unwrap();
        assert_eq!(reference.file_id, "mhJyxLxS");
        assert_eq!(
            reference.encoded_file_key,
            "kTpYLbOMIxzLYUGedovrzL1ds3hJhIuDtr3XsLFd5F8"
        );
        assert_eq!(
            reference.encoded_shared_key,
            "c29tZXNoYXJlZGtleWJ5dGVzMDEyMzQ1Njc4OTAxMjM"
        );
    }

    #[test]
    fn test_parse_accepts_both_hosts() {
        assert!(parse("https://mega.nz/file/abc123#k1!k2").is_ok());
        assert!(parse("https://mega.co/file/abc123#k1!k2").is_ok());
    }

    #[test]
    fn test_parse_ignores_segments_beyond_two() {
        let reference = parse("https://mega.nz/file/abc123#k1!k2!k3!k4").unwrap();
        assert_eq!(reference.encoded_file_key, "k1");
        assert_eq!(reference.encoded_shared_key, "k2");
    }

    #[test]
    fn test_parse_rejects_single_segment_fragment() {
        // The boundary case: a real-looking link whose fragment has no '!'.
        let err = parse("https://mega.nz/file/mhJyxLxS#kTpYLbOMIxzLYUGedovrzL1ds3hJhIuDtr3XsLFd5F8")
            .unwrap_err();
        assert!(matches!(err, MegaError::InvalidLink { .. }));
        assert!(err.to_string().contains("fewer than two"));
    }

    #[test]
    fn test_parse_rejects_wrong_scheme_and_host() {
        assert!(parse("http://mega.nz/file/abc123#k1!k2").is_err());
        assert!(parse("https://mega.io/file/abc123#k1!k2").is_err());
        assert!(parse("https://example.com/file/abc123#k1!k2").is_err());
    }

    #[test]
    fn test_parse_rejects_bad_file_ids() {
        assert!(parse("https://mega.nz/folder/abc123#k1!k2").is_err());
        assert!(parse("https://mega.nz/file/#k1!k2").is_err());
        assert!(parse("https://mega.nz/file/abc-123#k1!k2").is_err());
        assert!(parse("https://mega.nz/file/abc/def#k1!k2").is_err());
    }

    #[test]
    fn test_parse_rejects_missing_or_empty_fragment() {
        assert!(parse("https://mega.nz/file/abc123").is_err());
        assert!(parse("https://mega.nz/file/abc123#").is_err());
        assert!(parse("https://mega.nz/file/abc123#!k2").is_err());
        assert!(parse("https://mega.nz/file/abc123#k1!").is_err());
    }

    #[test]
    fn test_parse_never_panics_on_junk() {
        for junk in ["", "not a url", "https://", "mega.nz/file/abc#k1!k2", "https://mega.nz"] {
            let _ = parse(junk);
        }
    }
}
