use super::*;
use crate::resource::ObjectUrls;
use crate::track::NewTrack;

fn mp3_upload(size: u64) -> FormValue {
    FormValue::File(FileUpload {
        name: "song.mp3".into(),
        mime: "audio/mpeg".into(),
        size,
        bytes: Vec::new().into(),
    })
}

#[test]
fn file_validator_accepts_allowed_type_under_limit() {
    let validator = FileValidator {
        size_limit: Some(100 * (1 << 20)),
        allowed_types: Some(vec!["audio/mpeg".into(), "audio/ogg".into()]),
    };
    assert_eq!(validator.validate(&mp3_upload(1 << 20)), Ok(()));
}

#[test]
fn file_validator_rejects_non_file_values() {
    let validator = FileValidator::new();
    assert_eq!(
        validator.validate(&FormValue::Text("song.mp3".into())),
        Err(FileValidationError::NotAFile)
    );
    assert_eq!(
        validator.validate(&FormValue::Missing),
        Err(FileValidationError::NotAFile)
    );
}

#[test]
fn file_validator_rejects_oversized_file_with_both_numbers() {
    let limit = 100 * (1 << 20);
    let actual = 101 * (1 << 20);
    let validator = FileValidator {
        size_limit: Some(limit),
        allowed_types: None,
    };
    assert_eq!(
        validator.validate(&mp3_upload(actual)),
        Err(FileValidationError::TooLarge { actual, limit })
    );
}

#[test]
fn file_validator_size_check_runs_before_type_check() {
    // Both checks would fail; the size failure wins.
    let validator = FileValidator {
        size_limit: Some(10),
        allowed_types: Some(vec!["audio/flac".into()]),
    };
    assert!(matches!(
        validator.validate(&mp3_upload(11)),
        Err(FileValidationError::TooLarge { .. })
    ));
}

#[test]
fn file_validator_rejects_disallowed_mime_type() {
    let validator = FileValidator {
        size_limit: None,
        allowed_types: Some(vec!["audio/ogg".into()]),
    };
    assert_eq!(
        validator.validate(&mp3_upload(1)),
        Err(FileValidationError::InvalidType {
            actual: "audio/mpeg".into(),
            allowed: vec!["audio/ogg".into()],
        })
    );
}

#[test]
fn file_validator_without_configuration_accepts_any_file() {
    assert_eq!(FileValidator::new().validate(&mp3_upload(u64::MAX)), Ok(()));
}

#[test]
fn url_validator_accepts_allowed_protocol_and_returns_parsed_url() {
    let validator = UrlValidator {
        allowed_protocols: Some(vec!["http".into(), "https".into()]),
    };
    let url = validator
        .validate(&FormValue::Text("https://x.com/a.mp3".into()))
        .unwrap();
    assert_eq!(url.host_str(), Some("x.com"));
}

#[test]
fn url_validator_rejects_forbidden_protocol_with_trailing_colon() {
    let validator = UrlValidator {
        allowed_protocols: Some(vec!["http".into(), "https".into()]),
    };
    assert_eq!(
        validator.validate(&FormValue::Text("ftp://x.com/a".into())),
        Err(UrlValidationError::ForbiddenProtocol {
            actual: "ftp:".into(),
            allowed: vec!["http".into(), "https".into()],
        })
    );
}

#[test]
fn url_validator_compares_protocols_case_insensitively() {
    let validator = UrlValidator {
        allowed_protocols: Some(vec!["HTTPS".into()]),
    };
    assert!(
        validator
            .validate(&FormValue::Text("https://x.com/a".into()))
            .is_ok()
    );
}

#[test]
fn url_validator_rejects_non_string_input_with_type_name() {
    let validator = UrlValidator::new();
    assert_eq!(
        validator.validate(&FormValue::Number(42.0)),
        Err(UrlValidationError::InvalidInputType {
            actual: "number",
            expected: "string",
        })
    );
    assert_eq!(
        validator.validate(&FormValue::Bool(true)),
        Err(UrlValidationError::InvalidInputType {
            actual: "boolean",
            expected: "string",
        })
    );
}

#[test]
fn url_validator_wraps_parse_failures() {
    let validator = UrlValidator::new();
    assert!(matches!(
        validator.validate(&FormValue::Text("not a url".into())),
        Err(UrlValidationError::Parse(_))
    ));
}

#[test]
fn url_validator_without_configuration_accepts_any_scheme() {
    let validator = UrlValidator::new();
    assert!(
        validator
            .validate(&FormValue::Text("gopher://x.com/a".into()))
            .is_ok()
    );
}

#[test]
fn accepted_upload_becomes_a_local_new_track_with_a_live_url() {
    let objects = ObjectUrls::new();
    let upload = FileUpload::from_bytes("song.mp3", "audio/mpeg", vec![1, 2, 3]);

    let new_track = upload.into_new_track(&objects);

    let NewTrack::Local { url, name } = new_track else {
        panic!("upload should produce a local track");
    };
    assert_eq!(name, "song.mp3");
    assert_eq!(objects.resolve(&url).as_deref(), Some([1u8, 2, 3].as_slice()));
}
