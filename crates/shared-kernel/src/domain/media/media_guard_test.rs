#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::{json, Value};
    use crate::domain::media::{should_update_media, should_update_media_value, MediaCandidate};
    use crate::domain::value_objects::MediaUrl;

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[serde(default)]
        image_url: MediaCandidate,
    }

    #[test]
    fn test_absent_and_null_are_rejected() {
        assert!(!should_update_media_value(None));
        assert!(!should_update_media_value(Some(&Value::Null)));
        assert!(!should_update_media(&MediaCandidate::Missing));
        assert!(!should_update_media(&MediaCandidate::Null));
    }

    #[test]
    fn test_empty_and_whitespace_strings_are_rejected() {
        assert!(!should_update_media_value(Some(&json!(""))));
        assert!(!should_update_media_value(Some(&json!("   "))));
        assert!(!should_update_media_value(Some(&json!("\t\n "))));
    }

    #[test]
    fn test_non_string_values_are_rejected() {
        for value in [json!(42), json!({}), json!([]), json!(true), json!(0), json!(["https://a.png"])] {
            assert!(!should_update_media_value(Some(&value)), "Should reject {}", value);
        }
    }

    #[test]
    fn test_non_empty_url_is_accepted() {
        assert!(should_update_media_value(Some(&json!("https://cdn.example.com/img.png"))));
    }

    #[test]
    fn test_surrounding_whitespace_does_not_disqualify() {
        assert!(should_update_media_value(Some(&json!("  https://cdn.example.com/img.png  "))));
    }

    #[test]
    fn test_provided_variant_holding_blank_text_is_still_rejected() {
        // Construction directe : le garde reste l'arbitre final
        assert!(!should_update_media(&MediaCandidate::Provided("  ".into())));
    }

    #[test]
    fn test_guard_is_idempotent() {
        let values = [json!("https://x.png"), json!(""), json!(null), json!(7)];
        for value in &values {
            let first = should_update_media_value(Some(value));
            for _ in 0..5 {
                assert_eq!(should_update_media_value(Some(value)), first);
            }
        }
    }

    #[test]
    fn test_classification_from_text() {
        assert_eq!(MediaCandidate::from_text(""), MediaCandidate::Empty);
        assert_eq!(MediaCandidate::from_text("  "), MediaCandidate::Blank);
        assert_eq!(
            MediaCandidate::from_text(" https://a.png "),
            MediaCandidate::Provided(" https://a.png ".into())
        );
        assert_eq!(MediaCandidate::from(None::<String>), MediaCandidate::Missing);
    }

    #[test]
    fn test_deserialize_distinguishes_missing_null_and_non_string() {
        let missing: Payload = serde_json::from_str("{}").unwrap();
        let null: Payload = serde_json::from_str(r#"{"image_url": null}"#).unwrap();
        let number: Payload = serde_json::from_str(r#"{"image_url": 42}"#).unwrap();
        let object: Payload = serde_json::from_str(r#"{"image_url": {}}"#).unwrap();
        let url: Payload = serde_json::from_str(r#"{"image_url": "https://new.png"}"#).unwrap();

        assert_eq!(missing.image_url, MediaCandidate::Missing);
        assert_eq!(null.image_url, MediaCandidate::Null);
        assert_eq!(number.image_url, MediaCandidate::NonString);
        assert_eq!(object.image_url, MediaCandidate::NonString);
        assert_eq!(url.image_url, MediaCandidate::Provided("https://new.png".into()));
    }

    #[test]
    fn test_to_media_url_trims_accepted_value() {
        let url = MediaCandidate::from_text("  https://cdn.example.com/img.png ")
            .to_media_url()
            .unwrap()
            .expect("Guard should accept");
        assert_eq!(url.as_str(), "https://cdn.example.com/img.png");

        assert_eq!(MediaCandidate::Blank.to_media_url().unwrap(), None);
        assert_eq!(MediaCandidate::NonString.to_media_url().unwrap(), None);
    }

    #[test]
    fn test_guard_accepts_text_that_media_url_rejects() {
        let with_control = MediaCandidate::from_text("https://new.png\u{7}");
        let too_long = MediaCandidate::from_text(format!("https://cdn.example.com/{}", "a".repeat(MediaUrl::MAX_LEN)));

        for candidate in [with_control, too_long] {
            assert!(should_update_media(&candidate));
            assert!(candidate.to_media_url().is_err());
        }
    }
}
