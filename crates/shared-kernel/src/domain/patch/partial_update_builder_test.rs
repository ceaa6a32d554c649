#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::domain::media::MediaCandidate;
    use crate::domain::patch::{PartialUpdateBuilder, PatchValue};
    use crate::domain::value_objects::MediaUrl;

    #[test]
    fn test_blank_media_is_excluded_and_other_fields_kept() {
        let update = PartialUpdateBuilder::new("vendors")
            .set("business_name", "New Name")
            .media("image_url", &MediaCandidate::from_text(""))
            .build();

        assert_eq!(update.columns(), vec!["business_name"]);
        assert!(!update.contains("image_url"));
        assert_eq!(update.skipped_media(), &["image_url"]);
    }

    #[test]
    fn test_each_media_column_is_guarded_independently() {
        let update = PartialUpdateBuilder::new("vendors")
            .media("image_url", &MediaCandidate::from_text("https://new.png"))
            .media("featured_image_url", &MediaCandidate::Null)
            .media("og_image_url", &MediaCandidate::from_text("   "))
            .build();

        assert_eq!(update.columns(), vec!["image_url"]);
        assert_eq!(update.skipped_media(), &["featured_image_url", "og_image_url"]);
        assert_eq!(
            update.value_of("image_url"),
            Some(&PatchValue::Text("https://new.png".into()))
        );
    }

    #[test]
    fn test_accepted_media_is_trimmed() {
        let update = PartialUpdateBuilder::new("products")
            .media("image_url", &MediaCandidate::from_text("  https://cdn.example.com/a.png  "))
            .build();

        assert_eq!(
            update.value_of("image_url"),
            Some(&PatchValue::Text("https://cdn.example.com/a.png".into()))
        );
    }

    #[test]
    fn test_set_opt_skips_omitted_fields() {
        let update = PartialUpdateBuilder::new("vendors")
            .set_opt("description", None::<String>)
            .set_opt("is_active", Some(false))
            .build();

        assert_eq!(update.columns(), vec!["is_active"]);
        assert_eq!(update.value_of("is_active"), Some(&PatchValue::Bool(false)));
    }

    #[test]
    fn test_last_assignment_wins() {
        let update = PartialUpdateBuilder::new("vendors")
            .set("business_name", "First")
            .set("business_name", "Second")
            .build();

        assert_eq!(update.assignments().len(), 1);
        assert_eq!(update.value_of("business_name"), Some(&PatchValue::Text("Second".into())));
    }

    #[test]
    fn test_dynamic_field_entry_point_applies_guard_only_to_media() {
        let payload = json!({
            "business_name": "New Name",
            "description": null,
            "image_url": "",
            "og_image_url": 42,
            "featured_image_url": "https://new.png"
        });

        let update = PartialUpdateBuilder::new("vendors")
            .field("business_name", payload.get("business_name"), false)
            .field("description", payload.get("description"), false)
            .field("phone", payload.get("phone"), false)
            .field("image_url", payload.get("image_url"), true)
            .field("og_image_url", payload.get("og_image_url"), true)
            .field("featured_image_url", payload.get("featured_image_url"), true)
            .build();

        assert_eq!(
            update.columns(),
            vec!["business_name", "description", "featured_image_url"]
        );
        // null explicite sur un champ non média = effacement volontaire
        assert_eq!(update.value_of("description"), Some(&PatchValue::NullableText(None)));
        assert_eq!(update.skipped_media(), &["image_url", "og_image_url"]);
    }

    #[test]
    fn test_media_accepted_after_skip_is_no_longer_reported_as_skipped() {
        let update = PartialUpdateBuilder::new("vendors")
            .media("image_url", &MediaCandidate::Empty)
            .media("image_url", &MediaCandidate::from_text("https://new.png"))
            .build();

        assert!(update.contains("image_url"));
        assert!(update.skipped_media().is_empty());
    }

    #[test]
    fn test_empty_update() {
        let update = PartialUpdateBuilder::new("vendors")
            .media("image_url", &MediaCandidate::Missing)
            .build();

        assert!(update.is_empty());
        assert_eq!(update.table(), "vendors");
    }

    #[test]
    fn test_media_rejected_by_media_url_never_reaches_the_update() {
        let too_long = format!("https://cdn.example.com/{}", "a".repeat(MediaUrl::MAX_LEN));

        let update = PartialUpdateBuilder::new("vendors")
            .set("business_name", "New Name")
            .media("image_url", &MediaCandidate::from_text("https://new.png\u{7}"))
            .media("og_image_url", &MediaCandidate::from_text(too_long))
            .build();

        assert_eq!(update.columns(), vec!["business_name"]);
        assert_eq!(update.skipped_media(), &["image_url", "og_image_url"]);
    }
}
