mod common;

use guide_pdf::{CustomGuide, Error, build_custom_guide};

const PLAYBOOK: &str = r##"{
    "title": "Team Playbook",
    "subtitle": "How we write prompts",
    "toc": true,
    "sections": [
        { "title": "Why", "content": "Shared habits make reviews faster." },
        { "title": "Rules", "type": "checklist", "content": "- Name the audience\n- State the format\n\n- Give one example" },
        { "title": "Template", "type": "code", "content": "Role: ...\nTask: ...\nFormat: ..." },
        { "title": "Heads up", "type": "callout", "color": "#F59E0B", "content": "Never paste customer data." }
    ]
}"##;

#[test]
fn custom_guide_with_contents_builds() {
    let guide = CustomGuide::from_json(PLAYBOOK).unwrap();
    let generated = build_custom_guide(guide, &common::options()).unwrap();

    assert_eq!(generated.file_name, "Team-Playbook.pdf");
    // Contents end the first page, the body follows.
    assert_eq!(generated.page_count, 2);

    let text = common::pdf_text(&generated.bytes);
    for needle in ["Team Playbook", "Contents", "Rules", "Name the audience", "Never paste"] {
        assert!(text.contains(needle), "missing {needle:?}");
    }
}

#[test]
fn custom_guide_with_many_sections_keeps_contents_on_the_page() {
    let sections: Vec<String> = (1..=40)
        .map(|i| format!(r#"{{ "title": "Topic {i}", "content": "{}" }}"#, common::words(30)))
        .collect();
    let json = format!(
        r#"{{ "title": "Big Book", "toc": true, "sections": [{}] }}"#,
        sections.join(",")
    );
    let guide = CustomGuide::from_json(&json).unwrap();
    let generated = build_custom_guide(guide, &common::options()).unwrap();

    // Two contents pages, then the body.
    assert!(generated.page_count >= 4, "{} pages", generated.page_count);
    let text = common::pdf_text(&generated.bytes);
    assert!(text.contains("Topic 40"));
}

#[test]
fn unknown_section_type_fails_the_whole_guide() {
    let json = r#"{
        "title": "Quotes",
        "sections": [
            { "title": "Fine", "content": "ok" },
            { "title": "Famous", "type": "quote", "content": "To be or not to be" }
        ]
    }"#;
    let guide = CustomGuide::from_json(json).unwrap();
    let err = build_custom_guide(guide, &common::options()).unwrap_err();
    assert!(matches!(err, Error::UnknownSectionKind(ref t) if t == "quote"));
}

#[test]
fn bad_color_is_rejected() {
    let json = r#"{
        "title": "Colors",
        "sections": [{ "type": "callout", "color": "purple", "content": "x" }]
    }"#;
    let guide = CustomGuide::from_json(json).unwrap();
    assert!(matches!(
        build_custom_guide(guide, &common::options()),
        Err(Error::InvalidColor(_))
    ));
}

#[test]
fn empty_content_and_title_are_missing_fields() {
    let empty_body = r#"{ "title": "T", "sections": [{ "title": "A", "content": "  " }] }"#;
    let guide = CustomGuide::from_json(empty_body).unwrap();
    assert!(matches!(
        build_custom_guide(guide, &common::options()),
        Err(Error::MissingField("content"))
    ));

    let no_title = r#"{ "title": " ", "sections": [] }"#;
    let guide = CustomGuide::from_json(no_title).unwrap();
    assert!(matches!(
        build_custom_guide(guide, &common::options()),
        Err(Error::MissingField("title"))
    ));
}

#[test]
fn malformed_json_is_a_json_error() {
    assert!(matches!(CustomGuide::from_json("{ \"title\": 3 "), Err(Error::Json(_))));
}

#[test]
fn guide_loads_from_disk() {
    let path = std::env::temp_dir().join(format!("guide-pdf-playbook-{}.json", std::process::id()));
    std::fs::write(&path, PLAYBOOK).unwrap();
    let loaded = CustomGuide::load(&path);
    std::fs::remove_file(&path).unwrap();
    assert!(loaded.is_ok());

    let missing = CustomGuide::load(&path.with_extension("absent"));
    assert!(matches!(missing, Err(Error::Io(_))));
}
