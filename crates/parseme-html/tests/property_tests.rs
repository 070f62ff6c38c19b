//! Tests for the attribute property model.

use parseme_html::{Property, PropertyError, PropertyKind, properties, tokenize};

// ========== Construction ==========

#[test]
fn test_boolean_construction_coerces_non_literal() {
    let property = Property::new(PropertyKind::Boolean, "random", "yes").unwrap();
    assert_eq!(property.value(), "true");
    assert_eq!(property.boolean_value(), Ok(true));
}

#[test]
fn test_boolean_construction_keeps_false() {
    let property = Property::new(PropertyKind::Boolean, "checked", "false").unwrap();
    assert_eq!(property.value(), "false");
    assert_eq!(property.boolean_value(), Ok(false));
}

#[test]
fn test_value_construction_strips_quotes() {
    let double = Property::value_of("lang", "\"en-US\"").unwrap();
    assert_eq!(double.value(), "en-US");
    let single = Property::value_of("lang", "'en-US'").unwrap();
    assert_eq!(single.value(), "en-US");
}

#[test]
fn test_mismatched_quotes_are_kept() {
    let property = Property::value_of("title", "\"oops'").unwrap();
    assert_eq!(property.value(), "\"oops'");
}

#[test]
fn test_name_is_trimmed() {
    let property = Property::value_of("  lang ", "en").unwrap();
    assert_eq!(property.name(), "lang");
}

#[test]
fn test_empty_name_is_rejected() {
    assert_eq!(
        Property::value_of("   ", "x"),
        Err(PropertyError::EmptyName)
    );
}

#[test]
fn test_invalid_names_are_rejected() {
    assert_eq!(
        Property::value_of("1abc", "x"),
        Err(PropertyError::InvalidName {
            name: "1abc".to_string()
        })
    );
    assert!(matches!(
        Property::value_of("xml:lang", "en"),
        Err(PropertyError::InvalidName { .. })
    ));
    assert!(matches!(
        Property::flag("a b"),
        Err(PropertyError::InvalidName { .. })
    ));
}

// ========== Setters ==========

#[test]
fn test_boolean_value_of_value_property_fails() {
    let property = Property::value_of("lang", "en").unwrap();
    assert_eq!(property.boolean_value(), Err(PropertyError::BooleanValue));
}

#[test]
fn test_set_value_on_boolean_validates() {
    let mut property = Property::flag("hidden").unwrap();
    assert_eq!(
        property.set_value("maybe"),
        Err(PropertyError::InvalidBooleanValue {
            value: "maybe".to_string()
        })
    );
    assert_eq!(property.value(), "true");

    property.set_value("false").unwrap();
    assert_eq!(property.boolean_value(), Ok(false));
}

#[test]
fn test_set_kind_to_boolean_coerces_value() {
    let mut property = Property::value_of("hidden", "until-found").unwrap();
    property.set_kind(PropertyKind::Boolean);
    assert!(property.is_boolean());
    assert_eq!(property.value(), "true");

    let mut literal = Property::value_of("hidden", "false").unwrap();
    literal.set_kind(PropertyKind::Boolean);
    assert_eq!(literal.value(), "false");
}

#[test]
fn test_set_kind_to_value_keeps_value() {
    let mut property = Property::flag("open").unwrap();
    property.set_kind(PropertyKind::Value);
    assert_eq!(property.kind(), PropertyKind::Value);
    assert_eq!(property.value(), "true");
}

#[test]
fn test_failed_set_name_keeps_old_name() {
    let mut property = Property::value_of("id", "main").unwrap();
    assert!(property.set_name("").is_err());
    assert_eq!(property.name(), "id");
}

#[test]
fn test_display() {
    assert_eq!(
        Property::value_of("lang", "\"en\"").unwrap().to_string(),
        "lang=\"en\""
    );
    assert_eq!(Property::flag("hidden").unwrap().to_string(), "hidden");
    assert_eq!(
        Property::new(PropertyKind::Boolean, "hidden", "false")
            .unwrap()
            .to_string(),
        "hidden=\"false\""
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        PropertyError::InvalidName {
            name: "9x".to_string()
        }
        .to_string(),
        "the property name '9x' is not valid"
    );
    assert_eq!(
        PropertyError::EmptyName.to_string(),
        "property name must not be empty"
    );
}

// ========== From tokens ==========

#[test]
fn test_properties_from_tokens() {
    let tokens = tokenize(br#"<html activated lang="en-US">"#);
    let props: Vec<Property> = properties(&tokens).map(Result::unwrap).collect();

    assert_eq!(
        props,
        vec![
            Property::flag("activated").unwrap(),
            Property::value_of("lang", "en-US").unwrap(),
        ]
    );
}

#[test]
fn test_properties_of_self_closing_tag() {
    let tokens = tokenize(br#"<img src="x.png" alt='' />"#);
    let props: Vec<Property> = properties(&tokens).map(Result::unwrap).collect();

    assert_eq!(props.len(), 2);
    assert_eq!(props[0].name(), "src");
    assert_eq!(props[0].value(), "x.png");
    assert_eq!(props[1].name(), "alt");
    assert_eq!(props[1].value(), "");
}

#[test]
fn test_properties_stop_at_tag_end() {
    let tokens = tokenize(b"<a href=x>text<b c>");
    let names: Vec<String> = properties(&tokens)
        .map(|p| p.unwrap().name().to_string())
        .collect();
    assert_eq!(names, vec!["href"]);
}

#[test]
fn test_bad_property_does_not_hide_the_rest() {
    let tokens = tokenize(b"<div 9x=1 id=main>");
    let results: Vec<_> = properties(&tokens).collect();

    assert_eq!(results.len(), 2);
    assert!(matches!(results[0], Err(PropertyError::InvalidName { .. })));
    assert_eq!(results[1], Property::value_of("id", "main"));
}

#[test]
fn test_no_properties() {
    let tokens = tokenize(b"<p>");
    assert_eq!(properties(&tokens).count(), 0);
    assert_eq!(properties(&[]).count(), 0);
}
