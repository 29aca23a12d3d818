use crate::{Attribute, Component, CpeName, Error, Naming};

#[test]
fn build_basic() {
    let name = CpeName::builder()
        .part("a")
        .vendor("Mozilla")
        .product("firefox")
        .version("2.0")
        .build()
        .unwrap();

    assert_eq!(Naming::Wfn, name.naming());
    assert_eq!(
        r#"wfn:[part="a",vendor="mozilla",product="firefox",version="2.0"]"#,
        name.as_str()
    );
    assert_eq!(
        CpeName::parse_wfn(r#"wfn:[part="a",vendor="mozilla",product="firefox",version="2.0"]"#)
            .unwrap(),
        name
    );
}

#[test]
fn build_logical_values() {
    let name = CpeName::builder()
        .part("a")
        .vendor("adobe")
        .not_applicable(Attribute::Update)
        .any(Attribute::Edition)
        .build()
        .unwrap();

    assert_eq!(
        &Component::NotApplicable,
        name.component(Attribute::Update)
    );
    assert_eq!(&Component::Any, name.component(Attribute::Edition));
    assert_eq!(
        r#"wfn:[part="a",vendor="adobe",update=NA,edition=ANY]"#,
        name.as_str()
    );
}

#[test]
fn setter_order_does_not_matter() {
    let name = CpeName::builder()
        .product("firefox")
        .part("a")
        .vendor("mozilla")
        .build()
        .unwrap();
    // attributes render in canonical order regardless of call order
    assert_eq!(r#"wfn:[part="a",vendor="mozilla",product="firefox"]"#, name.as_str());
}

#[test]
fn duplicate_attribute() {
    let result = CpeName::builder().part("a").part("o").build();
    assert!(matches!(result, Err(Error::MalformedIdentifier { .. })));
}

#[test]
fn invalid_part() {
    assert!(CpeName::builder().part("q").build().is_err());
}

#[test]
fn invalid_character() {
    assert_eq!(
        Err(Error::MalformedIdentifier {
            reason: "invalid character in attribute vendor".to_owned()
        }),
        CpeName::builder().part("a").vendor("foo bar").build()
    );
}

#[test]
fn escaped_values() {
    let name = CpeName::builder()
        .part("a")
        .vendor(r"foo\$bar")
        .build()
        .unwrap();
    assert_eq!(
        Component::Value(r"foo\$bar".to_owned()),
        name.get(Attribute::Vendor)
    );
}
