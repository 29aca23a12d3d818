use crate::{Attribute, Component, CpeName, Naming};

#[test]
fn cross_binding_equivalence() {
    let legacy = CpeName::parse_v11("cpe:///mozilla:firefox:2.0::osx:es-es").unwrap();
    let uri = CpeName::parse_uri_22("cpe:/a:mozilla:firefox:2.0::osx:es-es").unwrap();
    let wfn = CpeName::parse_wfn(
        r#"wfn:[part="a",vendor="mozilla",product="firefox",version="2.0",edition="osx",language="es-es"]"#,
    )
    .unwrap();

    assert_eq!(legacy, uri);
    assert_eq!(uri, wfn);
    assert_eq!(legacy, wfn);
}

#[test]
fn uri_to_formatted_string() {
    let name = CpeName::parse_uri("cpe:/a:microsoft:internet_explorer:8.0.6001:beta").unwrap();
    assert_eq!(
        "cpe:2.3:a:microsoft:internet_explorer:8.0.6001:beta:*:*:*:*:*:*",
        name.as_formatted_string()
    );
}

#[test]
fn formatted_string_to_uri() {
    let name = CpeName::parse_formatted_string(
        "cpe:2.3:a:microsoft:internet_explorer:8.0.6001:beta:*:*:*:*:*:*",
    )
    .unwrap();
    assert_eq!(
        "cpe:/a:microsoft:internet_explorer:8.0.6001:beta",
        name.as_uri()
    );
}

#[test]
fn packed_edition_to_wfn() {
    let name =
        CpeName::parse_uri("cpe:/a:hp:insight_diagnostics:7.4.0.1570::~~online~win2003~x64~")
            .unwrap();
    assert_eq!(
        r#"wfn:[part="a",vendor="hp",product="insight_diagnostics",version="7.4.0.1570",update=ANY,edition=ANY,sw_edition="online",target_sw="win2003",target_hw="x64",other=ANY]"#,
        name.as_wfn()
    );
    assert_eq!(
        "cpe:2.3:a:hp:insight_diagnostics:7.4.0.1570:*:*:*:online:win2003:x64:*",
        name.as_formatted_string()
    );
}

#[test]
fn wfn_specials_percent_encode() {
    let name = CpeName::parse_wfn(r#"wfn:[part="a",vendor="foo\$bar",product="insight"]"#).unwrap();
    assert_eq!("cpe:/a:foo%24bar:insight", name.as_uri());
}

#[test]
fn legacy_operators_to_wfn() {
    let name = CpeName::parse_v11("cpe://microsoft:windows:2000!2003").unwrap();
    assert_eq!(
        r#"wfn:[part="o",vendor="microsoft",product="windows",version="2000\!2003"]"#,
        name.as_wfn()
    );
}

#[test]
fn legacy_operators_to_uri() {
    let or_list = CpeName::parse_v11("cpe://microsoft:windows:2000!2003").unwrap();
    assert_eq!("cpe:/o:microsoft:windows:2000%212003", or_list.as_uri());

    // a negated edition must not look like a packed edition on reparse
    let negated = CpeName::parse_v11("cpe://microsoft:windows:2000::~home").unwrap();
    assert_eq!("cpe:/o:microsoft:windows:2000::%7ehome", negated.as_uri());
    let reparsed = CpeName::parse_uri(&negated.as_uri()).unwrap();
    assert_eq!(
        Component::Value(r"\~home".to_owned()),
        reparsed.get(Attribute::Edition)
    );
}

#[test]
fn to_wfn_rebinds() {
    let name = CpeName::parse_uri("cpe:/a:mozilla:firefox:2.0").unwrap();
    let wfn = name.to_wfn();
    assert_eq!(Naming::Wfn, wfn.naming());
    assert_eq!(name, wfn);
    assert_eq!(
        r#"wfn:[part="a",vendor="mozilla",product="firefox",version="2.0"]"#,
        wfn.as_str()
    );
}

#[test]
fn render_parse_idempotence() {
    let inputs = [
        "cpe:///mozilla:firefox:2.0::osx:es-es",
        "cpe://redhat:enterprise_linux:3::as",
        "cpe:/o:microsoft:windows_2000::sp4:fr",
        "cpe:/a:hp:insight_diagnostics:7.4.0.1570::~~online~win2003~x64~",
        "cpe:2.3:o:linux:linux_kernel:2.6.0:*:*:*:*:*:*:*",
        r#"wfn:[part="o",vendor="linux",product="linux_kernel",version="2\.6\.0"]"#,
    ];
    for input in inputs {
        let name = CpeName::parse(input).unwrap();
        let reparsed = CpeName::parse(name.as_str()).unwrap();
        assert_eq!(name, reparsed);
        assert_eq!(name.as_str(), reparsed.as_str());
    }
}

#[test]
fn from_str_detects_binding() {
    let fs: CpeName = "cpe:2.3:a:mozilla:firefox:2.0:*:*:*:*:*:*:*".parse().unwrap();
    assert_eq!(Naming::FormattedString, fs.naming());

    let uri: CpeName = "cpe:/a:mozilla:firefox:2.0".parse().unwrap();
    assert_eq!(Naming::Uri23, uri.naming());

    let wfn: CpeName = r#"wfn:[part="a",vendor="mozilla"]"#.parse().unwrap();
    assert_eq!(Naming::Wfn, wfn.naming());

    let legacy: CpeName = "cpe:///mozilla:firefox:2.0".parse().unwrap();
    assert_eq!(Naming::Uri11, legacy.naming());

    assert!("not a cpe".parse::<CpeName>().is_err());
}
