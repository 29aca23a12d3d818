use crate::{Attribute, Component, CpeName, CpeVersion, Error, Naming};

#[test]
fn application_section() {
    let name = CpeName::parse_v11("cpe:///mozilla:firefox:2.0::osx:es-es").unwrap();

    assert_eq!(Naming::Uri11, name.naming());
    assert_eq!(CpeVersion::V11, name.version());
    assert!(name.is_application());
    assert!(!name.is_operating_system());
    assert_eq!(
        Component::Value("mozilla".to_owned()),
        name.get(Attribute::Vendor)
    );
    assert_eq!(
        Component::Value("2.0".to_owned()),
        name.get(Attribute::Version)
    );
    assert_eq!(&Component::Any, name.component(Attribute::Update));
    assert_eq!(
        Component::Value("osx".to_owned()),
        name.get(Attribute::Edition)
    );
    assert_eq!(
        Component::Value("es-es".to_owned()),
        name.get(Attribute::Language)
    );
    assert_eq!("cpe:///mozilla:firefox:2.0::osx:es-es", name.as_str());
}

#[test]
fn operating_system_section() {
    let name = CpeName::parse_v11("cpe://microsoft:windows:2000").unwrap();
    assert!(name.is_operating_system());
    assert_eq!("cpe://microsoft:windows:2000", name.as_str());
}

#[test]
fn hardware_section() {
    let name = CpeName::parse_v11("cpe:/cisco::3825").unwrap();
    assert!(name.is_hardware());
    assert_eq!(&Component::Any, name.component(Attribute::Product));
    assert_eq!(
        Component::Value("3825".to_owned()),
        name.get(Attribute::Version)
    );
}

#[test]
fn or_list_component() {
    let name = CpeName::parse_v11("cpe://microsoft:windows:2000!2003").unwrap();
    assert_eq!(
        &Component::OrList(vec!["2000".to_owned(), "2003".to_owned()]),
        name.component(Attribute::Version)
    );
    // an OR wrapper counts as one component
    assert_eq!(4, name.component_count());
    assert_eq!("cpe://microsoft:windows:2000!2003", name.as_str());
}

#[test]
fn not_component() {
    let name = CpeName::parse_v11("cpe://microsoft:windows:~2000").unwrap();
    assert_eq!(
        &Component::NotValue("2000".to_owned()),
        name.component(Attribute::Version)
    );
    assert_eq!("cpe://microsoft:windows:~2000", name.as_str());
}

#[test]
fn combined_operators_rejected() {
    assert_eq!(
        Err(Error::MalformedIdentifier {
            reason: "operators '~' and '!' used together".to_owned()
        }),
        CpeName::parse_v11("cpe://microsoft:windows:~2000!2007")
    );
}

#[test]
fn multiple_parts_rejected() {
    assert!(CpeName::parse_v11("cpe:/cisco/microsoft:windows").is_err());
}

#[test]
fn multiple_elements_rejected() {
    assert!(CpeName::parse_v11("cpe://microsoft:windows;redhat:linux").is_err());
}

#[test]
fn empty_identifier() {
    let name = CpeName::parse_v11("cpe:/").unwrap();
    assert_eq!(0, name.component_count());
    assert!(name.is_application() && name.is_operating_system() && name.is_hardware());
    assert_eq!("cpe:/", name.as_str());
}

#[test]
fn wildcard_markers_rejected() {
    assert!(CpeName::parse_v11("cpe://vendor:prod%02").is_err());
}

#[test]
fn empty_or_operand_rejected() {
    assert!(CpeName::parse_v11("cpe://microsoft:windows:2000!").is_err());
}
