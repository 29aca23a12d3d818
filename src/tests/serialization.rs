use crate::{CpeName, Naming};
use serde::Deserialize;

#[test]
fn serialize_as_raw_string() {
    let name = CpeName::parse_uri("cpe:/a:mozilla:firefox:2.0").unwrap();
    assert_eq!(
        r#""cpe:/a:mozilla:firefox:2.0""#,
        serde_json::to_string(&name).unwrap()
    );
}

#[test]
fn deserialize_detects_binding() {
    let name: CpeName =
        serde_json::from_str(r#""cpe:2.3:a:mozilla:firefox:2.0:*:*:*:*:*:*:*""#).unwrap();
    assert_eq!(Naming::FormattedString, name.naming());

    let name: CpeName = serde_json::from_str(r#""cpe:///mozilla:firefox:2.0""#).unwrap();
    assert_eq!(Naming::Uri11, name.naming());
}

#[test]
fn deserialize_rejects_malformed() {
    assert!(serde_json::from_str::<CpeName>(r#""not-a-cpe""#).is_err());
    assert!(serde_json::from_str::<CpeName>("42").is_err());
}

#[test]
fn round_trip_through_json() {
    let name = CpeName::parse_wfn(r#"wfn:[part="a",vendor="mozilla",product="firefox"]"#).unwrap();
    let json = serde_json::to_string(&name).unwrap();
    let back: CpeName = serde_json::from_str(&json).unwrap();
    assert_eq!(name, back);
    assert_eq!(name.as_str(), back.as_str());
}

#[test]
fn deserialize_in_struct_field() {
    #[derive(Deserialize)]
    struct Entry {
        cpe: CpeName,
    }

    let entry: Entry =
        serde_json::from_str(r#"{"cpe":"cpe:/o:microsoft:windows:vista"}"#).unwrap();
    assert_eq!("cpe:/o:microsoft:windows:vista", entry.cpe.as_str());
}
