use crate::{CpeName, CpeSet, CpeVersion};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn parse_for(version: CpeVersion, raw: &str) -> CpeName {
    match version {
        CpeVersion::V11 => CpeName::parse_v11(raw),
        CpeVersion::V22 => CpeName::parse_uri_22(raw),
        CpeVersion::V23 => CpeName::parse(raw),
    }
    .unwrap()
}

pub fn set_of(version: CpeVersion, names: &[&str]) -> CpeSet {
    let mut set = CpeSet::new(version);
    for raw in names {
        set.append(parse_for(version, raw)).unwrap();
    }
    set
}
