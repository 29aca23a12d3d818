//! Serde support: a name serializes as its canonical bound string and
//! deserializes through the auto-detecting parser.

use crate::name::CpeName;
use serde::{
    de::{Error, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};
use std::fmt;

impl Serialize for CpeName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CpeName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CpeNameVisitor;

        impl Visitor<'_> for CpeNameVisitor {
            type Value = CpeName;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a CPE identifier in any binding")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                CpeName::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(CpeNameVisitor)
    }
}
