//! Programmatic construction of WFN-bound names.
//!
//! Values are collected as written and validated in one pass at
//! [`WfnBuilder::build`], so a builder chain never half-constructs a name.

use crate::{
    component::Component,
    grammar,
    name::{Attribute, CpeName, Naming},
    Error,
};

/// Builds a [`CpeName`] in the WFN binding.
///
/// ```
/// use cpematch::CpeName;
///
/// let name = CpeName::builder()
///     .part("a")
///     .vendor("mozilla")
///     .product("firefox")
///     .version("2.0")
///     .build()
///     .unwrap();
/// assert!(name.is_application());
/// ```
#[derive(Debug, Default)]
pub struct WfnBuilder {
    settings: Vec<(Attribute, Setting)>,
}

#[derive(Debug)]
enum Setting {
    Any,
    NotApplicable,
    Value(String),
}

macro_rules! setter {
    ($name:ident => $attr:ident) => {
        pub fn $name(mut self, value: impl Into<String>) -> Self {
            self.settings
                .push((Attribute::$attr, Setting::Value(value.into())));
            self
        }
    };
}

impl WfnBuilder {
    setter!(part => Part);
    setter!(vendor => Vendor);
    setter!(product => Product);
    setter!(version => Version);
    setter!(update => Update);
    setter!(edition => Edition);
    setter!(language => Language);
    setter!(sw_edition => SwEdition);
    setter!(target_sw => TargetSw);
    setter!(target_hw => TargetHw);
    setter!(other => Other);

    /// Sets an attribute to the logical `ANY` value explicitly.
    pub fn any(mut self, attr: Attribute) -> Self {
        self.settings.push((attr, Setting::Any));
        self
    }

    /// Sets an attribute to the logical `NA` value.
    pub fn not_applicable(mut self, attr: Attribute) -> Self {
        self.settings.push((attr, Setting::NotApplicable));
        self
    }

    /// Validates every collected value and assembles the name.
    pub fn build(self) -> Result<CpeName, Error> {
        let mut components: [Component; 11] = Default::default();
        let mut seen = [false; 11];
        for (attr, setting) in self.settings {
            if seen[attr.index()] {
                return Err(Error::malformed(format!("duplicate attribute `{attr}`")));
            }
            seen[attr.index()] = true;
            components[attr.index()] = match setting {
                Setting::Any => Component::Any,
                Setting::NotApplicable => Component::NotApplicable,
                Setting::Value(raw) => {
                    Component::Value(grammar::normalize_value(&raw, attr.as_str())?)
                }
            };
        }
        grammar::validate_part(&components[Attribute::Part.index()])?;
        Ok(CpeName::from_parts(Naming::Wfn, components))
    }
}
