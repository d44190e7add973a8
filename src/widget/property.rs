//! Property identifiers and the by-name property path.
//!
//! Code inside the crate uses [`Property`] and [`PropertyValue`] directly. The
//! string-keyed accessors exist for callers that only have text, such as the
//! command line and the config file.

use super::SampleWidget;
use crate::draw::ColorRgb;
use crate::host::WidgetHost;
use log::warn;
use std::fmt;

/// Properties exposed by [`SampleWidget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    /// The sample color, readable and writable.
    Color,
}

impl Property {
    /// Every property, in declaration order.
    pub const ALL: [Property; 1] = [Property::Color];

    /// Resolves a property by its canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "color" => Some(Self::Color),
            _ => None,
        }
    }

    /// Canonical name of the property.
    pub fn name(self) -> &'static str {
        match self {
            Self::Color => "color",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Typed value of a property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue {
    Color(ColorRgb),
}

impl PropertyValue {
    /// Identifier of the property this value belongs to.
    pub fn property(&self) -> Property {
        match self {
            Self::Color(_) => Property::Color,
        }
    }
}

impl<H: WidgetHost> SampleWidget<H> {
    /// Reads a property.
    pub fn property(&self, property: Property) -> PropertyValue {
        match property {
            Property::Color => PropertyValue::Color(self.color),
        }
    }

    /// Writes a property through the property path (hide/show refresh).
    pub fn set_property_value(&mut self, value: PropertyValue) {
        match value {
            PropertyValue::Color(color) => self.set_color_property(color),
        }
    }

    /// Reads a property by name. Unknown names log a warning and yield `None`.
    pub fn get_property(&self, name: &str) -> Option<PropertyValue> {
        match Property::from_name(name) {
            Some(property) => Some(self.property(property)),
            None => {
                warn!("Invalid property '{}' for SampleWidget", name);
                None
            }
        }
    }

    /// Writes a property by name from its textual value.
    ///
    /// Nothing changes and a warning is logged when the name is unknown, the
    /// value is missing, or the value does not parse.
    pub fn set_property(&mut self, name: &str, value: Option<&str>) {
        let Some(property) = Property::from_name(name) else {
            warn!("Invalid property '{}' for SampleWidget", name);
            return;
        };
        let Some(text) = value else {
            warn!("No value given for property '{}', ignoring", property);
            return;
        };

        match property {
            Property::Color => match text.parse::<ColorRgb>() {
                Ok(color) => self.set_color_property(color),
                Err(err) => warn!("Ignoring value for '{}': {}", property, err),
            },
        }
    }
}
