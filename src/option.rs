// Copyright 2015 Axel Rasmussen
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::*;
use crate::value::Value;
use std::fmt;
use std::option::Option as Optional;

/// An option is a non-positional parameter to a command, identified in the
/// token stream by its name or by one of its shortcuts. Options which expect
/// a value carry whatever value the tokenizer associated with their key;
/// options which do not are simple flags, bound to false unless they appear
/// in the input.
///
/// As with Argument, the fluent setters consume and return the Option, and
/// the Option becomes immutable once it has been registered with an
/// InputDefinition.
#[derive(Clone, Debug)]
pub struct Option {
    pub(crate) name: String,
    pub(crate) shortcuts: Vec<String>,
    pub(crate) description: Optional<String>,
    pub(crate) default_value: Optional<Value>,
    pub(crate) expects_value: bool,
}

impl Option {
    /// Constructs a new flag-style Option with the given name, and no
    /// shortcuts, description or default value. The name must be non-empty.
    pub fn new(name: &str) -> Result<Option> {
        if name.is_empty() {
            return Err(Error::InvalidDefinition(
                "An option must have a non-empty name".to_owned(),
            ));
        }
        Ok(Option {
            name: name.to_owned(),
            shortcuts: vec![],
            description: None,
            default_value: None,
            expects_value: false,
        })
    }

    /// Adds a shortcut for this option. A shortcut is an alternate alias,
    /// typically a single character (e.g. "v" for "verbose"), although
    /// multi-character shortcuts are allowed. Shortcuts must be non-empty,
    /// and must be unique across the owning definition; uniqueness against
    /// other options is enforced when this option is registered.
    pub fn shortcut(mut self, shortcut: &str) -> Result<Option> {
        if shortcut.is_empty() {
            return Err(Error::InvalidDefinition(
                "An option shortcut must be non-empty".to_owned(),
            ));
        }
        if self.shortcuts.iter().any(|s| s == shortcut) {
            return Err(Error::DuplicateShortcut(shortcut.to_owned()));
        }
        self.shortcuts.push(shortcut.to_owned());
        Ok(self)
    }

    /// Sets this option's human-readable description.
    pub fn description(mut self, description: &str) -> Option {
        self.description = Some(description.to_owned());
        self
    }

    /// Marks this option as expecting an explicit value. Options which do
    /// not expect a value are flags, whose bound value defaults to false.
    pub fn expects_value(mut self) -> Option {
        self.expects_value = true;
        self
    }

    /// Sets the value this option should be bound to when no option token is
    /// supplied for it.
    pub fn default_value<V: Into<Value>>(mut self, value: V) -> Option {
        self.default_value = Some(value.into());
        self
    }

    /// Returns this option's name.
    pub fn get_name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns this option's shortcuts, in the order they were added.
    pub fn get_shortcuts(&self) -> &[String] {
        self.shortcuts.as_slice()
    }

    /// Returns true if the given string is one of this option's shortcuts.
    pub fn has_shortcut(&self, shortcut: &str) -> bool {
        self.shortcuts.iter().any(|s| s == shortcut)
    }

    /// Returns this option's human-readable description, if it has one.
    pub fn get_description(&self) -> Optional<&str> {
        self.description.as_ref().map(|d| d.as_str())
    }

    /// Returns this option's default value, if it has one.
    pub fn get_default_value(&self) -> Optional<&Value> {
        self.default_value.as_ref()
    }

    /// Returns whether this option expects an explicit value.
    pub fn get_expects_value(&self) -> bool {
        self.expects_value
    }
}

impl fmt::Display for Option {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "--{}", self.name)?;
        for shortcut in &self.shortcuts {
            write!(f, ", -{}", shortcut)?;
        }
        if let Some(description) = self.description.as_ref() {
            write!(f, " - {}", description)?;
        }
        Ok(())
    }
}
