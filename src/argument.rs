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

/// An argument is a positional parameter to a command. It is identified by
/// its position in the list of tokens handed over by the tokenizer, not by
/// name; its name only identifies it within its owning InputDefinition, and
/// in the bound output.
///
/// The fluent setters consume and return the Argument, so a full description
/// can be built up in a single expression before the Argument is registered.
/// Once registered, an Argument is only reachable by shared reference, and is
/// therefore immutable.
#[derive(Clone, Debug)]
pub struct Argument {
    pub(crate) name: String,
    pub(crate) description: Optional<String>,
    pub(crate) is_required: bool,
    pub(crate) default_value: Optional<Value>,
}

impl Argument {
    /// Constructs a new optional Argument with the given name, and no
    /// description or default value. The name must be non-empty.
    pub fn new(name: &str) -> Result<Argument> {
        if name.is_empty() {
            return Err(Error::InvalidDefinition(
                "An argument must have a non-empty name".to_owned(),
            ));
        }
        Ok(Argument {
            name: name.to_owned(),
            description: None,
            is_required: false,
            default_value: None,
        })
    }

    /// Sets this argument's human-readable description.
    pub fn description(mut self, description: &str) -> Argument {
        self.description = Some(description.to_owned());
        self
    }

    /// Marks this argument as required.
    ///
    /// Note that the binder deliberately never rejects input which leaves a
    /// required argument unbound; this property exists for the surrounding
    /// application layer (e.g. help output) to interpret.
    pub fn required(mut self) -> Argument {
        self.is_required = true;
        self
    }

    /// Marks this argument as optional. Arguments are optional by default.
    pub fn optional(mut self) -> Argument {
        self.is_required = false;
        self
    }

    /// Sets the value this argument should be bound to when no positional
    /// token is supplied for it.
    pub fn default_value<V: Into<Value>>(mut self, value: V) -> Argument {
        self.default_value = Some(value.into());
        self
    }

    /// Returns this argument's name.
    pub fn get_name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns this argument's human-readable description, if it has one.
    pub fn get_description(&self) -> Optional<&str> {
        self.description.as_ref().map(|d| d.as_str())
    }

    /// Returns whether this argument was declared as required.
    pub fn is_required(&self) -> bool {
        self.is_required
    }

    /// Returns this argument's default value, if it has one.
    pub fn get_default_value(&self) -> Optional<&Value> {
        self.default_value.as_ref()
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(description) = self.description.as_ref() {
            write!(f, " - {}", description)?;
        }
        if let Some(default) = self.default_value.as_ref() {
            write!(f, " [Default: {}]", default)?;
        }
        Ok(())
    }
}
