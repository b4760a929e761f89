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

use crate::argument::Argument;
use crate::error::*;
use crate::option::Option;
use crate::value::Value;
use std::collections::HashMap;
use std::option::Option as Optional;

/// An InputDefinition is the registry of all of the parameters a single
/// command accepts: an ordered set of Arguments (the registration order is
/// the positional index) and an unordered set of Options.
///
/// The definition owns its uniqueness invariants: no two arguments share a
/// name, no two options share a name, and no two options share a shortcut.
/// Registrations which would violate one of these fail without modifying the
/// definition at all.
///
/// A definition is intended to be fully built before any input is bound
/// against it; binding borrows it immutably and never modifies it.
#[derive(Clone, Debug, Default)]
pub struct InputDefinition {
    arguments: Vec<Argument>,
    argument_indices: HashMap<String, usize>,
    options: HashMap<String, Option>,
    // Secondary index, maintained on every option registration, so shortcut
    // resolution and collision checks don't rescan every option's shortcuts.
    shortcuts: HashMap<String, String>,
}

impl InputDefinition {
    /// Constructs a new, empty InputDefinition.
    pub fn new() -> InputDefinition {
        InputDefinition::default()
    }

    /// Registers the given Argument with this definition. The argument
    /// becomes addressable at the next free positional index. Fails if an
    /// argument with the same name is already registered.
    pub fn add_argument(&mut self, argument: Argument) -> Result<()> {
        if self.argument_indices.contains_key(argument.get_name()) {
            return Err(Error::DuplicateArgument(argument.get_name().to_owned()));
        }
        self.argument_indices
            .insert(argument.get_name().to_owned(), self.arguments.len());
        self.arguments.push(argument);
        Ok(())
    }

    /// Registers the given Option with this definition. Fails if an option
    /// with the same name is already registered, or if any of the given
    /// option's shortcuts is already claimed by a registered option. On
    /// failure the definition is left unmodified.
    pub fn add_option(&mut self, option: Option) -> Result<()> {
        if self.options.contains_key(option.get_name()) {
            return Err(Error::DuplicateOption(option.get_name().to_owned()));
        }
        for shortcut in option.get_shortcuts() {
            if self.shortcuts.contains_key(shortcut) {
                return Err(Error::DuplicateShortcut(shortcut.clone()));
            }
        }

        for shortcut in option.get_shortcuts() {
            self.shortcuts
                .insert(shortcut.clone(), option.get_name().to_owned());
        }
        self.options.insert(option.get_name().to_owned(), option);
        Ok(())
    }

    /// Registers a new argument with the given name, returning a builder
    /// which can be used to further describe it in place. The argument is
    /// fully registered (and positionally addressable) as soon as this
    /// function returns.
    pub fn define_argument(&mut self, name: &str) -> Result<ArgumentBuilder<'_>> {
        self.add_argument(Argument::new(name)?)?;
        let index = self.arguments.len() - 1;
        Ok(ArgumentBuilder {
            definition: self,
            index: index,
        })
    }

    /// Registers a new option with the given name, returning a builder which
    /// can be used to further describe it in place.
    pub fn define_option(&mut self, name: &str) -> Result<OptionBuilder<'_>> {
        self.add_option(Option::new(name)?)?;
        Ok(OptionBuilder {
            definition: self,
            name: name.to_owned(),
        })
    }

    /// Returns true if an argument with the given name is registered.
    pub fn has_argument(&self, name: &str) -> bool {
        self.argument_indices.contains_key(name)
    }

    /// Returns true if an argument is registered at the given positional
    /// index. Indices are zero-based, in registration order.
    pub fn has_argument_at(&self, index: usize) -> bool {
        index < self.arguments.len()
    }

    /// Returns the registered argument with the given name, or None. Absence
    /// is not an error; callers decide whether it is.
    pub fn argument(&self, name: &str) -> Optional<&Argument> {
        self.argument_indices
            .get(name)
            .map(|&index| &self.arguments[index])
    }

    /// Returns the registered argument at the given positional index, or
    /// None.
    pub fn argument_at(&self, index: usize) -> Optional<&Argument> {
        self.arguments.get(index)
    }

    /// Returns the names of all registered arguments, in declaration order.
    pub fn argument_names(&self) -> Vec<&str> {
        self.arguments.iter().map(|a| a.get_name()).collect()
    }

    /// Returns an Iterator over the registered arguments, in declaration
    /// order.
    pub fn arguments(&self) -> impl Iterator<Item = &Argument> {
        self.arguments.iter()
    }

    /// Returns true if the given string is the name or a shortcut of a
    /// registered option.
    pub fn has_option(&self, name: &str) -> bool {
        self.options.contains_key(name) || self.shortcuts.contains_key(name)
    }

    /// Returns the registered option whose name or shortcut matches the
    /// given string, or None. Absence is not an error; callers decide
    /// whether it is.
    pub fn option(&self, name: &str) -> Optional<&Option> {
        self.resolve_option_name(name)
            .and_then(|n| self.options.get(n))
    }

    /// Returns an Iterator over the registered options, in arbitrary order.
    pub fn options(&self) -> impl Iterator<Item = &Option> {
        self.options.values()
    }

    /// Resolves an option token key to the canonical name of the option it
    /// addresses: a shortcut match takes precedence, then an exact name
    /// match. Returns None if the key matches neither.
    pub(crate) fn resolve_option_name<'a>(&'a self, key: &'a str) -> Optional<&'a str> {
        if let Some(name) = self.shortcuts.get(key) {
            return Some(name.as_str());
        }
        if self.options.contains_key(key) {
            return Some(key);
        }
        None
    }

    fn option_mut(&mut self, name: &str) -> &mut Option {
        // Only reachable through a builder, whose option is always
        // registered.
        self.options.get_mut(name).unwrap()
    }
}

/// An ArgumentBuilder is a fluent handle for describing an argument which has
/// already been registered with a definition. It holds an index into the
/// definition's storage, and mutates the argument in place.
pub struct ArgumentBuilder<'d> {
    definition: &'d mut InputDefinition,
    index: usize,
}

impl<'d> ArgumentBuilder<'d> {
    /// Sets the argument's human-readable description.
    pub fn description(self, description: &str) -> ArgumentBuilder<'d> {
        self.definition.arguments[self.index].description = Some(description.to_owned());
        self
    }

    /// Marks the argument as required.
    pub fn required(self) -> ArgumentBuilder<'d> {
        self.definition.arguments[self.index].is_required = true;
        self
    }

    /// Marks the argument as optional. Arguments are optional by default.
    pub fn optional(self) -> ArgumentBuilder<'d> {
        self.definition.arguments[self.index].is_required = false;
        self
    }

    /// Sets the argument's default value.
    pub fn default_value<V: Into<Value>>(self, value: V) -> ArgumentBuilder<'d> {
        self.definition.arguments[self.index].default_value = Some(value.into());
        self
    }
}

/// An OptionBuilder is a fluent handle for describing an option which has
/// already been registered with a definition. It holds the option's name,
/// and mutates the definition's storage in place.
pub struct OptionBuilder<'d> {
    definition: &'d mut InputDefinition,
    name: String,
}

impl<'d> OptionBuilder<'d> {
    /// Adds a shortcut for the option. Fails if the shortcut is empty, or if
    /// any registered option (including this one) already claims it; the
    /// definition's shortcut index is updated on success.
    pub fn shortcut(self, shortcut: &str) -> Result<OptionBuilder<'d>> {
        if shortcut.is_empty() {
            return Err(Error::InvalidDefinition(
                "An option shortcut must be non-empty".to_owned(),
            ));
        }
        if self.definition.shortcuts.contains_key(shortcut) {
            return Err(Error::DuplicateShortcut(shortcut.to_owned()));
        }
        self.definition
            .shortcuts
            .insert(shortcut.to_owned(), self.name.clone());
        self.definition
            .option_mut(&self.name)
            .shortcuts
            .push(shortcut.to_owned());
        Ok(self)
    }

    /// Sets the option's human-readable description.
    pub fn description(self, description: &str) -> OptionBuilder<'d> {
        self.definition.option_mut(&self.name).description = Some(description.to_owned());
        self
    }

    /// Marks the option as expecting an explicit value.
    pub fn expects_value(self) -> OptionBuilder<'d> {
        self.definition.option_mut(&self.name).expects_value = true;
        self
    }

    /// Sets the option's default value.
    pub fn default_value<V: Into<Value>>(self, value: V) -> OptionBuilder<'d> {
        self.definition.option_mut(&self.name).default_value = Some(value.into());
        self
    }
}
