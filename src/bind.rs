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

use crate::definition::InputDefinition;
use crate::error::*;
use crate::value::Value;
use log::debug;
use std::collections::HashMap;
use std::option::Option as Optional;

/// Returns the bindings every bind starts from: the default value of each
/// argument and option which has one, plus false for each option which
/// expects no explicit value (a flag which was not passed is off).
fn default_bindings(
    definition: &InputDefinition,
) -> (HashMap<String, Value>, HashMap<String, Value>) {
    let arguments = definition
        .arguments()
        .filter_map(|a| {
            a.get_default_value()
                .map(|dv| (a.get_name().to_owned(), dv.clone()))
        })
        .collect();
    let options = definition
        .options()
        .filter_map(|o| match o.get_default_value() {
            Some(dv) => Some((o.get_name().to_owned(), dv.clone())),
            None if !o.get_expects_value() => {
                Some((o.get_name().to_owned(), Value::Boolean(false)))
            }
            None => None,
        })
        .collect();
    (arguments, options)
}

/// Folds the given positional tokens onto the definition's arguments, in
/// input order: the token at index i is bound under the name of the argument
/// registered at index i. A token with no argument at its index is a hard
/// error, never silently dropped. Tokens for *fewer* than all of the declared
/// arguments are accepted; the unmatched arguments are simply left unbound.
fn bind_positional(
    definition: &InputDefinition,
    tokens: &[String],
    bound: &mut HashMap<String, Value>,
) -> Result<()> {
    for (i, token) in tokens.iter().enumerate() {
        let argument = match definition.argument_at(i) {
            Some(a) => a,
            None => {
                if definition.argument_names().is_empty() {
                    return Err(Error::NoArgumentsExpected(token.clone()));
                }
                return Err(Error::TooManyArguments(
                    definition.argument_names().join(", "),
                ));
            }
        };
        debug!(
            "Binding positional token '{}' to argument '{}'",
            token,
            argument.get_name()
        );
        bound.insert(argument.get_name().to_owned(), Value::String(token.clone()));
    }
    Ok(())
}

/// Folds the given option tokens onto the definition's options. Each key is
/// resolved to a canonical option name (shortcut match first, then exact name
/// match), and its value is bound under that name. A key which resolves to no
/// registered option is a hard error, never passed through.
fn bind_options(
    definition: &InputDefinition,
    tokens: &HashMap<String, Value>,
    bound: &mut HashMap<String, Value>,
) -> Result<()> {
    for (key, value) in tokens {
        let name = match definition.resolve_option_name(key) {
            Some(n) => n,
            None => return Err(Error::UnexpectedOption(key.clone())),
        };
        debug!("Binding option token '{}' to option '{}'", key, name);
        bound.insert(name.to_owned(), value.clone());
    }
    Ok(())
}

/// BoundInput is the output of binding one invocation's tokens against an
/// InputDefinition: a mapping from argument name to value, and a mapping from
/// option name to value. It is created fresh per bind and holds no reference
/// to the definition it was bound against.
#[derive(Clone, Debug)]
pub struct BoundInput {
    arguments: HashMap<String, Value>,
    options: HashMap<String, Value>,
}

impl BoundInput {
    /// Constructs a new BoundInput by binding the given tokens - positional
    /// tokens in order, plus the tokenizer's key / value option map - against
    /// the given definition.
    ///
    /// The caller is expected to have already stripped any leading
    /// command-name selector token; every positional token given here is
    /// bound positionally.
    ///
    /// Binding is a pure function of its inputs. On failure the error
    /// describes the offending token, and no partially-bound output is
    /// produced.
    pub fn new(
        definition: &InputDefinition,
        positional: &[String],
        options: &HashMap<String, Value>,
    ) -> Result<BoundInput> {
        let (mut bound_arguments, mut bound_options) = default_bindings(definition);
        bind_positional(definition, positional, &mut bound_arguments)?;
        bind_options(definition, options, &mut bound_options)?;
        Ok(BoundInput {
            arguments: bound_arguments,
            options: bound_options,
        })
    }

    /// Returns the value bound to the argument with the given name, or None
    /// if no token or default was bound to it.
    pub fn argument(&self, name: &str) -> Optional<&Value> {
        self.arguments.get(name)
    }

    /// Returns true if a value is bound to the argument with the given name.
    pub fn has_argument(&self, name: &str) -> bool {
        self.arguments.contains_key(name)
    }

    /// Returns the full argument name to value mapping.
    pub fn arguments(&self) -> &HashMap<String, Value> {
        &self.arguments
    }

    /// Returns the value bound to the option with the given name, or None if
    /// no token or default was bound to it. The name must be the option's
    /// canonical name; shortcuts are resolved away during binding.
    pub fn option(&self, name: &str) -> Optional<&Value> {
        self.options.get(name)
    }

    /// Returns true if a value is bound to the option with the given name.
    pub fn has_option(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    /// Returns the full option name to value mapping.
    pub fn options(&self) -> &HashMap<String, Value> {
        &self.options
    }
}

/// Binds the given tokens against the given definition. This is simply the
/// free-function spelling of BoundInput::new.
pub fn bind(
    definition: &InputDefinition,
    positional: &[String],
    options: &HashMap<String, Value>,
) -> Result<BoundInput> {
    BoundInput::new(definition, positional, options)
}
