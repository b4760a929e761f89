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

use thiserror::Error;

/// Error represents the various errors which can come up while defining a
/// command's input, or while binding raw tokens against such a definition.
/// Every failure is terminal for the registration or bind call which produced
/// it; no partial state is left behind, and nothing is retried.
///
/// The Display strings are user-facing, and are intended to be surfaced
/// verbatim to a terminal.
#[derive(Debug, Error)]
pub enum Error {
    /// A parameter was constructed with an empty or otherwise invalid name.
    #[error("Invalid parameter definition: {0}")]
    InvalidDefinition(String),
    /// An argument with this name is already registered.
    #[error("An argument named '{0}' already exists")]
    DuplicateArgument(String),
    /// An option with this name is already registered.
    #[error("An option named '{0}' already exists")]
    DuplicateOption(String),
    /// Another registered option already claims this shortcut.
    #[error("An option with shortcut '{0}' already exists")]
    DuplicateShortcut(String),
    /// A positional token was supplied, but the definition declares no
    /// arguments at all.
    #[error("No arguments expected, got '{0}'")]
    NoArgumentsExpected(String),
    /// More positional tokens were supplied than the definition declares
    /// arguments. The payload is the full list of expected argument names, in
    /// declaration order.
    #[error("Too many arguments, expected arguments: {0}")]
    TooManyArguments(String),
    /// An option token's key matches no registered option name or shortcut.
    #[error("The option '{0}' does not exist")]
    UnexpectedOption(String),
}

/// A Result type which uses argbind's internal Error type.
pub type Result<T> = std::result::Result<T, Error>;
