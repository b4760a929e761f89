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

#![deny(
    anonymous_parameters,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![warn(bare_trait_objects, unreachable_pub, unused_qualifications)]

//! argbind is a library for declaring the input a command-line application
//! accepts - its positional arguments and named options - and for binding the
//! weakly-tokenized tokens of one invocation against that declaration.
//!
//! It deliberately does not tokenize argv itself: the caller hands over an
//! ordered list of positional tokens and a key / value map of option tokens,
//! as produced by whatever tokenizer it uses, and gets back either a fully
//! bound set of values or a descriptive, typed error.

/// argument describes a single positional parameter of a command.
pub mod argument;
/// bind implements the engine which folds raw tokens onto an InputDefinition.
pub mod bind;
/// definition provides the registry of a command's declared parameters.
pub mod definition;
/// error defines error types specific to argbind.
pub mod error;
/// option describes a single named parameter of a command.
pub mod option;
/// value defines the primitive value type arguments and options are bound to.
pub mod value;

#[cfg(test)]
mod tests;

// Re-export the most commonly used symbols, to allow using this library with
// just one "use".

pub use crate::argument::Argument;
pub use crate::bind::{bind, BoundInput};
pub use crate::definition::{ArgumentBuilder, InputDefinition, OptionBuilder};
pub use crate::error::{Error, Result};
pub use crate::option::Option;
pub use crate::value::Value;
