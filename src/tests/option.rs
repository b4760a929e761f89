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
use crate::option::Option;
use crate::value::Value;

fn option_lookup_works(definition: &InputDefinition, query: &str, expected_name: &str) -> bool {
    definition
        .option(query)
        .map_or(false, |o| o.get_name() == expected_name)
}

#[test]
fn test_construction_requires_nonempty_name() {
    let result = Option::new("");
    assert!(match result {
        Err(Error::InvalidDefinition(_)) => true,
        _ => false,
    });
}

#[test]
fn test_fluent_construction() {
    let option = Option::new("verbose")
        .unwrap()
        .shortcut("v")
        .unwrap()
        .description("Enable verbose output")
        .expects_value()
        .default_value(false);

    assert_eq!("verbose", option.get_name());
    assert_eq!(&["v".to_owned()], option.get_shortcuts());
    assert!(option.has_shortcut("v"));
    assert!(!option.has_shortcut("verbose"));
    assert_eq!(Some("Enable verbose output"), option.get_description());
    assert!(option.get_expects_value());
    assert_eq!(Some(&Value::Boolean(false)), option.get_default_value());
}

#[test]
fn test_options_are_flags_by_default() {
    let option = Option::new("verbose").unwrap();
    assert!(!option.get_expects_value());
    assert!(option.get_shortcuts().is_empty());
    assert!(option.get_default_value().is_none());
}

#[test]
fn test_shortcut_must_be_nonempty() {
    let result = Option::new("verbose").unwrap().shortcut("");
    assert!(match result {
        Err(Error::InvalidDefinition(_)) => true,
        _ => false,
    });
}

#[test]
fn test_duplicate_shortcut_on_one_option() {
    let result = Option::new("verbose").unwrap().shortcut("v").unwrap().shortcut("v");
    assert!(match result {
        Err(Error::DuplicateShortcut(shortcut)) => shortcut == "v",
        _ => false,
    });
}

#[test]
fn test_option_lookup_by_name_or_shortcut() {
    let mut definition = InputDefinition::new();
    definition
        .add_option(Option::new("foo").unwrap().shortcut("o").unwrap())
        .unwrap();
    definition
        .add_option(Option::new("bar").unwrap().shortcut("r").unwrap())
        .unwrap();
    definition
        .add_option(Option::new("baz").unwrap().shortcut("z").unwrap())
        .unwrap();
    definition
        .add_option(Option::new("zab").unwrap().shortcut("Z").unwrap())
        .unwrap();
    definition
        .add_option(Option::new("foobar").unwrap().shortcut("f").unwrap())
        .unwrap();
    definition.add_option(Option::new("raboof").unwrap()).unwrap();

    assert!(option_lookup_works(&definition, "foo", "foo"));
    assert!(option_lookup_works(&definition, "o", "foo"));
    assert!(option_lookup_works(&definition, "bar", "bar"));
    assert!(option_lookup_works(&definition, "r", "bar"));
    assert!(option_lookup_works(&definition, "baz", "baz"));
    assert!(option_lookup_works(&definition, "z", "baz"));
    assert!(option_lookup_works(&definition, "zab", "zab"));
    assert!(option_lookup_works(&definition, "Z", "zab"));
    assert!(option_lookup_works(&definition, "foobar", "foobar"));
    assert!(option_lookup_works(&definition, "f", "foobar"));
    assert!(option_lookup_works(&definition, "raboof", "raboof"));

    assert!(!option_lookup_works(&definition, "foo", "bar"));
    assert!(!option_lookup_works(&definition, "syn", "syn"));
    assert!(!option_lookup_works(&definition, "s", "syn"));
    assert!(!option_lookup_works(&definition, "F", "raboof"));
}

#[test]
fn test_display() {
    let option = Option::new("verbose")
        .unwrap()
        .shortcut("v")
        .unwrap()
        .description("Enable verbose output");
    assert_eq!(
        "--verbose, -v - Enable verbose output",
        format!("{}", option)
    );
}
