//! Command dispatch: command name to tagged handler.
//!
//! The built-in table is closed and static. Project-specific commands are
//! supplied separately as [`CommandSet`](crate::traits::CommandSet)s and
//! consulted only when the built-in table has no entry.

pub mod handler;
mod table;

pub use handler::{
    Arity, Category, Check, Condition, Handler, Input, Operands, Query, page_load_wait, wait_loop,
};

use std::collections::HashMap;
use std::sync::LazyLock;

static REGISTRY: LazyLock<HashMap<&'static str, Handler>> =
    LazyLock::new(|| table::BUILTIN.iter().copied().collect());

/// Get the built-in handler for a command name.
pub fn lookup(command: &str) -> Option<&'static Handler> {
    REGISTRY.get(command)
}

/// All built-in commands with their handlers, in table order.
pub fn builtin_commands() -> impl Iterator<Item = (&'static str, &'static Handler)> {
    table::BUILTIN.iter().map(|(name, handler)| (*name, handler))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_has_no_duplicates() {
        let mut seen = HashSet::new();
        for (name, _) in builtin_commands() {
            assert!(seen.insert(name), "duplicate command {name}");
        }
        assert_eq!(seen.len(), REGISTRY.len());
    }

    #[test]
    fn test_lookup() {
        assert_eq!(
            lookup("clickAndWait"),
            Some(&Handler::ActionAndWait {
                method: "click",
                arity: Arity::Target
            })
        );
        assert!(lookup("doesNotExist").is_none());
        assert!(lookup("ClickAndWait").is_none());
    }

    #[test]
    fn test_typing_extensions() {
        for (name, function) in [
            ("TypeFCKEditor", "doTypeFCKEditor"),
            ("TypeRandom", "doTypeRandom"),
            ("TypeRandomEmail", "doTypeRandomEmail"),
            ("TypeRepeated", "doTypeRepeated"),
        ] {
            assert_eq!(
                lookup(name),
                Some(&Handler::Extension {
                    function,
                    arity: Arity::TargetValue,
                    wait: false,
                }),
                "{name}"
            );
        }
    }

    #[test]
    fn test_prefix_matches_category() {
        for (name, handler) in builtin_commands() {
            let expected = if name.starts_with("assert") {
                Some(Category::Assertion)
            } else if name.starts_with("verify") {
                Some(Category::Verification)
            } else if name.starts_with("store") {
                Some(Category::Store)
            } else {
                None
            };
            if let Some(category) = expected {
                assert_eq!(handler.category(), category, "{name}");
            }
        }
    }

    #[test]
    fn test_every_wait_loop_names_its_command() {
        let variant = &crate::output::LEGACY;
        for (name, handler) in builtin_commands() {
            if handler.category() != Category::Wait {
                continue;
            }
            let ops = Operands::new(name, "id=x", "y");
            let statements = handler.emit(&ops, variant).unwrap();
            assert_eq!(statements.len(), 1, "{name}");
            let crate::ir::Statement::Block(lines) = &statements[0] else {
                panic!("{name} must emit a polling block");
            };
            assert!(lines[2].contains(&format!("fail(\"{name} reached a timeout")));
        }
    }
}
