//! Key command handler: inspect the hardware key-code table

use sticky_calc::keys::{keycode, Modifiers};

use crate::commands::KeyArgs;

/// Describes what a key code produces
#[must_use]
pub fn describe_key(code: u32, modifiers: Modifiers) -> String {
    keycode::translate(code, modifiers).map_or_else(|| "unmapped".to_string(), |key| key.name())
}

/// Executes the key command
#[must_use]
pub fn execute_key(args: &KeyArgs) -> String {
    let modifiers = Modifiers::new(args.shift, args.alt);
    let described = describe_key(args.code, modifiers);
    tracing::debug!(code = args.code, ?modifiers, key = %described, "key translated");
    described
}
