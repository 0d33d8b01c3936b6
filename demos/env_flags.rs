//! Reading feature flags from the process environment.
//!
//! Run with: FEATURE_SEARCH=yes FEATURE_BETA=0 cargo run --example env_flags

use semantic_bool::{to_on_or_off_with, FormatOptions, Selector, Value};
use std::env;
use std::error::Error;

const FLAGS: [&str; 4] = [
    "FEATURE_SEARCH",
    "FEATURE_BETA",
    "FEATURE_EXPORT",
    "FEATURE_AUDIT",
];

fn main() -> Result<(), Box<dyn Error>> {
    // Env-style parsing; unset variables print as "unset"
    let options = FormatOptions::new().by(Selector::EnvBool).unknown("unset");

    for flag in FLAGS {
        let value: Value = env::var(flag).ok().into();
        let state = to_on_or_off_with(&value, options.clone())?;
        println!("{flag:<16} {state}");
    }

    // The same raw input read under every rule
    println!();
    let beta = env::var("FEATURE_BETA").unwrap_or_else(|_| "Off".to_string());
    let raw = Value::from(beta);
    for selector in Selector::ALL {
        println!("{:<18} {}", selector.name(), selector.apply(&raw)?);
    }

    Ok(())
}
