//! Post-mapping override rules.
//!
//! Rules run after base field mapping, in declaration order, each one
//! independently. They may read source attributes that are not in the
//! field mapping (the free-text companions are never mapped themselves).

use netdoku_model::{OverrideRule, Record, SelectArm, Value};

use crate::decode::DecodeCache;

/// Apply every rule for one destination class to a staging record.
pub fn apply_rules(
    rules: &[OverrideRule],
    source_record: &Record,
    staging: &mut Record,
    cache: &DecodeCache,
) {
    for rule in rules {
        match rule {
            OverrideRule::OtherFallback {
                field,
                replacement,
                triggers,
            } => {
                let triggered = staging
                    .get(field)
                    .and_then(Value::as_str)
                    .is_some_and(|current| is_trigger(current, triggers));
                if triggered {
                    // An absent or empty replacement keeps the trigger
                    // value, no blanking.
                    if let Some(value) = source_record.get(replacement)
                        && is_present(value)
                    {
                        staging.set(field.clone(), value.clone());
                    }
                }
            }
            OverrideRule::DerivedSelect {
                target,
                source,
                fallback,
                triggers,
            } => {
                if let Some(value) =
                    select_decoded(source_record, source, fallback, triggers, cache)
                    && is_present(&value)
                {
                    staging.set(target.clone(), value);
                }
            }
            OverrideRule::Discriminated {
                target,
                discriminant,
                arms,
            } => {
                if let Some(value) = discriminated_value(source_record, discriminant, arms, cache)
                    && is_present(&value)
                {
                    staging.set(target.clone(), value);
                }
            }
        }
    }
}

fn is_trigger(value: &str, triggers: &[String]) -> bool {
    triggers.iter().any(|trigger| trigger.as_str() == value)
}

/// Empty text counts as absent wherever a rule reads a companion field or
/// writes a derived attribute.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Text(text) => !text.is_empty(),
        _ => true,
    }
}

/// Decoded value of `field`, with its own trigger→free-text substitution.
/// When the decoded value is a trigger and the fallback field is absent or
/// empty, the decoded value stands.
fn select_decoded(
    source_record: &Record,
    field: &str,
    fallback: &str,
    triggers: &[String],
    cache: &DecodeCache,
) -> Option<Value> {
    let raw = source_record.get(field)?;
    let decoded = cache.decode(field, raw);
    let triggered = decoded
        .as_str()
        .is_some_and(|value| is_trigger(value, triggers));
    if triggered
        && let Some(replacement) = source_record.get(fallback)
        && is_present(replacement)
    {
        return Some(replacement.clone());
    }
    Some(decoded)
}

/// Pick the first arm whose keyword occurs in the decoded discriminant
/// (case-insensitive substring); no matching arm yields nothing.
fn discriminated_value(
    source_record: &Record,
    discriminant: &str,
    arms: &[SelectArm],
    cache: &DecodeCache,
) -> Option<Value> {
    let raw = source_record.get(discriminant)?;
    let decoded = cache.decode(discriminant, raw).to_string().to_lowercase();
    let arm = arms.iter().find(|arm| {
        arm.keywords
            .iter()
            .any(|keyword| decoded.contains(keyword.to_lowercase().as_str()))
    })?;
    select_decoded(source_record, &arm.source, &arm.fallback, &arm.triggers, cache)
}
