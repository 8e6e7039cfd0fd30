use shape::Value;

/// Classify a command line argument into the most specific value it spells.
///
/// Anything spelled as a decimal integer stays an integer, however large.
pub(crate) fn classify(input: &str) -> Value<'_> {
    if is_integer(input) {
        return match input.parse::<i128>() {
            Ok(value) => Value::Int(value),
            Err(..) => Value::BigInt(input),
        };
    }

    if let Ok(value) = input.parse::<f64>() {
        return Value::Float(value);
    }

    if let Ok(value) = input.parse::<bool>() {
        return Value::Bool(value);
    }

    Value::Str(input)
}

/// Test for an optional sign followed by at least one decimal digit.
fn is_integer(input: &str) -> bool {
    let digits = input
        .strip_prefix(['+', '-'])
        .unwrap_or(input);

    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
