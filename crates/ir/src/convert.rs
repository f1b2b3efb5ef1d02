use lexical::NumberFormatBuilder;

/// Converts a number to a string, according to the ECMAScript spec.
///
/// Object-literal keys written as numbers are normalized to string keys with
/// exactly this rendering, so `{1e1: x}` and `{'10': x}` collide.
///
/// See spec:
/// - [7.1.17 ToString][https://tc39.es/ecma262/#sec-tostring]
/// - [6.1.6.1.20 Number::toString][https://tc39.es/ecma262/#sec-numeric-types-number-tostring]
pub fn ecma_number_to_string(v: f64) -> String {
    const FORMAT: u128 = NumberFormatBuilder::new()
        .required_exponent_sign(true)
        .build();
    let options = lexical::WriteFloatOptions::builder()
        .trim_floats(true)
        .inf_string(Some(b"Infinity"))
        .build()
        .unwrap();
    lexical::to_string_with_options::<_, FORMAT>(v, &options)
}
