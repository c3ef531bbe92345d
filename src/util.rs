/// Uppercase the first character of a string, leaving the rest untouched.
///
/// Unicode-aware: a first character whose uppercase form spans several
/// `char`s (e.g. `ß`) expands accordingly.
pub fn capitalize_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
