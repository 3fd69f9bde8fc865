//! Quoted flag list consumed by the docker entrypoint build

/// Render flags as `"a" "b" "c"`
pub fn render_flag_list<S: AsRef<str>>(flags: &[S]) -> String {
    flags
        .iter()
        .map(|flag| format!("\"{}\"", flag.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}
