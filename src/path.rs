/// Split a Handlebars path expression into field segments.
///
/// Both `.` and `/` separate segments. Empty segments and `this` (any case)
/// are dropped, so `this.name`, `./name` and `name` all become `["name"]`.
pub fn path_segments(raw: &str) -> Vec<String> {
    raw.split(['.', '/'])
        .map(str::trim)
        .filter(|segment| !segment.is_empty() && !segment.eq_ignore_ascii_case("this"))
        .map(String::from)
        .collect()
}
