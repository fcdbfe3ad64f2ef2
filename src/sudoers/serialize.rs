/// Reassemble sudoers text from edited defaults, edited aliases, and the
/// untouched passthrough lines.
///
/// Output order is fixed: every `Defaults` line, then every alias, then every
/// passthrough line in its original order. Interleaving from the source file
/// is not reproduced, so a Defaults line that sat between rule lines moves to
/// the top of the file.
///
/// Aliases are emitted as `<name> = <definition>`; `name` is written as given,
/// so it must already carry the `<Kind>_Alias` keyword when the result is
/// meant to be installed. Nothing re-attaches the keyword here.
pub fn serialize(
    defaults: &[(&str, &str)],
    aliases: &[(&str, &str)],
    passthrough: &[&str],
) -> String {
    let mut lines: Vec<String> =
        Vec::with_capacity(defaults.len() + aliases.len() + passthrough.len());

    for (key, value) in defaults {
        if value.is_empty() {
            lines.push(format!("Defaults {key}"));
        } else {
            lines.push(format!("Defaults {key}={value}"));
        }
    }
    for (name, definition) in aliases {
        lines.push(format!("{name} = {definition}"));
    }
    lines.extend(passthrough.iter().map(|l| l.to_string()));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
