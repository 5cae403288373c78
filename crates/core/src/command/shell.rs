//! Shell quoting for the legacy command-line form

/// Quote a single argument for the host shell: `sh` on Unix, `cmd.exe` on
/// Windows.
pub fn escape_arg(arg: &str) -> String {
    if cfg!(windows) {
        escape_cmd_arg(arg)
    } else {
        escape_posix_arg(arg)
    }
}

/// Quote a single argument so a POSIX shell reads it back as one literal word.
///
/// The argument is wrapped in single quotes; embedded single quotes are
/// closed, backslash-escaped and reopened (`'` becomes `'\''`).
pub fn escape_posix_arg(arg: &str) -> String {
    let mut escaped = String::with_capacity(arg.len() + 2);
    escaped.push('\'');
    for ch in arg.chars() {
        if ch == '\'' {
            escaped.push_str("'\\''");
        } else {
            escaped.push(ch);
        }
    }
    escaped.push('\'');
    escaped
}

/// Quote a single argument for `cmd.exe`.
///
/// The argument is wrapped in double quotes, so `&`, `|`, `<`, `>` and `^`
/// lose their meaning. `"`, `%` and `!` cannot be escaped reliably inside
/// quotes and are replaced by spaces. Trailing backslashes are doubled so
/// they do not escape the closing quote.
pub fn escape_cmd_arg(arg: &str) -> String {
    let mut escaped = String::with_capacity(arg.len() + 2);
    escaped.push('"');
    for ch in arg.chars() {
        match ch {
            '"' | '%' | '!' => escaped.push(' '),
            _ => escaped.push(ch),
        }
    }
    let trailing = arg.chars().rev().take_while(|&ch| ch == '\\').count();
    escaped.extend(std::iter::repeat_n('\\', trailing));
    escaped.push('"');
    escaped
}

/// Escape each argument and join them with spaces
pub fn join_escaped<I, S>(args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .map(|arg| escape_arg(arg.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}
