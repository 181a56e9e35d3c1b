mod cli;

pub(crate) use cli::Cli;

/// Pull the global `--user <name>` flag out of the arguments, returning it
/// alongside the remaining arguments (program name excluded).
pub(crate) fn split_user_flag(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut user = None;
    let mut rest = Vec::new();
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--user" {
            user = iter.next().cloned();
        } else {
            rest.push(arg.clone());
        }
    }
    (user, rest)
}

/// Value following `name`, e.g. `--month 2024-03`.
pub(crate) fn flag_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == name)
        .map(|w| w[1].as_str())
}

pub(crate) fn has_flag(args: &[String], name: &str) -> bool {
    args.iter().any(|a| a == name)
}

/// Arguments that are neither flags nor the values of `valued` flags.
pub(crate) fn positional<'a>(args: &'a [String], valued: &[&str]) -> Vec<&'a str> {
    let mut out = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if valued.contains(&arg.as_str()) {
            iter.next();
        } else if !arg.starts_with("--") {
            out.push(arg.as_str());
        }
    }
    out
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}
