use colored::Colorize;

/// Two fractional digits with a fixed decimal separator, whatever the host locale.
pub fn decimal(val: f64, separator: char) -> String {
    let s = format!("{val:.2}");
    if separator == '.' {
        s
    } else {
        s.replace('.', &separator.to_string())
    }
}

pub fn warn_line(msg: &str) -> String {
    msg.yellow().to_string()
}

pub fn error_line(msg: &str) -> String {
    msg.red().to_string()
}

pub fn ok_line(msg: &str) -> String {
    msg.green().to_string()
}
