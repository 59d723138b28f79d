//! Logging helpers that keep user-provided text on a single log line and keep
//! contact details out of the log files.

/// Escape a string for single-line logging:
/// - `\n` => `\\n`
/// - `\r` => `\\r`
/// - `\t` => `\\t`
/// - backslash => `\\\\`
///   Long values (lead notes, practice answers) are cut at `MAX_PREVIEW` chars.
pub fn escape_log(s: &str) -> String {
    const MAX_PREVIEW: usize = 200;
    let mut out = String::with_capacity(s.len().min(MAX_PREVIEW) + 8);
    for (count, ch) in s.chars().enumerate() {
        if count >= MAX_PREVIEW {
            out.push('…');
            break;
        }
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                use std::fmt::Write;
                let _ = write!(&mut out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

/// Mask the local part of an email address, keeping its first character and
/// the domain: `joao@empresa.com` => `j***@empresa.com`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, escape_log(domain))
        }
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_newlines_and_truncates() {
        let s = "Cliente disse:\n\"está caro\"\t";
        assert_eq!(escape_log(s), "Cliente disse:\\n\"está caro\"\\t");

        let long = "a".repeat(250);
        let esc = escape_log(&long);
        assert!(esc.ends_with('…'));
        assert_eq!(esc.chars().count(), 201);
    }

    #[test]
    fn masks_email_local_part() {
        assert_eq!(mask_email("joao@empresa.com"), "j***@empresa.com");
        assert_eq!(mask_email("sem-arroba"), "***");
        assert_eq!(mask_email("@dominio.com"), "***@dominio.com");
    }
}
