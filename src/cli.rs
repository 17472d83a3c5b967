use colored::*;

pub const VERSION: &str = "Red Hat Status Checker v0.1.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Quick,
    Simple,
    Full,
}

pub struct Settings {
    pub mode: Mode,
}

pub fn parse_mode(arg: &str) -> Option<Mode> {
    match arg {
        "quick" => Some(Mode::Quick),
        "simple" => Some(Mode::Simple),
        "full" => Some(Mode::Full),
        _ => None,
    }
}

pub fn parse_args() -> Settings {
    let mut mode = Mode::Quick;
    for arg in std::env::args().skip(1) {
        if arg == "--help" {
            println!(
                "{}",
                "Usage: redhat_status_cli [quick|simple|full]".yellow().bold()
            );
            std::process::exit(0);
        }
        if arg == "--version" || arg == "-v" {
            println!("{}", VERSION.yellow().bold());
            std::process::exit(0);
        }
        match parse_mode(&arg) {
            Some(m) => mode = m,
            None => {
                eprintln!(
                    "{}",
                    format!("Error: unknown mode '{}' (expected quick, simple or full)", arg)
                        .red()
                        .bold()
                );
                std::process::exit(1);
            }
        }
    }
    Settings { mode }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_mode_accepts_the_three_modes() {
        assert_eq!(parse_mode("quick"), Some(Mode::Quick));
        assert_eq!(parse_mode("simple"), Some(Mode::Simple));
        assert_eq!(parse_mode("full"), Some(Mode::Full));
    }

    #[test]
    fn parse_mode_rejects_anything_else() {
        assert_eq!(parse_mode("verbose"), None);
        assert_eq!(parse_mode(""), None);
        assert_eq!(parse_mode("Quick"), None);
    }
}
