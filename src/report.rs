use solace::ClassifyResultVerbose;

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(input: &str, res: &ClassifyResultVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    let details = &res.details;
    let record = &res.record;

    println!("\n{}", palette.bold(palette.paint(format!("⚙  Classifying: \"{}\"", input), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Classification ━━━", ansi::GRAY));
    let category_color = if record.is_crisis { ansi::RED } else { ansi::GREEN };
    println!("  {} {}", palette.dim("category:"), palette.bold(palette.paint(details.category.name(), category_color)));

    if details.triggered.len() > 1 {
        let discarded: Vec<&str> =
            details.triggered.iter().skip(1).map(|c| c.name()).collect();
        println!("  {} {}", palette.dim("outranked:"), palette.paint(discarded.join(", "), ansi::YELLOW));
    }

    if details.matched_keywords.is_empty() {
        println!("  {} {}", palette.dim("matched:"), palette.dim("(none — fallback)"));
    } else {
        let quoted: Vec<String> =
            details.matched_keywords.iter().map(|k| format!("\"{k}\"")).collect();
        println!("  {} {}", palette.dim("matched:"), palette.paint(quoted.join(", "), ansi::BLUE));
    }

    println!("\n{}", palette.paint("━━━ Response ━━━", ansi::GRAY));
    for line in record.content.lines() {
        println!("  {line}");
    }

    if let Some(resources) = &record.resources {
        println!("\n{}", palette.paint("━━━ Resources ━━━", ansi::GRAY));
        for resource in resources {
            println!("  • {}", palette.bold(palette.paint(resource, ansi::RED)));
        }
    }

    if let Some(actions) = &record.suggested_actions {
        println!("\n{}", palette.paint("━━━ Suggested actions ━━━", ansi::GRAY));
        for action in actions {
            println!("  • {action}");
        }
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Total: {}", palette.paint(format!("{:?}", details.elapsed), ansi::GREEN));
    println!();
}
