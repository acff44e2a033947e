use receipt_points::{Receipt, ScoreResultVerbose};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

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

pub fn print_run(receipt: &Receipt, run: &ScoreResultVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("🧾 Scoring: \"{}\"", receipt.retailer), ansi::CYAN)));
    println!(
        "  {} {}  {} {} {}  {} {}",
        palette.dim("total:"),
        palette.paint(receipt.total.to_string(), ansi::YELLOW),
        palette.dim("purchased:"),
        palette.paint(receipt.purchase_date.format("%Y-%m-%d").to_string(), ansi::YELLOW),
        palette.paint(receipt.purchase_time.format("%H:%M").to_string(), ansi::YELLOW),
        palette.dim("items:"),
        palette.paint(receipt.items.len().to_string(), ansi::YELLOW),
    );

    println!("\n{}", palette.paint("━━━ Rules ━━━", ansi::GRAY));
    print_rules(run, &palette);

    println!("\n{}", palette.paint("━━━ Breakdown ━━━", ansi::GRAY));
    if run.result.breakdown.is_empty() {
        println!("{}", palette.dim("  No rules contributed"));
    } else {
        for (idx, contribution) in run.result.breakdown.iter().enumerate() {
            println!(
                "  {} {} {} {}",
                palette.paint(format!("[{}]", idx), ansi::GRAY),
                palette.bold(palette.paint(format!("{:>3}", contribution.points), ansi::GREEN)),
                palette.dim("│"),
                contribution.reason,
            );
        }
    }

    println!("\n{}", palette.paint("━━━ Total ━━━", ansi::GRAY));
    println!(
        "  Points: {}  │  Elapsed: {}",
        palette.bold(palette.paint(run.result.points.to_string(), ansi::GREEN)),
        palette.dim(format!("{:?}", run.details.total)),
    );
    println!();
}

fn print_rules(run: &ScoreResultVerbose, palette: &ansi::Palette) {
    if run.details.rules.is_empty() {
        println!("{}", palette.dim("  No rules active"));
        return;
    }

    for rule in &run.details.rules {
        let outcome = if rule.points > 0 {
            palette.paint(format!("✓ +{}", rule.points), ansi::GREEN)
        } else {
            palette.dim("✗ 0".to_string())
        };
        println!(
            "  {} {}  {} {}",
            palette.paint(format!("{:<18}", rule.rule), ansi::BLUE),
            outcome,
            palette.dim(format!("{:?}", rule.duration)),
            palette.dim(format!("({} lines)", rule.lines)),
        );
    }
}
