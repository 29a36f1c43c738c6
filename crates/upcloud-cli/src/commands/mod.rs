pub mod delete_servers;
pub mod delete_storage;

use colored::Colorize;

/// Result of a best-effort cleanup run
#[derive(Debug, Default)]
pub struct Summary {
    pub deleted: Vec<String>,
    pub failed: Vec<(String, String)>,
}

impl Summary {
    pub fn record_deleted(&mut self, what: String) {
        println!("  {} deleted {}", "✓".green(), what);
        self.deleted.push(what);
    }

    pub fn record_failure(&mut self, what: String, err: impl std::fmt::Display) {
        let reason = err.to_string();
        eprintln!("  {} {}: {}", "✗".red(), what, reason);
        self.failed.push((what, reason));
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    pub fn print(&self) {
        println!(
            "{}",
            format!(
                "Deleted {}, failed {}",
                self.deleted.len(),
                self.failed.len()
            )
            .bold()
        );
        for (what, reason) in &self.failed {
            println!("  • {} ({})", what.yellow(), reason);
        }
    }
}
