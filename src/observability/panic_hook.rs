//! Structured crash report printed when the binary panics.

use super::context::{get_current_context, in_recovery_scope, PipelineContext};
use std::panic::PanicHookInfo;
use tracing::Span;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const WIDTH: usize = 76;

/// Replace the default panic hook. Call once, early in `main`.
///
/// Panics raised inside a recovery scope are turned into failure responses by
/// the engine, so they only get a debug log line instead of a crash report.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        if in_recovery_scope() {
            log::debug!(
                "Recovered panic at {}: {}",
                info.location()
                    .map_or_else(|| "unknown".to_string(), |l| l.to_string()),
                extract_panic_message(info)
            );
            return;
        }
        print_crash_report(info);
    }));
}

fn print_crash_report(info: &PanicHookInfo<'_>) {
    let context = get_current_context();

    eprintln!();
    print_rule('╔', '╗');
    print_line("ARCHMAP CRASH REPORT");
    print_rule('╠', '╣');
    print_line(&format!("Version: {}", VERSION));
    print_line(&format!("Platform: {}", std::env::consts::OS));
    print_line(&format!(
        "Time: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));
    print_rule('╠', '╣');
    print_line(&format!("PANIC: {}", extract_panic_message(info)));
    if let Some(location) = info.location() {
        print_line(&format!(
            "Location: {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        ));
    }
    print_rule('╠', '╣');
    for line in context_lines(&context) {
        print_line(&line);
    }
    if let Some(metadata) = Span::current().metadata() {
        print_line(&format!("  Span: {}", metadata.name()));
    }
    print_rule('╠', '╣');
    if std::env::var("RUST_BACKTRACE").is_ok() {
        print_line("STACK TRACE:");
        print_rule('╚', '╝');
        eprintln!();
        eprintln!("{}", std::backtrace::Backtrace::capture());
    } else {
        print_line("Run with RUST_BACKTRACE=1 for stack trace");
        print_rule('╚', '╝');
    }
}

fn context_lines(context: &PipelineContext) -> Vec<String> {
    let mut lines = vec!["PIPELINE CONTEXT:".to_string()];
    match context.phase {
        Some(phase) => lines.push(format!("  Phase: {}", phase)),
        None => lines.push("  Phase: (not set, crash occurred outside the pipeline)".to_string()),
    }
    if let Some(architecture) = context.architecture {
        lines.push(format!("  Architecture: {}", architecture));
    }
    lines
}

fn print_rule(left: char, right: char) {
    eprintln!("{}{}{}", left, "═".repeat(WIDTH + 2), right);
}

fn print_line(text: &str) {
    eprintln!("║ {:<width$} ║", truncate(text, WIDTH), width = WIDTH);
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
