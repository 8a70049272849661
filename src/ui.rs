use console::style;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

pub fn display_commit_analysis(commit_messages: &[String]) {
    println!(
        "\n{}",
        style(format!(
            "Found {} commit(s) since last tag",
            commit_messages.len()
        ))
        .bold()
    );

    for (i, message) in commit_messages.iter().take(10).enumerate() {
        let short_msg: String = message.chars().take(60).collect();
        println!("  {}. {}", i + 1, short_msg);
    }

    if commit_messages.len() > 10 {
        println!("  ... and {} more commits", commit_messages.len() - 10);
    }
}

pub fn display_version_change(current: &str, new_version: &str) {
    println!("\n{}", style("Proposed Version Change:").bold());
    println!("  From: {}", style(current).red());
    println!("  To:   {}", style(new_version).green());
}
