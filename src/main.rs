faculty_rs::prelude! {}

use faculty_rs::{demo, report};

fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Warn)
        .env()
        .without_timestamps()
        .init()?;

    let (univ, f_idx) = demo::university()?;
    log::debug!("university is");
    for line in univ.to_pretty_string().lines() {
        log::debug!("| {}", line)
    }

    report::write_report(&mut io::stdout().lock(), &univ[f_idx])?;
    report::wait_for_key(&mut io::stdin().lock())?;
    Ok(())
}
