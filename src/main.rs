// passby: pointer versus value semantics, shown through addresses and values

use passby::constants::{SAMPLE_SLICE, SAMPLE_TEXT};
use passby::driver::{DemoConfig, Driver};
use passby::memory::layout::{describe_string, render_layouts};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("Running pass-by demo...");

    let mut driver = Driver::new(DemoConfig::default());
    let report = driver.run();

    if !report.address_stable() {
        eprintln!(
            "Warning: address of '{}' changed between checkpoints",
            report.variable_name()
        );
    }

    let mut terminal = driver.into_terminal();

    terminal.heading("Checkpoint summary:");
    for line in report.render_summary() {
        terminal.raw(line);
    }

    terminal.heading("Type layouts (bytes):");
    for line in render_layouts() {
        terminal.raw(line);
    }

    describe_string(SAMPLE_TEXT, SAMPLE_SLICE, &mut terminal);

    terminal.flush_stdout()?;

    eprintln!(
        "Done. {} checkpoints recorded.",
        report.checkpoints().len()
    );

    Ok(())
}
