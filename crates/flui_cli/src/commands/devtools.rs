use anyhow::Result;
use console::style;

pub fn execute(port: u16) -> Result<()> {
    println!(
        "{}",
        style(format!("Launching DevTools on port {}...", port))
            .green()
            .bold()
    );
    println!();
    println!(
        "{}",
        style("Note: DevTools integration not yet implemented").yellow()
    );
    println!("  This will be available in a future version");
    println!();
    println!("  Planned features:");
    println!("  • Visual widget inspector");
    println!("  • Performance profiling");
    println!("  • Network monitoring");
    println!("  • State debugging");

    Ok(())
}
