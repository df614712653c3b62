use anyhow::Result;
use console::style;

pub fn execute(launch: Option<String>) -> Result<()> {
    if let Some(emulator_name) = launch {
        println!("{}", style(format!("Launching emulator: {}", emulator_name)).green().bold());
        println!();
        println!("{}", style("Note: Emulator management not yet implemented").yellow());
        println!("  Use platform-specific tools:");
        println!("  • Android: emulator -avd <name>");
        println!("  • iOS: xcrun simctl boot <device-id>");
    } else {
        println!("{}", style("Available emulators:").green().bold());
        println!();
        println!("{}", style("Note: Emulator listing not yet implemented").yellow());
        println!("  Use platform-specific tools:");
        println!("  • Android: emulator -list-avds");
        println!("  • iOS: xcrun simctl list devices");
    }

    Ok(())
}
