use sprintpoints_core::Config;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config.platforms)?);
        return Ok(());
    }

    for (key, profile) in &config.platforms {
        println!(
            "{:<10} {} {:<12} engineers: {:<4} leave: {:<4} color: {}",
            key,
            profile.icon,
            profile.name,
            profile.engineers,
            profile.leave_days,
            profile.accent_color
        );
    }
    Ok(())
}
